//! Reusable HTML components
//!
//! Maud component functions for markup that is not produced by the
//! markdown formatter itself: the external link icon appended by the link
//! rules, and the page wrapper used for standalone previews.

pub mod icons;
pub mod layout;
