//! Pending link tracking between link open and close boundaries.

use crate::error::LinkStateError;
use crate::util::is_external_url;

/// Target of the link currently being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkToken {
    href: String,
}

impl LinkToken {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns whether link points off-site (HTTP or HTTPS scheme).
    pub fn is_external(&self) -> bool {
        is_external_url(&self.href)
    }
}

/// Two state machine carrying a link's href from its open boundary to its
/// close boundary.
///
/// Links never nest, so at most one token is pending. Opening while a
/// token is pending, or closing with none, means the boundary stream is
/// malformed.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Idle,
    Pending(LinkToken),
}

impl LinkState {
    /// Records token for link that just opened.
    ///
    /// # Errors
    ///
    /// Returns [`LinkStateError::AlreadyPending`] if a previous link has not
    /// been closed. The pending token is left in place.
    pub fn open(&mut self, token: LinkToken) -> Result<(), LinkStateError> {
        match self {
            Self::Pending(pending) => Err(LinkStateError::AlreadyPending {
                pending: pending.href.clone(),
            }),
            Self::Idle => {
                *self = Self::Pending(token);
                Ok(())
            }
        }
    }

    /// Consumes token for link that just closed, returning to idle.
    ///
    /// # Errors
    ///
    /// Returns [`LinkStateError::NotPending`] if no link is open.
    pub fn close(&mut self) -> Result<LinkToken, LinkStateError> {
        match std::mem::take(self) {
            Self::Pending(token) => Ok(token),
            Self::Idle => Err(LinkStateError::NotPending),
        }
    }

    /// Checks that every opened link was closed.
    ///
    /// # Errors
    ///
    /// Returns [`LinkStateError::Unclosed`] if a token is still pending.
    pub fn finish(self) -> Result<(), LinkStateError> {
        match self {
            Self::Idle => Ok(()),
            Self::Pending(token) => Err(LinkStateError::Unclosed {
                pending: token.href,
            }),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}
