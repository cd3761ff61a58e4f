//! Workflow integration tests for docrefs.
//!
//! Tests the pipeline from a YAML collection through reference validation
//! to rendered documentation links.

use anyhow::Result;
use docrefs::{MarkdownRenderer, parse_collection, parse_references};

mod common;

/// Tests rendering validated references as a markdown link list.
///
/// References accepted by the extractor are fed back through the renderer;
/// only those with an explicit HTTP(S) scheme get the external icon.
#[test]
fn test_workflow_collection_to_rendered_links() -> Result<()> {
    // Arrange
    let entities = parse_collection(common::COLLECTION_YAML)?;
    let renderer = MarkdownRenderer::new();

    // Act
    let references: Vec<_> = entities
        .iter()
        .filter_map(|entity| parse_references(Some(entity)).ok())
        .flat_map(|list| list.to_strings())
        .collect();

    let markdown: String = references
        .iter()
        .map(|url| format!("- [{}]({})\n", url, url))
        .collect();
    let html = renderer.render(&markdown)?;

    // Assert
    assert_eq!(references.len(), 3, "Broken entry should be skipped");
    assert_eq!(
        html.matches("target=\"_blank\"").count(),
        3,
        "Every link should open in a new tab: {}",
        html
    );
    assert_eq!(
        html.matches("<svg").count(),
        2,
        "Only scheme qualified references are external: {}",
        html
    );

    Ok(())
}

/// Tests that each reference's external flag agrees with the renderer.
#[test]
fn test_workflow_external_flag_matches_icon() -> Result<()> {
    // Arrange
    let entities = parse_collection(common::COLLECTION_YAML)?;
    let renderer = MarkdownRenderer::new();

    for entity in &entities {
        let Ok(references) = parse_references(Some(entity)) else {
            continue;
        };

        for reference in &references {
            // Act
            let html = renderer.render(&format!("[doc]({})", reference))?;

            // Assert
            assert_eq!(
                html.contains("<svg"),
                reference.is_external(),
                "Icon presence should match external flag for {}",
                reference
            );
        }
    }

    Ok(())
}
