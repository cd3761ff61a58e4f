use anyhow::{Context, Result, bail};
use docrefs::{Command, Config, MarkdownRenderer, page_wrapper, parse_collection, parse_references};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Refs { input } => print_references(input),
        Command::Render {
            input,
            output,
            no_open,
            ..
        } => render_markdown(input, output.as_deref(), &config.page_title(), !no_open),
    }
}

/// Initializes log output on stderr.
///
/// `--verbose` enables DEBUG level, otherwise RUST_LOG applies and
/// defaults to WARN.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints references of every entity in a YAML collection.
///
/// Each entity is parsed on its own: an entity with invalid documentation
/// is reported on stderr and the remaining entities are still printed.
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed, or if any entity
/// failed validation.
fn print_references(input: &Path) -> Result<()> {
    let yaml = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let entities = parse_collection(&yaml)
        .with_context(|| format!("Failed to parse collection {}", input.display()))?;

    let mut failed = 0;
    for (index, entity) in entities.iter().enumerate() {
        let label = entity
            .name
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1));

        match parse_references(Some(entity)) {
            Ok(references) => {
                for reference in &references {
                    println!("{}\t{}", label, reference);
                }
            }
            Err(e) => {
                eprintln!("Warning: {}: {}", label, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} entities have invalid documentation",
            failed,
            entities.len()
        );
    }

    Ok(())
}

/// Renders markdown file to stdout or to a preview page.
///
/// # Errors
///
/// Returns error if reading, rendering, writing, or opening the preview
/// fails.
fn render_markdown(
    input: &Path,
    output: Option<&Path>,
    title: &str,
    open_preview: bool,
) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let renderer = MarkdownRenderer::new();
    let html = renderer
        .render(&markdown)
        .with_context(|| format!("Failed to render {}", input.display()))?;

    let Some(output) = output else {
        print!("{}", html);
        return Ok(());
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    let page = page_wrapper(title, &html).into_string();
    fs::write(output, page).with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Generated: {}", output.display());

    if open_preview {
        open::that(output).with_context(|| format!("Failed to open {}", output.display()))?;
    }

    Ok(())
}
