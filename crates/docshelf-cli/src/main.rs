use std::path::PathBuf;

use clap::Parser;

use docshelf_cli::{BuildOptions, build_manifest, leaf_count};

/// Generate the documents manifest consumed by the docshelf viewer.
///
/// Walks the source directory of original documents and writes a nested
/// JSON manifest mapping display names to rendered/original address pairs.
/// The defaults reproduce the standard deploy layout, so running with no
/// arguments from the site root is the normal invocation.
#[derive(Parser)]
#[command(name = "docshelf-cli")]
#[command(about = "Generate the docshelf documents manifest")]
struct Cli {
    /// Directory of original documents
    #[arg(long, default_value = "public/docs_raw")]
    source: PathBuf,

    /// Manifest output path
    #[arg(long, default_value = "public/docs_manifest.json")]
    output: PathBuf,

    /// URL prefix of converted-for-display files
    #[arg(long, default_value = "docs_html")]
    rendered_prefix: String,

    /// URL prefix of original files
    #[arg(long, default_value = "docs_raw")]
    raw_prefix: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = BuildOptions {
        rendered_prefix: cli.rendered_prefix,
        raw_prefix: cli.raw_prefix,
    };
    let manifest = build_manifest(&cli.source, &options)?;

    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&cli.output, json)?;

    println!(
        "Manifest generated at {} ({} entries)",
        cli.output.display(),
        leaf_count(&manifest)
    );
    Ok(())
}
