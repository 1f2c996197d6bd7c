//! traitpatch CLI - personality patch templates from trait definition XML
//!
//! Reads one def file and writes `<stem>_CorrectedPatch.xml` next to it.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use traitpatch::{generate_patch_from_file, PatchConfig};

#[derive(Parser)]
#[command(name = "traitpatch")]
#[command(version, about = "Generate personality patch templates from trait definition XML", long_about = None)]
struct Cli {
    /// Path to the trait definition XML file
    xml_path: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let Some(xml_path) = cli.xml_path else {
        println!("Usage: traitpatch <xml_path>");
        return;
    };

    // Input errors are reported, not treated as a failed run
    match generate_patch_from_file(&xml_path, &PatchConfig::default()) {
        Ok(report) => {
            println!("Generated corrected template: {}", report.output_path.display());
            println!(
                "  ✓ {} operations, {} personality entries",
                report.operations, report.entries
            );
        }
        Err(e) => {
            tracing::debug!("Generation failed for {}: {:?}", xml_path.display(), e);
            println!("Error: {}", e);
        }
    }
}
