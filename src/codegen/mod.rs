//! Patch generation from trait definition files.
//!
//! This module turns a def file into a personality patch template: load the
//! `TraitDef` records, build one operation per record, render the patch, and
//! write it next to the input.

pub mod types;
pub mod xml_loader;
pub mod patch_xml;
pub mod patch_config;
pub mod utils;
pub mod fs_utils;

// Re-export key types
pub use types::{DegreeData, PatchOperation, PersonalityEntry, RecordNote, TraitDef, build_operations};
pub use xml_loader::{extract_trait_defs, load_trait_defs};
pub use patch_xml::{render_patch, write_patch};
pub use patch_config::PatchConfig;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Outcome of a successful generation run
#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    pub output_path: PathBuf,
    pub operations: usize,
    pub entries: usize,
}

/// Generate the corrected patch template for a trait definition file
///
/// The whole document is rendered in memory before anything is written, so a
/// failure never leaves a partial output file behind.
///
/// # Example
///
/// ```rust,no_run
/// use traitpatch::codegen::{generate_patch_from_file, PatchConfig};
///
/// let report = generate_patch_from_file("Defs/Traits.xml", &PatchConfig::default()).unwrap();
/// assert!(report.output_path.ends_with("Traits_CorrectedPatch.xml"));
/// ```
pub fn generate_patch_from_file<P: AsRef<Path>>(input: P, config: &PatchConfig) -> Result<PatchReport> {
    let input = input.as_ref();
    config.validate()?;

    let trait_defs = load_trait_defs(input, config)?;
    let operations = build_operations(&trait_defs, config);
    let content = render_patch(&operations, config)?;

    let output_path = fs_utils::output_path_for(input, &config.output_suffix);
    std::fs::write(&output_path, content)?;

    let report = PatchReport {
        output_path,
        operations: operations.len(),
        entries: operations.iter().map(|op| op.entries.len()).sum(),
    };

    tracing::info!(
        "Wrote {} operations ({} personality entries) to {}",
        report.operations,
        report.entries,
        report.output_path.display()
    );

    Ok(report)
}
