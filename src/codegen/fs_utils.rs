//! Filesystem utilities for patch generation

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Derive the output path: same directory, input file stem plus `suffix`.
///
/// `Defs/Traits.xml` becomes `Defs/Traits_CorrectedPatch.xml` for the
/// default suffix. Only the last extension is stripped.
pub fn output_path_for<P: AsRef<Path>>(input: P, suffix: &str) -> PathBuf {
    let input = input.as_ref();
    let mut name: OsString = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    input.with_file_name(name)
}
