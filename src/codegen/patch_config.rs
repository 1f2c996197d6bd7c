//! Template configuration for generated patches.
//!
//! The defaults reproduce the RimLife personality patch layout. A YAML file
//! can override the extension class, the selected def tag, and the output
//! file suffix; the personality payload itself is fixed.

use crate::error::{PatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Patch template settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    /// Tag of the records read from the root element
    pub trait_tag: String,
    /// XPath prefix selecting the def in the game's def database
    pub xpath_root: String,
    /// `Class` attribute of the mod extension list item
    pub extension_class: String,
    /// Appended to the input file stem to name the output file
    pub output_suffix: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            trait_tag: "TraitDef".to_string(),
            xpath_root: "Defs/TraitDef".to_string(),
            extension_class: "RimLife.PersonalityExtension".to_string(),
            output_suffix: "_CorrectedPatch.xml".to_string(),
        }
    }
}

impl PatchConfig {
    /// Load a patch configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PatchError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: PatchConfig = serde_yaml::from_str(&contents).map_err(|e| {
            PatchError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check that every template value is usable
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("trait_tag", &self.trait_tag),
            ("xpath_root", &self.xpath_root),
            ("extension_class", &self.extension_class),
            ("output_suffix", &self.output_suffix),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(PatchError::Config(format!("{} cannot be empty", key)));
            }
        }

        if self.output_suffix.contains(['/', '\\']) {
            return Err(PatchError::Config(format!(
                "output_suffix must not contain path separators: {}",
                self.output_suffix
            )));
        }

        Ok(())
    }

    /// XPath selecting the def whose `defName` equals `def_name`
    pub fn xpath_for(&self, def_name: &str) -> String {
        format!("{}[defName=\"{}\"]", self.xpath_root, def_name)
    }
}
