//! Type definitions for trait definitions and the patch operations derived
//! from them.

use crate::codegen::patch_config::PatchConfig;

/// Label used in comments when a degree variant has no label
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Degree used when a variant has no degree, and for singular traits
pub const DEFAULT_DEGREE: &str = "0";

/// The five personality dimensions, in emission order
pub const PERSONALITY_FIELDS: [&str; 5] = [
    "openness",
    "conscientiousness",
    "extraversion",
    "agreeableness",
    "neuroticism",
];

/// A `TraitDef` record read from the input document
#[derive(Debug, Clone, PartialEq)]
pub struct TraitDef {
    pub def_name: String,
    /// Entries of `degreeDatas`, in document order
    pub degree_datas: Vec<DegreeData>,
}

/// One `degreeDatas/li` entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegreeData {
    pub label: Option<String>,
    pub degree: Option<String>,
}

impl DegreeData {
    pub fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    pub fn degree_or_default(&self) -> &str {
        self.degree.as_deref().unwrap_or(DEFAULT_DEGREE)
    }
}

/// Comment placed above a personality record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordNote {
    Label(String),
    Singular,
}

/// One `<li>` inside the extension's `data` list.
///
/// Only the degree varies; every personality dimension is written as 0 and
/// left for manual editing.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityEntry {
    pub note: RecordNote,
    pub degree: String,
}

impl PersonalityEntry {
    pub fn for_degree(data: &DegreeData) -> Self {
        Self {
            note: RecordNote::Label(data.label_or_default().to_string()),
            degree: data.degree_or_default().to_string(),
        }
    }

    pub fn singular() -> Self {
        Self {
            note: RecordNote::Singular,
            degree: DEFAULT_DEGREE.to_string(),
        }
    }
}

/// A `PatchOperationAdd` targeting one trait definition
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOperation {
    pub def_name: String,
    pub xpath: String,
    pub entries: Vec<PersonalityEntry>,
}

impl PatchOperation {
    /// Build the operation for a trait: one entry per degree, or a single
    /// default entry when the trait has no degrees.
    pub fn from_trait_def(trait_def: &TraitDef, config: &PatchConfig) -> Self {
        let entries = if trait_def.degree_datas.is_empty() {
            vec![PersonalityEntry::singular()]
        } else {
            trait_def
                .degree_datas
                .iter()
                .map(PersonalityEntry::for_degree)
                .collect()
        };

        Self {
            def_name: trait_def.def_name.clone(),
            xpath: config.xpath_for(&trait_def.def_name),
            entries,
        }
    }
}

/// Build one operation per trait, preserving input order
pub fn build_operations(trait_defs: &[TraitDef], config: &PatchConfig) -> Vec<PatchOperation> {
    trait_defs
        .iter()
        .map(|trait_def| PatchOperation::from_trait_def(trait_def, config))
        .collect()
}
