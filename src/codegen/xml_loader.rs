//! Trait definition loader.
//!
//! Reads a def file, parses it into an element tree, and extracts the
//! `TraitDef` records that are direct children of the root element.

use crate::codegen::patch_config::PatchConfig;
use crate::codegen::types::{DegreeData, TraitDef};
use crate::document::{parse_document, Element};
use crate::error::{PatchError, Result};
use std::fs;
use std::path::Path;

/// Load all trait definitions from an XML file
///
/// # Errors
///
/// * `NotFound` if `path` is not an existing file
/// * `MalformedInput` if the file is not UTF-8 or not well-formed XML
/// * `MissingDefName` if a trait definition has no `defName`
pub fn load_trait_defs<P: AsRef<Path>>(path: P, config: &PatchConfig) -> Result<Vec<TraitDef>> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(PatchError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| PatchError::MalformedInput(format!("input is not valid UTF-8: {}", e)))?;

    let root = parse_document(&content)?;
    let trait_defs = extract_trait_defs(&root, config)?;

    tracing::debug!("Loaded {} trait definitions from {}", trait_defs.len(), path.display());
    Ok(trait_defs)
}

/// Extract trait definitions from a parsed document root, in document order
pub fn extract_trait_defs(root: &Element, config: &PatchConfig) -> Result<Vec<TraitDef>> {
    root.find_all(&config.trait_tag)
        .enumerate()
        .map(|(i, element)| parse_trait_def(element, i + 1))
        .collect()
}

/// Parse a single trait definition; `index` is its 1-based position
fn parse_trait_def(element: &Element, index: usize) -> Result<TraitDef> {
    let def_name = element
        .child_text("defName")
        .ok_or(PatchError::MissingDefName { index })?
        .to_string();

    let degree_datas: Vec<DegreeData> = element
        .find("degreeDatas")
        .map(|container| container.find_all("li").map(parse_degree_data).collect())
        .unwrap_or_default();

    tracing::debug!("Trait {}: {} degree entries", def_name, degree_datas.len());

    Ok(TraitDef {
        def_name,
        degree_datas,
    })
}

fn parse_degree_data(element: &Element) -> DegreeData {
    DegreeData {
        label: element.child_text("label").map(str::to_string),
        degree: element.child_text("degree").map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(xml: &str) -> Result<Vec<TraitDef>> {
        let root = parse_document(xml)?;
        extract_trait_defs(&root, &PatchConfig::default())
    }

    #[test]
    fn test_extract_singular_and_degree_traits() {
        let defs = extract(
            r#"<Defs>
  <TraitDef>
    <defName>Brave</defName>
  </TraitDef>
  <TraitDef>
    <defName>Kind</defName>
    <degreeDatas>
      <li><label>Gentle</label><degree>1</degree></li>
      <li><label>VeryGentle</label><degree>2</degree></li>
    </degreeDatas>
  </TraitDef>
</Defs>"#,
        )
        .unwrap();

        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].def_name, "Brave");
        assert!(defs[0].degree_datas.is_empty());
        assert_eq!(defs[1].def_name, "Kind");
        assert_eq!(defs[1].degree_datas[0].label.as_deref(), Some("Gentle"));
        assert_eq!(defs[1].degree_datas[1].degree.as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_label_and_degree_stay_unset() {
        let defs = extract(
            "<Defs><TraitDef><defName>T</defName><degreeDatas><li><label/></li></degreeDatas></TraitDef></Defs>",
        )
        .unwrap();

        let data = &defs[0].degree_datas[0];
        assert_eq!(data.label, None);
        assert_eq!(data.degree, None);
        assert_eq!(data.label_or_default(), "Unknown");
        assert_eq!(data.degree_or_default(), "0");
    }

    #[test]
    fn test_only_direct_children_of_root_are_traits() {
        let defs = extract(
            r#"<Defs>
  <ThingDef><defName>Rock</defName></ThingDef>
  <Group><TraitDef><defName>Nested</defName></TraitDef></Group>
  <TraitDef><defName>Top</defName></TraitDef>
</Defs>"#,
        )
        .unwrap();

        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].def_name, "Top");
    }

    #[test]
    fn test_missing_def_name_reports_position() {
        let err = extract(
            "<Defs><TraitDef><defName>A</defName></TraitDef><TraitDef><label>x</label></TraitDef></Defs>",
        )
        .unwrap_err();

        assert!(matches!(err, PatchError::MissingDefName { index: 2 }));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = load_trait_defs("/nonexistent/Traits.xml", &PatchConfig::default()).unwrap_err();
        assert!(matches!(err, PatchError::NotFound { .. }));
    }
}
