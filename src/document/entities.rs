//! Entity resolution for the internal DTD subset.
//!
//! General entities declared with a quoted literal value in the DOCTYPE
//! internal subset are expanded as text. Parameter entities and external
//! (`SYSTEM`/`PUBLIC`) entities are not loaded; references to them stay
//! unresolved and fail the parse.

use crate::document::checks::check_name;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static ENTITY_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<!ENTITY\s+([^\s%"'>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#).unwrap()
});

/// Predefined and internally declared general entities
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    declared: HashMap<String, String>,
}

impl EntityTable {
    /// Collect entity declarations from the body of a DOCTYPE declaration
    pub fn from_doctype(doctype: &str) -> Result<Self, String> {
        let mut table = Self::default();

        for caps in ENTITY_DECL.captures_iter(doctype) {
            let name = &caps[1];
            check_name(name)?;

            let literal = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let value = quick_xml::escape::unescape_with(literal, |entity| table.resolve(entity))
                .map_err(|e| format!("invalid value for entity '{}': {}", name, e))?
                .into_owned();

            // The first declaration of an entity is binding
            table.declared.entry(name.to_string()).or_insert(value);
        }

        Ok(table)
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        match name {
            "lt" => Some("<"),
            "gt" => Some(">"),
            "amp" => Some("&"),
            "apos" => Some("'"),
            "quot" => Some("\""),
            _ => self.declared.get(name).map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
