//! Patch XML generation.
//!
//! Emits a `<Patch>` document with one `PatchOperationAdd` per trait. Each
//! operation attaches a personality mod extension whose `data` list holds one
//! zero-valued entry per degree.

use crate::codegen::patch_config::PatchConfig;
use crate::codegen::types::{PatchOperation, PersonalityEntry, RecordNote, PERSONALITY_FIELDS};
use crate::codegen::utils::{escape_xml_attr, escape_xml_text, sanitize_comment};
use crate::error::Result;
use std::io::Write;

/// Write the full patch document.
///
/// Lines are separated by `\n` and the document ends right after the closing
/// `</Patch>` tag, without a trailing newline.
pub fn write_patch<W: Write>(
    writer: &mut W,
    operations: &[PatchOperation],
    config: &PatchConfig,
) -> std::io::Result<()> {
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"utf-8\" ?>")?;
    writeln!(writer, "<Patch>")?;
    writeln!(writer)?;

    for operation in operations {
        write_operation(writer, operation, config)?;
        writeln!(writer)?;
    }

    write!(writer, "</Patch>")
}

/// Render the patch document to a string
pub fn render_patch(operations: &[PatchOperation], config: &PatchConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_patch(&mut buffer, operations, config)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_operation<W: Write>(
    writer: &mut W,
    operation: &PatchOperation,
    config: &PatchConfig,
) -> std::io::Result<()> {
    writeln!(writer, "  <!-- Trait: {} -->", sanitize_comment(&operation.def_name))?;
    writeln!(writer, "  <Operation Class=\"PatchOperationAdd\">")?;
    writeln!(writer, "    <xpath>{}</xpath>", escape_xml_text(&operation.xpath))?;
    writeln!(writer, "    <value>")?;
    writeln!(writer, "      <modExtensions>")?;
    writeln!(writer, "        <li Class=\"{}\">", escape_xml_attr(&config.extension_class))?;
    writeln!(writer, "          <data>")?;

    for entry in &operation.entries {
        write_entry(writer, entry)?;
    }

    writeln!(writer, "          </data>")?;
    writeln!(writer, "        </li>")?;
    writeln!(writer, "      </modExtensions>")?;
    writeln!(writer, "    </value>")?;
    writeln!(writer, "  </Operation>")?;

    Ok(())
}

fn write_entry<W: Write>(writer: &mut W, entry: &PersonalityEntry) -> std::io::Result<()> {
    match &entry.note {
        RecordNote::Label(label) => {
            writeln!(writer, "            <!-- Label: {} -->", sanitize_comment(label))?
        }
        RecordNote::Singular => writeln!(writer, "            <!-- Singular Trait -->")?,
    }

    writeln!(writer, "            <li>")?;
    writeln!(writer, "              <degree>{}</degree>", escape_xml_text(&entry.degree))?;
    for field in PERSONALITY_FIELDS {
        writeln!(writer, "              <{field}>0</{field}>")?;
    }
    writeln!(writer, "            </li>")?;

    Ok(())
}
