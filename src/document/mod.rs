//! Minimal XML element tree.
//!
//! Builds an owned tree from the quick-xml event stream so callers can look
//! up children by tag and read element text. The pull parser is lenient, so
//! names, characters, comments and declarations are checked here as well;
//! only well-formed documents with a single root element are accepted.
//! General entities declared in the internal DTD subset are expanded.

pub mod checks;
pub mod entities;

use crate::error::{PatchError, Result};
use checks::{
    check_attribute_value, check_char_data, check_chars, check_comment, check_name,
    first_invalid_char,
};
use entities::EntityTable;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An XML element with its leading text and child elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub children: Vec<Element>,
    /// Text appearing before the first child element
    text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First direct child with the given tag
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == tag)
    }

    /// All direct children with the given tag, in document order
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == tag)
    }

    /// Leading text of the element, `None` if it has none
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text of the first direct child with the given tag
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.find(tag).and_then(Element::text)
    }

    fn push_text(&mut self, content: &str) {
        if !self.children.is_empty() || content.is_empty() {
            return;
        }
        self.text.get_or_insert_with(String::new).push_str(content);
    }

    /// Build an element from a start tag. Attributes are validated but not kept.
    fn from_start(
        start: &BytesStart<'_>,
        entities: &EntityTable,
        input: &str,
        offset: usize,
    ) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        check_name(&name).map_err(|e| malformed(input, offset, e))?;

        for attr in start.attributes() {
            let attr = attr.map_err(|e| malformed(input, offset, e))?;
            let key = String::from_utf8_lossy(attr.key.as_ref());
            check_name(&key).map_err(|e| malformed(input, offset, e))?;
            check_attribute_value(&attr.value).map_err(|e| malformed(input, offset, e))?;

            let value = attr
                .unescape_value_with(|entity| entities.resolve(entity))
                .map_err(|e| malformed(input, offset, e))?;
            check_chars(&value).map_err(|e| malformed(input, offset, e))?;
        }

        Ok(Element::new(name))
    }
}

/// Parse a complete XML document and return its root element
pub fn parse_document(input: &str) -> Result<Element> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    if let Some((offset, c)) = first_invalid_char(input) {
        return Err(malformed(
            input,
            offset,
            format!("not well-formed (invalid character U+{:04X})", c as u32),
        ));
    }

    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut entities = EntityTable::default();
    let mut seen_doctype = false;

    loop {
        let offset = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| malformed(input, reader.buffer_position() as usize, e))?;

        match event {
            Event::Start(start) => {
                reject_second_root(&stack, &root, input, offset)?;
                stack.push(Element::from_start(&start, &entities, input, offset)?);
            }
            Event::Empty(start) => {
                reject_second_root(&stack, &root, input, offset)?;
                let element = Element::from_start(&start, &entities, input, offset)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed(input, offset, "unmatched closing tag"))?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                let raw = std::str::from_utf8(&text).map_err(|e| malformed(input, offset, e))?;
                check_char_data(raw).map_err(|e| malformed(input, offset, e))?;

                let content = text
                    .unescape_with(|entity| entities.resolve(entity))
                    .map_err(|e| malformed(input, offset, e))?;
                check_chars(&content).map_err(|e| malformed(input, offset, e))?;
                push_text(&mut stack, &content, input, offset)?;
            }
            Event::CData(cdata) => {
                let content = std::str::from_utf8(&cdata).map_err(|e| malformed(input, offset, e))?;
                push_text(&mut stack, content, input, offset)?;
            }
            Event::Comment(comment) => {
                let body = std::str::from_utf8(&comment).map_err(|e| malformed(input, offset, e))?;
                check_comment(body).map_err(|e| malformed(input, offset, e))?;
            }
            Event::Decl(_) if offset != 0 => {
                return Err(malformed(input, offset, "XML or text declaration not at start of entity"));
            }
            Event::DocType(doctype) => {
                if seen_doctype || root.is_some() || !stack.is_empty() {
                    return Err(malformed(input, offset, "misplaced DOCTYPE declaration"));
                }
                seen_doctype = true;

                let body = std::str::from_utf8(&doctype).map_err(|e| malformed(input, offset, e))?;
                entities = EntityTable::from_doctype(body).map_err(|e| malformed(input, offset, e))?;
                tracing::debug!("Declared {} internal entities", entities.len());
            }
            Event::Eof => break,
            // The leading declaration and processing instructions carry no data
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(
            input,
            input.len(),
            format!("unclosed element <{}>", open.name),
        ));
    }

    root.ok_or_else(|| malformed(input, input.len(), "no element found"))
}

fn reject_second_root(
    stack: &[Element],
    root: &Option<Element>,
    input: &str,
    offset: usize,
) -> Result<()> {
    if stack.is_empty() && root.is_some() {
        return Err(malformed(input, offset, "junk after document element"));
    }
    Ok(())
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], content: &str, input: &str, offset: usize) -> Result<()> {
    match stack.last_mut() {
        Some(current) => current.push_text(content),
        None if content.trim().is_empty() => {}
        None => return Err(malformed(input, offset, "text outside of the root element")),
    }
    Ok(())
}

fn malformed(input: &str, offset: usize, reason: impl std::fmt::Display) -> PatchError {
    let (line, column) = line_col(input, offset);
    PatchError::MalformedInput(format!("{}: line {}, column {}", reason, line, column))
}

/// 1-based line and 0-based column of a byte offset
fn line_col(input: &str, offset: usize) -> (usize, usize) {
    let before = &input.as_bytes()[..offset.min(input.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = before.iter().rev().take_while(|&&b| b != b'\n').count();
    (line, column)
}
