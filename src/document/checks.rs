//! Well-formedness rules the pull parser does not enforce on its own.

/// `NameStartChar` from XML 1.0 (fifth edition)
pub fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}

/// `NameChar` from XML 1.0 (fifth edition)
pub fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

/// `Char` from XML 1.0: tab, newline, carriage return and everything from
/// U+0020 except U+FFFE and U+FFFF
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Validate an element, attribute or entity name
pub fn check_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(format!("not well-formed (invalid name '{}')", name))
    }
}

/// Byte offset and value of the first character not allowed in XML
pub fn first_invalid_char(s: &str) -> Option<(usize, char)> {
    s.char_indices().find(|&(_, c)| !is_xml_char(c))
}

pub fn check_chars(s: &str) -> Result<(), String> {
    match first_invalid_char(s) {
        Some((_, c)) => Err(format!("not well-formed (invalid character U+{:04X})", c as u32)),
        None => Ok(()),
    }
}

/// Comment bodies may not contain `--` or end with `-`
pub fn check_comment(body: &str) -> Result<(), String> {
    if body.contains("--") || body.ends_with('-') {
        return Err("not well-formed ('--' inside comment)".to_string());
    }
    Ok(())
}

/// Raw character data may not contain the CDATA terminator
pub fn check_char_data(raw: &str) -> Result<(), String> {
    if raw.contains("]]>") {
        return Err("not well-formed (']]>' in character data)".to_string());
    }
    Ok(())
}

/// Raw attribute values may not contain `<`
pub fn check_attribute_value(raw: &[u8]) -> Result<(), String> {
    if raw.contains(&b'<') {
        return Err("not well-formed ('<' in attribute value)".to_string());
    }
    Ok(())
}
