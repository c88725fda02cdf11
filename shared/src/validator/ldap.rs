//! LDAP syntax validators
//!
//! Shape checks for distinguished names (RFC 4514) and search filters
//! (RFC 4515). These validate syntax only; whether the entry exists is the
//! directory's business.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::Diagnostics;
use crate::validator::{should_skip, ValidateRequest, Validator};

static ATTRIBUTE_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Descriptor (keystring) or numeric OID
    Regex::new(r"^([A-Za-z][A-Za-z0-9-]*|\d+(\.\d+)*)$").expect("attribute type pattern is valid")
});

static FILTER_ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Filters additionally allow options (";binary") and matching-rule
    // suffixes ("attr:caseIgnoreMatch:")
    Regex::new(r"^([A-Za-z][A-Za-z0-9.;:-]*|\d+(\.\d+)*)$").expect("filter attribute pattern is valid")
});

// Split on an unescaped separator; backslash escapes are kept intact.
fn split_unescaped(value: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in value.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            current.push(c);
            escaped = true;
        } else if c == separator {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

fn validate_dn_value(value: &str) -> Result<(), String> {
    let chars: Vec<char> = value.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' {
            let Some(&next) = chars.get(i + 1) else {
                return Err("value ends with a dangling escape".to_string());
            };
            if next.is_ascii_hexdigit() {
                // Hex escape needs two digits
                if !chars.get(i + 2).is_some_and(|c| c.is_ascii_hexdigit()) {
                    return Err(format!("incomplete hex escape in '{value}'"));
                }
                i += 3;
                continue;
            }
            i += 2;
            continue;
        }
        i += 1;
    }
    Ok(())
}

fn validate_dn(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("DN must not be empty".to_string());
    }

    for rdn in split_unescaped(value, ',') {
        let rdn = rdn.trim();
        if rdn.is_empty() {
            return Err("DN contains an empty relative distinguished name".to_string());
        }
        for pair in split_unescaped(rdn, '+') {
            let parts = split_unescaped(&pair, '=');
            if parts.len() != 2 {
                return Err(format!("'{pair}' is not an attribute=value pair"));
            }
            let attribute = parts[0].trim();
            if !ATTRIBUTE_TYPE_RE.is_match(attribute) {
                return Err(format!("invalid attribute type '{attribute}'"));
            }
            validate_dn_value(&parts[1])?;
        }
    }
    Ok(())
}

fn validate_filter(value: &str) -> Result<(), String> {
    let chars: Vec<char> = value.chars().collect();
    let mut pos = 0;
    parse_filter(&chars, &mut pos)?;
    if pos != chars.len() {
        return Err("unexpected characters after filter".to_string());
    }
    Ok(())
}

fn parse_filter(chars: &[char], pos: &mut usize) -> Result<(), String> {
    if chars.get(*pos) != Some(&'(') {
        return Err("filter must start with '('".to_string());
    }
    *pos += 1;

    match chars.get(*pos) {
        Some('&') | Some('|') => {
            *pos += 1;
            let mut count = 0;
            while chars.get(*pos) == Some(&'(') {
                parse_filter(chars, pos)?;
                count += 1;
            }
            if count == 0 {
                return Err("'&' and '|' require at least one nested filter".to_string());
            }
        }
        Some('!') => {
            *pos += 1;
            parse_filter(chars, pos)?;
        }
        _ => parse_item(chars, pos)?,
    }

    if chars.get(*pos) != Some(&')') {
        return Err("unbalanced parentheses in filter".to_string());
    }
    *pos += 1;
    Ok(())
}

fn parse_item(chars: &[char], pos: &mut usize) -> Result<(), String> {
    let start = *pos;
    while *pos < chars.len() && chars[*pos] != ')' {
        if chars[*pos] == '(' {
            return Err("unexpected '(' inside filter item".to_string());
        }
        *pos += 1;
    }
    let item: String = chars[start..*pos].iter().collect();

    let Some(eq) = item.find('=') else {
        return Err(format!("'{item}' is missing a comparison operator"));
    };
    // ~=, >= and <= end at the same '='
    let attr_end = match item[..eq].chars().last() {
        Some('~') | Some('>') | Some('<') => eq - 1,
        _ => eq,
    };
    let attribute = &item[..attr_end];
    if !FILTER_ATTRIBUTE_RE.is_match(attribute) {
        return Err(format!("invalid filter attribute '{attribute}'"));
    }

    // Filter values escape with \XX hex pairs
    let value = &item[eq + 1..];
    let value_chars: Vec<char> = value.chars().collect();
    let mut i = 0;
    while i < value_chars.len() {
        if value_chars[i] == '\\' {
            let two_hex = value_chars.get(i + 1).is_some_and(|c| c.is_ascii_hexdigit())
                && value_chars.get(i + 2).is_some_and(|c| c.is_ascii_hexdigit());
            if !two_hex {
                return Err(format!("invalid escape sequence in '{value}'"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

struct LdapDnValidator;

impl Validator for LdapDnValidator {
    fn description(&self) -> String {
        "value must be a valid LDAP distinguished name".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        if should_skip(&request.value) {
            return;
        }
        let Some(value) = request.value.as_str() else {
            diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid Attribute Value",
                format!("expected {} to be a string", request.path),
            );
            return;
        };
        if let Err(err) = validate_dn(value) {
            diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid LDAP Domain Name",
                format!("{value} is not a valid LDAP Domain Name: {err}"),
            );
        }
    }
}

pub fn ldap_dn() -> Arc<dyn Validator> {
    Arc::new(LdapDnValidator)
}

struct LdapFilterValidator;

impl Validator for LdapFilterValidator {
    fn description(&self) -> String {
        "value must be a valid LDAP search filter".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        if should_skip(&request.value) {
            return;
        }
        let Some(value) = request.value.as_str() else {
            diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid Attribute Value",
                format!("expected {} to be a string", request.path),
            );
            return;
        };
        if let Err(err) = validate_filter(value) {
            diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid LDAP Filter",
                format!("{value} is not a valid LDAP Filter: {err}"),
            );
        }
    }
}

pub fn ldap_filter() -> Arc<dyn Validator> {
    Arc::new(LdapFilterValidator)
}
