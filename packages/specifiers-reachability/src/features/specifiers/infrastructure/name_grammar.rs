// Name grammar shared by node and interface expressions
//
//   all | *          → every name
//   /pattern/        → case-insensitive regex
//   name, name, ...  → exact names (lowercased)

use regex::RegexBuilder;
use std::collections::BTreeSet;

/// Parsed name expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum NameExpr {
    All,
    Names(BTreeSet<String>),
    Regex(String),
}

pub(super) fn is_all_keyword(input: &str) -> bool {
    input == "*" || input.eq_ignore_ascii_case("all")
}

pub(super) fn parse_name_expr(input: &str) -> Result<NameExpr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }
    if is_all_keyword(input) {
        return Ok(NameExpr::All);
    }
    if let Some(rest) = input.strip_prefix('/') {
        let pattern = rest
            .strip_suffix('/')
            .ok_or_else(|| "regex is missing its closing '/'".to_string())?;
        return parse_regex(pattern).map(NameExpr::Regex);
    }

    let mut names = BTreeSet::new();
    for name in input.split(',').map(str::trim) {
        if name.is_empty() {
            return Err("empty name in list".to_string());
        }
        if let Some(bad) = name.chars().find(|c| !is_name_char(*c)) {
            return Err(format!("unexpected character '{}' in name '{}'", bad, name));
        }
        names.insert(name.to_ascii_lowercase());
    }
    Ok(NameExpr::Names(names))
}

fn parse_regex(pattern: &str) -> Result<String, String> {
    if pattern.is_empty() {
        return Err("empty regex".to_string());
    }
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map(|_| pattern.to_string())
        .map_err(|e| format!("invalid regex: {}", e))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':' | '/' | '@')
}
