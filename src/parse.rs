//! Definition-string parsing: turn a pipeline definition into its steps,
//! and a step into its modifier/parameter tokens.

use std::collections::BTreeMap;

const MODIFIERS: [&str; 3] = ["inv", "omit_fwd", "omit_inv"];

/// Strip a trailing `#`-introduced comment from one line.
fn remove_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Collapse runs of whitespace around the definition's delimiters
/// (`|`, `=`, `,`, `.`, `:`) down to the bare delimiter, and runs of
/// plain whitespace down to a single space.
fn normalize(definition: &str) -> String {
    let mut out = String::with_capacity(definition.len());
    let mut chars = definition.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while matches!(chars.peek(), Some(n) if n.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
            continue;
        }
        out.push(c);
    }

    let mut collapsed = String::with_capacity(out.len());
    let bytes: Vec<char> = out.chars().collect();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if c == ' ' && i + 1 < bytes.len() && is_delimiter(bytes[i + 1]) {
            i += 1;
            continue;
        }
        if is_delimiter(c) {
            collapsed.push(c);
            i += 1;
            while i < bytes.len() && bytes[i] == ' ' {
                i += 1;
            }
            continue;
        }
        collapsed.push(c);
        i += 1;
    }
    collapsed.trim().to_string()
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '|' | '=' | ',' | '.' | ':')
}

/// Split a (possibly multi-line, possibly commented) pipeline definition
/// into its `|`-separated steps, in canonical (comment-stripped,
/// whitespace-normalized) form. Empty steps are dropped, so `""`,
/// `"|"`, and `" ||| | "` all yield zero steps (a no-op pipeline).
#[must_use]
pub fn split_into_steps(definition: &str) -> Vec<String> {
    let unified_newlines = definition.replace('\r', "\n");
    let stripped: String = unified_newlines
        .lines()
        .map(remove_comment)
        .collect::<Vec<_>>()
        .join(" ");
    let normalized = normalize(&stripped);
    normalized
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The canonical, `" | "`-joined form of a definition's steps.
#[must_use]
pub fn normalized_definition(definition: &str) -> String {
    split_into_steps(definition).join(" | ")
}

/// Split one step into its parameter map. The method name (or, for a
/// pipeline, this is never called on the top-level definition) is stored
/// under the synthetic key `"_name"`. The three modifier tokens
/// (`inv`, `omit_fwd`, `omit_inv`) are recorded as empty-valued keys.
/// Remaining tokens are `key=value` pairs, or bare flags (empty value).
#[must_use]
pub fn split_into_parameters(step: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    let mut name_seen = false;

    for token in step.split_whitespace() {
        if MODIFIERS.contains(&token) {
            params.insert(token.to_string(), String::new());
            continue;
        }

        if !name_seen {
            params.insert("_name".to_string(), token.to_string());
            name_seen = true;
            continue;
        }

        match token.split_once('=') {
            Some((k, v)) => {
                params.insert(k.to_string(), v.to_string());
            }
            None => {
                params.insert(token.to_string(), String::new());
            }
        }
    }

    params
}
