//! Variable-substitution templates used by string settings such as a model name.
//!
//! A template is plain text with `{expression}` placeholders. The expressions are opaque
//! to this crate; a caller-supplied resolver turns each one into text.

use tracing::warn;

/// Lists the placeholder expressions of `template`, left to right.
///
/// An unterminated `{` ends the scan.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                found.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    found
}

/// Replaces every placeholder of `template` with what `resolve` returns for it.
///
/// Placeholders the resolver cannot handle, and empty `{}` ones, become empty text.
/// Resolved text is not scanned again. An unterminated `{` and everything after it is
/// kept as is.
pub fn render<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            warn!(template, "unterminated placeholder, keeping the rest verbatim");
            break;
        };
        out.push_str(&rest[..start]);
        let expression = &after[..end];
        if !expression.is_empty() {
            match resolve(expression) {
                Some(value) => out.push_str(&value),
                None => warn!(expression, "could not resolve template placeholder"),
            }
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}
