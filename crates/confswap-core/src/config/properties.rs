//! Java-style `.properties` parsing and generation.
//!
//! The parser handles `key=value` lines, `#`/`!` comments, `\n`/`\t`/`\r`/
//! `\f`/`\\` escape sequences and values continued across physical lines
//! with a trailing backslash. Continuation fragments are concatenated with
//! no separator, then the assembled value is unescaped once.

use super::ConfigProperty;

/// Parses properties text into an ordered list of entries.
///
/// Lines without a `=` separator (that are not blank, comments or
/// continuation fragments) are silently skipped.
pub fn parse_properties(text: &str) -> Vec<ConfigProperty> {
    let mut properties = Vec::new();
    let mut current_key: Option<String> = None;
    let mut fragments: Vec<String> = Vec::new();
    let mut continuation = false;

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // Pure continuation fragment: trailing backslash, no separator.
        if ends_with_unescaped_backslash(line) && !line.contains('=') {
            if current_key.is_some() {
                fragments.push(line[..line.len() - 1].to_string());
                continuation = true;
            }
            continue;
        }

        // A continued value owns the next line; continuation mode ends at
        // the first line without a trailing backslash.
        if continuation && current_key.is_some() {
            if ends_with_unescaped_backslash(line) {
                fragments.push(line[..line.len() - 1].to_string());
            } else {
                fragments.push(line.to_string());
                continuation = false;
            }
            continue;
        }

        let Some(separator) = line.find('=') else {
            continue;
        };

        flush_pending(&mut properties, &mut current_key, &mut fragments);

        let key = line[..separator].trim().to_string();
        let value = &line[separator + 1..];

        if ends_with_unescaped_backslash(value) {
            fragments.push(value[..value.len() - 1].to_string());
            continuation = true;
        } else {
            fragments.push(value.to_string());
            continuation = false;
        }
        current_key = Some(key);
    }

    flush_pending(&mut properties, &mut current_key, &mut fragments);

    properties
}

/// Generates properties text, one `key=value` line per entry.
pub fn generate_properties(properties: &[ConfigProperty]) -> String {
    properties
        .iter()
        .map(|property| format!("{}={}", property.key, escape_value(&property.value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn flush_pending(
    properties: &mut Vec<ConfigProperty>,
    current_key: &mut Option<String>,
    fragments: &mut Vec<String>,
) {
    if let Some(key) = current_key.take() {
        let assembled = fragments.concat();
        properties.push(ConfigProperty::new(key, unescape_value(&assembled)));
    }
    fragments.clear();
}

// An even run of trailing backslashes is fully escaped; only an odd run
// leaves the last one free to act as a continuation marker.
fn ends_with_unescaped_backslash(s: &str) -> bool {
    s.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

// Substitution order matters: `\\` is resolved last, so a literal
// backslash must appear doubled in the source to survive.
fn unescape_value(value: &str) -> String {
    value
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
        .replace("\\f", "\u{000C}")
        .replace("\\\\", "\\")
}

// Exact inverse ordering: backslash first, so inserted escapes are not
// escaped again.
fn escape_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
        .replace('\r', "\\r")
        .replace('\u{000C}', "\\f")
}
