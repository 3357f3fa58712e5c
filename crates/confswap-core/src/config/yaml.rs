//! Simplified YAML parsing and generation.
//!
//! This is deliberately not a general YAML implementation: no anchors,
//! lists, flow collections, multi-document streams or block scalars. It
//! targets the nested key/value subset found in Spring-style config files,
//! assuming 2-space indentation. Other indentation widths are flattened
//! best-effort with the same `spaces / 2` rule; tabs do not count as
//! indentation.

use indexmap::IndexMap;

use super::ConfigProperty;
use crate::error::{ConvertError, Result};

/// Parses simplified YAML into an ordered list of dotted-key entries.
///
/// Maintains a stack of parent keys: a line with text after the `:` is a
/// leaf and emits `stack.path.key=value`; a line with nothing after the
/// `:` pushes its key as a parent. Leaf values lose one layer of matching
/// `"…"` or `'…'` quoting, with no escape processing.
pub fn parse_yaml(text: &str) -> Vec<ConfigProperty> {
    let mut properties = Vec::new();
    let mut stack: Vec<String> = Vec::new();

    for raw in text.lines() {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let leading_spaces = raw.len() - raw.trim_start_matches(' ').len();
        let indent_level = leading_spaces / 2;
        stack.truncate(indent_level);

        let Some(colon) = trimmed.find(':') else {
            continue;
        };

        let key = trimmed[..colon].trim();
        let value = trimmed[colon + 1..].trim();

        if value.is_empty() {
            stack.push(key.to_string());
        } else {
            let full_key = if stack.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", stack.join("."), key)
            };
            properties.push(ConfigProperty::new(full_key, strip_scalar_quotes(value)));
        }
    }

    properties
}

/// Generates simplified YAML from dotted-key entries.
///
/// Rebuilds the nested structure first, preserving first-seen order of
/// every key segment at each level. A key used both as a leaf and as a
/// parent prefix cannot be represented and fails with
/// [`ConvertError::KeyCollision`].
pub fn generate_yaml(properties: &[ConfigProperty]) -> Result<String> {
    let mut root: IndexMap<String, Node> = IndexMap::new();

    for property in properties {
        insert_path(&mut root, &property.key, &property.value)?;
    }

    let mut lines = Vec::new();
    write_branch(&root, 0, &mut lines);

    Ok(lines.join("\n"))
}

/// One node of the intermediate document tree.
#[derive(Debug)]
enum Node {
    Leaf(String),
    Branch(IndexMap<String, Node>),
}

fn insert_path(root: &mut IndexMap<String, Node>, key: &str, value: &str) -> Result<()> {
    let segments: Vec<&str> = key.split('.').collect();
    let mut current = root;

    for (index, segment) in segments.iter().enumerate() {
        if index == segments.len() - 1 {
            if matches!(current.get(*segment), Some(Node::Branch(_))) {
                return Err(ConvertError::key_collision(key));
            }
            current.insert((*segment).to_string(), Node::Leaf(value.to_string()));
        } else {
            match current
                .entry((*segment).to_string())
                .or_insert_with(|| Node::Branch(IndexMap::new()))
            {
                Node::Leaf(_) => {
                    return Err(ConvertError::key_collision(segments[..=index].join(".")));
                },
                Node::Branch(_) => {},
            }

            match current.get_mut(*segment) {
                Some(Node::Branch(children)) => current = children,
                _ => unreachable!("segment was just ensured to be a branch"),
            }
        }
    }

    Ok(())
}

fn write_branch(branch: &IndexMap<String, Node>, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);

    for (key, node) in branch {
        match node {
            Node::Branch(children) => {
                lines.push(format!("{indent}{key}:"));
                write_branch(children, depth + 1, lines);
            },
            Node::Leaf(value) => {
                lines.push(format!("{indent}{key}: {}", quote_scalar(value)));
            },
        }
    }
}

fn strip_scalar_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

// Quoting is a textual rule keyed on character class alone: any character
// outside letters, digits, whitespace, `.`, `_` and `-` forces quotes.
fn quote_scalar(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '_' | '-'));

    if plain {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pairs() {
        let result = parse_yaml("server:\n  port: 8080\n  host: localhost");

        assert_eq!(
            result,
            vec![
                ConfigProperty::new("server.port", "8080"),
                ConfigProperty::new("server.host", "localhost"),
            ]
        );
    }

    #[test]
    fn test_parse_strips_one_quote_layer() {
        let result = parse_yaml("message: \"Hello, World!\"\nsingle: 'Single quoted'");

        assert_eq!(
            result,
            vec![
                ConfigProperty::new("message", "Hello, World!"),
                ConfigProperty::new("single", "Single quoted"),
            ]
        );
    }

    #[test]
    fn test_parse_nested_structures() {
        let input = "spring:\n  datasource:\n    url: jdbc:mysql://localhost:3306/mydb\n    username: root\n    password: secret\n  redis:\n    host: localhost\n    port: 6379";

        assert_eq!(
            parse_yaml(input),
            vec![
                ConfigProperty::new("spring.datasource.url", "jdbc:mysql://localhost:3306/mydb"),
                ConfigProperty::new("spring.datasource.username", "root"),
                ConfigProperty::new("spring.datasource.password", "secret"),
                ConfigProperty::new("spring.redis.host", "localhost"),
                ConfigProperty::new("spring.redis.port", "6379"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let input = "# Configuration\nserver:\n  port: 8080\n\n# Database\ndb:\n  name: mydb";

        assert_eq!(
            parse_yaml(input),
            vec![
                ConfigProperty::new("server.port", "8080"),
                ConfigProperty::new("db.name", "mydb"),
            ]
        );
    }

    #[test]
    fn test_parse_sibling_after_deeper_block() {
        let input = "a:\n  b:\n    c: 1\n  d: 2\ne: 3";

        assert_eq!(
            parse_yaml(input),
            vec![
                ConfigProperty::new("a.b.c", "1"),
                ConfigProperty::new("a.d", "2"),
                ConfigProperty::new("e", "3"),
            ]
        );
    }

    #[test]
    fn test_parse_value_containing_colon() {
        // Only the first ':' splits key from value.
        let result = parse_yaml("url: jdbc:mysql://localhost:3306/mydb");
        assert_eq!(
            result,
            vec![ConfigProperty::new("url", "jdbc:mysql://localhost:3306/mydb")]
        );
    }

    #[test]
    fn test_generate_flat_keys() {
        let properties = vec![
            ConfigProperty::new("port", "8080"),
            ConfigProperty::new("host", "localhost"),
        ];

        assert_eq!(generate_yaml(&properties).unwrap(), "port: 8080\nhost: localhost");
    }

    #[test]
    fn test_generate_nested_keys() {
        let properties = vec![
            ConfigProperty::new("server.port", "8080"),
            ConfigProperty::new("server.host", "localhost"),
            ConfigProperty::new("spring.datasource.url", "jdbc:mysql://localhost:3306/mydb"),
        ];

        let expected = "server:\n  port: 8080\n  host: localhost\nspring:\n  datasource:\n    url: \"jdbc:mysql://localhost:3306/mydb\"";
        assert_eq!(generate_yaml(&properties).unwrap(), expected);
    }

    #[test]
    fn test_generate_quotes_special_characters() {
        let properties = vec![
            ConfigProperty::new("message", "Hello, World!"),
            ConfigProperty::new("special", "value:with@special#chars"),
            ConfigProperty::new("plain", "just words 1.2_3-4"),
        ];

        let output = generate_yaml(&properties).unwrap();
        assert!(output.contains("message: \"Hello, World!\""));
        assert!(output.contains("special: \"value:with@special#chars\""));
        assert!(output.contains("plain: just words 1.2_3-4"));
    }

    #[test]
    fn test_generate_escapes_inner_quotes() {
        let properties = vec![ConfigProperty::new("say", "a \"quoted\" word")];
        assert_eq!(
            generate_yaml(&properties).unwrap(),
            "say: \"a \\\"quoted\\\" word\""
        );
    }

    #[test]
    fn test_generate_rejects_leaf_parent_collision() {
        let properties = vec![
            ConfigProperty::new("a", "1"),
            ConfigProperty::new("a.b", "2"),
        ];

        let err = generate_yaml(&properties).unwrap_err();
        assert!(err.is_key_collision());
        assert!(format!("{}", err).contains("'a'"));
    }

    #[test]
    fn test_generate_rejects_parent_leaf_collision() {
        // Same collision, opposite insertion order.
        let properties = vec![
            ConfigProperty::new("a.b", "2"),
            ConfigProperty::new("a", "1"),
        ];

        assert!(generate_yaml(&properties).unwrap_err().is_key_collision());
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let properties = vec![
            ConfigProperty::new("server.port", "8080"),
            ConfigProperty::new("server.host", "localhost"),
            ConfigProperty::new("app.name", "demo"),
        ];

        let text = generate_yaml(&properties).unwrap();
        assert_eq!(parse_yaml(&text), properties);
    }
}
