//! Minimal `--key=value` token parsing, shared by commands that accept
//! ad hoc options (currently `serve`).

use indexmap::IndexMap;

/// Collects `--key=value` tokens into a map. A bare `--key` maps to
/// `"true"`; tokens without a `--` prefix are ignored; a repeated key keeps
/// the last value.
pub fn parse_key_value_flags(args: &[String]) -> IndexMap<String, String> {
    let mut flags = IndexMap::new();
    for token in args {
        let Some(stripped) = token.strip_prefix("--") else {
            continue;
        };
        match stripped.split_once('=') {
            Some((key, value)) => {
                flags.insert(key.to_string(), value.to_string());
            }
            None => {
                flags.insert(stripped.to_string(), String::from("true"));
            }
        }
    }
    flags
}
