//! The flat key/value file codec: pure text in, pure text out.
//!
//! No I/O happens here — `decode` takes file contents and `encode_defaults`
//! returns the document to write, which keeps the whole codec testable with
//! string literals. The grammar per line is:
//!
//! ```text
//! ws* '#' anything        comment
//! ws*                     blank
//! ws* NAME ws* DELIM ws* VALUE ws*
//! ```
//!
//! The value is everything after the *first* delimiter occurrence, trimmed.
//! There is no escaping and no trailing-comment support: a `#` after the
//! delimiter is part of the value.

use std::path::Path;

use crate::error::ConfrcError;
use crate::option::ConfigOption;

/// Decode file contents into `(name, value)` pairs in file order.
///
/// Blank lines and lines whose first non-whitespace character is `#` carry no
/// entry. A non-comment line without the delimiter fails with
/// [`MalformedLine`](ConfrcError::MalformedLine), reporting the 1-based line
/// number; `path` is only used for that report.
pub fn decode(
    content: &str,
    delimiter: &str,
    path: &Path,
) -> Result<Vec<(String, String)>, ConfrcError> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once(delimiter) else {
            return Err(ConfrcError::MalformedLine {
                path: path.to_path_buf(),
                line: index + 1,
                delimiter: delimiter.to_string(),
            });
        };
        entries.push((name.trim().to_string(), value.trim().to_string()));
    }

    Ok(entries)
}

/// Render the default configuration file for the given options.
///
/// Emits a two-line commented header, then one block per option that allows
/// file configuration: its help text as a comment, then
/// `name<delimiter>default`. The caller supplies options in the order they
/// should appear (the registry's lexicographic order) and the timestamp
/// already formatted, which keeps this function deterministic for tests.
///
/// The output decodes back to exactly the `(name, default)` pairs emitted.
pub fn encode_defaults<'a>(
    program: &str,
    timestamp: &str,
    delimiter: &str,
    options: impl IntoIterator<Item = &'a ConfigOption>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Default config file for {program}\n"));
    out.push_str(&format!("# Written on {timestamp}\n\n"));

    for opt in options {
        if !opt.in_config {
            continue;
        }
        out.push_str(&format!("# {}\n", opt.help));
        out.push_str(&format!("{}{delimiter}{}\n\n", opt.name, opt.default_text));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::path::PathBuf;

    fn decode_ok(content: &str, delimiter: &str) -> Vec<(String, String)> {
        decode(content, delimiter, &PathBuf::from("/tmp/.apprc")).unwrap()
    }

    fn opt(name: &str, help: &str, value: Value, in_config: bool) -> ConfigOption {
        ConfigOption::new(name, help, value, true, in_config)
    }

    #[test]
    fn decode_basic_pairs() {
        let entries = decode_ok("species=gopher\nport=8080\n", "=");
        assert_eq!(
            entries,
            [
                ("species".to_string(), "gopher".to_string()),
                ("port".to_string(), "8080".to_string()),
            ]
        );
    }

    #[test]
    fn decode_trims_whitespace() {
        let entries = decode_ok("  species =  gopher  \n", "=");
        assert_eq!(entries, [("species".to_string(), "gopher".to_string())]);
    }

    #[test]
    fn decode_skips_blank_and_comment_lines() {
        let noisy = "\n# leading comment\n\nspecies=gopher\n   \n  # indented comment\nport=8080\n\n";
        let clean = "species=gopher\nport=8080\n";
        assert_eq!(decode_ok(noisy, "="), decode_ok(clean, "="));
    }

    #[test]
    fn decode_splits_on_first_delimiter_only() {
        let entries = decode_ok("url=http://example.com/?a=b\n", "=");
        assert_eq!(
            entries,
            [("url".to_string(), "http://example.com/?a=b".to_string())]
        );
    }

    #[test]
    fn decode_keeps_hash_inside_value() {
        // Trailing comments are not a thing: the '#' belongs to the value.
        let entries = decode_ok("color=dark #ish\n", "=");
        assert_eq!(entries, [("color".to_string(), "dark #ish".to_string())]);
    }

    #[test]
    fn decode_missing_delimiter_is_malformed() {
        let err = decode("species=gopher\njust some words\n", "=", &PathBuf::from("/p/.rc"))
            .unwrap_err();
        match err {
            ConfrcError::MalformedLine { line, path, .. } => {
                assert_eq!(line, 2);
                assert_eq!(path, PathBuf::from("/p/.rc"));
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn decode_honors_custom_delimiter() {
        let entries = decode_ok("species: gopher\n", ":");
        assert_eq!(entries, [("species".to_string(), "gopher".to_string())]);
        // With ':' as delimiter, '=' is just value text.
        let entries = decode_ok("expr: a=b\n", ":");
        assert_eq!(entries, [("expr".to_string(), "a=b".to_string())]);
    }

    #[test]
    fn encode_shape() {
        let species = opt(
            "species",
            "the species we are studying",
            Value::Str("gopher".into()),
            true,
        );
        let doc = encode_defaults("zoo", "01 Jan 26 12:00 +0000", "=", [&species]);
        assert_eq!(
            doc,
            "# Default config file for zoo\n\
             # Written on 01 Jan 26 12:00 +0000\n\n\
             # the species we are studying\n\
             species=gopher\n\n"
        );
    }

    #[test]
    fn encode_skips_flag_only_options() {
        let flag_only = opt("alive", "set false to kill", Value::Bool(true), false);
        let both = opt("furry", "furry or not", Value::Bool(true), true);
        let doc = encode_defaults("zoo", "ts", "=", [&flag_only, &both]);
        assert!(!doc.contains("alive"));
        assert!(doc.contains("furry=true"));
    }

    #[test]
    fn encode_then_decode_recovers_defaults() {
        let options = [
            opt("port", "listen port", Value::Uint(8080), true),
            opt("species", "the species", Value::Str("gopher".into()), true),
            opt("timeout", "give up after", Value::Duration(std::time::Duration::from_secs(90)), true),
        ];
        let doc = encode_defaults("zoo", "ts", "=", options.iter());
        let entries = decode_ok(&doc, "=");
        assert_eq!(
            entries,
            [
                ("port".to_string(), "8080".to_string()),
                ("species".to_string(), "gopher".to_string()),
                ("timeout".to_string(), "1m30s".to_string()),
            ]
        );
    }

    #[test]
    fn encode_decode_roundtrip_with_colon_delimiter() {
        let options = [opt("species", "the species", Value::Str("gopher".into()), true)];
        let doc = encode_defaults("zoo", "ts", ":", options.iter());
        assert!(doc.contains("species:gopher"));
        let entries = decode_ok(&doc, ":");
        assert_eq!(entries, [("species".to_string(), "gopher".to_string())]);
    }

    #[test]
    fn reencoding_decoded_defaults_is_stable() {
        let options = [
            opt("port", "listen port", Value::Uint(8080), true),
            opt("species", "the species", Value::Str("gopher".into()), true),
        ];
        let first = encode_defaults("zoo", "ts", "=", options.iter());
        let decoded = decode_ok(&first, "=");

        // Rebuild descriptors from the decoded pairs and encode again: the
        // semantic entries must be identical.
        let rebuilt: Vec<ConfigOption> = options
            .iter()
            .zip(&decoded)
            .map(|(orig, (name, value))| {
                assert_eq!(&orig.name, name);
                let mut copy = orig.clone();
                copy.value.parse_assign(value).unwrap();
                copy
            })
            .collect();
        let second = encode_defaults("zoo", "ts", "=", rebuilt.iter());
        assert_eq!(decode_ok(&second, "="), decoded);
    }
}
