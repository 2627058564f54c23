//! The option descriptor: one registered configuration option.

use crate::value::Value;

/// A single registered option: name, help text, current value, a frozen
/// snapshot of the default, and the two source-capability flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOption {
    /// Unique, non-empty option name.
    pub name: String,
    /// Help text, emitted as a comment above the option in generated files.
    pub help: String,
    /// The current typed value. Mutated by `Registry::set`.
    pub value: Value,
    /// Textual rendering of the value at registration time. Never changes
    /// afterwards; this is what a generated default file contains.
    pub default_text: String,
    /// May be set from the command line.
    pub in_flags: bool,
    /// May be set from the configuration file.
    pub in_config: bool,
}

impl ConfigOption {
    pub(crate) fn new(name: &str, help: &str, value: Value, in_flags: bool, in_config: bool) -> Self {
        let default_text = value.render();
        ConfigOption {
            name: name.to_string(),
            help: help.to_string(),
            value,
            default_text,
            in_flags,
            in_config,
        }
    }

    /// Boolean options may appear on the command line as a bare `--name`,
    /// meaning `true`. A capability of the cell variant, not a runtime probe.
    pub fn is_bool_flag(&self) -> bool {
        matches!(self.value, Value::Bool(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_text_snapshots_initial_value() {
        let mut opt = ConfigOption::new("port", "listen port", Value::Uint(8080), true, true);
        assert_eq!(opt.default_text, "8080");

        opt.value.parse_assign("9090").unwrap();
        assert_eq!(opt.value, Value::Uint(9090));
        assert_eq!(opt.default_text, "8080", "default snapshot must not move");
    }

    #[test]
    fn bool_shorthand_capability() {
        let flag = ConfigOption::new("debug", "", Value::Bool(false), true, false);
        assert!(flag.is_bool_flag());

        let other = ConfigOption::new("host", "", Value::Str("x".into()), true, false);
        assert!(!other.is_bool_flag());
    }
}
