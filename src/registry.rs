//! The option registry: the formal set of declared options and the actual
//! subset that has received an explicit value.
//!
//! A [`Registry`] is populated during a declaration phase, resolved once via
//! [`parse_from`](Registry::parse_from) (see the `resolve` module), and read
//! by application code afterwards. It is a single-threaded structure: callers
//! that share one across threads must serialize access themselves — the
//! registry makes no locking guarantees of its own.
//!
//! Iteration over either set is in lexicographic name order. That ordering is
//! a contract, not a convenience: it fixes the layout of generated default
//! files and keeps test output reproducible.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfrcError;
use crate::file;
use crate::option::ConfigOption;
use crate::value::Value;

/// Owns the declared options and drives value resolution.
pub struct Registry {
    pub(crate) name: String,
    pub(crate) formal: BTreeMap<String, ConfigOption>,
    pub(crate) actual: BTreeSet<String>,
    pub(crate) delimiter: String,
    pub(crate) path: PathBuf,
    pub(crate) parsed: bool,
    pub(crate) output: Option<Box<dyn Write + Send>>,
}

impl Registry {
    /// An empty registry named `name`, with the config file at the
    /// conventional `~/.{name}rc` location.
    pub fn new(name: &str) -> Self {
        Self::with_path(name, file::default_config_path(name))
    }

    /// An empty registry with an explicit config file path.
    pub fn with_path(name: &str, path: impl Into<PathBuf>) -> Self {
        Registry {
            name: name.to_string(),
            formal: BTreeMap::new(),
            actual: BTreeSet::new(),
            delimiter: "=".to_string(),
            path: path.into(),
            parsed: false,
            output: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the registry at a different config file. Call before
    /// [`parse_from`](Registry::parse_from); once the file phase has run it
    /// has no further effect.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Change the key/value delimiter (default `"="`). Affects both decoding
    /// and default-file generation.
    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.delimiter = delimiter.to_string();
    }

    /// Redirect diagnostic output (the "writing default configuration file"
    /// notice, `print_defaults`). Unset means standard error.
    pub fn set_output(&mut self, output: Box<dyn Write + Send>) {
        self.output = Some(output);
    }

    /// True once the one-shot resolution has run.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Register an option with an explicit [`Value`] cell.
    ///
    /// This is declaration-phase API: call it before resolution. The default
    /// text is snapshotted from `value` here and never changes afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or already registered. A duplicate name is a
    /// bug in the calling program's declaration code, fixable only by editing
    /// source, so it is not a recoverable error.
    pub fn var(&mut self, name: &str, help: &str, value: Value, in_flags: bool, in_config: bool) {
        assert!(!name.is_empty(), "{}: option name must not be empty", self.name);
        assert!(
            !self.formal.contains_key(name),
            "{}: option redefined: {name}",
            self.name
        );
        self.formal
            .insert(name.to_string(), ConfigOption::new(name, help, value, in_flags, in_config));
    }

    /// Register a boolean option.
    pub fn bool(&mut self, name: &str, default: bool, help: &str, in_flags: bool, in_config: bool) {
        self.var(name, help, Value::Bool(default), in_flags, in_config);
    }

    /// Register a 32-bit signed integer option.
    pub fn int(&mut self, name: &str, default: i32, help: &str, in_flags: bool, in_config: bool) {
        self.var(name, help, Value::Int(default), in_flags, in_config);
    }

    /// Register a 64-bit signed integer option.
    pub fn int64(&mut self, name: &str, default: i64, help: &str, in_flags: bool, in_config: bool) {
        self.var(name, help, Value::Int64(default), in_flags, in_config);
    }

    /// Register a 32-bit unsigned integer option.
    pub fn uint(&mut self, name: &str, default: u32, help: &str, in_flags: bool, in_config: bool) {
        self.var(name, help, Value::Uint(default), in_flags, in_config);
    }

    /// Register a 64-bit unsigned integer option.
    pub fn uint64(&mut self, name: &str, default: u64, help: &str, in_flags: bool, in_config: bool) {
        self.var(name, help, Value::Uint64(default), in_flags, in_config);
    }

    /// Register a floating-point option.
    pub fn float64(&mut self, name: &str, default: f64, help: &str, in_flags: bool, in_config: bool) {
        self.var(name, help, Value::Float(default), in_flags, in_config);
    }

    /// Register a string option.
    pub fn string(&mut self, name: &str, default: &str, help: &str, in_flags: bool, in_config: bool) {
        self.var(name, help, Value::Str(default.to_string()), in_flags, in_config);
    }

    /// Register a duration option.
    pub fn duration(
        &mut self,
        name: &str,
        default: Duration,
        help: &str,
        in_flags: bool,
        in_config: bool,
    ) {
        self.var(name, help, Value::Duration(default), in_flags, in_config);
    }

    /// Set the named option from text.
    ///
    /// Fails with [`UnknownOption`](ConfrcError::UnknownOption) for an
    /// unregistered name and [`InvalidValue`](ConfrcError::InvalidValue) when
    /// the text does not parse as the option's type. On success the option
    /// joins the actual set.
    pub fn set(&mut self, name: &str, text: &str) -> Result<(), ConfrcError> {
        let opt = self
            .formal
            .get_mut(name)
            .ok_or_else(|| ConfrcError::UnknownOption { name: name.to_string() })?;
        opt.value
            .parse_assign(text)
            .map_err(|reason| ConfrcError::InvalidValue {
                name: name.to_string(),
                value: text.to_string(),
                reason,
            })?;
        self.actual.insert(name.to_string());
        Ok(())
    }

    /// The descriptor for `name`, if registered.
    pub fn lookup(&self, name: &str) -> Option<&ConfigOption> {
        self.formal.get(name)
    }

    /// Whether `name` has received an explicit value from either source.
    pub fn is_set(&self, name: &str) -> bool {
        self.actual.contains(name)
    }

    /// Visit every registered option in lexicographic name order.
    pub fn visit_all(&self, mut f: impl FnMut(&ConfigOption)) {
        for opt in self.formal.values() {
            f(opt);
        }
    }

    /// Visit only the options that have been explicitly set, in lexicographic
    /// name order.
    pub fn visit(&self, mut f: impl FnMut(&ConfigOption)) {
        for name in &self.actual {
            if let Some(opt) = self.formal.get(name) {
                f(opt);
            }
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.lookup(name).and_then(|o| o.value.as_bool())
    }

    pub fn get_i32(&self, name: &str) -> Option<i32> {
        self.lookup(name).and_then(|o| o.value.as_i32())
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.lookup(name).and_then(|o| o.value.as_i64())
    }

    pub fn get_u32(&self, name: &str) -> Option<u32> {
        self.lookup(name).and_then(|o| o.value.as_u32())
    }

    pub fn get_u64(&self, name: &str) -> Option<u64> {
        self.lookup(name).and_then(|o| o.value.as_u64())
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.lookup(name).and_then(|o| o.value.as_f64())
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        self.lookup(name).and_then(|o| o.value.as_str().map(str::to_string))
    }

    pub fn get_duration(&self, name: &str) -> Option<Duration> {
        self.lookup(name).and_then(|o| o.value.as_duration())
    }

    /// Write every registered option's flag form, default, and help text to
    /// the diagnostic sink. String defaults are quoted.
    pub fn print_defaults(&mut self) {
        let lines: Vec<String> = self
            .formal
            .values()
            .map(|opt| {
                if matches!(opt.value, Value::Str(_)) {
                    format!("  --{}={:?}: {}", opt.name, opt.default_text, opt.help)
                } else {
                    format!("  --{}={}: {}", opt.name, opt.default_text, opt.help)
                }
            })
            .collect();
        for line in lines {
            self.write_line(&line);
        }
    }

    /// Best-effort line write to the diagnostic sink (stderr when unset).
    pub(crate) fn write_line(&mut self, line: &str) {
        match &mut self.output {
            Some(sink) => {
                let _ = writeln!(sink, "{line}");
            }
            None => eprintln!("{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::with_path("testapp", "/tmp/unused")
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = registry();
        reg.string("species", "gopher", "the species we are studying", true, true);

        let opt = reg.lookup("species").unwrap();
        assert_eq!(opt.name, "species");
        assert_eq!(opt.default_text, "gopher");
        assert!(opt.in_flags);
        assert!(opt.in_config);
        assert!(reg.lookup("missing").is_none());
    }

    #[test]
    #[should_panic(expected = "option redefined: species")]
    fn duplicate_registration_panics() {
        let mut reg = registry();
        reg.string("species", "gopher", "", true, true);
        // Identical re-registration is still a caller bug.
        reg.string("species", "gopher", "", true, true);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_name_panics() {
        let mut reg = registry();
        reg.bool("", false, "", true, true);
    }

    #[test]
    fn set_unknown_name_errors() {
        let mut reg = registry();
        let err = reg.set("ghost", "1").unwrap_err();
        assert!(matches!(err, ConfrcError::UnknownOption { name } if name == "ghost"));
    }

    #[test]
    fn set_invalid_value_errors() {
        let mut reg = registry();
        reg.uint("port", 8080, "listen port", true, true);
        let err = reg.set("port", "eighty").unwrap_err();
        match err {
            ConfrcError::InvalidValue { name, value, .. } => {
                assert_eq!(name, "port");
                assert_eq!(value, "eighty");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        // A failed set does not mark the option as set.
        assert!(!reg.is_set("port"));
        assert_eq!(reg.get_u32("port"), Some(8080));
    }

    #[test]
    fn set_mutates_cell_and_actual() {
        let mut reg = registry();
        reg.uint("port", 8080, "", true, true);
        assert!(!reg.is_set("port"));

        reg.set("port", "9090").unwrap();
        assert!(reg.is_set("port"));
        assert_eq!(reg.get_u32("port"), Some(9090));
        assert_eq!(reg.lookup("port").unwrap().default_text, "8080");
    }

    #[test]
    fn visit_all_is_lexicographic() {
        let mut reg = registry();
        reg.bool("zeta", false, "", true, true);
        reg.bool("alpha", false, "", true, true);
        reg.bool("mid", false, "", true, true);

        let mut names = Vec::new();
        reg.visit_all(|opt| names.push(opt.name.clone()));
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn visit_covers_only_set_options() {
        let mut reg = registry();
        reg.bool("zeta", false, "", true, true);
        reg.bool("alpha", false, "", true, true);
        reg.set("zeta", "true").unwrap();

        let mut names = Vec::new();
        reg.visit(|opt| names.push(opt.name.clone()));
        assert_eq!(names, ["zeta"]);
    }

    #[test]
    fn typed_getters() {
        let mut reg = registry();
        reg.bool("b", true, "", true, true);
        reg.int("i", -1, "", true, true);
        reg.int64("i64", -2, "", true, true);
        reg.uint("u", 3, "", true, true);
        reg.uint64("u64", 4, "", true, true);
        reg.float64("f", 0.5, "", true, true);
        reg.string("s", "hi", "", true, true);
        reg.duration("d", Duration::from_secs(5), "", true, true);

        assert_eq!(reg.get_bool("b"), Some(true));
        assert_eq!(reg.get_i32("i"), Some(-1));
        assert_eq!(reg.get_i64("i64"), Some(-2));
        assert_eq!(reg.get_u32("u"), Some(3));
        assert_eq!(reg.get_u64("u64"), Some(4));
        assert_eq!(reg.get_f64("f"), Some(0.5));
        assert_eq!(reg.get_string("s"), Some("hi".to_string()));
        assert_eq!(reg.get_duration("d"), Some(Duration::from_secs(5)));

        // Wrong-type reads are None, not coerced.
        assert_eq!(reg.get_bool("i"), None);
        assert_eq!(reg.get_string("b"), None);
    }

    #[test]
    fn print_defaults_quotes_strings() {
        let mut reg = registry();
        reg.string("species", "gopher", "the species we are studying", true, true);
        reg.uint("port", 8080, "listen port", true, true);

        let shared = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        reg.set_output(Box::new(crate::fixtures::SharedSink(shared.clone())));
        reg.print_defaults();

        let text = String::from_utf8(shared.lock().unwrap().clone()).unwrap();
        assert!(text.contains("--species=\"gopher\": the species we are studying"));
        assert!(text.contains("--port=8080: listen port"));
    }
}
