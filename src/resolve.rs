//! The one-shot resolution driver.
//!
//! Resolution merges two sources under a strict precedence rule:
//!
//! 1. Every explicitly-supplied command-line entry is applied first.
//! 2. If no config file exists yet, a commented default file is generated
//!    and written (bootstrap) — nothing further to apply.
//! 3. Otherwise the file is decoded and each entry is applied *only if* the
//!    command line did not already set that name. Precedence is structural:
//!    membership in the actual set skips the file entry entirely, it is
//!    never applied-then-overwritten.
//!
//! The file phase runs at most once per registry; re-entering `parse_from`
//! after that applies the supplied flags and returns.

use crate::codec;
use crate::error::ConfrcError;
use crate::file;
use crate::registry::Registry;

/// Header timestamp format: RFC 822 with a numeric zone, locale-stable.
const TIMESTAMP_FORMAT: &str = "%d %b %y %H:%M %z";

impl Registry {
    /// Resolve option values from explicitly-supplied command-line entries
    /// plus the configuration file.
    ///
    /// `flags` yields `(name, value)` pairs for the flags the user actually
    /// typed, in any order — a well-formed command line supplies each name at
    /// most once; if it doesn't, the last entry wins. Unknown names and
    /// malformed values from either source are returned as errors, never
    /// panics: they are user input, not caller bugs.
    pub fn parse_from<I, N, V>(&mut self, flags: I) -> Result<(), ConfrcError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, text) in flags {
            self.set(name.as_ref(), text.as_ref())?;
        }

        if self.parsed {
            return Ok(());
        }

        if !file::exists(&self.path) {
            self.write_default_config()?;
            self.parsed = true;
            return Ok(());
        }

        let content = file::read_to_string(&self.path)?;
        let entries = codec::decode(&content, &self.delimiter, &self.path)?;
        for (name, text) in entries {
            if self.actual.contains(&name) {
                // Already set from the command line: the file never wins.
                continue;
            }
            self.set(&name, &text)?;
        }

        self.parsed = true;
        Ok(())
    }

    /// Write a config file at the registry's path containing every option
    /// that allows file configuration, with its registration-time default and
    /// help comment. Announces the write on the diagnostic sink.
    pub fn write_default_config(&mut self) -> Result<(), ConfrcError> {
        self.write_line(&format!(
            "writing default configuration file to {}",
            self.path.display()
        ));
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let doc = codec::encode_defaults(
            &self.name,
            &timestamp,
            &self.delimiter,
            self.formal.values(),
        );
        file::write(&self.path, &doc)
    }
}
