//! Clap adapter: the command-line tokenizer for the registry.
//!
//! Compiled only with the `clap` Cargo feature (on by default). The core
//! never depends on clap — [`Registry::parse_from`] takes plain `(name,
//! value)` pairs — so this module's whole job is producing those pairs:
//! build a [`clap::Command`] whose args mirror the registry's flag-capable
//! options, parse, and keep only the values the user actually typed
//! ([`ValueSource::CommandLine`]). Defaults and the config file never enter
//! through this path.
//!
//! Boolean options additionally accept the bare `--name` form, meaning
//! `true`; an explicit value must be attached with `=`
//! (`--alive=false`).

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::ConfrcError;
use crate::registry::Registry;

/// Build a `clap::Command` exposing every flag-capable option as a long flag
/// with its help text and registration-time default.
pub fn command(registry: &Registry) -> Command {
    let mut args = Vec::new();
    registry.visit_all(|opt| {
        if !opt.in_flags {
            return;
        }
        let mut arg = Arg::new(opt.name.clone())
            .long(opt.name.clone())
            .help(opt.help.clone())
            .default_value(opt.default_text.clone())
            .action(ArgAction::Set);
        if opt.is_bool_flag() {
            arg = arg
                .num_args(0..=1)
                .default_missing_value("true")
                .require_equals(true);
        }
        args.push(arg);
    });

    let mut cmd = Command::new(registry.name().to_string());
    for arg in args {
        cmd = cmd.arg(arg);
    }
    cmd
}

/// Extract the `(name, value)` pairs the user explicitly supplied, in
/// registry (lexicographic) order. Defaulted args are excluded — that is what
/// lets the resolution driver tell "typed on the command line" from "fell
/// back to the default".
pub fn explicit_entries(registry: &Registry, matches: &ArgMatches) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    registry.visit_all(|opt| {
        if !opt.in_flags {
            return;
        }
        if matches.value_source(&opt.name) == Some(ValueSource::CommandLine)
            && let Some(value) = matches.get_one::<String>(&opt.name)
        {
            entries.push((opt.name.clone(), value.clone()));
        }
    });
    entries
}

impl Registry {
    /// Parse the process command line, then resolve against the config file.
    /// Equivalent to [`parse_args`](Registry::parse_args) on
    /// `std::env::args_os()`.
    pub fn parse(&mut self) -> Result<(), ConfrcError> {
        self.parse_args(std::env::args_os())
    }

    /// Parse an explicit argument vector (the first element is the program
    /// name, as in `argv`), then resolve against the config file.
    pub fn parse_args<I, T>(&mut self, args: I) -> Result<(), ConfrcError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command(self).try_get_matches_from(args)?;
        let entries = explicit_entries(self, &matches);
        self.parse_from(entries)
    }
}
