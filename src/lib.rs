//! Declare a configuration option once — name, default, help text, allowed
//! sources — and set it from the command line or a flat rc file, with the
//! command line always winning.
//!
//! ```ignore
//! let mut reg = Registry::new("zoo");
//! reg.string("species", "gopher", "the species we are studying", true, true);
//! reg.parse()?;
//! let species = reg.get_string("species").unwrap();
//! ```
//!
//! On first run, `parse` finds no file at `~/.zoorc` and writes one: every
//! file-capable option with its default value and its help text as a
//! comment. From then on the user edits that file, and any flag they type
//! overrides it.
//!
//! # Why confrc
//!
//! Small CLI programs usually grow the same plumbing twice: a flag
//! definition for each setting, and a config-file key for the same setting,
//! with ad-hoc glue deciding which wins. Confrc collapses the two into one
//! registration call per option. The registry is the single source of truth:
//! the clap command, the generated default file, and the resolved values all
//! derive from it.
//!
//! # The two-phase resolution
//!
//! [`Registry::parse_from`] (or [`Registry::parse`], which feeds it from
//! clap) applies sources in a fixed order:
//!
//! ```text
//! Compiled defaults      registration-time values
//!        ↑ overridden by
//! Config file            ~/.{name}rc, flat name=value lines
//!        ↑ overridden by
//! Command line           only flags the user explicitly typed
//! ```
//!
//! Precedence is structural, not overwrite-based: flags are applied first,
//! and the file phase skips any option the command line already set. An
//! option can opt out of either source at registration.
//!
//! # File format
//!
//! Line-oriented UTF-8. Blank lines and lines starting with `#` are
//! ignored; everything else is `name<delimiter>value`, split on the first
//! delimiter occurrence, both sides trimmed. The delimiter defaults to `=`
//! and can be changed with [`Registry::set_delimiter`]. There is no
//! escaping and no trailing-comment syntax.
//!
//! # Types
//!
//! An option holds a [`Value`] cell: bool, i32/i64, u32/u64, f64, string,
//! or duration. Each cell parses and renders itself; rendering then
//! re-parsing yields an equal value, which is what makes the generated
//! default file loss-free. Durations use magnitude+unit text (`300ms`,
//! `2h45m`); integers accept `0x`/`0o`/`0b` prefixes; booleans take the
//! `1/t/true/0/f/false` token family and may be supplied as a bare flag.
//!
//! # Errors
//!
//! Everything a user can get wrong — unknown option names, values that do
//! not parse, file lines without a delimiter, unreadable files — comes back
//! as a [`ConfrcError`] from `parse`; the library never exits the process.
//! The one exception is registering the same option name twice, which is a
//! bug in the calling program and panics.
//!
//! # Clap adapter
//!
//! The `cli` module (behind the default-on `clap` feature) builds a
//! `clap::Command` from the registry so users get `--help` for free, and
//! extracts the explicitly-supplied flags. Without the feature, drive
//! [`Registry::parse_from`] with pairs from any argument parser:
//!
//! ```toml
//! confrc = { version = "...", default-features = false }
//! ```
//!
//! # Threading
//!
//! A registry is startup-path state: declare, parse once, read. It makes no
//! concurrency guarantees; a host that shares one across threads must
//! serialize access itself.

pub mod error;
pub mod global;

#[cfg(feature = "clap")]
mod cli;
mod codec;
mod file;
mod option;
mod registry;
mod resolve;
mod value;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{command, explicit_entries};
pub use codec::{decode, encode_defaults};
pub use error::ConfrcError;
pub use file::default_config_path;
pub use option::ConfigOption;
pub use registry::Registry;
pub use value::{Value, format_duration, parse_duration};
