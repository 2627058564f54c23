//! A process-wide default registry for top-level convenience functions.
//!
//! Nothing in the crate requires this: [`Registry`](crate::Registry) is a
//! plain constructible type and tests should build their own instances. The
//! global exists only so a small program can declare options from anywhere
//! and call [`parse`] once in `main`, the way it would with a process-global
//! flag set. It is created lazily, named after the invoking executable, and
//! guarded by a mutex purely so the static is sound — the usage contract is
//! still single-threaded startup code.

use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::Duration;

use crate::error::ConfrcError;
use crate::file;
use crate::registry::Registry;
use crate::value::Value;

static DEFAULT: LazyLock<Mutex<Registry>> =
    LazyLock::new(|| Mutex::new(Registry::new(&file::program_name())));

fn default_registry() -> MutexGuard<'static, Registry> {
    DEFAULT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run `f` against the process-wide default registry.
pub fn with_default<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    f(&mut default_registry())
}

/// Replace the default registry with a fresh, empty one. Intended for tests
/// that exercise the top-level API and must not inherit prior declarations.
pub fn reset() {
    *default_registry() = Registry::new(&file::program_name());
}

/// Set the config file path on the default registry.
pub fn set_path(path: impl Into<PathBuf>) {
    default_registry().set_path(path);
}

/// Set the key/value delimiter on the default registry.
pub fn set_delimiter(delimiter: &str) {
    default_registry().set_delimiter(delimiter);
}

/// Register an option with an explicit [`Value`] on the default registry.
pub fn var(name: &str, help: &str, value: Value, in_flags: bool, in_config: bool) {
    default_registry().var(name, help, value, in_flags, in_config);
}

/// Register a boolean option on the default registry.
pub fn bool(name: &str, default: bool, help: &str, in_flags: bool, in_config: bool) {
    default_registry().bool(name, default, help, in_flags, in_config);
}

/// Register a 32-bit signed integer option on the default registry.
pub fn int(name: &str, default: i32, help: &str, in_flags: bool, in_config: bool) {
    default_registry().int(name, default, help, in_flags, in_config);
}

/// Register a 64-bit signed integer option on the default registry.
pub fn int64(name: &str, default: i64, help: &str, in_flags: bool, in_config: bool) {
    default_registry().int64(name, default, help, in_flags, in_config);
}

/// Register a 32-bit unsigned integer option on the default registry.
pub fn uint(name: &str, default: u32, help: &str, in_flags: bool, in_config: bool) {
    default_registry().uint(name, default, help, in_flags, in_config);
}

/// Register a 64-bit unsigned integer option on the default registry.
pub fn uint64(name: &str, default: u64, help: &str, in_flags: bool, in_config: bool) {
    default_registry().uint64(name, default, help, in_flags, in_config);
}

/// Register a floating-point option on the default registry.
pub fn float64(name: &str, default: f64, help: &str, in_flags: bool, in_config: bool) {
    default_registry().float64(name, default, help, in_flags, in_config);
}

/// Register a string option on the default registry.
pub fn string(name: &str, default: &str, help: &str, in_flags: bool, in_config: bool) {
    default_registry().string(name, default, help, in_flags, in_config);
}

/// Register a duration option on the default registry.
pub fn duration(name: &str, default: Duration, help: &str, in_flags: bool, in_config: bool) {
    default_registry().duration(name, default, help, in_flags, in_config);
}

/// Resolve the default registry from the process command line and its config
/// file.
#[cfg(feature = "clap")]
pub fn parse() -> Result<(), ConfrcError> {
    default_registry().parse()
}

/// Resolve the default registry from explicit `(name, value)` pairs and its
/// config file.
pub fn parse_from<I, N, V>(flags: I) -> Result<(), ConfrcError>
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    default_registry().parse_from(flags)
}

/// True once the default registry has been resolved.
pub fn parsed() -> bool {
    default_registry().parsed()
}

/// Look up a descriptor on the default registry, cloned out of the lock.
pub fn lookup(name: &str) -> Option<crate::option::ConfigOption> {
    default_registry().lookup(name).cloned()
}

/// Visit every option registered on the default registry.
pub fn visit_all(f: impl FnMut(&crate::option::ConfigOption)) {
    default_registry().visit_all(f);
}

/// Visit the explicitly-set options on the default registry.
pub fn visit(f: impl FnMut(&crate::option::ConfigOption)) {
    default_registry().visit(f);
}
