//! Minimal demo: declare a handful of options, resolve them, print them.
//!
//! Run it twice: the first run writes `~/.basicrc` with the defaults below,
//! the second run picks that file up. Any flag overrides the file, e.g.
//! `cargo run --example basic -- --species=mole`.

use std::time::Duration;

use confrc::Registry;

fn main() {
    let mut reg = Registry::new("basic");

    reg.string("species", "gopher", "the species we are studying", true, true);
    reg.string("gopher_type", "pocket", "the variety of gopher", true, true);
    reg.duration(
        "delta_t",
        Duration::from_secs(10),
        "interval to use between events",
        true,
        true,
    );
    // Flag-only: never appears in the config file.
    reg.bool("alive", true, "set false to kill", true, false);
    // Config-only: no command-line flag.
    reg.bool("furry", true, "furry or not", false, true);

    if let Err(err) = reg.parse() {
        eprintln!("basic: {err}");
        std::process::exit(2);
    }

    println!("species     = {}", reg.get_string("species").unwrap());
    println!("gopher_type = {}", reg.get_string("gopher_type").unwrap());
    println!("delta_t     = {}", confrc::format_duration(reg.get_duration("delta_t").unwrap()));
    println!("alive       = {}", reg.get_bool("alive").unwrap());
    println!("furry       = {}", reg.get_bool("furry").unwrap());
}
