//! Build script for the stipulate crate.
//!
//! Resolves the DebugOnly switch exactly once per build and hands it to
//! rustc as `cfg(stipulate_debug_checks)`. Resolution order:
//! 1. `STIPULATE_DEBUG_CHECKS` environment variable (`1/true/on/yes`, `0/false/off/no`)
//! 2. the `debug-checks` cargo feature
//! 3. whether debug assertions are on for this profile

use std::env;

const SWITCH: &str = "STIPULATE_DEBUG_CHECKS";

fn main() {
    println!("cargo:rerun-if-env-changed={SWITCH}");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(stipulate_debug_checks)");

    let enabled = match env::var(SWITCH) {
        Ok(raw) => parse_switch(&raw),
        Err(_) => {
            env::var_os("CARGO_FEATURE_DEBUG_CHECKS").is_some()
                || env::var_os("CARGO_CFG_DEBUG_ASSERTIONS").is_some()
        }
    };

    if enabled {
        println!("cargo:rustc-cfg=stipulate_debug_checks");
    }
}

fn parse_switch(raw: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => true,
        "0" | "false" | "off" | "no" => false,
        other => panic!("{SWITCH} must be a boolean switch, got {other:?}"),
    }
}
