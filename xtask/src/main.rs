//! Custom cargo commands for the stipulate workspace.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (every build mode + clippy + panic scan)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Stipulate Verification Suite");
    println!("==========================================\n");

    println!("[1/6] Scanning library code for panicking calls...");
    check_no_panics()?;
    println!("✓ No unwrap/expect outside tests\n");

    println!("[2/6] Running tests (debug build, debug checks on)...");
    run_cargo(&["test", "--workspace", "--quiet"], &[])?;
    println!("✓ Debug build passed\n");

    println!("[3/6] Running tests (release build, debug checks compiled out)...");
    run_cargo(&["test", "--release", "--quiet"], &[])?;
    println!("✓ Release build passed\n");

    println!("[4/6] Running tests (release build, debug checks forced on)...");
    run_cargo(
        &["test", "--release", "--quiet"],
        &[("STIPULATE_DEBUG_CHECKS", "1")],
    )?;
    println!("✓ Forced debug checks passed\n");

    println!("[5/6] Running tests (no default features)...");
    run_cargo(&["test", "--no-default-features", "--quiet"], &[])?;
    println!("✓ Minimal feature set passed\n");

    println!("[6/6] Running clippy...");
    run_cargo(
        &["clippy", "--workspace", "--all-targets", "--quiet", "--", "-D", "warnings"],
        &[],
    )?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"], &[])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace"], &[])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--workspace", "--quiet"], &[])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"], &[])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "guard_bench"], &[])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str], envs: &[(&str, &str)]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .envs(envs.iter().copied())
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Library code propagates errors; `unwrap()`/`expect(` may only appear in
/// test modules. Everything after a file's first `#[cfg(test)]` is skipped.
fn check_no_panics() -> Result<()> {
    let root = project_root()?;
    let mut offenders = Vec::new();

    for dir in ["src", "macros/src"] {
        scan_dir(&root.join(dir), &mut offenders)?;
    }

    if !offenders.is_empty() {
        bail!(
            "Found {} panicking call(s) in library code:\n  {}",
            offenders.len(),
            offenders.join("\n  ")
        );
    }

    Ok(())
}

fn scan_dir(dir: &Path, offenders: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            scan_dir(&path, offenders)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            for (line_no, line) in content.lines().enumerate() {
                if line.trim_start().starts_with("#[cfg(test)]") {
                    break;
                }
                let code = line.split("//").next().unwrap_or("");
                if code.contains(".unwrap()") || code.contains(".expect(") {
                    offenders.push(format!("{}:{}", path.display(), line_no + 1));
                }
            }
        }
    }
    Ok(())
}
