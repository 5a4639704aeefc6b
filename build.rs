//! Stamps the build with `git describe` output for `easel --version`.
//!
//! Packagers building outside a checkout can set `EASEL_BUILD_VERSION`
//! themselves; it is passed through untouched.

use std::env;
use std::path::Path;
use std::process::Command;

const VERSION_VAR: &str = "EASEL_BUILD_VERSION";

fn main() {
    println!("cargo:rerun-if-env-changed={VERSION_VAR}");
    for watched in [".git/HEAD", ".git/refs/tags"] {
        if Path::new(watched).exists() {
            println!("cargo:rerun-if-changed={watched}");
        }
    }

    let version = env::var(VERSION_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={VERSION_VAR}={version}");
}

/// `git describe --tags --always --dirty`, or `None` outside a checkout.
fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    (!described.is_empty()).then(|| described.to_string())
}
