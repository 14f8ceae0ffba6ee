//! Build script for Liftlog
//!
//! Embeds the build timestamp so the status tool can report it.

fn main() {
    println!("cargo:rerun-if-changed=src");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=LIFTLOG_BUILD_TIMESTAMP={}", timestamp);
}
