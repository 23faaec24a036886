// Build script to embed the CLI release tag and commit hash.
// Both come from the CI/CD environment; local builds fall back to "dev" and "".

use std::env;

fn main() {
    // Release tag, e.g. "0.17.4". Unset or empty means a development build.
    let version = env::var("FAAS_CLI_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "dev".to_string());

    // Commit hash of the build. May legitimately be empty.
    let commit = env::var("FAAS_CLI_COMMIT").unwrap_or_default();

    // Emit as environment variables for compile-time embedding
    println!("cargo:rustc-env=FAAS_CLI_VERSION={}", version.trim());
    println!("cargo:rustc-env=FAAS_CLI_COMMIT={}", commit.trim());

    println!("cargo:rerun-if-env-changed=FAAS_CLI_VERSION");
    println!("cargo:rerun-if-env-changed=FAAS_CLI_COMMIT");
}
