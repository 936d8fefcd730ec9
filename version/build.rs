use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=GZH_VERSION");
    println!("cargo:rerun-if-env-changed=GZH_GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=GZH_BUILD_DATE");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    println!("cargo:rustc-env=GZH_RUSTC_VERSION={version}");
}
