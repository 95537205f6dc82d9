fn main() {
    // Release builds may set TODOIT_VERSION; otherwise derive it from git.
    if let Ok(version) = std::env::var("TODOIT_VERSION") {
        println!("cargo:rustc-env=TODOIT_VERSION={version}");
    } else {
        let hash = std::process::Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .unwrap_or_default()
            .trim()
            .to_string();

        let pkg = env!("CARGO_PKG_VERSION");
        if hash.is_empty() {
            println!("cargo:rustc-env=TODOIT_VERSION={pkg}");
        } else {
            println!("cargo:rustc-env=TODOIT_VERSION={pkg}-{hash}");
        }
    }
}
