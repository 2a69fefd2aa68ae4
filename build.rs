use chrono::Datelike;

fn main() {
    // Copyright year for the footer
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Public path the site is served under, always with a trailing slash
    let base_path = std::env::var("SITE_BASE_PATH").unwrap_or_else(|_| "/".to_string());
    let base_path = format!("/{}/", base_path.trim_matches('/')).replace("//", "/");
    println!("cargo:rustc-env=SITE_BASE_PATH={}", base_path);

    println!("cargo:rerun-if-env-changed=SITE_BASE_PATH");
    println!("cargo:rerun-if-changed=build.rs");
}
