// File: crates/playground-chart/build.rs
// Summary: Build script to link required Windows system libraries when Skia text measurement is enabled.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia/ICU need RegOpenKeyExW, RegQueryInfoKeyW, etc.
        if std::env::var_os("CARGO_FEATURE_SKIA").is_some() {
            println!("cargo:rustc-link-lib=advapi32");
        }
    }
}
