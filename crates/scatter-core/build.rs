// File: crates/scatter-core/build.rs
// Summary: Links the extra Windows system library that Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // skia-safe's font manager calls into the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
