fn main() {
    #[cfg(target_os = "windows")]
    {
        // skia-safe's ICU loader calls RegOpenKeyExW and friends
        println!("cargo:rustc-link-lib=advapi32");
    }
}
