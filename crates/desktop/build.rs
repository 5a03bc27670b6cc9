fn main() {
    // Build datetime shown in the title tooltip
    let build_datetime = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    println!("cargo:rustc-env=BUILD_DATETIME={}", build_datetime);
    println!("cargo:rerun-if-changed=build.rs");
}
