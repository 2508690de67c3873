fn main() {
    // Stamp the binary with its build time; the contact footer reads it
    // back through env!("BUILD_TIME").
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    println!("cargo:rerun-if-changed=build.rs");
}
