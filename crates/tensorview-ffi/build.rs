//! Regenerates `include/tensorview.h` from the `extern "C"` surface.

use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/exports.rs");
    println!("cargo:rerun-if-changed=src/status.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let root = Path::new(&manifest_dir);
    let include = root.join("include");

    let config = cbindgen::Config::from_file(root.join("cbindgen.toml"))
        .expect("cbindgen.toml must parse");

    match cbindgen::generate_with_config(root, config) {
        Ok(bindings) => {
            std::fs::create_dir_all(&include).expect("include/ must be creatable");
            bindings.write_to_file(include.join("tensorview.h"));
        }
        // A header that fails to regenerate leaves the last good one in place.
        Err(err) => println!("cargo:warning=tensorview.h not regenerated: {err}"),
    }
}
