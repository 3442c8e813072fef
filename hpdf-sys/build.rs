use std::env;
use std::path::{Path, PathBuf};

/// Directories probed when neither `HPDF_LIB_DIR` nor `HPDF_ROOT` is set.
const SYSTEM_LIB_DIRS: &[&str] = &[
    "/usr/local/lib",
    "/usr/lib",
    "/usr/lib64",
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/opt/homebrew/lib",
    "/opt/local/lib",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=HPDF_LIB_DIR");
    println!("cargo:rerun-if-env-changed=HPDF_ROOT");
    println!("cargo:rerun-if-env-changed=HPDF_STATIC");

    let target = env::var("TARGET").unwrap();
    let static_link = wants_static(&target);

    // Priority 1: Manual override via HPDF_LIB_DIR
    if let Ok(lib_dir) = env::var("HPDF_LIB_DIR") {
        let lib_dir = PathBuf::from(lib_dir);
        if !lib_dir.exists() {
            panic!(
                "hpdf-sys: HPDF_LIB_DIR does not exist: {}",
                lib_dir.display()
            );
        }
        println!("cargo:warning=Using HPDF_LIB_DIR: {}", lib_dir.display());
        setup_linking(&lib_dir, &target, static_link);
        return;
    }

    // Priority 2: Prebuilt bundle laid out per platform under HPDF_ROOT
    if let Ok(root) = env::var("HPDF_ROOT") {
        let lib_dir = PathBuf::from(root).join(get_platform(&target)).join("lib");
        if !lib_dir.exists() {
            panic!(
                "hpdf-sys: library directory does not exist: {}",
                lib_dir.display()
            );
        }
        println!("cargo:warning=Using HPDF_ROOT bundle: {}", lib_dir.display());
        setup_linking(&lib_dir, &target, static_link);
        return;
    }

    // Priority 3: System install (libhpdf-dev, brew install libharu, ...)
    if !target.contains("android") {
        for dir in SYSTEM_LIB_DIRS {
            let dir = Path::new(dir);
            if has_library(dir, &target, static_link) {
                setup_linking(dir, &target, static_link);
                return;
            }
        }
    }

    panic!(
        "hpdf-sys: cannot find libharu for target '{}'. Either:\n\
         1. Set HPDF_LIB_DIR to the directory containing libhpdf\n\
         2. Set HPDF_ROOT to a prebuilt bundle (<root>/<platform>/lib)\n\
         3. Install libharu system-wide (e.g. apt install libhpdf-dev)",
        target
    );
}

/// Static linking is the default on Android, where libharu is bundled into
/// the JNI library rather than shipped as a separate shared object.
fn wants_static(target: &str) -> bool {
    match env::var("HPDF_STATIC") {
        Ok(value) => value == "1" || value.eq_ignore_ascii_case("true"),
        Err(_) => target.contains("android"),
    }
}

/// Map a Cargo target triple to the subdirectory inside a prebuilt bundle.
fn get_platform(target: &str) -> &'static str {
    match target {
        // Android
        "aarch64-linux-android" => "android/arm64-v8a",
        "armv7-linux-androideabi" => "android/armeabi-v7a",
        "x86_64-linux-android" => "android/x86_64",
        "i686-linux-android" => "android/x86",

        // Desktop
        t if t.contains("aarch64-apple") => "macos-arm64",
        t if t.contains("x86_64-apple") => "macos-x86_64",
        t if t.contains("x86_64-unknown-linux") => "linux-x86_64",
        t if t.contains("aarch64-unknown-linux") => "linux-arm64",
        t if t.contains("x86_64-pc-windows") => "windows-x86_64",
        _ => panic!(
            "hpdf-sys: unsupported target '{}'. Set HPDF_LIB_DIR manually.",
            target
        ),
    }
}

fn library_file(target: &str, static_link: bool) -> &'static str {
    if target.contains("windows") {
        if static_link {
            "hpdf.lib"
        } else {
            "libhpdf.dll"
        }
    } else if static_link {
        "libhpdf.a"
    } else if target.contains("apple") {
        "libhpdf.dylib"
    } else {
        "libhpdf.so"
    }
}

fn has_library(dir: &Path, target: &str, static_link: bool) -> bool {
    dir.join(library_file(target, static_link)).exists()
}

fn setup_linking(lib_dir: &Path, target: &str, static_link: bool) {
    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:lib_dir={}", lib_dir.display());

    if static_link {
        println!("cargo:rustc-link-lib=static=hpdf");

        // A static libharu leaves its PNG and zlib references unresolved.
        if lib_dir.join("libpng.a").exists() {
            println!("cargo:rustc-link-lib=static=png");
        } else {
            println!("cargo:rustc-link-lib=dylib=png");
        }
        println!("cargo:rustc-link-lib=dylib=z");
        if !target.contains("windows") {
            println!("cargo:rustc-link-lib=dylib=m");
        }
        return;
    }

    println!("cargo:rustc-link-lib=dylib=hpdf");

    // Add rpath for runtime library discovery (macOS/Linux)
    if target.contains("apple") || (target.contains("linux") && !target.contains("android")) {
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", lib_dir.display());
    }
}
