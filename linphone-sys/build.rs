use std::path::PathBuf;

const LIB_DIR_ENV: &str = "LINPHONE_LIB_DIR";

fn main() {
    println!("cargo::rerun-if-env-changed={LIB_DIR_ENV}");

    let version = version();
    println!("cargo::rustc-env=LINPHONE_BINDINGS_VERSION={version}");

    if std::env::var_os("CARGO_FEATURE_NATIVE").is_some() {
        link_native();
    }
}

fn link_native() {
    if let Some(lib_dir) = std::env::var_os(LIB_DIR_ENV) {
        let lib_dir = PathBuf::from(lib_dir);
        if !lib_dir.is_dir() {
            panic!("{LIB_DIR_ENV} does not point to a directory: {}", lib_dir.display());
        }
        println!("cargo::rustc-link-search=native={}", lib_dir.display());
    }

    // bctbx_free and friends live in bctoolbox, which liblinphone does not re-export on every platform.
    println!("cargo::rustc-link-lib=dylib=linphone");
    println!("cargo::rustc-link-lib=dylib=bctoolbox");
}

struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// linphone-sys mirrors the version of the engine ABI it declares.
fn version() -> Version {
    let component = |name: &str| {
        std::env::var(name)
            .unwrap()
            .parse::<u32>()
            .unwrap()
    };

    Version {
        major: component("CARGO_PKG_VERSION_MAJOR"),
        minor: component("CARGO_PKG_VERSION_MINOR"),
        patch: component("CARGO_PKG_VERSION_PATCH"),
    }
}
