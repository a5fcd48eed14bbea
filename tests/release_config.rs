//! Packaging checks for the shipped binary.

const CARGO_TOML: &str = include_str!("../Cargo.toml");

#[test]
fn release_build_is_size_optimized() {
    for setting in ["lto = true", "strip = true", "codegen-units = 1", "opt-level = \"z\""] {
        assert!(
            CARGO_TOML.contains(setting),
            "[profile.release] is missing `{}`",
            setting
        );
    }
}

#[test]
fn every_platform_has_an_embedded_dockerfile() {
    use dockhand::scaffold::{template_names, Platform};

    let names = template_names();
    for platform in Platform::ALL {
        let template = platform.dockerfile_template();
        assert!(
            names.iter().any(|n| *n == template),
            "no embedded template {} for {}",
            template,
            platform
        );
    }
}
