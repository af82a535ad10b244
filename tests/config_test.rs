//! Configuration files driving the resolver.

mod common;

use std::io::Write;

use common::*;
use cube_color::{ColorName, PaletteError, Srgb};
use pretty_assertions::assert_eq;
use rubiks_color_resolver::{project, ColorResolver, ConfigurationError, ResolverConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_overrides_palette() {
    let file = write_config(
        r##"
palette:
  Wh: "#ffffff"
  red: "#cc0000"
clustering:
  seed: 42
"##,
    );
    let config = ResolverConfig::load(file.path()).unwrap();
    assert_eq!(config.clustering.seed, 42);
    assert_eq!(config.clustering.max_iterations, 100);

    let resolver = ColorResolver::from_config(&config).unwrap();
    let palette = resolver.palette();
    assert_eq!(
        palette.swatch(ColorName::White).srgb.to_bytes(),
        [0xff, 0xff, 0xff]
    );
    assert_eq!(
        palette.swatch(ColorName::Red).srgb.to_bytes(),
        [0xcc, 0x00, 0x00]
    );
    assert_eq!(
        palette.swatch(ColorName::Green).srgb,
        ColorName::Green.default_swatch()
    );
}

#[test]
fn test_configured_resolver_resolves_even_cubes() {
    let file = write_config("clustering:\n  seed: 9\n  max_iterations: 20\n");
    let config = ResolverConfig::load(file.path()).unwrap();
    let resolver = ColorResolver::from_config(&config).unwrap();

    let cube = resolver.resolve_scan(&solved_scan(4)).unwrap();
    assert_eq!(project(&cube), solved_projection(4));
}

#[test]
fn test_override_close_to_scanner_white_still_resolves() {
    let mut config = ResolverConfig::default();
    config
        .palette
        .insert("white".to_string(), ColorName::White.html().to_hex());
    let resolver = ColorResolver::from_config(&config).unwrap();

    let cube = resolver.resolve_scan(&solved_scan(3)).unwrap();
    assert_eq!(project(&cube), solved_projection(3));
    for color in ColorName::ALL {
        assert_eq!(cube.anchor(color).map(|a| a.name), Some(color));
    }
}

#[test]
fn test_duplicate_swatches_are_rejected() {
    let file = write_config("palette:\n  Wh: \"#680402\"\n");
    let config = ResolverConfig::load(file.path()).unwrap();
    let err = ColorResolver::from_config(&config).err().unwrap();
    assert!(matches!(
        err,
        ConfigurationError::Palette(PaletteError::DuplicateColor { .. })
    ));
}

#[test]
fn test_unknown_color_name_is_rejected() {
    let config = ResolverConfig::from_yaml("palette:\n  purple: \"#800080\"\n").unwrap();
    assert!(matches!(
        config.reference_palette(),
        Err(ConfigurationError::Palette(PaletteError::UnknownColorName(_)))
    ));
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let file = write_config("clustering: [not, a, map]\n");
    assert!(matches!(
        ResolverConfig::load(file.path()),
        Err(ConfigurationError::Config(_))
    ));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ResolverConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_srgb_hex_roundtrip_feeds_palette() {
    let srgb: Srgb = "#943509".parse().unwrap();
    assert_eq!(srgb, ColorName::Orange.default_swatch());
}
