// Tests for the app catalog and its color parsing.

use globe_core::{app_by_slug, hex_to_rgb, APP_LIST};
use std::collections::HashSet;

#[test]
fn hex_parse_known_value() {
    let rgb = hex_to_rgb("#22d3ee").unwrap();
    assert!((rgb[0] - 0x22 as f32 / 255.0).abs() < 1e-6);
    assert!((rgb[1] - 0xd3 as f32 / 255.0).abs() < 1e-6);
    assert!((rgb[2] - 0xee as f32 / 255.0).abs() < 1e-6);
    assert_eq!(hex_to_rgb("#000000"), Some([0.0, 0.0, 0.0]));
    assert_eq!(hex_to_rgb("#ffffff"), Some([1.0, 1.0, 1.0]));
}

#[test]
fn hex_parse_rejects_malformed_input() {
    for bad in ["22d3ee", "#22d3e", "#22d3eee", "#22d3eg", "", "#", "#🎯🎯🎯"] {
        assert_eq!(hex_to_rgb(bad), None, "{bad:?} should not parse");
    }
}

#[test]
fn catalog_slugs_are_unique() {
    let slugs: HashSet<&str> = APP_LIST.iter().map(|a| a.slug).collect();
    assert_eq!(slugs.len(), APP_LIST.len());
}

#[test]
fn catalog_lookup_by_slug() {
    let zoom = app_by_slug("zoom").unwrap();
    assert_eq!(zoom.name, "Zoom");
    assert!(zoom.api_url.is_some());
    assert_eq!(app_by_slug("messages").unwrap().name, "Messages");
    assert!(app_by_slug("no-such-app").is_none());
}

#[test]
fn every_catalog_color_parses_in_range() {
    for app in APP_LIST {
        let rgb = hex_to_rgb(app.color_hex)
            .unwrap_or_else(|| panic!("{}: bad color {}", app.slug, app.color_hex));
        assert_eq!(rgb, app.color_rgb());
        for c in rgb {
            assert!((0.0..=1.0).contains(&c));
        }
    }
}
