//! Settings tests
//!
//! TOML storage and the separator width rules.

use pixy_engine_edit::{Color, EditorSettings, GridAppearance};
use pretty_assertions::assert_eq;

#[test]
fn test_default_settings_round_trip() {
    let settings = EditorSettings::default();
    let text = settings.to_toml_string().unwrap();
    assert!(text.contains("background_color = \"#8e8e93\""));
    assert_eq!(EditorSettings::from_toml_str(&text).unwrap(), settings);
}

#[test]
fn test_partial_settings_use_defaults() {
    let text = r##"
rows = 8
drawing_color = "#ff0000"

[appearance]
grid_name = "Cat"
show_row_coordinates = true
"##;
    let settings = EditorSettings::from_toml_str(text).unwrap();
    assert_eq!(settings.rows, 8);
    assert_eq!(settings.columns, 16);
    assert_eq!(settings.drawing_color, Color::new(255, 0, 0));
    assert_eq!(settings.background_color, Color::GRAY);
    assert_eq!(settings.appearance.grid_name, "Cat");
    assert!(settings.appearance.shows_coordinates());
    assert!(settings.appearance.grid_enabled);
}

#[test]
fn test_invalid_color_is_rejected() {
    let result = EditorSettings::from_toml_str("background_color = \"gray\"");
    assert!(result.is_err());
}

#[test]
fn test_separator_width_is_snapped() {
    let mut appearance = GridAppearance::default();
    appearance.set_separator_width(2.26);
    assert!((appearance.separator_width - 2.5).abs() < f32::EPSILON);
    appearance.set_separator_width(7.0);
    assert!((appearance.separator_width - 5.0).abs() < f32::EPSILON);
    appearance.set_separator_width(-1.0);
    assert!(appearance.separator_width.abs() < f32::EPSILON);

    appearance.set_separator_width(1.5);
    appearance.grid_enabled = false;
    assert!(appearance.effective_separator_width().abs() < f32::EPSILON);
}
