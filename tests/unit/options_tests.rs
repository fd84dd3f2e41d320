// Persisted options shape tests

use std::io::Write;

use sukashi::notifier::NoopNotifier;
use sukashi::options::WatermarkOptions;
use sukashi::settings::WatermarkSettings;
use sukashi::token::Token;

#[test]
fn test_missing_fields_take_defaults() {
    let options = WatermarkOptions::from_yaml("is_font_bold: true").unwrap();

    assert!(options.is_font_bold);
    assert!(options.is_enabled);
    assert_eq!(options.text_size, 16.0);
    assert_eq!(options.font_family_name, "Consolas");
    assert_eq!(options.text_color, "Red");
    assert_eq!(options.border_color, "Gray");
    assert_eq!(options.background_color, "White");
    assert_eq!(options.border_margin, 10.0);
    assert_eq!(options.border_padding, 3.0);
    assert_eq!(options.border_opacity, 0.7);
}

#[test]
fn test_null_displayed_text_normalizes_to_default() {
    // An explicit null in the store is silent-normalized, never kept as
    // the literal string "null".
    let options = WatermarkOptions::from_yaml("displayed_text: null").unwrap();
    assert_eq!(
        options.displayed_text,
        "To change this text, edit the watermark settings."
    );

    let settings = WatermarkSettings::with_options(&options, Box::new(NoopNotifier));
    assert!(!settings.using_image());
    assert!(!settings.uses_replacements());
}

#[test]
fn test_unrecognized_color_strings_pass_through() {
    // Color validation belongs to the renderer; the shape stores anything.
    let yaml = r##"
text_color: "not a color at all"
border_color: "#GGGGGG"
"##;
    let options = WatermarkOptions::from_yaml(yaml).unwrap();

    assert_eq!(options.text_color, "not a color at all");
    assert_eq!(options.border_color, "#GGGGGG");
}

#[test]
fn test_model_rebuilt_from_store_rederives_display_state() {
    let yaml = r#"
displayed_text: "${CURRENTFILEPATHINPROJECT} @ ${CurrentProjectName}"
folders: "Lib;lib;Examples"
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let stored = std::fs::read_to_string(file.path()).unwrap();
    let options = WatermarkOptions::from_yaml(&stored).unwrap();
    let settings = WatermarkSettings::with_options(&options, Box::new(NoopNotifier));

    assert_eq!(
        settings.display_format(),
        "${currentfilepathinproject} @ ${currentprojectname}"
    );
    assert!(settings.uses_token(Token::CurrentFilePathInProject));
    assert!(settings.uses_token(Token::CurrentProjectName));
    assert!(!settings.using_image());
    assert_eq!(settings.folders().len(), 2);
}

#[test]
fn test_snapshot_then_rebuild_preserves_everything() {
    let mut original = WatermarkSettings::new(Box::new(NoopNotifier));
    original.set_displayed_text("IMG:watermark.png");
    original.set_folders("src;SRC;demos");
    original.set_font_underline(true);
    original.set_border_opacity(0.4);

    let yaml = original.options().to_yaml().unwrap();
    let options = WatermarkOptions::from_yaml(&yaml).unwrap();
    let rebuilt = WatermarkSettings::with_options(&options, Box::new(NoopNotifier));

    assert!(rebuilt.using_image());
    assert_eq!(rebuilt.image_path(), "watermark.png");
    assert_eq!(rebuilt.folders().len(), 2);
    assert!(rebuilt.is_font_underline());
    assert_eq!(rebuilt.border_opacity(), 0.4);
    assert_eq!(rebuilt.fingerprint(), original.fingerprint());
}
