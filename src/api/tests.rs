use std::io::Write;

use super::*;

#[test]
fn test_version() {
    assert_eq!(engine_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_top_level_translation() {
    assert_eq!(sanitize("I see, the dog!".into()), vec!["i", "see", "the", "dog"]);
    assert_eq!(translate_english("I see the dog".into()), "ni sa [the] maku");
    assert_eq!(translate_flowing("era che".into()), "[PAST] He/She");
}

#[test]
fn test_explain_segments() {
    let segs = explain("runs xyzzy".into(), FlowDirection::EnglishToFlowing);
    assert_eq!(
        segs,
        vec![
            FlowSegment {
                source: "runs".into(),
                text: "pena".into(),
                kind: FlowSegmentKind::Stemmed,
            },
            FlowSegment {
                source: "xyzzy".into(),
                text: "[xyzzy]".into(),
                kind: FlowSegmentKind::Untranslatable,
            },
        ]
    );
}

#[test]
fn test_select_direction() {
    assert_eq!(
        select_direction("0123456789".into(), "abc".into()),
        Some(FlowDirection::EnglishToFlowing)
    );
    assert_eq!(select_direction(String::new(), String::new()), None);
}

#[test]
fn test_lexicon_records() {
    let che = lexicon_lookup("che".into()).unwrap();
    assert_eq!(che.class, "pronoun");
    assert_eq!(che.senses, vec!["HE", "SHE", "IT"]);
    assert!(lexicon_lookup("xyzzy".into()).is_none());
    assert_eq!(lexicon_entries().len(), 61);
}

#[test]
fn test_default_configs_parse() {
    assert!(flow_core::lexicon::parse_lexicon_toml(&lexicon_default_config()).is_ok());
    assert!(flow_core::settings::parse_settings_toml(&settings_default_config()).is_ok());
}

#[test]
fn test_load_config_errors() {
    let err = lexicon_load_config("/nonexistent/lexicon.toml".into()).unwrap_err();
    assert!(matches!(err, FlowError::Io { .. }));

    // Invalid content is rejected before the global is touched.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "pronoun = [{{ flowing = \"Ni\", gloss = [\"I\"] }}]").unwrap();
    let err = lexicon_load_config(file.path().to_string_lossy().into_owned()).unwrap_err();
    assert!(matches!(err, FlowError::InvalidData { .. }));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sanitizer]").unwrap();
    let err = settings_load_config(file.path().to_string_lossy().into_owned()).unwrap_err();
    assert!(matches!(err, FlowError::InvalidData { .. }));
}

#[test]
fn test_session_object() {
    let session = FlowSession::new();
    let resp = session.set_english("I see the dog".into());
    assert_eq!(resp.direction, Some(FlowDirection::EnglishToFlowing));
    assert_eq!(resp.flowing.as_deref(), Some("ni sa [the] maku"));
    assert_eq!(session.flowing(), "ni sa [the] maku");

    session.set_live(false);
    session.set_flowing("era sa che maku tena".into());
    let resp = session.translate_both();
    assert_eq!(resp.direction, Some(FlowDirection::FlowingToEnglish));
    assert_eq!(session.english(), "[PAST] see He/She dog quickly");
    assert_eq!(session.last_direction(), Some(FlowDirection::FlowingToEnglish));

    let resp = session.clear();
    assert_eq!(resp.english.as_deref(), Some(""));
    assert!(session.english().is_empty() && session.flowing().is_empty());

    let resp = session.auto_translate(FlowDirection::EnglishToFlowing);
    assert_eq!(resp.direction, None);
}
