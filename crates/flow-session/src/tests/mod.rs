
use flow_core::lexicon::{parse_lexicon_toml, DEFAULT_LEXICON_TOML};
use flow_core::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};
use flow_core::Lexicon;

pub(super) fn make_test_parts() -> (Lexicon, Settings) {
    (
        parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap(),
        parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap(),
    )
}
