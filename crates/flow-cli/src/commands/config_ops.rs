use std::fs;
use std::io;
use std::process;

use flow_core::lexicon::{self, Lexicon, LexiconError};
use flow_core::settings::{self, SettingsError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("lexicon: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
}

fn read(path: &str) -> Result<String, OverrideError> {
    fs::read_to_string(path).map_err(|source| OverrideError::Io {
        path: path.to_string(),
        source,
    })
}

/// Install custom lexicon/settings files before any global is touched.
pub fn apply_overrides(
    lexicon_file: Option<&str>,
    settings_file: Option<&str>,
) -> Result<(), OverrideError> {
    if let Some(path) = settings_file {
        settings::init_custom(read(path)?)?;
    }
    if let Some(path) = lexicon_file {
        Lexicon::init_custom(read(path)?)?;
    }
    Ok(())
}

pub fn lexicon_export() {
    print!("{}", lexicon::default_toml());
}

/// Summary line plus one warning per shadowed English key.
pub fn lexicon_report(lex: &Lexicon) -> String {
    let reverse = lex.reverse();
    let mut out = format!(
        "OK: {} entries, {} English keys\n",
        lex.len(),
        reverse.len()
    );
    for s in reverse.shadowed() {
        out.push_str(&format!(
            "warning: \"{}\" maps to {} (shadows {})\n",
            s.english, s.winner, s.previous
        ));
    }
    out
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let lex = die!(lexicon::parse_lexicon_toml(&content), "Error: {}");
    print!("{}", lexicon_report(&lex));
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: strip_chars={:?}, suffixes={:?}, tense_markers={:?}, pronoun_senses={}",
        s.sanitizer.strip_chars,
        s.english.suffixes,
        s.flowing.tense_markers,
        s.flowing.pronoun_senses
    );
}
