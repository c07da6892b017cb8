use std::process;

use clap::{Parser, Subcommand};

use flow_cli::commands::translate_ops::Target;
use flow_cli::commands::{config_ops, lexicon_ops, translate_ops};
use flow_core::WordClass;

#[derive(Parser)]
#[command(name = "flowtool", about = "English ↔ Flowing dictionary translator")]
struct Cli {
    /// Custom lexicon TOML replacing the built-in one
    #[arg(long, global = true)]
    lexicon: Option<String>,
    /// Custom settings TOML replacing the built-in one
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text word for word
    Translate {
        /// Text to translate
        text: String,
        /// Output language
        #[arg(long, value_enum, default_value = "flowing")]
        to: Target,
    },
    /// Show how each token was translated
    Explain {
        /// Text to translate
        text: String,
        /// Output language
        #[arg(long, value_enum, default_value = "flowing")]
        to: Target,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Translate from whichever field has more text into the other
    Auto {
        /// English field content
        #[arg(long, default_value = "")]
        english: String,
        /// Flowing field content
        #[arg(long, default_value = "")]
        flowing: String,
    },
    /// Look up a word in both directions
    Lookup {
        /// Flowing or English word
        word: String,
    },
    /// List lexicon entries
    List {
        /// Only this word class (marker, pronoun, number, postposition, verb, noun, adjective, adverb)
        #[arg(long)]
        class: Option<WordClass>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in lexicon as TOML
    LexiconExport,
    /// Validate a custom lexicon TOML file
    LexiconValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = config_ops::apply_overrides(cli.lexicon.as_deref(), cli.settings.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    match cli.command {
        Command::Translate { text, to } => translate_ops::translate_cmd(&text, to),
        Command::Explain { text, to, json } => translate_ops::explain_cmd(&text, to, json),
        Command::Auto { english, flowing } => translate_ops::auto_cmd(&english, &flowing),
        Command::Lookup { word } => lexicon_ops::lookup_cmd(&word),
        Command::List { class, json } => lexicon_ops::list_cmd(class, json),
        Command::LexiconExport => config_ops::lexicon_export(),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
