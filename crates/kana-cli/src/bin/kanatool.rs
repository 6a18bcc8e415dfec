use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use kana_cli::commands::{config_ops, convert_ops};
use kana_engine::{settings, NasalPolicy, RomajiTable};

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji-to-kana conversion diagnostics")]
struct Cli {
    /// Custom romaji table (TOML) to use instead of the built-in one
    #[arg(long, global = true)]
    romaji: Option<PathBuf>,
    /// Custom settings file (TOML)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSONL traces here (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Nasal {
    /// Use the configured policy
    Settings,
    Buffer,
    AfterVowel,
}

impl Nasal {
    fn policy(self) -> NasalPolicy {
        match self {
            Nasal::Settings => settings::settings().romaji.nasal_policy,
            Nasal::Buffer => NasalPolicy::Buffer,
            Nasal::AfterVowel => NasalPolicy::AfterVowel,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert romaji buffers to kana
    Convert {
        /// Raw keystroke buffers
        #[arg(required = true)]
        inputs: Vec<String>,
        #[arg(long, value_enum, default_value = "settings")]
        nasal: Nasal,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
        /// Show kana as katakana
        #[arg(long)]
        katakana: bool,
    },

    /// Compare typed kana against a target reading
    Match {
        typed: String,
        target: String,
        #[arg(long)]
        json: bool,
    },

    /// Type keys one at a time against a target and show each step
    Replay {
        /// Target reading (hiragana)
        target: String,
        /// Keystrokes to feed
        keys: String,
        #[arg(long, value_enum, default_value = "settings")]
        nasal: Nasal,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        katakana: bool,
    },

    /// Print the built-in romaji table TOML
    RomajiExport,

    /// Validate a romaji table TOML file
    RomajiValidate { file: String },

    /// List mappings in greedy-match order
    RomajiDump {
        /// Table to dump (defaults to the active table)
        #[arg(long)]
        file: Option<String>,
    },

    /// Print the built-in settings TOML
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn install_custom_config(cli: &Cli) {
    if let Some(ref path) = cli.romaji {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        });
        if let Err(e) = RomajiTable::init_custom(content) {
            eprintln!("Error in romaji table: {e}");
            process::exit(1);
        }
    }
    if let Some(ref path) = cli.settings {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        });
        if let Err(e) = settings::init_custom(content) {
            eprintln!("Error in settings: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Held until exit so buffered trace lines are flushed.
    let _trace = cli.log_dir.as_deref().and_then(kana_engine::init_tracing);
    install_custom_config(&cli);

    match cli.command {
        Command::Convert {
            inputs,
            nasal,
            json,
            katakana,
        } => convert_ops::convert_cmd(&inputs, nasal.policy(), json, katakana),
        Command::Match {
            typed,
            target,
            json,
        } => convert_ops::match_cmd(&typed, &target, json),
        Command::Replay {
            target,
            keys,
            nasal,
            json,
            katakana,
        } => convert_ops::replay_cmd(&target, &keys, nasal.policy(), json, katakana),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::RomajiDump { file } => config_ops::romaji_dump(file.as_deref()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
