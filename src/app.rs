//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to command handlers.

use crate::commands;
use crate::logging;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Speech-to-text through Yandex SpeechKit
#[derive(Parser)]
#[command(name = "yastt")]
#[command(version)]
#[command(
    long_about = "Speech-to-text through Yandex SpeechKit.\n\nEXAMPLES:\n    # Transcribe a 16-bit WAV in Russian\n    $ yastt transcribe memo.wav\n\n    # Transcribe an Ogg/Opus voice message in English to a file\n    $ yastt transcribe voice.ogg -l en-US -o transcript.txt\n\n    # Show what the configured provider accepts\n    $ yastt capabilities"
)]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/yastt/yastt.toml\n    API key override:   YASTT_API_KEY\n    Logs:               ~/.local/state/yastt/yastt.log.*"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe an audio file
    ///
    /// Accepts 16-bit PCM WAV files and Ogg/Opus files. The transcript is
    /// printed to stdout unless an output file is given.
    #[command(visible_alias = "t")]
    Transcribe {
        /// Path to the audio file to transcribe
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Language-region tag of the speech
        #[arg(short, long, default_value = commands::transcribe::DEFAULT_LANGUAGE)]
        language: String,

        /// Write transcription to file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Show the languages and audio formats the configured provider accepts
    Capabilities,

    /// Open configuration file in your preferred editor
    #[command(visible_alias = "c")]
    Config,

    /// Show recent log entries
    Logs,

    /// Generate shell completion script
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the application based on command-line arguments.
///
/// # Errors
/// - If logging initialization fails
/// - If command execution fails
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Commands that neither log nor touch configuration
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "yastt", &mut io::stdout());
            return Ok(());
        }
        Commands::Logs => return commands::handle_logs(),
        _ => {}
    }

    logging::init_logging()?;
    tracing::info!("yastt {} starting", env!("CARGO_PKG_VERSION"));

    let config_path = crate::config::get_config_path()?;
    if crate::setup::ensure_config(&config_path)? {
        eprintln!(
            "Created default configuration at {}. Add your API key there or set {}.",
            config_path.display(),
            crate::config::API_KEY_ENV
        );
    }

    match cli.command {
        Commands::Transcribe {
            file,
            language,
            output,
        } => commands::handle_transcribe(file, language, output).await,
        Commands::Capabilities => commands::handle_capabilities(),
        Commands::Config => commands::handle_config(),
        Commands::Completions { .. } | Commands::Logs => {
            unreachable!("These commands are handled earlier")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_transcribe_defaults() {
        let cli = Cli::try_parse_from(["yastt", "transcribe", "memo.wav"]).unwrap();
        match cli.command {
            Commands::Transcribe {
                file,
                language,
                output,
            } => {
                assert_eq!(file, PathBuf::from("memo.wav"));
                assert_eq!(language, "ru-RU");
                assert!(output.is_none());
            }
            _ => panic!("expected transcribe"),
        }
    }

    #[test]
    fn test_transcribe_alias_and_options() {
        let cli =
            Cli::try_parse_from(["yastt", "t", "voice.ogg", "-l", "en-US", "-o", "out.txt"])
                .unwrap();
        match cli.command {
            Commands::Transcribe {
                language, output, ..
            } => {
                assert_eq!(language, "en-US");
                assert_eq!(output, Some(PathBuf::from("out.txt")));
            }
            _ => panic!("expected transcribe"),
        }
    }
}
