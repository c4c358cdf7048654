mod commands;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tweetstance-cli")]
#[command(about = "Climate tweet classification from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a piece of text with one of the bundled models
    Classify {
        /// Model label, exactly as the app lists it (see `models`)
        #[arg(long)]
        model: String,

        /// Text to classify
        #[arg(long)]
        text: String,
    },
    /// List the bundled models and the artifact file each one reads
    Models,
    /// Summarise the labeled dataset: counts, shares, and top words
    Summary,
    /// Verify that every artifact in the resources directory loads
    Check,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = tweetstance_core::load_app_config()?;

    match cli.command {
        Commands::Classify { model, text } => commands::run_classify(&config, &model, &text),
        Commands::Models => {
            commands::run_models();
            Ok(())
        }
        Commands::Summary => commands::run_summary(&config),
        Commands::Check => commands::run_check(&config),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn parses_classify_with_model_and_text() {
        let cli = Cli::try_parse_from([
            "tweetstance-cli",
            "classify",
            "--model",
            "Naive-Baise",
            "--text",
            "It is freezing and snowing",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Classify { ref model, ref text }
                if model == "Naive-Baise" && text == "It is freezing and snowing"
        ));
    }

    #[test]
    fn classify_requires_both_flags() {
        let result = Cli::try_parse_from(["tweetstance-cli", "classify", "--model", "SVC-Linear"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_bare_subcommands() {
        assert!(matches!(
            Cli::try_parse_from(["tweetstance-cli", "models"]).unwrap().command,
            Commands::Models
        ));
        assert!(matches!(
            Cli::try_parse_from(["tweetstance-cli", "summary"]).unwrap().command,
            Commands::Summary
        ));
        assert!(matches!(
            Cli::try_parse_from(["tweetstance-cli", "check"]).unwrap().command,
            Commands::Check
        ));
    }

    #[test]
    fn a_subcommand_is_required() {
        assert!(Cli::try_parse_from(["tweetstance-cli"]).is_err());
    }
}
