//! Charforge command line.
//!
//! `charforge build` turns a TOML template into a saved JSON character sheet,
//! `charforge load` prints a saved sheet and `charforge empty` writes a blank
//! template to fill in.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_domain::HitPointMethod;
use charforge_engine::infrastructure::{
    character_files::{load_character, resolve_character_path, save_character},
    settings::{load_dotenv, AppSettings},
    template_files::{load_template, resolve_template_path, write_empty_template},
};
use charforge_engine::App;

#[derive(Parser, Debug)]
#[command(name = "charforge", version, about = "Build 5e characters from TOML templates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a character from a template and save it as JSON
    Build {
        /// Template file, or a bare name looked up in the template directory
        #[arg(short, long)]
        file: String,

        /// Print the finished character sheet
        #[arg(short, long)]
        print: bool,

        /// Roll hit points instead of taking the average
        #[arg(short, long = "roll-hp", alias = "rollHP")]
        roll_hp: bool,
    },

    /// Print a previously saved character
    Load {
        /// Saved JSON file, or a bare name looked up in the character directory
        #[arg(short, long)]
        file: String,
    },

    /// Write a blank template into the template directory
    Empty,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_result = std::env::current_dir()
        .map_err(dotenvy::Error::Io)
        .and_then(|dir| load_dotenv(&dir));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match dotenv_result {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env loaded"),
    }

    let cli = Cli::parse();
    let settings = AppSettings::from_env();

    match cli.command {
        Command::Build {
            file,
            print,
            roll_hp,
        } => build(settings, &file, print, roll_hp).await,
        Command::Load { file } => {
            let path = resolve_character_path(&settings.character_dir, &file);
            let character = load_character(&path)
                .with_context(|| format!("Failed to load character from {}", path.display()))?;
            println!("{character}");
            Ok(())
        }
        Command::Empty => {
            let path = write_empty_template(&settings.template_dir)
                .context("Failed to write empty template")?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

async fn build(settings: AppSettings, file: &str, print: bool, roll_hp: bool) -> anyhow::Result<()> {
    let path = resolve_template_path(&settings.template_dir, file)?;
    let template = load_template(&path)
        .with_context(|| format!("Failed to load template {}", path.display()))?;

    let app = App::new(settings);
    let character = app
        .use_cases
        .build_character
        .execute(&template, HitPointMethod::from_roll_flag(roll_hp))
        .await
        .with_context(|| format!("Failed to build {}", template.name))?;

    if print {
        println!("{character}");
    }

    let saved = save_character(&app.settings.character_dir, &character)
        .context("Failed to save character")?;
    println!("Saved {}", saved.display());

    Ok(())
}
