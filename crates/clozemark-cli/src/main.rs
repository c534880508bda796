use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clozemark_config::Config;
use clozemark_engine::{
    Card, FormulaOptions, MathmlRenderer, build_cards, group_keys, next_group_key,
    substitute_with,
};

#[derive(Parser)]
#[command(name = "clozemark", version, about = "Cloze cards and formula rendering")]
struct Cli {
    /// Config file to use instead of ~/.config/clozemark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one card per cloze group
    Cards {
        /// Input file, or `-` for stdin
        file: Option<PathBuf>,
    },
    /// Print the text with every formula rendered
    Render { file: Option<PathBuf> },
    /// Print the group key a new cloze should use
    NextKey { file: Option<PathBuf> },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Cards { file } => {
            let text = read_input(file.as_deref())?;
            let cards = build_cards(&text, &config.card_options());
            log::info!("built {} cards", cards.len());
            print!("{}", format_cards(&cards, config.formula_options()));
        }
        Command::Render { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", render(&text, config.formula_options()));
        }
        Command::NextKey { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", next_group_key(group_keys(&text)));
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            log::info!("Config path: {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("config file not found: {}", path.display()))?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(loaded)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn render(text: &str, formulas: Option<FormulaOptions>) -> String {
    match formulas {
        Some(options) => substitute_with(text, &MathmlRenderer, &options),
        None => text.to_string(),
    }
}

fn format_cards(cards: &[Card], formulas: Option<FormulaOptions>) -> String {
    let mut out = String::new();
    for card in cards {
        let group = &card.group;
        out.push_str(&format!("# c{}: {}\n", group.group_key, group.rendered_summary));
        out.push_str(&format!("front: {}\n", render(card.front(), formulas)));
        out.push_str(&format!("back:  {}\n\n", render(card.back(), formulas)));
    }
    out
}
