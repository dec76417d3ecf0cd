mod analysis;
mod config;
mod display;
mod error;
mod fetch;
mod import;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};

use crate::analysis::compute_frequencies;
use crate::analysis::suggest::suggest;
use crate::config::LottoConfig;
use crate::display::{
    display_frequencies, display_history_summary, display_suggestion, display_sync_summary,
    display_year_files,
};
use crate::fetch::{HttpSource, sync_years};
use crate::import::load_history;
use lotto_db::store::{ensure_data_dir, list_year_files};

#[derive(Parser)]
#[command(name = "lotto", about = "Suggestion de combinaison à partir de l'historique du Lotto")]
struct Cli {
    /// Fichier de configuration JSON
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Répertoire des fichiers annuels
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Niveau de journalisation par défaut (RUST_LOG est prioritaire)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Télécharger les résultats annuels
    Fetch {
        /// Première année
        #[arg(long)]
        from: Option<i32>,

        /// Dernière année
        #[arg(long)]
        to: Option<i32>,
    },

    /// Suggérer une combinaison
    Suggest {
        /// Ne pas télécharger, utiliser uniquement les fichiers présents
        #[arg(long)]
        offline: bool,

        /// Nombre de numéros de la combinaison
        #[arg(short, long)]
        picks: Option<usize>,

        /// Échouer si la combinaison a déjà été tirée
        #[arg(long)]
        reject_drawn: bool,
    },

    /// Afficher les fréquences des numéros et des bonus
    Stats {
        /// Nombre de numéros à afficher
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Afficher le répertoire de données et les années présentes
    DataDir,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = LottoConfig::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match cli.command {
        Command::Fetch { from, to } => {
            config.first_year = from.unwrap_or(config.first_year);
            config.last_year = to.unwrap_or(config.last_year);
            config.validate()?;
            cmd_fetch(&config)
        }
        Command::Suggest {
            offline,
            picks,
            reject_drawn,
        } => {
            config.picks = picks.unwrap_or(config.picks);
            config.reject_drawn |= reject_drawn;
            config.validate()?;
            cmd_suggest(&config, offline)
        }
        Command::Stats { top } => {
            config.validate()?;
            cmd_stats(&config, top)
        }
        Command::DataDir => cmd_data_dir(&config),
    }
}

fn cmd_fetch(config: &LottoConfig) -> Result<()> {
    ensure_data_dir(&config.data_dir)?;
    let source = HttpSource::new(&config.base_url, config.timeout_secs)?;
    let current_year = chrono::Local::now().year();

    let report = sync_years(
        &source,
        &config.data_dir,
        &config.file_prefix,
        config.years(),
        current_year,
    );
    display_sync_summary(&report);
    Ok(())
}

fn cmd_suggest(config: &LottoConfig, offline: bool) -> Result<()> {
    if !offline {
        cmd_fetch(config)?;
    }

    let history = load_history(&config.data_dir, config.delimiter_byte())?;
    display_history_summary(&history);

    let suggestion = suggest(&history.draws, config.suggest_options())
        .context("Impossible de proposer une combinaison")?;
    display_suggestion(&suggestion);
    Ok(())
}

fn cmd_stats(config: &LottoConfig, top: usize) -> Result<()> {
    let history = load_history(&config.data_dir, config.delimiter_byte())?;
    let (numbers, bonus) = compute_frequencies(&history.draws);
    if numbers.is_empty() {
        println!("Aucun tirage. Lancez d'abord : lotto fetch");
        return Ok(());
    }
    display_history_summary(&history);
    display_frequencies(&numbers, &bonus, top);
    Ok(())
}

fn cmd_data_dir(config: &LottoConfig) -> Result<()> {
    println!("{}", config.data_dir.display());
    let files = list_year_files(&config.data_dir, &config.file_prefix)?;
    display_year_files(&files);
    Ok(())
}
