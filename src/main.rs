//! Tent Checklist CLI Entry Point
//!
//! Pick a tent size, choose ballast and add-ons, and check off packing
//! items. Progress is kept per size in local storage.

mod commands;
mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::{Parser, Subcommand};

use config::{AppConfig, APP_NAME};
use rolling_logger::LoggerError;
use tent_checklist_lib::repository::init_db;
use tent_checklist_lib::{
    validate_catalog, BallastType, ChecklistRepository, DomainError, KeyValueStorage, MemoryStorage,
    SqliteStorage, Toggle,
};

/// Packing checklist for frame tent crews.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version, about)]
struct Cli {
    /// Directory holding local storage and logs
    #[arg(long, global = true, env = "TENT_CHECKLIST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep state in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Log filter directive
    #[arg(long = "log", global = true, env = "TENT_CHECKLIST_LOG", default_value = "info")]
    log_filter: String,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List tent sizes
    Sizes,
    /// Show the checklist for a size
    Show {
        size: String,
        #[arg(long)]
        json: bool,
    },
    /// Show packing progress for a size
    Progress {
        size: String,
        #[arg(long)]
        json: bool,
    },
    /// Check an item
    Check { size: String, item: String },
    /// Uncheck an item
    Uncheck { size: String, item: String },
    /// Check (or with --clear, uncheck) every item in a section
    CheckSection {
        size: String,
        section: String,
        #[arg(long)]
        clear: bool,
    },
    /// Choose stakes or concrete
    Ballast {
        size: String,
        #[arg(value_parser = parse_ballast)]
        ballast: BallastType,
    },
    /// Include walls (yes/no)
    Walls {
        size: String,
        #[arg(value_parser = parse_toggle)]
        option: Toggle,
    },
    /// Include lighting (yes/no)
    Lighting {
        size: String,
        #[arg(value_parser = parse_toggle)]
        option: Toggle,
    },
    /// Clear checkmarks and selections for a size
    Reset {
        size: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print recent log lines
    Logs,
}

fn parse_ballast(s: &str) -> Result<BallastType, String> {
    s.parse().map_err(|e: DomainError| e.to_string())
}

fn parse_toggle(s: &str) -> Result<Toggle, String> {
    s.parse().map_err(|e: DomainError| e.to_string())
}

fn open_repository(config: &AppConfig) -> anyhow::Result<ChecklistRepository> {
    let storage: Arc<dyn KeyValueStorage> = if config.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        let conn = init_db(&config.db_path())
            .with_context(|| format!("opening {}", config.db_path().display()))?;
        Arc::new(SqliteStorage::new(Arc::new(Mutex::new(conn))))
    };
    Ok(ChecklistRepository::new(storage))
}

fn init_logging(config: &AppConfig) {
    let options = config.logger_options();
    let result = if config.ephemeral {
        rolling_logger::init_stderr(options)
    } else {
        rolling_logger::init_logger(config.log_dir(), APP_NAME, options)
    };
    match result {
        Ok(()) | Err(LoggerError::AlreadyInitialized) => {}
        Err(e) => eprintln!("Logging disabled: {}", e),
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = AppConfig::new(cli.data_dir, cli.ephemeral, cli.log_filter, cli.verbose);
    if !config.ephemeral {
        config
            .ensure_data_dir()
            .with_context(|| format!("creating {}", config.data_dir.display()))?;
    }
    init_logging(&config);

    validate_catalog()?;
    let repo = open_repository(&config)?;

    match cli.command {
        Commands::Sizes => commands::list_sizes(&repo),
        Commands::Show { size, json } => commands::show(&repo, &size, json),
        Commands::Progress { size, json } => commands::progress(&repo, &size, json),
        Commands::Check { size, item } => commands::set_item(&repo, &size, &item, true),
        Commands::Uncheck { size, item } => commands::set_item(&repo, &size, &item, false),
        Commands::CheckSection { size, section, clear } => {
            commands::set_section(&repo, &size, &section, !clear)
        }
        Commands::Ballast { size, ballast } => commands::set_ballast(&repo, &size, ballast),
        Commands::Walls { size, option } => commands::set_walls(&repo, &size, option),
        Commands::Lighting { size, option } => commands::set_lighting(&repo, &size, option),
        Commands::Reset { size, yes } => commands::reset(&repo, &size, yes),
        Commands::Logs => commands::recent_logs(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(DomainError::UnknownSize(size)) = e.downcast_ref::<DomainError>() {
                eprintln!("{}", render::invalid_size(size));
                return ExitCode::from(2);
            }
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
