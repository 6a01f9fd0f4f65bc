use clap::{ArgAction, Parser, Subcommand};
use std::{path::PathBuf, time::Duration};

use crate::api::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(name = "cocktails", version, about = "Search and browse TheCocktailDB")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub config: Config,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search drinks by name (empty query shows the default selection)
    Search {
        /// Words of the query
        query: Vec<String>,
    },
    /// Show ingredients, ratios and steps of one drink
    Show {
        /// Drink id (idDrink)
        id: String,

        /// Write the ingredient pie chart to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// List recent search terms
    History {
        /// Forget all search terms
        #[arg(long)]
        clear: bool,
    },
    /// List recently viewed drinks
    Viewed {
        /// Forget all viewed drinks
        #[arg(long)]
        clear: bool,
    },
    /// Read queries from stdin, one per line, and search once typing settles
    Watch,
}

/// Client configuration
#[derive(Parser, Debug, Clone)]
pub struct Config {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// TheCocktailDB API base URL
    #[arg(long, env = "COCKTAILS_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// File holding search history and viewed drinks
    #[arg(long, env = "COCKTAILS_DATA_FILE", default_value = "cocktails.json", global = true)]
    pub data_file: PathBuf,

    /// Optional log file (logs always go to stderr as well)
    #[arg(long, env = "COCKTAILS_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Quiet period before a typed query is sent, in milliseconds
    #[arg(long, env = "COCKTAILS_DEBOUNCE_MS", default_value_t = 500, global = true)]
    pub debounce_ms: u64,

    /// HTTP request timeout, in seconds
    #[arg(long, env = "COCKTAILS_TIMEOUT_SECS", default_value_t = 12, global = true)]
    pub timeout_secs: u64,

    /// Pie chart width/height in SVG units
    #[arg(long, env = "COCKTAILS_CHART_SIZE", default_value_t = 120.0, global = true)]
    pub chart_size: f64,
}

impl Config {
    #[must_use]
    pub fn verbosity_delta(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }

    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity_delta() {
            d if d <= -2 => "error",
            -1 => "warn,cocktails=error",
            0 => "warn,cocktails=info",
            1 => "info,cocktails=debug,reqwest=info",
            2 => "debug,cocktails=trace,reqwest=debug,hyper=info",
            _ => "trace,cocktails=trace,reqwest=trace,hyper=debug",
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
