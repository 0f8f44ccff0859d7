//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use estate_core::ALL_GROUPS_ID;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "estate",
    version,
    about = "Inspect the real-estate sample dataset",
    long_about = "Builds the placeholder data source and prints group and item lookups.\n\n\
                  Output is metadata only (identifiers, titles, layout hints, counts)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error). Defaults by build mode.
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List groups of a collection.
    Groups {
        /// Collection identifier.
        #[arg(long = "collection", default_value = ALL_GROUPS_ID)]
        collection: String,
    },

    /// Show one group and its items.
    Group {
        #[arg(value_name = "GROUP_ID")]
        unique_id: String,
    },

    /// Show one item.
    Item {
        #[arg(value_name = "ITEM_ID")]
        unique_id: String,
    },

    /// Show the capped preview of a group's items.
    Preview {
        #[arg(value_name = "GROUP_ID")]
        unique_id: String,
    },
}
