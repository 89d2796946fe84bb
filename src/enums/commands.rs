use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_SEARCH_LIMIT;
use crate::enums::dimension::Dimension;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Search {
        query: Option<String>,
        #[clap(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    Distribution {
        query: String,
        #[clap(short, long, value_enum)]
        dimension: Dimension,
    },
    Drill {
        query: String,
        #[clap(short, long, value_enum)]
        dimension: Dimension,
        #[clap(short, long)]
        label: String,
        /// Write the filtered subset as CSV; without a value a timestamped
        /// file is created in the configured export directory.
        #[clap(short, long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
    Visualize {
        query: String,
    },
    Chat {
        query: Option<String>,
    },
}
