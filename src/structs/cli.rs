use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "panelscope")]
#[clap(about = "Survey-panel analytics client", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
