mod generate;
mod list;
mod replay;

pub use generate::Generate;
pub use list::List;
pub use replay::Replay;

use std::path::PathBuf;

/// Output format shared by commands that print an expedition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}

/// Content directory override, `CONTENT_DATA_DIR` otherwise.
#[derive(clap::Args, Debug, Default)]
pub struct ContentArgs {
    /// Content data directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}
