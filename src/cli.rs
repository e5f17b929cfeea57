//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casewatch")]
#[command(about = "Poll USCIS case status and notify on change", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The USCIS case receipt number to query
    #[arg(short = 'c', long = "casenumber")]
    pub casenumber: String,

    /// Include the detailed status paragraph in the report
    #[arg(short = 'd', long = "detail")]
    pub detail: bool,

    /// One or more email addresses, separated by comma, to send the
    /// notification mail to when the status changed
    #[arg(long)]
    pub mailto: Option<String>,

    /// Directory holding the per-case status records
    /// (default: the directory containing the executable)
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Split `--mailto` into individual addresses, dropping empties.
    pub fn recipients(&self) -> Vec<String> {
        self.mailto
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(|addr| addr.trim().to_string())
                    .filter(|addr| !addr.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
