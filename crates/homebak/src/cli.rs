//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;
use homebak_transfer::DEFAULT_PROGRAM;

/// homebak - mirror selected parts of your home directory with rsync
#[derive(Parser, Debug)]
#[command(name = "homebak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base of the backup destination; files go to <DESTINATION>/<user>
    pub destination: Utf8PathBuf,

    /// Increase verbosity (-v, -vv, -vvv); also passed on to rsync
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a YAML file with `include` and `exclude` lists
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    /// Transfer program name or path
    #[arg(long, env = "HOMEBAK_RSYNC", default_value = DEFAULT_PROGRAM)]
    pub rsync: String,

    /// Validate and print the transfer command without running it
    #[arg(long)]
    pub dry_run: bool,
}
