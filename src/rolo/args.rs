use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Interactive console contact book", long_about = None)]
pub struct Cli {
    /// Path to the contact book file (defaults to the user data directory)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
