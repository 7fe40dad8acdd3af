use clap::Parser;
use std::path::PathBuf;

use deckpress::EngineChoice;

#[derive(Parser)]
#[command(name = "deckpress", version, about = "DECKPRESS CLI")]
pub struct CliArgs {
    /// Input presentation files and/or folders to scan (repeatable)
    #[arg(short, long = "input", value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Output directory for the generated PDFs
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Conversion engine (auto picks PowerPoint on Windows when present,
    /// otherwise LibreOffice)
    #[arg(short, long, value_enum, default_value_t = EngineChoice::Auto)]
    pub engine: EngineChoice,

    /// Scan folders recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Probe the host for available engines and exit
    #[arg(long, default_value_t = false)]
    pub detect: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
