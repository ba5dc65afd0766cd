use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tone-audio",
    version,
    about = "Generate Thai tone pronunciation clips via the Botnoi voice API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Canonical audio directory (default: data/audio)"
    )]
    pub source_dir: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Published audio directory (default: tone-cheatsheet/public/audio)"
    )]
    pub dest_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the full vocabulary and mirror successes to the published dir
    Generate,
    /// Generate one clip from the command line
    Single(SingleArgs),
    /// Print the word-to-filename table
    Vocab(VocabArgs),
}

#[derive(Args, Debug)]
pub struct SingleArgs {
    #[arg(long, help = "Thai text to synthesize")]
    pub text: String,

    #[arg(
        long,
        value_name = "FILE",
        help = "Output filename (e.g. custom.mp3), stored under the canonical dir"
    )]
    pub output: String,

    #[arg(long, default_value = "1", help = "Speaker id")]
    pub speaker: String,

    #[arg(long, default_value_t = 1.0, help = "Volume")]
    pub volume: f64,

    #[arg(long, default_value_t = 1.0, help = "Speed")]
    pub speed: f64,
}

#[derive(Args, Debug)]
pub struct VocabArgs {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}
