use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use fasta_sampler::Case;

/// Random subsampling and identifier-based selection of FASTA records.
///
/// Comments in the input FASTA file are not transferred to the output and
/// output sequences are always written on a single line.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw random samples for each percentage, repeated a number of times
    #[command(visible_alias = "r")]
    Random(RandomArgs),

    /// Select the records named in an identifier list
    #[command(visible_alias = "l")]
    Select(SelectArgs),
}

#[derive(Args)]
pub struct RandomArgs {
    /// Input FASTA file to sample from
    pub input: PathBuf,

    /// Comma-separated list of integer percentages (e.g. 50,60,70)
    #[arg(value_delimiter = ',', action = ArgAction::Set, num_args = 1, required = true)]
    pub percentages: Vec<u32>,

    /// Number of samples to obtain per percentage
    pub repetitions: usize,

    /// Path and prefix of output files (e.g. /home/user/sample), completed by
    /// the percentage and repetition number (e.g. /home/user/sample_50_0.fasta)
    pub output_stem: String,

    /// Case of output sequences (L = lower, U = upper, K = keep as is)
    #[arg(default_value = "K")]
    pub case: Case,

    /// Seed for reproducible sampling (drawn from the OS if not provided)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct SelectArgs {
    /// Input FASTA file to select from
    pub input: PathBuf,

    /// List of identifiers (one per line)
    pub id_file: PathBuf,

    /// Output FASTA file (e.g. /home/user/selected.fasta)
    pub output: PathBuf,

    /// Case of output sequences (L = lower, U = upper, K = keep as is)
    #[arg(default_value = "K")]
    pub case: Case,
}
