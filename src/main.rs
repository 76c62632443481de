mod cli;

use anyhow::{bail, Result};
use clap::Parser;
use fasta_sampler::{modes, Sampler};
use log::LevelFilter;

use crate::cli::{Cli, Command};

fn init_logger(verbosity: u8) {
    let filter_level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose);

    let summary = match args.command {
        Command::Random(args) => {
            let mut sampler = match args.seed {
                Some(seed) => Sampler::seeded(seed),
                None => Sampler::from_entropy(),
            };
            modes::random_subsample(
                &args.input,
                &args.percentages,
                args.repetitions,
                &args.output_stem,
                args.case,
                &mut sampler,
            )?
        }
        Command::Select(args) => {
            modes::select_by_ids(&args.input, &args.id_file, &args.output, args.case)?
        }
    };

    if summary.failed > 0 {
        bail!(
            "{} of {} output files could not be written",
            summary.failed,
            summary.failed + summary.written
        );
    }
    Ok(())
}
