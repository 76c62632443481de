use std::path::{Path, PathBuf};

use log::{error, info};

use crate::{
    fasta, ids,
    sample::{sample_size, Sampler},
    select::{sort_by_header, Selector},
    Case, Error, Record,
};

/// Outcome of a run: output files written and output files that failed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub failed: usize,
}

impl Summary {
    fn record_write<'a, I>(&mut self, path: &Path, records: I)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        match fasta::write_path(path, records) {
            Ok(()) => self.written += 1,
            Err(e) => {
                error!("{e}");
                self.failed += 1;
            }
        }
    }
}

/// Name of the file holding one repetition of one percentage.
pub fn output_path(stem: &str, percentage: u32, repetition: usize) -> PathBuf {
    PathBuf::from(format!("{stem}_{percentage}_{repetition}.fasta"))
}

/// Random subsampling: one output file per percentage and repetition.
///
/// Percentages are checked before the input is read. An unreadable input is
/// sampled as an empty collection.
pub fn random_subsample(
    input: &Path,
    percentages: &[u32],
    repetitions: usize,
    stem: &str,
    case: Case,
    sampler: &mut Sampler,
) -> Result<Summary, Error> {
    if let Some(&p) = percentages.iter().find(|&&p| p > 100) {
        return Err(Error::PercentageOutOfRange(p));
    }

    info!("FASTA file: {}", input.display());
    info!("Percentages: {percentages:?}");
    info!("Repetitions: {repetitions}");
    info!("Stem of output files: {stem}");
    info!("Case: {case}");

    info!("Reading FASTA file...");
    let records = fasta::read_path(input, case);
    info!("Read {} records", records.len());

    let mut summary = Summary::default();
    for &percentage in percentages {
        let n = sample_size(percentage, records.len())?;
        info!("{percentage} %: sampling {n} of {} records", records.len());
        for repetition in 0..repetitions {
            let sample = sampler.sample(&records, n)?;
            summary.record_write(&output_path(stem, percentage, repetition), sample);
            info!("{percentage} %: {} / {repetitions} completed", repetition + 1);
        }
    }

    info!("All samples obtained!");
    Ok(summary)
}

/// Selection by identifier list: exactly one output file.
///
/// Unreadable inputs are treated as empty and identifiers without a matching
/// record are skipped.
pub fn select_by_ids(
    input: &Path,
    id_file: &Path,
    output: &Path,
    case: Case,
) -> Result<Summary, Error> {
    info!("FASTA file: {}", input.display());
    info!("ID file: {}", id_file.display());
    info!("Output file: {}", output.display());
    info!("Case: {case}");

    info!("Reading FASTA file...");
    let mut records = fasta::read_path(input, case);
    sort_by_header(&mut records);

    info!("Reading ID file...");
    let targets = ids::read_path(id_file);

    info!("Selecting {} entries from FASTA file...", targets.len());
    let selector = Selector::new(&records);
    let selected = selector.select(&targets);
    info!("Matched {} of {} identifiers", selected.len(), targets.len());

    let mut summary = Summary::default();
    summary.record_write(output, selected);

    info!("Selection obtained!");
    Ok(summary)
}
