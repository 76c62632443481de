use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{Error, Record};

/// Number of records making up `percentage` percent of `total`, rounded up.
///
/// Percentages above 100 are rejected.
pub fn sample_size(percentage: u32, total: usize) -> Result<usize, Error> {
    if percentage > 100 {
        return Err(Error::PercentageOutOfRange(percentage));
    }
    Ok((total * percentage as usize).div_ceil(100))
}

/// Draws uniform random subsets without replacement.
pub struct Sampler {
    rng: StdRng,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Sampler {
    /// Seeds the generator from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeds the generator deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses `n` distinct records uniformly at random.
    ///
    /// All indices are shuffled, then the first `n` are taken, so every call
    /// costs O(records.len()) regardless of `n`. The returned order is random.
    pub fn sample<'a>(
        &mut self,
        records: &'a [Record],
        n: usize,
    ) -> Result<Vec<&'a Record>, Error> {
        if n > records.len() {
            return Err(Error::SampleSizeExceeded {
                requested: n,
                available: records.len(),
            });
        }
        let mut indices: Vec<usize> = (0..records.len()).collect();
        indices.shuffle(&mut self.rng);
        Ok(indices[..n].iter().map(|&i| &records[i]).collect())
    }

    /// Samples `percentage` percent of the records.
    pub fn sample_percentage<'a>(
        &mut self,
        records: &'a [Record],
        percentage: u32,
    ) -> Result<Vec<&'a Record>, Error> {
        let n = sample_size(percentage, records.len())?;
        self.sample(records, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!(">seq{i}"), "ACGT"))
            .collect()
    }

    #[test]
    fn test_sample_size_rounds_up() {
        assert_eq!(sample_size(1, 3).unwrap(), 1);
        assert_eq!(sample_size(50, 4).unwrap(), 2);
        assert_eq!(sample_size(50, 5).unwrap(), 3);
        assert_eq!(sample_size(33, 100).unwrap(), 33);
        assert_eq!(sample_size(100, 7).unwrap(), 7);
        assert_eq!(sample_size(0, 7).unwrap(), 0);
        assert_eq!(sample_size(75, 0).unwrap(), 0);
    }

    #[test]
    fn test_sample_size_out_of_range() {
        assert!(matches!(
            sample_size(101, 10),
            Err(Error::PercentageOutOfRange(101))
        ));
    }

    #[test]
    fn test_sample_distinct_members() {
        let all = records(20);
        let mut sampler = Sampler::seeded(7);
        for n in 0..=all.len() {
            let sample = sampler.sample(&all, n).unwrap();
            assert_eq!(sample.len(), n);
            let ids: HashSet<_> = sample.iter().map(|r| r.id()).collect();
            assert_eq!(ids.len(), n);
            assert!(sample.iter().all(|r| all.contains(r)));
        }
    }

    #[test]
    fn test_sample_too_large() {
        let all = records(3);
        let mut sampler = Sampler::seeded(1);
        assert!(matches!(
            sampler.sample(&all, 4),
            Err(Error::SampleSizeExceeded {
                requested: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn test_sample_empty() {
        let mut sampler = Sampler::from_entropy();
        assert!(sampler.sample(&[], 0).unwrap().is_empty());
        assert!(sampler.sample_percentage(&[], 50).unwrap().is_empty());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let all = records(50);
        let a = Sampler::seeded(42).sample(&all, 10).unwrap();
        let b = Sampler::seeded(42).sample(&all, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_near_uniform() {
        let all = records(10);
        let mut sampler = Sampler::seeded(2024);
        let mut counts = vec![0usize; all.len()];
        let draws = 20_000;
        for _ in 0..draws {
            for record in sampler.sample(&all, 3).unwrap() {
                let pos = all.iter().position(|r| r == record).unwrap();
                counts[pos] += 1;
            }
        }
        // Expected 6000 per record
        let expected = draws * 3 / all.len();
        for count in counts {
            assert!(count.abs_diff(expected) < expected / 10, "count = {count}");
        }
    }
}
