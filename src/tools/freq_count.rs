use rayon::prelude::*;

/// Occurrence counts for every byte value seen in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<usize>,
}

impl FrequencyTable {
    /// Count of the symbol, zero if it never occurred.
    pub fn count(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    /// Iterate the symbols that occur at least once, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(sym, count)| (sym as u8, *count))
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Total number of symbols counted. Equal to the input length.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn analyze(data: &[u8]) -> FrequencyTable {
    let counts = if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_usize; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_usize; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<usize>>(),
            )
    } else {
        let mut freqs = vec![0_usize; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    };
    FrequencyTable { counts }
}
