// Per-phase cycle statistics in the text format the median extractor reads back.
// Not used by the two filters: this is the producer side, for harnesses that
// time initStart / resp / initEnd in Rust and pipe their output to extract_medians.
// Samples are raw cycle-counter timestamps taken around each call; the report
// works on the deltas between consecutive timestamps.

use std::fmt;

use crate::bench_params::Section;
use crate::error::{BenchError, Result};

/// Median of `t`, sorting it in place. Even lengths average the two middle values.
pub fn median(t: &mut [u64]) -> u64 {
    let n = t.len();
    if n == 0 {
        return 0;
    }
    t.sort_unstable();
    if n % 2 == 1 {
        t[n / 2]
    } else {
        // avoid overflow on large counters
        let (lo, hi) = (t[n / 2 - 1], t[n / 2]);
        lo / 2 + hi / 2 + (lo % 2 + hi % 2) / 2
    }
}

pub fn average(t: &[u64]) -> u64 {
    if t.is_empty() {
        return 0;
    }
    let sum: u128 = t.iter().map(|&x| x as u128).sum();
    (sum / t.len() as u128) as u64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedReport {
    pub section: Section,
    pub median: u64,
    pub average: u64,
}

impl SpeedReport {
    /// `overhead` is the cost of reading the counter itself and is subtracted from each delta.
    pub fn from_timestamps(section: Section, timestamps: &[u64], overhead: u64) -> Result<Self> {
        if timestamps.len() < 2 {
            return Err(BenchError::TooFewSamples {
                found: timestamps.len(),
            });
        }

        let mut deltas: Vec<u64> = timestamps
            .windows(2)
            .map(|w| w[1].saturating_sub(w[0]).saturating_sub(overhead))
            .collect();

        let average = average(&deltas);
        let median = median(&mut deltas);
        Ok(Self {
            section,
            median,
            average,
        })
    }
}

impl fmt::Display for SpeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: ", self.section)?;
        writeln!(f, "median: {} cycles/ticks", self.median)?;
        writeln!(f, "average: {} cycles/ticks", self.average)?;
        writeln!(f)
    }
}
