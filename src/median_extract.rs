// Pulls the per-phase median cycle counts out of a benchmark run's text output.
//
// Input looks like:
//   initStart:
//   median: 123456 cycles/ticks
//   average: 130000 cycles/ticks
//   resp:
//   ...
// Only the first line mentioning "median" after a header is considered.

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::bench_params::{Section, MEDIAN_PATTERN};
use crate::error::Result;
use crate::input::for_each_line;

/// Medians recovered from one run, indexed by section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Medians {
    slots: [Option<String>; 3],
}

impl Medians {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.slots[section.index()].as_deref()
    }

    pub fn set(&mut self, section: Section, value: String) {
        self.slots[section.index()] = Some(value);
    }

    /// Recorded values in section order; missing sections are skipped, not padded.
    pub fn values(&self) -> Vec<&str> {
        Section::ALL
            .iter()
            .filter_map(|&sec| self.get(sec))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> Result<()> {
        for v in self.values() {
            writeln!(w, "{v}")?;
        }
        Ok(())
    }
}

static MEDIAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MEDIAN_PATTERN).expect("MEDIAN_PATTERN is a valid regex"));

#[derive(Debug, Default)]
pub struct MedianExtractor {
    current: Option<Section>,
    medians: Medians,
}

impl MedianExtractor {
    pub fn new() -> Self {
        Self {
            current: None,
            medians: Medians::default(),
        }
    }

    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim().trim_end_matches(':');

        if let Some(sec) = Section::from_header(line) {
            debug!(section = %sec, "section header");
            self.current = Some(sec);
            return;
        }

        if !line.contains("median") {
            return;
        }

        // one attempt per header, hit or miss
        let Some(sec) = self.current.take() else {
            return;
        };
        match MEDIAN_RE.captures(line).and_then(|c| c.get(1)) {
            Some(m) => {
                debug!(section = %sec, median = m.as_str(), "median captured");
                self.medians.set(sec, m.as_str().to_string());
            }
            None => debug!(section = %sec, line, "median line without a value"),
        }
    }

    pub fn finish(self) -> Medians {
        self.medians
    }
}

/// Runs the extractor over every line of `reader`.
pub fn extract_medians<R: BufRead>(reader: R) -> Result<Medians> {
    let mut ex = MedianExtractor::new();
    for_each_line(reader, |line| ex.feed_line(line))?;
    Ok(ex.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Medians {
        extract_medians(input.as_bytes()).unwrap()
    }

    fn render(m: &Medians) -> String {
        let mut out = Vec::new();
        m.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn three_sections_in_order() {
        let m = run(
            "initStart:\ncycles median: 100\nresp:\ncycles median: 200\n\
initEnd:\ncycles median: 300\n",
        );
        assert_eq!(render(&m), "100\n200\n300\n");
        assert!(m.is_complete());
    }

    #[test]
    fn output_order_ignores_input_order() {
        let m = run("initEnd:\nmedian: 3\nresp:\nmedian: 2\ninitStart:\nmedian: 1\n");
        assert_eq!(m.values(), vec!["1", "2", "3"]);
    }

    #[test]
    fn header_without_median_is_omitted() {
        let m = run("initStart:\nmedian: 10\nresp:\ninitEnd:\nmedian: 30\n");
        assert_eq!(m.get(Section::Resp), None);
        assert_eq!(render(&m), "10\n30\n");
    }

    #[test]
    fn only_first_median_line_counts() {
        let m = run("resp:\nmedian: 5\nmedian: 6\n");
        assert_eq!(m.get(Section::Resp), Some("5"));
    }

    #[test]
    fn failed_match_still_clears_section() {
        // "median" present but no "median: <digits>"
        let m = run("resp:\nmedian n/a\nmedian: 7\n");
        assert_eq!(m.get(Section::Resp), None);
        assert!(render(&m).is_empty());
    }

    #[test]
    fn median_without_header_ignored() {
        let m = run("median: 99\nsomething\nmedian: 98\n");
        assert!(m.values().is_empty());
    }

    #[test]
    fn unrelated_lines_keep_section_pending() {
        let m = run("initStart: \n\naverage cycles: 40\n  median:   41 cycles/ticks  \n");
        assert_eq!(m.get(Section::InitStart), Some("41"));
    }

    #[test]
    fn header_strips_whitespace_and_colons() {
        let m = run("   initEnd::  \nmedian:8\n");
        assert_eq!(m.get(Section::InitEnd), Some("8"));

        // colon stripping happens after trimming, so inner space breaks the header
        let m = run("initEnd :\nmedian: 8\n");
        assert_eq!(m.get(Section::InitEnd), None);
    }

    #[test]
    fn repeated_header_overwrites() {
        let m = run("resp:\nmedian: 1\nresp:\nmedian: 2\n");
        assert_eq!(m.get(Section::Resp), Some("2"));
    }

    #[test]
    fn digits_kept_verbatim() {
        let m = run("initStart:\nmedian: 007\n");
        assert_eq!(m.get(Section::InitStart), Some("007"));
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_the_run() {
        let input = b"initStart:\nmedian: 100\n\xff\xfe garbage\n\
resp:\nmedian: 200\ninitEnd:\nmedian: 300\n";
        let m = extract_medians(&input[..]).unwrap();
        assert_eq!(render(&m), "100\n200\n300\n");
    }

    #[test]
    fn crlf_line_endings() {
        let m = run("initStart:\r\nmedian: 4\r\n");
        assert_eq!(m.get(Section::InitStart), Some("4"));
    }

    #[test]
    fn same_input_same_output() {
        let input = "initStart:\nmedian: 1\nresp:\nmedian: 2\n";
        assert_eq!(render(&run(input)), render(&run(input)));
    }
}
