// PAKE benchmark table layout: 4 executables x 3 measured phases.

use std::fmt;

pub const EXECUTABLES: [&str; 4] = [
    "Kyber Crystals Ref",
    "Tempo Alg #1",
    "Tempo Alg #2",
    "Tempo Alg #3",
];

pub const COLUMNS: [&str; 3] = ["initStart", "resp", "initEnd"];

pub const EXPECTED_ENTRIES: usize = EXECUTABLES.len() * COLUMNS.len(); // 12

pub const TABLE_CAPTION: &str = "PAKE Median Cycle Counts";

// digits captured verbatim, never parsed
pub const MEDIAN_PATTERN: &str = r"median:\s*([0-9]+)";

/// One measured phase of a PAKE run, in the order the harness prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    InitStart,
    Resp,
    InitEnd,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::InitStart, Section::Resp, Section::InitEnd];

    pub fn name(self) -> &'static str {
        COLUMNS[self.index()]
    }

    pub fn index(self) -> usize {
        match self {
            Section::InitStart => 0,
            Section::Resp => 1,
            Section::InitEnd => 2,
        }
    }

    /// Exact match against an already stripped header line.
    pub fn from_header(s: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|sec| sec.name() == s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_column_order() {
        for (i, sec) in Section::ALL.iter().enumerate() {
            assert_eq!(sec.index(), i);
            assert_eq!(sec.name(), COLUMNS[i]);
        }
        assert_eq!(EXPECTED_ENTRIES, 12);
    }

    #[test]
    fn header_match_is_exact() {
        assert_eq!(Section::from_header("resp"), Some(Section::Resp));
        assert_eq!(Section::from_header("initEnd"), Some(Section::InitEnd));
        assert_eq!(Section::from_header("Resp"), None);
        assert_eq!(Section::from_header("resp:"), None);
        assert_eq!(Section::from_header(""), None);
    }
}
