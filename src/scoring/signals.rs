//! Textual quality signals detected in result snippets.
//!
//! All matching is case-insensitive substring matching against fixed marker lists.

pub const CITATION_MARKERS: &[&str] = &[
    "cited by",
    "references",
    "bibliography",
    "et al.",
    "according to",
    "[1]",
    "[2]",
    "doi:",
    "doi.org",
    "pmid:",
    "isbn:",
];

pub const ACADEMIC_MARKERS: &[&str] = &[
    "study",
    "research",
    "analysis",
    "evidence",
    "data",
    "findings",
    "methodology",
    "conclusion",
    "results show",
    "published in",
    "peer-reviewed",
];

pub const AUTHOR_MARKERS: &[&str] = &[
    "professor",
    "dr.",
    "phd",
    "m.d.",
    "researcher",
    "scientist",
    "expert",
    "specialist",
    "author",
    "journalist",
    "editor",
];

/// Lowercased snippet with the signal checks the scorer needs.
#[derive(Debug, Clone)]
pub struct SnippetSignals {
    lowered: String,
}

impl SnippetSignals {
    pub fn new(snippet: &str) -> Self {
        Self {
            lowered: snippet.to_lowercase(),
        }
    }

    pub fn has_citations(&self) -> bool {
        self.contains_any(CITATION_MARKERS)
    }

    pub fn has_author_credentials(&self) -> bool {
        self.contains_any(AUTHOR_MARKERS)
    }

    /// Fraction of [`ACADEMIC_MARKERS`] present, in `[0, 1]`.
    pub fn academic_density(&self) -> f32 {
        let hits = ACADEMIC_MARKERS
            .iter()
            .filter(|marker| self.lowered.contains(*marker))
            .count();
        hits as f32 / ACADEMIC_MARKERS.len() as f32
    }

    fn contains_any(&self, markers: &[&str]) -> bool {
        markers.iter().any(|marker| self.lowered.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_detection_is_case_insensitive() {
        assert!(SnippetSignals::new("Smith ET AL. report").has_citations());
        assert!(SnippetSignals::new("see DOI:10.1000/182").has_citations());
        assert!(!SnippetSignals::new("a plain sentence").has_citations());
    }

    #[test]
    fn test_author_detection() {
        assert!(SnippetSignals::new("Written by Professor Jane Doe").has_author_credentials());
        assert!(SnippetSignals::new("interview with a PhD candidate").has_author_credentials());
        assert!(!SnippetSignals::new("cats and dogs").has_author_credentials());
    }

    #[test]
    fn test_academic_density_bounds() {
        assert_eq!(SnippetSignals::new("").academic_density(), 0.0);

        let all = ACADEMIC_MARKERS.join(" ");
        assert_eq!(SnippetSignals::new(&all).academic_density(), 1.0);

        let some = SnippetSignals::new("This study presents new findings").academic_density();
        assert!((some - 2.0 / ACADEMIC_MARKERS.len() as f32).abs() < f32::EPSILON);
    }
}
