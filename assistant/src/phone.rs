use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Label word, optional punctuation, then a run of digits, spaces, `+`,
/// parentheses and hyphens between 8 and 20 characters long.
static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(?:Phone|Call|Tel|T|Contact)[:.]?\s*([+\d\s().-]{8,20})")
        .case_insensitive(true)
        .build()
        .expect("label pattern is valid")
});

/// Configuration for the phone-number scan over a narrative.
///
/// The scan is inherently fuzzy; the window and digit threshold are the
/// knobs that keep it honest.
#[derive(Debug, Clone, Copy)]
pub struct PhoneHeuristic {
    /// How many bytes of narrative to examine, counted from the start of
    /// the title match.
    pub window: usize,
    /// Minimum digits a candidate must contain, after stripping every
    /// non-digit character, to be accepted as a phone number.
    pub min_digits: usize,
}

impl Default for PhoneHeuristic {
    fn default() -> Self {
        Self {
            window: 300,
            min_digits: 7,
        }
    }
}

impl PhoneHeuristic {
    /// Scan `narrative` for a phone number stated near the first mention
    /// of `title`.
    ///
    /// Best-effort: returns `None` when the title is not mentioned, when
    /// no labeled number appears within the window, when the match has too
    /// few digits, or on any pattern failure. Never panics, so one odd
    /// title cannot abort processing of its siblings.
    #[must_use]
    pub fn extract_near(&self, narrative: &str, title: &str) -> Option<String> {
        if title.is_empty() {
            return None;
        }

        let title_pattern = RegexBuilder::new(&regex::escape(title))
            .case_insensitive(true)
            .build()
            .ok()?;
        let start = title_pattern.find(narrative)?.start();

        let end = floor_char_boundary(narrative, start.saturating_add(self.window));
        let snippet = &narrative[start..end];

        let captures = LABEL_PATTERN.captures(snippet)?;
        let raw = captures.get(1)?.as_str().trim();

        let digits = raw.chars().filter(char::is_ascii_digit).count();
        if digits >= self.min_digits {
            Some(raw.to_string())
        } else {
            None
        }
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
