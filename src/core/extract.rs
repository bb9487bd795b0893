//! Parameter extraction — keyword-anchored integer lookup in free text.

use regex::Regex;

/// Keywords for the floor count, in precedence order.
pub const FLOOR_KEYWORDS: &[&str] = &["floor", "story", "stories", "level"];
/// Keywords for the building width, in precedence order.
pub const WIDTH_KEYWORDS: &[&str] = &["wide", "width"];
/// Keywords for the building depth, in precedence order.
pub const DEPTH_KEYWORDS: &[&str] = &["deep", "depth"];

/// Extracts one integer dimension using an ordered keyword list.
///
/// Each keyword compiles to a case-insensitive pattern accepting either
/// `<digits> <keyword>` or `<keyword> <digits>` (whitespace optional).
/// Only ASCII digits count. Keywords are tried strictly in list order and
/// the first one that matches wins, even if a later keyword appears earlier
/// in the text.
#[derive(Debug, Clone)]
pub struct NumberExtractor {
    patterns: Vec<Regex>,
}

impl NumberExtractor {
    pub fn new(keywords: &[&str]) -> Result<Self, regex::Error> {
        let patterns = keywords
            .iter()
            .map(|keyword| {
                let kw = regex::escape(keyword);
                Regex::new(&format!(r"(?i)([0-9]+)\s*{kw}|{kw}\s*([0-9]+)"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Values too large for `u64` saturate, so callers see them as oversized
    /// rather than absent.
    pub fn extract(&self, text: &str) -> Option<u64> {
        self.patterns.iter().find_map(|re| {
            let caps = re.captures(text)?;
            let digits = caps.get(1).or_else(|| caps.get(2))?;
            // A non-empty ASCII digit run only fails to parse on overflow.
            Some(digits.as_str().parse().unwrap_or(u64::MAX))
        })
    }
}

/// One-shot form of [`NumberExtractor::extract`].
pub fn extract_number(text: &str, keywords: &[&str]) -> Result<Option<u64>, regex::Error> {
    Ok(NumberExtractor::new(keywords)?.extract(text))
}
