//! Style classification — fixed-precedence keyword predicates.

use regex::Regex;

use crate::schema::style::Style;

/// Picks exactly one [`Style`] for a prompt.
///
/// Each style in [`Style::PRECEDENCE`] owns one predicate: an alternation of
/// its keywords. Predicates are evaluated in that order and the first match
/// wins regardless of how many others also match. Nothing matching yields
/// [`Style::Standard`].
#[derive(Debug, Clone)]
pub struct StyleClassifier {
    rules: Vec<(Style, Regex)>,
}

impl StyleClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        let rules = Style::PRECEDENCE
            .iter()
            .map(|&style| {
                let alternation = style
                    .keywords()
                    .iter()
                    .map(|kw| regex::escape(kw))
                    .collect::<Vec<_>>()
                    .join("|");
                Regex::new(&alternation).map(|re| (style, re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Classify lower-cased prompt text.
    pub fn classify(&self, text: &str) -> Style {
        self.rules
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(style, _)| *style)
            .unwrap_or(Style::Standard)
    }

    /// Every style whose predicate holds, in precedence order.
    pub fn matching(&self, text: &str) -> Vec<Style> {
        self.rules
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(style, _)| *style)
            .collect()
    }
}
