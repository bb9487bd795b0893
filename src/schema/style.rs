use serde::{Deserialize, Serialize};
use std::fmt;

/// The architectural style a prompt resolves to.
///
/// Exactly one style applies per request. Which one is decided by
/// [`crate::core::classify::StyleClassifier`], and each variant maps to
/// one generator in [`crate::styles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Standard,
    Modern,
    Gothic,
    Castle,
    Cottage,
    Warehouse,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 6] = [
        Self::Standard,
        Self::Modern,
        Self::Gothic,
        Self::Castle,
        Self::Cottage,
        Self::Warehouse,
    ];

    /// Classification order. The first style whose keywords match wins;
    /// `Standard` is the fallback and never appears here.
    pub const PRECEDENCE: [Style; 5] = [
        Self::Gothic,
        Self::Castle,
        Self::Cottage,
        Self::Warehouse,
        Self::Modern,
    ];

    /// Lower-case identifier, e.g. "gothic".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Modern => "modern",
            Self::Gothic => "gothic",
            Self::Castle => "castle",
            Self::Cottage => "cottage",
            Self::Warehouse => "warehouse",
        }
    }

    /// Keywords that trigger this style. Matched as plain substrings of the
    /// lower-cased prompt, so "warehouse" also contains "house".
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => &[],
            Self::Modern => &["modern", "contemporary", "futuristic", "glass"],
            Self::Gothic => &["gothic", "cathedral", "church", "spire"],
            Self::Castle => &["castle", "fortress", "medieval", "tower"],
            Self::Cottage => &["cottage", "small", "house", "home"],
            Self::Warehouse => &["warehouse", "industrial", "factory", "garage"],
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
