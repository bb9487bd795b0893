//! Style generators — one pure function per [`Style`].
//!
//! Every generator takes the parsed [`BuildingSpec`] and returns a complete
//! script. Generators never share state; each builds its own
//! [`SceneScript`](crate::core::script::SceneScript).

pub mod castle;
pub mod cottage;
pub mod gothic;
pub mod modern;
pub mod standard;
pub mod warehouse;

use crate::core::script::{Script, ScriptError};
use crate::schema::building::BuildingSpec;
use crate::schema::style::Style;

/// Sample prompts offered to users of the generator.
pub const EXAMPLE_PROMPTS: [&str; 6] = [
    "Create a modern 5-story apartment building with balconies",
    "Build a Gothic cathedral with tall spires and stained glass windows",
    "Generate a futuristic skyscraper with a twisting design",
    "Make a small cottage with a chimney and windows",
    "Create a warehouse with large garage doors",
    "Build a castle with towers and battlements",
];

/// Signature shared by all style generators.
pub type Generator = fn(&BuildingSpec) -> Result<Script, ScriptError>;

impl Style {
    /// The generator for this style.
    pub fn generator(self) -> Generator {
        match self {
            Self::Standard => standard::generate,
            Self::Modern => modern::generate,
            Self::Gothic => gothic::generate,
            Self::Castle => castle::generate,
            Self::Cottage => cottage::generate,
            Self::Warehouse => warehouse::generate,
        }
    }
}

#[cfg(test)]
pub(crate) fn spec(style: Style) -> BuildingSpec {
    BuildingSpec {
        floors: 5,
        width: 10.0,
        depth: 10.0,
        floor_height: 3.0,
        style,
    }
}
