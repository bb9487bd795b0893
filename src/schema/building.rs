use serde::{Deserialize, Serialize};

use super::style::Style;

/// The parameter set recovered from one prompt.
///
/// Built once per request by the pipeline and handed by reference to a
/// single style generator. Generators derive their own style-specific
/// dimensions from it and never write back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub floors: u32,
    pub width: f64,
    pub depth: f64,
    pub floor_height: f64,
    pub style: Style,
}

impl BuildingSpec {
    /// `floors × floor_height`.
    pub fn total_height(&self) -> f64 {
        f64::from(self.floors) * self.floor_height
    }
}
