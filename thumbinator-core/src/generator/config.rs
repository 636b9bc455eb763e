use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_SIZE: usize = 80;

/// How the synthetic catalog should be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Number of images to produce.
    pub count: usize,
    /// Fixed RNG seed. When omitted a fresh seed is drawn and logged so the
    /// catalog can be reproduced later.
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_CATALOG_SIZE,
            seed: None,
        }
    }
}

impl GeneratorOptions {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
