//! Calculator configuration.
//!
//! A `CalculatorConfig` names which traversal strategy to build and the grid it
//! runs over. It is plain data so it can be loaded from JSON by a driver; the
//! compute crate turns it into a calculator.

use crate::{CalcError, GridModel, Viewport};
use serde::{Deserialize, Serialize};

/// Tile edge length used by the tiled strategy unless configured otherwise.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// Which traversal strategy computes the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    /// Row at a time, whole row advanced in lock-step.
    #[default]
    Line,
    /// Square tiles, each tile row advanced in lock-step.
    Batch,
    /// Scalar per-pixel loop, used to validate the other two.
    Reference,
}

impl CalculatorKind {
    /// Registry id of this kind.
    pub fn id(&self) -> &'static str {
        match self {
            CalculatorKind::Line => "line",
            CalculatorKind::Batch => "batch",
            CalculatorKind::Reference => "reference",
        }
    }
}

/// Everything needed to construct a calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub kind: CalculatorKind,
    /// Width and height of the square grid
    pub grid_size: u32,
    /// Iteration limit (and sentinel)
    pub limit: u32,
    /// Only used by the batch strategy
    pub tile_size: u32,
    /// Classic `[-2, 1] x [-1.5, 1.5]` view when absent
    pub viewport: Option<Viewport>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            kind: CalculatorKind::default(),
            grid_size: 256,
            limit: 100,
            tile_size: DEFAULT_TILE_SIZE,
            viewport: None,
        }
    }
}

impl CalculatorConfig {
    pub fn new(kind: CalculatorKind, grid_size: u32, limit: u32) -> Self {
        Self {
            kind,
            grid_size,
            limit,
            ..Self::default()
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded calculator config: {config:?}");
        Ok(config)
    }

    /// Build the grid this configuration describes.
    pub fn grid(&self) -> Result<GridModel, CalcError> {
        match self.viewport {
            Some(viewport) => GridModel::with_viewport(self.grid_size, self.limit, viewport),
            None => GridModel::new(self.grid_size, self.limit),
        }
    }

    /// Reject configurations no calculator could run.
    pub fn validate(&self) -> Result<(), CalcError> {
        let grid = self.grid()?;
        if self.kind == CalculatorKind::Batch {
            grid.check_tile_size(self.tile_size)?;
        }
        Ok(())
    }
}
