// mandelbatch-core/src/iteration_matrix.rs

use crate::CalcError;
use serde::{Deserialize, Serialize};

/// Escape-time result for a whole grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixParts")]
pub struct IterationMatrix {
    width: usize,
    height: usize,
    /// Sentinel value: cells holding `limit` never escaped
    limit: u32,
    /// Iteration counts in row-major order
    counts: Vec<u32>,
}

/// Unchecked serialized form; validated through `IterationMatrix::try_new`.
#[derive(Deserialize)]
struct MatrixParts {
    width: usize,
    height: usize,
    limit: u32,
    counts: Vec<u32>,
}

impl TryFrom<MatrixParts> for IterationMatrix {
    type Error = CalcError;

    fn try_from(parts: MatrixParts) -> Result<Self, CalcError> {
        Self::try_new(parts.width, parts.height, parts.limit, parts.counts)
    }
}

impl IterationMatrix {
    /// Wrap row-major counts. Panics if the shape is invalid; see `try_new`.
    pub fn new(width: usize, height: usize, limit: u32, counts: Vec<u32>) -> Self {
        Self::try_new(width, height, limit, counts)
            .expect("iteration matrix must hold width * height cells")
    }

    /// Wrap row-major counts, rejecting empty dimensions and length mismatches.
    pub fn try_new(
        width: usize,
        height: usize,
        limit: u32,
        counts: Vec<u32>,
    ) -> Result<Self, CalcError> {
        let expected = width.checked_mul(height);
        if width == 0 || height == 0 || expected != Some(counts.len()) {
            return Err(CalcError::MatrixShape {
                width,
                height,
                cells: counts.len(),
            });
        }
        Ok(Self {
            width,
            height,
            limit,
            counts,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Count for row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i >= self.height || j >= self.width {
            return None;
        }
        Some(self.counts[i * self.width + j])
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.counts[i * self.width..(i + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks_exact(self.width)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.counts
    }

    /// Number of cells that escaped before the limit.
    pub fn escaped_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c < self.limit).count()
    }

    /// Largest iteration count among escaped cells, if any escaped.
    pub fn max_escape_count(&self) -> Option<u32> {
        self.counts.iter().copied().filter(|&c| c < self.limit).max()
    }
}
