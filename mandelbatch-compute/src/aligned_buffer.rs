//! Cache-line aligned storage for the iteration state.
//!
//! Memory layout:
//! - Elements are stored in 64-byte `CacheLine` chunks inside a `Vec`
//! - The first element of the buffer starts on a 64-byte boundary
//! - The final chunk is padded; padding is never exposed through `as_slice`

use bytemuck::{Pod, Zeroable};
use mandelbatch_core::CalcError;
use std::marker::PhantomData;

/// Alignment of every buffer in bytes.
pub const ALIGNMENT: usize = 64;

#[repr(C, align(64))]
#[derive(Clone, Copy, Pod, Zeroable)]
struct CacheLine([u32; ALIGNMENT / 4]);

/// Owned, 64-byte aligned buffer of `len` elements.
///
/// `T` must tile a cache line exactly (f32 and u32 in practice).
pub struct AlignedBuffer<T: Pod> {
    lines: Vec<CacheLine>,
    len: usize,
    _element: PhantomData<T>,
}

impl<T: Pod> AlignedBuffer<T> {
    /// Elements per cache line; rejects element sizes that leave padding.
    const LINE_LEN: usize = {
        let size = std::mem::size_of::<T>();
        assert!(
            size > 0 && ALIGNMENT % size == 0,
            "element size must divide the cache line"
        );
        ALIGNMENT / size
    };

    /// Allocate `len` elements, each set to `value`.
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub fn filled(len: usize, value: T) -> Result<Self, CalcError> {
        let line_count = len.div_ceil(Self::LINE_LEN);
        let mut lines = Vec::new();
        lines
            .try_reserve_exact(line_count)
            .map_err(|_| CalcError::Allocation { elements: len })?;
        lines.resize(line_count, CacheLine::zeroed());

        let mut buffer = Self {
            lines,
            len,
            _element: PhantomData,
        };
        buffer.as_mut_slice().fill(value);
        Ok(buffer)
    }

    /// Allocate `len` elements initialized from their index.
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Result<Self, CalcError> {
        let mut buffer = Self::filled(len, T::zeroed())?;
        for (index, value) in buffer.as_mut_slice().iter_mut().enumerate() {
            *value = f(index);
        }
        Ok(buffer)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes reserved, including padding in the final line.
    pub fn allocated_bytes(&self) -> usize {
        self.lines.len() * ALIGNMENT
    }

    pub fn as_slice(&self) -> &[T] {
        let flat: &[T] = bytemuck::cast_slice(&self.lines);
        &flat[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let flat: &mut [T] = bytemuck::cast_slice_mut(&mut self.lines);
        &mut flat[..self.len]
    }

    /// Copy the live elements out, dropping the padding.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Pod> std::fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}
