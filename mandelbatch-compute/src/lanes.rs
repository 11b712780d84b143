//! Lock-step escape-time kernel.
//!
//! A segment of pixels sharing one row coordinate is advanced by one iteration
//! in groups of `LANES`. Every lane executes the same arithmetic; the escape
//! test is folded into a select instead of a branch so the lane loop stays
//! straight-line code the compiler can vectorize.

use mandelbatch_core::CalcError;

/// Pixels per lane group: one cache line of f32.
pub const LANES: usize = 16;

/// Escape threshold on |z|² (|z| > 2).
pub const ESCAPE_RADIUS_SQ: f32 = 4.0;

/// One row segment of iteration state.
///
/// All slices have the same length; `c_im` is shared because every pixel of
/// the segment lies on the same grid row.
pub struct Segment<'a> {
    pub(crate) z_re: &'a mut [f32],
    pub(crate) z_im: &'a mut [f32],
    pub(crate) counts: &'a mut [u32],
    pub(crate) c_re: &'a [f32],
    pub(crate) c_im: f32,
}

impl<'a> Segment<'a> {
    /// Segment over caller-owned state. Every slice must match `counts` in length.
    pub fn new(
        z_re: &'a mut [f32],
        z_im: &'a mut [f32],
        counts: &'a mut [u32],
        c_re: &'a [f32],
        c_im: f32,
    ) -> Result<Self, CalcError> {
        let expected = counts.len();
        for actual in [z_re.len(), z_im.len(), c_re.len()] {
            if actual != expected {
                return Err(CalcError::SegmentLength { expected, actual });
            }
        }
        Ok(Self {
            z_re,
            z_im,
            counts,
            c_re,
            c_im,
        })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Advance every pixel by one iteration and record escapes at index `k`.
    ///
    /// Returns how many pixels escaped during this iteration. A cell is only
    /// written while it still holds `limit`, so counts are written once.
    #[inline]
    pub fn advance(&mut self, k: u32, limit: u32) -> u32 {
        let c_im = self.c_im;
        let mut escaped = 0;

        let mut re_groups = self.z_re.chunks_exact_mut(LANES);
        let mut im_groups = self.z_im.chunks_exact_mut(LANES);
        let mut count_groups = self.counts.chunks_exact_mut(LANES);
        let mut c_groups = self.c_re.chunks_exact(LANES);

        for (((re, im), counts), c_re) in (&mut re_groups)
            .zip(&mut im_groups)
            .zip(&mut count_groups)
            .zip(&mut c_groups)
        {
            escaped += advance_lanes(re, im, counts, c_re, c_im, k, limit);
        }

        escaped += advance_lanes(
            re_groups.into_remainder(),
            im_groups.into_remainder(),
            count_groups.into_remainder(),
            c_groups.remainder(),
            c_im,
            k,
            limit,
        );

        escaped
    }

    /// Iterate until every pixel has escaped or `limit` iterations have run.
    ///
    /// Returns the number of iterations performed.
    pub fn run_to_completion(&mut self, limit: u32) -> u32 {
        let width = self.len() as u32;
        let mut escaped = 0;
        let mut k = 0;
        while escaped < width && k < limit {
            escaped += self.advance(k, limit);
            k += 1;
        }
        k
    }
}

#[inline(always)]
fn advance_lanes(
    z_re: &mut [f32],
    z_im: &mut [f32],
    counts: &mut [u32],
    c_re: &[f32],
    c_im: f32,
    k: u32,
    limit: u32,
) -> u32 {
    let n = z_re.len();
    let (z_im, counts, c_re) = (&mut z_im[..n], &mut counts[..n], &c_re[..n]);

    let mut escaped = 0;
    for j in 0..n {
        let re = z_re[j];
        let im = z_im[j];

        let r2 = re * re;
        let i2 = im * im;

        let hit = (r2 + i2 > ESCAPE_RADIUS_SQ) & (counts[j] == limit);
        counts[j] = if hit { k } else { counts[j] };
        escaped += hit as u32;

        z_im[j] = 2.0 * re * im + c_im;
        z_re[j] = r2 - i2 + c_re[j];
    }
    escaped
}
