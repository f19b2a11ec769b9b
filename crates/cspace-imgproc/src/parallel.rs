use rayon::prelude::*;

use cspace_image::{Image, ImageError};

/// Controls how per-pixel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ///
    /// The call still blocks until every row is done.
    ParallelRows,
}

/// Apply a function to each pixel of `src`, writing the matching pixel of `dst`.
///
/// The closure receives the `C1` channels of a source pixel and the `C2`
/// channels of the destination pixel at the same location.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images differ in size.
pub fn iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    strategy: ExecutionStrategy,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) -> Result<(), ImageError>
where
    T1: Send + Sync,
    T2: Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // nothing to do, and chunking by a zero-length row would panic
    if src.cols() == 0 || src.rows() == 0 {
        return Ok(());
    }

    match strategy {
        ExecutionStrategy::Serial => {
            src.as_slice()
                .chunks_exact(C1)
                .zip(dst.as_slice_mut().chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));
        }
        ExecutionStrategy::ParallelRows => {
            let cols = src.cols();
            src.as_slice()
                .par_chunks_exact(C1 * cols)
                .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
                .for_each(|(src_chunk, dst_chunk)| {
                    src_chunk
                        .chunks_exact(C1)
                        .zip(dst_chunk.chunks_exact_mut(C2))
                        .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));
                });
        }
    }

    Ok(())
}
