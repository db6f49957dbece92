use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride does not divide the data evenly.
    #[error("row stride must be > 0 and divide the data length")]
    InvalidRowStride(usize),
}

/// Controls how per-row operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// Creates a new thread pool on every call. This backs the thread count
    /// option of the command line tools.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Strategy for an optional user-provided thread count, where zero or
    /// absent selects the global pool.
    pub fn from_threads(threads: usize) -> Self {
        match threads {
            0 => Self::Parallel,
            1 => Self::Serial,
            n => Self::Fixed(n),
        }
    }
}

/// Apply a function to each row of the destination buffer.
///
/// The buffer is split into rows of `stride` elements and `f` is invoked
/// with the row index and the mutable row slice, according to the given
/// execution strategy.
///
/// # Errors
///
/// Returns an error for a zero stride, a stride that does not divide the
/// buffer length, a zero thread count or a failed pool build.
pub fn for_each_row<T: Send>(
    data: &mut [T],
    stride: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) -> Result<(), ParallelError> {
    if stride == 0 || data.len() % stride != 0 {
        return Err(ParallelError::InvalidRowStride(stride));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            data.chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(r, row)| f(r, row));
        }
        ExecutionStrategy::Parallel => {
            data.par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(r, row)| f(r, row));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                data.par_chunks_exact_mut(stride)
                    .enumerate()
                    .for_each(|(r, row)| f(r, row));
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_rows(strategy: ExecutionStrategy) -> Result<Vec<usize>, ParallelError> {
        let mut data = vec![0usize; 6];
        for_each_row(&mut data, 2, strategy, |r, row| {
            for v in row.iter_mut() {
                *v = r + 1;
            }
        })?;
        Ok(data)
    }

    #[test]
    fn rows_serial() -> Result<(), ParallelError> {
        assert_eq!(fill_rows(ExecutionStrategy::Serial)?, vec![1, 1, 2, 2, 3, 3]);
        Ok(())
    }

    #[test]
    fn rows_parallel() -> Result<(), ParallelError> {
        assert_eq!(
            fill_rows(ExecutionStrategy::Parallel)?,
            vec![1, 1, 2, 2, 3, 3]
        );
        Ok(())
    }

    #[test]
    fn rows_fixed() -> Result<(), ParallelError> {
        assert_eq!(
            fill_rows(ExecutionStrategy::Fixed(2))?,
            vec![1, 1, 2, 2, 3, 3]
        );
        Ok(())
    }

    #[test]
    fn rows_fixed_zero_threads() {
        let res = fill_rows(ExecutionStrategy::Fixed(0));
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
    }

    #[test]
    fn rows_invalid_stride() {
        let mut data = vec![0usize; 5];
        let res = for_each_row(&mut data, 2, ExecutionStrategy::Serial, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidRowStride(2)));
    }

    #[test]
    fn threads_mapping() {
        assert_eq!(
            ExecutionStrategy::from_threads(0),
            ExecutionStrategy::Parallel
        );
        assert_eq!(ExecutionStrategy::from_threads(1), ExecutionStrategy::Serial);
        assert_eq!(
            ExecutionStrategy::from_threads(4),
            ExecutionStrategy::Fixed(4)
        );
    }
}
