use std::thread;

use crate::error::{Result, TensorError};
use crate::storage::BlockRegion;

/// Run `work` on every region, one scoped thread per region, and wait for all
/// of them.
///
/// Returns only after every worker has finished. If any worker fails or
/// panics, the first failure (in worker order) is returned and the output
/// must be discarded.
pub fn run_workers<F>(regions: Vec<BlockRegion<'_>>, work: F) -> Result<()>
where
    F: Fn(&mut BlockRegion<'_>) -> Result<()> + Sync,
{
    let work = &work;
    let results: Vec<Result<()>> = thread::scope(|s| {
        let handles: Vec<_> = regions
            .into_iter()
            .enumerate()
            .map(|(worker, mut region)| {
                let range = region.range();
                tracing::debug!(worker, start = range.start, end = range.end, "spawning worker");
                s.spawn(move || {
                    let result = work(&mut region);
                    tracing::trace!(worker, ok = result.is_ok(), "worker finished");
                    result
                })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| {
                handle
                    .join()
                    .unwrap_or(Err(TensorError::WorkerPanicked { worker }))
            })
            .collect()
    });

    results.into_iter().collect()
}
