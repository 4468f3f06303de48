use log::{debug, info};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Passive observer of deduplication progress.
///
/// `on_step` is invoked once per completed outer iteration of the duplicate search (there are
/// `total = batch.len() - 1` steps, or zero for batches with less than 2 polylines). Observers never
/// influence the result. Implementations must be [Sync] since steps may be reported from multiple
/// threads when the `parallel` feature is enabled, in that case `completed` is still strictly
/// increasing per call but calls may interleave.
///
/// Any `Fn(usize, usize) + Sync` closure is a progress observer receiving `(completed, total)`.
///
/// # Examples
///
/// ```
/// # use polyline_dedup::pline;
/// # use polyline_dedup::dedup::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let steps = AtomicUsize::new(0);
/// let observer = |_completed: usize, _total: usize| {
///     steps.fetch_add(1, Ordering::Relaxed);
/// };
///
/// let batch = vec![
///     pline![(0.0, 0.0), (1.0, 1.0)],
///     pline![(1.0, 1.0), (0.0, 0.0)],
///     pline![(2.0, 2.0), (3.0, 3.0)],
/// ];
/// let options = DedupOptions {
///     tolerance: 0.0,
///     progress: Some(&observer),
///     ..Default::default()
/// };
/// let result = dedup_polylines(&batch, &options).unwrap();
/// assert_eq!(result.len(), 2);
/// assert_eq!(steps.load(Ordering::Relaxed), 2);
/// ```
pub trait DedupProgress: Sync {
    /// Called once before the search starts with the number of steps that will be reported.
    fn on_start(&self, _total: usize) {}

    /// Called after each completed step.
    fn on_step(&self, completed: usize, total: usize);

    /// Called once after the search finished.
    fn on_finish(&self, _total: usize) {}
}

impl<F> DedupProgress for F
where
    F: Fn(usize, usize) + Sync,
{
    #[inline]
    fn on_step(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Progress observer that does nothing, used when no observer is given.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopProgress;

impl DedupProgress for NoopProgress {
    #[inline]
    fn on_step(&self, _completed: usize, _total: usize) {}
}

/// Progress observer that writes a `log::info!` record every time another `percent_step` percent
/// of the steps completed.
#[derive(Debug)]
pub struct LogProgress {
    percent_step: usize,
    last_bucket: AtomicUsize,
}

impl LogProgress {
    /// Create a new observer reporting every `percent_step` percent (clamped to `1..=100`).
    pub fn new(percent_step: usize) -> Self {
        Self {
            percent_step: percent_step.clamp(1, 100),
            last_bucket: AtomicUsize::new(0),
        }
    }
}

impl Default for LogProgress {
    #[inline]
    fn default() -> Self {
        Self::new(10)
    }
}

impl DedupProgress for LogProgress {
    fn on_start(&self, total: usize) {
        self.last_bucket.store(0, Ordering::Relaxed);
        debug!("duplicate search started, {total} steps");
    }

    fn on_step(&self, completed: usize, total: usize) {
        if total == 0 {
            return;
        }

        let percent = completed.min(total) * 100 / total;
        let bucket = percent / self.percent_step;
        if bucket > self.last_bucket.fetch_max(bucket, Ordering::Relaxed) {
            info!("duplicate search {percent}% complete ({completed}/{total})");
        }
    }

    fn on_finish(&self, total: usize) {
        debug!("duplicate search finished, {total} steps");
    }
}
