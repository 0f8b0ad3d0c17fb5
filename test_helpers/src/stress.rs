//! Runs a workload concurrently on every available processor.
//!
//! Workers start together behind a barrier so their iterations overlap as
//! much as possible. A panic in any worker propagates to the caller once all
//! workers have finished.

use std::num::NonZeroUsize;
use std::panic;
use std::sync::Barrier;
use std::thread;

/// Number of workers [`run_on_every_processor`] spawns on this machine.
#[must_use]
pub fn processor_count() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Calls `work(worker, iteration)` `iterations` times on each of
/// [`processor_count`] scoped threads and returns the worker count.
///
/// # Panics
///
/// Re-raises the panic of any worker.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use test_helpers::stress;
///
/// let calls = AtomicUsize::new(0);
/// let workers = stress::run_on_every_processor(10, |_, _| {
///     calls.fetch_add(1, Ordering::Relaxed);
/// });
/// assert_eq!(calls.load(Ordering::Relaxed), workers * 10);
/// ```
#[must_use = "the worker count tells callers how much work ran"]
pub fn run_on_every_processor<F>(iterations: usize, work: F) -> usize
where
    F: Fn(usize, usize) + Sync,
{
    let workers = processor_count();
    let barrier = Barrier::new(workers);
    let shared_work = &work;
    let start = &barrier;
    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    start.wait();
                    for iteration in 0..iterations {
                        shared_work(worker, iteration);
                    }
                })
            })
            .collect();
        let mut first_panic = None;
        for handle in handles {
            if let Err(payload) = handle.join() {
                first_panic.get_or_insert(payload);
            }
        }
        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    });
    workers
}
