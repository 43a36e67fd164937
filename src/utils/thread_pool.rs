use once_cell::sync::OnceCell;
use rayon::ThreadPoolBuilder;
use std::sync::Arc;

static THREAD_POOL: OnceCell<Arc<rayon::ThreadPool>> = OnceCell::new();

/// Name given to each scan worker thread.
fn worker_name(index: usize) -> String {
    format!("addon-worker-{index}")
}

/// Initialize the global thread pool with the specified number of threads
///
/// # Errors
///
/// Returns an error if the thread pool cannot be initialized
pub fn init_thread_pool(num_threads: usize) -> anyhow::Result<()> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(worker_name)
        .build()?;

    THREAD_POOL
        .set(Arc::new(pool))
        .map_err(|_| anyhow::anyhow!("Thread pool already initialized"))?;

    Ok(())
}

/// Get the global thread pool, initializing with default settings if needed
///
/// Returns `None` only if no pool can be built at all, in which case callers
/// run on rayon's global pool.
fn get_thread_pool() -> Option<Arc<rayon::ThreadPool>> {
    THREAD_POOL
        .get_or_try_init(|| {
            ThreadPoolBuilder::new()
                .num_threads(crate::config::PerformanceConfig::default().parallel_threads)
                .thread_name(worker_name)
                .build()
                .map(Arc::new)
        })
        .map_err(|e| tracing::warn!("Failed to create thread pool: {e}"))
        .ok()
        .cloned()
}

/// Run a function in the configured thread pool
pub fn run_in_pool<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    match get_thread_pool() {
        Some(pool) => pool.install(f),
        None => f(),
    }
}

/// Configure and use the thread pool from config
///
/// # Errors
///
/// Returns an error if the thread pool has already been initialized
pub fn configure_from_config(config: &crate::config::Config) -> anyhow::Result<()> {
    if config.performance.parallel_threads > 0 {
        init_thread_pool(config.performance.parallel_threads)?;
    }
    Ok(())
}
