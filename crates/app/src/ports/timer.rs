//! Timer port: sleeping without tying the core to an executor.

use std::future::Future;
use std::time::Duration;

/// Suspends the calling task for a duration.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
