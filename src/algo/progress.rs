//! Progress reporting for the fill loop.
//!
//! The engine reports once per completed step, which is also the only
//! point at which a host could cooperatively stop a run (the algorithm
//! never suspends mid-step).
//!
//! # Example
//!
//! ```
//! use quilt::algo::Progress;
//!
//! let progress = Progress::new(|step, limit, message| {
//!     println!("[{}/{}] {}", step, limit, message);
//! });
//! progress.report(0, 100, "corner fill");
//! ```

/// A progress callback that receives one update per fill step.
///
/// The callback receives:
/// - `step`: Completed steps so far
/// - `limit`: The configured step limit
/// - `message`: Description of the step's outcome
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, step: usize, limit: usize, message: &str) {
        (self.callback)(step, limit, message);
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
