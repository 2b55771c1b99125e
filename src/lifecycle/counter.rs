//! Reference-counted activation state.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A nesting counter recording how many `activate` calls are outstanding.
///
/// The library is active while the counter is positive. Only the
/// outermost activate/deactivate pair changes [`is_active`](Self::is_active).
///
/// # Examples
///
/// ```
/// use u_csp::lifecycle::Lifecycle;
///
/// let state = Lifecycle::new();
/// assert!(state.activate());
/// assert!(state.activate());
/// assert!(state.deactivate());
/// assert!(state.is_active());
/// assert!(state.deactivate());
/// assert!(!state.is_active());
/// assert!(!state.deactivate());
/// ```
#[derive(Debug, Default)]
pub struct Lifecycle {
    depth: AtomicUsize,
}

impl Lifecycle {
    /// Creates an inactive counter.
    pub const fn new() -> Self {
        Self {
            depth: AtomicUsize::new(0),
        }
    }

    /// Increments the counter. Always succeeds.
    pub fn activate(&self) -> bool {
        if self.depth.fetch_add(1, Ordering::AcqRel) == 0 {
            log::info!("csp library activated");
        }
        true
    }

    /// Decrements the counter if positive.
    ///
    /// Returns `false` (and leaves the counter at zero) when already inactive.
    pub fn deactivate(&self) -> bool {
        let previous = self
            .depth
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |depth| {
                depth.checked_sub(1)
            });
        match previous {
            Ok(1) => {
                log::info!("csp library deactivated");
                true
            }
            Ok(_) => true,
            Err(_) => {
                log::warn!("deactivate called on an inactive csp library");
                false
            }
        }
    }

    /// Whether at least one activation is outstanding.
    pub fn is_active(&self) -> bool {
        self.depth() > 0
    }

    /// Number of outstanding activations.
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }
}
