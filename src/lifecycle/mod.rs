//! Library activation.
//!
//! Every core operation requires the library to be active. Activation is
//! reference counted: nested [`activate`]/[`deactivate`] pairs are allowed
//! and only the outermost pair flips [`is_active`].
//!
//! The process-wide state lives in a single atomic counter. Prefer the
//! [`Activation`] guard over bare calls, so that a scope always
//! deactivates what it activated.
//!
//! ```
//! use u_csp::lifecycle::{self, Activation};
//!
//! let _csp = Activation::new();
//! assert!(lifecycle::is_active());
//! ```

mod counter;

pub use counter::Lifecycle;

static LIBRARY: Lifecycle = Lifecycle::new();

/// Activates the library. Always returns `true`.
pub fn activate() -> bool {
    LIBRARY.activate()
}

/// Deactivates the library once.
///
/// Returns `false` if the library was not active.
pub fn deactivate() -> bool {
    LIBRARY.deactivate()
}

/// Whether the library is currently active.
pub fn is_active() -> bool {
    LIBRARY.is_active()
}

/// Precondition shared by every core operation.
#[track_caller]
#[inline]
pub(crate) fn debug_assert_active() {
    debug_assert!(is_active(), "csp library is not active");
}

/// Scoped activation: activates on construction, deactivates on drop.
#[derive(Debug)]
#[must_use = "the library is deactivated as soon as the guard is dropped"]
pub struct Activation {
    _private: (),
}

impl Activation {
    pub fn new() -> Self {
        activate();
        Self { _private: () }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Activation {
    fn drop(&mut self) {
        let balanced = deactivate();
        debug_assert!(balanced, "unbalanced csp deactivation");
    }
}
