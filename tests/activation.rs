//! Guard misuse against the process-wide counter.

use u_csp::lifecycle::{self, Activation};

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "unbalanced csp deactivation")]
fn test_guard_drop_after_bare_deactivate_panics() {
    let guard = Activation::new();
    assert!(lifecycle::deactivate());
    drop(guard);
}
