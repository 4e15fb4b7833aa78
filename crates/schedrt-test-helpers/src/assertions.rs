//! Ordering assertions over a policy engine.

/// Assert that the engine orders the given threads first to last.
///
/// Adjacent pairs must compare `Less` or `Equal`; a tie keeps the listed
/// order, which matches FIFO tie-breaking in the host.
///
/// ```rust,ignore
/// assert_dispatch_order!(engine, [urgent, normal, relaxed]);
/// ```
#[macro_export]
macro_rules! assert_dispatch_order {
    ($engine:expr, [$($thread:expr),+ $(,)?]) => {{
        let engine = &$engine;
        let threads = [$($thread),+];
        for pair in threads.windows(2) {
            if let [first, second] = pair {
                let ordering = $crate::must(engine.compare(*first, *second));
                if ordering == ::std::cmp::Ordering::Greater {
                    panic!(
                        "assertion failed: {} should not run after {}",
                        first, second
                    );
                }
            }
        }
    }};
}

/// Assert that `first` strictly precedes `second`.
#[macro_export]
macro_rules! assert_runs_before {
    ($engine:expr, $first:expr, $second:expr $(,)?) => {{
        let ordering = $crate::must($engine.compare($first, $second));
        if ordering != ::std::cmp::Ordering::Less {
            panic!(
                "assertion failed: {} should run before {} (got {:?})",
                $first, $second, ordering
            );
        }
    }};
}
