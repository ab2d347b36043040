//! Step index resolution.
//!
//! Given a requested step and the set of disabled steps, the resolver
//! computes the nearest allowed step index. It is a pure function of its
//! inputs; applying the result (and clamping anything still out of range)
//! is the panel activator's job.

/// Resolve a requested step index to the nearest allowed index.
///
/// Scans forward when `requested > current`, backward otherwise, skipping
/// indices in `disabled` while the candidate stays within `[0, step_count]`.
///
/// Boundary behavior:
///
/// - A scan that reaches `step_count` (one past the last valid index)
///   returns `current` unchanged: the navigation is rejected. A request at
///   or beyond `step_count` counts as having reached it.
/// - A backward scan scans *past* a disabled index 0 and returns the
///   below-zero candidate. That candidate is not in the disabled set, so
///   the activator accepts it and clamps it to 0: index 0 stays reachable
///   even when disabled. A non-disabled index 0 resolves to 0 directly.
///
/// The two boundaries are deliberately asymmetric; both behaviors are part
/// of the widget's contract.
///
/// A negative out-of-range request that hits no disabled index is returned
/// as-is and left for the activator to clamp.
///
/// # Example
///
/// ```
/// use waymark::resolver::resolve_step_index;
///
/// // Forward scan skips the disabled step 1 and lands on 2.
/// assert_eq!(resolve_step_index(1, 0, &[1], 3), 2);
///
/// // Backward scan skips 1 and lands on 0.
/// assert_eq!(resolve_step_index(1, 2, &[1], 3), 0);
///
/// // With 0 itself disabled, the scan exits below zero; the activator
/// // clamps the result to 0.
/// assert_eq!(resolve_step_index(1, 2, &[0, 1], 3), -1);
/// ```
pub fn resolve_step_index(requested: i32, current: i32, disabled: &[i32], step_count: usize) -> i32 {
    let step_count = step_count as i32;
    let direction = if requested > current { 1 } else { -1 };

    let mut candidate = requested;
    while (0..=step_count).contains(&candidate) && disabled.contains(&candidate) {
        candidate += direction;
    }

    if candidate == 0 {
        return 0;
    }
    if candidate >= step_count {
        // At or past one-past-the-last step: reject and keep the current
        // index.
        return current;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_index_resolves_to_itself() {
        assert_eq!(resolve_step_index(2, 0, &[], 4), 2);
        assert_eq!(resolve_step_index(1, 3, &[], 4), 1);
    }

    #[test]
    fn test_forward_scan_skips_disabled() {
        // 3 steps, disabled = {1}, current = 0: request 1 resolves to 2.
        assert_eq!(resolve_step_index(1, 0, &[1], 3), 2);
        // Consecutive disabled steps are all skipped.
        assert_eq!(resolve_step_index(1, 0, &[1, 2], 4), 3);
    }

    #[test]
    fn test_backward_scan_skips_disabled() {
        // 3 steps, disabled = {1}, current = 2: request 1 resolves to 0.
        assert_eq!(resolve_step_index(1, 2, &[1], 3), 0);
        assert_eq!(resolve_step_index(2, 3, &[2, 1], 4), 0);
    }

    #[test]
    fn test_disabled_index_zero_resolves_below_zero() {
        // Requesting 0 with 0 disabled scans past it and exits below zero;
        // the activator clamps the result back to 0.
        assert_eq!(resolve_step_index(0, 2, &[0], 3), -1);
        // A backward scan over a disabled 0 does the same.
        assert_eq!(resolve_step_index(1, 2, &[0, 1], 3), -1);
        // A non-disabled 0 resolves to 0 directly.
        assert_eq!(resolve_step_index(0, 2, &[], 3), 0);
    }

    #[test]
    fn test_scan_reaching_step_count_is_rejected() {
        // Forward scan runs off the end: current is kept.
        assert_eq!(resolve_step_index(2, 0, &[2], 3), 0);
        assert_eq!(resolve_step_index(1, 0, &[1, 2], 3), 0);
    }

    #[test]
    fn test_request_at_or_beyond_step_count_keeps_current() {
        assert_eq!(resolve_step_index(3, 1, &[], 3), 1);
        assert_eq!(resolve_step_index(10, 1, &[], 3), 1);
    }

    #[test]
    fn test_negative_request_passes_through() {
        // The activator clamps; the resolver only scans.
        assert_eq!(resolve_step_index(-2, 1, &[], 3), -2);
    }

    #[test]
    fn test_every_step_disabled_backward_exits_below_zero() {
        assert_eq!(resolve_step_index(2, 3, &[0, 1, 2, 3], 4), -1);
    }

    #[test]
    fn test_forward_scan_property() {
        // For any allowed landing spot, the forward scan returns the first
        // index >= requested not in the disabled set.
        let disabled = [2, 3, 5];
        for requested in 1..8 {
            let resolved = resolve_step_index(requested, 0, &disabled, 8);
            assert!(!disabled.contains(&resolved));
            assert!(resolved >= requested);
            for skipped in requested..resolved {
                assert!(disabled.contains(&skipped));
            }
        }
    }
}
