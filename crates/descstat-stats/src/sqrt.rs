/// Relative tolerance between consecutive Newton iterates.
pub const TOLERANCE: f64 = 1e-12;

/// Upper bound on Newton iterations.
pub const MAX_ITERATIONS: usize = 100;

/// Computes a square root with Newton-Raphson iteration.
///
/// Starting from `value` itself, the iterate is refined with
/// `x = (x + value / x) / 2` until two consecutive iterates differ by no more
/// than [`TOLERANCE`] relative to `max(1, |previous|)`, or until
/// [`MAX_ITERATIONS`] steps have been taken.
///
/// # Returns
///
/// * `Some(0.0)` - if `value` is zero
/// * `Some(f64::INFINITY)` - if `value` is positive infinity
/// * `Some(root)` - for any other non-negative finite `value`
/// * `None` - if `value` is negative or `NaN`
///
/// # Examples
///
/// ```
/// use descstat_stats::sqrt::sqrt_newton;
///
/// assert_eq!(sqrt_newton(0.0), Some(0.0));
/// assert_eq!(sqrt_newton(-1.0), None);
/// assert!((sqrt_newton(2.0).unwrap() - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
#[must_use]
pub fn sqrt_newton(value: f64) -> Option<f64> {
    if value.is_nan() || value < 0.0 {
        return None;
    }
    if value == 0.0 {
        return Some(0.0);
    }
    if value.is_infinite() {
        return Some(value);
    }

    let mut x = value;
    for _ in 0..MAX_ITERATIONS {
        let prev = x;
        x = 0.5 * (x + value / x);
        if x == 0.0 {
            break;
        }
        if (x - prev).abs() <= TOLERANCE * prev.abs().max(1.0) {
            break;
        }
    }
    Some(x)
}
