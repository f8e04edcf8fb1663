use crate::traits::Scalar;

/// Probe step used for the tangents of the regularized capillary pressure.
pub const FD_EPSILON: f64 = 1e-7;

/// Finite-difference slope of `f` at `x` that never probes outside `(0, 1)`.
///
/// Each side is probed only when it stays strictly inside the unit interval;
/// a skipped side falls back to `f(x)` and does not count towards the
/// denominator. Central where possible, one-sided at the edges.
pub fn safe_slope<T, F>(f: F, x: f64, eps: f64) -> T
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let mut delta = 0.0;

    let hi = if x + eps < 1.0 {
        delta += eps;
        f(T::lit(x + eps))
    } else {
        f(T::lit(x))
    };

    let lo = if x - eps > 0.0 {
        delta += eps;
        f(T::lit(x - eps))
    } else {
        f(T::lit(x))
    };

    if delta == 0.0 {
        return T::zero();
    }
    (hi - lo) / T::lit(delta)
}
