use std::ops::{Add, Mul};

use num_traits::Float;

/// Linear interpolation, <https://en.wikipedia.org/wiki/Linear_interpolation>.
///
/// Returns `(1 - t) * a + t * b`. The position `t` is usually within `[0, 1]` but is not
/// clamped, values outside of it extrapolate along the line through `a` and `b`.
///
/// The scalar type of `t` is independent of the interpolated type, which only has to support
/// scaling by `t` and addition. This covers plain floats as well as nalgebra vectors.
/// # Example
/// ```
/// use nalgebra::Vector2;
/// use parametric_curves::linear;
///
/// assert_eq!(2.5, linear(0.0, 10.0, 0.25));
/// assert_eq!(12.5, linear(0.0_f32, 10.0, 1.25_f32));
/// assert_eq!(Vector2::new(1.0, 3.0), linear(Vector2::new(0.0, 2.0), Vector2::new(2.0, 4.0), 0.5));
/// ```
pub fn linear<V, S>(a: V, b: V, t: S) -> V
where
    V: Mul<S, Output = V> + Add<Output = V>,
    S: Float,
{
    a * (S::one() - t) + b * t
}
