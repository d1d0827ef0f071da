use nalgebra::Scalar;
use num_traits::AsPrimitive;

/// Numeric type usable for curve parameters, box extents and output coordinates.
///
/// Every curve formula is evaluated in `f64`: inputs are widened with [Coordinate::to_f64]
/// and the resulting coordinates are narrowed back with [Coordinate::from_f64]. Conversions
/// behave like Rust's `as` casts, so integer coordinates saturate (`NaN` becomes `0`,
/// infinities become `MIN`/`MAX`).
///
/// Implemented for every primitive type `T` where `T as f64` and `f64 as T` are valid.
/// ```
/// use parametric_curves::Coordinate;
///
/// assert_eq!(2.5, 2.5_f32.to_f64());
/// assert_eq!(3_i32, i32::from_f64(3.9));
/// assert_eq!(i32::MAX, i32::from_f64(f64::INFINITY));
/// ```
pub trait Coordinate: Scalar + Copy {
    /// Widens the value to `f64`, the precision every curve formula is evaluated in.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` result back to this type, with the semantics of an `as` cast.
    fn from_f64(value: f64) -> Self;
}

impl<T> Coordinate for T
where
    T: Scalar + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    fn to_f64(self) -> f64 {
        self.as_()
    }

    fn from_f64(value: f64) -> Self {
        value.as_()
    }
}
