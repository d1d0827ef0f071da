//! Closed-form parametric curves scaled into a `w` × `h` bounding box.
//!
//! Every function takes the curve parameter `t` (usually an angle in radians swept over
//! `[0, 2π]`), the box width `w` and height `h`, and returns the point of the curve at `t`
//! centred on `(w / 2, h / 2)`. Computation is always done in `f64`, see [Coordinate].
//!
//! None of the functions validate their input. Where a formula divides by zero
//! ([kappa], [bow]) the non-finite result is returned unchanged.

use nalgebra::Point2;

use crate::coordinate::Coordinate;

/// Bicorn curve, <http://paulbourke.net/geometry/bicorn/>.
///
/// `y` has no vertical offset, so the curve occupies the band `[0, h/2]`.
/// ```
/// use parametric_curves::{bicorn, Point2};
///
/// assert_eq!(Point2::new(5.0, 5.0), bicorn(0.0, 10.0, 10.0));
/// ```
pub fn bicorn<T: Coordinate>(t: T, w: T, h: T) -> Point2<T> {
    scaled(t, w, h, |t, half_w, half_h| {
        let x = half_w * t.sin() + half_w;
        let y = half_h * t.cos().powi(2) * (2.0 + t.cos()) / (3.0 + t.sin().powi(2));
        (x, y)
    })
}

/// Kappa curve, <http://paulbourke.net/geometry/kappa/>.
///
/// `x` divides by `sin(t)`: at `t = 0` it is infinite (or `NaN` when `w` is zero) and near
/// `π`, `2π` it grows without bound.
pub fn kappa<T: Coordinate>(t: T, w: T, h: T) -> Point2<T> {
    scaled(t, w, h, |t, half_w, half_h| {
        let x = half_w * t.cos().powi(2) / t.sin() + half_w;
        let y = half_h * t.cos() + half_h;
        (x, y)
    })
}

/// Bow curve, <http://paulbourke.net/geometry/bow2d/>.
///
/// Scales with `1 - tan²(t)`, which diverges towards `π/2` and `3π/2`.
pub fn bow<T: Coordinate>(t: T, w: T, h: T) -> Point2<T> {
    scaled(t, w, h, |t, half_w, half_h| {
        let a = 1.0 - t.tan().powi(2);
        let x = half_w * a * t.cos() + half_w;
        let y = half_h * a * t.sin() + half_h;
        (x, y)
    })
}

/// Diamond, <http://paulbourke.net/geometry/diamond/>.
pub fn diamond<T: Coordinate>(t: T, w: T, h: T) -> Point2<T> {
    scaled(t, w, h, |t, half_w, half_h| {
        let x = half_w * t.cos() * t.cos().powi(2).sqrt() + half_w;
        let y = half_h * t.sin() * t.sin().powi(2).sqrt() + half_h;
        (x, y)
    })
}

/// Chrysanthemum, <http://paulbourke.net/geometry/chrysanthemum/>.
///
/// The radius stays within `[-4, 10]` and is scaled by `w/20`, `h/20`. It oscillates
/// quickly, so small differences in `t` give visibly different points.
pub fn chrysanthemum<T: Coordinate>(t: T, w: T, h: T) -> Point2<T> {
    scaled(t, w, h, |t, half_w, half_h| {
        let r = 5.0 * (1.0 + (11.0 * t / 5.0).sin())
            - 4.0 * (17.0 * t / 3.0).sin().powi(4) * (2.0 * (3.0 * t).cos() - 28.0 * t).sin().powi(8);
        let x = half_w / 10.0 * r * t.cos() + half_w;
        let y = half_h / 10.0 * r * t.sin() + half_h;
        (x, y)
    })
}

/// Butterfly, <http://paulbourke.net/geometry/butterfly/>.
///
/// The radius reaches `e + 3` in magnitude, so the curve is not confined to the box.
pub fn butterfly<T: Coordinate>(t: T, w: T, h: T) -> Point2<T> {
    scaled(t, w, h, |t, half_w, half_h| {
        let r = t.cos().exp() - 2.0 * (4.0 * t).cos() - (t / 12.0).sin().powi(5);
        let x = half_w * r * t.cos() + half_w;
        let y = half_h * r * t.sin() + half_h;
        (x, y)
    })
}

/// Widens the inputs, evaluates `formula(t, w/2, h/2)` and narrows the point back to `T`.
fn scaled<T, F>(t: T, w: T, h: T, formula: F) -> Point2<T>
where
    T: Coordinate,
    F: Fn(f64, f64, f64) -> (f64, f64),
{
    let (x, y) = formula(t.to_f64(), w.to_f64() / 2.0, h.to_f64() / 2.0);
    Point2::new(T::from_f64(x), T::from_f64(y))
}
