//! Closed-form parametric curves scaled into a bounding box, and a generic linear
//! interpolation helper.
//!
//! Every function is pure: the same input always gives the same output. Curve formulas are
//! evaluated in `f64` whatever the coordinate type. Nothing is validated, so at the
//! singularities of [kappa] and [bow] the returned point holds infinite or `NaN` coordinates.
//!
//! # Example
//! ```
//! use parametric_curves::{bicorn, linear, Curve};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let point = bicorn(0.0, 10.0, 10.0);
//! assert_eq!((5.0, 5.0), (point.x, point.y));
//!
//! let curve: Curve = "diamond".parse().unwrap();
//! let point = curve.evaluate(std::f64::consts::FRAC_PI_2, 4.0, 4.0);
//! assert_approx_eq!(2.0, point.x, 1e-9);
//! assert_approx_eq!(4.0, point.y, 1e-9);
//!
//! assert_eq!(2.5, linear(0.0, 10.0, 0.25));
//! ```

mod coordinate;
mod curve;
mod curves;
mod interpolation;

pub use coordinate::Coordinate;
pub use curve::{Curve, CurveError};
pub use curves::{bicorn, bow, butterfly, chrysanthemum, diamond, kappa};
pub use interpolation::linear;
pub use nalgebra::Point2;
