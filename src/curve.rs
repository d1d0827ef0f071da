use std::{error::Error, fmt::Display, str::FromStr};

use nalgebra::Point2;

use crate::{coordinate::Coordinate, curves};

/// Curve represents one of the parametric curves of this library as a value, so it can be
/// picked at runtime (for example from a command line argument or a configuration file).
///
/// Evaluating a [Curve] gives exactly the same point as calling the matching free function.
/// ```
/// use parametric_curves::{diamond, Curve};
///
/// let curve: Curve = "Diamond".parse().unwrap();
///
/// assert_eq!(Curve::Diamond, curve);
/// assert_eq!(diamond(0.3, 4.0, 2.0), curve.evaluate(0.3, 4.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Curve {
    Bicorn,
    Kappa,
    Bow,
    Diamond,
    Chrysanthemum,
    Butterfly,
}

impl Curve {
    /// All curves in declaration order.
    pub const ALL: [Curve; 6] = [
        Curve::Bicorn,
        Curve::Kappa,
        Curve::Bow,
        Curve::Diamond,
        Curve::Chrysanthemum,
        Curve::Butterfly,
    ];

    /// Lower-case name of the curve, accepted back when parsing a [Curve].
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Bicorn => "bicorn",
            Curve::Kappa => "kappa",
            Curve::Bow => "bow",
            Curve::Diamond => "diamond",
            Curve::Chrysanthemum => "chrysanthemum",
            Curve::Butterfly => "butterfly",
        }
    }

    /// Point of the curve at parameter `t`, scaled into a `w` × `h` box.
    pub fn evaluate<T: Coordinate>(&self, t: T, w: T, h: T) -> Point2<T> {
        match self {
            Curve::Bicorn => curves::bicorn(t, w, h),
            Curve::Kappa => curves::kappa(t, w, h),
            Curve::Bow => curves::bow(t, w, h),
            Curve::Diamond => curves::diamond(t, w, h),
            Curve::Chrysanthemum => curves::chrysanthemum(t, w, h),
            Curve::Butterfly => curves::butterfly(t, w, h),
        }
    }

    /// Evaluates the curve for every value of `t_values`, keeping their order.
    /// # Example
    /// ```
    /// use parametric_curves::Curve;
    ///
    /// let t_values: Vec<f64> = (0..=4).map(|i| i as f64 * std::f64::consts::FRAC_PI_2).collect();
    /// let points = Curve::Bicorn.batch_evaluate(&t_values, 10.0, 10.0);
    ///
    /// assert_eq!(t_values.len(), points.len());
    /// assert_eq!(Curve::Bicorn.evaluate(t_values[3], 10.0, 10.0), points[3]);
    /// ```
    pub fn batch_evaluate<T: Coordinate>(&self, t_values: &[T], w: T, h: T) -> Vec<Point2<T>> {
        t_values.iter()
            .map(|t| self.evaluate(*t, w, h))
            .collect()
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Curve {
    type Err = CurveError;

    /// Parses a curve name, ignoring case and surrounding whitespace.
    /// # Errors
    /// ```
    /// use parametric_curves::Curve;
    ///
    /// assert!("astroid".parse::<Curve>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Curve::ALL.into_iter()
            .find(|curve| curve.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CurveError(format!("unknown curve name '{}'", name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveError(String);

impl Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Curve: {}", self.0)
    }
}

impl Error for CurveError {}
