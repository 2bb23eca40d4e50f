//! Penalized least-squares spline fitting.

use nalgebra::{DMatrix, Point3};
use tracing::debug;

use crate::basis::{CubicBasis, DEGREE};
use crate::error::{SmoothError, SmoothResult};

/// A cubic B-spline fitted through a 3D point sequence.
///
/// All three coordinate channels share one chord-length parameterization,
/// so the fitted curve is a single parametric curve in space rather than
/// three independent graphs.
#[derive(Debug, Clone)]
pub struct FittedSpline {
    basis: CubicBasis,
    control: Vec<Point3<f64>>,
    params: Vec<f64>,
}

impl FittedSpline {
    /// Fit a spline through `points` with smoothing factor `s`.
    ///
    /// With `s == 0` the spline interpolates every point exactly (a square
    /// collocation solve). With `s > 0` the fit minimizes
    /// `sum ||C(u_i) - p_i||^2 + s * sum ||d2 c_j||^2`, where `d2 c_j` are
    /// second differences of the control points; the roughness weight
    /// equals `s`, so larger values flatten the curve.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 4 points, non-finite input, a
    /// negative smoothing factor, coincident consecutive points, or a
    /// singular fitting system.
    pub fn fit(points: &[Point3<f64>], s: f64) -> SmoothResult<Self> {
        let n = points.len();
        if n < DEGREE + 1 {
            return Err(SmoothError::InsufficientPoints {
                required: DEGREE + 1,
                actual: n,
            });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(SmoothError::NonFinitePoint { index });
        }
        if s < 0.0 || !s.is_finite() {
            return Err(SmoothError::InvalidSmoothing(s));
        }

        let params = chord_parameters(points)?;
        let basis = CubicBasis::clamped(&params);

        // Collocation matrix: row i holds the four basis values at u_i.
        let mut collocation = DMatrix::zeros(n, n);
        for (i, &u) in params.iter().enumerate() {
            let span = basis.find_span(u);
            let values = basis.values(span, u);
            for (k, &value) in values.iter().enumerate() {
                collocation[(i, span - DEGREE + k)] = value;
            }
        }

        let mut rhs = DMatrix::zeros(n, 3);
        for (i, p) in points.iter().enumerate() {
            rhs[(i, 0)] = p.x;
            rhs[(i, 1)] = p.y;
            rhs[(i, 2)] = p.z;
        }

        let solution = if s == 0.0 {
            collocation
                .lu()
                .solve(&rhs)
                .ok_or_else(|| SmoothError::Singular {
                    reason: "interpolation collocation matrix".to_string(),
                })?
        } else {
            // Normal equations with a second-difference roughness penalty.
            let mut diff2 = DMatrix::zeros(n - 2, n);
            for j in 0..n - 2 {
                diff2[(j, j)] = 1.0;
                diff2[(j, j + 1)] = -2.0;
                diff2[(j, j + 2)] = 1.0;
            }

            let gram = collocation.transpose() * &collocation + (diff2.transpose() * diff2) * s;
            let projected = collocation.transpose() * rhs;
            gram.lu()
                .solve(&projected)
                .ok_or_else(|| SmoothError::Singular {
                    reason: "penalized normal equations".to_string(),
                })?
        };

        let control = (0..n)
            .map(|j| Point3::new(solution[(j, 0)], solution[(j, 1)], solution[(j, 2)]))
            .collect();

        debug!(points = n, s, "fitted smoothing spline");

        Ok(Self {
            basis,
            control,
            params,
        })
    }

    /// The chord-length parameters assigned to the input points.
    #[must_use]
    pub fn parameters(&self) -> &[f64] {
        &self.params
    }

    /// Evaluate the spline at parameter `t`, clamped to [0, 1].
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        let u = t.clamp(0.0, 1.0);
        let span = self.basis.find_span(u);
        let values = self.basis.values(span, u);

        let mut acc = nalgebra::Vector3::zeros();
        for (k, &value) in values.iter().enumerate() {
            acc += self.control[span - DEGREE + k].coords * value;
        }
        Point3::from(acc)
    }

    /// Sample the spline at `n` uniformly spaced parameters over [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InvalidSampleCount`] for `n < 2`.
    pub fn sample(&self, n: usize) -> SmoothResult<Vec<Point3<f64>>> {
        if n < 2 {
            return Err(SmoothError::InvalidSampleCount(n));
        }
        #[allow(clippy::cast_precision_loss)]
        Ok((0..n)
            .map(|i| self.point_at(i as f64 / (n - 1) as f64))
            .collect())
    }
}

/// Smooth a line and resample it at `n_interpolate` uniform parameters.
///
/// The returned sequence always holds exactly `n_interpolate` points.
///
/// # Errors
///
/// Propagates every [`FittedSpline::fit`] and [`FittedSpline::sample`]
/// failure.
pub fn smooth_line(
    points: &[Point3<f64>],
    n_interpolate: usize,
    s: f64,
) -> SmoothResult<Vec<Point3<f64>>> {
    FittedSpline::fit(points, s)?.sample(n_interpolate)
}

/// Normalized cumulative chord-length parameterization.
fn chord_parameters(points: &[Point3<f64>]) -> SmoothResult<Vec<f64>> {
    let mut params = Vec::with_capacity(points.len());
    params.push(0.0);

    let mut total = 0.0;
    for (i, pair) in points.windows(2).enumerate() {
        let step = (pair[1] - pair[0]).norm();
        if step <= 0.0 {
            return Err(SmoothError::Degenerate {
                reason: format!("points {i} and {} coincide", i + 1),
            });
        }
        total += step;
        params.push(total);
    }

    for u in &mut params {
        *u /= total;
    }
    Ok(params)
}
