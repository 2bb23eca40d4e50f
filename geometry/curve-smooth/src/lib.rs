//! Parametric spline smoothing of annotated centerlines.
//!
//! Hand-placed nerve-root markups are sparse and jittery; lofting tubes
//! straight through them produces kinked, faceted roots. This crate fits a
//! parametric cubic B-spline through the three coordinate channels jointly
//! (one shared chord-length parameterization) and resamples it at uniform
//! parameter spacing:
//!
//! - smoothing factor `s = 0` interpolates exactly through every input
//!   point,
//! - `s > 0` trades closeness to the data for curve roughness: the fit
//!   minimizes the squared residuals plus `s` times the squared second
//!   differences of the control points, so larger `s` means a smoother
//!   curve passing near, not through, the markups.
//!
//! # Example
//!
//! ```
//! use curve_smooth::smooth_line;
//! use nalgebra::Point3;
//!
//! let jittered: Vec<_> = (0..8)
//!     .map(|i| {
//!         let t = f64::from(i);
//!         Point3::new(t, (0.5 * t).sin() + 0.05 * f64::from(i % 2), 0.3 * t)
//!     })
//!     .collect();
//!
//! let resampled = smooth_line(&jittered, 100, 10.0).unwrap();
//! assert_eq!(resampled.len(), 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod basis;
mod error;
mod fit;

pub use error::{SmoothError, SmoothResult};
pub use fit::{smooth_line, FittedSpline};
