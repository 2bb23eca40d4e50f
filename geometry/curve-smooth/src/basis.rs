//! Cubic B-spline basis on a clamped knot vector.

/// Spline degree used throughout the smoother.
pub(crate) const DEGREE: usize = 3;

/// A clamped cubic B-spline basis with one control point per data site.
///
/// Interior knots are placed by de Boor averaging over the data parameters,
/// which keeps the collocation matrix well conditioned and banded.
#[derive(Debug, Clone)]
pub(crate) struct CubicBasis {
    knots: Vec<f64>,
    n_ctrl: usize,
}

impl CubicBasis {
    /// Build the basis for strictly increasing parameters in [0, 1].
    pub(crate) fn clamped(params: &[f64]) -> Self {
        let n = params.len();
        debug_assert!(n >= DEGREE + 1);

        let mut knots = Vec::with_capacity(n + DEGREE + 1);
        for _ in 0..=DEGREE {
            knots.push(0.0);
        }
        // Interior knots: averages of DEGREE consecutive parameters.
        for j in 1..=n.saturating_sub(DEGREE + 1) {
            let avg = params[j..j + DEGREE].iter().sum::<f64>() / DEGREE as f64;
            knots.push(avg);
        }
        for _ in 0..=DEGREE {
            knots.push(1.0);
        }

        Self { knots, n_ctrl: n }
    }

    /// Number of control points (and basis functions).
    pub(crate) fn len(&self) -> usize {
        self.n_ctrl
    }

    /// Knot span index containing `u`, clamped to the valid range.
    pub(crate) fn find_span(&self, u: f64) -> usize {
        let n = self.n_ctrl;
        if u >= self.knots[n] {
            return n - 1;
        }

        let mut low = DEGREE;
        let mut high = n;
        while low < high {
            let mid = (low + high) / 2;
            if self.knots[mid] > u {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        low - 1
    }

    /// The four non-zero cubic basis values at `u` (Cox-de Boor recursion).
    ///
    /// Entry `k` is the value of basis function `span - 3 + k`.
    pub(crate) fn values(&self, span: usize, u: f64) -> [f64; DEGREE + 1] {
        let mut values = [0.0; DEGREE + 1];
        let mut left = [0.0; DEGREE + 1];
        let mut right = [0.0; DEGREE + 1];

        values[0] = 1.0;
        for j in 1..=DEGREE {
            left[j] = u - self.knots[span + 1 - j];
            right[j] = self.knots[span + j] - u;

            let mut saved = 0.0;
            for r in 0..j {
                let denom = right[r + 1] + left[j - r];
                let term = if denom.abs() > 1e-15 {
                    values[r] / denom
                } else {
                    0.0
                };
                values[r] = saved + right[r + 1] * term;
                saved = left[j - r] * term;
            }
            values[j] = saved;
        }

        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn uniform_params(n: usize) -> Vec<f64> {
        #[allow(clippy::cast_precision_loss)]
        (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
    }

    #[test]
    fn knot_vector_is_clamped() {
        let basis = CubicBasis::clamped(&uniform_params(6));
        assert_eq!(basis.knots.len(), 6 + 4);
        assert!(basis.knots[..4].iter().all(|&k| k == 0.0));
        assert!(basis.knots[basis.knots.len() - 4..].iter().all(|&k| k == 1.0));
        // Knots must be non-decreasing.
        for w in basis.knots.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn basis_is_a_partition_of_unity() {
        let basis = CubicBasis::clamped(&uniform_params(8));
        for i in 0..=20 {
            let u = f64::from(i) / 20.0;
            let span = basis.find_span(u);
            let sum: f64 = basis.values(span, u).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn endpoint_basis_hits_single_function() {
        let basis = CubicBasis::clamped(&uniform_params(5));

        let span0 = basis.find_span(0.0);
        let v0 = basis.values(span0, 0.0);
        assert_relative_eq!(v0[0], 1.0, epsilon = 1e-12);

        let span1 = basis.find_span(1.0);
        let v1 = basis.values(span1, 1.0);
        assert_relative_eq!(v1[DEGREE], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn span_brackets_parameter() {
        let basis = CubicBasis::clamped(&uniform_params(9));
        for i in 0..=10 {
            let u = f64::from(i) / 10.0;
            let span = basis.find_span(u);
            assert!(span >= DEGREE);
            assert!(span < basis.len());
            assert!(basis.knots[span] <= u || u >= 1.0);
        }
    }

    #[test]
    fn minimum_size_basis() {
        // Four points: cubic with no interior knots, a Bezier segment.
        let basis = CubicBasis::clamped(&uniform_params(4));
        assert_eq!(basis.knots.len(), 8);
        assert_eq!(basis.len(), 4);
    }
}
