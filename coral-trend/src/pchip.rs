//! Piecewise cubic Hermite interpolation with monotone slopes (PCHIP).
//!
//! Derivatives follow Fritsch-Butland: a weighted harmonic mean of the
//! neighbouring secants in the interior, a limited three-point estimate at
//! the ends, and zero wherever the data changes direction. The resulting
//! interpolant never overshoots between knots where the data is monotone.

use crate::error::{CoralTrendError, Result};

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// One-sided derivative estimate at an end knot.
///
/// `h0`/`m0` belong to the interval touching the end, `h1`/`m1` to its neighbour.
fn edge_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if sign(d) != sign(m0) {
        0.0
    } else if sign(m0) != sign(m1) && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}

/// Compute PCHIP derivatives at each knot.
///
/// `x` must be strictly increasing and hold at least two points.
pub fn pchip_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    debug_assert!(n >= 2 && y.len() == n);

    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let m: Vec<f64> = y
        .windows(2)
        .zip(&h)
        .map(|(w, &hk)| (w[1] - w[0]) / hk)
        .collect();

    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let (prev, next) = (m[k - 1], m[k]);
        if prev == 0.0 || next == 0.0 || sign(prev) != sign(next) {
            continue;
        }
        let w1 = 2.0 * h[k] + h[k - 1];
        let w2 = h[k] + 2.0 * h[k - 1];
        d[k] = (w1 + w2) / (w1 / prev + w2 / next);
    }
    d[0] = edge_slope(h[0], h[1], m[0], m[1]);
    d[n - 1] = edge_slope(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

/// A ready-to-evaluate PCHIP interpolant.
#[derive(Debug, Clone, PartialEq)]
pub struct Pchip {
    x: Vec<f64>,
    y: Vec<f64>,
    slopes: Vec<f64>,
}

impl Pchip {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(CoralTrendError::InvalidInput(format!(
                "{} x values but {} y values",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(CoralTrendError::InvalidInput(format!(
                "need at least 2 points, got {}",
                x.len()
            )));
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(CoralTrendError::InvalidInput(
                "interpolation points must be finite".to_string(),
            ));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CoralTrendError::InvalidInput(
                "x values must be strictly increasing".to_string(),
            ));
        }

        Ok(Pchip {
            x: x.to_vec(),
            y: y.to_vec(),
            slopes: pchip_slopes(x, y),
        })
    }

    pub fn knots(&self) -> &[f64] {
        &self.x
    }

    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    /// Evaluate at `x`.
    ///
    /// Points outside the knot range extend the first or last cubic piece.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.x.len();
        let hi = match self.x.partition_point(|&v| v < x) {
            i if i >= n => n - 1,
            0 => 1,
            i => i,
        };
        let lo = hi - 1;

        let h = self.x[hi] - self.x[lo];
        let t = (x - self.x[lo]) / h;

        let h00 = (1.0 + 2.0 * t) * (1.0 - t) * (1.0 - t);
        let h10 = t * (1.0 - t) * (1.0 - t);
        let h01 = t * t * (3.0 - 2.0 * t);
        let h11 = t * t * (t - 1.0);

        h00 * self.y[lo] + h10 * h * self.slopes[lo] + h01 * self.y[hi] + h11 * h * self.slopes[hi]
    }

    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}
