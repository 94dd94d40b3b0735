//! Gaussian kernel density estimation.

use super::{DensityEstimator, FrequencyScale};

/// 1/√(2π), the Gaussian kernel normalization constant.
const INV_SQRT_TAU: f64 = 0.398_942_280_401_432_7;

/// Gaussian KDE over a finite sample, frequency-scaled.
///
/// Bandwidth follows Scott's rule, `h = s · n^(-1/5)`. A sample with zero
/// spread cannot support a kernel estimate; the estimator then reports a
/// flat zero curve and flags itself degenerate instead of failing.
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
    scale: FrequencyScale,
    degenerate: bool,
}

impl GaussianKde {
    /// Fit a KDE to `samples`.
    pub fn fit(samples: Vec<f64>, scale: FrequencyScale) -> Self {
        let n = samples.len();
        let std_dev = sample_std_dev(&samples);
        let bandwidth = if n >= 2 && std_dev > 0.0 && std_dev.is_finite() {
            std_dev * (n as f64).powf(-0.2)
        } else {
            0.0
        };
        let degenerate = bandwidth <= 0.0;
        if degenerate {
            tracing::warn!(
                samples = n,
                "sample spread is degenerate, kernel density falls back to a flat curve"
            );
        }
        Self {
            samples,
            bandwidth,
            scale,
            degenerate,
        }
    }

    /// Scott's-rule bandwidth; 0.0 when the fit is degenerate.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

impl DensityEstimator for GaussianKde {
    fn density_at(&self, x: f64) -> f64 {
        if self.degenerate {
            return 0.0;
        }
        let h = self.bandwidth;
        let kernel_sum: f64 = self
            .samples
            .iter()
            .map(|&s| {
                let z = (x - s) / h;
                (-0.5 * z * z).exp()
            })
            .sum();
        let density = kernel_sum * INV_SQRT_TAU / (self.samples.len() as f64 * h);
        density * self.scale.factor()
    }

    fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Sample standard deviation with the n-1 denominator.
fn sample_std_dev(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples
        .iter()
        .map(|&s| {
            let d = s - mean;
            d * d
        })
        .sum::<f64>()
        / (n - 1) as f64;
    variance.sqrt()
}
