//! Statistical helpers shared by the classifiers.

use std::f64::consts::PI;

/// Arithmetic mean of the values, or 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction.
///
/// The sum of squared deviations is divided by `n - 1`. Fewer than two values
/// yield 0.0, the same degenerate spread as an all-identical sample; the
/// classifiers skip zero-spread attributes instead of dividing by zero.
pub fn sample_stdev(values: &[f64]) -> f64 {
    let count = values.len();
    if count < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let squared_deviations: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    (squared_deviations / (count - 1) as f64).sqrt()
}

/// Natural log of the Gaussian probability density at `x`.
///
/// Evaluated as `ln(1/(√(2π)·stdev)) − (x−mean)²/(2·stdev²)` so very small
/// densities stay representable. Requires `stdev > 0`.
pub fn gaussian_log_density(x: f64, mean: f64, stdev: f64) -> f64 {
    let density = 1.0 / ((2.0 * PI).sqrt() * stdev);
    let exponent = (x - mean).powi(2) / (2.0 * stdev * stdev);
    density.ln() - exponent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sample_stdev_uses_bessel_correction() {
        // Squared deviations sum to 2, divided by n - 1 = 1
        assert_eq!(sample_stdev(&[2.0, 4.0]), 2.0_f64.sqrt());
    }

    #[test]
    fn test_sample_stdev_degenerate_inputs() {
        assert_eq!(sample_stdev(&[]), 0.0);
        assert_eq!(sample_stdev(&[5.0]), 0.0);
        assert_eq!(sample_stdev(&[3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_gaussian_log_density_closed_form() {
        // At x == mean the exponent vanishes and the density is 1/(√(2π)·σ)
        let stdev = 2.0_f64.sqrt();
        let log_density = gaussian_log_density(3.0, 3.0, stdev);
        let expected = 1.0 / ((2.0 * PI).sqrt() * stdev);
        assert!((log_density.exp() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_log_density_away_from_mean() {
        let log_density = gaussian_log_density(10.0, 0.0, 1.0);
        let expected = (1.0 / (2.0 * PI).sqrt()).ln() - 50.0;
        assert!((log_density - expected).abs() < 1e-12);
    }
}
