/// A raw admission metric with a documented input domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Gre,
    Ielts,
    Cgpa,
}

impl Metric {
    /// Inclusive `(min, max)` domain of the raw metric
    pub const fn domain(self) -> (f64, f64) {
        match self {
            Metric::Gre => (260.0, 340.0),
            Metric::Ielts => (0.0, 9.0),
            Metric::Cgpa => (0.0, 10.0),
        }
    }
}

/// Map a raw metric linearly onto 0-100, anchored at the domain minimum
///
/// Out-of-domain values are not clamped: a GRE of 250 yields a negative score.
#[inline]
pub fn normalize(metric: Metric, raw: f64) -> f64 {
    let (min, max) = metric.domain();
    (raw - min) / (max - min) * 100.0
}

#[inline]
pub fn normalize_gre(gre: f64) -> f64 {
    normalize(Metric::Gre, gre)
}

#[inline]
pub fn normalize_ielts(ielts: f64) -> f64 {
    normalize(Metric::Ielts, ielts)
}

#[inline]
pub fn normalize_cgpa(cgpa: f64) -> f64 {
    normalize(Metric::Cgpa, cgpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gre_anchored_at_domain_minimum() {
        assert_eq!(normalize_gre(260.0), 0.0);
        assert_eq!(normalize_gre(340.0), 100.0);
        assert_eq!(normalize_gre(315.0), 68.75);
    }

    #[test]
    fn test_ielts_and_cgpa_scale() {
        assert_eq!(normalize_ielts(9.0), 100.0);
        assert!((normalize_ielts(7.5) - 83.333_333).abs() < 1e-5);
        assert!((normalize_cgpa(8.5) - 85.0).abs() < 1e-9);
        assert_eq!(normalize_cgpa(0.0), 0.0);
    }

    #[test]
    fn test_out_of_domain_is_not_clamped() {
        assert!(normalize_gre(250.0) < 0.0);
        assert!(normalize_ielts(10.0) > 100.0);
    }
}
