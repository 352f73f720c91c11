/// Flat marker showing an orbital radius. Informational only; never animated.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRing {
    inner_radius: f32,
    outer_radius: f32,
    label: String,
}

impl OrbitRing {
    /// Ring spanning `radius ± half_width`.
    pub fn around(radius: f32, half_width: f32, label: impl Into<String>) -> Self {
        debug_assert!(half_width > 0.0, "ring half width must be positive, got {half_width}");
        Self {
            inner_radius: radius - half_width,
            outer_radius: radius + half_width,
            label: label.into(),
        }
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `radius` lies strictly between the ring edges.
    pub fn brackets(&self, radius: f32) -> bool {
        self.inner_radius < radius && radius < self.outer_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn around_brackets_radius() {
        let ring = OrbitRing::around(8.5, 0.05, "earth");
        assert!((ring.inner_radius() - 8.45).abs() < 1e-5);
        assert!((ring.outer_radius() - 8.55).abs() < 1e-5);
        assert!(ring.brackets(8.5));
        assert!(!ring.brackets(8.6));
        assert_eq!(ring.label(), "earth");
    }
}
