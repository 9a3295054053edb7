use crate::Vec3;

/// Near-zero threshold used for degenerate scatter directions.
const NEAR_ZERO: f64 = 1e-8;

/// Extension trait for the vector helpers glam does not provide.
pub trait Vec3Ext {
    /// True when every component is within 1e-8 of zero.
    fn near_zero(&self) -> bool;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.x.abs() < NEAR_ZERO && self.y.abs() < NEAR_ZERO && self.z.abs() < NEAR_ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::splat(1e-9).near_zero());
        assert!(!Vec3::new(0.0, 0.0, 1e-7).near_zero());
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).near_zero());
    }
}
