pub mod units;

pub use units::*;

// Re-export nalgebra
pub use nalgebra as na;

/// Moments are carried as plain tonne-metres, the unit the engine reports in.
pub type TonneMetres = f64;

/// Read a mass in tonnes
#[inline]
pub fn tonnes(mass: Mass) -> f64 {
    mass.get::<metric_ton>()
}

/// Build a mass from tonnes
#[inline]
pub fn from_tonnes(value: f64) -> Mass {
    Mass::new::<metric_ton>(value)
}

/// Read a length in metres
#[inline]
pub fn metres(length: Length) -> f64 {
    length.get::<meter>()
}

/// Horizontal distance between two load-local points (metres, Y-up)
pub fn horizontal_distance(a: &na::Point3<f64>, b: &na::Point3<f64>) -> f64 {
    ((a.x - b.x).powi(2) + (a.z - b.z).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tonne_round_trip() {
        let mass = Mass::new::<kilogram>(15000.0);
        assert_relative_eq!(tonnes(mass), 15.0, epsilon = 1e-12);
        assert_relative_eq!(tonnes(from_tonnes(10.5)), 10.5, epsilon = 1e-12);
    }

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let a = na::Point3::new(0.0, 0.0, 0.0);
        let b = na::Point3::new(3.0, 100.0, 4.0);
        assert_relative_eq!(horizontal_distance(&a, &b), 5.0, epsilon = 1e-12);
    }
}
