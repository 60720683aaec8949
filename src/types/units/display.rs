use std::fmt;

use crate::types::units::*;

#[derive(Debug, Clone, Copy)]
pub struct DisplayMass(pub Mass);
#[derive(Debug, Clone, Copy)]
pub struct DisplayLength(pub Length);
#[derive(Debug, Clone, Copy)]
pub struct DisplayVelocity(pub Velocity);

impl fmt::Display for DisplayMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0.get::<metric_ton>();
        let kg = self.0.get::<kilogram>();
        write!(f, "{:.2} t ({:.0} kg)", t, kg)
    }
}

impl fmt::Display for DisplayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0.get::<meter>();
        let ft = self.0.get::<foot>();
        write!(f, "{:.2} m ({:.1} ft)", m, ft)
    }
}

impl fmt::Display for DisplayVelocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kph = self.0.get::<kilometer_per_hour>();
        let mph = self.0.get::<mile_per_hour>();
        write!(f, "{:.1} km/h ({:.1} mph)", kph, mph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_display_in_tonnes() {
        let shown = DisplayMass(Mass::new::<kilogram>(10500.0)).to_string();
        assert_eq!(shown, "10.50 t (10500 kg)");
    }

    #[test]
    fn test_velocity_display_in_kph() {
        let shown = DisplayVelocity(Velocity::new::<kilometer_per_hour>(20.0)).to_string();
        assert!(shown.starts_with("20.0 km/h"));
    }
}
