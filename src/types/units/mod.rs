mod display;
mod explicit_unit_values;

pub use uom::si::f64::{Length, Mass, ThermodynamicTemperature, Velocity};

pub use uom::si::{
    length::{centimeter, foot, inch, meter, millimeter},
    mass::{kilogram, megagram as metric_ton, pound, ton_short},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
    velocity::{kilometer_per_hour, knot, meter_per_second, mile_per_hour},
};

pub use display::{DisplayLength, DisplayMass, DisplayVelocity};
pub use explicit_unit_values::{
    LengthValue, MassValue, TemperatureValue, UnitError, VelocityValue, WithUnit,
};
