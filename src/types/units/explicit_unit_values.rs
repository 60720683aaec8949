//! Unit-tagged values for configuration files
//!
//! Quantities read from TOML carry their unit explicitly
//! (`gross_capacity = { value = 50.0, unit = "t" }`) and are converted to
//! `uom` quantities at the boundary. Unit names are matched case-insensitively.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use uom::si::{
    f64::{Length, Mass, ThermodynamicTemperature, Velocity},
    length::{centimeter, foot, inch, meter, millimeter},
    mass::{kilogram, megagram, pound, ton_short},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
    velocity::{kilometer_per_hour, knot, meter_per_second, mile_per_hour},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type LengthValue = WithUnit<Length>;
pub type MassValue = WithUnit<Mass>;
pub type VelocityValue = WithUnit<Velocity>;
pub type TemperatureValue = WithUnit<ThermodynamicTemperature>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }

    fn normalized_unit(&self) -> String {
        self.unit.trim().to_ascii_lowercase()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown length unit: {0}")]
    UnknownLengthUnit(String),

    #[error("Unknown mass unit: {0}")]
    UnknownMassUnit(String),

    #[error("Unknown velocity unit: {0}")]
    UnknownVelocityUnit(String),

    #[error("Unknown temperature unit: {0}")]
    UnknownTemperatureUnit(String),
}

impl WithUnit<Length> {
    pub fn to_length(&self) -> Result<Length, UnitError> {
        match self.normalized_unit().as_str() {
            "m" | "meter" | "metre" | "meters" | "metres" => Ok(Length::new::<meter>(self.value)),
            "cm" | "centimeter" | "centimetre" | "centimeters" | "centimetres" => {
                Ok(Length::new::<centimeter>(self.value))
            }
            "mm" | "millimeter" | "millimetre" | "millimeters" | "millimetres" => {
                Ok(Length::new::<millimeter>(self.value))
            }
            "ft" | "foot" | "feet" => Ok(Length::new::<foot>(self.value)),
            "in" | "inch" | "inches" => Ok(Length::new::<inch>(self.value)),
            _ => Err(UnitError::UnknownLengthUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<Mass> {
    pub fn to_mass(&self) -> Result<Mass, UnitError> {
        match self.normalized_unit().as_str() {
            "t" | "tonne" | "tonnes" | "metric ton" | "metric tons" => {
                Ok(Mass::new::<megagram>(self.value))
            }
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Mass::new::<kilogram>(self.value)),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Mass::new::<pound>(self.value)),
            "short ton" | "short tons" => Ok(Mass::new::<ton_short>(self.value)),
            _ => Err(UnitError::UnknownMassUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<Velocity> {
    pub fn to_velocity(&self) -> Result<Velocity, UnitError> {
        match self.normalized_unit().as_str() {
            "km/h" | "kph" | "kmh" => Ok(Velocity::new::<kilometer_per_hour>(self.value)),
            "m/s" | "mps" => Ok(Velocity::new::<meter_per_second>(self.value)),
            "mph" => Ok(Velocity::new::<mile_per_hour>(self.value)),
            "kn" | "kt" | "knot" | "knots" => Ok(Velocity::new::<knot>(self.value)),
            _ => Err(UnitError::UnknownVelocityUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<ThermodynamicTemperature> {
    pub fn to_temperature(&self) -> Result<ThermodynamicTemperature, UnitError> {
        match self.normalized_unit().as_str() {
            "c" | "°c" | "celsius" => {
                Ok(ThermodynamicTemperature::new::<degree_celsius>(self.value))
            }
            "f" | "°f" | "fahrenheit" => {
                Ok(ThermodynamicTemperature::new::<degree_fahrenheit>(self.value))
            }
            "k" | "kelvin" => Ok(ThermodynamicTemperature::new::<kelvin>(self.value)),
            _ => Err(UnitError::UnknownTemperatureUnit(self.unit.clone())),
        }
    }
}
