use crate::constants::{
    ACCELERATION_GRAVITY_SEA_LEVEL, EARTH_MEAN_RADIUS, GAS_CONSTANT, LOWER_STRATOSPHERE_HEIGHT,
    SEA_LEVEL_TEMPERATURE, TROPOSPHERE_HEIGHT, TROPOSPHERE_TEMP_GRADIENT,
};

/// Calculate the air density in kg/m³ at the given altitude using a standard
/// Earth atmospheric model from the '60s. Temperature is worked in °C and
/// pressure in kPa; density comes out of the equation of state.
///
/// The three branches use independent fits, so small discontinuities at the
/// 11 km and 25 km boundaries are expected.
pub fn air_density(altitude: f64) -> f64 {
    let temperature;
    let pressure;

    // Troposphere
    if altitude <= TROPOSPHERE_HEIGHT {
        temperature = SEA_LEVEL_TEMPERATURE - (TROPOSPHERE_TEMP_GRADIENT * altitude);
        pressure = 101.29 * ((temperature + 273.1) / 288.08).powf(5.256);
    }
    // Lower Stratosphere ( 11000 < altitude <= 25000 )
    else if altitude <= LOWER_STRATOSPHERE_HEIGHT {
        temperature = -56.46;
        pressure = 22.65 * (1.73 - (0.000_157 * altitude)).exp();
    }
    // Upper Stratosphere ( altitude > 25000 )
    else {
        temperature = -131.21 + (0.002_99 * altitude);
        pressure = 2.488 * ((temperature + 273.1) / 216.6).powf(-11.388);
    }

    pressure / (GAS_CONSTANT * (temperature + 273.1))
}

/// Calculate the acceleration due to gravity in m/s² at the given altitude.
/// Inverse-square falloff scaled from the (signed) sea-level value.
pub fn acceleration_gravity(altitude: f64) -> f64 {
    let ratio = (EARTH_MEAN_RADIUS / (EARTH_MEAN_RADIUS + altitude)).powi(2);
    ACCELERATION_GRAVITY_SEA_LEVEL * ratio
}

/// Ambient values the update chain reads on every tick. Held by the clock and
/// either frozen at sea level or refreshed from the body's altitude, depending
/// on the screen configuration.
#[derive(Debug, Clone)]
pub struct Environment {
    pub air_density: f64,
    pub acceleration_gravity: f64,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            air_density: air_density(0.0),
            acceleration_gravity: acceleration_gravity(0.0),
        }
    }

    pub fn update(&mut self, altitude: f64) {
        self.air_density = air_density(altitude);
        self.acceleration_gravity = acceleration_gravity(altitude);
    }

    pub fn reset(&mut self) {
        self.update(0.0);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
