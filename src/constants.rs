// Physical Constants
pub const EARTH_MEAN_RADIUS: f64 = 6_371_009.0; // mean radius of the Earth in m
pub const ACCELERATION_GRAVITY_SEA_LEVEL: f64 = -9.80665; // m/s², signed toward the ground

// Environmental Constants (1960s standard atmosphere model, temperature in °C, pressure in kPa)
pub const TROPOSPHERE_HEIGHT: f64 = 11_000.0; // m
pub const LOWER_STRATOSPHERE_HEIGHT: f64 = 25_000.0; // m
pub const SEA_LEVEL_TEMPERATURE: f64 = 15.04; // °C
pub const TROPOSPHERE_TEMP_GRADIENT: f64 = 0.006_49; // °C per meter
pub const GAS_CONSTANT: f64 = 0.2869; // kJ/(kg·K), used in the equation of state

// Simulation Parameters
pub const FO_NUM_DIGITS: u32 = 6; // fractional digits kept on every derived value
pub const STEP_DT: f64 = 1.0 / 60.0; // s, assumed frame length for manual steps
pub const DEFAULT_PARACHUTE_AREA: f64 = 7.07; // m², canopy of 1.5 m radius

// Value Graph Parameters
pub const VG_MAX_VALUE_INTERVAL: f64 = 30.0; // initial value-axis extent, doubled on overflow
pub const VG_MAX_TIME_INTERVAL: f64 = 5.0; // s, added to the time axis on overflow
pub const VG_UPDATE_FREQUENCY: f64 = 0.1; // s of simulation time between samples
pub const VG_PLOT_WIDTH: f64 = 360.0; // px
pub const VG_PLOT_HEIGHT: f64 = 235.0; // px
