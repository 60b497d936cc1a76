pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const AIR_HEAT_CAPACITY_RATIO: f64 = 1.4;
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
pub const ISA_MAX_ALTITUDE: f64 = 20_000.0; // m
pub const ISA_MIN_ALTITUDE: f64 = -1_000.0; // m

/// Below this true airspeed (m/s) the aerodynamic model returns nothing.
pub const MIN_AIRSPEED: f64 = 1.0;

// Aerodynamic angle limits
pub const MAX_ANGLE_OF_ATTACK: f64 = 60.0; // degrees
pub const MAX_SIDESLIP: f64 = 45.0; // degrees

// Unit conversions
pub const METERS_TO_FEET: f64 = 3.280_839_895;
pub const MPS_TO_KNOTS: f64 = 1.943_844_492;
pub const MPS_TO_FPM: f64 = 196.850_393_7;
