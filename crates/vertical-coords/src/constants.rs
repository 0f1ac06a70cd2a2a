//! Named physical constants for the vertical converter library.
//!
//! These are hard-wired in the original per spec §9 ("Numeric constants");
//! the values below are the standard ICAO/dry-air constants, not transcribed
//! verbatim from any file in the pack (the filtered original source does not
//! carry `vertical_coordinate_transformations.c`) — see `DESIGN.md`.

/// Standard gravitational acceleration, m/s².
pub const EARTH_GRAVITY: f64 = 9.80665;

/// Specific gas constant for dry air, J/(kg·K).
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.05;

/// ICAO standard atmosphere: sea-level pressure, Pa.
pub const ICAO_STANDARD_PRESSURE: f64 = 101325.0;
/// ICAO standard atmosphere: sea-level temperature, K.
pub const ICAO_STANDARD_TEMPERATURE: f64 = 288.15;
/// ICAO standard atmosphere: tropospheric lapse rate, K/m.
pub const ICAO_LAPSE_RATE: f64 = 0.0065;

/// Ratio of the gas constant for dry air to that of water vapour, used to
/// correct temperature for humidity in the virtual-temperature formula.
pub const WATER_VAPOUR_EPSILON: f64 = 0.6078;

/// `P(h) = P0 * (1 - L*h/T0)^(g/(R*L))`: ICAO standard-atmosphere pressure
/// at altitude `h` (troposphere only, `h < 11000`).
pub fn standard_pressure_at_altitude(h: f64) -> f64 {
    let exponent = EARTH_GRAVITY / (DRY_AIR_GAS_CONSTANT * ICAO_LAPSE_RATE);
    ICAO_STANDARD_PRESSURE * (1.0 - ICAO_LAPSE_RATE * h / ICAO_STANDARD_TEMPERATURE).powf(exponent)
}

/// Inverse of [`standard_pressure_at_altitude`]: altitude at pressure `p`.
pub fn standard_altitude_at_pressure(p: f64) -> f64 {
    let exponent = DRY_AIR_GAS_CONSTANT * ICAO_LAPSE_RATE / EARTH_GRAVITY;
    (ICAO_STANDARD_TEMPERATURE / ICAO_LAPSE_RATE) * (1.0 - (p / ICAO_STANDARD_PRESSURE).powf(exponent))
}

/// Virtual temperature from specific humidity `q` (kg/kg) and temperature
/// `t` (K): `Tv = T * (1 + epsilon*q)`.
pub fn virtual_temperature(specific_humidity: f64, temperature: f64) -> f64 {
    temperature * (1.0 + WATER_VAPOUR_EPSILON * specific_humidity)
}

/// Hydrostatic thickness of one layer: `dz = (R*Tv/g) * ln(p_low/p_high)`.
pub fn barometric_layer_thickness(p_low: f64, p_high: f64, virtual_temp: f64) -> f64 {
    (DRY_AIR_GAS_CONSTANT * virtual_temp / EARTH_GRAVITY) * (p_low / p_high).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_pressure_round_trips_altitude() {
        let h = 1500.0;
        let p = standard_pressure_at_altitude(h);
        assert_relative_eq!(standard_altitude_at_pressure(p), h, epsilon = 1e-6);
    }

    #[test]
    fn standard_pressure_at_sea_level() {
        assert_relative_eq!(standard_pressure_at_altitude(0.0), ICAO_STANDARD_PRESSURE, epsilon = 1e-6);
    }
}
