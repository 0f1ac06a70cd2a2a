//! Vertical Transformation: the CF metadata tag naming a column's native
//! vertical coordinate and its parameter fields.
//!
//! This is the *data-model* tag only — the converter logic that turns one
//! of these into physical levels lives in the `vertical-coords` crate.

use serde::{Deserialize, Serialize};

/// Names the native vertical coordinate of a column and carries the
/// parameter fields CF attaches to it.
///
/// Constructed from parsed config/CF attributes, so it derives
/// [`Serialize`]/[`Deserialize`] like the rest of the data model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerticalTransformation {
    /// The native axis values already are the physical coordinate.
    Identity,
    /// Like `Identity`, but the physical values vary with (x, y, t).
    Identity4D,
    /// `P(k) = p0 * exp(native[k])`.
    LnPressure { p0: f64 },
    /// ICAO standard-atmosphere inversion of a height axis to pressure.
    AltitudeStandard,
    /// `P(k) = p_top + sigma[k] * (p_surface - p_top)`.
    Sigma { p_top: f64, surface_pressure: String },
    /// `P(k) = a[k] * p0 + b[k] * p_surface`.
    HybridSigma {
        a: Vec<f64>,
        b: Vec<f64>,
        p0: f64,
        surface_pressure: String,
    },
    /// Like `HybridSigma` but `ap[k]` is already in Pa (no `p0` factor).
    HybridSigmaAp {
        ap: Vec<f64>,
        b: Vec<f64>,
        surface_pressure: String,
    },
    /// Inverse ICAO standard atmosphere: pressure axis to altitude.
    PressureToStandardAltitude,
    /// Hydrostatic integration of a pressure axis to altitude, optionally
    /// corrected for humidity via a specific-humidity field.
    PressureIntegration {
        surface_geopotential: String,
        specific_humidity: Option<String>,
    },
    /// Ocean s-coordinate, generic form 1.
    OceanSG1 {
        depth: String,
        depth_c: f64,
        eta: String,
        s: Vec<f64>,
        c: Vec<f64>,
    },
    /// Ocean s-coordinate, generic form 2.
    OceanSG2 {
        depth: String,
        depth_c: f64,
        eta: String,
        s: Vec<f64>,
        c: Vec<f64>,
    },
    /// Altitude axis plus topography field yields height, or vice versa.
    AltitudeHeight { topography: String, to_height: bool },
    /// Geopotential axis plus topography field yields altitude.
    GeopotentialToAltitude { topography: String },
}

impl VerticalTransformation {
    /// A short, stable name for logging and error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Identity4D => "identity_4d",
            Self::LnPressure { .. } => "ln_pressure",
            Self::AltitudeStandard => "altitude_standard",
            Self::Sigma { .. } => "sigma",
            Self::HybridSigma { .. } => "hybrid_sigma",
            Self::HybridSigmaAp { .. } => "hybrid_sigma_ap",
            Self::PressureToStandardAltitude => "pressure_to_standard_altitude",
            Self::PressureIntegration { .. } => "pressure_integration",
            Self::OceanSG1 { .. } => "ocean_s_g1",
            Self::OceanSG2 { .. } => "ocean_s_g2",
            Self::AltitudeHeight { .. } => "altitude_height",
            Self::GeopotentialToAltitude { .. } => "geopotential_to_altitude",
        }
    }
}
