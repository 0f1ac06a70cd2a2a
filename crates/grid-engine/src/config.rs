//! Configuration for the numerical engine: the numeric knobs spec.md
//! leaves as call parameters but a real deployment tunes centrally.

use crate::kernels2d::InterpolationMethod2d;
use serde::{Deserialize, Serialize};

/// Centrally tuned defaults for the horizontal/hole-fill engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default 2-D interpolation method for horizontal reprojection.
    pub interpolation: InterpolationMethod,

    /// Poisson fill: fraction of a stddev below which a cell is converged.
    pub relax_crit: f64,
    /// Poisson fill: correction coefficient applied to undefined interior cells.
    pub corr_eff: f64,
    /// Poisson fill: maximum relaxation iterations.
    pub max_loop: usize,
    /// Poisson fill: iterations between convergence checks (spec §9 Open
    /// Question — exposed rather than hard-wired).
    pub convergence_check_stride: usize,

    /// Creeping-average fill: max updates per cell.
    pub creep_repeat: u16,
    /// Creeping-average fill: weight retained by originally-defined cells.
    pub creep_set_weight: f64,

    /// Whether the horizontal reprojector and hole fillers may use `rayon`.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::Bilinear,
            relax_crit: 0.5,
            corr_eff: 1.0,
            max_loop: 500,
            convergence_check_stride: 10,
            creep_repeat: 3,
            creep_set_weight: 5.0,
            parallel: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from `GRIDENGINE_*` environment variables,
    /// falling back to [`Default`] for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GRIDENGINE_INTERPOLATION") {
            config.interpolation = InterpolationMethod::from_str(&val);
        }
        if let Ok(val) = std::env::var("GRIDENGINE_RELAX_CRIT") {
            if let Ok(v) = val.parse() {
                config.relax_crit = v;
            }
        }
        if let Ok(val) = std::env::var("GRIDENGINE_CORR_EFF") {
            if let Ok(v) = val.parse() {
                config.corr_eff = v;
            }
        }
        if let Ok(val) = std::env::var("GRIDENGINE_MAX_LOOP") {
            if let Ok(v) = val.parse() {
                config.max_loop = v;
            }
        }
        if let Ok(val) = std::env::var("GRIDENGINE_CONVERGENCE_CHECK_STRIDE") {
            if let Ok(v) = val.parse() {
                config.convergence_check_stride = v;
            }
        }
        if let Ok(val) = std::env::var("GRIDENGINE_CREEP_REPEAT") {
            if let Ok(v) = val.parse() {
                config.creep_repeat = v;
            }
        }
        if let Ok(val) = std::env::var("GRIDENGINE_CREEP_SET_WEIGHT") {
            if let Ok(v) = val.parse() {
                config.creep_set_weight = v;
            }
        }
        if let Ok(val) = std::env::var("GRIDENGINE_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_loop == 0 {
            return Err("max_loop must be > 0".to_string());
        }
        if self.convergence_check_stride == 0 {
            return Err("convergence_check_stride must be > 0".to_string());
        }
        Ok(())
    }
}

/// Interpolation method as a config/attribute value, with string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationMethod {
    Nearest,
    Bilinear,
    Bicubic,
}

impl InterpolationMethod {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "nearest" => Self::Nearest,
            "bicubic" => Self::Bicubic,
            _ => Self::Bilinear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<InterpolationMethod> for InterpolationMethod2d {
    fn from(m: InterpolationMethod) -> Self {
        match m {
            InterpolationMethod::Nearest => InterpolationMethod2d::Nearest,
            InterpolationMethod::Bilinear => InterpolationMethod2d::Bilinear,
            InterpolationMethod::Bicubic => InterpolationMethod2d::Bicubic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn interpolation_from_str_defaults_to_bilinear() {
        assert_eq!(InterpolationMethod::from_str("bogus"), InterpolationMethod::Bilinear);
        assert_eq!(InterpolationMethod::from_str("NEAREST"), InterpolationMethod::Nearest);
    }
}
