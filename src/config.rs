// config.rs - Tunables for the backdrop, progress bar and marquee
//
// Every struct deserializes with defaults, so the host only has to send the
// fields it wants to change.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub starfield: StarFieldConfig,
    pub scroll: SpringConfig,
    pub marquee: MarqueeConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.starfield.validate()?;
        self.scroll.validate()?;
        self.marquee.validate()
    }
}

/// Particle backdrop. Angles in radians, rates in radians per second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    pub radius: f32,
    pub spin_x: f32,
    pub spin_y: f32,
    pub tilt: f32,
    pub point_size: f32,
    pub opacity: f32,
    pub camera_z: f32,
    pub fov_deg: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 5000,
            radius: 1.5,
            spin_x: 1.0 / 10.0,
            spin_y: 1.0 / 15.0,
            tilt: std::f32::consts::FRAC_PI_4,
            point_size: 0.002,
            opacity: 0.5,
            camera_z: 1.0,
            fov_deg: 75.0,
        }
    }
}

impl StarFieldConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(EngineError::config(format!(
                "starfield radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        for (name, v) in [
            ("spin_x", self.spin_x),
            ("spin_y", self.spin_y),
            ("tilt", self.tilt),
            ("camera_z", self.camera_z),
        ] {
            if !v.is_finite() {
                return Err(EngineError::config(format!("starfield {name} must be finite")));
            }
        }
        if !self.point_size.is_finite() || self.point_size < 0.0 {
            return Err(EngineError::config("starfield point_size must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(EngineError::config(format!(
                "starfield opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(EngineError::config(format!(
                "starfield fov_deg must be in (0, 180), got {}",
                self.fov_deg
            )));
        }
        Ok(())
    }
}

/// Damped spring used to smooth scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(EngineError::config("spring stiffness must be finite and > 0"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(EngineError::config("spring mass must be finite and > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(EngineError::config("spring damping must be finite and >= 0"));
        }
        if !(self.rest_delta.is_finite() && self.rest_delta >= 0.0)
            || !(self.rest_speed.is_finite() && self.rest_speed >= 0.0)
        {
            return Err(EngineError::config("spring rest thresholds must be finite and >= 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub duration_secs: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self { duration_secs: 40.0 }
    }
}

impl MarqueeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(EngineError::config("marquee duration_secs must be finite and > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "starfield": { "count": 100 } }"#).unwrap();
        assert_eq!(cfg.starfield.count, 100);
        assert_eq!(cfg.starfield.radius, 1.5);
        assert_eq!(cfg.scroll, SpringConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn rejects_bad_radius() {
        let err = StarFieldConfig::from_json(r#"{ "radius": -1.0 }"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn rejects_opacity_out_of_range() {
        let cfg = StarFieldConfig { opacity: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_stiffness() {
        let err = SpringConfig::from_json(r#"{ "stiffness": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("stiffness"));
    }

    #[test]
    fn rejects_negative_damping() {
        let cfg = SpringConfig { damping: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_marquee_duration() {
        let cfg = MarqueeConfig { duration_secs: 0.0 };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn marquee_from_json() {
        assert_eq!(MarqueeConfig::from_json(r#"{ "duration_secs": 20 }"#).unwrap().duration_secs, 20.0);
        assert!(MarqueeConfig::from_json(r#"{ "duration_secs": -1 }"#).is_err());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            EngineConfig::from_json("{ starfield"),
            Err(EngineError::Parse(_))
        ));
    }
}
