// config.rs - Tunables for both effects
//
// Defaults reproduce the shipped look. The host may override any subset
// with a JSON object; missing keys keep their default.

use serde::Deserialize;

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    /// Pointer distance inside which particles are pushed away.
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    /// Fraction of the offset from rest recovered per frame is 1/return_divisor.
    pub return_divisor: f32,
    pub link_distance: f32,
    pub pointer_link_distance: f32,
    pub glow_blur: f32,
    pub accents: [u32; 2],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            repulsion_radius: 200.0,
            repulsion_strength: 5.0,
            return_divisor: 20.0,
            link_distance: 150.0,
            pointer_link_distance: 200.0,
            glow_blur: 15.0,
            accents: [0x00f2ff, 0xbd00ff],
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would send particles to NaN or off to infinity.
    ///
    /// A divisor below 1 overshoots the rest point every frame, so the
    /// return would oscillate instead of settling.
    pub fn validate(&self) -> Result<()> {
        check(self.repulsion_radius.is_finite() && self.repulsion_radius > 0.0, "repulsion_radius must be positive")?;
        check(self.repulsion_strength.is_finite() && self.repulsion_strength >= 0.0, "repulsion_strength must not be negative")?;
        check(self.return_divisor.is_finite() && self.return_divisor >= 1.0, "return_divisor must be at least 1")?;
        check(self.link_distance.is_finite() && self.link_distance >= 0.0, "link_distance must not be negative")?;
        check(
            self.pointer_link_distance.is_finite() && self.pointer_link_distance >= 0.0,
            "pointer_link_distance must not be negative",
        )?;
        check(self.glow_blur.is_finite() && self.glow_blur >= 0.0, "glow_blur must not be negative")?;
        check(self.accents.iter().all(|c| *c <= 0xffffff), "accents must be 0xRRGGBB colors")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub star_count: usize,
    pub nebula_count: usize,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 5000,
            nebula_count: 200,
            walk_speed: 2.0,
            run_speed: 5.0,
            damping_factor: 0.05,
            min_distance: 10.0,
            max_distance: 2000.0,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        check(self.walk_speed.is_finite() && self.walk_speed >= 0.0, "walk_speed must not be negative")?;
        check(self.run_speed.is_finite() && self.run_speed >= 0.0, "run_speed must not be negative")?;
        check(
            self.damping_factor.is_finite() && self.damping_factor > 0.0 && self.damping_factor <= 1.0,
            "damping_factor must be in (0, 1]",
        )?;
        check(self.min_distance.is_finite() && self.min_distance > 0.0, "min_distance must be positive")?;
        check(
            self.max_distance.is_finite() && self.max_distance >= self.min_distance,
            "max_distance must not be below min_distance",
        )
    }
}

fn check(ok: bool, msg: &str) -> Result<()> {
    if ok { Ok(()) } else { Err(EngineError::Config(msg.to_owned())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = FieldConfig::from_json(r#"{ "count": 12 }"#).unwrap();
        assert_eq!(cfg.count, 12);
        assert_eq!(cfg.repulsion_radius, 200.0);

        let cfg = SceneConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SceneConfig::from_json("{ star_count: ").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn inverted_distance_range_is_rejected() {
        let err = SceneConfig::from_json(r#"{ "min_distance": 3000 }"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(err.to_string().contains("max_distance"));

        let cfg = SceneConfig { damping_factor: 0.0, ..SceneConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SceneConfig { run_speed: f32::NAN, ..SceneConfig::default() };
        assert!(cfg.validate().is_err());
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn degenerate_field_tunables_are_rejected() {
        for json in [
            r#"{ "return_divisor": 0 }"#,
            r#"{ "return_divisor": 0.5 }"#,
            r#"{ "repulsion_radius": 0 }"#,
            r#"{ "link_distance": -1 }"#,
            r#"{ "accents": [16777216, 0] }"#,
        ] {
            let err = FieldConfig::from_json(json).unwrap_err();
            assert!(matches!(err, EngineError::Config(_)), "{json}");
        }
        assert!(FieldConfig::from_json(r#"{ "count": -3 }"#).is_err());
        assert!(FieldConfig::from_json(r#"{ "return_divisor": 1 }"#).is_ok());
    }
}
