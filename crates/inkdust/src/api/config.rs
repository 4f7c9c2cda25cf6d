use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::phrases::PhraseSet;

/// Complete engine configuration. Every field has a default, so a JSON
/// document only needs to name the values it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkConfig {
    pub pointer: PointerConfig,
    pub particle: ParticleConfig,
    pub text: TextConfig,
    pub stage: StageConfig,
}

/// The pointer's interaction disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Collision radius around the pointer, in pixels.
    pub radius: f32,
    /// Draw the interaction disc on the particle surface.
    pub visible: bool,
    /// CSS colour of the disc when `visible`.
    pub color: String,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            radius: 75.0,
            visible: false,
            color: "black".into(),
        }
    }
}

/// Particle appearance and animation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Smallest resting radius (inclusive).
    pub min_radius: f32,
    /// Largest resting radius (exclusive).
    pub max_radius: f32,
    /// Sampling stride in pixels; one particle per `density`×`density` cell of ink.
    pub density: u32,
    /// Maximum per-axis offset of a particle's starting position from its anchor.
    pub random_spread: f32,
    /// CSS colour of every particle.
    pub color: String,
    /// Milliseconds for a particle to settle on its anchor.
    pub fade_in_duration: f64,
    /// Upper bound of the random fade-in delay; the lower bound is half of it.
    pub fade_in_delay: f64,
    /// Milliseconds for a repelled particle to fade away.
    pub fade_out_duration: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            min_radius: 0.8,
            max_radius: 1.75,
            density: 5,
            random_spread: 500.0,
            color: "black".into(),
            fade_in_duration: 3000.0,
            fade_in_delay: 500.0,
            fade_out_duration: 1500.0,
        }
    }
}

/// How phrases are rasterized for sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Font size in pixels.
    pub font_size: f32,
    pub font_family: String,
    /// CSS weight keyword prefixed to the font string, e.g. "Bold".
    pub font_weight: String,
    /// Extra pixels between stacked lines on top of `font_size`.
    pub line_gap: f32,
    pub phrases: PhraseSet,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: 75.0,
            font_family: "Arial".into(),
            font_weight: "Bold".into(),
            line_gap: 5.0,
            phrases: PhraseSet::default(),
        }
    }
}

impl TextConfig {
    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.font_size + self.line_gap
    }

    /// CSS font shorthand, e.g. `Bold 75px Arial`.
    pub fn css_font(&self) -> String {
        if self.font_weight.is_empty() {
            format!("{}px {}", self.font_size, self.font_family)
        } else {
            format!("{} {}px {}", self.font_weight, self.font_size, self.font_family)
        }
    }
}

/// Frame pacing and randomness for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Target frames per second; faster host ticks are skipped.
    pub fps: f64,
    /// Seed for every random choice in the field. Unset means the host picks
    /// one; headless runs fall back to [`DEFAULT_SEED`].
    pub seed: Option<u64>,
}

/// Seed used when neither the configuration nor the host supplies one.
pub const DEFAULT_SEED: u64 = 42;

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            seed: None,
        }
    }
}

impl StageConfig {
    /// The configured seed, or `fallback()` when none was set.
    pub fn seed_or_else(&self, fallback: impl FnOnce() -> u64) -> u64 {
        self.seed.unwrap_or_else(fallback)
    }
}

impl InkConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        let p = &self.particle;
        if p.min_radius < 0.0 || p.max_radius < 0.0 {
            return Err(invalid("particle radii must be non-negative"));
        }
        if p.min_radius > p.max_radius {
            return Err(invalid(format!(
                "particle.min_radius ({}) exceeds particle.max_radius ({})",
                p.min_radius, p.max_radius
            )));
        }
        if p.density == 0 {
            return Err(invalid("particle.density must be at least 1"));
        }
        if p.random_spread < 0.0 {
            return Err(invalid("particle.random_spread must be non-negative"));
        }
        if p.fade_in_duration <= 0.0 || p.fade_out_duration <= 0.0 {
            return Err(invalid("fade durations must be positive"));
        }
        if p.fade_in_delay < 0.0 {
            return Err(invalid("particle.fade_in_delay must be non-negative"));
        }
        if self.pointer.radius < 0.0 {
            return Err(invalid("pointer.radius must be non-negative"));
        }
        if self.text.font_size <= 0.0 {
            return Err(invalid("text.font_size must be positive"));
        }
        if self.stage.fps <= 0.0 {
            return Err(invalid("stage.fps must be positive"));
        }
        self.text.phrases.validate()
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidConfig(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        InkConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "particle": { "density": 4, "fade_out_duration": 900 },
            "stage": { "seed": 7 }
        }"#;
        let config = InkConfig::from_json(json).unwrap();
        assert_eq!(config.particle.density, 4);
        assert_eq!(config.particle.fade_out_duration, 900.0);
        assert_eq!(config.particle.max_radius, 1.75);
        assert_eq!(config.pointer.radius, 75.0);
        assert_eq!(config.stage.seed, Some(7));
        assert_eq!(config.text.phrases.len(), 9);
    }

    #[test]
    fn custom_phrases_replace_the_defaults() {
        let json = r#"{ "text": { "phrases": [["hi"]] } }"#;
        let config = InkConfig::from_json(json).unwrap();
        assert_eq!(config.text.phrases.len(), 1);
    }

    #[test]
    fn inverted_radii_are_rejected() {
        let json = r#"{ "particle": { "min_radius": 3.0, "max_radius": 1.0 } }"#;
        let err = InkConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn zero_density_is_rejected() {
        let mut config = InkConfig::default();
        config.particle.density = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(InkConfig::from_json("{"), Err(Error::Config(_))));
    }

    #[test]
    fn configured_seed_wins_over_fallback() {
        let config = InkConfig::from_json(r#"{ "stage": { "seed": 7 } }"#).unwrap();
        assert_eq!(config.stage.seed_or_else(|| panic!("fallback used")), 7);

        let config = InkConfig::from_json("{}").unwrap();
        assert_eq!(config.stage.seed, None);
        assert_eq!(config.stage.seed_or_else(|| 1234), 1234);
    }

    #[test]
    fn css_font_string() {
        let text = TextConfig::default();
        assert_eq!(text.css_font(), "Bold 75px Arial");
        assert_eq!(text.line_height(), 80.0);
    }
}
