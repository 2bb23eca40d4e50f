//! Run configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

/// Configuration for one reconstruction run, read from a TOML file.
///
/// ```toml
/// participant = "sub-01"
/// annotation_base = "/data/annotations"
/// segments = ["L1", "L2", "L3", "L4", "L5", "S1", "S2"]
/// radii = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Participant identifier; also names the annotation subdirectory.
    pub participant: String,
    /// Root directory of all annotation exports.
    pub annotation_base: PathBuf,
    /// Where the STL outputs land.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Target nerve-root segments, in anatomical order.
    pub segments: Vec<String>,
    /// Tube radius per segment (mm), shared by the left and right roots.
    pub radii: Vec<f64>,
    /// Resampled point count per smoothed nerve line.
    #[serde(default = "default_n_interpolate")]
    pub n_interpolate: usize,
    /// Spline smoothing factor (0 interpolates exactly).
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// Ring samples per annotated loop point.
    #[serde(default = "default_samples_per_point")]
    pub samples_per_point: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

const fn default_n_interpolate() -> usize {
    100
}

const fn default_smoothing() -> f64 {
    10.0
}

const fn default_samples_per_point() -> usize {
    1
}

impl Config {
    /// Read and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable, not valid TOML, or inconsistent
    /// (see [`validate`](Self::validate)).
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    ///
    /// # Errors
    ///
    /// Fails when the segment list is empty, the radius list does not pair
    /// up with it, a radius is not positive, or the sampling knobs are
    /// out of range.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.segments.is_empty() {
            bail!("config lists no target segments");
        }
        if self.radii.len() != self.segments.len() {
            bail!(
                "config lists {} radii for {} segments; the lists must pair up",
                self.radii.len(),
                self.segments.len()
            );
        }
        if let Some(r) = self.radii.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            bail!("tube radius {r} is not a positive length");
        }
        if self.n_interpolate < 2 {
            bail!("n_interpolate must be at least 2, got {}", self.n_interpolate);
        }
        if self.smoothing < 0.0 || !self.smoothing.is_finite() {
            bail!("smoothing factor {} is not a non-negative real", self.smoothing);
        }
        if self.samples_per_point == 0 {
            bail!("samples_per_point must be at least 1");
        }
        Ok(())
    }

    /// Output path for one exported surface: `output/{participant}_{label}.stl`.
    #[must_use]
    pub fn output_path(&self, label: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{label}.stl", self.participant))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn minimal_toml() -> String {
        r#"
            participant = "sub-01"
            annotation_base = "/data/annotations"
            segments = ["L1", "L2"]
            radii = [0.5, 0.6]
        "#
        .to_string()
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let config: Config = toml::from_str(&minimal_toml()).expect("parse");
        config.validate().expect("valid");

        assert_eq!(config.n_interpolate, 100);
        assert!((config.smoothing - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.samples_per_point, 1);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn output_path_pattern() {
        let config: Config = toml::from_str(&minimal_toml()).expect("parse");
        assert_eq!(
            config.output_path("Cord"),
            PathBuf::from("output/sub-01_Cord.stl")
        );
        assert_eq!(
            config.output_path("Nerveroots"),
            PathBuf::from("output/sub-01_Nerveroots.stl")
        );
    }

    #[test]
    fn mismatched_radii_are_rejected() {
        let text = r#"
            participant = "sub-01"
            annotation_base = "/data"
            segments = ["L1", "L2", "L3"]
            radii = [0.5]
        "#;
        let config: Config = toml::from_str(text).expect("parse");
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let text = r#"
            participant = "sub-01"
            annotation_base = "/data"
            segments = ["L1"]
            radii = [0.0]
        "#;
        let config: Config = toml::from_str(text).expect("parse");
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let text = format!("{}\nunknown_knob = 3\n", minimal_toml());
        assert!(toml::from_str::<Config>(&text).is_err());
    }

    #[test]
    fn empty_segments_are_rejected() {
        let text = r#"
            participant = "sub-01"
            annotation_base = "/data"
            segments = []
            radii = []
        "#;
        let config: Config = toml::from_str(text).expect("parse");
        assert!(config.validate().is_err());
    }
}
