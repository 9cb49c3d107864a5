//! Data-driven game balance
//!
//! Every gameplay number that is a balance choice rather than a structural
//! invariant lives here, so a host can retune the game from a JSON file
//! without a rebuild. Defaults reproduce the shipped game.

use serde::{Deserialize, Serialize};

/// Gameplay balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    /// Minimum interval between fruit launches (ms)
    pub fire_interval_ms: f32,
    /// Fraction of world width (centered) fruits launch from
    pub launch_band: f32,
    /// Launch speed floor; actual speed is max(uniform(0, world height), floor)
    pub launch_speed_floor: f32,
    /// Starting display angle range, +/- degrees
    pub start_angle_max_deg: f32,
    /// Angular acceleration range, +/- units per second squared
    pub angular_accel_max: f32,
    /// Fruit bounding size as a fraction of min(world width, world height)
    pub fruit_size_frac: f32,

    // === Physics ===
    /// Downward gravity applied to airborne fruit (units per second squared)
    pub gravity_y: f32,

    // === Slicing ===
    /// Maximum distance from live pointer to fruit center for a slice to count
    pub slice_max_dist: f32,
    /// Score threshold the host may treat as a win
    pub score_to_win: u32,

    // === Burst effect ===
    /// Particles emitted per slice
    pub burst_count: u32,
    /// Particle lifetime (ms)
    pub burst_lifetime_ms: f32,
    /// Vertical particle speed range, +/- units per second
    pub burst_y_speed: f32,
    /// Particle scale range
    pub burst_scale_min: f32,
    pub burst_scale_max: f32,
    /// Gravity applied to burst particles
    pub burst_gravity_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            // Spawning
            fire_interval_ms: 1400.0,
            launch_band: 0.6,
            launch_speed_floor: 500.0,
            start_angle_max_deg: 10.0,
            angular_accel_max: 50.0,
            fruit_size_frac: 0.25,

            // Physics
            gravity_y: 300.0,

            // Slicing
            slice_max_dist: 110.0,
            score_to_win: 10,

            // Burst
            burst_count: 4,
            burst_lifetime_ms: 2000.0,
            burst_y_speed: 400.0,
            burst_scale_min: 0.15,
            burst_scale_max: 0.3,
            burst_gravity_y: 300.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a tuning override from a JSON file
    pub fn from_json_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let t = Tuning::default();
        assert_eq!(t.fire_interval_ms, 1400.0);
        assert_eq!(t.slice_max_dist, 110.0);
        assert_eq!(t.score_to_win, 10);
        assert_eq!(t.burst_count, 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{"fire_interval_ms": 900.0}"#).unwrap();
        assert_eq!(t.fire_interval_ms, 900.0);
        assert_eq!(t.launch_speed_floor, 500.0);
    }

    #[test]
    fn test_roundtrip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.score_to_win, t.score_to_win);
        assert_eq!(back.burst_lifetime_ms, t.burst_lifetime_ms);
    }
}
