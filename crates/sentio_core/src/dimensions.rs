//! Valence / Arousal / Dominance affect space
//!
//! Every recognized state is a point in a 3D cube where each axis runs from
//! -1.0 to 1.0 and the origin is the neutral state:
//!
//! - **Valence**: negative ↔ positive tone
//! - **Arousal**: calm ↔ energized
//! - **Dominance**: powerless ↔ in control

use serde::{Deserialize, Deserializer, Serialize};

pub const DIMENSION_MIN: f32 = -1.0;
pub const DIMENSION_MAX: f32 = 1.0;
pub const DIMENSION_NEUTRAL: f32 = 0.0;

/// Clamp a raw axis value into the affect cube. NaN collapses to neutral.
#[inline]
pub fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        DIMENSION_NEUTRAL
    } else {
        value.clamp(DIMENSION_MIN, DIMENSION_MAX)
    }
}

/// Deserialize an f32, replacing non-finite input with neutral and clamping the rest.
pub fn deserialize_safe_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f32::deserialize(deserializer)?;
    if raw.is_finite() {
        Ok(clamp_axis(raw))
    } else {
        Ok(DIMENSION_NEUTRAL)
    }
}

/// A point in VAD space. Constructors always clamp, so a value of this type
/// is inside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionalDimensions {
    #[serde(deserialize_with = "deserialize_safe_f32")]
    pub valence: f32,
    #[serde(deserialize_with = "deserialize_safe_f32")]
    pub arousal: f32,
    #[serde(deserialize_with = "deserialize_safe_f32")]
    pub dominance: f32,
}

impl EmotionalDimensions {
    pub fn new(valence: f32, arousal: f32, dominance: f32) -> Self {
        Self {
            valence: clamp_axis(valence),
            arousal: clamp_axis(arousal),
            dominance: clamp_axis(dominance),
        }
    }

    pub fn neutral() -> Self {
        Self::default()
    }

    /// Euclidean distance from the origin, normalized by √3 into [0, 1].
    pub fn distance_from_neutral(&self) -> f32 {
        (self.valence * self.valence + self.arousal * self.arousal + self.dominance * self.dominance)
            .sqrt()
            / 3f32.sqrt()
    }

    /// Mean absolute axis value.
    pub fn signal_strength(&self) -> f32 {
        (self.valence.abs() + self.arousal.abs() + self.dominance.abs()) / 3.0
    }

    pub fn scale(&self, factor: f32) -> Self {
        Self::new(
            self.valence * factor,
            self.arousal * factor,
            self.dominance * factor,
        )
    }

    pub fn add(&self, other: &EmotionalDimensions) -> Self {
        Self::new(
            self.valence + other.valence,
            self.arousal + other.arousal,
            self.dominance + other.dominance,
        )
    }

    /// Component-wise mean of a set of points. Empty input yields neutral.
    pub fn mean<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a EmotionalDimensions>,
    {
        let (mut v, mut a, mut d, mut n) = (0.0f32, 0.0f32, 0.0f32, 0usize);
        for p in points {
            v += p.valence;
            a += p.arousal;
            d += p.dominance;
            n += 1;
        }
        if n == 0 {
            return Self::neutral();
        }
        let n = n as f32;
        Self::new(v / n, a / n, d / n)
    }

    pub fn is_neutral(&self) -> bool {
        self.valence == DIMENSION_NEUTRAL
            && self.arousal == DIMENSION_NEUTRAL
            && self.dominance == DIMENSION_NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_values() {
        let d = EmotionalDimensions::new(5.0, -3.0, 0.4);
        assert_eq!(d.valence, 1.0);
        assert_eq!(d.arousal, -1.0);
        assert!((d.dominance - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_nan_collapses_to_neutral() {
        let d = EmotionalDimensions::new(f32::NAN, 0.2, f32::NAN);
        assert_eq!(d.valence, 0.0);
        assert_eq!(d.dominance, 0.0);
    }

    #[test]
    fn test_distance_from_neutral_bounds() {
        assert_eq!(EmotionalDimensions::neutral().distance_from_neutral(), 0.0);
        let corner = EmotionalDimensions::new(1.0, -1.0, 1.0);
        assert!((corner.distance_from_neutral() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_signal_strength() {
        let d = EmotionalDimensions::new(0.3, -0.6, 0.0);
        assert!((d.signal_strength() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_add_and_scale_stay_in_range() {
        let a = EmotionalDimensions::new(0.9, 0.9, -0.9);
        let sum = a.add(&a);
        assert_eq!(sum, EmotionalDimensions::new(1.0, 1.0, -1.0));
        let half = a.scale(0.5);
        assert!((half.valence - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_mean_of_empty_is_neutral() {
        let empty: Vec<EmotionalDimensions> = Vec::new();
        assert!(EmotionalDimensions::mean(&empty).is_neutral());
    }

    #[test]
    fn test_mean() {
        let pts = [
            EmotionalDimensions::new(0.2, 0.4, -0.2),
            EmotionalDimensions::new(0.4, 0.0, 0.2),
        ];
        let m = EmotionalDimensions::mean(&pts);
        assert!((m.valence - 0.3).abs() < 1e-6);
        assert!((m.arousal - 0.2).abs() < 1e-6);
        assert!(m.dominance.abs() < 1e-6);
    }

    #[test]
    fn test_safe_f32_json_clamps() {
        let json = r#"{"valence": 3.5, "arousal": -0.25, "dominance": 0.0}"#;
        let d: EmotionalDimensions = serde_json::from_str(json).unwrap();
        assert_eq!(d.valence, 1.0);
        assert!((d.arousal + 0.25).abs() < 1e-6);
    }
}
