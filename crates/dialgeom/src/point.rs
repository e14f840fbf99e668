use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotation in degrees. 0° points along +x and angles grow clockwise on screen.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, From, Into, Serialize, Deserialize,
)]
#[display("{_0}°")]
#[serde(transparent)]
pub struct Degrees(f64);

crate::impl_scalar_newtype!(Degrees);

impl Degrees {
    pub const ZERO: Self = Self(0.0);
    pub const HALF_TURN: Self = Self(180.0);

    /// Wraps into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self(self.0.rem_euclid(360.0))
    }

    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Shortest unsigned angular distance, in `[0, 180]`.
    pub fn distance_to(self, other: Self) -> f64 {
        let delta = (self.0 - other.0).rem_euclid(360.0);
        delta.min(360.0 - delta)
    }

    /// Truncates toward zero, the way a host toolkit hands an angle to integer consumers.
    pub fn truncated(self) -> i32 {
        self.0 as i32
    }

    pub fn rotated(self, by: f64) -> Self {
        Self(self.0 + by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_wraps_negative_and_full_turns() {
        assert_eq!(Degrees::new(-90.0).normalized(), Degrees::new(270.0));
        assert_eq!(Degrees::new(360.0).normalized(), Degrees::ZERO);
        assert_eq!(Degrees::new(725.0).normalized(), Degrees::new(5.0));
    }

    #[test]
    fn test_distance_to_takes_short_way_round() {
        assert_eq!(Degrees::new(350.0).distance_to(Degrees::new(10.0)), 20.0);
        assert_eq!(Degrees::new(0.0).distance_to(Degrees::HALF_TURN), 180.0);
        assert_eq!(Degrees::new(90.0).distance_to(Degrees::new(45.0)), 45.0);
    }

    #[test]
    fn test_truncated_drops_fraction() {
        assert_eq!(Degrees::new(89.99).truncated(), 89);
        assert_eq!(Degrees::new(0.4).truncated(), 0);
    }

    #[test]
    fn test_degrees_is_transparent_in_json() {
        let d: Degrees = serde_json::from_str("45.5").unwrap();
        assert_eq!(d.value(), 45.5);
        let p: Point = serde_json::from_str(r#"{"x": 1.0, "y": -2.0}"#).unwrap();
        assert_eq!(p, Point::new(1.0, -2.0));
    }
}
