use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Turns the pointer angle into the number the picker reports.
pub trait ValueMapper {
    fn value(&self, angle: i32) -> i32;
}

impl<F> ValueMapper for F
where
    F: Fn(i32) -> i32,
{
    fn value(&self, angle: i32) -> i32 {
        self(angle)
    }
}

/// Rotates a screen angle (0° = east, clockwise) so that 12 o'clock reads as 0.
pub fn clock_angle(angle: i32) -> i32 {
    (angle + 90).rem_euclid(360)
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    #[strum(to_string = "hour12", serialize = "h12", serialize = "hours")]
    Hour12,
    #[strum(to_string = "hour24", serialize = "h24")]
    Hour24,
    #[default]
    #[strum(to_string = "minute", serialize = "m", serialize = "minutes")]
    Minute,
}

impl PickerMode {
    pub fn range(&self) -> std::ops::RangeInclusive<i32> {
        match self {
            Self::Hour12 => 1..=12,
            Self::Hour24 => 0..=23,
            Self::Minute => 0..=59,
        }
    }
}

impl ValueMapper for PickerMode {
    fn value(&self, angle: i32) -> i32 {
        let clock = clock_angle(angle);
        match self {
            Self::Hour12 => match clock / 30 {
                0 => 12,
                h => h,
            },
            Self::Hour24 => clock / 15,
            Self::Minute => clock / 6,
        }
    }
}
