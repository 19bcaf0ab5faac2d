use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Get the category label shown next to the level (e.g., "Fruits")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Weekdays",
            Self::Medium => "Fruits",
            Self::Hard => "Car Brands",
        }
    }

    /// Fixed target words for this level. Always non-empty and uppercase.
    pub fn word_list(&self) -> &'static [&'static str] {
        match self {
            Self::Easy => &[
                "MONDAY",
                "TUESDAY",
                "WEDNESDAY",
                "THURSDAY",
                "FRIDAY",
                "SATURDAY",
                "SUNDAY",
            ],
            Self::Medium => &["APPLE", "MANGO", "GRAPE", "LEMON", "GUAVA"],
            Self::Hard => &["HONDA", "TOYOTA", "AUDI", "TESLA", "NISSAN"],
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
