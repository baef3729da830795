use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Controlled cuisine vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cuisine {
    Filipino,
    American,
    Japanese,
    Korean,
    Indian,
    Thai,
    Chinese,
    Malaysian,
    Mediterranean,
    #[serde(rename = "Middle Eastern")]
    MiddleEastern,
    Italian,
    French,
    German,
    British,
    Spanish,
    African,
}

impl Cuisine {
    pub const ALL: [Cuisine; 16] = [
        Cuisine::Filipino,
        Cuisine::American,
        Cuisine::Japanese,
        Cuisine::Korean,
        Cuisine::Indian,
        Cuisine::Thai,
        Cuisine::Chinese,
        Cuisine::Malaysian,
        Cuisine::Mediterranean,
        Cuisine::MiddleEastern,
        Cuisine::Italian,
        Cuisine::French,
        Cuisine::German,
        Cuisine::British,
        Cuisine::Spanish,
        Cuisine::African,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Cuisine::Filipino => "Filipino",
            Cuisine::American => "American",
            Cuisine::Japanese => "Japanese",
            Cuisine::Korean => "Korean",
            Cuisine::Indian => "Indian",
            Cuisine::Thai => "Thai",
            Cuisine::Chinese => "Chinese",
            Cuisine::Malaysian => "Malaysian",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::MiddleEastern => "Middle Eastern",
            Cuisine::Italian => "Italian",
            Cuisine::French => "French",
            Cuisine::German => "German",
            Cuisine::British => "British",
            Cuisine::Spanish => "Spanish",
            Cuisine::African => "African",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cuisine {
    type Err = CoreError;

    /// Case-insensitive; inner whitespace is collapsed so `"middle  eastern"`
    /// still matches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.split_whitespace().collect::<Vec<_>>().join(" ");
        Cuisine::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CoreError::UnknownCuisine(s.trim().to_string()))
    }
}
