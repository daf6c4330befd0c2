use crate::common::LookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occasion a look is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occasion {
    Everyday,
    Work,
    Date,
    Party,
    Wedding,
    NightOut,
    Brunch,
}

impl Occasion {
    pub const ALL: [Occasion; 7] = [
        Occasion::Everyday,
        Occasion::Work,
        Occasion::Date,
        Occasion::Party,
        Occasion::Wedding,
        Occasion::NightOut,
        Occasion::Brunch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Everyday => "everyday",
            Occasion::Work => "work",
            Occasion::Date => "date",
            Occasion::Party => "party",
            Occasion::Wedding => "wedding",
            Occasion::NightOut => "night-out",
            Occasion::Brunch => "brunch",
        }
    }
}

impl FromStr for Occasion {
    type Err = LookError;

    /// Case-insensitive; `night out` and `night_out` are accepted for `night-out`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Occasion::ALL
            .into_iter()
            .find(|occasion| occasion.as_str() == normalized)
            .ok_or_else(|| LookError::not_found("occasion", value))
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!(assert_ok!("Party".parse::<Occasion>()), Occasion::Party);
        assert_eq!(assert_ok!("night out".parse::<Occasion>()), Occasion::NightOut);
        assert_eq!(assert_ok!("NIGHT_OUT".parse::<Occasion>()), Occasion::NightOut);
    }

    #[test]
    fn test_unknown_occasion_is_not_found() {
        assert_matches!(
            "gala".parse::<Occasion>(),
            Err(LookError::NotFound { kind: "occasion", .. })
        );
    }

    #[test]
    fn test_serde_matches_display() {
        for occasion in Occasion::ALL {
            let json = serde_json::to_string(&occasion).unwrap();
            assert_eq!(json, format!("\"{occasion}\""));
        }
    }
}
