//! Common domain type definitions
//!
//! Categorical values stored in the generated tables. Each enum is written to
//! and read from the flat files by its exact label (e.g. `"NC"`,
//! `"Two or More Races"`), which is the contract the dashboard relies on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EdSynthError, Result};

/// Declares a fieldless enum that round-trips through its string label
macro_rules! categorical_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "&'static str", try_from = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The label written to the flat files
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = EdSynthError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    other => Err(EdSynthError::validation(format!(
                        "Unknown {} value '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = EdSynthError;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }
    };
}

categorical_enum! {
    /// Recorded gender of a patient
    Gender {
        Male => "M",
        Female => "F",
        /// Not communicated
        NotCommunicated => "NC",
    }
}

categorical_enum! {
    /// Self-reported ethnicity, stored in the `race` column
    Race {
        White => "White",
        AfricanAmerican => "African American",
        TwoOrMoreRaces => "Two or More Races",
        DeclinedToIdentify => "Declined to Identify",
        Asian => "Asian",
        PacificIslander => "Pacific Islander",
        NativeAmerican => "Native American",
    }
}

categorical_enum! {
    /// Payer category of a visit
    InsuranceType {
        Private => "Private",
        Public => "Public",
        Uninsured => "None",
    }
}

categorical_enum! {
    /// How an ED visit ended
    Outcome {
        Admitted => "Admitted",
        Discharged => "Discharged",
        /// Left without being seen
        Lwbs => "LWBS",
    }
}

categorical_enum! {
    /// Staff role recorded on staff-hours rows
    StaffRole {
        Consultant => "Consultant",
        Registrar => "Registrar",
        MedicalOfficer => "Medical Officer",
        Nurse => "Nurse",
    }
}

impl StaffRole {
    /// Whether hours for this role count as doctor hours
    #[must_use]
    pub const fn is_doctor(self) -> bool {
        !matches!(self, Self::Nurse)
    }
}

/// Emergency Severity Index, 1 (most urgent) to 5 (least urgent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct EsiLevel(u8);

impl EsiLevel {
    pub const MOST_URGENT: Self = Self(1);
    pub const LEAST_URGENT: Self = Self(5);

    /// Create a level, rejecting values outside 1..=5
    pub fn new(level: u8) -> Result<Self> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(EdSynthError::validation(format!(
                "ESI level {level} outside 1..=5"
            )))
        }
    }

    /// Clamp an arbitrary integer into 1..=5
    #[must_use]
    pub fn clamped(level: i32) -> Self {
        Self(level.clamp(1, 5) as u8)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for EsiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ESI {}", self.0)
    }
}

impl From<EsiLevel> for u8 {
    fn from(value: EsiLevel) -> Self {
        value.0
    }
}

impl TryFrom<u8> for EsiLevel {
    type Error = EdSynthError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), *gender);
        }
        for race in Race::ALL {
            assert_eq!(race.as_str().parse::<Race>().unwrap(), *race);
        }
        assert_eq!(InsuranceType::Uninsured.as_str(), "None");
        assert_eq!(Outcome::Lwbs.to_string(), "LWBS");
        assert!("Unknown".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_esi_level_bounds() {
        assert!(EsiLevel::new(0).is_err());
        assert!(EsiLevel::new(6).is_err());
        assert_eq!(EsiLevel::new(3).unwrap().value(), 3);
        assert_eq!(EsiLevel::clamped(-4), EsiLevel::MOST_URGENT);
        assert_eq!(EsiLevel::clamped(9), EsiLevel::LEAST_URGENT);
    }

    #[test]
    fn test_doctor_roles() {
        assert!(StaffRole::Registrar.is_doctor());
        assert!(StaffRole::Consultant.is_doctor());
        assert!(!StaffRole::Nurse.is_doctor());
    }
}
