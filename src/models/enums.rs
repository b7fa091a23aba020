use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(UnitOfTime {
    Hour => "Hour",
    Day => "Day",
    Week => "Week",
    Month => "Month",
    Year => "Year",
});

// The closed set of span labels an entity labeler may emit. Label strings
// outside this set fail FromStr so integration code has to skip them
// explicitly rather than fall through.
str_enum!(EntityLabel {
    Dosage => "Dosage",
    Drug => "Drug",
    Form => "Form",
    Frequency => "Frequency",
    Strength => "Strength",
    Duration => "Duration",
});
