use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// Selection unit of the range picker.
///
/// `Custom` means the bounds were entered by hand and are never re-derived.
/// Every other variant names the calendar unit used for unit selection and
/// stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRangeMode {
    #[default]
    Custom,
    Day,
    Week,
    Month,
    Year,
}

impl TimeRangeMode {
    /// Selector order: custom first, then units from shortest to longest.
    pub const ALL: [TimeRangeMode; 5] = [
        TimeRangeMode::Custom,
        TimeRangeMode::Day,
        TimeRangeMode::Week,
        TimeRangeMode::Month,
        TimeRangeMode::Year,
    ];

    /// Wire name, as stored under the mode field of a form snapshot.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Default (English) display label for the unit selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    #[must_use]
    pub fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Position in [`TimeRangeMode::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Custom => 0,
            Self::Day => 1,
            Self::Week => 2,
            Self::Month => 3,
            Self::Year => 4,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for TimeRangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRangeMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| PickerError::UnknownMode(s.to_owned()))
    }
}

/// Endpoint of a range touched by a direct field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    From,
    To,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for mode in TimeRangeMode::ALL {
            assert_eq!(mode.as_str().parse::<TimeRangeMode>().expect("parse"), mode);
            assert_eq!(TimeRangeMode::from_index(mode.index()), Some(mode));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "Week".parse::<TimeRangeMode>().expect_err("case sensitive");
        assert!(matches!(err, PickerError::UnknownMode(name) if name == "Week"));
        assert!("fortnight".parse::<TimeRangeMode>().is_err());
        assert!(TimeRangeMode::from_index(5).is_none());
    }
}
