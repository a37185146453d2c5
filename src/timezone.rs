//! Timezone selector: display labels and the offset identifiers the
//! sun-times API accepts.

use serde::Serialize;
use std::fmt;

/// One entry of the four-item timezone selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimezoneChoice {
    #[default]
    Utc8,
    Utc0,
    Est,
    Cet,
}

impl TimezoneChoice {
    /// Selector order.
    pub const ALL: [TimezoneChoice; 4] = [Self::Utc8, Self::Utc0, Self::Est, Self::Cet];

    pub fn label(self) -> &'static str {
        match self {
            Self::Utc8 => "UTC+8",
            Self::Utc0 => "UTC+0",
            Self::Est => "EST (UTC-5)",
            Self::Cet => "CET (UTC+1)",
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::Utc8 => "UTC+8",
            Self::Utc0 => "UTC+0",
            Self::Est => "UTC-5",
            Self::Cet => "UTC+1",
        }
    }

    /// Exact label match.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for TimezoneChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a selector label to its API identifier. Unknown labels fall back to
/// the default choice without complaint.
pub fn to_identifier(label: &str) -> &'static str {
    TimezoneChoice::from_label(label)
        .unwrap_or_default()
        .identifier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(to_identifier("UTC+8"), "UTC+8");
        assert_eq!(to_identifier("UTC+0"), "UTC+0");
        assert_eq!(to_identifier("EST (UTC-5)"), "UTC-5");
        assert_eq!(to_identifier("CET (UTC+1)"), "UTC+1");
    }

    #[test]
    fn test_unknown_falls_back_to_utc8() {
        for label in ["", "EST", "utc+0", "Europe/Oslo", "CET (UTC+1) ", "UTC-5"] {
            assert_eq!(to_identifier(label), "UTC+8", "label {:?}", label);
        }
    }

    #[test]
    fn test_selector_order_and_default() {
        let labels: Vec<_> = TimezoneChoice::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["UTC+8", "UTC+0", "EST (UTC-5)", "CET (UTC+1)"]);
        assert_eq!(TimezoneChoice::default(), TimezoneChoice::Utc8);
    }

    #[test]
    fn test_round_trip_through_label() {
        for choice in TimezoneChoice::ALL {
            assert_eq!(TimezoneChoice::from_label(&choice.to_string()), Some(choice));
        }
    }
}
