use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Lookback window for trend data.
///
/// The wire form is the string the trends API expects (`today 12-m`);
/// the short form (`12m`) is accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "today 1-m")]
    OneMonth,
    #[serde(rename = "today 3-m")]
    ThreeMonths,
    #[serde(rename = "today 12-m")]
    TwelveMonths,
    #[serde(rename = "today 5-y")]
    FiveYears,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::TwelveMonths,
        Timeframe::FiveYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "today 1-m",
            Timeframe::ThreeMonths => "today 3-m",
            Timeframe::TwelveMonths => "today 12-m",
            Timeframe::FiveYears => "today 5-y",
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1m",
            Timeframe::ThreeMonths => "3m",
            Timeframe::TwelveMonths => "12m",
            Timeframe::FiveYears => "5y",
        }
    }

    /// Label shown in the timeframe selector.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::TwelveMonths => "12 Months",
            Timeframe::FiveYears => "5 Years",
        }
    }

    /// Next option in selector order, wrapping around.
    pub fn next(&self) -> Timeframe {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Timeframe {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::TwelveMonths
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == trimmed || t.short().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownTimeframe(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_and_short_forms() {
        assert_eq!("today 3-m".parse::<Timeframe>(), Ok(Timeframe::ThreeMonths));
        assert_eq!("5Y".parse::<Timeframe>(), Ok(Timeframe::FiveYears));
        assert_eq!(" 12m ".parse::<Timeframe>(), Ok(Timeframe::TwelveMonths));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "today 7-d".parse::<Timeframe>().unwrap_err();
        assert_eq!(err, Error::UnknownTimeframe("today 7-d".to_string()));
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let json = serde_json::to_string(&Timeframe::OneMonth).unwrap();
        assert_eq!(json, "\"today 1-m\"");

        let back: Timeframe = serde_json::from_str("\"today 5-y\"").unwrap();
        assert_eq!(back, Timeframe::FiveYears);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Timeframe::FiveYears.next(), Timeframe::OneMonth);
        assert_eq!(Timeframe::OneMonth.previous(), Timeframe::FiveYears);
        assert_eq!(Timeframe::default(), Timeframe::TwelveMonths);
    }
}
