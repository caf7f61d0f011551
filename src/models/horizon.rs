use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lookback window selected in the dashboard's time horizon dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Horizon {
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "ALL")]
    All,
}

impl Horizon {
    /// Selector order.
    pub const ALL: [Horizon; 6] = [
        Horizon::OneMonth,
        Horizon::ThreeMonths,
        Horizon::SixMonths,
        Horizon::OneYear,
        Horizon::FiveYears,
        Horizon::All,
    ];

    /// Calendar months to look back, `None` for the whole history.
    pub fn months(&self) -> Option<u32> {
        match self {
            Horizon::OneMonth => Some(1),
            Horizon::ThreeMonths => Some(3),
            Horizon::SixMonths => Some(6),
            Horizon::OneYear => Some(12),
            Horizon::FiveYears => Some(60),
            Horizon::All => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Horizon::OneMonth => "1M",
            Horizon::ThreeMonths => "3M",
            Horizon::SixMonths => "6M",
            Horizon::OneYear => "1Y",
            Horizon::FiveYears => "5Y",
            Horizon::All => "ALL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Horizon::OneMonth => "1 Month",
            Horizon::ThreeMonths => "3 Months",
            Horizon::SixMonths => "6 Months",
            Horizon::OneYear => "1 Year",
            Horizon::FiveYears => "5 Years",
            Horizon::All => "All",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Horizon {
    type Err = String;

    /// Accepts the short code ("3M") or the selector label ("3 Months"), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Horizon::ALL
            .iter()
            .copied()
            .find(|h| h.code().eq_ignore_ascii_case(wanted) || h.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown horizon: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonOption {
    pub code: &'static str,
    pub label: &'static str,
}

impl From<Horizon> for HorizonOption {
    fn from(h: Horizon) -> Self {
        Self {
            code: h.code(),
            label: h.label(),
        }
    }
}
