use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Sydney,
    Melbourne,
    Brisbane,
    Perth,
    Adelaide,
    GoldCoast,
    Cairns,
    Darwin,
    Hobart,
    Canberra,
}

impl City {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Sydney,
            Self::Melbourne,
            Self::Brisbane,
            Self::Perth,
            Self::Adelaide,
            Self::GoldCoast,
            Self::Cairns,
            Self::Darwin,
            Self::Hobart,
            Self::Canberra,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sydney => "Sydney",
            Self::Melbourne => "Melbourne",
            Self::Brisbane => "Brisbane",
            Self::Perth => "Perth",
            Self::Adelaide => "Adelaide",
            Self::GoldCoast => "Gold Coast",
            Self::Cairns => "Cairns",
            Self::Darwin => "Darwin",
            Self::Hobart => "Hobart",
            Self::Canberra => "Canberra",
        }
    }

    pub const fn iata(self) -> &'static str {
        match self {
            Self::Sydney => "SYD",
            Self::Melbourne => "MEL",
            Self::Brisbane => "BNE",
            Self::Perth => "PER",
            Self::Adelaide => "ADL",
            Self::GoldCoast => "OOL",
            Self::Cairns => "CNS",
            Self::Darwin => "DRW",
            Self::Hobart => "HBA",
            Self::Canberra => "CBR",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for City {
    type Err = MarketError;

    /// Accepts a display name ("Gold Coast"), a snake_case key ("gold_coast")
    /// or an IATA code ("OOL"), ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().replace('_', " ");
        City::ordered()
            .into_iter()
            .find(|city| {
                city.label().eq_ignore_ascii_case(&wanted) || city.iata().eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| MarketError::UnknownCity(value.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Airline {
    Qantas,
    Jetstar,
    VirginAustralia,
    Tigerair,
    RexAirlines,
}

impl Airline {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Qantas,
            Self::Jetstar,
            Self::VirginAustralia,
            Self::Tigerair,
            Self::RexAirlines,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Qantas => "Qantas",
            Self::Jetstar => "Jetstar",
            Self::VirginAustralia => "Virgin Australia",
            Self::Tigerair => "Tigerair",
            Self::RexAirlines => "Rex Airlines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftType {
    Boeing737,
    AirbusA320,
    Boeing787,
    AirbusA330,
}

impl AircraftType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Boeing737,
            Self::AirbusA320,
            Self::Boeing787,
            Self::AirbusA330,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Boeing737 => "Boeing 737",
            Self::AirbusA320 => "Airbus A320",
            Self::Boeing787 => "Boeing 787",
            Self::AirbusA330 => "Airbus A330",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Limited,
    SoldOut,
}

impl Availability {
    /// Draw weights, three available seats for every limited or sold out one.
    pub(crate) const WEIGHTED: [Self; 5] = [
        Self::Available,
        Self::Available,
        Self::Available,
        Self::Limited,
        Self::SoldOut,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Limited => "Limited",
            Self::SoldOut => "Sold Out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandTrend {
    Increasing,
    Stable,
    Decreasing,
}

impl DemandTrend {
    pub const fn ordered() -> [Self; 3] {
        [Self::Increasing, Self::Stable, Self::Decreasing]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Stable => "Stable",
            Self::Decreasing => "Decreasing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeakSeason {
    Summer,
    Winter,
    YearRound,
}

impl PeakSeason {
    pub const fn ordered() -> [Self; 3] {
        [Self::Summer, Self::Winter, Self::YearRound]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::Winter => "Winter",
            Self::YearRound => "Year-round",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    InvalidRoute { city: City },
    InvalidParameter { name: &'static str, reason: String },
    UnknownCity(String),
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketError::InvalidRoute { city } => {
                write!(f, "origin and destination must differ (both were {})", city)
            }
            MarketError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            MarketError::UnknownCity(name) => write!(f, "unknown city '{}'", name),
        }
    }
}

impl std::error::Error for MarketError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cities_by_label_key_and_code() {
        assert_eq!("Gold Coast".parse::<City>(), Ok(City::GoldCoast));
        assert_eq!("gold_coast".parse::<City>(), Ok(City::GoldCoast));
        assert_eq!("ool".parse::<City>(), Ok(City::GoldCoast));
        assert_eq!(" sydney ".parse::<City>(), Ok(City::Sydney));
    }

    #[test]
    fn rejects_unknown_city() {
        let err = "Auckland".parse::<City>().expect_err("not an Australian city");
        assert_eq!(err, MarketError::UnknownCity("Auckland".to_string()));
    }

    #[test]
    fn availability_weights_favour_open_seats() {
        let available = Availability::WEIGHTED
            .iter()
            .filter(|status| **status == Availability::Available)
            .count();
        assert_eq!(available, 3);
        assert_eq!(Availability::WEIGHTED.len(), 5);
    }
}
