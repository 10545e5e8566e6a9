use super::{AnalysisRequest, AnalystError};
use crate::market::City;
use serde::{Deserialize, Serialize};

const MARKET_TRENDS_INSTRUCTION: &str = "\
Analyze the following airline market data for Australian domestic flights and provide actionable insights.

Please provide:
1. Key market trends and patterns
2. Pricing recommendations
3. Demand forecasting insights
4. Strategic recommendations for hostel businesses
5. Seasonal patterns and opportunities

Format your response in clear, actionable bullet points.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBand {
    Budget,
    MidRange,
    Premium,
}

impl BudgetBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget ($100-300)",
            Self::MidRange => "Mid-range ($300-600)",
            Self::Premium => "Premium ($600+)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelFlexibility {
    FlexibleDates,
    SpecificDates,
    PeakSeason,
    OffPeakSeason,
}

impl TravelFlexibility {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FlexibleDates => "Flexible dates",
            Self::SpecificDates => "Specific dates",
            Self::PeakSeason => "Peak season",
            Self::OffPeakSeason => "Off-peak season",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelInterest {
    BusinessTravel,
    Tourism,
    Events,
    Leisure,
    Adventure,
}

impl TravelInterest {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessTravel => "Business travel",
            Self::Tourism => "Tourism",
            Self::Events => "Events",
            Self::Leisure => "Leisure",
            Self::Adventure => "Adventure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPreferences {
    pub origin: City,
    pub budget: BudgetBand,
    pub flexibility: TravelFlexibility,
    #[serde(default)]
    pub interests: Vec<TravelInterest>,
}

impl TravelPreferences {
    pub fn interests_label(&self) -> String {
        if self.interests.is_empty() {
            return "General travel".to_string();
        }
        self.interests
            .iter()
            .map(|interest| interest.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Wraps any generated record in the market-trend instruction. The record is
/// embedded as pretty-printed JSON so the same data always yields the same
/// prompt.
pub fn market_trends_request<T: Serialize + ?Sized>(
    record: &T,
) -> Result<AnalysisRequest, AnalystError> {
    let payload = serde_json::to_string_pretty(record)
        .map_err(|err| AnalystError::Serialization(err.to_string()))?;
    Ok(AnalysisRequest {
        instruction: MARKET_TRENDS_INSTRUCTION.to_string(),
        payload: Some(payload),
    })
}

pub fn route_recommendations_request(preferences: &TravelPreferences) -> AnalysisRequest {
    let instruction = format!(
        "Based on the following preferences for flights from {origin}:
Budget: {budget}
Travel dates: {dates}
Interests: {interests}

Provide recommendations for:
1. Most cost-effective routes
2. Best time to book
3. Alternative destinations
4. Seasonal considerations
5. Hostel business opportunities in recommended destinations

Focus on Australian domestic routes and provide specific, actionable advice.",
        origin = preferences.origin.label(),
        budget = preferences.budget.label(),
        dates = preferences.flexibility.label(),
        interests = preferences.interests_label(),
    );

    AnalysisRequest {
        instruction,
        payload: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{City, MarketSimulator, RouteReport};
    use chrono::NaiveDate;

    #[test]
    fn market_prompt_embeds_stable_json() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 8).expect("valid date");
        let snapshot = RouteReport::generate(
            &mut MarketSimulator::seeded(4),
            City::Adelaide,
            City::Canberra,
            date,
        )
        .expect("valid route")
        .snapshot;

        let first = market_trends_request(&snapshot).expect("serializes");
        let second = market_trends_request(&snapshot).expect("serializes");
        assert_eq!(first.prompt(), second.prompt());

        let prompt = first.prompt();
        assert!(prompt.contains("Route Data:"));
        assert!(prompt.contains("\"route\": \"Adelaide → Canberra\""));
        assert!(prompt.contains("Strategic recommendations for hostel businesses"));
    }

    #[test]
    fn recommendation_prompt_defaults_interests() {
        let request = route_recommendations_request(&TravelPreferences {
            origin: City::Perth,
            budget: BudgetBand::MidRange,
            flexibility: TravelFlexibility::OffPeakSeason,
            interests: Vec::new(),
        });

        let prompt = request.prompt();
        assert!(prompt.contains("flights from Perth:"));
        assert!(prompt.contains("Budget: Mid-range ($300-600)"));
        assert!(prompt.contains("Travel dates: Off-peak season"));
        assert!(prompt.contains("Interests: General travel"));
    }

    #[test]
    fn interests_join_in_declared_order() {
        let preferences = TravelPreferences {
            origin: City::Sydney,
            budget: BudgetBand::Budget,
            flexibility: TravelFlexibility::FlexibleDates,
            interests: vec![TravelInterest::Tourism, TravelInterest::Adventure],
        };
        assert_eq!(preferences.interests_label(), "Tourism, Adventure");
    }
}
