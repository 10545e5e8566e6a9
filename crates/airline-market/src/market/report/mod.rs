mod insights;
mod overview;
mod playbook;

pub use insights::{insights_to_markdown, summarize_snapshot, Insight, InsightKind};
pub use overview::{DemandTrendCount, MarketOverview, DEFAULT_TOP_ROUTES};
pub use playbook::{revenue_tips, seasonal_strategies, RevenueTip, SeasonalStrategy};

use super::domain::{City, MarketError};
use super::popularity::{generate_high_value_opportunities, HighValueOpportunity};
use super::simulator::MarketSimulator;
use super::snapshot::RouteSnapshot;
use super::trend::{summarize_trend, PriceTrendPoint, TrendSummary};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    RouteSnapshot,
    PriceTrend,
    MarketOverview,
    BusinessOpportunities,
}

impl ReportKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::RouteSnapshot => "Route Analysis",
            Self::PriceTrend => "Price Trends",
            Self::MarketOverview => "Market Overview",
            Self::BusinessOpportunities => "Business Insights",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub snapshot: RouteSnapshot,
    pub insights: Vec<Insight>,
}

impl RouteReport {
    pub fn generate(
        simulator: &mut MarketSimulator,
        origin: City,
        destination: City,
        date: NaiveDate,
    ) -> Result<Self, MarketError> {
        let snapshot = simulator.route_snapshot(origin, destination, date)?;
        let insights = summarize_snapshot(&snapshot);
        Ok(Self { snapshot, insights })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTrendReport {
    pub days: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub summary: TrendSummary,
    pub points: Vec<PriceTrendPoint>,
}

impl PriceTrendReport {
    pub fn generate(
        simulator: &mut MarketSimulator,
        days: i64,
        today: NaiveDate,
    ) -> Result<Self, MarketError> {
        let points = simulator.price_trend(days, today)?;
        let summary = summarize_trend(&points);
        Ok(Self {
            days,
            start: today - Duration::days(days),
            end: today,
            summary,
            points,
        })
    }
}

pub fn market_overview(simulator: &mut MarketSimulator) -> MarketOverview {
    MarketOverview::from_popularity(simulator.route_popularity(), DEFAULT_TOP_ROUTES)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessOpportunitiesReport {
    pub opportunities: Vec<HighValueOpportunity>,
    pub seasonal_strategies: Vec<SeasonalStrategy>,
    pub revenue_tips: Vec<RevenueTip>,
}

impl BusinessOpportunitiesReport {
    pub fn generate(simulator: &mut MarketSimulator) -> Self {
        let popularity = simulator.route_popularity();
        Self {
            opportunities: generate_high_value_opportunities(&popularity),
            seasonal_strategies: seasonal_strategies(),
            revenue_tips: revenue_tips(),
        }
    }
}
