use super::domain::MarketError;
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use std::f64::consts::PI;

pub const DEFAULT_TREND_DAYS: i64 = 30;
pub const MAX_TREND_DAYS: i64 = 365;

const SEASONAL_AMPLITUDE: f64 = 0.2;
const WEEKLY_AMPLITUDE: f64 = 0.1;
const NOISE_BAND: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrendRoute {
    #[serde(rename = "Sydney-Melbourne")]
    SydneyMelbourne,
    #[serde(rename = "Sydney-Brisbane")]
    SydneyBrisbane,
    #[serde(rename = "Melbourne-Brisbane")]
    MelbourneBrisbane,
    #[serde(rename = "Sydney-Perth")]
    SydneyPerth,
}

impl TrendRoute {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SydneyMelbourne,
            Self::SydneyBrisbane,
            Self::MelbourneBrisbane,
            Self::SydneyPerth,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SydneyMelbourne => "Sydney-Melbourne",
            Self::SydneyBrisbane => "Sydney-Brisbane",
            Self::MelbourneBrisbane => "Melbourne-Brisbane",
            Self::SydneyPerth => "Sydney-Perth",
        }
    }

    pub const fn base_price(self) -> f64 {
        match self {
            Self::SydneyMelbourne => 300.0,
            Self::SydneyBrisbane => 350.0,
            Self::MelbourneBrisbane => 280.0,
            Self::SydneyPerth => 450.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTrendPoint {
    pub date: NaiveDate,
    pub route: TrendRoute,
    pub price: f64,
    pub demand_score: u32,
    pub bookings: u32,
}

/// `1 + 0.2·sin(2π·day/365)` with a 1-based day of year.
pub fn seasonal_factor(date: NaiveDate) -> f64 {
    1.0 + SEASONAL_AMPLITUDE * (2.0 * PI * f64::from(date.ordinal()) / 365.0).sin()
}

/// `1 + 0.1·sin(2π·weekday/7)` with Monday as weekday 0.
pub fn weekly_factor(date: NaiveDate) -> f64 {
    let weekday = date.weekday().num_days_from_monday();
    1.0 + WEEKLY_AMPLITUDE * (2.0 * PI * f64::from(weekday) / 7.0).sin()
}

pub fn validate_trend_days(days: i64) -> Result<(), MarketError> {
    if days <= 0 {
        return Err(MarketError::InvalidParameter {
            name: "days",
            reason: format!("must be positive, got {days}"),
        });
    }
    if days > MAX_TREND_DAYS {
        return Err(MarketError::InvalidParameter {
            name: "days",
            reason: format!("must be at most {MAX_TREND_DAYS}, got {days}"),
        });
    }
    Ok(())
}

/// Daily series over `[today - days, today]` for every trend route, ordered by
/// date and then by the fixed route order.
pub fn generate_price_trend<R: Rng + ?Sized>(
    rng: &mut R,
    days: i64,
    today: NaiveDate,
) -> Result<Vec<PriceTrendPoint>, MarketError> {
    validate_trend_days(days)?;

    let start = today - Duration::days(days);
    let mut points = Vec::with_capacity((days as usize + 1) * TrendRoute::ordered().len());

    for date in start.iter_days().take_while(|date| *date <= today) {
        let shape = seasonal_factor(date) * weekly_factor(date);
        for route in TrendRoute::ordered() {
            let noise = 1.0 + rng.gen_range(-NOISE_BAND..=NOISE_BAND);
            let price = route.base_price() * shape * noise;

            points.push(PriceTrendPoint {
                date,
                route,
                price: (price * 100.0).round() / 100.0,
                demand_score: rng.gen_range(60..=100),
                bookings: rng.gen_range(100..=1000),
            });
        }
    }

    Ok(points)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteTrendStats {
    pub route: TrendRoute,
    pub points: usize,
    pub mean_price: f64,
    pub volatility: f64,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub routes: Vec<RouteTrendStats>,
    pub most_expensive: Vec<TrendRoute>,
    pub most_volatile: Vec<TrendRoute>,
}

impl TrendSummary {
    pub fn stats_for(&self, route: TrendRoute) -> Option<&RouteTrendStats> {
        self.routes.iter().find(|stats| stats.route == route)
    }
}

/// Per-route mean and sample standard deviation, with rankings by mean price
/// and by volatility (both descending).
pub fn summarize_trend(points: &[PriceTrendPoint]) -> TrendSummary {
    let mut prices: HashMap<TrendRoute, Vec<f64>> = HashMap::new();
    for point in points {
        prices.entry(point.route).or_default().push(point.price);
    }

    let routes: Vec<RouteTrendStats> = TrendRoute::ordered()
        .into_iter()
        .filter_map(|route| {
            prices
                .get(&route)
                .map(|series| route_stats(route, series))
        })
        .collect();

    let mut most_expensive: Vec<&RouteTrendStats> = routes.iter().collect();
    most_expensive.sort_by(|a, b| b.mean_price.total_cmp(&a.mean_price));
    let mut most_volatile: Vec<&RouteTrendStats> = routes.iter().collect();
    most_volatile.sort_by(|a, b| b.volatility.total_cmp(&a.volatility));

    TrendSummary {
        most_expensive: most_expensive.iter().map(|stats| stats.route).collect(),
        most_volatile: most_volatile.iter().map(|stats| stats.route).collect(),
        routes,
    }
}

fn route_stats(route: TrendRoute, series: &[f64]) -> RouteTrendStats {
    let count = series.len();
    let mean = series.iter().sum::<f64>() / count as f64;
    let volatility = if count > 1 {
        let squared: f64 = series.iter().map(|price| (price - mean).powi(2)).sum();
        (squared / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    RouteTrendStats {
        route,
        points: count,
        mean_price: mean,
        volatility,
        min_price: series.iter().copied().fold(f64::INFINITY, f64::min),
        max_price: series.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}
