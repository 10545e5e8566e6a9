use super::super::domain::DemandTrend;
use super::super::popularity::RoutePopularity;
use serde::Serialize;

pub const DEFAULT_TOP_ROUTES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandTrendCount {
    pub trend: DemandTrend,
    pub trend_label: &'static str,
    pub routes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOverview {
    pub total_weekly_searches: u64,
    pub total_bookings: u64,
    pub avg_conversion_rate: f64,
    pub demand_trends: Vec<DemandTrendCount>,
    pub top_routes: Vec<RoutePopularity>,
    pub routes: Vec<RoutePopularity>,
}

impl MarketOverview {
    pub fn from_popularity(routes: Vec<RoutePopularity>, top_n: usize) -> Self {
        let total_weekly_searches = routes
            .iter()
            .map(|route| u64::from(route.weekly_searches))
            .sum();
        let total_bookings = routes.iter().map(|route| u64::from(route.bookings)).sum();
        let avg_conversion_rate = if routes.is_empty() {
            0.0
        } else {
            routes.iter().map(|route| route.conversion_rate).sum::<f64>() / routes.len() as f64
        };

        let demand_trends = DemandTrend::ordered()
            .into_iter()
            .map(|trend| DemandTrendCount {
                trend,
                trend_label: trend.label(),
                routes: routes
                    .iter()
                    .filter(|route| route.demand_trend == trend)
                    .count(),
            })
            .collect();

        // stable sort keeps table order for equal search volumes
        let mut top_routes = routes.clone();
        top_routes.sort_by(|a, b| b.weekly_searches.cmp(&a.weekly_searches));
        top_routes.truncate(top_n);

        Self {
            total_weekly_searches,
            total_bookings,
            avg_conversion_rate,
            demand_trends,
            top_routes,
            routes,
        }
    }
}
