use super::super::domain::DemandLevel;
use super::super::snapshot::RouteSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    DemandAlert,
    PremiumPricing,
    StableMarket,
    BalancedPricing,
    PricingOpportunity,
    MarketingOpportunity,
    FlightAvailability,
    PeakTimes,
    SellOutWarning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub headline: &'static str,
    pub detail: String,
}

impl Insight {
    fn new(kind: InsightKind, headline: &'static str, detail: String) -> Self {
        Self {
            kind,
            headline,
            detail,
        }
    }

    pub fn to_markdown(&self) -> String {
        format!("- **{}**: {}", self.headline, self.detail)
    }
}

pub fn summarize_snapshot(snapshot: &RouteSnapshot) -> Vec<Insight> {
    let route = snapshot.route();
    let mut insights = Vec::with_capacity(5);

    match snapshot.demand_level() {
        DemandLevel::High => {
            insights.push(Insight::new(
                InsightKind::DemandAlert,
                "High Demand Alert",
                format!("{route} shows strong booking activity"),
            ));
            insights.push(Insight::new(
                InsightKind::PremiumPricing,
                "Pricing Opportunity",
                format!(
                    "Average price ${:.0} indicates premium market",
                    snapshot.avg_price()
                ),
            ));
        }
        DemandLevel::Medium => {
            insights.push(Insight::new(
                InsightKind::StableMarket,
                "Stable Market",
                format!("{route} has moderate demand patterns"),
            ));
            insights.push(Insight::new(
                InsightKind::BalancedPricing,
                "Balanced Pricing",
                format!(
                    "Price range ${}-${} shows competitive market",
                    snapshot.min_price(),
                    snapshot.max_price()
                ),
            ));
        }
        DemandLevel::Low => {
            insights.push(Insight::new(
                InsightKind::PricingOpportunity,
                "Lower Demand",
                format!("{route} may have capacity for promotional pricing"),
            ));
            insights.push(Insight::new(
                InsightKind::MarketingOpportunity,
                "Opportunity",
                "Consider targeting this route for hostel marketing".to_string(),
            ));
        }
    }

    insights.push(Insight::new(
        InsightKind::FlightAvailability,
        "Flight Availability",
        format!("{} flights available", snapshot.total_flights()),
    ));
    insights.push(Insight::new(
        InsightKind::PeakTimes,
        "Peak Times",
        format!(
            "Best booking windows are {}",
            snapshot.peak_times().join(", ")
        ),
    ));

    let sold_out = snapshot.sold_out_count();
    if sold_out * 2 >= snapshot.total_flights() {
        insights.push(Insight::new(
            InsightKind::SellOutWarning,
            "Sell-Out Warning",
            format!(
                "{} of {} listings are sold out",
                sold_out,
                snapshot.total_flights()
            ),
        ));
    }

    insights
}

pub fn insights_to_markdown(insights: &[Insight]) -> String {
    insights
        .iter()
        .map(Insight::to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::domain::{AircraftType, Airline, Availability, City};
    use crate::market::snapshot::FlightListing;
    use chrono::NaiveDate;

    fn listing(price: u32, availability: Availability) -> FlightListing {
        FlightListing {
            airline: Airline::Jetstar,
            price,
            departure_time: "08:30".to_string(),
            duration_minutes: 95,
            aircraft: AircraftType::AirbusA320,
            availability,
        }
    }

    fn snapshot(demand: DemandLevel, sold_out: usize) -> RouteSnapshot {
        let mut flights = vec![
            listing(220, Availability::Available),
            listing(260, Availability::Limited),
            listing(300, Availability::Available),
            listing(340, Availability::Available),
        ];
        for flight in flights.iter_mut().take(sold_out) {
            flight.availability = Availability::SoldOut;
        }
        RouteSnapshot::from_listings(
            City::Sydney,
            City::Cairns,
            NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date"),
            flights,
            demand,
        )
        .expect("valid snapshot")
    }

    #[test]
    fn high_demand_raises_demand_alert() {
        let insights = summarize_snapshot(&snapshot(DemandLevel::High, 0));
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0].kind, InsightKind::DemandAlert);
        assert!(insights[0].detail.contains("Sydney → Cairns"));
        assert!(insights[1].detail.contains("$280"));
    }

    #[test]
    fn medium_demand_reports_price_range() {
        let insights = summarize_snapshot(&snapshot(DemandLevel::Medium, 0));
        assert!(insights
            .iter()
            .any(|insight| insight.kind == InsightKind::BalancedPricing
                && insight.detail.contains("$220-$340")));
    }

    #[test]
    fn low_demand_flags_pricing_opportunity() {
        let insights = summarize_snapshot(&snapshot(DemandLevel::Low, 1));
        assert_eq!(insights.len(), 4);
        assert!(insights
            .iter()
            .any(|insight| insight.kind == InsightKind::PricingOpportunity));
        assert!(insights
            .iter()
            .all(|insight| insight.kind != InsightKind::DemandAlert));
    }

    #[test]
    fn mostly_sold_out_routes_get_a_fifth_bullet() {
        let insights = summarize_snapshot(&snapshot(DemandLevel::Medium, 2));
        assert_eq!(insights.len(), 5);
        assert_eq!(insights[4].kind, InsightKind::SellOutWarning);
        assert_eq!(insights[4].detail, "2 of 4 listings are sold out");
    }

    #[test]
    fn markdown_lists_every_bullet() {
        let insights = summarize_snapshot(&snapshot(DemandLevel::High, 0));
        let markdown = insights_to_markdown(&insights);
        assert_eq!(markdown.lines().count(), 4);
        assert!(markdown.starts_with("- **High Demand Alert**: "));
        assert!(markdown.contains("08:00-10:00, 17:00-19:00, 12:00-14:00"));
    }
}
