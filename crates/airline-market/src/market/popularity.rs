use super::domain::{City, DemandTrend, PeakSeason};
use super::snapshot::{pick, route_label};
use rand::Rng;
use serde::Serialize;

pub const HIGH_VALUE_MIN_SEARCHES: u32 = 20_000;
pub const HIGH_VALUE_MIN_PRICE: u32 = 400;

/// Routes tracked by the popularity table, in reporting order.
pub const TRACKED_ROUTES: [(City, City); 12] = [
    (City::Sydney, City::Melbourne),
    (City::Melbourne, City::Sydney),
    (City::Sydney, City::Brisbane),
    (City::Brisbane, City::Sydney),
    (City::Perth, City::Sydney),
    (City::Sydney, City::Perth),
    (City::Melbourne, City::Brisbane),
    (City::Brisbane, City::Melbourne),
    (City::Adelaide, City::Melbourne),
    (City::Melbourne, City::Adelaide),
    (City::Sydney, City::GoldCoast),
    (City::GoldCoast, City::Sydney),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePopularity {
    pub route: String,
    pub weekly_searches: u32,
    pub bookings: u32,
    pub avg_price: u32,
    pub demand_trend: DemandTrend,
    pub peak_season: PeakSeason,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighValueOpportunity {
    pub route: String,
    pub searches: u32,
    pub price: u32,
    pub trend: DemandTrend,
}

/// Samples every tracked route independently. The returned table keeps the
/// tracked route order.
pub fn generate_route_popularity<R: Rng + ?Sized>(rng: &mut R) -> Vec<RoutePopularity> {
    TRACKED_ROUTES
        .iter()
        .map(|(origin, destination)| {
            let weekly_searches = rng.gen_range(5_000..=50_000);
            let bookings = rng.gen_range(1_000..=10_000);
            let avg_price = rng.gen_range(200..=600);
            let demand_trend = pick(rng, &DemandTrend::ordered());
            let peak_season = pick(rng, &PeakSeason::ordered());
            let conversion_rate = (rng.gen_range(15.0..=35.0f64) * 10.0).round() / 10.0;

            RoutePopularity {
                route: route_label(*origin, *destination),
                weekly_searches,
                bookings,
                avg_price,
                demand_trend,
                peak_season,
                conversion_rate,
            }
        })
        .collect()
}

pub fn generate_high_value_opportunities(
    popularity: &[RoutePopularity],
) -> Vec<HighValueOpportunity> {
    popularity
        .iter()
        .filter(|entry| {
            entry.weekly_searches > HIGH_VALUE_MIN_SEARCHES && entry.avg_price > HIGH_VALUE_MIN_PRICE
        })
        .map(|entry| HighValueOpportunity {
            route: entry.route.clone(),
            searches: entry.weekly_searches,
            price: entry.avg_price,
            trend: entry.demand_trend,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::source;

    fn entry(route: &str, weekly_searches: u32, avg_price: u32) -> RoutePopularity {
        RoutePopularity {
            route: route.to_string(),
            weekly_searches,
            bookings: 2_000,
            avg_price,
            demand_trend: DemandTrend::Stable,
            peak_season: PeakSeason::YearRound,
            conversion_rate: 20.0,
        }
    }

    #[test]
    fn table_covers_tracked_routes_in_order() {
        let mut rng = source::seeded(11);
        let table = generate_route_popularity(&mut rng);

        assert_eq!(table.len(), 12);
        assert_eq!(table[0].route, "Sydney → Melbourne");
        assert_eq!(table[11].route, "Gold Coast → Sydney");
        for row in &table {
            assert!((5_000..=50_000).contains(&row.weekly_searches));
            assert!((1_000..=10_000).contains(&row.bookings));
            assert!((200..=600).contains(&row.avg_price));
            assert!((15.0..=35.0).contains(&row.conversion_rate));
            let tenths = row.conversion_rate * 10.0;
            assert!((tenths.round() - tenths).abs() < 1e-9);
        }
    }

    #[test]
    fn opportunities_require_both_thresholds() {
        let table = vec![
            entry("A", 20_001, 401),
            entry("B", 20_000, 500),
            entry("C", 45_000, 400),
            entry("D", 30_000, 599),
        ];

        let routes: Vec<String> = generate_high_value_opportunities(&table)
            .into_iter()
            .map(|opportunity| opportunity.route)
            .collect();
        assert_eq!(routes, vec!["A".to_string(), "D".to_string()]);
    }

    #[test]
    fn generated_opportunities_never_break_thresholds() {
        for seed in 0..32 {
            let mut rng = source::seeded(seed);
            let table = generate_route_popularity(&mut rng);
            for opportunity in generate_high_value_opportunities(&table) {
                assert!(opportunity.searches > HIGH_VALUE_MIN_SEARCHES);
                assert!(opportunity.price > HIGH_VALUE_MIN_PRICE);
            }
        }
    }
}
