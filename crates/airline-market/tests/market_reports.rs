use airline_market::market::popularity::{HIGH_VALUE_MIN_PRICE, HIGH_VALUE_MIN_SEARCHES};
use airline_market::market::{
    market_overview, BusinessOpportunitiesReport, City, DemandLevel, InsightKind, MarketError,
    MarketSimulator, PriceTrendReport, RouteReport,
};
use chrono::{Duration, NaiveDate};

fn travel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 20).expect("valid travel date")
}

fn report_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid report date")
}

#[test]
fn same_seed_replays_every_report_byte_for_byte() {
    let render = |seed: u64| {
        let mut simulator = MarketSimulator::seeded(seed);
        let route = RouteReport::generate(&mut simulator, City::Sydney, City::Cairns, travel_date())
            .expect("valid route");
        let trend = PriceTrendReport::generate(&mut simulator, 30, report_day())
            .expect("valid window");
        let overview = market_overview(&mut simulator);
        let opportunities = BusinessOpportunitiesReport::generate(&mut simulator);

        [
            serde_json::to_string(&route).expect("route serializes"),
            serde_json::to_string(&trend).expect("trend serializes"),
            serde_json::to_string(&overview).expect("overview serializes"),
            serde_json::to_string(&opportunities).expect("opportunities serialize"),
        ]
    };

    assert_eq!(render(2024), render(2024));
    assert_ne!(render(2024)[0], render(2025)[0]);
}

#[test]
fn route_reports_hold_price_invariants_across_seeds() {
    for seed in 0..200 {
        let mut simulator = MarketSimulator::seeded(seed);
        let report =
            RouteReport::generate(&mut simulator, City::Hobart, City::Melbourne, travel_date())
                .expect("valid route");
        let snapshot = &report.snapshot;

        assert!(f64::from(snapshot.min_price()) <= snapshot.avg_price());
        assert!(snapshot.avg_price() <= f64::from(snapshot.max_price()));
        assert!((3..=9).contains(&snapshot.total_flights()));
        assert_eq!(snapshot.total_flights(), snapshot.flights().len());
        assert!((4..=5).contains(&report.insights.len()));

        match snapshot.demand_level() {
            DemandLevel::High => assert!(report
                .insights
                .iter()
                .any(|insight| insight.kind == InsightKind::DemandAlert)),
            DemandLevel::Low => assert!(report
                .insights
                .iter()
                .any(|insight| insight.kind == InsightKind::PricingOpportunity)),
            DemandLevel::Medium => {}
        }
    }
}

#[test]
fn same_city_routes_are_rejected_up_front() {
    let mut simulator = MarketSimulator::seeded(9);
    let err = RouteReport::generate(&mut simulator, City::Sydney, City::Sydney, travel_date())
        .expect_err("same city must fail");
    assert_eq!(err, MarketError::InvalidRoute { city: City::Sydney });

    // rejection consumes no randomness
    let mut fresh = MarketSimulator::seeded(9);
    let after_error = RouteReport::generate(&mut simulator, City::Perth, City::Darwin, travel_date())
        .expect("valid route");
    let untouched = RouteReport::generate(&mut fresh, City::Perth, City::Darwin, travel_date())
        .expect("valid route");
    assert_eq!(after_error, untouched);
}

#[test]
fn trend_report_covers_inclusive_window() {
    let mut simulator = MarketSimulator::seeded(77);
    let report = PriceTrendReport::generate(&mut simulator, 30, report_day()).expect("valid window");

    assert_eq!(report.points.len(), 31 * 4);
    assert_eq!(report.start, report_day() - Duration::days(30));
    assert_eq!(report.end, report_day());
    assert!(report
        .points
        .windows(2)
        .all(|pair| pair[0].date <= pair[1].date));
    assert_eq!(report.summary.routes.len(), 4);
    assert!(report.summary.routes.iter().all(|stats| stats.points == 31));
}

#[test]
fn trend_report_rejects_non_positive_days() {
    for days in [0, -30] {
        let mut simulator = MarketSimulator::seeded(1);
        let err = PriceTrendReport::generate(&mut simulator, days, report_day())
            .expect_err("days must be positive");
        assert!(matches!(err, MarketError::InvalidParameter { name: "days", .. }));
    }
}

#[test]
fn overview_totals_match_the_popularity_table() {
    let mut simulator = MarketSimulator::seeded(31);
    let overview = market_overview(&mut simulator);

    assert_eq!(overview.routes.len(), 12);
    assert_eq!(overview.top_routes.len(), 10);
    let searches: u64 = overview
        .routes
        .iter()
        .map(|route| u64::from(route.weekly_searches))
        .sum();
    assert_eq!(overview.total_weekly_searches, searches);
    assert_eq!(
        overview
            .demand_trends
            .iter()
            .map(|count| count.routes)
            .sum::<usize>(),
        12
    );
    assert!(overview
        .top_routes
        .windows(2)
        .all(|pair| pair[0].weekly_searches >= pair[1].weekly_searches));
}

#[test]
fn opportunities_respect_thresholds_and_table_order() {
    for seed in 0..50 {
        let mut simulator = MarketSimulator::seeded(seed);
        let table = simulator.route_popularity();

        let mut replay = MarketSimulator::seeded(seed);
        let report = BusinessOpportunitiesReport::generate(&mut replay);

        let expected: Vec<&str> = table
            .iter()
            .filter(|row| {
                row.weekly_searches > HIGH_VALUE_MIN_SEARCHES && row.avg_price > HIGH_VALUE_MIN_PRICE
            })
            .map(|row| row.route.as_str())
            .collect();
        let actual: Vec<&str> = report
            .opportunities
            .iter()
            .map(|opportunity| opportunity.route.as_str())
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(report.seasonal_strategies.len(), 2);
        assert_eq!(report.revenue_tips.len(), 5);
    }
}
