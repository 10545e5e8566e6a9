use super::domain::{City, MarketError};
use super::popularity::{generate_route_popularity, RoutePopularity};
use super::snapshot::{generate_route_snapshot, RouteSnapshot};
use super::source::{self, MarketRng};
use super::trend::{generate_price_trend, PriceTrendPoint};
use chrono::NaiveDate;
use tracing::debug;

/// Owns the random stream for one report request.
#[derive(Debug, Clone)]
pub struct MarketSimulator {
    rng: MarketRng,
}

impl MarketSimulator {
    pub fn new(rng: MarketRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(source::seeded(seed))
    }

    pub fn for_request(seed: Option<u64>) -> Self {
        Self::new(source::for_request(seed))
    }

    pub fn route_snapshot(
        &mut self,
        origin: City,
        destination: City,
        date: NaiveDate,
    ) -> Result<RouteSnapshot, MarketError> {
        let snapshot = generate_route_snapshot(&mut self.rng, origin, destination, date)?;
        debug!(
            route = snapshot.route(),
            listings = snapshot.total_flights(),
            demand = snapshot.demand_level().label(),
            "generated route snapshot"
        );
        Ok(snapshot)
    }

    pub fn route_popularity(&mut self) -> Vec<RoutePopularity> {
        generate_route_popularity(&mut self.rng)
    }

    pub fn price_trend(
        &mut self,
        days: i64,
        today: NaiveDate,
    ) -> Result<Vec<PriceTrendPoint>, MarketError> {
        let points = generate_price_trend(&mut self.rng, days, today)?;
        debug!(days, points = points.len(), "generated price trend");
        Ok(points)
    }
}
