use super::domain::{AircraftType, Airline, Availability, City, DemandLevel, MarketError};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

pub const MIN_LISTINGS: usize = 3;
pub const MAX_LISTINGS: usize = 9;

pub const PEAK_TIME_WINDOWS: [&str; 3] = ["08:00-10:00", "17:00-19:00", "12:00-14:00"];

const DEPARTURE_MINUTES: [u32; 4] = [0, 15, 30, 45];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightListing {
    pub airline: Airline,
    pub price: u32,
    pub departure_time: String,
    pub duration_minutes: u32,
    pub aircraft: AircraftType,
    pub availability: Availability,
}

impl FlightListing {
    pub fn duration_label(&self) -> String {
        format!(
            "{}h {}m",
            self.duration_minutes / 60,
            self.duration_minutes % 60
        )
    }
}

/// Priced listings for one route on one day.
///
/// The aggregates are always derived from `flights`; the only way to build a
/// snapshot is through [`RouteSnapshot::from_listings`] or the generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSnapshot {
    origin: City,
    destination: City,
    route: String,
    date: NaiveDate,
    flights: Vec<FlightListing>,
    avg_price: f64,
    min_price: u32,
    max_price: u32,
    total_flights: usize,
    demand_level: DemandLevel,
    peak_times: Vec<&'static str>,
}

impl RouteSnapshot {
    pub fn from_listings(
        origin: City,
        destination: City,
        date: NaiveDate,
        flights: Vec<FlightListing>,
        demand_level: DemandLevel,
    ) -> Result<Self, MarketError> {
        ensure_distinct(origin, destination)?;
        if flights.is_empty() {
            return Err(MarketError::InvalidParameter {
                name: "flights",
                reason: "a snapshot needs at least one listing".to_string(),
            });
        }

        let total: u64 = flights.iter().map(|flight| u64::from(flight.price)).sum();
        let avg_price = total as f64 / flights.len() as f64;
        let min_price = flights.iter().map(|flight| flight.price).min().unwrap_or(0);
        let max_price = flights.iter().map(|flight| flight.price).max().unwrap_or(0);

        Ok(Self {
            origin,
            destination,
            route: route_label(origin, destination),
            date,
            total_flights: flights.len(),
            flights,
            avg_price,
            min_price,
            max_price,
            demand_level,
            peak_times: PEAK_TIME_WINDOWS.to_vec(),
        })
    }

    pub fn origin(&self) -> City {
        self.origin
    }

    pub fn destination(&self) -> City {
        self.destination
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn flights(&self) -> &[FlightListing] {
        &self.flights
    }

    pub fn avg_price(&self) -> f64 {
        self.avg_price
    }

    pub fn min_price(&self) -> u32 {
        self.min_price
    }

    pub fn max_price(&self) -> u32 {
        self.max_price
    }

    pub fn total_flights(&self) -> usize {
        self.total_flights
    }

    pub fn demand_level(&self) -> DemandLevel {
        self.demand_level
    }

    pub fn peak_times(&self) -> &[&'static str] {
        &self.peak_times
    }

    pub fn sold_out_count(&self) -> usize {
        self.flights
            .iter()
            .filter(|flight| flight.availability == Availability::SoldOut)
            .count()
    }
}

pub fn route_label(origin: City, destination: City) -> String {
    format!("{} → {}", origin.label(), destination.label())
}

pub(crate) fn ensure_distinct(origin: City, destination: City) -> Result<(), MarketError> {
    if origin == destination {
        return Err(MarketError::InvalidRoute { city: origin });
    }
    Ok(())
}

pub(crate) fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Draws a fresh set of listings for the route.
///
/// Demand level is drawn on its own and is not correlated with the prices.
pub fn generate_route_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    origin: City,
    destination: City,
    date: NaiveDate,
) -> Result<RouteSnapshot, MarketError> {
    ensure_distinct(origin, destination)?;

    let listing_count = rng.gen_range(MIN_LISTINGS..=MAX_LISTINGS);
    let base_price: i64 = rng.gen_range(150..=800);

    let flights = (0..listing_count)
        .map(|_| generate_listing(rng, base_price))
        .collect();
    let demand_level = pick(rng, &DemandLevel::ordered());

    RouteSnapshot::from_listings(origin, destination, date, flights, demand_level)
}

fn generate_listing<R: Rng + ?Sized>(rng: &mut R, base_price: i64) -> FlightListing {
    let airline = pick(rng, &Airline::ordered());
    let price = (base_price + rng.gen_range(-50..=200)).max(1) as u32;
    let hour: u32 = rng.gen_range(6..=22);
    let minute = pick(rng, &DEPARTURE_MINUTES);
    let duration_minutes = rng.gen_range(1..=8u32) * 60 + rng.gen_range(0..=59u32);
    let aircraft = pick(rng, &AircraftType::ordered());
    let availability = pick(rng, &Availability::WEIGHTED);

    FlightListing {
        airline,
        price,
        departure_time: format!("{hour:02}:{minute:02}"),
        duration_minutes,
        aircraft,
        availability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::source;

    fn travel_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 19).expect("valid travel date")
    }

    #[test]
    fn aggregates_follow_listings() {
        for seed in 0..64 {
            let mut rng = source::seeded(seed);
            let snapshot =
                generate_route_snapshot(&mut rng, City::Sydney, City::Perth, travel_date())
                    .expect("distinct cities");

            let prices: Vec<f64> = snapshot
                .flights()
                .iter()
                .map(|flight| f64::from(flight.price))
                .collect();
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;

            assert!((snapshot.avg_price() - mean).abs() < 1e-9);
            assert!(f64::from(snapshot.min_price()) <= snapshot.avg_price());
            assert!(snapshot.avg_price() <= f64::from(snapshot.max_price()));
            assert_eq!(snapshot.total_flights(), snapshot.flights().len());
            assert!((MIN_LISTINGS..=MAX_LISTINGS).contains(&snapshot.total_flights()));
        }
    }

    #[test]
    fn listings_stay_within_generation_ranges() {
        let mut rng = source::seeded(7);
        let snapshot =
            generate_route_snapshot(&mut rng, City::Melbourne, City::Hobart, travel_date())
                .expect("distinct cities");

        for flight in snapshot.flights() {
            assert!((100..=1000).contains(&flight.price));
            assert!((60..=8 * 60 + 59).contains(&flight.duration_minutes));
            let (hour, minute) = flight
                .departure_time
                .split_once(':')
                .expect("HH:MM departure");
            let hour: u32 = hour.parse().expect("numeric hour");
            assert!((6..=22).contains(&hour));
            assert!(["00", "15", "30", "45"].contains(&minute));
        }
        assert_eq!(snapshot.peak_times(), PEAK_TIME_WINDOWS);
        assert_eq!(snapshot.route(), "Melbourne → Hobart");
    }

    #[test]
    fn same_city_route_is_rejected() {
        let mut rng = source::seeded(1);
        let err = generate_route_snapshot(&mut rng, City::Sydney, City::Sydney, travel_date())
            .expect_err("same city must fail");
        assert_eq!(err, MarketError::InvalidRoute { city: City::Sydney });
    }

    #[test]
    fn duration_label_splits_hours_and_minutes() {
        let flight = FlightListing {
            airline: Airline::Qantas,
            price: 320,
            departure_time: "06:15".to_string(),
            duration_minutes: 125,
            aircraft: AircraftType::Boeing737,
            availability: Availability::Limited,
        };
        assert_eq!(flight.duration_label(), "2h 5m");
    }
}
