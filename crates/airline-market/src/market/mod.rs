pub mod domain;
pub mod export;
pub mod popularity;
pub mod render;
pub mod report;
mod simulator;
pub mod snapshot;
pub mod source;
pub mod trend;

pub use domain::{
    AircraftType, Airline, Availability, City, DemandLevel, DemandTrend, MarketError, PeakSeason,
};
pub use popularity::{HighValueOpportunity, RoutePopularity};
pub use render::{Renderer, TextRenderer};
pub use report::{
    market_overview, BusinessOpportunitiesReport, Insight, InsightKind, MarketOverview,
    PriceTrendReport, ReportKind, RouteReport,
};
pub use simulator::MarketSimulator;
pub use snapshot::{FlightListing, RouteSnapshot};
pub use trend::{PriceTrendPoint, TrendRoute, TrendSummary};
