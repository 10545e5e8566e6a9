use crate::commands::{
    run_business_opportunities, run_market_overview, run_price_trends, run_recommendations,
    run_route_report,
};
use crate::server;
use airline_market::analyst::{BudgetBand, TravelFlexibility, TravelInterest, TravelPreferences};
use airline_market::error::AppError;
use airline_market::market::trend::DEFAULT_TREND_DAYS;
use airline_market::market::City;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Airline Market Pulse",
    about = "Generate synthetic Australian airline market reports or serve them over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Flight listings, price aggregates and insights for one route
    Route(RouteArgs),
    /// Seasonal price trend series for the tracked trunk routes
    Trends(TrendArgs),
    /// Popularity statistics across the twelve tracked routes
    Overview(ReportOptions),
    /// High-value routes plus the seasonal hostel playbook
    Opportunities(ReportOptions),
    /// Ask the market analyst for route recommendations
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct ReportOptions {
    /// Seed the generator for a reproducible report
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Append market analyst commentary to the report
    #[arg(long)]
    pub(crate) analyze: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RouteArgs {
    /// Departure city (name or IATA code)
    #[arg(long, value_parser = crate::infra::parse_city)]
    pub(crate) origin: City,
    /// Arrival city (name or IATA code)
    #[arg(long, value_parser = crate::infra::parse_city)]
    pub(crate) destination: City,
    /// Travel date (YYYY-MM-DD). Defaults to one week from today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) options: ReportOptions,
}

#[derive(Args, Debug)]
pub(crate) struct TrendArgs {
    /// Number of days to look back
    #[arg(long, default_value_t = DEFAULT_TREND_DAYS, allow_negative_numbers = true)]
    pub(crate) days: i64,
    /// Last day of the series (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Also write the series to a CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) options: ReportOptions,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Departure city (name or IATA code)
    #[arg(long, value_parser = crate::infra::parse_city)]
    pub(crate) origin: City,
    #[arg(long, value_enum, default_value_t = BudgetArg::MidRange)]
    pub(crate) budget: BudgetArg,
    #[arg(long, value_enum, default_value_t = FlexibilityArg::FlexibleDates)]
    pub(crate) flexibility: FlexibilityArg,
    /// Travel interests; repeat the flag for several
    #[arg(long = "interest", value_enum)]
    pub(crate) interests: Vec<InterestArg>,
    /// Print the recommendations as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    pub(crate) fn preferences(&self) -> TravelPreferences {
        TravelPreferences {
            origin: self.origin,
            budget: self.budget.into(),
            flexibility: self.flexibility.into(),
            interests: self.interests.iter().copied().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BudgetArg {
    Budget,
    MidRange,
    Premium,
}

impl From<BudgetArg> for BudgetBand {
    fn from(value: BudgetArg) -> Self {
        match value {
            BudgetArg::Budget => BudgetBand::Budget,
            BudgetArg::MidRange => BudgetBand::MidRange,
            BudgetArg::Premium => BudgetBand::Premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FlexibilityArg {
    FlexibleDates,
    SpecificDates,
    PeakSeason,
    OffPeakSeason,
}

impl From<FlexibilityArg> for TravelFlexibility {
    fn from(value: FlexibilityArg) -> Self {
        match value {
            FlexibilityArg::FlexibleDates => TravelFlexibility::FlexibleDates,
            FlexibilityArg::SpecificDates => TravelFlexibility::SpecificDates,
            FlexibilityArg::PeakSeason => TravelFlexibility::PeakSeason,
            FlexibilityArg::OffPeakSeason => TravelFlexibility::OffPeakSeason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum InterestArg {
    BusinessTravel,
    Tourism,
    Events,
    Leisure,
    Adventure,
}

impl From<InterestArg> for TravelInterest {
    fn from(value: InterestArg) -> Self {
        match value {
            InterestArg::BusinessTravel => TravelInterest::BusinessTravel,
            InterestArg::Tourism => TravelInterest::Tourism,
            InterestArg::Events => TravelInterest::Events,
            InterestArg::Leisure => TravelInterest::Leisure,
            InterestArg::Adventure => TravelInterest::Adventure,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Route(args) => run_route_report(args).await,
        Command::Trends(args) => run_price_trends(args).await,
        Command::Overview(options) => run_market_overview(options).await,
        Command::Opportunities(options) => run_business_opportunities(options).await,
        Command::Recommend(args) => run_recommendations(args).await,
    }
}
