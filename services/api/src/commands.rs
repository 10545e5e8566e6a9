use crate::cli::{RecommendArgs, ReportOptions, RouteArgs, TrendArgs};
use crate::infra::{default_travel_date, simulate_latency};
use crate::routes::{AnalyzedReport, RecommendationResponse};
use airline_market::analyst::{
    self, narrate, narrate_record, route_recommendations_request, MarketAnalyst,
};
use airline_market::config::{AppConfig, MarketConfig};
use airline_market::error::AppError;
use airline_market::market::export::export_trend_csv;
use airline_market::market::{
    market_overview, BusinessOpportunitiesReport, MarketSimulator, PriceTrendReport, Renderer,
    ReportKind, RouteReport, TextRenderer,
};
use airline_market::telemetry::{self, LogSink};
use chrono::Local;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

/// Shared collaborators for one-shot report commands. Logs go to stderr so
/// stdout carries only the report.
pub(crate) struct ReportContext {
    analyst: Arc<dyn MarketAnalyst>,
    market: MarketConfig,
}

impl ReportContext {
    fn load() -> Result<Self, AppError> {
        let config = AppConfig::load()?;
        telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
        Ok(Self {
            analyst: analyst::from_config(&config.analyst),
            market: config.market,
        })
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

async fn analysis_for<T: Serialize + Sync>(
    context: &ReportContext,
    options: ReportOptions,
    record: &T,
) -> Option<String> {
    if options.analyze {
        Some(narrate_record(context.analyst.as_ref(), record).await)
    } else {
        None
    }
}

fn emit<T, F>(
    kind: ReportKind,
    options: ReportOptions,
    report: T,
    analysis: Option<String>,
    render: F,
) -> Result<(), AppError>
where
    T: Serialize,
    F: FnOnce(&mut TextRenderer<io::Stdout>, &T) -> io::Result<()>,
{
    if options.json {
        return print_json(&AnalyzedReport { report, analysis });
    }

    let mut renderer = TextRenderer::stdout();
    render(&mut renderer, &report)?;
    if let Some(text) = analysis {
        renderer.analysis(&format!("AI analysis: {}", kind.label()), &text)?;
    }
    Ok(())
}

pub(crate) async fn run_route_report(args: RouteArgs) -> Result<(), AppError> {
    let RouteArgs {
        origin,
        destination,
        date,
        options,
    } = args;

    let context = ReportContext::load()?;
    let date = date.unwrap_or_else(|| default_travel_date(Local::now().date_naive()));
    let mut simulator = MarketSimulator::for_request(options.seed);
    if origin != destination {
        simulate_latency(&context.market).await;
    }
    let report = RouteReport::generate(&mut simulator, origin, destination, date)?;
    info!(route = report.snapshot.route(), %date, "route report generated");

    let analysis = analysis_for(&context, options, &report.snapshot).await;
    emit(ReportKind::RouteSnapshot, options, report, analysis, |renderer, report| {
        renderer.route(report)
    })
}

pub(crate) async fn run_price_trends(args: TrendArgs) -> Result<(), AppError> {
    let TrendArgs {
        days,
        today,
        csv,
        options,
    } = args;

    let context = ReportContext::load()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut simulator = MarketSimulator::for_request(options.seed);
    let report = PriceTrendReport::generate(&mut simulator, days, today)?;

    if let Some(path) = csv {
        export_trend_csv(&path, &report.points)?;
        info!(path = %path.display(), rows = report.points.len(), "price trend exported");
    }

    let analysis = analysis_for(&context, options, &report.summary).await;
    emit(ReportKind::PriceTrend, options, report, analysis, |renderer, report| {
        renderer.price_trend(report)
    })
}

pub(crate) async fn run_market_overview(options: ReportOptions) -> Result<(), AppError> {
    let context = ReportContext::load()?;
    let mut simulator = MarketSimulator::for_request(options.seed);
    let overview = market_overview(&mut simulator);

    let analysis = analysis_for(&context, options, &overview.routes).await;
    emit(ReportKind::MarketOverview, options, overview, analysis, |renderer, overview| {
        renderer.market_overview(overview)
    })
}

pub(crate) async fn run_business_opportunities(options: ReportOptions) -> Result<(), AppError> {
    let context = ReportContext::load()?;
    let mut simulator = MarketSimulator::for_request(options.seed);
    let report = BusinessOpportunitiesReport::generate(&mut simulator);

    let analysis = analysis_for(&context, options, &report.opportunities).await;
    emit(
        ReportKind::BusinessOpportunities,
        options,
        report,
        analysis,
        |renderer, report| renderer.business_opportunities(report),
    )
}

pub(crate) async fn run_recommendations(args: RecommendArgs) -> Result<(), AppError> {
    let context = ReportContext::load()?;
    let preferences = args.preferences();
    let request = route_recommendations_request(&preferences);
    let recommendations = narrate(context.analyst.as_ref(), &request).await;

    if args.json {
        return print_json(&RecommendationResponse {
            origin: preferences.origin,
            recommendations,
        });
    }

    let mut renderer = TextRenderer::stdout();
    renderer.analysis(
        &format!("Route recommendations from {}", preferences.origin),
        &recommendations,
    )?;
    Ok(())
}
