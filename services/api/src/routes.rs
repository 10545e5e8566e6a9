use crate::infra::{
    default_travel_date, deserialize_city, deserialize_optional_date, simulate_latency, AppState,
};
use airline_market::analyst::{
    narrate, narrate_record, route_recommendations_request, BudgetBand, TravelFlexibility,
    TravelInterest, TravelPreferences,
};
use airline_market::error::AppError;
use airline_market::market::trend::DEFAULT_TREND_DAYS;
use airline_market::market::{
    market_overview, BusinessOpportunitiesReport, City, MarketOverview, MarketSimulator,
    PriceTrendReport, RouteReport,
};
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct RouteReportRequest {
    #[serde(deserialize_with = "deserialize_city")]
    pub(crate) origin: City,
    #[serde(deserialize_with = "deserialize_city")]
    pub(crate) destination: City,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    #[serde(default)]
    pub(crate) analyze: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PriceTrendRequest {
    #[serde(default)]
    pub(crate) days: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    #[serde(default)]
    pub(crate) analyze: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MarketRequest {
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    #[serde(default)]
    pub(crate) analyze: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(deserialize_with = "deserialize_city")]
    pub(crate) origin: City,
    pub(crate) budget: BudgetBand,
    pub(crate) flexibility: TravelFlexibility,
    #[serde(default)]
    pub(crate) interests: Vec<TravelInterest>,
}

impl From<RecommendationRequest> for TravelPreferences {
    fn from(value: RecommendationRequest) -> Self {
        TravelPreferences {
            origin: value.origin,
            budget: value.budget,
            flexibility: value.flexibility,
            interests: value.interests,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzedReport<T> {
    #[serde(flatten)]
    pub(crate) report: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) analysis: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) origin: City,
    pub(crate) recommendations: String,
}

pub(crate) fn market_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/market/route", post(route_report_endpoint))
        .route("/api/v1/market/trends", post(price_trend_endpoint))
        .route("/api/v1/market/overview", post(market_overview_endpoint))
        .route(
            "/api/v1/market/opportunities",
            post(business_opportunities_endpoint),
        )
        .route(
            "/api/v1/market/recommendations",
            post(recommendations_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Reports without required fields may be requested with a bare POST.
fn optional_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

pub(crate) async fn route_report_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RouteReportRequest>, JsonRejection>,
) -> Result<Json<AnalyzedReport<RouteReport>>, AppError> {
    let Json(payload) = payload?;
    let RouteReportRequest {
        origin,
        destination,
        date,
        seed,
        analyze,
    } = payload;

    let date = date.unwrap_or_else(|| default_travel_date(Local::now().date_naive()));
    let mut simulator = MarketSimulator::for_request(seed);
    if origin != destination {
        simulate_latency(&state.market).await;
    }
    let report = RouteReport::generate(&mut simulator, origin, destination, date)?;
    info!(route = report.snapshot.route(), "route report generated");

    let analysis = if analyze {
        Some(narrate_record(state.analyst.as_ref(), &report.snapshot).await)
    } else {
        None
    };

    Ok(Json(AnalyzedReport { report, analysis }))
}

pub(crate) async fn price_trend_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<PriceTrendRequest>, JsonRejection>,
) -> Result<Json<AnalyzedReport<PriceTrendReport>>, AppError> {
    let payload = optional_body(payload)?;
    let days = payload.days.unwrap_or(DEFAULT_TREND_DAYS);
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let mut simulator = MarketSimulator::for_request(payload.seed);
    let report = PriceTrendReport::generate(&mut simulator, days, today)?;

    let analysis = if payload.analyze {
        Some(narrate_record(state.analyst.as_ref(), &report.summary).await)
    } else {
        None
    };

    Ok(Json(AnalyzedReport { report, analysis }))
}

pub(crate) async fn market_overview_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<MarketRequest>, JsonRejection>,
) -> Result<Json<AnalyzedReport<MarketOverview>>, AppError> {
    let payload = optional_body(payload)?;
    let mut simulator = MarketSimulator::for_request(payload.seed);
    let report = market_overview(&mut simulator);

    let analysis = if payload.analyze {
        Some(narrate_record(state.analyst.as_ref(), &report.routes).await)
    } else {
        None
    };

    Ok(Json(AnalyzedReport { report, analysis }))
}

pub(crate) async fn business_opportunities_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<MarketRequest>, JsonRejection>,
) -> Result<Json<AnalyzedReport<BusinessOpportunitiesReport>>, AppError> {
    let payload = optional_body(payload)?;
    let mut simulator = MarketSimulator::for_request(payload.seed);
    let report = BusinessOpportunitiesReport::generate(&mut simulator);

    let analysis = if payload.analyze {
        Some(narrate_record(state.analyst.as_ref(), &report.opportunities).await)
    } else {
        None
    };

    Ok(Json(AnalyzedReport { report, analysis }))
}

pub(crate) async fn recommendations_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(payload) = payload?;
    let preferences = TravelPreferences::from(payload);
    let request = route_recommendations_request(&preferences);
    let recommendations = narrate(state.analyst.as_ref(), &request).await;

    Ok(Json(RecommendationResponse {
        origin: preferences.origin,
        recommendations,
    }))
}
