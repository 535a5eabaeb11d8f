use crate::infra::{AppState, SharedApp};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use brokerage::app::BrokerageApp;
use brokerage::auth::{AuthMode, RegistrationRequest, SessionIdentity};
use brokerage::catalog::{KindFilter, ListingDraft, ListingFilter, MapMarker, PropertyListing};
use brokerage::error::AppError;
use brokerage::tabs::Tab;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::MutexGuard;

pub(crate) fn brokerage_router(app: SharedApp) -> Router {
    Router::new()
        .route("/api/v1/auth/register", post(register_endpoint))
        .route("/api/v1/auth/login", post(login_endpoint))
        .route("/api/v1/auth/reset-password", post(reset_password_endpoint))
        .route("/api/v1/auth/logout", post(logout_endpoint))
        .route("/api/v1/session", get(session_endpoint))
        .route(
            "/api/v1/listings",
            get(listings_endpoint).post(add_listing_endpoint),
        )
        .route("/api/v1/listings/map", get(map_endpoint))
        .route("/api/v1/listings/:index/image", get(listing_image_endpoint))
        .route(
            "/api/v1/favorites",
            get(favorites_endpoint).post(save_favorite_endpoint),
        )
        .route("/api/v1/contact", post(contact_endpoint))
        .route("/api/v1/mortgage/quote", post(mortgage_endpoint))
        .route("/api/v1/admin/dashboard", get(dashboard_endpoint))
        .route("/api/v1/admin/listings.csv", get(export_csv_endpoint))
        .route(
            "/api/v1/admin/listings/:title",
            delete(delete_listing_endpoint),
        )
        .with_state(app)
}

pub(crate) fn with_service_routes(app: SharedApp) -> Router {
    brokerage_router(app)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

fn lock(app: &SharedApp) -> MutexGuard<'_, BrokerageApp> {
    app.lock().expect("state mutex poisoned")
}

fn tab_views(tabs: Vec<Tab>) -> Vec<TabView> {
    tabs.into_iter()
        .map(|tab| TabView {
            label: tab.label(),
            tab,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct TabView {
    pub(crate) tab: Tab,
    pub(crate) label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionView {
    pub(crate) identity: SessionIdentity,
    pub(crate) tabs: Vec<TabView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResetPasswordRequest {
    pub(crate) email: String,
    pub(crate) favorite_food: String,
    pub(crate) pet_name: String,
    pub(crate) new_password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingQuery {
    #[serde(default)]
    pub(crate) kind: KindFilter,
    pub(crate) max_price: Option<u64>,
    #[serde(default)]
    pub(crate) keyword: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FavoriteRequest {
    pub(crate) title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContactRequest {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) message: String,
    /// Index of the listing the caller clicked, when it came from the
    /// listings view.
    #[serde(default)]
    pub(crate) listing_index: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MortgageRequest {
    pub(crate) principal: f64,
    pub(crate) annual_rate_percent: f64,
    pub(crate) term_years: u32,
}

pub(crate) async fn register_endpoint(
    State(app): State<SharedApp>,
    Json(request): Json<RegistrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = lock(&app);
    guard.set_auth_mode(AuthMode::Register);
    let email = request.email.clone();
    guard.register(request)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "registered", "email": email })),
    ))
}

pub(crate) async fn login_endpoint(
    State(app): State<SharedApp>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut guard = lock(&app);
    guard.set_auth_mode(AuthMode::Login);
    let identity = guard.login(&request.email, &request.password)?;
    let tabs = tab_views(guard.visible_tabs()?);
    Ok(Json(SessionView { identity, tabs }))
}

pub(crate) async fn reset_password_endpoint(
    State(app): State<SharedApp>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut guard = lock(&app);
    guard.set_auth_mode(AuthMode::ResetPassword);
    guard.reset_password(
        &request.email,
        &request.favorite_food,
        &request.pet_name,
        &request.new_password,
    )?;
    Ok(Json(json!({ "status": "password_reset" })))
}

pub(crate) async fn logout_endpoint(State(app): State<SharedApp>) -> Json<serde_json::Value> {
    lock(&app).logout();
    Json(json!({ "status": "logged_out" }))
}

pub(crate) async fn session_endpoint(
    State(app): State<SharedApp>,
) -> Result<Json<serde_json::Value>, AppError> {
    let guard = lock(&app);
    match guard.session().cloned() {
        Some(identity) => {
            let tabs = tab_views(guard.visible_tabs()?);
            Ok(Json(json!({ "identity": identity, "tabs": tabs })))
        }
        None => Ok(Json(json!({
            "status": "unauthenticated",
            "auth_mode": guard.auth_mode(),
        }))),
    }
}

pub(crate) async fn listings_endpoint(
    State(app): State<SharedApp>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<PropertyListing>>, AppError> {
    let filter = ListingFilter {
        kind: query.kind,
        max_price: query.max_price.unwrap_or(u64::MAX),
        keyword: query.keyword,
    };
    let guard = lock(&app);
    let listings = guard
        .filtered_listings(&filter)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(listings))
}

pub(crate) async fn add_listing_endpoint(
    State(app): State<SharedApp>,
    Json(draft): Json<ListingDraft>,
) -> Result<impl IntoResponse, AppError> {
    let today = Local::now().date_naive();
    let mut guard = lock(&app);
    guard.add_listing(draft, today)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "listed", "total": guard.listings()?.len() })),
    ))
}

pub(crate) async fn map_endpoint(
    State(app): State<SharedApp>,
) -> Result<Json<Vec<MapMarker>>, AppError> {
    let markers = lock(&app).map_markers()?;
    Ok(Json(markers))
}

pub(crate) async fn listing_image_endpoint(
    State(app): State<SharedApp>,
    Path(index): Path<usize>,
) -> Result<Response, AppError> {
    let guard = lock(&app);
    match guard.listing_image(index)? {
        Some(bytes) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/octet-stream")],
            bytes.to_vec(),
        )
            .into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no image for that listing" })),
        )
            .into_response()),
    }
}

pub(crate) async fn favorites_endpoint(
    State(app): State<SharedApp>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tally = lock(&app).favorites_tally()?;
    let entries: Vec<serde_json::Value> = tally
        .into_iter()
        .map(|(title, saves)| json!({ "title": title, "saves": saves }))
        .collect();
    Ok(Json(json!({ "favorites": entries })))
}

pub(crate) async fn save_favorite_endpoint(
    State(app): State<SharedApp>,
    Json(request): Json<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    lock(&app).save_favorite(&request.title)?;
    Ok((StatusCode::CREATED, Json(json!({ "status": "saved" }))))
}

pub(crate) async fn contact_endpoint(
    State(app): State<SharedApp>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut guard = lock(&app);
    if let Some(index) = request.listing_index {
        guard.contact_seller(index)?;
    }
    let confirmation = guard.send_inquiry(&request.title, &request.message)?;
    Ok(Json(json!({ "confirmation": confirmation })))
}

pub(crate) async fn mortgage_endpoint(
    State(app): State<SharedApp>,
    Json(request): Json<MortgageRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let payment = lock(&app).mortgage_quote(
        request.principal,
        request.annual_rate_percent,
        request.term_years,
    )?;
    Ok(Json(json!({ "monthly_payment": payment })))
}

pub(crate) async fn dashboard_endpoint(
    State(app): State<SharedApp>,
) -> Result<Json<brokerage::reporting::DashboardSummary>, AppError> {
    let summary = lock(&app).dashboard_summary()?;
    Ok(Json(summary))
}

pub(crate) async fn export_csv_endpoint(
    State(app): State<SharedApp>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = lock(&app).export_csv()?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"listings.csv\"",
            ),
        ],
        bytes,
    ))
}

pub(crate) async fn delete_listing_endpoint(
    State(app): State<SharedApp>,
    Path(title): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = lock(&app).delete_listing(&title)?;
    Ok(Json(json!({ "title": title, "deleted": removed })))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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
