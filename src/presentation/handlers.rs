// HTTP request handlers
use crate::application::dashboard_service::{DashboardError, RenderParams};
use crate::application::session::SessionId;
use crate::domain::error::DomainError;
use crate::domain::filters::FilterSelection;
use crate::domain::navigation::NavigationEvent;
use crate::domain::page::{Page, Section};
use crate::infrastructure::html::render_document;
use crate::infrastructure::http_response::{accepts_brotli, html_response, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Form, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),

    /// The session disappeared mid-request; start over from the index.
    #[error("session expired: {0}")]
    SessionExpired(SessionId),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Domain(e) => e.into(),
            DashboardError::UnknownSession(id) => AppError::SessionExpired(id),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownPage(_) => AppError::NotFound(err.to_string()),
            DomainError::InvalidDateRange { .. }
            | DomainError::InvalidDate(_)
            | DomainError::InvalidYear(_)
            | DomainError::UnknownCompany(_)
            | DomainError::UnknownDepartment(_) => AppError::BadRequest(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<StatusCode> for AppError {
    fn from(status: StatusCode) -> Self {
        AppError::Internal(status.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SessionExpired(id) => {
                tracing::info!(session = %id, "Session expired, redirecting to index");
                return Redirect::to("/").into_response();
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Rejected request");
        }
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub metric: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub departments: String,
}

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub title: &'static str,
    pub slug: &'static str,
    pub section: Section,
}

/// Session id from the request cookie, if it carries one.
fn session_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

/// Resume or start the caller's session. Returns the cookie to set when a
/// new id was issued.
async fn open_session(state: &AppState, headers: &HeaderMap) -> (SessionId, Option<HeaderValue>) {
    let requested = session_cookie(headers, &state.cookie_name);
    let (id, created) = state.dashboard_service.open_session(requested).await;
    let cookie = created
        .then(|| {
            HeaderValue::from_str(&format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                state.cookie_name, id
            ))
            .ok()
        })
        .flatten();
    (id, cookie)
}

fn with_cookie(mut response: Response, cookie: Option<HeaderValue>) -> Response {
    if let Some(cookie) = cookie {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

fn render_params(query: PageQuery) -> RenderParams {
    RenderParams {
        selected_metric: query.metric.filter(|m| !m.trim().is_empty()),
        search: query.q,
    }
}

async fn render_html(
    state: &AppState,
    id: &SessionId,
    params: RenderParams,
    compress: bool,
) -> Result<Response, AppError> {
    let rendered = state.dashboard_service.render(id, params).await?;
    Ok(html_response(render_document(&rendered), compress).await?)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the session's current page
pub async fn index(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let (id, cookie) = open_session(&state, &headers).await;
    let response = render_html(
        &state,
        &id,
        RenderParams::default(),
        accepts_brotli(&headers),
    )
    .await?;
    Ok(with_cookie(response, cookie))
}

/// Select a page and render it
pub async fn show_page(
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let page = Page::from_slug(&slug)?;
    let (id, cookie) = open_session(&state, &headers).await;
    state
        .dashboard_service
        .navigate(&id, NavigationEvent::Select(page))
        .await?;
    let response = render_html(&state, &id, render_params(query), accepts_brotli(&headers)).await?;
    Ok(with_cookie(response, cookie))
}

async fn navigate_and_redirect(
    state: &AppState,
    headers: &HeaderMap,
    event: NavigationEvent,
) -> Result<Response, AppError> {
    let (id, cookie) = open_session(state, headers).await;
    state.dashboard_service.navigate(&id, event).await?;
    Ok(with_cookie(Redirect::to("/").into_response(), cookie))
}

pub async fn go_back(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    navigate_and_redirect(&state, &headers, NavigationEvent::Back).await
}

pub async fn go_home(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    navigate_and_redirect(&state, &headers, NavigationEvent::Home).await
}

/// Validate and store the sidebar filters
pub async fn update_filters(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Form(form): Form<FilterForm>,
) -> Result<Response, AppError> {
    let filters =
        FilterSelection::parse(&form.start, &form.end, &form.company, &form.departments)?;
    let (id, cookie) = open_session(&state, &headers).await;
    state.dashboard_service.update_filters(&id, filters).await?;
    Ok(with_cookie(Redirect::to("/").into_response(), cookie))
}

/// Draw a fresh data set for the session
pub async fn refresh(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let (id, cookie) = open_session(&state, &headers).await;
    state.dashboard_service.refresh(&id).await?;
    Ok(with_cookie(Redirect::to("/").into_response(), cookie))
}

/// Ordered page registry
pub async fn list_pages_api(headers: HeaderMap) -> Result<Response, AppError> {
    let pages: Vec<PageSummary> = Page::ALL
        .into_iter()
        .map(|p| PageSummary {
            title: p.title(),
            slug: p.slug(),
            section: p.section(),
        })
        .collect();
    Ok(json_response(&pages, accepts_brotli(&headers)).await?)
}

/// Select a page and return its rendered view model as JSON
pub async fn page_api(
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let page = Page::from_slug(&slug)?;
    let (id, cookie) = open_session(&state, &headers).await;
    state
        .dashboard_service
        .navigate(&id, NavigationEvent::Select(page))
        .await?;
    let rendered = state
        .dashboard_service
        .render(&id, render_params(query))
        .await?;
    let response = json_response(&rendered, accepts_brotli(&headers)).await?;
    Ok(with_cookie(response, cookie))
}
