// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    /// Name of the cookie carrying the session id.
    pub cookie_name: String,
}
