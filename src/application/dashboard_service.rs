// Dashboard service - sessions, navigation, cached page data and rendering
use crate::application::generator::{GeneratorSettings, MockDataGenerator};
use crate::application::page_data::PageData;
use crate::application::page_views::{RenderContext, ViewRegistry};
use crate::application::session::{Session, SessionId};
use crate::application::session_store::{SessionStore, SharedSession};
use crate::application::view_model::View;
use crate::domain::error::DomainError;
use crate::domain::filters::FilterSelection;
use crate::domain::navigation::{reduce, NavigationEvent};
use crate::domain::page::{Page, Section};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

pub const REMINDERS: [&str; 4] = [
    "Expense Reports to Approve",
    "Purchase Request to Approve",
    "Invoices > 30 Days > $5K",
    "New Customers",
];

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("no view registered for page {0}")]
    NoView(Page),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub title: &'static str,
    pub slug: &'static str,
    pub section: Section,
    pub active: bool,
}

/// Everything the presentation layer needs to draw one page.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub page: Page,
    pub generation: u64,
    pub navigation: Vec<NavEntry>,
    pub can_go_back: bool,
    pub filters: FilterSelection,
    /// Filters are stored and shown but not wired into the generators.
    pub filters_applied: bool,
    pub reminders: Vec<&'static str>,
    pub view: View,
}

#[derive(Debug, Clone, Default)]
pub struct RenderParams {
    pub selected_metric: Option<String>,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn SessionStore>,
    views: Arc<ViewRegistry>,
    /// `seed` here is the base that every session seed is derived from.
    data: GeneratorSettings,
    settings_summary: Option<String>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn SessionStore>, views: ViewRegistry, data: GeneratorSettings) -> Self {
        Self {
            store,
            views: Arc::new(views),
            data,
            settings_summary: None,
        }
    }

    pub fn with_settings_summary(mut self, summary: String) -> Self {
        self.settings_summary = Some(summary);
        self
    }

    /// Resume the requested session if it still exists, otherwise start a new
    /// one. The flag is true when a session was created.
    pub async fn open_session(&self, requested: Option<&str>) -> (SessionId, bool) {
        if let Some(id) = requested.and_then(SessionId::parse) {
            if self.store.get(&id).await.is_some() {
                return (id, false);
            }
        }

        let id = SessionId::generate();
        let session = Session::new(id.clone(), FilterSelection::default_for(self.data.as_of));
        self.store.insert(session).await;
        let live = self.store.len().await;
        tracing::info!(session = %id, live, "Started dashboard session");
        (id, true)
    }

    async fn session(&self, id: &SessionId) -> Result<SharedSession, DashboardError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| DashboardError::UnknownSession(id.clone()))
    }

    pub async fn navigate(
        &self,
        id: &SessionId,
        event: NavigationEvent,
    ) -> Result<Page, DashboardError> {
        let shared = self.session(id).await?;
        let mut session = shared.lock().await;
        let from = session.navigation.current;
        let state = std::mem::take(&mut session.navigation);
        session.navigation = reduce(state, event);
        let to = session.navigation.current;

        tracing::debug!(
            session = %id,
            ?event,
            %from,
            %to,
            depth = session.navigation.history().len(),
            "Navigated"
        );
        Ok(to)
    }

    pub async fn current_page(&self, id: &SessionId) -> Result<Page, DashboardError> {
        Ok(self.session(id).await?.lock().await.navigation.current)
    }

    /// Page data for the session's current generation, generated on first use
    /// and served from the session cache afterwards.
    pub async fn page_data(
        &self,
        id: &SessionId,
        page: Page,
    ) -> Result<Arc<PageData>, DashboardError> {
        let shared = self.session(id).await?;
        let mut session = shared.lock().await;
        self.ensure_data(&mut session, page)
    }

    fn ensure_data(&self, session: &mut Session, page: Page) -> Result<Arc<PageData>, DashboardError> {
        if let Some(data) = session.cached(page) {
            return Ok(data);
        }

        let generator = MockDataGenerator::new(GeneratorSettings {
            seed: session.data_seed(self.data.seed),
            ..self.data
        });
        let data = Arc::new(generator.generate(page)?);
        session.cache(page, data.clone());

        tracing::debug!(
            session = %session.id,
            %page,
            generation = session.generation,
            cached = session.cached_pages(),
            "Generated page data"
        );
        Ok(data)
    }

    /// "Refresh Data": the next render draws a fresh data set.
    pub async fn refresh(&self, id: &SessionId) -> Result<u64, DashboardError> {
        let shared = self.session(id).await?;
        let mut session = shared.lock().await;
        session.refresh();

        tracing::info!(session = %id, generation = session.generation, "Refreshed session data");
        Ok(session.generation)
    }

    pub async fn update_filters(
        &self,
        id: &SessionId,
        filters: FilterSelection,
    ) -> Result<(), DashboardError> {
        let shared = self.session(id).await?;
        tracing::debug!(session = %id, ?filters, "Updated filters");
        shared.lock().await.filters = filters;
        Ok(())
    }

    pub async fn filters(&self, id: &SessionId) -> Result<FilterSelection, DashboardError> {
        Ok(self.session(id).await?.lock().await.filters.clone())
    }

    /// Render the session's current page.
    pub async fn render(
        &self,
        id: &SessionId,
        params: RenderParams,
    ) -> Result<RenderedPage, DashboardError> {
        let shared = self.session(id).await?;
        let mut session = shared.lock().await;
        let page = session.navigation.current;
        let data = self.ensure_data(&mut session, page)?;

        let view = self
            .views
            .view_for(page)
            .ok_or(DashboardError::NoView(page))?;
        let ctx = RenderContext {
            selected_metric: params.selected_metric,
            search: params.search,
            settings_summary: self.settings_summary.clone(),
        };
        let view = view.render(&data, &ctx);

        for notice in view.notices() {
            tracing::warn!(session = %id, %page, notice, "Rendered placeholder");
        }

        Ok(RenderedPage {
            page,
            generation: session.generation,
            navigation: Page::ALL
                .into_iter()
                .map(|p| NavEntry {
                    title: p.title(),
                    slug: p.slug(),
                    section: p.section(),
                    active: p == page,
                })
                .collect(),
            can_go_back: session.navigation.can_go_back(),
            filters: session.filters.clone(),
            filters_applied: false,
            reminders: REMINDERS.to_vec(),
            view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::Company;
    use crate::infrastructure::memory_store::InMemorySessionStore;
    use chrono::NaiveDate;

    fn service() -> DashboardService {
        DashboardService::new(
            Arc::new(InMemorySessionStore::new(16)),
            ViewRegistry::standard(),
            GeneratorSettings {
                seed: 2024,
                as_of: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                analytics_year: 2024,
            },
        )
    }

    #[tokio::test]
    async fn test_new_session_starts_on_first_page() {
        let service = service();
        let (id, created) = service.open_session(None).await;
        assert!(created);
        assert_eq!(service.current_page(&id).await.unwrap(), Page::ALL[0]);

        let (again, created) = service.open_session(Some(id.as_str())).await;
        assert!(!created);
        assert_eq!(again, id);
    }

    #[tokio::test]
    async fn test_unknown_requested_session_gets_new_id() {
        let service = service();
        let (id, created) = service.open_session(Some("deadbeef")).await;
        assert!(created);
        assert_ne!(id.as_str(), "deadbeef");
    }

    #[tokio::test]
    async fn test_navigation_updates_current_page() {
        let service = service();
        let (id, _) = service.open_session(None).await;
        for page in Page::ALL {
            let current = service
                .navigate(&id, NavigationEvent::Select(page))
                .await
                .unwrap();
            assert_eq!(current, page);
            assert_eq!(service.render(&id, RenderParams::default()).await.unwrap().page, page);
        }
    }

    #[tokio::test]
    async fn test_page_data_is_cached_until_refresh() {
        let service = service();
        let (id, _) = service.open_session(None).await;

        let first = service.page_data(&id, Page::Billing).await.unwrap();
        let second = service.page_data(&id, Page::Billing).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        assert_eq!(service.refresh(&id).await.unwrap(), 1);
        let third = service.page_data(&id, Page::Billing).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_ne!(*first, *third);
    }

    #[tokio::test]
    async fn test_navigation_keeps_filters_and_cache() {
        let service = service();
        let (id, _) = service.open_session(None).await;
        let filters =
            FilterSelection::parse("2024-01-01", "2024-03-31", "Company 1", "Finance").unwrap();
        service.update_filters(&id, filters.clone()).await.unwrap();
        let billing = service.page_data(&id, Page::Billing).await.unwrap();

        service
            .navigate(&id, NavigationEvent::Select(Page::Analytics))
            .await
            .unwrap();
        service.navigate(&id, NavigationEvent::Back).await.unwrap();

        assert_eq!(service.filters(&id).await.unwrap(), filters);
        assert!(Arc::ptr_eq(
            &billing,
            &service.page_data(&id, Page::Billing).await.unwrap()
        ));
        let rendered = service.render(&id, RenderParams::default()).await.unwrap();
        assert_eq!(rendered.filters.company, Company::Numbered(1));
        assert!(!rendered.filters_applied);
    }

    #[tokio::test]
    async fn test_render_marks_active_navigation_entry() {
        let service = service();
        let (id, _) = service.open_session(None).await;
        service
            .navigate(&id, NavigationEvent::Select(Page::Financial))
            .await
            .unwrap();
        let rendered = service.render(&id, RenderParams::default()).await.unwrap();

        assert_eq!(rendered.view.title, "Financial Dashboard");
        let active: Vec<&str> = rendered
            .navigation
            .iter()
            .filter(|n| n.active)
            .map(|n| n.title)
            .collect();
        assert_eq!(active, vec!["Financial"]);
        assert_eq!(rendered.navigation.len(), Page::ALL.len());
        assert_eq!(rendered.reminders.len(), 4);
        assert!(rendered.can_go_back);
    }

    #[tokio::test]
    async fn test_unknown_session_is_an_error() {
        let service = service();
        let id = SessionId::parse("abc123").unwrap();
        let err = service.current_page(&id).await.unwrap_err();
        assert!(matches!(err, DashboardError::UnknownSession(_)));
    }

    #[tokio::test]
    async fn test_concurrent_render_keeps_filter_and_refresh_updates() {
        let service = service();
        let (id, _) = service.open_session(None).await;
        let filters =
            FilterSelection::parse("2024-02-01", "2024-02-29", "Company 3", "Sales").unwrap();

        let (rendered, updated, refreshed) = tokio::join!(
            service.render(&id, RenderParams::default()),
            service.update_filters(&id, filters.clone()),
            service.refresh(&id),
        );
        rendered.unwrap();
        updated.unwrap();
        refreshed.unwrap();

        let after = service.render(&id, RenderParams::default()).await.unwrap();
        assert_eq!(after.filters, filters);
        assert_eq!(after.generation, 1);
    }
}
