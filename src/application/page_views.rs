// Page views - one renderer per page, looked up by page through the registry
use crate::application::page_data::{
    AnalyticsData, DocumentsData, FinancialData, HierarchyData, OverviewData, PageData,
    ReportsData, SetupData,
};
use crate::application::view_model::{Block, StepKind, View, WaterfallStep};
use crate::domain::dataset::{Cell, TabularDataset};
use crate::domain::metric::{Metric, MetricValue};
use crate::domain::page::Page;
use std::collections::HashMap;

/// Per-request inputs that are not part of the generated data.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Analytics metric selector value
    pub selected_metric: Option<String>,
    /// Customer Hierarchy search query
    pub search: Option<String>,
    /// Effective configuration, shown on the Setup page
    pub settings_summary: Option<String>,
}

pub trait PageView: Send + Sync {
    fn page(&self) -> Page;
    fn render(&self, data: &PageData, ctx: &RenderContext) -> View;
}

fn unexpected_data(title: &str, page: Page, expected: &str, data: &PageData) -> View {
    let mut view = View::new(title);
    view.push(Block::notice(format!(
        "No {} data available for {} (got {})",
        expected,
        page,
        data.kind()
    )));
    view
}

/// Title, caption and a single table.
struct TableView {
    page: Page,
    title: &'static str,
    caption: &'static str,
    required: &'static [&'static str],
}

impl PageView for TableView {
    fn page(&self) -> Page {
        self.page
    }

    fn render(&self, data: &PageData, _ctx: &RenderContext) -> View {
        let PageData::Table(dataset) = data else {
            return unexpected_data(self.title, self.page, "table", data);
        };
        let mut view = View::new(self.title).with_caption(self.caption);
        view.push(Block::table(None, dataset, self.required));
        view
    }
}

struct FinancialView;

impl FinancialView {
    const TITLE: &'static str = "Financial Dashboard";
}

impl PageView for FinancialView {
    fn page(&self) -> Page {
        Page::Financial
    }

    fn render(&self, data: &PageData, _ctx: &RenderContext) -> View {
        let PageData::Financial(FinancialData {
            kpis,
            statement_tiles,
            gauge,
            revenue_trend,
            detailed_kpis,
            summary,
        }) = data
        else {
            return unexpected_data(Self::TITLE, self.page(), "financial", data);
        };

        let mut view = View::new(Self::TITLE).with_caption("Analyze financial data and trends.");
        view.push(Block::Tiles {
            heading: "Tiles".to_string(),
            labels: statement_tiles.clone(),
        });
        view.push(Block::metrics(Some("Key Performance Indicators"), kpis));
        view.push(Block::Gauge {
            heading: "KPI Meter".to_string(),
            gauge: gauge.clone(),
        });
        view.push(Block::line_chart(
            "Revenue by Period Trend",
            revenue_trend,
            Some("Revenue (Millions $)"),
        ));
        view.push(Block::table(
            Some("Financial Summary"),
            summary,
            &["Metric", "Amount", "Trend"],
        ));
        view.push(match profit_waterfall(summary) {
            Ok(steps) => Block::Waterfall {
                heading: "Profit Bridge".to_string(),
                steps,
            },
            Err(message) => Block::notice(format!("Cannot display Profit Bridge: {}", message)),
        });
        view.push(Block::table(
            Some("Detailed Metrics"),
            detailed_kpis,
            &["Metric", "Current Period", "Previous Period", "Change"],
        ));
        view
    }
}

/// Revenue, less expenses, down to profit.
fn profit_waterfall(summary: &TabularDataset) -> Result<Vec<WaterfallStep>, String> {
    summary
        .require_columns(&["Metric", "Amount"])
        .map_err(|e| e.to_string())?;

    let amount_of = |metric: &str| {
        summary
            .rows()
            .find(|r| r.get("Metric").and_then(Cell::as_text) == Some(metric))
            .and_then(|r| r.get("Amount").and_then(Cell::as_f64))
            .ok_or_else(|| format!("summary has no '{}' amount", metric))
    };

    let revenue = amount_of("Revenue")?;
    let expenses = amount_of("Expenses")?;
    let profit = revenue - expenses;

    Ok(vec![
        WaterfallStep {
            label: "Revenue".to_string(),
            kind: StepKind::Increase,
            start: 0.0,
            end: revenue,
        },
        WaterfallStep {
            label: "Expenses".to_string(),
            kind: StepKind::Decrease,
            start: revenue,
            end: profit,
        },
        WaterfallStep {
            label: "Profit".to_string(),
            kind: StepKind::Total,
            start: 0.0,
            end: profit,
        },
    ])
}

struct ReportsView;

impl PageView for ReportsView {
    fn page(&self) -> Page {
        Page::Reports
    }

    fn render(&self, data: &PageData, _ctx: &RenderContext) -> View {
        const TITLE: &str = "Reports Dashboard";
        let PageData::Reports(ReportsData { categories }) = data else {
            return unexpected_data(TITLE, self.page(), "reports", data);
        };

        let mut view = View::new(TITLE).with_caption("Access detailed reports.");
        if categories.is_empty() {
            view.push(Block::text("No reports available."));
        }
        for category in categories {
            view.push(Block::table(
                Some(category.name.as_str()),
                &category.reports,
                &["Report Name", "Last Run", "Status"],
            ));
        }
        view
    }
}

struct AnalyticsView;

impl PageView for AnalyticsView {
    fn page(&self) -> Page {
        Page::Analytics
    }

    fn render(&self, data: &PageData, ctx: &RenderContext) -> View {
        const TITLE: &str = "Analytics Dashboard";
        let PageData::Analytics(analytics) = data else {
            return unexpected_data(TITLE, self.page(), "analytics", data);
        };
        let AnalyticsData { kpis, .. } = analytics;

        let mut view = View::new(TITLE);
        view.push(Block::metrics(Some("Key Performance Indicators (KPIs)"), kpis));

        let available = analytics.available_metrics();
        let Some(default_metric) = available.first() else {
            view.push(Block::notice("No metrics available"));
            return view;
        };
        let selected = ctx
            .selected_metric
            .as_deref()
            .unwrap_or(*default_metric)
            .to_string();

        view.push(Block::Selector {
            label: "Select Metric".to_string(),
            param: "metric".to_string(),
            options: available.iter().map(|m| m.to_string()).collect(),
            selected: Some(selected.clone()),
        });

        match analytics.metric(&selected) {
            Some(series) => view.push(Block::line_chart(&selected, series, None)),
            None => view.push(Block::notice(format!(
                "Metric '{}' is not available",
                selected
            ))),
        }
        view
    }
}

struct DocumentsView;

impl PageView for DocumentsView {
    fn page(&self) -> Page {
        Page::Documents
    }

    fn render(&self, data: &PageData, _ctx: &RenderContext) -> View {
        const TITLE: &str = "Documents Dashboard";
        let PageData::Documents(DocumentsData {
            total_documents,
            recent_uploads,
            pending_review,
            documents,
        }) = data
        else {
            return unexpected_data(TITLE, self.page(), "documents", data);
        };

        let counters = [
            ("Total Documents", *total_documents),
            ("Recent Uploads", *recent_uploads),
            ("Pending Review", *pending_review),
        ]
        .map(|(label, count)| {
            Metric::without_delta(label, MetricValue::Count(count as i64))
        });

        let mut view = View::new(TITLE);
        view.push(Block::metrics(None, &counters));
        view.push(Block::table(
            Some("Document List"),
            documents,
            &["Document Name", "Type", "Created Date", "Status", "Owner"],
        ));
        view
    }
}

struct SetupView;

impl PageView for SetupView {
    fn page(&self) -> Page {
        Page::Setup
    }

    fn render(&self, data: &PageData, ctx: &RenderContext) -> View {
        const TITLE: &str = "Setup Dashboard";
        let PageData::Setup(SetupData { description }) = data else {
            return unexpected_data(TITLE, self.page(), "setup", data);
        };

        let mut view = View::new(TITLE).with_caption(description.clone());
        if let Some(summary) = &ctx.settings_summary {
            view.push(Block::Preformatted {
                heading: "Effective Configuration".to_string(),
                body: summary.clone(),
            });
        }
        view
    }
}

/// KPI row plus optional gauge, bar chart and table.
struct OverviewView {
    page: Page,
    title: &'static str,
    table_heading: &'static str,
    table_required: &'static [&'static str],
}

impl PageView for OverviewView {
    fn page(&self) -> Page {
        self.page
    }

    fn render(&self, data: &PageData, _ctx: &RenderContext) -> View {
        let PageData::Overview(OverviewData {
            kpis,
            gauge,
            bars,
            table,
        }) = data
        else {
            return unexpected_data(self.title, self.page, "overview", data);
        };

        let mut view = View::new(self.title);
        view.push(Block::metrics(None, kpis));
        if let Some(gauge) = gauge {
            view.push(Block::Gauge {
                heading: "KPI Meter".to_string(),
                gauge: gauge.clone(),
            });
        }
        if let Some(bars) = bars {
            view.push(if bars.bars.is_empty() {
                Block::notice(format!("Cannot display {}: no values", bars.title))
            } else {
                Block::BarChart {
                    heading: bars.title.clone(),
                    unit: Some(bars.unit.clone()),
                    bars: bars.bars.clone(),
                }
            });
        }
        if let Some(table) = table {
            view.push(Block::table(
                Some(self.table_heading),
                table,
                self.table_required,
            ));
        }
        view
    }
}

struct HierarchyView;

impl PageView for HierarchyView {
    fn page(&self) -> Page {
        Page::CustomerHierarchy
    }

    fn render(&self, data: &PageData, ctx: &RenderContext) -> View {
        const TITLE: &str = "Customer Hierarchy";
        const REQUIRED: &[&str] = &["Customer ID", "Customer Name", "Parent ID", "Level"];
        let PageData::Hierarchy(HierarchyData { accounts }) = data else {
            return unexpected_data(TITLE, self.page(), "hierarchy", data);
        };

        let query = ctx
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let mut view = View::new(TITLE);
        view.push(Block::Search {
            label: "Search Customers".to_string(),
            param: "q".to_string(),
            placeholder: "Enter customer name or ID".to_string(),
            query: query.map(String::from),
        });

        let Some(query) = query else {
            view.push(Block::table(Some("Accounts"), accounts, REQUIRED));
            return view;
        };

        if let Err(e) = accounts.require_columns(REQUIRED) {
            view.push(Block::notice(format!("Cannot search customers: {}", e)));
            return view;
        }

        let needle = query.to_lowercase();
        let matches = accounts.filter_rows(|row| {
            ["Customer ID", "Customer Name"].iter().any(|column| {
                row.get(column)
                    .and_then(Cell::as_text)
                    .map(|v| v.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        });

        if matches.is_empty() {
            view.push(Block::text(format!("No customers match '{}'.", query)));
        } else {
            view.push(Block::table(Some("Accounts"), &matches, REQUIRED));
        }
        view
    }
}

/// Maps every page to its view.
pub struct ViewRegistry {
    views: HashMap<Page, Box<dyn PageView>>,
}

impl ViewRegistry {
    pub fn standard() -> Self {
        let mut registry = Self {
            views: HashMap::new(),
        };

        let tables: [(Page, &'static str, &'static str, &'static [&'static str]); 5] = [
            (
                Page::Activities,
                "Activities Dashboard",
                "Here you can track ongoing activities.",
                &["Activity", "Date", "Status"],
            ),
            (
                Page::Billing,
                "Billing Dashboard",
                "Track billing cycles and invoices.",
                &["Invoice ID", "Amount", "Due Date", "Status"],
            ),
            (
                Page::Customers,
                "Customer Dashboard",
                "View and manage customer data.",
                &["Customer Name", "Email", "Total Spent", "Last Purchase"],
            ),
            (
                Page::Vendors,
                "Vendor Dashboard",
                "Monitor and manage vendor relationships.",
                &["Vendor Name", "Contact", "Pending Orders", "Last Order"],
            ),
            (
                Page::PayrollHr,
                "Payroll and HR Dashboard",
                "Manage payroll processes and HR information.",
                &["Employee", "Department", "Last Payroll Date", "Salary"],
            ),
        ];
        for (page, title, caption, required) in tables {
            registry.register(Box::new(TableView {
                page,
                title,
                caption,
                required,
            }));
        }

        registry.register(Box::new(FinancialView));
        registry.register(Box::new(ReportsView));
        registry.register(Box::new(AnalyticsView));
        registry.register(Box::new(DocumentsView));
        registry.register(Box::new(SetupView));
        registry.register(Box::new(OverviewView {
            page: Page::ExecutiveManagement,
            title: "Executive Management Dashboard",
            table_heading: "Details",
            table_required: &[],
        }));
        registry.register(Box::new(OverviewView {
            page: Page::Sales,
            title: "Sales Dashboard",
            table_heading: "Details",
            table_required: &[],
        }));
        registry.register(Box::new(OverviewView {
            page: Page::InventoryManagement,
            title: "Inventory Management",
            table_heading: "Stock Levels",
            table_required: &["SKU", "Item", "On Hand", "Reorder Point", "Status"],
        }));
        registry.register(Box::new(HierarchyView));

        registry
    }

    /// Add or replace the view for its page.
    pub fn register(&mut self, view: Box<dyn PageView>) {
        self.views.insert(view.page(), view);
    }

    pub fn view_for(&self, page: Page) -> Option<&dyn PageView> {
        self.views.get(&page).map(|v| v.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generator::{GeneratorSettings, MockDataGenerator};
    use chrono::NaiveDate;

    fn generator() -> MockDataGenerator {
        MockDataGenerator::new(GeneratorSettings {
            seed: 42,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            analytics_year: 2024,
        })
    }

    fn render(page: Page, ctx: &RenderContext) -> View {
        let registry = ViewRegistry::standard();
        let data = generator().generate(page).unwrap();
        registry.view_for(page).unwrap().render(&data, ctx)
    }

    #[test]
    fn test_registry_covers_every_page() {
        let registry = ViewRegistry::standard();
        for page in Page::ALL {
            let view = registry.view_for(page).expect("view registered");
            assert_eq!(view.page(), page);
        }
    }

    #[test]
    fn test_every_page_renders_without_notices() {
        for page in Page::ALL {
            let view = render(page, &RenderContext::default());
            assert!(view.notices().is_empty(), "{}: {:?}", page, view.notices());
        }
    }

    #[test]
    fn test_financial_shows_four_kpis() {
        let view = render(Page::Financial, &RenderContext::default());
        let tiles = view
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Metrics { tiles, .. } => Some(tiles),
                _ => None,
            })
            .unwrap();

        let labels: Vec<&str> = tiles.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Sales", "Expenses", "Revenue", "Receivables"]);
        for tile in tiles {
            assert!(tile.value.starts_with('$'));
            let delta = tile.delta.as_deref().unwrap();
            assert!(delta.starts_with('+') || delta.starts_with('-'));
            assert!(delta.ends_with('%'));
        }
        assert_eq!(tiles[0].value, "$3,735,857");
        assert_eq!(tiles[0].delta.as_deref(), Some("+23.5%"));
    }

    #[test]
    fn test_financial_waterfall_totals_profit() {
        let view = render(Page::Financial, &RenderContext::default());
        let steps = view
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Waterfall { steps, .. } => Some(steps),
                _ => None,
            })
            .unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].kind, StepKind::Total);
        assert_eq!(steps[2].end, 40_000.0);
    }

    #[test]
    fn test_analytics_revenue_spans_calendar_year() {
        let ctx = RenderContext {
            selected_metric: Some("Revenue".to_string()),
            ..Default::default()
        };
        let view = render(Page::Analytics, &ctx);

        let Some(Block::Selector { options, selected, .. }) =
            view.blocks.iter().find(|b| matches!(b, Block::Selector { .. }))
        else {
            panic!("selector expected");
        };
        assert!(options.contains(&"Revenue".to_string()));
        assert!(options.contains(&"Customer Count".to_string()));
        assert_eq!(selected.as_deref(), Some("Revenue"));

        let Some(Block::LineChart { heading, points, .. }) =
            view.blocks.iter().find(|b| matches!(b, Block::LineChart { .. }))
        else {
            panic!("line chart expected");
        };
        assert_eq!(heading, "Revenue");
        assert!(points.len() == 365 || points.len() == 366);
        assert_eq!(points[0].label, "2024-01-01");
        assert_eq!(points[points.len() - 1].label, "2024-12-31");
    }

    #[test]
    fn test_analytics_unknown_metric_renders_notice() {
        let ctx = RenderContext {
            selected_metric: Some("Churn".to_string()),
            ..Default::default()
        };
        let view = render(Page::Analytics, &ctx);
        assert_eq!(view.notices(), vec!["Metric 'Churn' is not available"]);
        assert!(view.blocks.iter().any(|b| matches!(b, Block::Selector { .. })));
    }

    #[test]
    fn test_missing_column_renders_notice_instead_of_table() {
        let broken = TabularDataset::new()
            .with_column("Invoice ID", vec![Cell::text("INV-0001")])
            .unwrap();
        let registry = ViewRegistry::standard();
        let view = registry
            .view_for(Page::Billing)
            .unwrap()
            .render(&PageData::Table(broken), &RenderContext::default());

        assert_eq!(view.title, "Billing Dashboard");
        assert_eq!(
            view.notices(),
            vec!["Cannot display table: dataset is missing columns: Amount, Due Date, Status"]
        );
    }

    #[test]
    fn test_wrong_data_kind_renders_notice() {
        let registry = ViewRegistry::standard();
        let view = registry.view_for(Page::Analytics).unwrap().render(
            &PageData::Table(TabularDataset::new()),
            &RenderContext::default(),
        );
        assert_eq!(view.notices().len(), 1);
        assert!(view.notices()[0].contains("analytics"));
    }

    #[test]
    fn test_hierarchy_search_filters_rows() {
        let ctx = RenderContext {
            search: Some("globex".to_string()),
            ..Default::default()
        };
        let view = render(Page::CustomerHierarchy, &ctx);
        let Some(Block::Table { rows, .. }) =
            view.blocks.iter().find(|b| matches!(b, Block::Table { .. }))
        else {
            panic!("table expected");
        };
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r[1].starts_with("Globex Corporation")));

        let ctx = RenderContext {
            search: Some("Umbrella".to_string()),
            ..Default::default()
        };
        let view = render(Page::CustomerHierarchy, &ctx);
        assert!(view
            .blocks
            .contains(&Block::text("No customers match 'Umbrella'.")));
    }

    #[test]
    fn test_setup_shows_settings_summary() {
        let ctx = RenderContext {
            settings_summary: Some("[data]\nseed = 1\n".to_string()),
            ..Default::default()
        };
        let view = render(Page::Setup, &ctx);
        assert!(matches!(view.blocks[0], Block::Preformatted { .. }));
    }
}
