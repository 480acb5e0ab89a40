// Data bundles handed from the generator to the page views
use crate::domain::dataset::{CategoryValue, TabularDataset, TimeSeries};
use crate::domain::metric::Metric;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
    /// Activities, Billing, Customers, Vendors, Payroll & HR
    Table(TabularDataset),
    Financial(FinancialData),
    Reports(ReportsData),
    Analytics(AnalyticsData),
    Documents(DocumentsData),
    Setup(SetupData),
    /// Executive Management, Sales, Inventory Management
    Overview(OverviewData),
    Hierarchy(HierarchyData),
}

impl PageData {
    pub fn kind(&self) -> &'static str {
        match self {
            PageData::Table(_) => "table",
            PageData::Financial(_) => "financial",
            PageData::Reports(_) => "reports",
            PageData::Analytics(_) => "analytics",
            PageData::Documents(_) => "documents",
            PageData::Setup(_) => "setup",
            PageData::Overview(_) => "overview",
            PageData::Hierarchy(_) => "hierarchy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    pub title: String,
    pub value: f64,
    pub max: f64,
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialData {
    pub kpis: Vec<Metric>,
    /// Statement shortcuts (Balance Sheet, Trial Balance, ...)
    pub statement_tiles: Vec<String>,
    pub gauge: GaugeReading,
    /// Monthly revenue in millions of dollars
    pub revenue_trend: TimeSeries,
    pub detailed_kpis: TabularDataset,
    pub summary: TabularDataset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportCategory {
    pub name: String,
    pub reports: TabularDataset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportsData {
    pub categories: Vec<ReportCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsData {
    pub kpis: Vec<Metric>,
    pub metrics: Vec<TimeSeries>,
}

impl AnalyticsData {
    pub fn available_metrics(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn metric(&self, name: &str) -> Option<&TimeSeries> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentsData {
    pub total_documents: usize,
    pub recent_uploads: usize,
    pub pending_review: usize,
    pub documents: TabularDataset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupData {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub title: String,
    pub unit: String,
    pub bars: Vec<CategoryValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewData {
    pub kpis: Vec<Metric>,
    pub gauge: Option<GaugeReading>,
    pub bars: Option<BarSeries>,
    pub table: Option<TabularDataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyData {
    pub accounts: TabularDataset,
}
