// Mock data generation - seeded, deterministic sample data per page
use crate::application::page_data::{
    AnalyticsData, BarSeries, DocumentsData, FinancialData, GaugeReading, HierarchyData,
    OverviewData, PageData, ReportCategory, ReportsData, SetupData,
};
use crate::domain::dataset::{Cell, CategoryValue, SeriesPoint, TabularDataset, TimeSeries};
use crate::domain::error::DomainError;
use crate::domain::metric::{Delta, Metric, MetricValue};
use crate::domain::page::Page;
use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DOCUMENT_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub seed: u64,
    /// Stands in for "today" in every relative date.
    pub as_of: NaiveDate,
    /// Calendar year covered by the daily analytics series.
    pub analytics_year: i32,
}

/// Builds the data bundle for a page. Output depends only on the settings and
/// the page, so equal settings always give equal data.
#[derive(Debug, Clone)]
pub struct MockDataGenerator {
    settings: GeneratorSettings,
}

impl MockDataGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn generate(&self, page: Page) -> Result<PageData, DomainError> {
        let mut rng = self.rng_for(page);
        match page {
            Page::Activities => self.activities().map(PageData::Table),
            Page::Billing => self.billing(&mut rng).map(PageData::Table),
            Page::Customers => self.customers(&mut rng).map(PageData::Table),
            Page::Vendors => self.vendors(&mut rng).map(PageData::Table),
            Page::PayrollHr => self.payroll(&mut rng).map(PageData::Table),
            Page::Financial => self.financial().map(PageData::Financial),
            Page::Reports => self.reports().map(PageData::Reports),
            Page::Analytics => self.analytics(&mut rng).map(PageData::Analytics),
            Page::Documents => self.documents(&mut rng).map(PageData::Documents),
            Page::Setup => Ok(PageData::Setup(SetupData {
                description: "Configure application settings and preferences.".to_string(),
            })),
            Page::ExecutiveManagement => Ok(PageData::Overview(self.executive())),
            Page::Sales => Ok(PageData::Overview(self.sales(&mut rng))),
            Page::CustomerHierarchy => self.customer_hierarchy(&mut rng).map(PageData::Hierarchy),
            Page::InventoryManagement => self.inventory(&mut rng).map(PageData::Overview),
        }
    }

    // Each page draws from its own stream so results do not depend on the
    // order pages are visited in.
    fn rng_for(&self, page: Page) -> StdRng {
        let salt = (page.index() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        StdRng::seed_from_u64(self.settings.seed ^ salt)
    }

    fn days_before(&self, days: i64) -> NaiveDate {
        self.settings.as_of - Duration::days(days)
    }

    fn days_after(&self, days: i64) -> NaiveDate {
        self.settings.as_of + Duration::days(days)
    }

    /// `count` consecutive days ending on the reference date, oldest first.
    fn trailing_days(&self, count: usize) -> Vec<Cell> {
        (0..count as i64)
            .rev()
            .map(|i| Cell::Date(self.days_before(i)))
            .collect()
    }

    fn activities(&self) -> Result<TabularDataset, DomainError> {
        TabularDataset::new()
            .with_column("Activity", texts(&["Team Meeting", "Project Launch", "Deadline"]))?
            .with_column(
                "Date",
                (0..3).map(|i| Cell::Date(self.days_before(i))).collect(),
            )?
            .with_column("Status", texts(&["Completed", "Scheduled", "Upcoming"]))
    }

    fn billing(&self, rng: &mut StdRng) -> Result<TabularDataset, DomainError> {
        TabularDataset::new()
            .with_column(
                "Invoice ID",
                (1..=5).map(|i| Cell::Text(format!("INV-{:04}", i))).collect(),
            )?
            .with_column(
                "Amount",
                (0..5)
                    .map(|_| Cell::Money(round_cents(rng.gen_range(1000.0..5000.0))))
                    .collect(),
            )?
            .with_column(
                "Due Date",
                (0..5).map(|i| Cell::Date(self.days_after(i * 5))).collect(),
            )?
            .with_column("Status", texts(&["Paid", "Due", "Overdue", "Paid", "Due"]))
    }

    fn customers(&self, rng: &mut StdRng) -> Result<TabularDataset, DomainError> {
        TabularDataset::new()
            .with_column(
                "Customer Name",
                (1..=10).map(|i| Cell::Text(format!("Customer {}", i))).collect(),
            )?
            .with_column(
                "Email",
                (1..=10)
                    .map(|i| Cell::Text(format!("customer{}@example.com", i)))
                    .collect(),
            )?
            .with_column(
                "Total Spent",
                (0..10)
                    .map(|_| Cell::Money(round_cents(rng.gen_range(5000.0..20000.0))))
                    .collect(),
            )?
            .with_column(
                "Last Purchase",
                (0..10).map(|i| Cell::Date(self.days_before(i * 10))).collect(),
            )
    }

    fn vendors(&self, rng: &mut StdRng) -> Result<TabularDataset, DomainError> {
        TabularDataset::new()
            .with_column(
                "Vendor Name",
                (1..=5).map(|i| Cell::Text(format!("Vendor {}", i))).collect(),
            )?
            .with_column(
                "Contact",
                (1..=5)
                    .map(|i| Cell::Text(format!("contact{}@vendor.com", i)))
                    .collect(),
            )?
            .with_column(
                "Pending Orders",
                (0..5).map(|_| Cell::Integer(rng.gen_range(1..10))).collect(),
            )?
            .with_column(
                "Last Order",
                (0..5).map(|i| Cell::Date(self.days_before(i * 7))).collect(),
            )
    }

    fn payroll(&self, rng: &mut StdRng) -> Result<TabularDataset, DomainError> {
        let departments = ["HR", "Finance", "IT", "Sales"];
        TabularDataset::new()
            .with_column(
                "Employee",
                (1..=5).map(|i| Cell::Text(format!("Employee {}", i))).collect(),
            )?
            .with_column(
                "Department",
                (0..5).map(|_| Cell::text(pick(rng, &departments))).collect(),
            )?
            .with_column(
                "Last Payroll Date",
                (0..5).map(|i| Cell::Date(self.days_before(i * 15))).collect(),
            )?
            .with_column(
                "Salary",
                (0..5)
                    .map(|_| Cell::Money(round_cents(rng.gen_range(4000.0..8000.0))))
                    .collect(),
            )
    }

    fn financial(&self) -> Result<FinancialData, DomainError> {
        let kpis = vec![
            Metric::new("Sales", MetricValue::Currency(3_735_857.0), Delta::Percent(23.5)),
            Metric::new("Expenses", MetricValue::Currency(1_835_031.0), Delta::Percent(-24.4)),
            Metric::new("Revenue", MetricValue::Currency(3_472_235.0), Delta::Percent(20.5)),
            Metric::new("Receivables", MetricValue::Currency(2_026_663.0), Delta::Percent(8.2)),
        ];

        let monthly = [3.2, 3.4, 3.7, 3.5, 3.8, 3.6, 3.9, 3.7, 3.8, 4.0, 3.9, 3.7];
        let revenue_trend = TimeSeries::new(
            "Revenue",
            month_ends(self.settings.analytics_year)?
                .into_iter()
                .zip(monthly)
                .map(|(date, value)| SeriesPoint { date, value })
                .collect(),
        );

        // (metric, current, previous, change)
        let detailed: [(&str, f64, f64, &str); 10] = [
            ("Sales", 3_735_857.0, 3_026_079.0, "+23.5%"),
            ("Expenses", 1_835_031.0, 2_286_981.0, "-24.4%"),
            ("Revenue", 3_472_235.0, 3_025_079.0, "+20.5%"),
            ("Receivables", 2_026_663.0, 1_881_027.0, "+8.2%"),
            ("Total Bank Balance", 3_824_663.0, 3_266_078.0, "+17.0%"),
            ("Payables", 2_026_663.0, 1_297_289.0, "+56.2%"),
            ("COGS", 1_440_722.0, 1_042_042.0, "+12.3%"),
            ("Inventory", 1_297_591.0, 1_097_638.0, "+18.3%"),
            ("Total Pipeline Deals", 4_500_000.0, 4_200_000.0, "+7.1%"),
            ("Credit Card Balance", 840.0, 775.0, "+8.4%"),
        ];
        let detailed_kpis = TabularDataset::new()
            .with_column("Metric", detailed.iter().map(|r| Cell::text(r.0)).collect())?
            .with_column(
                "Current Period",
                detailed.iter().map(|r| Cell::Money(r.1)).collect(),
            )?
            .with_column(
                "Previous Period",
                detailed.iter().map(|r| Cell::Money(r.2)).collect(),
            )?
            .with_column("Change", detailed.iter().map(|r| Cell::text(r.3)).collect())?;

        let summary = TabularDataset::new()
            .with_column("Metric", texts(&["Revenue", "Expenses", "Profit", "Cash Flow"]))?
            .with_column(
                "Amount",
                [120_000.0, 80_000.0, 40_000.0, 30_000.0]
                    .into_iter()
                    .map(Cell::Money)
                    .collect(),
            )?
            .with_column("Trend", texts(&["Up", "Down", "Up", "Flat"]))?;

        Ok(FinancialData {
            kpis,
            statement_tiles: [
                "Balance Sheet",
                "Trial Balance",
                "Income Statement",
                "Budget vs Actual",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            gauge: revenue_gauge(),
            revenue_trend,
            detailed_kpis,
            summary,
        })
    }

    fn reports(&self) -> Result<ReportsData, DomainError> {
        let catalog: [(&str, &[&str], &[&str]); 4] = [
            (
                "Financial Reports",
                &["Balance Sheet", "Income Statement", "Cash Flow", "Trial Balance"],
                &["Completed", "Completed", "In Progress", "Scheduled"],
            ),
            (
                "Sales Reports",
                &["Sales by Region", "Product Performance", "Customer Analysis"],
                &["Completed", "Completed", "Completed"],
            ),
            (
                "Inventory Reports",
                &["Stock Level", "Reorder Points", "Inventory Valuation"],
                &["Completed", "In Progress", "Completed"],
            ),
            (
                "Custom Reports",
                &["Custom Report 1", "Custom Report 2"],
                &["Completed", "Draft"],
            ),
        ];

        let categories = catalog
            .into_iter()
            .map(|(name, reports, statuses)| {
                let reports = TabularDataset::new()
                    .with_column("Report Name", texts(reports))?
                    .with_column("Last Run", self.trailing_days(reports.len()))?
                    .with_column("Status", texts(statuses))?;
                Ok::<_, DomainError>(ReportCategory {
                    name: name.to_string(),
                    reports,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReportsData { categories })
    }

    fn analytics(&self, rng: &mut StdRng) -> Result<AnalyticsData, DomainError> {
        let kpis = vec![
            Metric::new("Revenue Growth", MetricValue::Percent(15.2), Delta::Percent(2.3)),
            Metric::new(
                "Customer Satisfaction",
                MetricValue::Score {
                    value: 4.5,
                    max: 5.0,
                },
                Delta::Absolute(0.2),
            ),
            Metric::new("Operating Margin", MetricValue::Percent(28.5), Delta::Percent(-1.2)),
            Metric::new("Employee Retention", MetricValue::Percent(94.5), Delta::Percent(1.5)),
        ];

        let days = calendar_days(self.settings.analytics_year)?;

        let revenue = days
            .iter()
            .map(|&date| SeriesPoint {
                date,
                value: rng.gen_range(800_000.0..1_200_000.0),
            })
            .collect();

        let mut running = 0.0;
        let customer_count = days
            .iter()
            .map(|&date| {
                running += rng.gen_range(1..10) as f64;
                SeriesPoint {
                    date,
                    value: running,
                }
            })
            .collect();

        let order_value = days
            .iter()
            .map(|&date| SeriesPoint {
                date,
                value: rng.gen_range(100.0..500.0),
            })
            .collect();

        Ok(AnalyticsData {
            kpis,
            metrics: vec![
                TimeSeries::new("Revenue", revenue),
                TimeSeries::new("Customer Count", customer_count),
                TimeSeries::new("Average Order Value", order_value),
            ],
        })
    }

    fn documents(&self, rng: &mut StdRng) -> Result<DocumentsData, DomainError> {
        let types = ["Invoice", "Contract", "Report", "Policy"];
        let statuses = ["Draft", "Under Review", "Approved"];
        let owners = ["John D.", "Sarah M.", "Mike R."];

        let documents = TabularDataset::new()
            .with_column(
                "Document Name",
                (0..DOCUMENT_COUNT)
                    .map(|i| Cell::Text(format!("Document {}", i)))
                    .collect(),
            )?
            .with_column(
                "Type",
                (0..DOCUMENT_COUNT)
                    .map(|_| Cell::text(pick(rng, &types)))
                    .collect(),
            )?
            .with_column("Created Date", self.trailing_days(DOCUMENT_COUNT))?
            .with_column(
                "Status",
                (0..DOCUMENT_COUNT)
                    .map(|_| Cell::text(pick(rng, &statuses)))
                    .collect(),
            )?
            .with_column(
                "Owner",
                (0..DOCUMENT_COUNT)
                    .map(|_| Cell::text(pick(rng, &owners)))
                    .collect(),
            )?;

        let as_of = self.settings.as_of;
        Ok(DocumentsData {
            total_documents: documents.row_count(),
            recent_uploads: documents.count_where("Created Date", |c| c.as_date() == Some(as_of)),
            pending_review: documents.count_where("Status", |c| c.as_text() == Some("Under Review")),
            documents,
        })
    }

    fn executive(&self) -> OverviewData {
        OverviewData {
            kpis: vec![
                Metric::new(
                    "Total Revenue",
                    MetricValue::CompactCurrency(15_200_000.0),
                    Delta::Percent(12.0),
                ),
                Metric::new("Gross Margin", MetricValue::Percent(68.0), Delta::Percent(3.0)),
                Metric::new(
                    "Operating Expenses",
                    MetricValue::CompactCurrency(8_100_000.0),
                    Delta::Percent(-5.0),
                ),
                Metric::new(
                    "Cash Position",
                    MetricValue::CompactCurrency(5_400_000.0),
                    Delta::Percent(8.0),
                ),
            ],
            gauge: Some(revenue_gauge()),
            bars: None,
            table: None,
        }
    }

    fn sales(&self, rng: &mut StdRng) -> OverviewData {
        let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
        OverviewData {
            kpis: vec![
                Metric::new(
                    "Total Sales",
                    MetricValue::CompactCurrency(5_200_000.0),
                    Delta::Percent(15.0),
                ),
                Metric::new("New Customers", MetricValue::Count(127), Delta::Absolute(23.0)),
                Metric::new(
                    "Pipeline Value",
                    MetricValue::CompactCurrency(8_700_000.0),
                    Delta::Percent(7.0),
                ),
                Metric::new("Win Rate", MetricValue::Percent(62.0), Delta::Percent(5.0)),
            ],
            gauge: None,
            bars: Some(BarSeries {
                title: "Monthly Sales".to_string(),
                unit: "$".to_string(),
                bars: months
                    .into_iter()
                    .map(|m| CategoryValue::new(m, rng.gen_range(700_000.0..1_000_000.0_f64).round()))
                    .collect(),
            }),
            table: None,
        }
    }

    fn customer_hierarchy(&self, rng: &mut StdRng) -> Result<HierarchyData, DomainError> {
        let parents = ["Acme Holdings", "Globex Corporation", "Initech Group"];
        let regions = ["North", "South", "West"];

        let mut ids = Vec::new();
        let mut names = Vec::new();
        let mut parent_ids = Vec::new();
        let mut levels = Vec::new();
        let mut revenue = Vec::new();
        let mut next_id = 1;

        for parent in parents {
            let parent_id = format!("CUST-{:03}", next_id);
            next_id += 1;
            ids.push(Cell::Text(parent_id.clone()));
            names.push(Cell::text(parent));
            parent_ids.push(Cell::text(""));
            levels.push(Cell::Integer(1));
            revenue.push(Cell::Money(round_cents(rng.gen_range(500_000.0..2_000_000.0))));

            let children = rng.gen_range(1..=regions.len());
            for region in &regions[..children] {
                ids.push(Cell::Text(format!("CUST-{:03}", next_id)));
                next_id += 1;
                names.push(Cell::Text(format!("{} {}", parent, region)));
                parent_ids.push(Cell::Text(parent_id.clone()));
                levels.push(Cell::Integer(2));
                revenue.push(Cell::Money(round_cents(rng.gen_range(50_000.0..500_000.0))));
            }
        }

        let accounts = TabularDataset::new()
            .with_column("Customer ID", ids)?
            .with_column("Customer Name", names)?
            .with_column("Parent ID", parent_ids)?
            .with_column("Level", levels)?
            .with_column("Annual Revenue", revenue)?;

        Ok(HierarchyData { accounts })
    }

    fn inventory(&self, rng: &mut StdRng) -> Result<OverviewData, DomainError> {
        let items = [
            "Widget A",
            "Widget B",
            "Gadget Pro",
            "Bracket Kit",
            "Cable Set",
            "Sensor Module",
            "Power Supply",
            "Mounting Plate",
        ];

        let on_hand: Vec<i64> = items.iter().map(|_| rng.gen_range(0..500)).collect();
        let reorder: Vec<i64> = items.iter().map(|_| rng.gen_range(50..150)).collect();
        let status = on_hand
            .iter()
            .zip(&reorder)
            .map(|(have, point)| Cell::text(if have < point { "Low Stock" } else { "In Stock" }))
            .collect();

        let table = TabularDataset::new()
            .with_column(
                "SKU",
                (0..items.len())
                    .map(|i| Cell::Text(format!("SKU-{}", 1001 + i)))
                    .collect(),
            )?
            .with_column("Item", texts(&items))?
            .with_column("On Hand", on_hand.into_iter().map(Cell::Integer).collect())?
            .with_column("Reorder Point", reorder.into_iter().map(Cell::Integer).collect())?
            .with_column("Status", status)?;

        Ok(OverviewData {
            kpis: vec![
                Metric::new("Total SKUs", MetricValue::Count(1234), Delta::Absolute(12.0)),
                Metric::new(
                    "Stock Value",
                    MetricValue::CompactCurrency(2_100_000.0),
                    Delta::Percent(5.0),
                ),
                Metric::new("Low Stock Items", MetricValue::Count(23), Delta::Absolute(-3.0)),
                Metric::new("Turnover Rate", MetricValue::Ratio(4.2, "x"), Delta::Absolute(0.3)),
            ],
            gauge: None,
            bars: None,
            table: Some(table),
        })
    }
}

fn revenue_gauge() -> GaugeReading {
    GaugeReading {
        title: "Revenue".to_string(),
        value: 3.7,
        max: 5.0,
        prefix: "$".to_string(),
        suffix: "M".to_string(),
    }
}

fn texts(values: &[&str]) -> Vec<Cell> {
    values.iter().map(|v| Cell::text(*v)).collect()
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Every day of `year`, in order.
pub fn calendar_days(year: i32) -> Result<Vec<NaiveDate>, DomainError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(DomainError::InvalidYear(year))?;
    Ok(first.iter_days().take_while(|d| d.year() == year).collect())
}

/// Last day of each month of `year`.
pub fn month_ends(year: i32) -> Result<Vec<NaiveDate>, DomainError> {
    (1..=12u32)
        .map(|month| {
            let (y, m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
            NaiveDate::from_ymd_opt(y, m, 1)
                .and_then(|d| d.pred_opt())
                .ok_or(DomainError::InvalidYear(year))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seed: u64) -> GeneratorSettings {
        GeneratorSettings {
            seed,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            analytics_year: 2024,
        }
    }

    fn money_column(dataset: &TabularDataset, name: &str) -> Vec<f64> {
        dataset
            .column(name)
            .unwrap()
            .values
            .iter()
            .map(|c| c.as_f64().unwrap())
            .collect()
    }

    #[test]
    fn test_same_seed_gives_identical_data_for_every_page() {
        let a = MockDataGenerator::new(settings(7));
        let b = MockDataGenerator::new(settings(7));
        for page in Page::ALL {
            assert_eq!(a.generate(page).unwrap(), b.generate(page).unwrap(), "{}", page);
        }
    }

    #[test]
    fn test_visit_order_does_not_matter() {
        let generator = MockDataGenerator::new(settings(11));
        let first = generator.generate(Page::Billing).unwrap();
        generator.generate(Page::Analytics).unwrap();
        assert_eq!(generator.generate(Page::Billing).unwrap(), first);
    }

    #[test]
    fn test_different_seeds_change_random_fields() {
        let a = MockDataGenerator::new(settings(1)).generate(Page::Billing).unwrap();
        let b = MockDataGenerator::new(settings(2)).generate(Page::Billing).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_billing_amounts_within_range() {
        let PageData::Table(billing) = MockDataGenerator::new(settings(3))
            .generate(Page::Billing)
            .unwrap()
        else {
            panic!("billing should be a table");
        };
        assert_eq!(billing.row_count(), 5);
        for amount in money_column(&billing, "Amount") {
            assert!((1000.0..5000.0).contains(&amount));
        }
        assert_eq!(
            billing.column("Invoice ID").unwrap().values[0],
            Cell::text("INV-0001")
        );
        assert_eq!(
            billing.column("Due Date").unwrap().values[2],
            Cell::Date(NaiveDate::from_ymd_opt(2024, 7, 10).unwrap())
        );
    }

    #[test]
    fn test_analytics_covers_full_year() {
        let PageData::Analytics(data) = MockDataGenerator::new(settings(5))
            .generate(Page::Analytics)
            .unwrap()
        else {
            panic!("analytics data expected");
        };
        assert_eq!(
            data.available_metrics(),
            vec!["Revenue", "Customer Count", "Average Order Value"]
        );
        let revenue = data.metric("Revenue").unwrap();
        assert_eq!(revenue.points.len(), 366);
        assert!(revenue
            .points
            .iter()
            .all(|p| (800_000.0..1_200_000.0).contains(&p.value)));

        let customers = data.metric("Customer Count").unwrap();
        assert!(customers
            .points
            .windows(2)
            .all(|w| w[1].value > w[0].value));
    }

    #[test]
    fn test_calendar_days_handles_common_years() {
        assert_eq!(calendar_days(2023).unwrap().len(), 365);
        assert_eq!(calendar_days(2024).unwrap().len(), 366);
        let ends = month_ends(2024).unwrap();
        assert_eq!(ends[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(ends[11], NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_documents_counters_match_table() {
        let PageData::Documents(docs) = MockDataGenerator::new(settings(9))
            .generate(Page::Documents)
            .unwrap()
        else {
            panic!("documents data expected");
        };
        assert_eq!(docs.total_documents, 100);
        // Only the newest document is dated on the reference day
        assert_eq!(docs.recent_uploads, 1);
        let under_review = docs
            .documents
            .rows()
            .filter(|r| r.get("Status").and_then(Cell::as_text) == Some("Under Review"))
            .count();
        assert_eq!(docs.pending_review, under_review);
    }

    #[test]
    fn test_financial_kpis() {
        let PageData::Financial(financial) = MockDataGenerator::new(settings(0))
            .generate(Page::Financial)
            .unwrap()
        else {
            panic!("financial data expected");
        };
        let labels: Vec<&str> = financial.kpis.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Sales", "Expenses", "Revenue", "Receivables"]);
        assert_eq!(financial.revenue_trend.points.len(), 12);
        assert_eq!(financial.detailed_kpis.row_count(), 10);
    }

    #[test]
    fn test_hierarchy_children_reference_parents() {
        let PageData::Hierarchy(data) = MockDataGenerator::new(settings(4))
            .generate(Page::CustomerHierarchy)
            .unwrap()
        else {
            panic!("hierarchy data expected");
        };
        let parents: Vec<String> = data
            .accounts
            .rows()
            .filter(|r| r.get("Level") == Some(&Cell::Integer(1)))
            .filter_map(|r| r.get("Customer ID").and_then(Cell::as_text).map(String::from))
            .collect();
        assert_eq!(parents.len(), 3);
        for row in data.accounts.rows() {
            if row.get("Level") == Some(&Cell::Integer(2)) {
                let parent = row.get("Parent ID").and_then(Cell::as_text).unwrap();
                assert!(parents.iter().any(|p| p == parent));
            }
        }
    }
}
