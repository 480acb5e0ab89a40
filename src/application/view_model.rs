// View model - what a page renders to, independent of HTML or JSON
use crate::application::page_data::GaugeReading;
use crate::domain::dataset::{CategoryValue, TabularDataset, TimeSeries};
use crate::domain::metric::Metric;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
    pub negative: bool,
}

impl From<&Metric> for MetricTile {
    fn from(metric: &Metric) -> Self {
        Self {
            label: metric.label.clone(),
            value: metric.value.display(),
            delta: metric.delta.map(|d| d.display()),
            negative: metric.delta.map(|d| d.is_negative()).unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Increase,
    Decrease,
    Total,
}

/// One bar of a waterfall, spanning `start..end` on the value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStep {
    pub label: String,
    pub kind: StepKind,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Text {
        body: String,
    },
    Preformatted {
        heading: String,
        body: String,
    },
    Metrics {
        heading: Option<String>,
        tiles: Vec<MetricTile>,
    },
    /// Clickable statement shortcuts
    Tiles {
        heading: String,
        labels: Vec<String>,
    },
    Table {
        heading: Option<String>,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    LineChart {
        heading: String,
        unit: Option<String>,
        points: Vec<ChartPoint>,
    },
    BarChart {
        heading: String,
        unit: Option<String>,
        bars: Vec<CategoryValue>,
    },
    Gauge {
        heading: String,
        gauge: GaugeReading,
    },
    Waterfall {
        heading: String,
        steps: Vec<WaterfallStep>,
    },
    /// Single choice submitted back as query parameter `param`
    Selector {
        label: String,
        param: String,
        options: Vec<String>,
        selected: Option<String>,
    },
    Search {
        label: String,
        param: String,
        placeholder: String,
        query: Option<String>,
    },
    /// Stands in for a block whose data could not be displayed.
    Notice {
        message: String,
    },
}

impl Block {
    pub fn text(body: impl Into<String>) -> Self {
        Block::Text { body: body.into() }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Block::Notice {
            message: message.into(),
        }
    }

    pub fn metrics(heading: Option<&str>, metrics: &[Metric]) -> Self {
        Block::Metrics {
            heading: heading.map(String::from),
            tiles: metrics.iter().map(MetricTile::from).collect(),
        }
    }

    /// Table block, or a notice naming the missing columns when the dataset
    /// does not have the expected shape.
    pub fn table(heading: Option<&str>, dataset: &TabularDataset, required: &[&str]) -> Self {
        if let Err(e) = dataset.require_columns(required) {
            return Block::notice(format!(
                "Cannot display {}: {}",
                heading.unwrap_or("table"),
                e
            ));
        }

        Block::Table {
            heading: heading.map(String::from),
            columns: dataset.column_names().into_iter().map(String::from).collect(),
            rows: dataset
                .rows()
                .map(|row| row.cells().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    pub fn line_chart(heading: &str, series: &TimeSeries, unit: Option<&str>) -> Self {
        if series.is_empty() {
            return Block::notice(format!(
                "Cannot display {}: series '{}' has no points",
                heading, series.name
            ));
        }

        Block::LineChart {
            heading: heading.to_string(),
            unit: unit.map(String::from),
            points: series
                .points
                .iter()
                .map(|p| ChartPoint {
                    label: p.date.format("%Y-%m-%d").to_string(),
                    value: p.value,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub title: String,
    pub caption: Option<String>,
    pub blocks: Vec<Block>,
}

impl View {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn notices(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Notice { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}
