// KPI metric model and number formatting
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    /// `$3,735,857`
    Currency(f64),
    /// `$15.2M`
    CompactCurrency(f64),
    /// `68%`
    Percent(f64),
    /// `1,234`
    Count(i64),
    /// `4.2x`
    Ratio(f64, &'static str),
    /// `4.5/5`
    Score { value: f64, max: f64 },
}

impl MetricValue {
    pub fn display(&self) -> String {
        match self {
            MetricValue::Currency(v) => format_currency(*v),
            MetricValue::CompactCurrency(v) => format_compact_currency(*v),
            MetricValue::Percent(v) => format!("{}%", trim_decimal(*v)),
            MetricValue::Count(v) => format_thousands(*v),
            MetricValue::Ratio(v, suffix) => format!("{}{}", trim_decimal(*v), suffix),
            MetricValue::Score { value, max } => {
                format!("{}/{}", trim_decimal(*value), trim_decimal(*max))
            }
        }
    }
}

/// Period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Delta {
    Percent(f64),
    Absolute(f64),
}

impl Delta {
    pub fn display(&self) -> String {
        match self {
            Delta::Percent(v) => format!("{}{}%", sign(*v), trim_decimal(v.abs())),
            Delta::Absolute(v) => format!("{}{}", sign(*v), trim_decimal(v.abs())),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Delta::Percent(v) | Delta::Absolute(v) => *v < 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    pub delta: Option<Delta>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: MetricValue, delta: Delta) -> Self {
        Self {
            label: label.into(),
            value,
            delta: Some(delta),
        }
    }

    pub fn without_delta(label: impl Into<String>, value: MetricValue) -> Self {
        Self {
            label: label.into(),
            value,
            delta: None,
        }
    }
}

fn sign(v: f64) -> &'static str {
    if v < 0.0 { "-" } else { "+" }
}

/// Whole numbers print bare, anything else with one decimal.
fn trim_decimal(v: f64) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_thousands(v: i64) -> String {
    let grouped = group_digits(&v.unsigned_abs().to_string());
    if v < 0 { format!("-{}", grouped) } else { grouped }
}

/// Whole dollars with thousands separators.
pub fn format_currency(v: f64) -> String {
    let dollars = v.abs().round() as u64;
    let body = format!("${}", group_digits(&dollars.to_string()));
    if v < 0.0 && dollars > 0 { format!("-{}", body) } else { body }
}

/// Dollars and cents with thousands separators.
pub fn format_currency_cents(v: f64) -> String {
    let cents = (v.abs() * 100.0).round() as u64;
    let body = format!(
        "${}.{:02}",
        group_digits(&(cents / 100).to_string()),
        cents % 100
    );
    if v < 0.0 && cents > 0 { format!("-{}", body) } else { body }
}

/// `$15.2M`, `$850.0K`, `$2.3B`; plain dollars below a thousand.
pub fn format_compact_currency(v: f64) -> String {
    let magnitude = v.abs();
    let (scaled, suffix) = if magnitude >= 1e9 {
        (magnitude / 1e9, "B")
    } else if magnitude >= 1e6 {
        (magnitude / 1e6, "M")
    } else if magnitude >= 1e3 {
        (magnitude / 1e3, "K")
    } else {
        return format_currency(v);
    };
    let prefix = if v < 0.0 { "-" } else { "" };
    format!("{}${:.1}{}", prefix, scaled, suffix)
}
