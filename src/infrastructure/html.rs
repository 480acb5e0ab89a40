// HTML rendering - full dashboard document with inline SVG charts
use super::svg;
use crate::application::dashboard_service::{NavEntry, RenderedPage};
use crate::application::view_model::{Block, MetricTile};
use crate::domain::filters::{Company, Department, FilterSelection};
use crate::domain::page::Section;
use std::fmt::Write;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a full dashboard document.
pub fn render_document(page: &RenderedPage) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - NetSuite Dashboard</title>
    <style>{css}</style>
</head>
<body>
    {topbar}
    <div class="layout">
        {sidebar}
        <main>
            {main}
        </main>
    </div>
</body>
</html>"#,
        title = html_escape(&page.view.title),
        css = inline_css(),
        topbar = render_topbar(&page.navigation, page.can_go_back),
        sidebar = render_sidebar(page),
        main = render_main(page),
    )
}

fn render_topbar(entries: &[NavEntry], can_go_back: bool) -> String {
    let links: String = entries
        .iter()
        .filter(|e| e.section == Section::Main)
        .map(nav_link)
        .collect();
    let back = if can_go_back {
        r#"<a class="util" href="/back">Back</a>"#
    } else {
        ""
    };
    format!(
        r#"<nav class="topbar"><a class="brand" href="/home">NetSuite Dashboard</a>{links}{back}</nav>"#
    )
}

fn nav_link(entry: &NavEntry) -> String {
    format!(
        r#"<a href="/pages/{slug}"{class}>{title}</a>"#,
        slug = entry.slug,
        class = if entry.active { r#" class="active""# } else { "" },
        title = html_escape(entry.title),
    )
}

fn render_sidebar(page: &RenderedPage) -> String {
    let reminders: String = page
        .reminders
        .iter()
        .map(|r| format!("<li>{}</li>", html_escape(r)))
        .collect();
    let shortcuts: String = page
        .navigation
        .iter()
        .filter(|e| e.section == Section::Shortcut)
        .map(|e| format!("<li>{}</li>", nav_link(e)))
        .collect();

    format!(
        r#"<aside class="sidebar">
            <h3>Reminders</h3><ul class="reminders">{reminders}</ul>
            <h3>Navigation Shortcut Group</h3><ul class="shortcuts">{shortcuts}</ul>
            {filters}
        </aside>"#,
        filters = render_filters(&page.filters),
    )
}

fn render_filters(filters: &FilterSelection) -> String {
    let companies: String = Company::options()
        .into_iter()
        .map(|c| {
            let selected = if c == filters.company { " selected" } else { "" };
            format!("<option{selected}>{}</option>", html_escape(&c.to_string()))
        })
        .collect();
    let departments = filters
        .departments
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(",");
    let department_hint = Department::ALL
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"<h3>Filters</h3>
            <form class="filters" method="post" action="/filters">
                <label>From <input type="date" name="start" value="{start}"></label>
                <label>To <input type="date" name="end" value="{end}"></label>
                <label>Company <select name="company">{companies}</select></label>
                <label>Department <input type="text" name="departments" value="{departments}" placeholder="{hint}"></label>
                <button type="submit">Apply</button>
            </form>
            <form method="post" action="/refresh"><button type="submit">Refresh Data</button></form>"#,
        start = filters.date_range.start.format("%Y-%m-%d"),
        end = filters.date_range.end.format("%Y-%m-%d"),
        departments = html_escape(&departments),
        hint = html_escape(&department_hint),
    )
}

fn render_main(page: &RenderedPage) -> String {
    let mut out = format!("<h1>{}</h1>", html_escape(&page.view.title));
    if let Some(caption) = &page.view.caption {
        let _ = write!(out, r#"<p class="caption">{}</p>"#, html_escape(caption));
    }
    if !page.filters_applied {
        out.push_str(r#"<p class="note">Sidebar filters are saved with your session but are not yet applied to this data.</p>"#);
    }
    for block in &page.view.blocks {
        out.push_str(&render_block(block, page.page.slug()));
    }
    out
}

fn render_block(block: &Block, slug: &str) -> String {
    match block {
        Block::Text { body } => format!("<p>{}</p>", html_escape(body)),
        Block::Preformatted { heading, body } => format!(
            "<h2>{}</h2><pre>{}</pre>",
            html_escape(heading),
            html_escape(body)
        ),
        Block::Metrics { heading, tiles } => {
            let tiles: String = tiles.iter().map(render_metric).collect();
            format!(
                r#"{}<div class="metrics">{}</div>"#,
                heading_html(heading.as_deref()),
                tiles
            )
        }
        Block::Tiles { heading, labels } => {
            let buttons: String = labels
                .iter()
                .map(|l| format!(r#"<span class="tile">{}</span>"#, html_escape(l)))
                .collect();
            format!(r#"<h2>{}</h2><div class="tiles">{}</div>"#, html_escape(heading), buttons)
        }
        Block::Table {
            heading,
            columns,
            rows,
        } => render_table(heading.as_deref(), columns, rows),
        Block::LineChart {
            heading,
            unit,
            points,
        } => format!(
            "<h2>{}</h2>{}{}",
            html_escape(heading),
            unit_html(unit.as_deref()),
            svg::line_chart(heading, points)
        ),
        Block::BarChart {
            heading,
            unit,
            bars,
        } => format!(
            "<h2>{}</h2>{}{}",
            html_escape(heading),
            unit_html(unit.as_deref()),
            svg::bar_chart(heading, bars)
        ),
        Block::Gauge { heading, gauge } => {
            format!("<h2>{}</h2>{}", html_escape(heading), svg::gauge(gauge))
        }
        Block::Waterfall { heading, steps } => format!(
            "<h2>{}</h2>{}",
            html_escape(heading),
            svg::waterfall(heading, steps)
        ),
        Block::Selector {
            label,
            param,
            options,
            selected,
        } => {
            let options: String = options
                .iter()
                .map(|o| {
                    let is_selected = selected.as_deref() == Some(o.as_str());
                    format!(
                        "<option{}>{}</option>",
                        if is_selected { " selected" } else { "" },
                        html_escape(o)
                    )
                })
                .collect();
            format!(
                r#"<form method="get" action="/pages/{slug}"><label>{label} <select name="{param}">{options}</select></label><button type="submit">Show</button></form>"#,
                label = html_escape(label),
                param = html_escape(param),
            )
        }
        Block::Search {
            label,
            param,
            placeholder,
            query,
        } => format!(
            r#"<form method="get" action="/pages/{slug}"><label>{label} <input type="search" name="{param}" placeholder="{placeholder}" value="{query}"></label><button type="submit">Search</button></form>"#,
            label = html_escape(label),
            param = html_escape(param),
            placeholder = html_escape(placeholder),
            query = html_escape(query.as_deref().unwrap_or("")),
        ),
        Block::Notice { message } => {
            format!(r#"<div class="notice" role="alert">{}</div>"#, html_escape(message))
        }
    }
}

fn heading_html(heading: Option<&str>) -> String {
    heading
        .map(|h| format!("<h2>{}</h2>", html_escape(h)))
        .unwrap_or_default()
}

fn unit_html(unit: Option<&str>) -> String {
    unit.map(|u| format!(r#"<p class="unit">{}</p>"#, html_escape(u)))
        .unwrap_or_default()
}

fn render_metric(tile: &MetricTile) -> String {
    let delta = tile
        .delta
        .as_deref()
        .map(|d| {
            format!(
                r#"<div class="delta {}">{}</div>"#,
                if tile.negative { "down" } else { "up" },
                html_escape(d)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="metric"><div class="label">{}</div><div class="value">{}</div>{}</div>"#,
        html_escape(&tile.label),
        html_escape(&tile.value),
        delta
    )
}

fn render_table(heading: Option<&str>, columns: &[String], rows: &[Vec<String>]) -> String {
    let header: String = columns
        .iter()
        .map(|c| format!("<th>{}</th>", html_escape(c)))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|c| format!("<td>{}</td>", html_escape(c)))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    format!(
        "{}<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        heading_html(heading),
        header,
        body
    )
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; background: #f4f6f9; color: #222; }
.topbar { display: flex; gap: 1rem; align-items: center; padding: .6rem 1rem; background: #24385b; }
.topbar a { color: #dfe6f2; text-decoration: none; font-size: .9rem; }
.topbar a.active, .topbar a.brand { color: #fff; font-weight: 600; }
.topbar .util { margin-left: auto; }
.layout { display: flex; align-items: flex-start; }
.sidebar { width: 260px; padding: 1rem; background: #fff; border-right: 1px solid #dde3ea; min-height: 100vh; }
.sidebar ul { padding-left: 1.1rem; }
.sidebar a.active { font-weight: 600; }
.filters label { display: block; margin-bottom: .5rem; font-size: .85rem; }
main { flex: 1; padding: 1rem 2rem; }
.caption, .unit { color: #666; }
.note { font-size: .8rem; color: #8a6d3b; background: #fcf8e3; padding: .4rem .6rem; border-radius: 4px; }
.metrics, .tiles { display: flex; gap: 1rem; flex-wrap: wrap; }
.metric { background: #fff; padding: 10px; border-radius: 5px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); min-width: 160px; }
.metric .label { font-size: .8rem; color: #555; }
.metric .value { font-size: 1.5rem; font-weight: 600; }
.delta.up { color: #2e7d32; }
.delta.down { color: #c62828; }
.tile { background: #fff; border: 1px solid #ccd5e0; padding: .5rem 1rem; border-radius: 4px; }
table { border-collapse: collapse; width: 100%; background: #fff; margin-bottom: 1rem; }
th, td { border-bottom: 1px solid #e3e8ee; padding: .4rem .6rem; text-align: left; font-size: .85rem; }
.chart { width: 100%; max-width: 720px; background: #fff; }
.gauge { width: 240px; }
.notice { background: #fdecea; color: #611a15; padding: .6rem 1rem; border-radius: 4px; margin: .5rem 0; }
pre { background: #fff; padding: .8rem; border: 1px solid #dde3ea; }
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view_model::View;
    use crate::domain::page::Page;
    use chrono::NaiveDate;

    fn rendered(view: View) -> RenderedPage {
        RenderedPage {
            page: Page::Analytics,
            generation: 0,
            navigation: Page::ALL
                .into_iter()
                .map(|p| NavEntry {
                    title: p.title(),
                    slug: p.slug(),
                    section: p.section(),
                    active: p == Page::Analytics,
                })
                .collect(),
            can_go_back: false,
            filters: FilterSelection::default_for(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
            filters_applied: false,
            reminders: vec!["Invoices > 30 Days > $5K"],
            view,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_document_layout() {
        let mut view = View::new("Analytics Dashboard");
        view.push(Block::notice("Metric 'Churn' is not available"));
        let html = render_document(&rendered(view));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<a href="/pages/analytics" class="active">Analytics</a>"#));
        assert!(html.contains(r#"href="/pages/customer-hierarchy""#));
        assert!(html.contains("Invoices &gt; 30 Days &gt; $5K"));
        assert!(html.contains(r#"value="2024-05-31""#));
        assert!(html.contains(r#"<div class="notice" role="alert">Metric &#39;Churn&#39; is not available</div>"#));
        assert!(!html.contains(r#"href="/back""#));
    }

    #[test]
    fn test_selector_posts_back_to_page() {
        let block = Block::Selector {
            label: "Select Metric".to_string(),
            param: "metric".to_string(),
            options: vec!["Revenue".to_string(), "Customer Count".to_string()],
            selected: Some("Customer Count".to_string()),
        };
        let html = render_block(&block, "analytics");
        assert!(html.contains(r#"action="/pages/analytics""#));
        assert!(html.contains("<option selected>Customer Count</option>"));
        assert!(html.contains("<option>Revenue</option>"));
    }
}
