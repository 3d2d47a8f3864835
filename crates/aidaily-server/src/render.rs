//! Server-rendered HTML dashboard.

use std::fmt::Write as _;

use aidaily_core::{ExtractionResult, MinFunding, RecordFilter, RoundFilter};
use aidaily_report::Digest;
use chrono::{DateTime, Utc};

/// Everything the dashboard page shows for one request.
pub(crate) struct DashboardView<'a> {
    pub filter: RecordFilter,
    pub digest: &'a Digest,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Non-fatal problems shown above the records.
    pub notices: &'a [String],
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn render_dashboard(view: &DashboardView<'_>) -> String {
    let mut html = String::new();
    html.push_str(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AI Investment Daily</title>\n</head>\n<body>\n<h1>AI Investment Daily</h1>\n",
    );

    let updated = view.fetched_at.map_or_else(
        || "never".to_string(),
        |at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    let _ = writeln!(html, "<p class=\"updated\">Last updated: {updated}</p>");

    for notice in view.notices {
        let _ = writeln!(
            html,
            "<p class=\"notice\" role=\"alert\">{}</p>",
            escape_html(notice)
        );
    }

    render_filter_form(&mut html, view.filter);
    render_counters(&mut html, view.digest);
    if !view.filter.is_inactive() {
        let _ = writeln!(
            html,
            "<p class=\"filtered\">Showing {} of {} articles</p>",
            view.digest.filtered_count, view.digest.summary.article_count
        );
    }
    render_top_deals(&mut html, &view.digest.top_deals);
    render_table(&mut html, view.digest);

    html.push_str("<h2>Newsletter</h2>\n");
    let _ = writeln!(
        html,
        "<pre class=\"newsletter\">{}</pre>",
        escape_html(&view.digest.newsletter)
    );

    html.push_str("</body>\n</html>\n");
    html
}

fn render_filter_form(html: &mut String, filter: RecordFilter) {
    html.push_str("<form method=\"get\" action=\"/\">\n");

    html.push_str("<label>Minimum funding <select name=\"min_funding\">\n");
    for option in MinFunding::ALL {
        let selected = if option == filter.min_funding { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            option.as_param(),
            escape_html(&option.to_string())
        );
    }
    html.push_str("</select></label>\n");

    html.push_str("<label>Round <select name=\"round\">\n");
    for option in RoundFilter::ALL {
        let selected = if option == filter.round { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{option}</option>",
            option.as_param()
        );
    }
    html.push_str("</select></label>\n");

    html.push_str("<button type=\"submit\">Apply</button>\n</form>\n");
}

fn render_counters(html: &mut String, digest: &Digest) {
    let summary = digest.summary;
    let _ = writeln!(
        html,
        "<ul class=\"counters\">\n\
         <li>Companies: <strong>{}</strong></li>\n\
         <li>Articles: <strong>{}</strong></li>\n\
         <li>With funding: <strong>{}</strong></li>\n\
         </ul>",
        summary.distinct_companies, summary.article_count, summary.funded_count
    );
}

fn render_top_deals(html: &mut String, deals: &[ExtractionResult]) {
    html.push_str("<h2>Top deals</h2>\n");
    if deals.is_empty() {
        html.push_str("<p>No funded deals found.</p>\n");
        return;
    }
    html.push_str("<ol class=\"top-deals\">\n");
    for deal in deals {
        let company = deal.company.as_deref().unwrap_or("Unknown company");
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a>: {}</li>",
            escape_html(&deal.link),
            escape_html(company),
            escape_html(&deal.funding_label())
        );
    }
    html.push_str("</ol>\n");
}

fn render_table(html: &mut String, digest: &Digest) {
    html.push_str("<h2>Investments</h2>\n");
    html.push_str(
        "<table>\n<thead><tr><th>Company</th><th>Funding</th><th>Round</th>\
         <th>Investors</th><th>Article</th><th>Link</th></tr></thead>\n<tbody>\n",
    );
    for row in &digest.rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"{}\">Read</a></td></tr>",
            escape_html(&row.company),
            escape_html(&row.funding),
            escape_html(&row.round),
            escape_html(&row.investors),
            escape_html(&row.title),
            escape_html(&row.link)
        );
    }
    html.push_str("</tbody>\n</table>\n");
    if digest.rows.is_empty() {
        html.push_str("<p>No articles match the current filters.</p>\n");
    }
}
