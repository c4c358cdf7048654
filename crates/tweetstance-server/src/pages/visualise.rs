use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};
use serde::Deserialize;

use tweetstance_dataset::charts;
use tweetstance_dataset::TweetRecord;

use crate::middleware::RequestId;
use crate::render;

use super::{AppState, PageError};

const GENERAL_INFO: &str = "General Information";
const RAW_HEADER: &str = "Raw Twitter data and label";
const WORD_LIMIT: usize = 60;

#[derive(Debug, Deserialize)]
pub(super) struct VisualiseQuery {
    raw: Option<String>,
    chart: Option<String>,
}

/// Plot types the page offers, mirroring the radio control. A closed set:
/// anything else in the query string is rejected, not defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bar,
    Pie,
    WordCloud,
}

impl ChartKind {
    const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Pie, ChartKind::WordCloud];

    fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.param() == value)
    }

    fn param(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Pie => "Pie",
            ChartKind::WordCloud => "Word Cloud",
        }
    }
}

/// `GET /visualisation` -- the data exploration page. The raw-data toggle
/// and plot chooser round-trip through query parameters.
pub(super) async fn show(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<VisualiseQuery>,
) -> Result<Html<String>, PageError> {
    let show_raw = query.raw.is_some();
    let chart = match query.chart.as_deref() {
        None => ChartKind::Bar,
        Some(value) => ChartKind::from_param(value)
            .ok_or_else(|| PageError::unknown_chart(req_id.0.clone(), value.to_string()))?,
    };

    let dataset = &state.context.dataset;
    let mut content = String::new();
    content.push_str(&render::info_box(GENERAL_INFO));
    content.push_str(&format!("<h2>{RAW_HEADER}</h2>"));

    content.push_str("<form method=\"get\" action=\"/visualisation\">");
    content.push_str(&format!(
        "<label><input type=\"checkbox\" name=\"raw\" value=\"1\"{}> Show raw data</label>",
        if show_raw { " checked" } else { "" },
    ));
    if show_raw {
        content.push_str("<fieldset><legend>Plot type:</legend>");
        for kind in ChartKind::ALL {
            let checked = if kind == chart { " checked" } else { "" };
            content.push_str(&format!(
                "<label><input type=\"radio\" name=\"chart\" value=\"{param}\"{checked}> \
                 {param}</label>",
                param = kind.param(),
            ));
        }
        content.push_str("</fieldset>");
    }
    content.push_str("<button type=\"submit\">Update view</button></form>");

    if show_raw {
        content.push_str(&raw_table(dataset.head(5)));
        let chart_html = match chart {
            ChartKind::Bar => format!(
                "<h3>Sentiment occurrence in the dataset</h3>{}",
                render::bar_chart_svg(&charts::label_counts(dataset)),
            ),
            ChartKind::Pie => format!(
                "<h3>Percentage of each sentiment in the dataset</h3>{}",
                render::pie_chart_svg(&charts::label_shares(dataset)),
            ),
            ChartKind::WordCloud => format!(
                "<h3>Word cloud of the most frequent words across all tweets</h3>{}",
                render::word_cloud_html(&charts::word_frequencies(dataset, WORD_LIMIT)),
            ),
        };
        content.push_str(&chart_html);
    }

    Ok(Html(render::page("/visualisation", &content)))
}

fn raw_table(records: &[TweetRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            record.sentiment.code(),
            render::escape_html(&record.message),
        ));
    }
    format!(
        "<table><thead><tr><th>sentiment</th><th>message</th></tr></thead>\
         <tbody>{rows}</tbody></table>"
    )
}
