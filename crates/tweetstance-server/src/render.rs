//! Server-side HTML rendering. Markup is assembled with `format!` and
//! escaped by hand; the charts are inline SVG so pages need no scripts or
//! asset pipeline.

use tweetstance_core::Sentiment;
use tweetstance_dataset::charts::{LabelCount, LabelShare, WordCount};

/// Site navigation: `(href, label)`, in menu order. Labels are kept exactly
/// as the original menu spelled them.
pub(crate) const NAV: &[(&str, &str)] = &[
    ("/", "Prediction"),
    ("/visualisation", "visualisation"),
    ("/team", "Development team"),
    ("/about", "About the Project"),
];

const STYLE: &str = "\
:root{color-scheme:light}\
body{font-family:system-ui,sans-serif;margin:0;color:#212529;background:#f8f9fa}\
header{background:#212529;color:#f8f9fa;padding:1.2rem 2rem}\
header h1{margin:0 0 .2rem}\
.subtitle{margin:0 0 .8rem;color:#ced4da}\
nav a{color:#f8f9fa;margin-right:1.2rem;text-decoration:none}\
nav a.active{border-bottom:2px solid #74c0fc}\
main{max-width:56rem;margin:1.5rem auto;padding:0 2rem}\
.info{background:#d0ebff;border-left:4px solid #1971c2;padding:.6rem .9rem}\
.success{background:#d3f9d8;border-left:4px solid #2f9e44;padding:.6rem .9rem}\
.error{background:#ffe3e3;border-left:4px solid #e03131;padding:.6rem .9rem}\
table{border-collapse:collapse;width:100%;margin:1rem 0}\
th,td{border:1px solid #dee2e6;padding:.4rem .6rem;text-align:left}\
label{display:block;margin-top:.6rem}\
textarea{width:100%;min-height:7rem;margin:.4rem 0;padding:.5rem;font:inherit}\
button{font:inherit;padding:.4rem .8rem;margin:.4rem 0;\
background:#1971c2;color:#fff;border:0;cursor:pointer}\
fieldset{border:1px solid #dee2e6;margin:.8rem 0;padding:.6rem .9rem}\
fieldset label{display:inline-block;margin:0 .8rem 0 0}\
.chart{max-width:100%;height:auto}\
.chart .value{font-size:14px;fill:#212529}\
.chart .axis{font-size:14px;fill:#495057}\
.cloud span{margin-right:.5rem;line-height:1.6}\
.team{display:flex;flex-wrap:wrap;gap:1.2rem}\
.team figure{margin:0;text-align:center}\
.team img{width:120px;height:120px;border-radius:50%;background:#dee2e6}\
.team .bio{max-width:16rem;font-size:.9rem;text-align:left;color:#495057}\
.request-id{color:#868e96;font-size:.85rem}";

/// Escape text for interpolation into HTML bodies and attribute values.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared chrome: title, subtitle, nav.
pub(crate) fn page(active: &str, content: &str) -> String {
    let mut nav = String::new();
    for (href, label) in NAV {
        let class = if *href == active { " class=\"active\"" } else { "" };
        nav.push_str(&format!("<a href=\"{href}\"{class}>{label}</a>"));
    }
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Tweet Classifier</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <header>\n<h1>Tweet Classifier</h1>\n\
         <p class=\"subtitle\">Climate change tweet classification</p>\n\
         <nav>{nav}</nav>\n</header>\n<main>\n{content}\n</main>\n</body>\n</html>\n"
    )
}

pub(crate) fn info_box(text: &str) -> String {
    format!("<p class=\"info\">{}</p>", escape_html(text))
}

pub(crate) fn success_banner(text: &str) -> String {
    format!("<p class=\"success\">{}</p>", escape_html(text))
}

/// Full error page with the request ID for correlating against the logs.
pub(crate) fn error_page(
    status: axum::http::StatusCode,
    message: &str,
    request_id: &str,
) -> String {
    let content = format!(
        "<h2>{code} {reason}</h2>\n<p class=\"error\">{message}</p>\n\
         <p class=\"request-id\">request id: {request_id}</p>",
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape_html(message),
        request_id = escape_html(request_id),
    );
    page("", &content)
}

/// Chart color for a label. Stable across the bar chart, pie chart, and
/// prediction banner accents.
pub(crate) fn label_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Anti => "#e03131",
        Sentiment::Neutral => "#868e96",
        Sentiment::Pro => "#2f9e44",
        Sentiment::News => "#1971c2",
    }
}

/// Vertical bar chart of label counts. Every bar carries its exact count as
/// a text node.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn bar_chart_svg(counts: &[LabelCount]) -> String {
    if counts.is_empty() {
        return "<p>No records to plot.</p>".to_string();
    }
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1) as f32;
    let bar_width = 72.0;
    let gap = 28.0;
    let plot_height = 220.0;
    let width = counts.len() as f32 * (bar_width + gap) + gap;

    let mut svg = format!(
        "<svg class=\"chart\" viewBox=\"0 0 {width:.0} 280\" role=\"img\" \
         aria-label=\"Tweets per label\">"
    );
    for (i, label) in counts.iter().enumerate() {
        let height = label.count as f32 / max * plot_height;
        let x = gap + i as f32 * (bar_width + gap);
        let y = 20.0 + (plot_height - height);
        let center = x + bar_width / 2.0;
        let color = label_color(label.sentiment);
        let name = label.sentiment.name();
        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.0}\" \
             height=\"{height:.1}\" fill=\"{color}\"><title>{name}: {count}</title></rect>",
            count = label.count,
        ));
        svg.push_str(&format!(
            "<text x=\"{center:.1}\" y=\"{top:.1}\" text-anchor=\"middle\" \
             class=\"value\">{count}</text>",
            top = y - 6.0,
            count = label.count,
        ));
        svg.push_str(&format!(
            "<text x=\"{center:.1}\" y=\"262\" text-anchor=\"middle\" \
             class=\"axis\">{name}</text>"
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Pie chart of label shares, starting at twelve o'clock and sweeping
/// clockwise. The legend spells out each share to one decimal.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn pie_chart_svg(shares: &[LabelShare]) -> String {
    if shares.is_empty() {
        return "<p>No records to plot.</p>".to_string();
    }
    let cx = 140.0_f32;
    let cy = 140.0_f32;
    let r = 120.0_f32;

    let mut svg = String::from(
        "<svg class=\"chart\" viewBox=\"0 0 430 280\" role=\"img\" aria-label=\"Label shares\">",
    );

    if shares.len() == 1 {
        // One label means a full disc; the arc path would degenerate.
        let color = label_color(shares[0].sentiment);
        svg.push_str(&format!(
            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{color}\"/>"
        ));
    } else {
        let mut angle = -90.0_f32;
        for share in shares {
            let sweep = share.percent / 100.0 * 360.0;
            let (x1, y1) = point_at(cx, cy, r, angle);
            let (x2, y2) = point_at(cx, cy, r, angle + sweep);
            let large_arc = i32::from(sweep > 180.0);
            let color = label_color(share.sentiment);
            svg.push_str(&format!(
                "<path d=\"M{cx} {cy} L{x1:.2} {y1:.2} A{r} {r} 0 {large_arc} 1 \
                 {x2:.2} {y2:.2} Z\" fill=\"{color}\"/>"
            ));
            angle += sweep;
        }
    }

    for (i, share) in shares.iter().enumerate() {
        let y = 40 + i * 26;
        let color = label_color(share.sentiment);
        svg.push_str(&format!(
            "<rect x=\"300\" y=\"{top}\" width=\"14\" height=\"14\" fill=\"{color}\"/>",
            top = y - 11,
        ));
        svg.push_str(&format!(
            "<text x=\"322\" y=\"{y}\" class=\"axis\">{name} {percent:.1}%</text>",
            name = share.sentiment.name(),
            percent = share.percent,
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn point_at(cx: f32, cy: f32, r: f32, angle_deg: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

const CLOUD_COLORS: &[&str] = &["#1971c2", "#2f9e44", "#e8590c", "#862e9c", "#868e96"];

/// Word cloud as sized inline spans. Font size scales linearly from 12px up
/// to 48px for the most frequent word; hovering shows the count.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn word_cloud_html(words: &[WordCount]) -> String {
    if words.is_empty() {
        return "<p>No words to plot.</p>".to_string();
    }
    let max = words.iter().map(|w| w.count).max().unwrap_or(1).max(1) as f32;
    let mut html = String::from("<p class=\"cloud\">");
    for (i, word) in words.iter().enumerate() {
        let size = 12.0 + (word.count as f32 / max) * 36.0;
        let color = CLOUD_COLORS[i % CLOUD_COLORS.len()];
        html.push_str(&format!(
            "<span style=\"font-size:{size:.0}px;color:{color}\" \
             title=\"{count}\">{word}</span> ",
            count = word.count,
            word = escape_html(&word.word),
        ));
    }
    html.push_str("</p>");
    html
}
