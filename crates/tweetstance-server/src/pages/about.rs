use axum::response::Html;

use crate::render;

const ABOUT: &str = "<h2>Description</h2>\n\
<p>Many companies are built around lessening one's environmental impact or \
carbon footprint. They offer products and services that are environmentally \
friendly and sustainable, in line with their values and ideals. They would \
like to determine how people perceive climate change and whether or not they \
believe it is a real threat. This would add to their market research efforts \
in gauging how their product or service may be received.</p>\n\
<p>This app classifies tweets about climate change into one of four groups: \
news, pro, neutral, and anti, using machine learning models trained on a \
collection of historical tweets.</p>\n\
<p>Providing an accurate and robust solution to this task gives companies \
access to a broad base of consumer sentiment, spanning multiple demographic \
and geographic categories, increasing their insights and informing future \
marketing strategies.</p>";

/// `GET /about` -- static project blurb.
pub(super) async fn show() -> Html<String> {
    Html(render::page("/about", ABOUT))
}
