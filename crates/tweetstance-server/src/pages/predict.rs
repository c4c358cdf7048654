use axum::{extract::State, response::Html, Extension, Form};
use serde::Deserialize;

use tweetstance_model::ModelChoice;

use crate::middleware::RequestId;
use crate::render;

use super::{AppState, PageError};

const MODEL_HELP: &str = "Here you can choose one of our models";
const DEFAULT_TEXT: &str = "Type Here";

#[derive(Debug, Deserialize)]
pub(super) struct ClassifyForm {
    model: String,
    text: String,
}

/// `GET /` -- the prediction form.
pub(super) async fn show() -> Html<String> {
    Html(prediction_page(None, DEFAULT_TEXT, None))
}

/// `POST /classify` -- run the chosen model over the pasted text and
/// re-render the form with the verdict banner.
pub(super) async fn classify(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Form(form): Form<ClassifyForm>,
) -> Result<Html<String>, PageError> {
    let choice: ModelChoice = form
        .model
        .parse()
        .map_err(|e| PageError::model(req_id.0.clone(), e))?;

    let prediction = state
        .context
        .store
        .classify(choice, &form.text)
        .map_err(|e| PageError::model(req_id.0.clone(), e))?;

    tracing::info!(
        model = %choice,
        sentiment = %prediction.sentiment,
        request_id = %req_id.0,
        "text classified"
    );

    let banner = format!(
        "Text Categorized as: {}",
        prediction.sentiment.description()
    );
    Ok(Html(prediction_page(Some(choice), &form.text, Some(&banner))))
}

fn prediction_page(selected: Option<ModelChoice>, text: &str, banner: Option<&str>) -> String {
    // The first model is pre-selected, like a freshly rendered radio group.
    let active = selected.unwrap_or(ModelChoice::ALL[0]);
    let mut radios = String::new();
    for choice in ModelChoice::ALL {
        let checked = if choice == active { " checked" } else { "" };
        radios.push_str(&format!(
            "<label><input type=\"radio\" name=\"model\" value=\"{label}\"{checked}> \
             {label}</label>",
            label = choice.label(),
        ));
    }

    let banner_html = banner.map(render::success_banner).unwrap_or_default();

    let content = format!(
        "{info}\n{banner_html}\n<form method=\"post\" action=\"/classify\">\n\
         <fieldset><legend>Choose model:</legend>{radios}</fieldset>\n\
         <label for=\"text\">Enter Text</label>\n\
         <textarea id=\"text\" name=\"text\">{text}</textarea>\n\
         <button type=\"submit\">Classify</button>\n</form>",
        info = render::info_box(MODEL_HELP),
        text = render::escape_html(text),
    );
    render::page("/", &content)
}
