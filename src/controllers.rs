pub mod api;
pub mod index;
pub mod search;

use axum::http::StatusCode;
use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;


#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
}

/// Renders `name` with `data` inside the shared layout.
pub fn render_page<T: Serialize>(
    registry: &Handlebars<'static>,
    title: &str,
    name: &str,
    data: &T,
) -> Result<Html<String>, handlebars::RenderError> {
    let page = TemplateViewModel {
        title: title.into(),
        body: registry.render(name, data)?,
    };
    Ok(Html(registry.render("template", &page)?))
}

pub async fn get_error_page(registry: &Handlebars<'static>, status: StatusCode) -> (StatusCode, Html<String>) {
    let body = registry
        .render("errors/500", &serde_json::json!({ "status": status.as_u16() }))
        .and_then(|body| {
            registry.render(
                "template",
                &TemplateViewModel {
                    title: "Error".into(),
                    body,
                },
            )
        })
        .unwrap_or_else(|e| {
            log::error!("Failed to render error page: {}", e);
            String::from("Something went wrong!")
        });
    (status, Html(body))
}
