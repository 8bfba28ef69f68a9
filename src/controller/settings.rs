use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};

use crate::prefs::FontSize;
use crate::state::AppState;
use crate::view;

async fn render_settings_page(state: &AppState, banner: Option<&str>) -> HttpResponse {
    let prefs = state.prefs.read().await.current;
    let content = view::settings::render_settings(&prefs);
    let markup = view::index::page("Settings", &prefs, banner, content);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn settings_page(state: Data<AppState>) -> impl Responder {
    render_settings_page(&state, None).await
}

/// Writes straight through to the preference file on every change.
pub async fn settings_update(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let mut prefs = state.prefs.write().await;

    let result = if let Some(dark) = query.get("dark").map(String::as_str) {
        prefs.set_dark_mode(dark == "1")
    } else if let Some(font) = query.get("font").map(String::as_str) {
        prefs.set_font_size(FontSize::from_param(font))
    } else {
        Ok(())
    };
    drop(prefs);

    match result {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/settings"))
            .finish(),
        Err(e) => {
            eprintln!("Error saving preferences: {e}");
            render_settings_page(&state, Some("Failed to save settings. Please try again.")).await
        }
    }
}
