use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};

use crate::model::database::get_scorecards_for_user;
use crate::model::database_write::delete_scorecard;
use crate::state::AppState;
use crate::view;

async fn render_history_page(state: &AppState, banner: Option<&str>) -> HttpResponse {
    let prefs = state.prefs.read().await.current;

    let scorecards = match state.signed_in_owner().await {
        Some(owner) => match get_scorecards_for_user(&state.config_and_pool, &owner).await {
            Ok(scorecards) => scorecards,
            Err(e) => {
                eprintln!("Error fetching scorecards: {e}");
                let content = view::history::render_history(&[]);
                let markup = view::index::page(
                    "History",
                    &prefs,
                    Some("Failed to load scorecards. Please try again later."),
                    content,
                );
                return HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string());
            }
        },
        None => Vec::new(),
    };

    let content = view::history::render_history(&scorecards);
    let markup = view::index::page("History", &prefs, banner, content);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn history_page(state: Data<AppState>) -> impl Responder {
    render_history_page(&state, None).await
}

/// Child scorecard_players rows go first, then the scorecard itself.
pub async fn history_delete(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let scorecard_id = query
        .get("scorecard")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if scorecard_id.is_empty() {
        return render_history_page(&state, None).await;
    }

    match delete_scorecard(&state.config_and_pool, &scorecard_id).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/history"))
            .finish(),
        Err(e) => {
            eprintln!("Error deleting scorecard: {e}");
            render_history_page(&state, Some("Failed to delete scorecard. Please try again."))
                .await
        }
    }
}
