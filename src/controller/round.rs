use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};

use crate::controller::scorecard::save_round_scorecard;
use crate::model::course::Course;
use crate::model::types::Player;
use crate::state::AppState;
use crate::view;

async fn mirrors(state: &AppState) -> (Vec<Course>, Vec<Player>) {
    let guard = state.session.read().await;
    match guard.as_ref() {
        Some(session) => (
            session.courses.read().await.clone(),
            session.players.read().await.clone(),
        ),
        None => (Vec::new(), Vec::new()),
    }
}

async fn render_round_page(state: &AppState, banner: Option<&str>) -> HttpResponse {
    let (courses, players) = mirrors(state).await;
    let round = state.round.read().await.clone();
    let prefs = state.prefs.read().await.current;

    let content = view::round::render_round(&round, &courses, &players);
    let markup = view::index::page("Round", &prefs, banner, content);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

fn back_to_round() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/round"))
        .finish()
}

pub async fn round_page(state: Data<AppState>) -> impl Responder {
    render_round_page(&state, None).await
}

pub async fn select_course(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let course_id = query
        .get("course")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let (courses, _) = mirrors(&state).await;
    if let Some(course) = courses.into_iter().find(|c| c.course_id == course_id) {
        state.round.write().await.select_course(course);
    }
    back_to_round()
}

pub async fn set_score(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let player_id = query
        .get("player")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if player_id.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "player parameter is required"}));
    }

    let value: i32 = match query.get("value").map(|s| s.trim().parse()) {
        Some(Ok(v)) => v,
        _ => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({"error": "value parameter is required"}));
        }
    };

    let mut round = state.round.write().await;
    let hole = query
        .get("hole")
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(round.current_hole);
    round.set_score(&player_id, hole, value);
    drop(round);

    back_to_round()
}

pub async fn add_player(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let player_id = query
        .get("player")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let (_, players) = mirrors(&state).await;
    if let Some(player) = players.iter().find(|p| p.player_id == player_id) {
        state.round.write().await.add_player(player);
    }
    back_to_round()
}

pub async fn reset_round(state: Data<AppState>) -> impl Responder {
    state.round.write().await.reset_round();
    back_to_round()
}

pub async fn next_hole(state: Data<AppState>) -> impl Responder {
    state.round.write().await.advance_hole();
    back_to_round()
}

pub async fn prev_hole(state: Data<AppState>) -> impl Responder {
    state.round.write().await.retreat_hole();
    back_to_round()
}

/// Review page: the full scorecard table for the round in progress.
pub async fn scorecard_page(state: Data<AppState>) -> impl Responder {
    let round = state.round.read().await.clone();
    let Some(course) = &round.course else {
        return back_to_round();
    };
    if round.roster.is_empty() {
        return back_to_round();
    }
    let prefs = state.prefs.read().await.current;

    let content = view::scorecard::render_review(course, &round.roster);
    let markup = view::index::page("Scorecard", &prefs, None, content);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// Runs the persistence adapter over the round in progress and lands on the
/// history page. Failures come back as a banner; earlier steps of the write
/// sequence are not rolled back.
pub async fn complete_round(state: Data<AppState>) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_round_page(&state, Some("Sign in to save scorecards.")).await;
    };

    let round = state.round.read().await.clone();
    match save_round_scorecard(&state.config_and_pool, &state.feed, &owner, &round).await {
        Ok(_) => HttpResponse::SeeOther()
            .insert_header(("Location", "/history"))
            .finish(),
        Err(e) => {
            eprintln!("Error saving scorecard: {e}");
            render_round_page(&state, Some("Failed to save scorecard. Please try again.")).await
        }
    }
}
