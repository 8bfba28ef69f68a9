use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};

use crate::model::database_write::upsert_profile;
use crate::model::types::Profile;
use crate::state::AppState;
use crate::sync::SyncSession;

/// Signing in makes the identity's profile row exist, then brings up a sync
/// session (snapshot fetch + subscriptions). A prior session is torn down
/// first.
pub async fn signin(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let user = query
        .get("user")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if user.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "user parameter is required"}));
    }

    let profile = Profile {
        profile_id: user.clone(),
        name: user.clone(),
    };
    if let Err(e) = upsert_profile(&state.config_and_pool, &profile).await {
        eprintln!("Error creating profile: {e}");
        return HttpResponse::InternalServerError()
            .json(serde_json::json!({"error": "failed to sign in"}));
    }

    let mut guard = state.session.write().await;
    if let Some(old) = guard.take() {
        old.shutdown().await;
    }

    match SyncSession::start(user, state.config_and_pool.clone(), &state.feed).await {
        Ok(session) => {
            *guard = Some(session);
            HttpResponse::SeeOther()
                .insert_header(("Location", "/round"))
                .finish()
        }
        Err(e) => {
            eprintln!("Error starting sync session: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": "failed to sign in"}))
        }
    }
}

/// Sign-out tears the sync session down; the mirrors clear with it.
pub async fn signout(state: Data<AppState>) -> impl Responder {
    let taken = state.session.write().await.take();
    if let Some(session) = taken {
        session.shutdown().await;
    }
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}
