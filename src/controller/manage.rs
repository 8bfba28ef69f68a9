use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};

use crate::controller::lookup::{
    LookupCourse, course_from_lookup, get_course_details, search_courses,
};
use crate::model::course::{Course, CourseLayout};
use crate::model::database_write::{
    delete_course, delete_player, update_player_name, upsert_course, upsert_player,
};
use crate::model::types::Player;
use crate::model::utils::new_record_id;
use crate::state::AppState;
use crate::sync::{RemoteEvent, StoreChange};
use crate::view;

async fn render_manage_page(
    state: &AppState,
    banner: Option<&str>,
    lookup_results: &[LookupCourse],
) -> HttpResponse {
    let guard = state.session.read().await;
    let (courses, players) = match guard.as_ref() {
        Some(session) => (
            session.courses.read().await.clone(),
            session.players.read().await.clone(),
        ),
        None => (Vec::new(), Vec::new()),
    };
    drop(guard);
    let prefs = state.prefs.read().await.current;

    let content = view::manage::render_manage(&players, &courses, lookup_results);
    let markup = view::index::page("Manage", &prefs, banner, content);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

fn back_to_manage() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/manage"))
        .finish()
}

pub async fn manage_page(state: Data<AppState>) -> impl Responder {
    render_manage_page(&state, None, &[]).await
}

pub async fn player_add(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_manage_page(&state, Some("Sign in to manage players."), &[]).await;
    };
    let name = query
        .get("name")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if name.is_empty() {
        return back_to_manage();
    }

    let player = Player {
        player_id: new_record_id(),
        name,
    };
    match upsert_player(&state.config_and_pool, &owner, &player).await {
        Ok(()) => {
            state.feed.publish(StoreChange::Players {
                owner,
                event: RemoteEvent::Inserted(player),
            });
            back_to_manage()
        }
        Err(e) => {
            eprintln!("Error adding player: {e}");
            render_manage_page(&state, Some("Failed to add player. Please try again."), &[]).await
        }
    }
}

pub async fn player_rename(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_manage_page(&state, Some("Sign in to manage players."), &[]).await;
    };
    let player_id = query
        .get("player")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let name = query
        .get("name")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if player_id.is_empty() || name.is_empty() {
        return back_to_manage();
    }

    match update_player_name(&state.config_and_pool, &player_id, &name).await {
        Ok(()) => {
            state.feed.publish(StoreChange::Players {
                owner,
                event: RemoteEvent::Updated(Player { player_id, name }),
            });
            back_to_manage()
        }
        Err(e) => {
            eprintln!("Error updating player: {e}");
            render_manage_page(&state, Some("Failed to update player. Please try again."), &[])
                .await
        }
    }
}

pub async fn player_delete(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_manage_page(&state, Some("Sign in to manage players."), &[]).await;
    };
    let player_id = query
        .get("player")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if player_id.is_empty() {
        return back_to_manage();
    }

    match delete_player(&state.config_and_pool, &player_id).await {
        Ok(()) => {
            state.feed.publish(StoreChange::Players {
                owner,
                event: RemoteEvent::Deleted { id: player_id },
            });
            back_to_manage()
        }
        Err(e) => {
            eprintln!("Error removing player: {e}");
            render_manage_page(&state, Some("Failed to remove player. Please try again."), &[])
                .await
        }
    }
}

pub async fn course_add(state: Data<AppState>) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_manage_page(&state, Some("Sign in to manage courses."), &[]).await;
    };

    let course = Course::new(
        new_record_id(),
        "New Course".to_string(),
        CourseLayout::Eighteen,
    );
    match upsert_course(&state.config_and_pool, &owner, &course).await {
        Ok(()) => {
            state.feed.publish(StoreChange::Courses {
                owner,
                event: RemoteEvent::Inserted(course),
            });
            back_to_manage()
        }
        Err(e) => {
            eprintln!("Error adding course: {e}");
            render_manage_page(&state, Some("Failed to add course. Please try again."), &[]).await
        }
    }
}

/// Name and layout edits. A layout change resizes the holes array, keeping
/// existing hole data by index and filling new slots with defaults.
pub async fn course_update(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_manage_page(&state, Some("Sign in to manage courses."), &[]).await;
    };
    let course_id = query
        .get("course")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let existing = {
        let guard = state.session.read().await;
        match guard.as_ref() {
            Some(session) => session
                .courses
                .read()
                .await
                .iter()
                .find(|c| c.course_id == course_id)
                .cloned(),
            None => None,
        }
    };
    let Some(mut course) = existing else {
        return back_to_manage();
    };

    if let Some(name) = query.get("name").map(|s| s.trim()) {
        if !name.is_empty() {
            course.name = name.to_string();
        }
    }
    if let Some(layout) = query.get("layout").and_then(|s| s.trim().parse::<i64>().ok()) {
        course.set_layout(CourseLayout::from_hole_count(layout));
    }

    match upsert_course(&state.config_and_pool, &owner, &course).await {
        Ok(()) => {
            state.feed.publish(StoreChange::Courses {
                owner,
                event: RemoteEvent::Updated(course),
            });
            back_to_manage()
        }
        Err(e) => {
            eprintln!("Error updating course: {e}");
            render_manage_page(&state, Some("Failed to update course. Please try again."), &[])
                .await
        }
    }
}

pub async fn course_delete(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_manage_page(&state, Some("Sign in to manage courses."), &[]).await;
    };
    let course_id = query
        .get("course")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if course_id.is_empty() {
        return back_to_manage();
    }

    match delete_course(&state.config_and_pool, &course_id).await {
        Ok(()) => {
            state.feed.publish(StoreChange::Courses {
                owner,
                event: RemoteEvent::Deleted { id: course_id },
            });
            back_to_manage()
        }
        Err(e) => {
            eprintln!("Error removing course: {e}");
            render_manage_page(&state, Some("Failed to remove course. Please try again."), &[])
                .await
        }
    }
}

pub async fn lookup_search(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let keyword = query
        .get("keyword")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if keyword.is_empty() {
        return back_to_manage();
    }
    if state.lookup.api_key.is_empty() {
        return render_manage_page(&state, Some("Course search is not configured."), &[]).await;
    }

    match search_courses(&state.lookup, &keyword).await {
        Ok(results) => render_manage_page(&state, None, &results).await,
        Err(e) => {
            eprintln!("Error searching courses: {e}");
            render_manage_page(
                &state,
                Some("Failed to search courses. Please try again."),
                &[],
            )
            .await
        }
    }
}

pub async fn lookup_import(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let Some(owner) = state.signed_in_owner().await else {
        return render_manage_page(&state, Some("Sign in to import courses."), &[]).await;
    };
    let course_id = query
        .get("course_id")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if course_id.is_empty() {
        return back_to_manage();
    }

    let details = match get_course_details(&state.lookup, &course_id).await {
        Ok(details) => details,
        Err(e) => {
            eprintln!("Error fetching course details: {e}");
            return render_manage_page(
                &state,
                Some("Failed to fetch course details. Please try again."),
                &[],
            )
            .await;
        }
    };

    let course = course_from_lookup(&details);
    match upsert_course(&state.config_and_pool, &owner, &course).await {
        Ok(()) => {
            state.feed.publish(StoreChange::Courses {
                owner,
                event: RemoteEvent::Inserted(course),
            });
            back_to_manage()
        }
        Err(e) => {
            eprintln!("Error adding course: {e}");
            render_manage_page(&state, Some("Failed to add course. Please try again."), &[]).await
        }
    }
}
