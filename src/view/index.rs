use maud::{Markup, html};

use crate::prefs::Preferences;

/// Document shell shared by every page: nav, htmx include, preference
/// classes on the body.
#[must_use]
pub fn page(title: &str, prefs: &Preferences, banner: Option<&str>, content: Markup) -> Markup {
    let mut body_class = prefs.font_size.css_class().to_string();
    if prefs.dark_mode {
        body_class.push_str(" dark");
    }

    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="/static/styles.css";
            title { (title) }
            script src=(crate::HTMX_PATH) {}
        }
        body class=(body_class) {
            nav class="top-nav" {
                a href="/round" { "Round" }
                a href="/manage" { "Manage" }
                a href="/history" { "History" }
                a href="/settings" { "Settings" }
            }
            @if let Some(message) = banner {
                div class="banner-error" { (message) }
            }
            (content)
        }
    }
}

#[must_use]
pub fn render_index_template(signed_in: bool) -> Markup {
    html! {
        h1 { "CardMate" }
        @if signed_in {
            p { "Signed in. Head to " a href="/round" { "the round" } " to start scoring." }
            a href="/auth/signout" { "Sign out" }
        } @else {
            p { "Sign in to load your courses and players." }
            form action="/auth/signin" method="get" {
                input type="text" name="user" placeholder="user id";
                button type="submit" { "Sign In" }
            }
        }
    }
}
