use maud::{Markup, html};

use crate::prefs::{FontSize, Preferences};

#[must_use]
pub fn render_settings(prefs: &Preferences) -> Markup {
    html! {
        h1 { "Settings" }
        div class="settings-card" {
            div class="setting-row" {
                span { "Dark mode" }
                @if prefs.dark_mode {
                    a href="/settings/update?dark=0" { "On" }
                } @else {
                    a href="/settings/update?dark=1" { "Off" }
                }
            }
            div class="setting-row" {
                span { "Font size" }
                @for size in [FontSize::Small, FontSize::Medium, FontSize::Large] {
                    @let name = match size {
                        FontSize::Small => "small",
                        FontSize::Medium => "medium",
                        FontSize::Large => "large",
                    };
                    a href={ "/settings/update?font=" (name) } class=[
                        (prefs.font_size == size).then_some("setting-active")
                    ] { (name) }
                }
            }
        }
    }
}
