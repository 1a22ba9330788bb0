use leptos::{IntoView, component, prelude::*};
use jamendo_player_controls::notification::Message;

use crate::html;

pub(crate) mod gradient;
pub(crate) mod sidebar;

pub(crate) fn toast(message: Message) -> impl IntoView {
    let (message, class) = match message {
        Message::Error(message) => (message, "toast toast-error"),
        Message::Warning(message) => (message, "toast toast-warning"),
        Message::Success(message) => (message, "toast toast-success"),
        Message::Info(message) => (message, "toast toast-info"),
    };

    html! {
        <div class=class remove-me="3s">
            {message}
        </div>
    }
}

/// Centered heading shown instead of the player while there is nothing to play.
#[component]
pub(crate) fn loading_state(heading: &'static str, children: Children) -> impl IntoView {
    html! {
        <div class="loading-state">
            <h2>{heading}</h2>
            {children()}
        </div>
    }
}
