use axum::{Router, response::IntoResponse, routing::get};
use jamendo_player_gradient::MeshGradient;
use leptos::{IntoView, component, prelude::*};
use std::sync::Arc;

use crate::{
    AppState,
    components::gradient::MeshBackground,
    html,
    icons::{Radio, Streaming},
    page::Page,
    view::render,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

async fn index() -> impl IntoResponse {
    render(html! {
        <Page title="Pick">
            <div class="split-container">
                <PickHalf href="/streaming" label="Show off your taste" side="left">
                    <Streaming />
                </PickHalf>
                <PickHalf href="/radio" label="Just play some music" side="right">
                    <Radio />
                </PickHalf>
            </div>
        </Page>
    })
}

/// One half of the pick page, each with its own random colors.
#[component]
fn pick_half(
    href: &'static str,
    label: &'static str,
    side: &'static str,
    children: Children,
) -> impl IntoView {
    html! {
        <a href=href class=format!("split {side}")>
            <MeshBackground gradient=MeshGradient::random() />
            <div class="split-content">
                {children()}
                <div class="glass-text">{label}</div>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::harness;

    #[tokio::test]
    async fn offers_both_modes() {
        let harness = harness();

        let response = harness.server.get("/").await;
        response.assert_status_ok();

        let html = response.text();
        assert!(html.contains(r#"href="/streaming""#));
        assert!(html.contains("Show off your taste"));
        assert!(html.contains(r#"href="/radio""#));
        assert!(html.contains("Just play some music"));
        assert_eq!(html.matches("mesh-gradient").count(), 2);
        assert!(html.contains("--mesh-c4: hsl("));
    }
}
