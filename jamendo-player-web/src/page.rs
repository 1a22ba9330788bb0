use leptos::{IntoView, component, prelude::*};

use crate::html;

#[component]
pub fn page(children: Children, title: &'static str) -> impl IntoView {
    let style_url = "/assets/styles.css?version=1";

    html! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <title>{format!("{title} | Jamendo Player")}</title>
                <link
                    rel="icon"
                    href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🎵</text></svg>"
                />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="theme-color" content="#000" />
                <link rel="stylesheet" href=style_url />
                <link rel="stylesheet" href="/mesh.css" />
                <script src="https://unpkg.com/htmx.org@2.0.4"></script>
                <script src="https://unpkg.com/htmx-ext-sse@2.2.2/sse.js"></script>
                <script src="https://unpkg.com/htmx-ext-remove-me@2.0.0/remove-me.js"></script>
                <script src="/assets/script.js?version=1"></script>
            </head>

            <body hx-ext="sse, remove-me" sse-connect="/sse">
                {children()}
                <div id="toast-container" sse-swap="error,warn,success,info" hx-swap="afterbegin"></div>
            </body>
        </html>
    }
}
