//! Full-page markup for the inspector.

use super::fragments;
use crate::config::AppConfig;
use crate::status::StatusMessage;

/// Generate the HTML shell for the application.
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Decode and inspect JSON Web Tokens locally">
    <title>{title} - TokenLens</title>

    <!-- HTMX (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>

    <!-- Application bundle -->
    <script type="module" src="/static/main.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <div id="app-shell">
        <header class="site-header">
            <a href="/" class="brand">
                <svg class="brand-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="7.5" cy="15.5" r="5.5"/>
                    <path d="m21 2-9.6 9.6"/>
                    <path d="m15.5 7.5 3 3L22 7l-3-3"/>
                </svg>
                <span>TokenLens</span>
            </a>
            <span class="tagline">Local JWT inspector</span>
        </header>

        <main id="app">
            {content}
        </main>

        <footer class="site-footer">
            <p>Powered by Axum + HTMX + Web Components</p>
        </footer>
    </div>
</body>
</html>"#
    )
}

/// The inspector page with its initial snapshot: empty editor, placeholder
/// panels and the empty-input status.
pub fn inspector_page(config: &AppConfig) -> String {
    html_shell("Inspector", &inspector_content(config))
}

fn inspector_content(config: &AppConfig) -> String {
    let debounce_ms = config.ui.debounce_ms;
    let status = fragments::status_line(&StatusMessage::empty_token());
    let overlay = fragments::token_overlay("", false);
    let header_view = fragments::header_panel(None, false);
    let payload_view = fragments::payload_panel(None, false);

    format!(
        r##"
    <div class="inspector-grid">
        <token-editor class="card editor-card">
            <div class="card-head">
                <h2 class="card-title">Token</h2>
                <div class="card-actions">
                    <button type="button" class="action-btn" data-action="paste">PASTE</button>
                    <button type="button" class="action-btn" data-action="copy">COPY</button>
                    <button type="button" class="action-btn" data-action="clear"
                            hx-post="/fragments/clear" hx-target="#status-line" hx-swap="outerHTML">CLEAR</button>
                </div>
            </div>
            {status}
            <div class="editor-stack">
                {overlay}
                <textarea id="token-input" name="token" class="editor-input"
                          placeholder="Enter JWT token here" rows="12"
                          spellcheck="false" autocomplete="off" autocapitalize="off" autocorrect="off"
                          hx-post="/fragments/decode"
                          hx-trigger="input changed delay:{debounce_ms}ms, decode-now"
                          hx-target="#status-line" hx-swap="outerHTML"></textarea>
            </div>
        </token-editor>

        <div class="panel-column">
            <section class="card panel-card panel-header">
                <div class="card-head">
                    <h2 class="card-title">Header</h2>
                    <div class="card-actions">
                        <copy-button target="#header-view">
                            <button type="button" class="action-btn">COPY</button>
                        </copy-button>
                    </div>
                </div>
                {header_view}
            </section>

            <section class="card panel-card panel-payload">
                <div class="card-head">
                    <h2 class="card-title">Payload</h2>
                    <div class="card-actions">
                        <copy-button target="#payload-view">
                            <button type="button" class="action-btn">COPY</button>
                        </copy-button>
                    </div>
                </div>
                {payload_view}
            </section>
        </div>
    </div>
    "##
    )
}
