//! Page handlers
//!
//! Serve the calculator page and its embedded assets.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

use crate::page::{render_index, SCRIPT, STYLESHEET};

/// GET /
pub async fn index() -> Html<String> {
    Html(render_index())
}

/// GET /static/js/script.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT,
    )
}

/// GET /static/css/style.css
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
