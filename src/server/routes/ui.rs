//! Upload page

use crate::server::state::AppState;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

/// Serve the upload page
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(state.index_page.to_string())
}
