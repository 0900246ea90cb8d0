//! Transform endpoint
//!
//! `POST /api/transform` takes one multipart field named `image` and answers
//! `{"url": "data:image/jpeg;base64,..."}` or `{"error": "..."}`.

use crate::core::transform::ImageUpload;
use crate::server::middleware::request_id;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{HttpRequest, HttpResponse, web};
use futures_util::TryStreamExt;
use tracing::{Instrument, debug, info_span};

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// Stylize the uploaded image
pub async fn transform_image(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<HttpResponse> {
    let span = info_span!("transform", request_id = %request_id(&req));

    async move {
        let upload = read_image_field(payload, state.max_image_bytes()).await?;
        let styled = state.transform.transform(upload).await?;
        Ok(HttpResponse::Ok().json(styled))
    }
    .instrument(span)
    .await
}

/// Pull the first `image` field out of a multipart body
///
/// Bytes past `max_bytes` are counted but not kept, so the returned upload
/// reports the size the client sent without holding all of it. Other fields
/// are drained and ignored.
pub async fn read_image_field(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<Option<ImageUpload>> {
    let mut image = None;

    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        if image.is_some() || field.name() != Some(IMAGE_FIELD) {
            debug!(field = field.name().unwrap_or("-"), "Skipping multipart field");
            drain(&mut field).await?;
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut data = Vec::new();
        let mut size = 0usize;
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            size += chunk.len();
            if size <= max_bytes {
                data.extend_from_slice(&chunk);
            } else if !data.is_empty() {
                data = Vec::new();
            }
        }

        let mut upload = if size <= max_bytes {
            ImageUpload::new(data)
        } else {
            ImageUpload::truncated(data, size)
        };
        upload.filename = filename;
        upload.content_type = content_type;

        debug!(size, "Read image field");
        image = Some(upload);
    }

    Ok(image)
}

async fn drain(field: &mut Field) -> Result<()> {
    while field.try_next().await.map_err(multipart_error)?.is_some() {}
    Ok(())
}

fn multipart_error(error: MultipartError) -> GatewayError {
    GatewayError::internal(format!("Invalid multipart data: {}", error))
}
