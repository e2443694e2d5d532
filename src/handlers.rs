use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;

use crate::artifacts::Artifacts;
use crate::error::PredictError;
use crate::models::PredictionResponse;
use crate::preprocess;

/// `POST /predict`: classify one uploaded image.
///
/// Expects multipart form data with a file field named `image`. The pipeline
/// is decode -> grayscale -> resize -> normalize -> flatten -> scale ->
/// predict -> decode label; any failure maps through `PredictError`.
pub async fn predict(
    mut payload: Multipart,
    artifacts: web::Data<Artifacts>,
) -> Result<HttpResponse, PredictError> {
    let bytes = read_image_field(&mut payload)
        .await?
        .ok_or(PredictError::MissingImage)?;

    let features = preprocess::image_to_features(&bytes)?;
    let scaled = artifacts.scaler.transform(&features);
    let code = artifacts.classifier.predict(scaled.view())?;
    let predicted_class = artifacts
        .encoder
        .inverse_transform(code)
        .ok_or_else(|| PredictError::Model(format!("class code {code} has no label")))?;

    Ok(HttpResponse::Ok().json(PredictionResponse { predicted_class }))
}

/// Collect the bytes of the `image` field, draining and ignoring any other
/// fields. `None` when no `image` field was present at all.
async fn read_image_field(payload: &mut Multipart) -> Result<Option<Vec<u8>>, PredictError> {
    let mut image_bytes = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| PredictError::Upload(e.to_string()))?;
        let is_image = field.content_disposition().get_name() == Some("image");

        let mut buf = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| PredictError::Upload(e.to_string()))?;
            if is_image {
                buf.extend_from_slice(&data);
            }
        }
        if is_image {
            image_bytes = Some(buf);
        }
    }

    Ok(image_bytes)
}
