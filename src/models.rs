use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredictionResponse<'a> {
    pub predicted_class: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
