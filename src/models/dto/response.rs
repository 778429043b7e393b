use serde::Serialize;

use crate::models::domain::QaPair;

/// Body of a successful `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub questions: Vec<QaPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn success(questions: Vec<QaPair>) -> Self {
        Self {
            questions,
            error: None,
        }
    }
}
