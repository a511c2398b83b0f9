use serde::{Deserialize, Serialize};
pub mod transaction;
pub mod chart;
pub mod style;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}
