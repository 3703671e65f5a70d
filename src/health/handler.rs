use crate::utils::ApiTags;
use poem_openapi::{payload::Json, Object, OpenApi};

#[derive(Object)]
pub struct HealthStatus {
    pub status: String,
}

pub struct HealthCheck;

#[OpenApi(tag = "ApiTags::HealthCheck")]
impl HealthCheck {
    /// Always healthy; never touches the database.
    #[oai(path = "/health", method = "get", operation_id = "health")]
    async fn health(&self) -> Json<HealthStatus> {
        Json(HealthStatus {
            status: "healthy".to_string(),
        })
    }
}
