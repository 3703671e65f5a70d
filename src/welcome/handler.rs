use super::model::{ErrorMessage, WelcomeMessage, EXPECTED_SOLUTION, WELCOME_TEXT};
use crate::utils::ApiTags;
use poem::web::Data;
use poem_openapi::{payload::Json, ApiResponse, OpenApi};
use sqlx::mysql::MySqlPool;
use tracing::{error, info};

#[derive(ApiResponse)]
pub enum WelcomeResponse {
    #[oai(status = 200)]
    Ok(Json<WelcomeMessage>),
    #[oai(status = 500)]
    DatabaseError(Json<ErrorMessage>),
}

pub struct Welcome;

#[OpenApi(tag = "ApiTags::Welcome")]
impl Welcome {
    /// Probe the database with a fixed query and report whether it answered.
    /// Any failure on the way to the database is recovered into a 500; no
    /// retries.
    #[oai(path = "/", method = "get", operation_id = "welcome")]
    async fn welcome(&self, pool: Data<&MySqlPool>) -> WelcomeResponse {
        let solution = sqlx::query_scalar::<_, i64>("SELECT 1 + 1 AS solution")
            .fetch_one(pool.0)
            .await;

        match solution {
            Ok(solution) => {
                info!("Database query successful");
                let database = if solution == EXPECTED_SOLUTION {
                    "Connected"
                } else {
                    "Error"
                };
                WelcomeResponse::Ok(Json(WelcomeMessage {
                    message: WELCOME_TEXT.to_string(),
                    database: database.to_string(),
                }))
            }
            Err(err) => {
                error!("Database connection error: {}", err);
                WelcomeResponse::DatabaseError(Json(ErrorMessage {
                    error: "Database connection failed".to_string(),
                }))
            }
        }
    }
}
