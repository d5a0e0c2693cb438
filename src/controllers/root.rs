use crate::models::catalog::HealthResponse;

pub struct RootController;

impl RootController {
    /// Liveness payload. Independent of provider state.
    pub fn health_check() -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
