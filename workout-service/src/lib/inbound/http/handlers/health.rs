/// Liveness probe. Sits outside authentication.
pub async fn health_check() -> &'static str {
    "Status is available\n"
}
