#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub expiry_secs: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key =
            std::env::var("JWT_SECRET").expect("JWT_SECRET is not set in .env file");

        let expiry_secs: i64 = std::env::var("JWT_EXPIRY_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            secret_key,
            expiry_secs,
        }
    }
}
