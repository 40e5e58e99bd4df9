use drift_core::{AuthToken, Credentials, SiteUsage};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

impl LoginResponse {
    pub fn into_auth_token(self) -> AuthToken {
        AuthToken::new(self.token)
    }
}

#[derive(Deserialize, Debug)]
pub struct LoginErrorResponse {
    pub error: Option<String>,
}

impl LoginErrorResponse {
    pub fn into_message(self) -> String {
        self.error.unwrap_or_else(|| "Login failed.".to_string())
    }
}

#[derive(Deserialize, Debug)]
pub struct SiteUsageDto {
    pub website_url: String,
    pub total_time: f64,
}

impl SiteUsageDto {
    pub fn into_site_usage(self) -> SiteUsage {
        SiteUsage::new(self.website_url, self.total_time)
    }
}
