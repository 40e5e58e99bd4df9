use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AuthToken, Credentials, SiteUsage, TimeRange};

#[derive(Error, Debug, Clone)]
pub enum WellbeingGatewayError {
    #[error("erreur réseau: {message}")]
    Network { message: String },

    #[error("authentification échouée")]
    Authentication,

    #[error("connexion refusée: {message}")]
    LoginRefused { message: String },

    #[error("rate limit atteint, réessayer dans {retry_after} secondes")]
    RateLimited { retry_after: u64 },

    #[error("erreur de parsing: {message}")]
    Parse { message: String },
}

#[async_trait]
pub trait WellbeingGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials)
        -> Result<AuthToken, WellbeingGatewayError>;

    async fn fetch_usage(
        &self,
        token: &str,
        range: TimeRange,
    ) -> Result<Vec<SiteUsage>, WellbeingGatewayError>;

    fn service_name(&self) -> &'static str;
}
