use async_trait::async_trait;
use drift_core::{
    AuthToken, Credentials, SiteUsage, TimeRange, WellbeingGateway, WellbeingGatewayError,
};

pub struct FailingWellbeingGateway {
    error: WellbeingGatewayError,
}

impl FailingWellbeingGateway {
    pub fn network_error() -> Self {
        Self {
            error: WellbeingGatewayError::Network {
                message: "connection refused".to_string(),
            },
        }
    }

    pub fn authentication_error() -> Self {
        Self {
            error: WellbeingGatewayError::Authentication,
        }
    }

    pub fn rate_limited(retry_after: u64) -> Self {
        Self {
            error: WellbeingGatewayError::RateLimited { retry_after },
        }
    }

    pub fn with_error(error: WellbeingGatewayError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl WellbeingGateway for FailingWellbeingGateway {
    async fn login(
        &self,
        _credentials: &Credentials,
    ) -> Result<AuthToken, WellbeingGatewayError> {
        Err(self.error.clone())
    }

    async fn fetch_usage(
        &self,
        _token: &str,
        _range: TimeRange,
    ) -> Result<Vec<SiteUsage>, WellbeingGatewayError> {
        Err(self.error.clone())
    }

    fn service_name(&self) -> &'static str {
        "Failing"
    }
}
