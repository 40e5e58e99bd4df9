use async_trait::async_trait;
use drift_core::{
    AuthToken, Credentials, SiteUsage, TimeRange, WellbeingGateway, WellbeingGatewayError,
};

use super::dto::{LoginErrorResponse, LoginRequest, LoginResponse, SiteUsageDto};

pub struct HttpWellbeingGateway {
    base_url: String,
}

impl HttpWellbeingGateway {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn post_login(&self, credentials: &Credentials) -> Result<AuthToken, WellbeingGatewayError> {
        let url = format!("{}/login", self.base_url);

        let response = ureq::post(&url)
            .send_json(LoginRequest::from_credentials(credentials))
            .map_err(Self::handle_login_error)?;

        response
            .into_json::<LoginResponse>()
            .map(LoginResponse::into_auth_token)
            .map_err(|error| WellbeingGatewayError::Parse {
                message: error.to_string(),
            })
    }

    fn get_usage(
        &self,
        token: &str,
        range: TimeRange,
    ) -> Result<Vec<SiteUsageDto>, WellbeingGatewayError> {
        let url = format!("{}/api/dashboard", self.base_url);

        let response = ureq::get(&url)
            .set("Authorization", &format!("Bearer {}", token))
            .query("range", range.query_value())
            .call()
            .map_err(Self::handle_error)?;

        response
            .into_json::<Vec<SiteUsageDto>>()
            .map_err(|error| WellbeingGatewayError::Parse {
                message: error.to_string(),
            })
    }

    // The login endpoint reports refusals as a JSON body {"error": "..."}
    // that must reach the user verbatim.
    fn handle_login_error(error: ureq::Error) -> WellbeingGatewayError {
        match error {
            ureq::Error::Status(429, _) => WellbeingGatewayError::RateLimited { retry_after: 60 },
            ureq::Error::Status(code, response) => match response.into_json::<LoginErrorResponse>()
            {
                Ok(body) => WellbeingGatewayError::LoginRefused {
                    message: body.into_message(),
                },
                Err(_) => WellbeingGatewayError::Network {
                    message: format!("HTTP {}", code),
                },
            },
            ureq::Error::Transport(transport) => WellbeingGatewayError::Network {
                message: transport.to_string(),
            },
        }
    }

    fn handle_error(error: ureq::Error) -> WellbeingGatewayError {
        match error {
            ureq::Error::Status(401, _) | ureq::Error::Status(403, _) => {
                WellbeingGatewayError::Authentication
            }
            ureq::Error::Status(429, _) => WellbeingGatewayError::RateLimited { retry_after: 60 },
            ureq::Error::Status(code, response) => WellbeingGatewayError::Network {
                message: format!("HTTP {}: {}", code, response.status_text()),
            },
            ureq::Error::Transport(transport) => WellbeingGatewayError::Network {
                message: transport.to_string(),
            },
        }
    }
}

#[async_trait]
impl WellbeingGateway for HttpWellbeingGateway {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthToken, WellbeingGatewayError> {
        let gateway = HttpWellbeingGateway::new(self.base_url.clone());
        let credentials = credentials.clone();

        let token = tokio::task::spawn_blocking(move || gateway.post_login(&credentials))
            .await
            .map_err(|error| WellbeingGatewayError::Network {
                message: format!("task join error: {}", error),
            })??;

        tracing::debug!("login accepted by wellbeing server");

        Ok(token)
    }

    async fn fetch_usage(
        &self,
        token: &str,
        range: TimeRange,
    ) -> Result<Vec<SiteUsage>, WellbeingGatewayError> {
        let gateway = HttpWellbeingGateway::new(self.base_url.clone());
        let token = token.to_string();

        let rows = tokio::task::spawn_blocking(move || gateway.get_usage(&token, range))
            .await
            .map_err(|error| WellbeingGatewayError::Network {
                message: format!("task join error: {}", error),
            })??;

        tracing::debug!(
            row_count = rows.len(),
            range = range.query_value(),
            "fetched usage rows"
        );

        Ok(rows
            .into_iter()
            .map(SiteUsageDto::into_site_usage)
            .collect())
    }

    fn service_name(&self) -> &'static str {
        "Wellbeing"
    }
}
