use async_trait::async_trait;
use drift_core::{
    AuthToken, Credentials, SiteUsage, TimeRange, WellbeingGateway, WellbeingGatewayError,
};
use std::sync::Mutex;

const STUB_TOKEN: &str = "stub-token";

/// In-memory gateway for tests: any credentials log in and receive the stub
/// token, and only that token can read the canned usage rows.
pub struct StubWellbeingGateway {
    usage: Mutex<Vec<SiteUsage>>,
}

impl StubWellbeingGateway {
    pub fn new() -> Self {
        Self {
            usage: Mutex::new(Vec::new()),
        }
    }

    pub fn with_usage(usage: Vec<SiteUsage>) -> Self {
        Self {
            usage: Mutex::new(usage),
        }
    }

    pub fn given_usage(&self, usage: Vec<SiteUsage>) {
        let mut guard = self.usage.lock().unwrap();
        *guard = usage;
    }

    pub fn valid_token() -> &'static str {
        STUB_TOKEN
    }
}

impl Default for StubWellbeingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WellbeingGateway for StubWellbeingGateway {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthToken, WellbeingGatewayError> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(WellbeingGatewayError::LoginRefused {
                message: "Username and password are required.".to_string(),
            });
        }

        Ok(AuthToken::new(STUB_TOKEN))
    }

    async fn fetch_usage(
        &self,
        token: &str,
        _range: TimeRange,
    ) -> Result<Vec<SiteUsage>, WellbeingGatewayError> {
        if token != STUB_TOKEN {
            return Err(WellbeingGatewayError::Authentication);
        }

        let usage = self.usage.lock().unwrap();
        Ok(usage.clone())
    }

    fn service_name(&self) -> &'static str {
        "Stub"
    }
}
