/// Credentials submitted to the wellbeing server's login endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Bearer token returned on successful login, sent back on every dashboard
/// request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hold_username_and_password() {
        let credentials = Credentials::new("alice", "s3cret");

        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "s3cret");
    }

    #[test]
    fn auth_token_wraps_raw_value() {
        let token = AuthToken::new("jwt-abc");

        assert_eq!(token.token, "jwt-abc");
    }
}
