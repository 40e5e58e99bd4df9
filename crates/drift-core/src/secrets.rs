use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

const TOKEN_ENV: &str = "DRIFT_AUTH_TOKEN";

#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("aucun jeton enregistré, lancez `drift login`")]
    NotLoggedIn,

    #[error("erreur de lecture du fichier secrets: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("erreur de parsing secrets.toml: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error("erreur d'écriture secrets.toml: {source}")]
    Serialize {
        #[from]
        source: toml::ser::Error,
    },
}

/// Bearer token persisted between invocations, the CLI counterpart of the
/// browser's local storage entry. `saved_at` is absent when the token comes
/// from the environment.
#[derive(Debug, Clone)]
pub struct StoredToken {
    pub token: String,
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct SecretsFile {
    wellbeing: Option<WellbeingSecrets>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct WellbeingSecrets {
    token: String,
    saved_at: DateTime<Utc>,
}

/// Resolution order: `DRIFT_AUTH_TOKEN`, then the secrets file.
pub fn resolve_token() -> Result<StoredToken, SecretsError> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.is_empty() {
            return Ok(StoredToken {
                token,
                saved_at: None,
            });
        }
    }

    load_from_secrets_file(&secrets_path())
}

pub fn store_token(token: &str) -> Result<(), SecretsError> {
    write_secrets_file(&secrets_path(), token, Utc::now())
}

/// Removes the stored token. Returns `false` when there was nothing to
/// remove, so `drift logout` can stay idempotent.
pub fn clear_token() -> Result<bool, SecretsError> {
    let path = secrets_path();

    if !path.exists() {
        return Ok(false);
    }

    std::fs::remove_file(&path)?;
    Ok(true)
}

fn load_from_secrets_file(path: &Path) -> Result<StoredToken, SecretsError> {
    if !path.exists() {
        return Err(SecretsError::NotLoggedIn);
    }

    let content = std::fs::read_to_string(path)?;
    let secrets: SecretsFile = toml::from_str(&content)?;

    secrets
        .wellbeing
        .map(|wellbeing| StoredToken {
            token: wellbeing.token,
            saved_at: Some(wellbeing.saved_at),
        })
        .ok_or(SecretsError::NotLoggedIn)
}

fn write_secrets_file(
    path: &Path,
    token: &str,
    saved_at: DateTime<Utc>,
) -> Result<(), SecretsError> {
    let secrets = SecretsFile {
        wellbeing: Some(WellbeingSecrets {
            token: token.to_string(),
            saved_at,
        }),
    };

    let content = toml::to_string(&secrets)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, content)?;
    Ok(())
}

fn secrets_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drift")
        .join("secrets.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn test_secrets_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("drift-secrets-test-{}.toml", name))
    }

    fn cleanup(path: &Path) {
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn resolve_from_environment() {
        env::set_var(TOKEN_ENV, "env-token-123");

        let stored = resolve_token().unwrap();

        assert_eq!(stored.token, "env-token-123");
        assert!(stored.saved_at.is_none());

        env::remove_var(TOKEN_ENV);
    }

    #[test]
    fn missing_file_means_not_logged_in() {
        let path = test_secrets_path("missing");
        cleanup(&path);

        let result = load_from_secrets_file(&path);

        assert!(matches!(result, Err(SecretsError::NotLoggedIn)));
    }

    #[test]
    fn write_then_load_round_trips_token() {
        let path = test_secrets_path("round-trip");
        cleanup(&path);

        let saved_at = Utc::now();
        write_secrets_file(&path, "jwt-abc", saved_at).unwrap();
        let stored = load_from_secrets_file(&path).unwrap();

        assert_eq!(stored.token, "jwt-abc");
        assert_eq!(stored.saved_at, Some(saved_at));

        cleanup(&path);
    }

    #[test]
    fn file_without_wellbeing_table_means_not_logged_in() {
        let path = test_secrets_path("empty-table");
        std::fs::write(&path, "").unwrap();

        let result = load_from_secrets_file(&path);

        assert!(matches!(result, Err(SecretsError::NotLoggedIn)));

        cleanup(&path);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = test_secrets_path("malformed");
        std::fs::write(&path, "not toml at all [[[").unwrap();

        let result = load_from_secrets_file(&path);

        assert!(matches!(result, Err(SecretsError::Parse { .. })));

        cleanup(&path);
    }
}
