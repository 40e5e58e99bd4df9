use anyhow::Result;
use chrono::{DateTime, Utc};
use drift_core::{resolve_token, Config, SecretsError, StoredToken, Translator};
use serde::Serialize;

#[derive(Serialize)]
struct StatusOutput {
    logged_in: bool,
    token_from_env: bool,
    saved_at: Option<String>,
    server: String,
    language: String,
}

pub fn execute(json: bool) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let translator = Translator::new(config.general.language);

    let stored = match resolve_token() {
        Ok(stored) => Some(stored),
        Err(SecretsError::NotLoggedIn) => None,
        Err(error) => return Err(error.into()),
    };

    if json {
        print_json(stored.as_ref(), &config)?;
    } else {
        print_formatted(stored.as_ref(), &config, &translator);
    }

    Ok(())
}

fn print_json(stored: Option<&StoredToken>, config: &Config) -> Result<()> {
    let output = StatusOutput {
        logged_in: stored.is_some(),
        token_from_env: stored.map(|token| token.saved_at.is_none()).unwrap_or(false),
        saved_at: stored
            .and_then(|token| token.saved_at)
            .map(|date| date.to_rfc3339()),
        server: config.server.base_url.clone(),
        language: config.general.language.code().to_string(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_formatted(stored: Option<&StoredToken>, config: &Config, translator: &Translator) {
    match stored {
        Some(StoredToken {
            saved_at: Some(date),
            ..
        }) => {
            println!(
                "🟢 {}",
                translator.format("status.logged_in_since", &[("date", &format_date(date))])
            );
        }
        Some(StoredToken { saved_at: None, .. }) => {
            println!("🟢 {}", translator.get("status.logged_in_env"));
        }
        None => {
            println!("⚪ {}", translator.get("status.logged_out"));
        }
    }

    println!(
        "   {}",
        translator.format("status.server", &[("url", &config.server.base_url)])
    );
    println!(
        "   {}",
        translator.format(
            "status.language",
            &[
                ("name", config.general.language.display_name()),
                ("code", config.general.language.code()),
            ]
        )
    );
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_date_is_minute_precise() {
        let date = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        assert_eq!(format_date(&date), "2026-03-14 09:26");
    }
}
