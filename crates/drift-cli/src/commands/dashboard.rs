use anyhow::Result;
use drift_adapters::HttpWellbeingGateway;
use drift_core::{
    build_chart_data, clear_token, resolve_token, ChartKind, Config, SecretsError, TimeRange,
    Translator, WellbeingGateway, WellbeingGatewayError,
};

use crate::chart;

pub async fn execute(range: Option<String>, kind: Option<String>, json: bool) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let translator = Translator::new(config.general.language);

    let range = resolve_range(range.as_deref(), &config)?;
    let chart_kind = resolve_chart_kind(kind.as_deref(), &config)?;

    let stored = match resolve_token() {
        Ok(stored) => stored,
        Err(SecretsError::NotLoggedIn) => {
            anyhow::bail!("{}", translator.get("error.not_logged_in"));
        }
        Err(error) => return Err(error.into()),
    };

    let gateway = HttpWellbeingGateway::new(config.server.base_url.clone());

    let usage = match gateway.fetch_usage(&stored.token, range).await {
        Ok(usage) => usage,
        Err(WellbeingGatewayError::Authentication) => {
            // the token is stale: drop it so the next attempt starts clean
            clear_token().ok();
            anyhow::bail!("{}", translator.get("dashboard.session_expired"));
        }
        Err(error) => return Err(error.into()),
    };

    let entries = build_chart_data(&usage, config.dashboard.threshold_seconds)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!(
            "{}",
            translator.format("dashboard.empty", &[("range", range.query_value())])
        );
        return Ok(());
    }

    println!();
    println!("{}", range.title(&translator));
    println!();

    match chart_kind {
        ChartKind::Bar => chart::render_bar_chart(&entries, &translator),
        ChartKind::Pie => chart::render_pie_chart(&entries, &translator),
    }

    Ok(())
}

fn resolve_range(value: Option<&str>, config: &Config) -> Result<TimeRange> {
    match value {
        Some(raw) => TimeRange::from_str(raw)
            .ok_or_else(|| anyhow::anyhow!("invalid range '{}', expected today or week", raw)),
        None => Ok(config.dashboard.default_range),
    }
}

fn resolve_chart_kind(value: Option<&str>, config: &Config) -> Result<ChartKind> {
    match value {
        Some(raw) => ChartKind::from_str(raw)
            .ok_or_else(|| anyhow::anyhow!("invalid chart '{}', expected bar or pie", raw)),
        None => Ok(config.dashboard.default_chart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_range_prefers_explicit_value() {
        let config = Config::default();

        let range = resolve_range(Some("week"), &config).unwrap();

        assert_eq!(range, TimeRange::Week);
    }

    #[test]
    fn resolve_range_falls_back_to_config_default() {
        let config = Config::default();

        let range = resolve_range(None, &config).unwrap();

        assert_eq!(range, config.dashboard.default_range);
    }

    #[test]
    fn resolve_range_rejects_unknown_value() {
        let config = Config::default();

        assert!(resolve_range(Some("month"), &config).is_err());
    }

    #[test]
    fn resolve_chart_kind_prefers_explicit_value() {
        let config = Config::default();

        let kind = resolve_chart_kind(Some("pie"), &config).unwrap();

        assert_eq!(kind, ChartKind::Pie);
    }

    #[test]
    fn resolve_chart_kind_rejects_unknown_value() {
        let config = Config::default();

        assert!(resolve_chart_kind(Some("doughnut"), &config).is_err());
    }
}
