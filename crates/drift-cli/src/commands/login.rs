use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use drift_adapters::HttpWellbeingGateway;
use drift_core::{
    store_token, Config, Credentials, Translator, WellbeingGateway, WellbeingGatewayError,
};

pub async fn execute(username: Option<String>) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let translator = Translator::new(config.general.language);

    let credentials = prompt_credentials(username, &translator)?;

    println!("{}", translator.get("login.in_progress"));

    let gateway = HttpWellbeingGateway::new(config.server.base_url.clone());

    match gateway.login(&credentials).await {
        Ok(token) => {
            store_token(&token.token).context("cannot store the auth token")?;
            println!("✅ {}", translator.get("login.success"));
            Ok(())
        }
        Err(WellbeingGatewayError::LoginRefused { message }) => {
            anyhow::bail!(
                "{}",
                translator.format("login.refused", &[("message", &message)])
            );
        }
        Err(error) => Err(error.into()),
    }
}

fn prompt_credentials(username: Option<String>, translator: &Translator) -> Result<Credentials> {
    let username = match username {
        Some(name) => name,
        None => Input::new()
            .with_prompt(translator.get("login.prompt_username"))
            .interact_text()?,
    };

    let password = Password::new()
        .with_prompt(translator.get("login.prompt_password"))
        .interact()?;

    Ok(Credentials::new(username, password))
}
