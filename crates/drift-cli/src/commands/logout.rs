use anyhow::Result;
use drift_core::{clear_token, Config, Translator};

pub fn execute() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let translator = Translator::new(config.general.language);

    if clear_token()? {
        println!("{}", translator.get("logout.done"));
    } else {
        println!("{}", translator.get("logout.nothing"));
    }

    Ok(())
}
