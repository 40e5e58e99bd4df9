use anyhow::{Context, Result};
use dialoguer::Input;
use drift_core::{config, Config, Language, Translator};
use std::fs;
use std::path::Path;

#[derive(Debug)]
struct InitConfig {
    language: Language,
    base_url: String,
    threshold_seconds: f64,
}

pub fn execute(force: bool) -> Result<()> {
    let translator = Translator::default();
    let config_path = Config::config_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "{}\n{}",
            translator.format(
                "init.exists",
                &[("path", &config_path.display().to_string())]
            ),
            translator.get("init.use_force")
        );
    }

    if force && config_path.exists() {
        println!("⚠️  {}\n", translator.get("init.overwrite"));
    }

    println!("{}\n", translator.get("init.welcome"));

    let init_config = prompt_configuration(&translator)?;
    write_config(&config_path, &init_config)?;

    let translator = Translator::new(init_config.language);
    println!(
        "\n✅ {}",
        translator.format(
            "init.saved",
            &[("path", &config_path.display().to_string())]
        )
    );
    println!("{}", translator.get("init.next_step"));

    Ok(())
}

fn prompt_configuration(translator: &Translator) -> Result<InitConfig> {
    let language_code: String = Input::new()
        .with_prompt("Language / Langue (en, fr)")
        .default("en".to_string())
        .validate_with(|input: &String| match input.parse::<Language>() {
            Ok(_) => Ok(()),
            Err(_) => Err("en / fr"),
        })
        .interact_text()?;
    let language: Language = language_code.parse()?;

    let base_url: String = Input::new()
        .with_prompt(translator.get("init.prompt_server"))
        .default(config::DEFAULT_BASE_URL.to_string())
        .interact_text()?;

    let threshold_seconds: f64 = Input::new()
        .with_prompt(translator.get("init.prompt_threshold"))
        .default(config::DEFAULT_THRESHOLD_SECONDS)
        .validate_with(|input: &f64| {
            if input.is_finite() && *input >= 0.0 {
                Ok(())
            } else {
                Err(">= 0")
            }
        })
        .interact_text()?;

    Ok(InitConfig {
        language,
        base_url,
        threshold_seconds,
    })
}

fn write_config(path: &Path, init_config: &InitConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("cannot create the configuration directory")?;
    }

    let toml_content = format!(
        r#"[general]
language = "{}"

[server]
base_url = "{}"

[dashboard]
threshold_seconds = {}
"#,
        init_config.language.code(),
        init_config.base_url,
        init_config.threshold_seconds
    );

    fs::write(path, toml_content).context("cannot write the configuration file")?;

    Ok(())
}
