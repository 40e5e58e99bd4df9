use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const EN_TRANSLATIONS: &str = include_str!("locales/en.toml");
const FR_TRANSLATIONS: &str = include_str!("locales/fr.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

#[derive(Error, Debug)]
#[error("langue non supportée: {0}. Langues disponibles: en, fr")]
pub struct UnsupportedLanguageError(String);

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "fr" | "french" | "français" => Ok(Language::Fr),
            other => Err(UnsupportedLanguageError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    translations: HashMap<String, String>,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        let content = match language {
            Language::En => EN_TRANSLATIONS,
            Language::Fr => FR_TRANSLATIONS,
        };

        let translations = parse_translations(content);

        Self {
            language,
            translations,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.get(key);
        for (name, value) in args {
            result = result.replace(&format!("{{{}}}", name), value);
        }
        result
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn parse_translations(content: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();

    let parsed: toml::Value =
        toml::from_str(content).unwrap_or(toml::Value::Table(Default::default()));

    if let toml::Value::Table(sections) = parsed {
        for (section, values) in sections {
            if let toml::Value::Table(entries) = values {
                for (key, value) in entries {
                    if let toml::Value::String(text) = value {
                        result.insert(format!("{}.{}", section, key), text);
                    }
                }
            }
        }
    }

    result
}
