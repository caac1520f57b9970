use super::Language;
use std::collections::HashMap;

const EN_TRANSLATIONS: &str = include_str!("locales/en.toml");
const ES_TRANSLATIONS: &str = include_str!("locales/es.toml");

/// Looks up user-facing texts by `section.key`. Missing keys fall back to
/// the key itself so a typo stays visible instead of panicking.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    translations: HashMap<String, String>,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        let content = match language {
            Language::En => EN_TRANSLATIONS,
            Language::Es => ES_TRANSLATIONS,
        };

        Self {
            language,
            translations: parse_translations(content),
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
    let parsed: toml::Value =
        toml::from_str(content).unwrap_or(toml::Value::Table(Default::default()));

    let toml::Value::Table(sections) = parsed else {
        return HashMap::new();
    };

    sections
        .into_iter()
        .filter_map(|(section, values)| match values {
            toml::Value::Table(entries) => Some((section, entries)),
            _ => None,
        })
        .flat_map(|(section, entries)| {
            entries.into_iter().filter_map(move |(key, value)| {
                let toml::Value::String(text) = value else {
                    return None;
                };
                Some((format!("{}.{}", section, key), text))
            })
        })
        .collect()
}
