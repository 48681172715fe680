use serde::Deserialize;
use thiserror::Error;

const TOPICS_EN: &str = include_str!("../assets/topics-en.json");
const TOPICS_FI: &str = include_str!("../assets/topics-fi.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Finnish,
}

#[derive(Debug, Error)]
#[error("unknown language code {0:?} (expected \"en\" or \"fi\")")]
pub struct UnknownLanguage(String);

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Finnish => "fi",
        }
    }

    /// Native-language label shown in the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Finnish => "Suomi",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, UnknownLanguage> {
        match code {
            "en" => Ok(Language::English),
            "fi" => Ok(Language::Finnish),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Finnish,
            Language::Finnish => Language::English,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Topic {
    pub name: String,
    pub subtopics: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    pub topics: Vec<Topic>,
}

impl Catalog {
    fn parse(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}

/// Both language catalogs, loaded once at startup and read-only afterwards.
pub struct CatalogSet {
    english: Catalog,
    finnish: Catalog,
}

impl CatalogSet {
    pub fn load() -> Self {
        Self::new(Catalog::parse(TOPICS_EN), Catalog::parse(TOPICS_FI))
    }

    pub fn new(english: Catalog, finnish: Catalog) -> Self {
        Self { english, finnish }
    }

    pub fn get(&self, language: Language) -> &Catalog {
        match language {
            Language::English => &self.english,
            Language::Finnish => &self.finnish,
        }
    }
}
