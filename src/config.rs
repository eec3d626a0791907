use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::LazyLock;

/// Narrative delimiters per supported language, in help-listing order.
static LANGUAGES: LazyLock<IndexMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        IndexMap::from([
            ("fsharp", ("(**", "**)")),
            ("c", ("/**", "**/")),
            ("csharp", ("/**", "**/")),
            ("java", ("/**", "**/")),
        ])
    });

/// How code blocks are marked up in the output.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeStyle {
    /// Prefix every code line with `n` spaces.
    Indented(usize),
    /// Fence code between `start` and `end` lines.
    Surrounded { start: String, end: String },
}

impl Default for CodeStyle {
    fn default() -> Self {
        CodeStyle::Indented(4)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_start_narrative")]
    pub start_narrative: String,

    #[serde(default = "default_end_narrative")]
    pub end_narrative: String,

    #[serde(default)]
    pub code_style: CodeStyle,
}

fn default_start_narrative() -> String {
    "(**".to_string()
}
fn default_end_narrative() -> String {
    "**)".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_narrative: default_start_narrative(),
            end_narrative: default_end_narrative(),
            code_style: CodeStyle::default(),
        }
    }
}

impl Config {
    pub fn new(start_narrative: &str, end_narrative: &str, code_style: CodeStyle) -> Self {
        Config {
            start_narrative: start_narrative.to_string(),
            end_narrative: end_narrative.to_string(),
            code_style,
        }
    }

    /// Config using the narrative delimiters of a named language preset.
    pub fn for_language(language: &str, code_style: CodeStyle) -> Result<Self, ConfigError> {
        let (start, end) = language_delimiters(language)?;
        Ok(Config::new(start, end, code_style))
    }

    /// Replace the narrative delimiters with those of a language preset.
    pub fn set_language(&mut self, language: &str) -> Result<(), ConfigError> {
        let (start, end) = language_delimiters(language)?;
        self.start_narrative = start.to_string();
        self.end_narrative = end.to_string();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_narrative.is_empty() || self.end_narrative.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        if self.start_narrative == self.end_narrative {
            return Err(ConfigError::IdenticalDelimiters(self.start_narrative.clone()));
        }
        if self.code_style == CodeStyle::Indented(0) {
            return Err(ConfigError::ZeroIndent);
        }
        Ok(())
    }
}

/// Names of the supported language presets.
pub fn language_names() -> Vec<&'static str> {
    LANGUAGES.keys().copied().collect()
}

fn language_delimiters(language: &str) -> Result<(&'static str, &'static str), ConfigError> {
    LANGUAGES
        .get(language)
        .copied()
        .ok_or_else(|| ConfigError::UnknownLanguage {
            name: language.to_string(),
            known: language_names().join(", "),
        })
}
