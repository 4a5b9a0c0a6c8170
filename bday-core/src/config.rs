use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::keywords::Keywords;
use crate::parse_input::DEFAULT_FORMATS;

#[derive(Debug, Clone)]
pub struct Config {
    /// Question shown when the CLI prompts for input.
    pub prompt: String,
    /// `chrono` format strings tried, in order, against input text.
    pub input_date_formats: Vec<String>,
    /// Display format for validated dates.
    pub date_format: String,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    prompt: Option<String>,
    input_date_formats: Option<Vec<String>>,
    date_format: Option<String>,
    /// Optional table:
    /// [synonyms]
    /// ytd = "yesterday"
    /// ayer = "yesterday"
    synonyms: Option<HashMap<String, String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global Keywords registry with user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            prompt: None,
            input_date_formats: None,
            date_format: None,
            synonyms: None,
        });

        let prompt = file_config
            .prompt
            .unwrap_or_else(|| "When is your birthday?".to_string());

        let input_date_formats = file_config
            .input_date_formats
            .filter(|formats| !formats.is_empty())
            .unwrap_or_else(Self::default_input_formats);

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%A, %d %b %Y".to_string());

        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Ok(Self {
            prompt,
            input_date_formats,
            date_format,
        })
    }

    fn default_input_formats() -> Vec<String> {
        DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect()
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("bday")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("bday").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            prompt: None,
            input_date_formats: None,
            date_format: None,
            synonyms: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits synonyms that collide with a canonical keyword (eg. "today").
    /// Lowercases both alias and target for case-insensitive behavior.
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Keywords::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::keywords::{Keyword, Keywords};
    use std::fs;
    use tempfile::tempdir;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config() -> Config {
        Config {
            prompt: "When is your birthday?".to_string(),
            input_date_formats: Config::default_input_formats(),
            date_format: "%A, %d %b %Y".to_string(),
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("bday")
                .join("config.toml");
            let expected_native = b.config_dir().join("bday").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_prompt_and_formats() {
        let toml = r#"
            prompt = "Date of birth?"
            input_date_formats = ["%d/%m/%Y"]
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.prompt.as_deref(), Some("Date of birth?"));
        assert_eq!(fc.input_date_formats, Some(vec!["%d/%m/%Y".to_string()]));
        assert!(fc.date_format.is_none());
    }

    #[test]
    fn parse_file_roundtrip_from_disk() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "date_format = \"%Y-%m-%d\"\n").unwrap();
        let fc = super::Config::parse_file(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(fc.date_format.as_deref(), Some("%Y-%m-%d"));
    }

    #[test]
    fn parse_file_accepts_synonyms_and_extends_registry() {
        let toml = r#"
            [synonyms]
            natalicio = "today"
            VETCHERA = "yesterday"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        assert!(fc.synonyms.is_some());

        super::Config::load_synonyms(&fc.synonyms);

        assert!(Keywords::matches(Keyword::Today, "natalicio"));
        assert!(Keywords::matches(Keyword::Yesterday, "vetchera"));
    }

    #[test]
    fn parse_file_no_accepts_canonical_synonyms() {
        let toml = r#"
            [synonyms]
            today = "yesterday"
            eergisteren = "yesterday"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        super::Config::load_synonyms(&fc.synonyms);

        assert!(!Keywords::matches(Keyword::Yesterday, "today"));
        assert!(Keywords::matches(Keyword::Yesterday, "eergisteren"));
    }
}
