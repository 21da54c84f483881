//! # Configuration
//!
//! Configuration lives in `noted.toml` inside the data directory and is
//! loaded through [`confique`], layered as: environment variables, then the
//! file, then compiled defaults. A missing or unparsable file falls back to
//! the defaults (with a warning) rather than refusing to start.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `editor_ext` | `.md` | Extension for editor buffers |
//! | `ai.base_url` | Google generative-language endpoint | API base URL |
//! | `ai.model` | `gemini-2.0-flash` | Model name |
//! | `ai.api_key` | unset (env `GEMINI_API_KEY`) | API key |
//! | `ai.temperature` | `0.7` | Sampling temperature |
//! | `ai.max_output_tokens` | `2048` | Completion length cap |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the AI assistant collaborator.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AiConfig {
    #[config(default = "https://generativelanguage.googleapis.com")]
    pub base_url: String,

    #[config(default = "gemini-2.0-flash")]
    pub model: String,

    /// API key for the generative-language service. Without one, assistant
    /// requests resolve to "no suggestion available".
    #[config(env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    #[config(default = 0.7)]
    pub temperature: f64,

    #[config(default = 2048)]
    pub max_output_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }
}

/// Configuration for noted, stored in `noted.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotedConfig {
    /// Extension for editor buffers (e.g. ".md", ".txt")
    #[config(default = ".md")]
    pub editor_ext: String,

    #[config(nested)]
    pub ai: AiConfig,
}

impl Default for NotedConfig {
    fn default() -> Self {
        Self {
            editor_ext: ".md".to_string(),
            ai: AiConfig::default(),
        }
    }
}

impl NotedConfig {
    /// Load from `noted.toml` in the given directory, with env overrides.
    pub fn load(dir: &Path) -> Self {
        NotedConfig::builder()
            .env()
            .file(dir.join("noted.toml"))
            .load()
            .unwrap_or_else(|e| {
                log::warn!("failed to load config, using defaults: {}", e);
                Self::default()
            })
    }

    /// Get the editor extension, normalized to start with a dot.
    pub fn editor_ext(&self) -> String {
        if self.editor_ext.starts_with('.') {
            self.editor_ext.clone()
        } else {
            format!(".{}", self.editor_ext)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotedConfig::default();
        assert_eq!(config.editor_ext, ".md");
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert_eq!(config.ai.api_key, None);
        assert_eq!(config.ai.max_output_tokens, 2048);
    }

    #[test]
    fn test_editor_ext_normalization_with_dot() {
        let config = NotedConfig {
            editor_ext: ".txt".to_string(),
            ..Default::default()
        };
        assert_eq!(config.editor_ext(), ".txt");
    }

    #[test]
    fn test_editor_ext_normalization_without_dot() {
        let config = NotedConfig {
            editor_ext: "txt".to_string(),
            ..Default::default()
        };
        assert_eq!(config.editor_ext(), ".txt");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = NotedConfig::load(temp.path());
        assert_eq!(config.editor_ext, ".md");
    }

    #[test]
    fn test_load_reads_file_values() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("noted.toml"),
            "editor_ext = \".txt\"\n\n[ai]\nmodel = \"gemini-1.5-pro\"\n",
        )
        .unwrap();

        let config = NotedConfig::load(temp.path());
        assert_eq!(config.editor_ext, ".txt");
        assert_eq!(config.ai.model, "gemini-1.5-pro");
        // Unset keys keep their defaults.
        assert_eq!(config.ai.temperature, 0.7);
    }
}
