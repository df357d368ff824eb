use crate::core::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub demo: DemoSection,
    pub api: ApiSection,
    pub generator: GeneratorSection,
    pub monitoring: Option<MonitoringSection>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSection {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSection {
    pub latency_ms: Option<u64>,
    pub max_suggestions: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static env-var pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("demo.name", &self.demo.name)?;
        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_range("generator.latency_ms", self.demo_latency_ms(), 0, 60_000)?;
        validation::validate_positive_number(
            "generator.max_suggestions",
            self.max_suggestions(),
            1,
        )?;
        validation::validate_positive_number(
            "api.timeout_seconds",
            self.request_timeout_secs() as usize,
            1,
        )?;
        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn demo_latency_ms(&self) -> u64 {
        self.generator.latency_ms.unwrap_or(1000)
    }

    fn max_suggestions(&self) -> usize {
        self.generator.max_suggestions.unwrap_or(5)
    }

    fn request_timeout_secs(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(10)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[demo]
name = "modelo-demo"
description = "Landing page demo"
version = "1.0.0"

[api]
base_url = "http://localhost:8000"

[generator]
latency_ms = 250
max_suggestions = 3
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.demo.name, "modelo-demo");
        assert_eq!(config.api_base_url(), "http://localhost:8000");
        assert_eq!(config.demo_latency_ms(), 250);
        assert_eq!(config.max_suggestions(), 3);
        // defaults
        assert_eq!(config.request_timeout_secs(), 10);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_MODELO_BASE_URL", "https://modelo.test");

        let toml_content = r#"
[demo]
name = "test"
description = "test"
version = "1.0"

[api]
base_url = "${TEST_MODELO_BASE_URL}"

[generator]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://modelo.test");

        std::env::remove_var("TEST_MODELO_BASE_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[demo]
name = "test"
description = "test"
version = "1.0"

[api]
base_url = "invalid-url"

[generator]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_latency_out_of_range_is_rejected() {
        let toml_content = r#"
[demo]
name = "test"
description = "test"
version = "1.0"

[api]
base_url = "http://localhost:8000"

[generator]
latency_ms = 120000
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[demo]
name = "file-test"
description = "File test"
version = "1.0"

[api]
base_url = "http://localhost:8000"

[generator]

[monitoring]
enabled = true
log_level = "debug"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.demo.name, "file-test");
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("debug"));
    }
}
