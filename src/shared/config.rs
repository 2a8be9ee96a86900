//! Application configuration. API credentials, model selection.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// LLM API key. Read from SECCHAT_API_KEY. Never validated locally;
    /// a bad key surfaces as an error on the first remote call.
    #[serde(default)]
    pub api_key: Option<String>,

    /// LLM API URL. Defaults to OpenAI. Read from SECCHAT_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// LLM model name. Defaults to "gpt-4o-mini". Read from SECCHAT_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// Sampling temperature for both pipeline calls. Read from SECCHAT_TEMPERATURE.
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("SECCHAT"));
        if let Ok(path) = std::env::var("SECCHAT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API key if configured. Reads from config or SECCHAT_API_KEY env.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SECCHAT_API_KEY").ok())
    }

    /// Returns the API URL. Defaults to OpenAI chat completions endpoint.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| std::env::var("SECCHAT_API_URL").ok())
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the model name. Defaults to "gpt-4o-mini".
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .or_else(|| std::env::var("SECCHAT_MODEL").ok())
            .unwrap_or_else(|| "gpt-4o-mini".to_string())
    }

    /// Returns the sampling temperature. Defaults to 0.7 if unset or invalid.
    pub fn temperature_or_default(&self) -> f32 {
        self.temperature.unwrap_or(0.7)
    }

    /// Returns true if the remote API is configured (API key present).
    pub fn is_api_configured(&self) -> bool {
        self.api_key().is_some()
    }
}
