use std::collections::HashMap;
use std::env;
use std::time::Duration;

use url::Url;

use super::models::ToolKind;
use crate::clients::secrets::{CommandSecretProvider, SecretProvider, StaticSecret};
use crate::errors::ToolError;

/// Model used when no positional argument is given. A reasoning model.
pub const DEFAULT_MODEL: &str = "gpt-5-mini";

/// Endpoint used by tools that do not read one from the environment.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_DIFF_BYTES: usize = 100_000;

/// Temperature for reasoning models, which reject anything else.
pub const REASONING_TEMPERATURE: f64 = 1.0;
/// Temperature for every model without an explicit entry.
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

/// Maps a model identifier to the sampling temperature sent with the request.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperaturePolicy {
    overrides: HashMap<String, f64>,
    fallback: f64,
}

impl Default for TemperaturePolicy {
    fn default() -> Self {
        let mut overrides = HashMap::new();
        overrides.insert(DEFAULT_MODEL.to_string(), REASONING_TEMPERATURE);
        Self {
            overrides,
            fallback: DEFAULT_TEMPERATURE,
        }
    }
}

impl TemperaturePolicy {
    /// Policy with no per-model entries.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Config` if `fallback` is outside `[0, 1]`.
    pub fn uniform(fallback: f64) -> Result<Self, ToolError> {
        check_temperature("fallback", fallback)?;
        Ok(Self {
            overrides: HashMap::new(),
            fallback,
        })
    }

    /// # Errors
    ///
    /// Returns `ToolError::Config` if `temperature` is outside `[0, 1]`.
    pub fn with_override(
        mut self,
        model: impl Into<String>,
        temperature: f64,
    ) -> Result<Self, ToolError> {
        let model = model.into();
        check_temperature(&model, temperature)?;
        self.overrides.insert(model, temperature);
        Ok(self)
    }

    /// Apply a comma separated list of `model=temperature` entries.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Config` for entries that are not `model=number` or whose
    /// value is outside `[0, 1]`.
    pub fn with_overrides_from_str(mut self, entries: &str) -> Result<Self, ToolError> {
        for entry in entries.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (model, value) = entry.split_once('=').ok_or_else(|| {
                ToolError::Config(format!("temperature override '{entry}' is not model=value"))
            })?;
            let model = model.trim();
            if model.is_empty() {
                return Err(ToolError::Config(format!(
                    "temperature override '{entry}' has no model"
                )));
            }
            let temperature: f64 = value.trim().parse().map_err(|e| {
                ToolError::Config(format!("temperature override '{entry}': {e}"))
            })?;
            self = self.with_override(model, temperature)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn temperature_for(&self, model: &str) -> f64 {
        self.overrides.get(model).copied().unwrap_or(self.fallback)
    }
}

fn check_temperature(label: &str, temperature: f64) -> Result<(), ToolError> {
    if (0.0..=1.0).contains(&temperature) {
        Ok(())
    } else {
        Err(ToolError::Config(format!(
            "temperature for {label} must be within [0, 1], got {temperature}"
        )))
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub kind: ToolKind,
    pub api_key: String,
    pub endpoint: Url,
    pub model: String,
    pub temperatures: TemperaturePolicy,
    pub timeout: Option<Duration>,
    pub max_diff_bytes: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("kind", &self.kind)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .field("temperatures", &self.temperatures)
            .field("timeout", &self.timeout)
            .field("max_diff_bytes", &self.max_diff_bytes)
            .finish()
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env(kind: ToolKind, model_arg: Option<String>) -> Result<Self, ToolError> {
        Self::from_lookup(kind, model_arg, |name| env::var(name).ok())
    }

    /// Read configuration through `lookup`, which stands in for `std::env::var`.
    ///
    /// The credential comes from `OPENAI_API_KEY`, or from the output of
    /// `GPTOOLS_SECRET_COMMAND` when the key is unset.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::MissingCredential` when no credential or required endpoint
    /// is configured, and `ToolError::Config` for values that fail to parse.
    pub fn from_lookup<F>(
        kind: ToolKind,
        model_arg: Option<String>,
        lookup: F,
    ) -> Result<Self, ToolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets = secret_provider(&lookup)?;
        Self::resolve(kind, model_arg, &lookup, secrets.as_ref())
    }

    /// Build the configuration with an explicit secret provider.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_lookup`], plus any error the provider returns.
    pub fn resolve<F>(
        kind: ToolKind,
        model_arg: Option<String>,
        lookup: &F,
        secrets: &dyn SecretProvider,
    ) -> Result<Self, ToolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = match kind.endpoint_var() {
            Some(var) => {
                let raw = non_empty(lookup(var)).ok_or_else(|| {
                    ToolError::MissingCredential(format!("{var} is not set"))
                })?;
                parse_endpoint(var, &raw)?
            }
            None => parse_endpoint("built-in endpoint", OPENAI_CHAT_COMPLETIONS_URL)?,
        };

        let api_key = secrets.api_key()?;
        if api_key.trim().is_empty() {
            return Err(ToolError::MissingCredential(
                "API key is empty".to_string(),
            ));
        }

        let model = non_empty(model_arg).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperatures = match non_empty(lookup("GPTOOLS_TEMPERATURES")) {
            Some(entries) => TemperaturePolicy::default().with_overrides_from_str(&entries)?,
            None => TemperaturePolicy::default(),
        };

        let timeout_secs = match non_empty(lookup("GPTOOLS_TIMEOUT_SECS")) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ToolError::Config(format!("GPTOOLS_TIMEOUT_SECS: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let max_diff_bytes = match non_empty(lookup("GPTOOLS_MAX_DIFF_BYTES")) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                ToolError::Config(format!("GPTOOLS_MAX_DIFF_BYTES: {e}"))
            })?,
            None => DEFAULT_MAX_DIFF_BYTES,
        };

        Ok(Self {
            kind,
            api_key,
            endpoint,
            model,
            temperatures,
            timeout,
            max_diff_bytes,
        })
    }

    /// Temperature for the configured model.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperatures.temperature_for(&self.model)
    }
}

fn secret_provider<F>(lookup: &F) -> Result<Box<dyn SecretProvider>, ToolError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = non_empty(lookup("OPENAI_API_KEY")) {
        return Ok(Box::new(StaticSecret::new(key)));
    }
    if let Some(command) = non_empty(lookup("GPTOOLS_SECRET_COMMAND")) {
        return Ok(Box::new(CommandSecretProvider::new(command)));
    }
    Err(ToolError::MissingCredential(
        "OPENAI_API_KEY is not set (and no GPTOOLS_SECRET_COMMAND configured)".to_string(),
    ))
}

fn parse_endpoint(label: &str, raw: &str) -> Result<Url, ToolError> {
    let url = Url::parse(raw.trim()).map_err(|e| ToolError::Config(format!("{label}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ToolError::Config(format!(
            "{label}: unsupported scheme '{other}'"
        ))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
