//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application-layer
//! parameter types where appropriate.

use boardroom_application::config::{CompletionParams, TurnParams};
use boardroom_domain::{BoardContext, MAX_HISTORY_LEN};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Placeholder credential used when no API key is configured.
///
/// The call proceeds and fails remotely; the absence is logged as a warning
/// rather than treated as a distinct local error.
pub const PLACEHOLDER_API_KEY: &str = "dummy-key";

/// OpenAI-compatible provider configuration (`[provider.openai]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API (can point at any compatible endpoint).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve the API key: direct value, then the configured env var,
    /// then the placeholder (with a warning).
    pub fn resolve_api_key(&self) -> String {
        if let Some(key) = &self.api_key
            && !key.is_empty()
        {
            return key.clone();
        }
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => key,
            _ => {
                warn!(
                    "{} is not set. AI calls will fail remotely.",
                    self.api_key_env
                );
                PLACEHOLDER_API_KEY.to_string()
            }
        }
    }
}

/// Chat call configuration (`[chat]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model for both call shapes.
    pub model: String,
    /// Sampling temperature for persona replies.
    pub temperature: f32,
    /// Output token bound for persona replies.
    pub max_tokens: u32,
    /// Sampling temperature for moderator decisions.
    pub decision_temperature: f32,
    /// Output token bound for moderator decisions.
    pub decision_max_tokens: u32,
    /// Maximum history entries sent with a reply call.
    pub history_limit: usize,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 200,
            decision_temperature: 0.5,
            decision_max_tokens: 300,
            history_limit: MAX_HISTORY_LEN,
        }
    }
}

impl FileChatConfig {
    /// Convert to the application-layer per-turn parameter bundle.
    pub fn turn_params(&self) -> TurnParams {
        TurnParams {
            decision: CompletionParams {
                model: self.model.clone(),
                temperature: self.decision_temperature,
                max_tokens: self.decision_max_tokens,
            },
            reply: CompletionParams {
                model: self.model.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
            },
            history_limit: self.history_limit,
        }
    }
}

/// Default company profile (`[board]` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBoardConfig {
    pub company: String,
    pub industry: String,
    pub country: String,
}

impl FileBoardConfig {
    pub fn board_context(&self) -> BoardContext {
        BoardContext::new(&self.company, &self.industry, &self.country)
    }
}

/// REPL configuration (`[repl]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the deliberation spinner while a turn is in flight.
    pub show_progress: bool,
    /// Path to the readline history file.
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Conversation log configuration (`[log]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write the machine-readable conversation transcript (JSONL).
    pub conversation_log: bool,
    /// Explicit path for the transcript; defaults to the platform data dir.
    pub conversation_log_path: Option<String>,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            conversation_log: true,
            conversation_log_path: None,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider settings.
    pub provider: FileProviderConfig,
    /// Chat call settings.
    pub chat: FileChatConfig,
    /// Default company profile.
    pub board: FileBoardConfig,
    /// REPL settings.
    pub repl: FileReplConfig,
    /// Conversation log settings.
    pub log: FileLogConfig,
}

/// Provider section wrapper (`[provider]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub openai: FileOpenAiConfig,
}
