use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "moonshotai/kimi-k2-instruct";

/// Runtime settings, read from the environment (and `.env` in development).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Checked on every relay call rather than at startup.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub model: String,
    /// `None` means the upstream call may block indefinitely.
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let upstream_timeout = non_empty("GROQ_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            port,
            allowed_origins,
            groq_api_key: non_empty("GROQ_API_KEY"),
            groq_api_url: non_empty("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            model: non_empty("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            upstream_timeout,
        }
    }

    /// Explicit allow-list entries plus any `http://localhost` origin.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        origin.starts_with("http://localhost") || self.allowed_origins.iter().any(|o| o == origin)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
