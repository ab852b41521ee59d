use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:5000")]
    pub server_addr: String,

    // --- Completion Provider Args ---
    /// API Key for the completion provider.
    #[arg(long, env = "CHAT_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Base URL for the completion provider API.
    #[arg(long, env = "CHAT_BASE_URL", default_value = "https://api.openai.com")]
    pub chat_base_url: String,

    /// Model name for chat completion (e.g., gpt-4o-mini).
    #[arg(long, env = "CHAT_MODEL", default_value = "gpt-4o-mini")]
    pub chat_model: String,

    /// Timeout in seconds for a single completion request.
    #[arg(long, env = "CHAT_TIMEOUT_SECS", default_value = "30")]
    pub chat_timeout_secs: u64,

    // --- News Provider Args ---
    /// API Key for the news provider (NewsAPI).
    #[arg(long, env = "NEWS_API_KEY", default_value = "")]
    pub news_api_key: String,

    /// Base URL for the news provider API.
    #[arg(long, env = "NEWS_BASE_URL", default_value = "https://newsapi.org")]
    pub news_base_url: String,

    /// Timeout in seconds for each individual news provider request.
    #[arg(long, env = "NEWS_TIMEOUT_SECS", default_value = "8")]
    pub news_timeout_secs: u64,

    // --- Weather Provider Args ---
    /// API Key for the weather provider (OpenWeatherMap).
    #[arg(long, env = "WEATHER_API_KEY", default_value = "")]
    pub weather_api_key: String,

    /// Base URL for the weather provider API.
    #[arg(long, env = "WEATHER_BASE_URL", default_value = "https://api.openweathermap.org")]
    pub weather_base_url: String,

    /// City whose current conditions the /weather endpoint reports.
    #[arg(long, env = "WEATHER_CITY", default_value = "Porto")]
    pub weather_city: String,

    /// Timeout in seconds for a single weather provider request.
    #[arg(long, env = "WEATHER_TIMEOUT_SECS", default_value = "10")]
    pub weather_timeout_secs: u64,
}
