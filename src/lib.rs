pub mod assistant;
pub mod cli;
pub mod llm;
pub mod models;
pub mod news;
pub mod server;
pub mod weather;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use assistant::Assistant;
use cli::Args;
use llm::openai::OpenAiClient;
use news::NewsClient;
use server::Server;
use weather::WeatherClient;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Completion Base URL: {}", args.chat_base_url);
    info!("Completion Model: {}", args.chat_model);
    info!("News Base URL: {}", args.news_base_url);
    info!("Weather Base URL: {}", args.weather_base_url);
    info!("Weather City: {}", args.weather_city);
    info!("-------------------------");

    for (value, name) in [
        (&args.chat_api_key, "CHAT_API_KEY"),
        (&args.news_api_key, "NEWS_API_KEY"),
        (&args.weather_api_key, "WEATHER_API_KEY"),
    ] {
        if value.is_empty() {
            return Err(format!("{} is required; set it via environment or flag", name).into());
        }
    }

    let completion = OpenAiClient::new(
        &args.chat_api_key,
        args.chat_model.clone(),
        args.chat_base_url.clone(),
        Duration::from_secs(args.chat_timeout_secs),
    )?;
    let assistant = Arc::new(Assistant::new(Arc::new(completion)));

    let news = Arc::new(NewsClient::new(
        args.news_api_key.clone(),
        args.news_base_url.clone(),
        Duration::from_secs(args.news_timeout_secs),
    )?);

    let weather = Arc::new(WeatherClient::new(
        args.weather_api_key.clone(),
        args.weather_base_url.clone(),
        args.weather_city.clone(),
        Duration::from_secs(args.weather_timeout_secs),
    )?);

    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, assistant, news, weather);
    server.run().await?;

    Ok(())
}
