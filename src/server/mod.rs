pub mod api;

use std::error::Error;
use std::sync::Arc;

use log::info;

use crate::assistant::Assistant;
use crate::news::NewsClient;
use crate::weather::WeatherClient;

pub struct Server {
    addr: String,
    state: api::AppState,
}

impl Server {
    pub fn new(
        addr: String,
        assistant: Arc<Assistant>,
        news: Arc<NewsClient>,
        weather: Arc<WeatherClient>,
    ) -> Self {
        Self {
            addr,
            state: api::AppState {
                assistant,
                news,
                weather,
            },
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("HTTP server listening on http://{}", self.addr);
        axum::serve(listener, app.into_make_service()).await?;

        Ok(())
    }
}
