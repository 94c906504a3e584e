use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::person::fetch::Fetch;

pub struct HttpFetcher {
    client: Client,
    retry_delay: Duration,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<HttpFetcher> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(HttpFetcher {
            client,
            retry_delay: config.retry_delay,
        })
    }

    async fn send(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Value> {
        let mut res = self.send(url).await?;

        if res.status() == StatusCode::TOO_MANY_REQUESTS {
            warn!(
                "Rate limited by {}, waiting {} seconds",
                url,
                self.retry_delay.as_secs()
            );
            tokio::time::sleep(self.retry_delay).await;
            res = self.send(url).await?;
        }

        if !res.status().is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: res.status().as_u16(),
            });
        }

        Ok(res.json::<Value>().await?)
    }
}
