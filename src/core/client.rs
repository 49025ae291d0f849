use crate::core::{ConfigProvider, Result, TaxApi, TaxRequest, TaxResponse};
use crate::utils::error::TaxClientError;
use async_trait::async_trait;
use reqwest::Client;

/// reqwest 實作的稅務服務客戶端
pub struct HttpTaxApi {
    endpoint: String,
    client: Client,
}

impl HttpTaxApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TaxApi for HttpTaxApi {
    async fn calculate(&self, request: &TaxRequest) -> Result<TaxResponse> {
        // 送出請求,.json() 會自動帶上 Content-Type: application/json
        tracing::debug!("📡 POST {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaxClientError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TaxResponse = response.json().await?;
        Ok(parsed)
    }
}
