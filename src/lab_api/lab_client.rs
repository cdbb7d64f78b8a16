use crate::lab_api::models::response::list_of_lab_events_response::ListOfLabEventsResponse;
use anyhow::Context;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct LabClient {
    client: reqwest::Client,
    base_url: String,
}

impl LabClient {
    pub fn new(base_url: &str, api_token: &str, timeout_seconds: u64) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", format!("Bearer {}", api_token).parse()?);

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(Duration::from_secs(timeout_seconds))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl LabApiTrait for LabClient {
    async fn list_lab_events(&self, project: &str) -> anyhow::Result<ListOfLabEventsResponse> {
        let url = format!("{}/projects/{}/events", self.base_url, project);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let contents = response.text().await?;
        let body: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Unable to deserialize response. Body was: \"{}\"", contents))?;
        Ok(ListOfLabEventsResponse::construct_from_object(Some(&body)))
    }
}

pub trait LabApiTrait {
    fn list_lab_events(
        &self,
        project: &str,
    ) -> impl std::future::Future<Output = anyhow::Result<ListOfLabEventsResponse>> + Send;
}

// Implement LabApiTrait for Arc<T> where T: LabApiTrait
impl<T> LabApiTrait for Arc<T>
where
    T: LabApiTrait + Send + Sync,
{
    async fn list_lab_events(&self, project: &str) -> anyhow::Result<ListOfLabEventsResponse> {
        self.as_ref().list_lab_events(project).await
    }
}
