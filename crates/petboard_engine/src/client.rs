use std::path::Path;
use std::time::Duration;

use petboard_logging::app_warn;
use reqwest::multipart;
use serde_json::{json, Value};

use crate::{ApiFailure, FailureKind, Pet};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One method per remote operation of the Pets API.
#[async_trait::async_trait]
pub trait PetsApi: Send + Sync {
    async fn list_pets(&self) -> Result<Vec<Pet>, ApiFailure>;
    async fn create_pet(&self, pet_name: &str, pet_type: &str) -> Result<(), ApiFailure>;
    async fn update_pet(
        &self,
        pet_id: &str,
        pet_name: &str,
        pet_type: &str,
    ) -> Result<(), ApiFailure>;
    async fn delete_pet(&self, pet_id: &str) -> Result<(), ApiFailure>;
    /// Upload the file as multipart field `file`, then link the returned
    /// SAS URL to the record. The link call is skipped when the upload
    /// response carries no `sasUrl`.
    async fn upload_and_link(&self, pet_id: &str, path: &Path) -> Result<(), ApiFailure>;
    async fn tag_image(&self, pet_id: &str, image_url: &str) -> Result<(), ApiFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPetsApi {
    base_url: String,
    settings: ApiSettings,
}

impl ReqwestPetsApi {
    pub fn new(base_url: &str, settings: ApiSettings) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiFailure> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiFailure::new(FailureKind::Network, err.to_string()))
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/{}", self.base_url, suffix)
    }

    /// Send a request and return its JSON payload.
    ///
    /// The body is read as text first; malformed JSON falls back to the
    /// raw text as a string payload rather than a parse failure.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiFailure> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        let payload = json_or_text(&text);

        if !status.is_success() {
            let message = error_message(&payload, status.as_u16());
            app_warn!("Pets API returned {}: {}", status.as_u16(), message);
            return Err(ApiFailure::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }
        Ok(payload)
    }
}

#[async_trait::async_trait]
impl PetsApi for ReqwestPetsApi {
    async fn list_pets(&self) -> Result<Vec<Pet>, ApiFailure> {
        let client = self.build_client()?;
        let payload = self.execute(client.get(self.url("pets"))).await?;
        // A 2xx body that is not an array is coerced to an empty list.
        if !payload.is_array() {
            return Ok(Vec::new());
        }
        serde_json::from_value(payload)
            .map_err(|err| ApiFailure::new(FailureKind::BadPayload, err.to_string()))
    }

    async fn create_pet(&self, pet_name: &str, pet_type: &str) -> Result<(), ApiFailure> {
        let client = self.build_client()?;
        let body = json!({ "petName": pet_name, "petType": pet_type });
        self.execute(client.post(self.url("pets")).json(&body))
            .await?;
        Ok(())
    }

    async fn update_pet(
        &self,
        pet_id: &str,
        pet_name: &str,
        pet_type: &str,
    ) -> Result<(), ApiFailure> {
        let client = self.build_client()?;
        let body = json!({ "petName": pet_name, "petType": pet_type });
        self.execute(client.put(self.url(&format!("pets/{pet_id}"))).json(&body))
            .await?;
        Ok(())
    }

    async fn delete_pet(&self, pet_id: &str) -> Result<(), ApiFailure> {
        let client = self.build_client()?;
        self.execute(client.delete(self.url(&format!("pets/{pet_id}"))))
            .await?;
        Ok(())
    }

    async fn upload_and_link(&self, pet_id: &str, path: &Path) -> Result<(), ApiFailure> {
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            ApiFailure::new(
                FailureKind::FileRead,
                format!("failed to read {}: {err}", path.display()),
            )
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name));

        let client = self.build_client()?;
        let payload = self
            .execute(
                client
                    .post(self.url(&format!("pets/{pet_id}/media")))
                    .multipart(form),
            )
            .await?;

        let sas_url = payload
            .get("sasUrl")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ApiFailure::new(FailureKind::MissingSasUrl, "Upload did not return sasUrl")
            })?;

        let body = json!({ "sasUrl": sas_url });
        self.execute(
            client
                .post(self.url(&format!("pets/{pet_id}/media/link")))
                .json(&body),
        )
        .await?;
        Ok(())
    }

    async fn tag_image(&self, pet_id: &str, image_url: &str) -> Result<(), ApiFailure> {
        let client = self.build_client()?;
        let body = json!({ "imageUrl": image_url });
        self.execute(
            client
                .post(self.url(&format!("pets/{pet_id}/vision/tag")))
                .json(&body),
        )
        .await?;
        Ok(())
    }
}

fn json_or_text(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// First available of the envelope's `error` or `details` string fields,
/// else the literal `HTTP {status}`.
fn error_message(payload: &Value, status: u16) -> String {
    payload
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| payload.get("details").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiFailure {
    if err.is_timeout() {
        return ApiFailure::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiFailure::new(FailureKind::InvalidUrl, err.to_string());
    }
    ApiFailure::new(FailureKind::Network, err.to_string())
}
