//! Multipart client for the comparison service.

use common::{
    comparison::UploadResponse,
    document_slot::DocumentSlot,
    viewer_const::{PDF_MIME_TYPE, UPLOAD_PATH},
};
use dioxus::logger::tracing::info;
use reqwest::multipart::{Form, Part};
use viewer::{error::UploadError, selection::SelectedFile, upload::ComparisonClient};

use crate::config::ClientConfig;

#[derive(Debug, Clone)]
pub struct HttpComparisonClient {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpComparisonClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self { client: reqwest::Client::new(), upload_url: config.url(UPLOAD_PATH) }
    }
}

fn pdf_part(file: &SelectedFile) -> Result<Part, UploadError> {
    Part::bytes(file.bytes().to_vec())
        .file_name(file.name().to_string())
        .mime_str(PDF_MIME_TYPE)
        .map_err(|e| UploadError::TransportFailure(e.to_string()))
}

impl ComparisonClient for HttpComparisonClient {
    async fn submit(&self, old: &SelectedFile, new: &SelectedFile) -> Result<UploadResponse, UploadError> {
        let form = Form::new()
            .part(DocumentSlot::New.form_field(), pdf_part(new)?)
            .part(DocumentSlot::Old.form_field(), pdf_part(old)?);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::TransportFailure(e.to_string()))?;
        info!("POST {} -> {}", self.upload_url, response.status());

        // error statuses still carry the JSON envelope
        response.json::<UploadResponse>().await.map_err(|e| {
            if e.is_decode() {
                UploadError::MalformedResponse(e.to_string())
            } else {
                UploadError::TransportFailure(e.to_string())
            }
        })
    }
}
