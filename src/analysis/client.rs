//! Transport to the remote analysis service

use crate::analysis::response::{parse_analysis_response, parse_health_response, HealthStatus};
use crate::analysis::result::AnalysisResult;
use crate::config::ServiceConfig;
use crate::error::{Result, ResumeScanError};
use crate::input::{Document, JobDescription};
use log::{debug, info};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;

/// Everything one analyze call sends.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub document: Document,
    pub job_description: JobDescription,
}

impl AnalyzeRequest {
    pub fn new(document: Document, job_description: JobDescription) -> Self {
        Self {
            document,
            job_description,
        }
    }

    /// Multipart body: `file` always, `job_description` only when non-empty.
    pub fn to_form(&self) -> Result<Form> {
        let file = Part::bytes(self.document.bytes().to_vec())
            .file_name(self.document.file_name().to_string())
            .mime_str(self.document.media_type().as_mime())?;

        let mut form = Form::new().part("file", file);
        if let Some(text) = self.job_description.as_field() {
            form = form.text("job_description", text.to_string());
        }
        Ok(form)
    }
}

/// The remote service that turns a resume into an [`AnalysisResult`].
pub trait AnalysisService {
    fn analyze(&self, request: &AnalyzeRequest) -> impl Future<Output = Result<AnalysisResult>> + Send;
}

impl<S: AnalysisService + Send + Sync> AnalysisService for Arc<S> {
    fn analyze(&self, request: &AnalyzeRequest) -> impl Future<Output = Result<AnalysisResult>> + Send {
        (**self).analyze(request)
    }
}

/// HTTP implementation posting multipart forms to `/analyze-resume`.
#[derive(Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    analyze_url: String,
    health_url: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ResumeScanError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
            health_url: config.health_url(),
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    /// Ask the service whether it is up.
    pub async fn health(&self) -> Result<HealthStatus> {
        debug!("GET {}", self.health_url);
        let response = self.client.get(&self.health_url).send().await?;
        let body = Self::successful_body(response).await?;
        parse_health_response(&body)
    }

    async fn successful_body(response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ResumeScanError::Transport(format!(
                "service responded with status {}: {}",
                status,
                detail.trim()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        let form = request.to_form()?;
        info!(
            "Submitting {} ({} bytes) to {}",
            request.document.file_name(),
            request.document.size(),
            self.analyze_url
        );

        let response = self.client.post(&self.analyze_url).multipart(form).send().await?;
        let body = Self::successful_body(response).await?;
        parse_analysis_response(&body)
    }
}
