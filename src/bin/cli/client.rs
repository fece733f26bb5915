use reqwest::Client;
use showroom::dto::{CreateInquiryDto, InquiryReceipt};
use showroom::filter::FilterState;
use showroom::models::{Tag, TagKind};
use showroom::views::{
    BrandCatalog, BrandWithCount, ItemPage, ItemPhoto, ItemWithRelations, PhotoPage,
    PhotoWithItems, ProjectPage, ProjectWithRelations,
};

/// Error type for CLI client operations
#[derive(Debug)]
pub enum ClientError {
    /// Server returned an error status with a message body
    Server { status: reqwest::StatusCode, message: String },
    /// Network/connection/request error
    Request(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status.as_u16(), message)
            }
            ClientError::Request(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Request(err) => Some(err),
            ClientError::Server { .. } => None,
        }
    }
}

/// Extension trait for checking HTTP responses and extracting server error messages
trait ResponseExt {
    /// Checks for error status and extracts the server's error message body
    async fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    async fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = match self.json::<serde_json::Value>().await {
            Ok(body) => body.get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => format!("HTTP {}", status),
        };
        Err(ClientError::Server { status, message })
    }
}

/// HTTP client wrapper for communicating with the Showroom server
pub struct ShowroomClient {
    /// The base URL of the server (e.g. "http://localhost:3000")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

/// Appends the serialized filter dimensions to a listing URL
fn with_filter(url: String, filter: &FilterState) -> String {
    let query = filter.to_query_string();
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}

impl ShowroomClient {
    /// Creates a new ShowroomClient
    ///
    /// ### Arguments
    ///
    /// * `base_url` - The base URL of the Showroom server
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    // ── Project endpoints ────────────────────────────────────────────

    /// Lists visible projects matching the filter
    pub async fn list_projects(
        &self,
        filter: &FilterState,
    ) -> Result<Vec<ProjectWithRelations>, ClientError> {
        let url = with_filter(format!("{}/projects", self.base_url), filter);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Gets a project page by slug; `None` when no visible project has it
    pub async fn get_project(&self, slug: &str) -> Result<Option<ProjectPage>, ClientError> {
        let url = format!("{}/projects/{}", self.base_url, slug);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Lists a project's gallery photos with the items they show
    pub async fn list_project_photos(
        &self,
        slug: &str,
    ) -> Result<Vec<PhotoWithItems>, ClientError> {
        let url = format!("{}/projects/{}/photos", self.base_url, slug);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    // ── Brand endpoints ──────────────────────────────────────────────

    /// Lists all brands with their visible project counts
    pub async fn list_brands(&self) -> Result<Vec<BrandWithCount>, ClientError> {
        let url = format!("{}/brands", self.base_url);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Gets a brand catalog by slug; `None` when no brand has it
    pub async fn get_brand(&self, slug: &str) -> Result<Option<BrandCatalog>, ClientError> {
        let url = format!("{}/brands/{}", self.base_url, slug);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    // ── Item endpoints ───────────────────────────────────────────────

    /// Lists items matching the filter
    pub async fn list_items(
        &self,
        filter: &FilterState,
    ) -> Result<Vec<ItemWithRelations>, ClientError> {
        let url = with_filter(format!("{}/items", self.base_url), filter);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Gets an item page by slug; `None` when no item has it
    pub async fn get_item(&self, slug: &str) -> Result<Option<ItemPage>, ClientError> {
        let url = format!("{}/items/{}", self.base_url, slug);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Lists the photos an item appears in
    pub async fn list_item_photos(&self, slug: &str) -> Result<Vec<ItemPhoto>, ClientError> {
        let url = format!("{}/items/{}/photos", self.base_url, slug);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    // ── Photo wall ───────────────────────────────────────────────────

    /// Lists the newest photos across the catalog
    pub async fn list_photos(&self, limit: Option<i64>) -> Result<Vec<PhotoWithItems>, ClientError> {
        let url = format!("{}/photos", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        let response = request.send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Gets a photo page by id; `None` when no visible photo has it
    pub async fn get_photo(&self, id: &str) -> Result<Option<PhotoPage>, ClientError> {
        let url = format!("{}/photos/{}", self.base_url, id);
        let response = self.client.get(&url).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    // ── Tag endpoints ────────────────────────────────────────────────

    /// Lists tags, optionally restricted to one kind
    pub async fn list_tags(&self, kind: Option<TagKind>) -> Result<Vec<Tag>, ClientError> {
        let url = format!("{}/tags", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(kind) = kind {
            request = request.query(&[("kind", kind.as_db_str())]);
        }
        let response = request.send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    // ── Inquiry endpoint ─────────────────────────────────────────────

    /// Submits a visitor inquiry
    pub async fn create_inquiry(
        &self,
        dto: &CreateInquiryDto,
    ) -> Result<InquiryReceipt, ClientError> {
        let url = format!("{}/inquiries", self.base_url);
        let response = self.client.post(&url).json(dto).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }
}
