use quill_types::{
    category::CategoryStat,
    draft::{ImageUpload, PostDraft},
    post::{Post, PostStatus},
    session::Session,
    stats::UserStats,
};
use tracing::{debug, error};

use super::{endpoint::Endpoint, error::Error, response::ClientResponse};

/// Configuration for the client.
/// base_url: Origin of the blog backend. (default: http://localhost:5000)
/// user_agent: Sent with every request. (default: quill/<version>)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}

impl Config {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";
    const DEFAULT_USER_AGENT: &'static str = concat!("quill/", env!("CARGO_PKG_VERSION"));

    pub fn new(base_url: Option<String>, user_agent: Option<String>) -> Self {
        Config {
            base_url,
            user_agent,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(Self::DEFAULT_BASE_URL)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(Self::DEFAULT_USER_AGENT)
    }
}

/// A thin client for the blog REST backend.
/// Every call is a single request: no retries, no caching, no de-duplication.
/// Failures come back as `Error` and are the caller's to surface.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Option<Config>) -> Self {
        let cfg = cfg.unwrap_or_default();
        let http = reqwest::Client::builder()
            .user_agent(cfg.user_agent())
            .build()
            .unwrap_or_default();
        Self { cfg, http }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn request(
        &self,
        endpoint: &Endpoint,
        session: &Session,
    ) -> Result<reqwest::RequestBuilder, Error> {
        let url = endpoint
            .url(self.cfg.base_url())
            .ok_or_else(|| Error::InvalidUrl(self.cfg.base_url().to_string()))?;
        let mut request = self.http.request(endpoint.method(), url);
        match session.token() {
            Some(token) => request = request.bearer_auth(token),
            None if endpoint.requires_auth() => return Err(Error::Unauthenticated),
            None => {}
        }
        Ok(request)
    }

    pub async fn send(
        &self,
        endpoint: &Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<ClientResponse, Error> {
        debug!("Sending {} request to {}", endpoint.method(), endpoint);
        let resp = request.send().await.map_err(|e| {
            error!("request {} failed: {}", endpoint, e);
            e
        })?;
        self.handle_response(endpoint, resp).await
    }

    pub async fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<ClientResponse, Error> {
        let status = resp.status();
        if status.is_success() {
            debug!("request: {} status: {}", endpoint, status);
            ClientResponse::parse(endpoint, resp).await
        } else {
            error!("request {} status: {}", endpoint, status);
            Err(Error::StatusCode(status.as_u16()))
        }
    }

    async fn call(&self, endpoint: Endpoint, session: &Session) -> Result<ClientResponse, Error> {
        let request = self.request(&endpoint, session)?;
        self.send(&endpoint, request).await
    }

    pub async fn get_blogs(&self, limit: usize, status: PostStatus) -> Result<Vec<Post>, Error> {
        match self
            .call(Endpoint::Blogs { limit, status }, &Session::anonymous())
            .await?
        {
            ClientResponse::Blogs(blogs) => Ok(blogs),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_blog_by_slug(&self, slug: &str) -> Result<Post, Error> {
        match self
            .call(Endpoint::BlogBySlug(slug.to_string()), &Session::anonymous())
            .await?
        {
            ClientResponse::Blog(blog) => Ok(blog),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_blog_by_id(&self, id: &str) -> Result<Post, Error> {
        match self
            .call(Endpoint::BlogById(id.to_string()), &Session::anonymous())
            .await?
        {
            ClientResponse::Blog(blog) => Ok(blog),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn create_blog(&self, session: &Session, draft: &PostDraft) -> Result<Post, Error> {
        draft.validate()?;
        let endpoint = Endpoint::CreateBlog;
        let request = self.request(&endpoint, session)?.json(draft);
        match self.send(&endpoint, request).await? {
            ClientResponse::Blog(blog) => Ok(blog),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn update_blog(
        &self,
        session: &Session,
        id: &str,
        draft: &PostDraft,
    ) -> Result<Post, Error> {
        draft.validate()?;
        let endpoint = Endpoint::UpdateBlog(id.to_string());
        let request = self.request(&endpoint, session)?.json(draft);
        match self.send(&endpoint, request).await? {
            ClientResponse::Blog(blog) => Ok(blog),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn delete_blog(&self, session: &Session, id: &str) -> Result<(), Error> {
        match self.call(Endpoint::DeleteBlog(id.to_string()), session).await? {
            ClientResponse::Deleted => Ok(()),
            _ => Err(Error::InvalidResponse),
        }
    }

    /// Toggles the caller's like on a post. Returns the post's like set as the
    /// server sees it afterwards.
    pub async fn toggle_like(&self, session: &Session, id: &str) -> Result<Vec<String>, Error> {
        match self.call(Endpoint::Like(id.to_string()), session).await? {
            ClientResponse::Likes(likes) => Ok(likes),
            _ => Err(Error::InvalidResponse),
        }
    }

    /// Uploads an image and returns the URL it is served from.
    pub async fn upload_image(&self, session: &Session, upload: &ImageUpload) -> Result<String, Error> {
        upload.validate()?;
        let endpoint = Endpoint::Upload;
        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);
        let request = self.request(&endpoint, session)?.multipart(form);
        match self.send(&endpoint, request).await? {
            ClientResponse::Uploaded(url) => Ok(url),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn category_stats(&self) -> Result<Vec<CategoryStat>, Error> {
        match self.call(Endpoint::CategoryStats, &Session::anonymous()).await? {
            ClientResponse::CategoryStats(stats) => Ok(stats),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn user_stats(&self, session: &Session) -> Result<UserStats, Error> {
        match self.call(Endpoint::UserStats, session).await? {
            ClientResponse::UserStats(stats) => Ok(stats),
            _ => Err(Error::InvalidResponse),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
