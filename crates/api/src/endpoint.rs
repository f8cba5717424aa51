use std::fmt::{Display, Formatter};

use quill_types::post::PostStatus;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Blogs { limit: usize, status: PostStatus },
    BlogBySlug(String),
    BlogById(String),
    CreateBlog,
    UpdateBlog(String),
    DeleteBlog(String),
    Like(String),
    Upload,
    CategoryStats,
    UserStats,
}

impl Endpoint {
    pub fn method(&self) -> reqwest::Method {
        match self {
            Self::CreateBlog | Self::Like(_) | Self::Upload => reqwest::Method::POST,
            Self::UpdateBlog(_) => reqwest::Method::PUT,
            Self::DeleteBlog(_) => reqwest::Method::DELETE,
            _ => reqwest::Method::GET,
        }
    }

    /// Whether the backend rejects this call without a bearer token.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::CreateBlog
                | Self::UpdateBlog(_)
                | Self::DeleteBlog(_)
                | Self::Like(_)
                | Self::Upload
                | Self::UserStats
        )
    }

    /// Path segments, unescaped. Slugs and ids are single segments.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Blogs { .. } | Self::CreateBlog => vec!["api", "blogs"],
            Self::BlogBySlug(slug) => vec!["api", "blogs", slug.as_str()],
            Self::BlogById(id) => vec!["api", "blogs", "id", id.as_str()],
            Self::UpdateBlog(id) | Self::DeleteBlog(id) => vec!["api", "blogs", id.as_str()],
            Self::Like(id) => vec!["api", "blogs", id.as_str(), "like"],
            Self::Upload => vec!["api", "upload"],
            Self::CategoryStats => vec!["api", "blogs", "category", "stats"],
            Self::UserStats => vec!["api", "blogs", "stats"],
        }
    }

    pub fn query(&self) -> Option<String> {
        match self {
            Self::Blogs { limit, status } => Some(format!("limit={}&status={}", limit, status)),
            _ => None,
        }
    }

    /// Joins the endpoint onto `base_url`, percent-encoding each segment.
    /// `None` when the base is not a usable http(s) origin.
    pub fn url(&self, base_url: &str) -> Option<reqwest::Url> {
        let mut url = reqwest::Url::parse(base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(self.segments());
        url.set_query(self.query().as_deref());
        Some(url)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.segments().join("/"))?;
        match self.query() {
            Some(query) => write!(f, "?{}", query),
            None => Ok(()),
        }
    }
}
