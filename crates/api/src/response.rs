use serde::Deserialize;

use super::{endpoint::Endpoint, error::Error};
use quill_types::{category::CategoryStat, post::Post, stats::UserStats};

#[derive(Debug, Clone)]
pub enum ClientResponse {
    Blogs(Vec<Post>),
    Blog(Post),
    Deleted,
    Likes(Vec<String>),
    Uploaded(String),
    CategoryStats(Vec<CategoryStat>),
    UserStats(UserStats),
}

#[derive(Deserialize)]
struct BlogsBody {
    blogs: Vec<Post>,
}

#[derive(Deserialize)]
struct BlogBody {
    blog: Post,
}

#[derive(Deserialize)]
struct LikesBody {
    likes: Vec<String>,
}

#[derive(Deserialize)]
struct UploadBody {
    url: String,
}

#[derive(Deserialize)]
struct StatsBody<T> {
    stats: T,
}

impl ClientResponse {
    pub async fn parse(endpoint: &Endpoint, resp: reqwest::Response) -> Result<Self, Error> {
        let body = resp.text().await?;
        Self::from_body(endpoint, &body)
    }

    pub fn from_body(endpoint: &Endpoint, body: &str) -> Result<Self, Error> {
        Ok(match endpoint {
            Endpoint::Blogs { .. } => {
                ClientResponse::Blogs(serde_json::from_str::<BlogsBody>(body)?.blogs)
            }
            Endpoint::BlogBySlug(_)
            | Endpoint::BlogById(_)
            | Endpoint::CreateBlog
            | Endpoint::UpdateBlog(_) => {
                ClientResponse::Blog(serde_json::from_str::<BlogBody>(body)?.blog)
            }
            Endpoint::DeleteBlog(_) => ClientResponse::Deleted,
            Endpoint::Like(_) => {
                ClientResponse::Likes(serde_json::from_str::<LikesBody>(body)?.likes)
            }
            Endpoint::Upload => {
                ClientResponse::Uploaded(serde_json::from_str::<UploadBody>(body)?.url)
            }
            Endpoint::CategoryStats => ClientResponse::CategoryStats(
                serde_json::from_str::<StatsBody<Vec<CategoryStat>>>(body)?.stats,
            ),
            Endpoint::UserStats => ClientResponse::UserStats(
                serde_json::from_str::<StatsBody<UserStats>>(body)?.stats,
            ),
        })
    }
}
