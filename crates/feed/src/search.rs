use quill_types::post::Post;

/// Lowercases `query` and splits it on whitespace. Blank input gives no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// A free-text query. A post matches when every token is a substring of its
/// title, body, tags or author name. No tokens matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    tokens: Vec<String>,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = tokenize(&raw);
        Self { raw, tokens }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches(&self, post: &Post) -> bool {
        if self.is_empty() {
            return true;
        }
        let text = post.searchable_text();
        self.tokens.iter().all(|token| text.contains(token.as_str()))
    }

    /// Keeps matching posts in their original order.
    pub fn filter<'a, I>(&self, posts: I) -> Vec<&'a Post>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        posts.into_iter().filter(|post| self.matches(post)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::post;

    fn sample() -> Vec<Post> {
        let mut hooks = post("1", "React Hooks", &["react"]);
        hooks.content = "State and effects in function components".to_string();
        let mut routines = post("2", "Go Routines", &["go"]);
        routines.content = "Lightweight threads".to_string();
        let mut rust = post("3", "Async Rust", &["rust", "async"]);
        rust.author.name = "Grace Hopper".to_string();
        vec![hooks, routines, rust]
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  React   HOOKS "), vec!["react", "hooks"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let posts = sample();
        assert_eq!(SearchQuery::new("").filter(&posts), posts.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let posts = sample();
        let query = SearchQuery::new("   ");
        assert!(query.is_empty());
        assert_eq!(query.filter(&posts).len(), posts.len());
    }

    #[test]
    fn test_single_token() {
        let posts = vec![
            post("1", "React Hooks", &["react"]),
            post("2", "Go Routines", &["go"]),
        ];
        assert_eq!(ids(&SearchQuery::new("react").filter(&posts)), vec!["1"]);
    }

    #[test]
    fn test_tokens_are_anded() {
        let posts = sample();
        assert_eq!(ids(&SearchQuery::new("react effects").filter(&posts)), vec!["1"]);
        assert!(SearchQuery::new("react threads").filter(&posts).is_empty());
    }

    #[test]
    fn test_matches_body_tags_and_author() {
        let posts = sample();
        assert_eq!(ids(&SearchQuery::new("lightweight").filter(&posts)), vec!["2"]);
        assert_eq!(ids(&SearchQuery::new("ASYNC").filter(&posts)), vec!["3"]);
        assert_eq!(ids(&SearchQuery::new("hopper").filter(&posts)), vec!["3"]);
        assert_eq!(SearchQuery::new("ada").filter(&posts).len(), 2);
    }

    #[test]
    fn test_substring_match() {
        let posts = sample();
        assert_eq!(ids(&SearchQuery::new("rout").filter(&posts)), vec!["2"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let posts = sample();
        for q in ["", "a", "rust", "ada lovelace", "nothing"] {
            let query = SearchQuery::new(q);
            let once = query.filter(&posts);
            let twice = query.filter(once.iter().copied());
            assert_eq!(once, twice, "query {:?}", q);
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let posts = sample();
        let result = SearchQuery::new("s").filter(&posts);
        let positions: Vec<usize> = result
            .iter()
            .map(|r| posts.iter().position(|p| p.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
