//! Access to the FitTrack REST service.

mod http;

pub use http::HttpBackend;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ApiError;

/// Query string pairs, in the order they are sent.
pub type Query = Vec<(&'static str, String)>;

/// The three calls every resource needs. Paths are resource roots such as
/// `/exercises`; the backend owns ids and validation.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET path?query` decoded as a JSON array.
    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<T>, ApiError>;

    /// `POST path` with a JSON body, decoding the created record.
    async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, ApiError>;

    /// `DELETE path/{id}`; any 2xx counts as success.
    async fn delete(&self, path: &str, id: i64) -> Result<(), ApiError>;
}

impl<B: Backend + ?Sized> Backend for &B {
    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<T>, ApiError> {
        (**self).list(path, query).await
    }

    async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, ApiError> {
        (**self).create(path, payload).await
    }

    async fn delete(&self, path: &str, id: i64) -> Result<(), ApiError> {
        (**self).delete(path, id).await
    }
}

/// Resolve `path` against the base URL, keeping any path prefix the base has.
pub fn endpoint(base: &Url, path: &str, query: &[(&str, String)]) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{}/{}", prefix, path.trim_start_matches('/')));
    url.set_query(None);
    url.set_fragment(None);
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_endpoint_at_origin() {
        let url = endpoint(&base("http://127.0.0.1:8000"), "/exercises", &[]);
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/exercises");
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let url = endpoint(&base("https://fit.example.com/api/"), "/users/5", &[]);
        assert_eq!(url.as_str(), "https://fit.example.com/api/users/5");

        let url = endpoint(&base("https://fit.example.com/api"), "/users", &[]);
        assert_eq!(url.as_str(), "https://fit.example.com/api/users");
    }

    #[test]
    fn test_endpoint_encodes_query_in_order() {
        let query = vec![
            ("exercise_type", "strength".to_string()),
            ("muscle_group", "full_body".to_string()),
        ];
        let url = endpoint(&base("http://localhost:8000/"), "/exercises", &query);
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/exercises?exercise_type=strength&muscle_group=full_body"
        );
    }

    #[test]
    fn test_endpoint_drops_base_query() {
        let url = endpoint(&base("http://localhost:8000/?debug=1#top"), "/routines", &[]);
        assert_eq!(url.as_str(), "http://localhost:8000/routines");
    }
}
