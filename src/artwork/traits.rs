//! Trait definition for artwork providers.
//!
//! Every metadata service sits behind `ArtworkProvider` so the chain can hold
//! them as an ordered list, and tests can substitute mocks.

use async_trait::async_trait;

use super::ArtworkError;
use super::query::ArtworkQuery;

/// A source of cover images.
#[async_trait]
pub trait ArtworkProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Find an image URL for the query.
    ///
    /// Returns `ArtworkError::NoMatch` when the service answered but had
    /// nothing usable.
    async fn find_image(&self, query: &ArtworkQuery) -> Result<String, ArtworkError>;
}

/// Mock providers for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use parking_lot::Mutex;

    /// Mock provider that records queries and returns a fixed answer.
    pub struct MockProvider {
        pub name: &'static str,
        pub answer: Result<String, ArtworkError>,
        pub queries: Mutex<Vec<ArtworkQuery>>,
    }

    impl MockProvider {
        /// A provider that always finds `url`.
        pub fn found(name: &'static str, url: &str) -> Self {
            Self::with_answer(name, Ok(url.to_string()))
        }

        /// A provider that never finds anything.
        pub fn no_match(name: &'static str) -> Self {
            Self::with_answer(name, Err(ArtworkError::NoMatch))
        }

        /// A provider whose requests fail.
        pub fn failing(name: &'static str) -> Self {
            Self::with_answer(name, Err(ArtworkError::Network("connection reset".to_string())))
        }

        fn with_answer(name: &'static str, answer: Result<String, ArtworkError>) -> Self {
            Self {
                name,
                answer,
                queries: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.queries.lock().len()
        }
    }

    #[async_trait]
    impl ArtworkProvider for MockProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn find_image(&self, query: &ArtworkQuery) -> Result<String, ArtworkError> {
            self.queries.lock().push(query.clone());
            self.answer.clone()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_records_queries() {
            let mock = MockProvider::found("mock", "http://img/1.jpg");
            let query = ArtworkQuery::new("Artist", "Album");
            assert_eq!(mock.find_image(&query).await.unwrap(), "http://img/1.jpg");
            assert_eq!(mock.calls(), 1);
            assert_eq!(mock.queries.lock()[0], query);
        }

        #[tokio::test]
        async fn test_mock_failure() {
            let mock = MockProvider::failing("mock");
            let result = mock.find_image(&ArtworkQuery::new("A", "B")).await;
            assert!(matches!(result, Err(ArtworkError::Network(_))));
        }
    }
}
