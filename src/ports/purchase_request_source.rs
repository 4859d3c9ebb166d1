//! Read-only port for the purchase-request feed.

use async_trait::async_trait;

use crate::domain::tasks::PurchaseRequest;

use super::source_error::SourceError;

/// Supplies the current snapshot of purchase requests.
///
/// Implementations must hand the core a flat list regardless of the
/// provider's wrapper shape, and must bound the fetch with a timeout.
#[async_trait]
pub trait PurchaseRequestSource: Send + Sync {
    async fn fetch_requests(&self) -> Result<Vec<PurchaseRequest>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;

    #[async_trait]
    impl PurchaseRequestSource for EmptySource {
        async fn fetch_requests(&self) -> Result<Vec<PurchaseRequest>, SourceError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn trait_is_object_safe() {
        let source: Box<dyn PurchaseRequestSource> = Box::new(EmptySource);
        assert!(source.fetch_requests().await.unwrap().is_empty());
    }
}
