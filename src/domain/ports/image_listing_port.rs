//! Image listing port definition.

use async_trait::async_trait;

use crate::domain::entities::{ImageRecord, PageNumber};
use crate::domain::errors::CatalogError;

/// Port for the remote paginated image listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageListingPort: Send + Sync {
    /// Lists one page of images in service order.
    async fn list_images(
        &self,
        page: PageNumber,
        limit: u32,
    ) -> Result<Vec<ImageRecord>, CatalogError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    /// Builds a record with a source-sized download URL.
    pub fn record(id: &str, author: &str) -> ImageRecord {
        ImageRecord::new(
            id,
            author,
            4000,
            3000,
            format!("https://picsum.photos/id/{id}/4000/3000"),
        )
        .with_url(format!("https://unsplash.com/photos/{id}"))
    }

    /// Scripted listing port for testing.
    #[derive(Default)]
    pub struct StubListingPort {
        pages: Mutex<HashMap<u32, Vec<ImageRecord>>>,
        should_fail: AtomicBool,
        calls: Mutex<Vec<(PageNumber, u32)>>,
        gated: AtomicBool,
        started: Arc<Notify>,
        gate: Arc<Notify>,
    }

    impl StubListingPort {
        /// Creates new stub returning empty pages.
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts the records returned for a page.
        pub fn with_page(self, page: u32, records: Vec<ImageRecord>) -> Self {
            self.pages.lock().insert(page, records);
            self
        }

        /// Holds every request until [`Self::release`] is called.
        pub fn gated(self) -> Self {
            self.gated.store(true, Ordering::SeqCst);
            self
        }

        /// Sets failure behavior.
        pub fn set_should_fail(&self, value: bool) {
            self.should_fail.store(value, Ordering::SeqCst);
        }

        /// Resolves when a request has reached the port.
        pub async fn wait_started(&self) {
            self.started.notified().await;
        }

        /// Lets one held request complete.
        pub fn release(&self) {
            self.gate.notify_one();
        }

        /// Number of requests received.
        pub fn call_count(&self) -> usize {
            self.calls.lock().len()
        }

        /// Requests received, in order.
        pub fn calls(&self) -> Vec<(PageNumber, u32)> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ImageListingPort for StubListingPort {
        async fn list_images(
            &self,
            page: PageNumber,
            limit: u32,
        ) -> Result<Vec<ImageRecord>, CatalogError> {
            self.calls.lock().push((page, limit));
            self.started.notify_one();

            if self.gated.load(Ordering::SeqCst) {
                self.gate.notified().await;
            }

            if self.should_fail.load(Ordering::SeqCst) {
                return Err(CatalogError::network("mock failure"));
            }

            Ok(self
                .pages
                .lock()
                .get(&page.get())
                .cloned()
                .unwrap_or_default())
        }
    }
}
