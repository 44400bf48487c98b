//! Browser-download host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`DownloadService`].
pub type DownloadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that asks the platform to save a remote resource.
pub trait DownloadService {
    /// Triggers a save of `url`, suggesting `file_name` verbatim as the local name.
    fn trigger_download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op download service for unsupported targets.
pub struct NoopDownloadService;

impl DownloadService for NoopDownloadService {
    fn trigger_download<'a>(
        &'a self,
        _url: &'a str,
        _file_name: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Recording download service used by tests.
pub struct MemoryDownloadService {
    triggered: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryDownloadService {
    /// Returns `(url, file_name)` pairs in trigger order.
    pub fn triggered(&self) -> Vec<(String, String)> {
        self.triggered.borrow().clone()
    }
}

impl DownloadService for MemoryDownloadService {
    fn trigger_download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.triggered
                .borrow_mut()
                .push((url.to_string(), file_name.to_string()));
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_download_service_records_suggested_names_verbatim() {
        let service = MemoryDownloadService::default();
        let service_obj: &dyn DownloadService = &service;

        block_on(service_obj.trigger_download("http://h/uploads/a b.txt", "a b.txt"))
            .expect("trigger");

        assert_eq!(
            service.triggered(),
            vec![(
                "http://h/uploads/a b.txt".to_string(),
                "a b.txt".to_string()
            )]
        );
    }
}
