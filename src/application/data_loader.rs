use futures::future::{self, AbortHandle, AbortRegistration, Abortable, Aborted, Either};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use crate::domain::errors::{PlotError, PlotResult};
use crate::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, get_logger};
use crate::domain::plot::{PlotData, PlotDataSource};
use crate::infrastructure::http::PlotDataClient;

/// Generation number of one data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Hands out increasing tokens and remembers the latest one. Issuing a new
/// token aborts whatever request was still in flight.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
    in_flight: RefCell<Option<AbortHandle>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> (RequestToken, AbortRegistration) {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.in_flight.replace(Some(handle)) {
            previous.abort();
        }
        let token = self.latest.get() + 1;
        self.latest.set(token);
        (RequestToken(token), registration)
    }

    /// Supersede whatever is pending without starting a new request.
    pub fn cancel(&self) {
        if let Some(previous) = self.in_flight.replace(None) {
            previous.abort();
        }
        self.latest.set(self.latest.get() + 1);
    }

    pub fn latest(&self) -> u64 {
        self.latest.get()
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest.get()
    }

    fn stale(&self, token: RequestToken) -> PlotError {
        let entry = LogEntry::new(LogLevel::Debug, LogComponent::Application("DataLoader"), "discarding response")
            .with_metadata(&format!("token={} latest={}", token.0, self.latest.get()));
        get_logger().log(entry);
        PlotError::StaleResponse { token: token.0, latest: self.latest.get() }
    }

    /// Pass `result` through if `token` is still the latest request.
    pub fn accept<T>(&self, token: RequestToken, result: PlotResult<T>) -> PlotResult<T> {
        if !self.is_current(token) {
            return Err(self.stale(token));
        }
        self.in_flight.replace(None);
        result
    }
}

/// Resolves a configured data source into plot data; last request wins.
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    client: PlotDataClient,
    tracker: Rc<RequestTracker>,
}

impl DataLoader {
    pub fn new(client: PlotDataClient) -> Self {
        Self { client, tracker: Rc::new(RequestTracker::new()) }
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// Pending loads resolve to `StaleResponse` from here on.
    pub fn cancel(&self) {
        self.tracker.cancel();
    }

    pub fn load(&self, source: PlotDataSource) -> impl Future<Output = PlotResult<PlotData>> + use<> {
        let client = self.client.clone();
        self.load_with(source, move |location| async move { client.fetch(&location).await })
    }

    /// The token is issued immediately, not on first poll, so a later call
    /// supersedes this one even if neither has been awaited yet.
    pub fn load_with<F, Fut>(
        &self,
        source: PlotDataSource,
        fetch: F,
    ) -> impl Future<Output = PlotResult<PlotData>> + use<F, Fut>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = PlotResult<PlotData>> + 'static,
    {
        let (token, registration) = self.tracker.issue();
        let tracker = Rc::clone(&self.tracker);
        let request = match source {
            PlotDataSource::Inline(data) => Either::Left(future::ready(Ok(Ok(data)))),
            PlotDataSource::Remote(location) => Either::Right(Abortable::new(fetch(location), registration)),
        };
        async move {
            match request.await {
                Ok(result) => tracker.accept(token, result),
                Err(Aborted) => Err(tracker.stale(token)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn tokens_increase_and_only_latest_is_current() {
        let tracker = RequestTracker::new();
        let (first, _) = tracker.issue();
        let (second, _) = tracker.issue();
        assert!(first < second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(
            tracker.accept(first, Ok(())),
            Err(PlotError::StaleResponse { token: 1, latest: 2 })
        );
    }

    #[test]
    fn inline_data_resolves_immediately() {
        let loader = DataLoader::default();
        let data = PlotData::from_json(r#"{"mutations": [{"pos": 1, "value": 2}]}"#).unwrap();
        let loaded = block_on(loader.load_with(PlotDataSource::Inline(data.clone()), |_| async {
            Err(PlotError::NotReady)
        }));
        assert_eq!(loaded, Ok(data));
    }
}
