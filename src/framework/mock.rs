//! # Mock Store
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of scripted expectations instead of a running
//! [`ResourceActor`](crate::framework::ResourceActor). Use it to test the
//! logic *around* a client (error mapping, payload shaping) deterministically,
//! including failures that a real store never produces on demand.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Person>::new();
//! mock.expect_get().return_err(FrameworkError::ActorClosed);
//!
//! let people = PersonClient::new(mock.client());
//! assert!(matches!(people.get(7).await, Err(PersonError::StorageError(_))));
//! mock.verify();
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::StoredEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted reply for the next request.
enum Expectation<T: StoredEntity> {
    Create(Result<T, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<bool, FrameworkError>),
}

impl<T: StoredEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "Create",
            Expectation::Get(_) => "Get",
            Expectation::List(_) => "List",
            Expectation::Update(_) => "Update",
            Expectation::Delete(_) => "Delete",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking.
pub struct MockClient<T: StoredEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (request, expectation) => {
                        panic!(
                            "Unexpected request {:?}, expected {}",
                            request,
                            expectation.map_or("nothing", |e| e.kind())
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, Expectation::Create)
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder::new(self, Expectation::Get)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder::new(self, Expectation::List)
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, Expectation::Update)
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<'_, T, bool> {
        ExpectationBuilder::new(self, Expectation::Delete)
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that records the reply for one expected request.
pub struct ExpectationBuilder<'a, T: StoredEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<'a, T: StoredEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(mock: &'a MockClient<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self { mock, wrap }
    }

    pub fn return_ok(self, value: R) {
        self.mock.push((self.wrap)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.wrap)(Err(error)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Page;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tag error")]
    struct TagError;

    impl StoredEntity for Tag {
        type Id = u32;
        type Create = String;
        type Update = String;
        type Filter = ();
        type Error = TagError;

        fn from_create_params(id: u32, label: String) -> Result<Self, Self::Error> {
            Ok(Self { id, label })
        }

        fn matches(&self, _filter: &()) -> bool {
            true
        }

        fn on_update(&mut self, label: String) -> Result<(), Self::Error> {
            self.label = label;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mut mock = MockClient::<Tag>::new();
        let tag = Tag {
            id: 1,
            label: "rust".into(),
        };
        mock.expect_create().return_ok(tag.clone());
        mock.expect_list().return_ok(vec![tag.clone()]);
        mock.expect_delete().return_ok(false);

        let client = mock.client();
        assert_eq!(client.create("rust".into()).await.unwrap(), tag);
        assert_eq!(client.list((), Page::default()).await.unwrap(), vec![tag]);
        assert!(!client.delete(1).await.unwrap());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_injects_errors() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get().return_err(FrameworkError::ActorDropped);

        let result = mock.client().get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        mock.verify();
    }
}
