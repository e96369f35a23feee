//! In-memory stand-ins for the backend, the browser prompts and the page.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::{Backend, Query};
use crate::error::ApiError;
use crate::render::Fragment;
use crate::resources::{Prompter, ResourceView};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List {
        path: String,
        query: Vec<(String, String)>,
    },
    Create {
        path: String,
        body: Value,
    },
    Delete {
        path: String,
        id: i64,
    },
}

struct Reply {
    result: Result<Value, ApiError>,
    /// Scheduler yields before answering, to let other loads overtake this one.
    yields: usize,
}

/// Answers calls from a queue of canned replies, in order.
#[derive(Default)]
pub struct FakeBackend {
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, result: Result<Value, ApiError>) -> Self {
        self.reply_after(0, result)
    }

    pub fn reply_after(self, yields: usize, result: Result<Value, ApiError>) -> Self {
        self.replies.borrow_mut().push_back(Reply { result, yields });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::List { .. }))
            .count()
    }

    async fn answer(&self, call: Call) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(call.clone());
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("No reply queued for {:?}", call));
        for _ in 0..reply.yields {
            tokio::task::yield_now().await;
        }
        reply.result
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

impl Backend for FakeBackend {
    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let call = Call::List {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        };
        decode(self.answer(call).await?)
    }

    async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, ApiError> {
        let call = Call::Create {
            path: path.to_string(),
            body: serde_json::to_value(payload).expect("payload serializes"),
        };
        decode(self.answer(call).await?)
    }

    async fn delete(&self, path: &str, id: i64) -> Result<(), ApiError> {
        let call = Call::Delete {
            path: path.to_string(),
            id,
        };
        self.answer(call).await.map(|_| ())
    }
}

/// Records alerts and confirms; every confirm gets the same answer.
pub struct RecordingPrompter {
    answer: bool,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

impl RecordingPrompter {
    pub fn confirming(answer: bool) -> Self {
        Self {
            answer,
            alerts: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Prompter for RecordingPrompter {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer
    }
}

/// Keeps every container replacement. The form starts open, as it is when
/// the user submits.
pub struct RecordingView {
    shown: RefCell<Vec<String>>,
    form_visible: Cell<bool>,
    query: Query,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            shown: RefCell::new(Vec::new()),
            form_visible: Cell::new(true),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }

    pub fn last_shown(&self) -> Option<String> {
        self.shown.borrow().last().cloned()
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible.get()
    }
}

impl ResourceView for RecordingView {
    fn show(&self, content: Fragment) {
        self.shown.borrow_mut().push(content.into_string());
    }

    fn set_form_visible(&self, visible: bool) {
        self.form_visible.set(visible);
    }

    fn query(&self) -> Query {
        self.query.clone()
    }
}
