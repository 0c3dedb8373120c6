use crate::domain::ports::{AlertKind, FieldSource, GatewayReply, PaymentGateway, UiPresenter};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A `HashMap`-backed field snapshot.
///
/// Used by the CLI (populated from a JSON field file) and by tests. Keys are
/// the logical field names the assembler reads.
#[derive(Debug, Default, Clone)]
pub struct MapFieldSource {
    fields: HashMap<String, String>,
}

impl MapFieldSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fields = pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { fields }
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.fields.remove(key);
    }
}

impl From<HashMap<String, String>> for MapFieldSource {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl FieldSource for MapFieldSource {
    fn value(&self, key: &str) -> Option<String> {
        self.fields.get(key).cloned()
    }
}

enum ScriptedReply {
    Reply(GatewayReply),
    TransportFailure(String),
}

/// A [`PaymentGateway`] that replays queued replies and records every
/// request it receives. Clones share the same queue and log.
#[derive(Default, Clone)]
pub struct ScriptedGateway {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: GatewayReply) {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply::Reply(reply));
    }

    pub fn push_transport_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply::TransportFailure(message.to_string()));
    }

    /// The requests posted so far, as (endpoint, body) pairs.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn post(&self, path: &str, body: &Value) -> Result<GatewayReply> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));

        let scripted = self.replies.lock().unwrap().pop_front();
        match scripted {
            Some(ScriptedReply::Reply(reply)) => Ok(reply),
            Some(ScriptedReply::TransportFailure(message)) => {
                Err(CheckoutError::Transport(message))
            }
            None => Err(CheckoutError::Transport(
                "no scripted reply queued".to_string(),
            )),
        }
    }
}

/// An observable record of presenter calls, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    Alert(AlertKind, String),
    QrModal(String),
    Navigate(String),
    DisableSubmit,
    RestoreSubmit,
}

/// A [`UiPresenter`] that records every call instead of rendering.
/// Clones share the same event log.
#[derive(Default, Clone)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<PresenterEvent>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: PresenterEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl UiPresenter for RecordingPresenter {
    fn render_alert(&self, kind: AlertKind, text: &str) {
        self.record(PresenterEvent::Alert(kind, text.to_string()));
    }

    fn show_qr_modal(&self, data_uri: &str) {
        self.record(PresenterEvent::QrModal(data_uri.to_string()));
    }

    fn navigate_to(&self, url: &str) {
        self.record(PresenterEvent::Navigate(url.to_string()));
    }

    fn disable_submit(&self) {
        self.record(PresenterEvent::DisableSubmit);
    }

    fn restore_submit(&self) {
        self.record(PresenterEvent::RestoreSubmit);
    }
}
