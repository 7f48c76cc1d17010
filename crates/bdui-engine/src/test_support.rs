//! Test doubles for the engine's collaborators.
//! These are public so integration tests and downstream hosts can use them;
//! they record calls instead of performing them.

use std::{
    collections::VecDeque,
    result::Result as StdResult,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time;

use crate::{
    ActionDispatcher, FetchError, Routes, Services,
    deps::{Alert, ApiClient, Navigator, Presenter, ReloadTrigger, Route, Toast},
    fetch::{DocumentSource, Fetcher},
};

/// A collaborator call observed by the recording doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `Navigator::navigate`.
    Navigate(Route),
    /// `Presenter::present_alert`.
    Alert(Alert),
    /// `Presenter::show_toast`.
    Toast(Toast),
    /// `Presenter::dismiss`.
    Dismiss,
    /// `ReloadTrigger::reload`.
    Reload,
    /// `ApiClient::request`.
    Api(String),
}

/// Records every effect in call order. Implements all collaborator traits.
#[derive(Debug, Default)]
pub struct Recorder {
    /// Effects in call order.
    effects: Mutex<Vec<Effect>>,
}

impl Recorder {
    /// Shared recorder.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of recorded effects.
    pub fn effects(&self) -> Vec<Effect> {
        self.effects.lock().clone()
    }

    /// Number of recorded effects.
    pub fn len(&self) -> usize {
        self.effects.lock().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.effects.lock().is_empty()
    }

    /// Record one effect.
    fn push(&self, effect: Effect) {
        self.effects.lock().push(effect);
    }

    /// [`Services`] whose every collaborator is this recorder.
    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            navigator: self.clone(),
            presenter: self.clone(),
            reload: self.clone(),
            api: self.clone(),
        }
    }

    /// A dispatcher over this recorder with the built-in routes plus `screens`.
    pub fn dispatcher(self: &Arc<Self>, screens: &[&str]) -> ActionDispatcher {
        ActionDispatcher::new(self.services(), Routes::new(screens.iter().copied()))
    }
}

impl Navigator for Recorder {
    fn navigate(&self, route: &Route) {
        self.push(Effect::Navigate(route.clone()));
    }
}

impl Presenter for Recorder {
    fn present_alert(&self, alert: &Alert) {
        self.push(Effect::Alert(alert.clone()));
    }

    fn show_toast(&self, toast: &Toast) {
        self.push(Effect::Toast(toast.clone()));
    }

    fn dismiss(&self) {
        self.push(Effect::Dismiss);
    }
}

impl ReloadTrigger for Recorder {
    fn reload(&self) {
        self.push(Effect::Reload);
    }
}

#[async_trait]
impl ApiClient for Recorder {
    async fn request(&self, endpoint: &str) -> StdResult<Vec<u8>, FetchError> {
        self.push(Effect::Api(endpoint.to_string()));
        Ok(b"{}".to_vec())
    }
}

/// One scripted fetch response.
#[derive(Debug, Clone)]
pub struct Scripted {
    /// Delay before answering.
    pub delay: Duration,
    /// Body, or `None` to fail with an unknown-endpoint error.
    pub body: Option<Vec<u8>>,
}

impl Scripted {
    /// Answer `body` immediately.
    pub fn ok(body: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            body: Some(body.as_bytes().to_vec()),
        }
    }

    /// Fail immediately.
    pub fn fail() -> Self {
        Self {
            delay: Duration::ZERO,
            body: None,
        }
    }

    /// Builder: answer after `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A fetcher that answers calls from a script, in order, ignoring the source.
/// Once the script runs out the last entry repeats.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    /// Remaining responses.
    script: Mutex<VecDeque<Scripted>>,
    /// Last response handed out.
    last: Mutex<Option<Scripted>>,
    /// Number of fetches made.
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    /// A fetcher answering `script` in order.
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into_iter().collect()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Next scripted response.
    fn next(&self) -> Option<Scripted> {
        let mut last = self.last.lock();
        if let Some(next) = self.script.lock().pop_front() {
            *last = Some(next);
        }
        last.clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, source: &DocumentSource) -> StdResult<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.next().unwrap_or_else(Scripted::fail);
        if !step.delay.is_zero() {
            time::sleep(step.delay).await;
        }
        step.body
            .ok_or_else(|| FetchError::UnknownEndpoint(source.describe()))
    }
}
