//! The render pipeline of one screen: fetch, decode, parse, map.
//!
//! Fetches run as background tasks; their results come back over a channel and
//! are applied on the task that owns the [`ScreenHost`], so widget
//! construction stays on one thread. Every fetch carries a generation number
//! and only the newest generation is ever applied.

use std::{future, sync::Arc};

use bdui_protocol::{DecodePolicy, ViewNode};
use bdui_render::{EmptyState, ViewMapper, Widget};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task,
};
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

use crate::{
    FetchError, LoadError,
    fetch::{DocumentSource, Fetcher},
};

/// What the screen currently shows.
#[derive(Debug)]
pub enum ScreenContent {
    /// Nothing loaded yet.
    Blank,
    /// A rendered document.
    Tree(Widget),
    /// The last load failed; the empty state is shown instead.
    Failed {
        /// Rendered empty state.
        empty: Widget,
        /// Why loading failed.
        error: LoadError,
    },
}

impl ScreenContent {
    /// The widget to display, if any.
    pub fn widget(&self) -> Option<&Widget> {
        match self {
            Self::Blank => None,
            Self::Tree(w) | Self::Failed { empty: w, .. } => Some(w),
        }
    }

    /// The load error, if the last load failed.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result of one [`ScreenHost::pump`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpEvent {
    /// A fetch of this generation completed and its result is now shown.
    Rendered(u64),
    /// A fetch of this older generation completed and was discarded.
    Stale(u64),
    /// A reload request started a fetch of this generation.
    Reloading(u64),
}

/// A finished fetch.
#[derive(Debug)]
struct Completed {
    /// Generation the fetch was started for.
    generation: u64,
    /// Fetched bytes.
    result: Result<Vec<u8>, FetchError>,
}

/// Owns one screen's document source, current content and reload loop.
///
/// Must be driven from within a Tokio runtime.
pub struct ScreenHost {
    /// Document location.
    source: DocumentSource,
    /// Fetch implementation.
    fetcher: Arc<dyn Fetcher>,
    /// Decode policy for fetched bytes.
    policy: DecodePolicy,
    /// Node-to-widget mapper bound to the screen's dispatcher.
    mapper: ViewMapper,
    /// Shown when a load fails.
    empty_state: EmptyState,
    /// Newest generation started.
    generation: u64,
    /// Fetches started but not yet received.
    in_flight: usize,
    /// Current content.
    content: ScreenContent,
    /// Completion sender cloned into fetch tasks.
    done_tx: UnboundedSender<Completed>,
    /// Completion receiver.
    done_rx: UnboundedReceiver<Completed>,
    /// Reload requests, if wired.
    reload_rx: Option<UnboundedReceiver<()>>,
    /// Fetch tasks.
    tasks: TaskTracker,
}

impl ScreenHost {
    /// A blank screen that will load `source` through `fetcher`.
    pub fn new(source: DocumentSource, fetcher: Arc<dyn Fetcher>, mapper: ViewMapper) -> Self {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            source,
            fetcher,
            policy: DecodePolicy::default(),
            mapper,
            empty_state: EmptyState::default(),
            generation: 0,
            in_flight: 0,
            content: ScreenContent::Blank,
            done_tx,
            done_rx,
            reload_rx: None,
            tasks: TaskTracker::new(),
        }
    }

    /// Builder: decode policy.
    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder: failure screen.
    pub fn with_empty_state(mut self, empty_state: EmptyState) -> Self {
        self.empty_state = empty_state;
        self
    }

    /// Builder: listen for reload requests on `rx` (see [`crate::reload_channel`]).
    pub fn with_reload(mut self, rx: UnboundedReceiver<()>) -> Self {
        self.reload_rx = Some(rx);
        self
    }

    /// Current content.
    pub fn content(&self) -> &ScreenContent {
        &self.content
    }

    /// Newest generation started; 0 before the first load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start fetching the document as a new generation. Returns that generation.
    ///
    /// Any fetch still in flight becomes stale; its result is dropped on arrival.
    pub fn load(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight += 1;
        let generation = self.generation;
        let fetcher = self.fetcher.clone();
        let source = self.source.clone();
        let tx = self.done_tx.clone();
        debug!(generation, source = %source.describe(), "loading screen");
        self.tasks.spawn(async move {
            // The fetch runs in its own task so a panic still settles the generation.
            let fetch = task::spawn(async move { fetcher.fetch(&source).await });
            let result = fetch.await.unwrap_or_else(|e| {
                warn!(generation, error = %e, "fetch task failed");
                Err(FetchError::Task(e))
            });
            // The host may be gone; nothing to deliver to then.
            let _ignored = tx.send(Completed { generation, result });
        });
        generation
    }

    /// Install the result of a fetch started for `generation`.
    ///
    /// Returns false, leaving the content untouched, if a newer load has been
    /// started since.
    pub fn apply(&mut self, generation: u64, result: Result<Vec<u8>, FetchError>) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale document");
            return false;
        }
        // The previous tree is dropped before the new one is built.
        self.content = ScreenContent::Blank;
        self.content = match self.render(result) {
            Ok(tree) => {
                info!(generation, nodes = tree.node_count(), "screen rendered");
                ScreenContent::Tree(tree)
            }
            Err(error) => {
                warn!(generation, %error, "screen failed to load");
                ScreenContent::Failed {
                    empty: self.empty_state.to_widget(),
                    error,
                }
            }
        };
        true
    }

    /// Decode, parse and map fetched bytes.
    fn render(&self, result: Result<Vec<u8>, FetchError>) -> Result<Widget, LoadError> {
        let bytes = result?;
        let node = ViewNode::from_slice(&bytes, self.policy)?;
        debug!(
            nodes = node.node_count(),
            actions = node.action_count(),
            "document parsed"
        );
        Ok(self.mapper.map(&node))
    }

    /// Wait for the next completed fetch or reload request and handle it.
    ///
    /// Returns `None` when nothing is in flight and no reload can arrive.
    pub async fn pump(&mut self) -> Option<PumpEvent> {
        loop {
            if self.in_flight == 0 && self.reload_rx.is_none() {
                return None;
            }
            tokio::select! {
                Some(done) = self.done_rx.recv(), if self.in_flight > 0 => {
                    self.in_flight -= 1;
                    let generation = done.generation;
                    return Some(if self.apply(generation, done.result) {
                        PumpEvent::Rendered(generation)
                    } else {
                        PumpEvent::Stale(generation)
                    });
                }
                msg = next_reload(&mut self.reload_rx) => match msg {
                    Some(()) => return Some(PumpEvent::Reloading(self.load())),
                    None => {
                        debug!("reload channel closed");
                        self.reload_rx = None;
                    }
                },
            }
        }
    }

    /// Load and pump until the new generation is shown.
    pub async fn refresh(&mut self) -> &ScreenContent {
        let mut want = self.load();
        while let Some(event) = self.pump().await {
            match event {
                PumpEvent::Rendered(g) if g == want => break,
                PumpEvent::Reloading(g) => want = g,
                _ => {}
            }
        }
        &self.content
    }

    /// Wait for all fetch tasks to finish.
    pub async fn shutdown(&self) {
        self.tasks.close();
        self.tasks.wait().await;
    }
}

/// Next reload request; pends forever when no channel is wired.
async fn next_reload(rx: &mut Option<UnboundedReceiver<()>>) -> Option<()> {
    match rx {
        Some(rx) => rx.recv().await,
        None => future::pending().await,
    }
}
