//! Wires one screen host to a dispatcher and the console collaborators.

use std::sync::Arc;

use bdui_engine::{
    ActionDispatcher, DocumentSource, Fetcher, MockApiClient, PumpEvent, Routes, ScreenContent,
    ScreenHost, Services, SourceFetcher, reload_channel,
};
use bdui_protocol::{ActionKind, DecodePolicy, ViewNode};
use bdui_render::{ActionSink, EmptyState, ViewMapper};
use config::Config;
use tracing::{debug, info};

use crate::{
    cli::DocArgs,
    console::Console,
    error::{Error, Result},
};

/// Demo document used when no source is configured.
pub const BUNDLED: &[u8] = include_bytes!("../assets/banking_services.json");

/// Result of tapping a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tapped {
    /// The bound action was dispatched.
    Dispatched(Option<ActionKind>),
    /// The button has no action bound.
    Inert,
}

/// A screen and the dispatcher its buttons tap into.
pub struct Session {
    /// Render pipeline.
    host: ScreenHost,
    /// Kept alive so the tree's weak tap handlers resolve.
    dispatcher: Arc<ActionDispatcher>,
    /// Where the document comes from.
    source: DocumentSource,
    /// Decode policy in effect.
    policy: DecodePolicy,
}

impl Session {
    /// Build a session for `doc`, falling back to the configured source.
    pub fn new(config: &Config, doc: &DocArgs) -> Result<Self> {
        let source = match &doc.doc {
            Some(path) => DocumentSource::File(path.clone()),
            None => DocumentSource::from_spec(&config.source, BUNDLED)?,
        };
        let (reload, reload_rx) = reload_channel();
        let console = Arc::new(Console);
        let services = Services {
            navigator: console.clone(),
            presenter: console,
            reload: Arc::new(reload),
            api: Arc::new(MockApiClient::default()),
        };
        let dispatcher = Arc::new(
            ActionDispatcher::new(services, Routes::new(config.screens.iter().cloned()))
                .with_toast_timing(config.toast),
        );
        let sink: Arc<dyn ActionSink> = dispatcher.clone();
        let empty = EmptyState::new(
            config.empty_state.title.clone(),
            config.empty_state.message.clone(),
        );
        let host = ScreenHost::new(
            source.clone(),
            Arc::new(SourceFetcher::new()),
            ViewMapper::new(&sink),
        )
        .with_policy(config.decode_policy)
        .with_empty_state(empty)
        .with_reload(reload_rx);
        debug!(source = %source.describe(), policy = ?config.decode_policy, "session ready");
        Ok(Self {
            host,
            dispatcher,
            source,
            policy: config.decode_policy,
        })
    }

    /// Fetch and parse the document without mapping it.
    pub async fn validate(&self) -> Result<ViewNode> {
        let bytes = SourceFetcher::new().fetch(&self.source).await?;
        Ok(ViewNode::from_slice(&bytes, self.policy)?)
    }

    /// Load the screen and return its outline. A failed load prints the
    /// empty state's outline and returns the load error.
    pub async fn render(&mut self) -> Result<String> {
        match self.host.refresh().await {
            ScreenContent::Failed { empty, error } => {
                println!("{}", empty.outline());
                Err(Error::LoadFailed(error.to_string()))
            }
            content => Ok(content.widget().map(|w| w.outline()).unwrap_or_default()),
        }
    }

    /// Tap the first button titled `title`.
    pub fn tap(&self, title: &str) -> Result<Tapped> {
        let tree = self
            .host
            .content()
            .widget()
            .ok_or_else(|| Error::LoadFailed("nothing rendered".into()))?;
        let Some(button) = tree.find_button(title) else {
            let available = tree
                .buttons()
                .iter()
                .filter_map(|b| b.title.as_deref())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Error::NoSuchButton {
                title: title.to_string(),
                available,
            });
        };
        let kind = button
            .on_tap
            .as_ref()
            .and_then(|h| h.action().action_kind());
        Ok(if button.tap() {
            Tapped::Dispatched(kind)
        } else {
            Tapped::Inert
        })
    }

    /// Let the effects of a tap finish: a reload re-renders, api requests complete.
    pub async fn settle(&mut self, tapped: Tapped) -> Option<String> {
        let mut rerendered = None;
        if tapped == Tapped::Dispatched(Some(ActionKind::Reload)) {
            while let Some(event) = self.host.pump().await {
                info!(?event, "reload");
                if matches!(event, PumpEvent::Rendered(_)) {
                    rerendered = self.host.content().widget().map(|w| w.outline());
                    break;
                }
            }
        }
        self.dispatcher.settle().await;
        self.host.shutdown().await;
        rerendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> Session {
        Session::new(&Config::default(), &DocArgs::default()).unwrap()
    }

    #[test]
    fn bundled_document_is_strictly_valid() {
        let node = ViewNode::from_slice(BUNDLED, DecodePolicy::Strict).unwrap();
        let tree = ViewMapper::detached().map(&node);
        assert_eq!(tree.placeholder_count(), 0);
        assert_eq!(tree.buttons().len(), 7);
    }

    #[tokio::test]
    async fn render_and_tap_bundled() {
        let mut session = bundled();
        let outline = session.render().await.unwrap();
        assert!(outline.contains("Cashback"));
        assert!(outline.contains("-> navigate"));

        assert_eq!(
            session.tap("Profile").unwrap(),
            Tapped::Dispatched(Some(ActionKind::Navigate))
        );
        assert!(matches!(
            session.tap("Transfer"),
            Err(Error::NoSuchButton { .. })
        ));
    }

    #[tokio::test]
    async fn reload_tap_rerenders() {
        let mut session = bundled();
        session.render().await.unwrap();
        let tapped = session.tap("Refresh").unwrap();
        assert_eq!(tapped, Tapped::Dispatched(Some(ActionKind::Reload)));
        let outline = session.settle(tapped).await.unwrap();
        assert!(outline.contains("Banking services"));
    }
}
