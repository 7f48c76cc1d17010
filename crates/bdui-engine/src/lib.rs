//! bdui engine
//!
//! Drives server-driven screens end to end:
//! - [`ScreenHost`] fetches a document, decodes and parses it, maps it to a
//!   widget tree, and reloads on request (stale fetches are dropped)
//! - [`ActionDispatcher`] turns tapped action descriptors into calls on the
//!   host's collaborators ([`Navigator`], [`Presenter`], [`ReloadTrigger`],
//!   [`ApiClient`])
//! - [`SourceFetcher`] reads documents from files or HTTP
//!
//! Collaborators are passed in explicitly through [`Services`]; nothing is
//! looked up globally.

mod api;
mod deps;
mod dispatcher;
mod error;
mod fetch;
mod screen;
mod services;
pub mod test_support;

pub use api::MockApiClient;
pub use deps::{
    Alert, ApiClient, Navigator, Presenter, ReloadSender, ReloadTrigger, Route, Routes, Toast,
    reload_channel,
};
pub use dispatcher::{ActionDispatcher, Ignored, Outcome};
pub use error::{Error, FetchError, LoadError, Result};
pub use fetch::{DocumentSource, Fetcher, SourceFetcher};
pub use screen::{PumpEvent, ScreenContent, ScreenHost};
pub use services::Services;
