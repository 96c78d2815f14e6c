//! Search suggestions
//!
//! Debounced fetching from an ordered chain of third-party suggestion
//! endpoints, plus keyboard and pointer selection over the results.

mod chain;
mod controller;
mod debouncer;
mod fetch_gate;
mod presenter;
mod selection;
mod source;
mod transport;
mod worker;

pub use chain::SourceChain;
pub use controller::{SearchCallback, Suggestions};
pub use debouncer::Debouncer;
pub use fetch_gate::{FetchGate, FetchRoute};
pub use presenter::{InputField, Presenter};
pub use selection::{NavKey, SelectionEvent, SelectionPhase, SelectionState};
pub use source::{MAX_ITEMS, MIN_QUERY_CHARS, ResponseFormat, SourceDescriptor, default_sources};
pub use transport::{FetchError, HttpTransport, Transport};
pub use worker::{FetchHandle, FetchResponse, spawn_worker};
