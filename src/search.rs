mod engine;

pub use engine::{Engine, SearchMode, encode_component, search_url};
