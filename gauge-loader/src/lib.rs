//! Gauge Loader - Category providers and on-demand loading
//!
//! Categories are registered as id → async provider. The loader fetches a
//! category on first access, caches it for its lifetime, and feeds it into
//! the search index. Concurrent requests for the same id share one load.

mod provider;
mod loader;

pub use provider::{CategoryProvider, StaticProvider, ProviderRegistry};
pub use loader::{CategoryLoader, LoaderState, ESSENTIAL_CATEGORIES};
