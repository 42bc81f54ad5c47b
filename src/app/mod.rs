//! Application module containing the per-tick session
//!
//! Ties chunk streaming and player movement together in the order the
//! frame loop expects: terrain first, physics second.

mod session;

pub use session::Session;
