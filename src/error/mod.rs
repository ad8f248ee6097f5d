//! Error types for the two I/O boundaries of the app.
//!
//! | Error | Source | Shown to user |
//! |-------|--------|---------------|
//! | [`FetchError`] | posts request (network, status, decode) | Yes, replaces the screen |
//! | [`StoreError`] | favorites storage (I/O, malformed JSON) | No, logged only |

mod fetch;
mod store;

pub use fetch::{FetchError, FETCH_ERROR_MESSAGE};
pub use store::StoreError;
