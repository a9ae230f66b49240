//! The authenticated client and its per-path request handles.

mod executor;
mod handle;

pub use executor::{BASE_URL, IntraClient, IntraClientBuilder};
pub use handle::RequestHandle;
