//! Forms API module: session context, the API trait, and its HTTP client

mod client;
mod session;
mod traits;

pub use client::{FormsClient, DEFAULT_ADDRESS};
pub use session::{Credentials, Session};
pub use traits::FormsApi;

#[cfg(test)]
pub use traits::MockFormsApi;
