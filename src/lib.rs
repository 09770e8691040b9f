//! Typed async client for the Pinnacle messaging HTTP API.
//!
//! The crate has three layers: a type layer of coercible models ([`types`]
//! and [`models`]), a transport layer that shapes and sends requests, and a
//! client layer with one resource client per API area.
//!
//! ```rust,no_run
//! use pinnacle::models::SendSms;
//! use pinnacle::{PinnacleClient, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pinnacle::PinnacleError> {
//!     let client = PinnacleClient::new("...")?;
//!     let params = SendSms {
//!         from: "+14155550100".to_owned(),
//!         to: "+14155550123".to_owned(),
//!         text: "hello".to_owned(),
//!         options: None,
//!     };
//!     let sent = client
//!         .messages()
//!         .sms()
//!         .send(&params, &RequestOptions::default())
//!         .await?;
//!     println!("{sent:?}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod models;
mod transport;
pub mod types;

pub use client::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, PinnacleClient, PinnacleClientBuilder,
    PinnacleError, ResponseError, ResponseErrorKind,
};
pub use reqwest::header::HeaderMap;
pub use transport::RequestOptions;
pub use types::{Coerce, ConstraintError, Model, TypeError};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
    pub use tracing;
}
