//! Puzzle input client
//!
//! A blocking HTTP client that downloads personal puzzle input from
//! adventofcode.com, authenticated with the `session` cookie.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - The session cookie is sent as a sensitive header and never logged
//! - Redirects are not followed; an expired session surfaces as a status error
//!
//! # Example
//!
//! ```no_run
//! use advent_http_client::AdventClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AdventClient::new()?;
//! let input = client.get_input(2023, 10, "your_session_cookie_here")?;
//! println!("{} bytes", input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AdventClient, AdventClientBuilder, DEFAULT_BASE_URL};
pub use error::AdventError;
