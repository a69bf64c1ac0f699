//! Configuration loading for an HRIS deployment.
//!
//! This module loads the organization file naming the initial salary policy,
//! the notification channels and a seed roster, and turns it into a running
//! [`Registry`](crate::registry::Registry).
//!
//! # Example
//!
//! ```no_run
//! use hris::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/hris.yaml").unwrap();
//! println!("Loaded organization: {}", loader.config().organization);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ChannelConfig, HrisConfig, PolicyConfig, RosterEntry};
