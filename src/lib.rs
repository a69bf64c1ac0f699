//! Human Resource Information System
//!
//! This crate keeps an organization's employee records in memory, computes
//! salaries through a swappable policy, and broadcasts record changes to
//! registered notification channels.

#![warn(missing_docs)]

pub mod activity_log;
pub mod config;
pub mod error;
pub mod factory;
pub mod models;
pub mod notification;
pub mod registry;
pub mod salary;
pub mod store;
