//! Terminal relaxation widget: rotating motivational messages and a guided
//! breathing exercise with selectable timing patterns.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod scheduler;
pub mod session;
pub mod shutdown;
pub mod ui;
