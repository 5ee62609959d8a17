#![doc(test(attr(deny(warnings))))]

//! Records Core models business documents and software licenses as closed
//! variant types with capability traits, plus the collections and
//! presentation helpers that query them generically.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod render;
pub mod utils;

pub use errors::{RecordError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Records Core tracing initialized.");
    });
}
