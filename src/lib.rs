//! Compass - a multilingual virtual guide for travellers
//!
//! Free-text input is translated to English, routed to one of a fixed set of
//! handlers by keyword, and the reply is translated back into the language
//! the user wrote in.

pub mod config;
pub mod guide;

pub use config::GuideConfig;
