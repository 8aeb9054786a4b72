// src/core/mod.rs

pub mod html;
pub mod net;
pub mod reldate;
pub mod sanitize;

pub use net::{FetchError, HttpClient};
