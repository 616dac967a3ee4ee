//! iTunes Search integration
//!
//! General "artist release" search; second provider in the chain.

pub mod dto;
mod client;

pub use client::ItunesClient;
