//! Last.fm integration
//!
//! Album-info lookup by artist and release. First provider in the chain.

pub mod dto;
mod client;

pub use client::LastFmClient;
