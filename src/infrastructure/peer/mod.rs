//! Peer bindings

mod cli;
mod listing;

pub use cli::PeerCli;
pub use listing::parse_listing;
