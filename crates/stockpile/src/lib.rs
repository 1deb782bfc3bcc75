//! Top-level facade crate for stockpile.
//!
//! Re-exports the inventory core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use stockpile_core::*;
}

pub mod gateway {
    pub use stockpile_gateway::*;
}
