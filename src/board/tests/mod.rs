//! Board module tests.
//!
//! - `movegen.rs` - Pseudo-legal generation per piece type
//! - `perft.rs` - Move path counts against known totals
//! - `proptest.rs` - Property-based tests over random games
