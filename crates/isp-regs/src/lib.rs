//! ISP Register Programming
//!
//! The register map with typed bit-field accessors, the [`RegisterIo`]
//! seam over the memory-mapped transport, and the per-module appliers
//! that turn a validated configuration into ordered register writes.

pub mod apply;
pub mod io;
pub mod map;

pub use apply::{
    apply_all, apply_blc, apply_bpr, apply_cc, apply_ce, apply_dm, apply_ex, apply_histo,
};
pub use io::{MemRegs, RegisterIo};
pub use map::Field;
