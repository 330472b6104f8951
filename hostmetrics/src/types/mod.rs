//! Snapshot types returned by the metrics API
//!
//! Each snapshot is created for one request, serialized, and dropped.

mod cpu;
mod disk;
mod memory;
mod network;
mod ports;

pub use cpu::*;
pub use disk::*;
pub use memory::*;
pub use network::*;
pub use ports::*;
