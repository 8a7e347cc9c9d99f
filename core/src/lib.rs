//! Instruction-set emulator core for the DDP-24, a 24-bit sign-magnitude
//! single-address guidance computer in the lineage of the 1964 DDP-24
//! instruction manual, as flown on the Viking Mars lander guidance system.
//!
//! This crate is the simulation engine only: the 32K-word core store, the
//! register file, instruction decode and effective-address resolution, and
//! the fetch/decode/execute step driver. A command-line front end lives in
//! the sibling `ddp24` binary crate.

pub mod decode;
pub mod error;
pub mod memory;
pub mod opcode;
pub mod opcodes;
pub mod processor;
pub mod registers;
pub mod word;

pub use error::LoadError;
pub use processor::Processor;
