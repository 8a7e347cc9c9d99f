//! One module per family of opcodes, mirroring the instruction groupings of
//! §4.4. Each function implements a single opcode's contract against the
//! processor and returns the cycle cost it consumed. `XEC` is dispatched
//! directly by [`crate::processor::Processor`] since it needs access to the
//! bounded re-entrant fetch/decode/execute path.

pub mod arithmetic;
pub mod control;
pub mod index_ops;
pub mod logic;
pub mod shift;
pub mod transfer;
