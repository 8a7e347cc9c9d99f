//! Bitwise logic against the accumulator.

use crate::opcode::DecodedInstruction;
use crate::processor::Processor;

/// ANA: bitwise AND the operand into A.
pub fn ana(cpu: &mut Processor, _decoded: DecodedInstruction, ea: u32) -> u32 {
    let operand = cpu.memory.read(ea);
    cpu.registers.a &= operand;
    10
}

/// ORA: bitwise OR the operand into A.
pub fn ora(cpu: &mut Processor, _decoded: DecodedInstruction, ea: u32) -> u32 {
    let operand = cpu.memory.read(ea);
    cpu.registers.a |= operand;
    10
}

/// ERA: bitwise exclusive-OR the operand into A.
pub fn era(cpu: &mut Processor, _decoded: DecodedInstruction, ea: u32) -> u32 {
    let operand = cpu.memory.read(ea);
    cpu.registers.a ^= operand;
    10
}
