//! Sign-magnitude arithmetic: add, subtract, multiply, divide.

use crate::opcode::DecodedInstruction;
use crate::processor::Processor;
use crate::word::{from_signed, to_signed, MAGNITUDE_MASK, SIGN_BIT};

/// ADD: round-trip through signed host integers, latching overflow if the
/// sum falls outside the representable ±(2^23−1) range.
pub fn add(cpu: &mut Processor, _decoded: DecodedInstruction, ea: u32) -> u32 {
    let operand = cpu.memory.read(ea);
    let result = to_signed(cpu.registers.a) + to_signed(operand);
    if !(-0x7FFFFF..=0x7FFFFF).contains(&result) {
        cpu.registers.overflow = true;
    }
    cpu.registers.set_a(from_signed(result));
    10
}

/// SUB: as [`add`], but subtracting the operand.
pub fn sub(cpu: &mut Processor, _decoded: DecodedInstruction, ea: u32) -> u32 {
    let operand = cpu.memory.read(ea);
    let result = to_signed(cpu.registers.a) - to_signed(operand);
    if !(-0x7FFFFF..=0x7FFFFF).contains(&result) {
        cpu.registers.overflow = true;
    }
    cpu.registers.set_a(from_signed(result));
    10
}

/// MPY: 23-bit magnitude times 23-bit magnitude makes a 46-bit product,
/// split high 23 bits into A and low 23 bits into B. The sign is the XOR of
/// the two operand signs, applied to both halves, but only when the product
/// is nonzero — a zero product always comes out as `+0` in both registers.
pub fn mpy(cpu: &mut Processor, _decoded: DecodedInstruction, ea: u32) -> u32 {
    let operand = cpu.memory.read(ea);
    let b_mag = (cpu.registers.b & MAGNITUDE_MASK) as u64;
    let y_mag = (operand & MAGNITUDE_MASK) as u64;
    let result_negative = (cpu.registers.b & SIGN_BIT != 0) ^ (operand & SIGN_BIT != 0);

    let product = b_mag * y_mag;
    let a_mag = ((product >> 23) & MAGNITUDE_MASK as u64) as u32;
    let b_mag = (product & MAGNITUDE_MASK as u64) as u32;

    let nonzero = a_mag != 0 || b_mag != 0;
    cpu.registers.a = if result_negative && nonzero { SIGN_BIT | a_mag } else { a_mag };
    cpu.registers.b = if result_negative && nonzero { SIGN_BIT | b_mag } else { b_mag };
    28
}

/// DIV: forms a 46-bit dividend from A:B and divides by the operand's
/// magnitude. An improper divide — dividend magnitude in A already at or
/// past the divisor's magnitude — latches overflow and leaves A and B
/// untouched rather than performing the divide.
pub fn div(cpu: &mut Processor, _decoded: DecodedInstruction, ea: u32) -> u32 {
    let operand = cpu.memory.read(ea);
    let divisor_mag = (operand & MAGNITUDE_MASK) as u64;
    let a_mag = cpu.registers.a & MAGNITUDE_MASK;
    let dividend_negative = cpu.registers.a & SIGN_BIT != 0;
    let divisor_negative = operand & SIGN_BIT != 0;

    if a_mag as u64 >= divisor_mag {
        cpu.registers.overflow = true;
        return 44;
    }

    let dividend = ((a_mag as u64) << 23) | (cpu.registers.b & MAGNITUDE_MASK) as u64;
    let quotient = (dividend / divisor_mag) as u32;
    let remainder = (dividend % divisor_mag) as u32;
    let quotient_negative = dividend_negative ^ divisor_negative;

    cpu.registers.b = if quotient_negative && quotient != 0 { SIGN_BIT | quotient } else { quotient };
    cpu.registers.a = if dividend_negative && remainder != 0 { SIGN_BIT | remainder } else { remainder };
    44
}
