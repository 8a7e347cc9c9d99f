//! The closed set of opcodes this emulator implements, and the pure decode
//! step that splits a fetched word into its fields.

/// Mask covering the 6-bit opcode field once shifted into place.
const OP_MASK: u32 = 0x3F;
/// Opcode field occupies bits 23..18.
const OP_SHIFT: u32 = 18;
/// Bit 17: one-level indirection.
const INDIRECT_BIT: u32 = 1 << 17;
/// Index-select field occupies bits 16..15.
const INDEX_SHIFT: u32 = 15;
const INDEX_MASK: u32 = 0x03;
/// Address field occupies the low 15 bits.
const ADDR_FIELD_MASK: u32 = 0x7FFF;

/// The subset of the 1964 DDP-24 instruction set this emulator implements.
///
/// Discriminants are the instruction's 6-bit octal opcode, written in octal
/// for direct comparison against the instruction manual. Any opcode byte not
/// named here — whether genuinely unassigned or one of the documented but
/// unimplemented 1964 operations (BCD conversion, memory block fill/dump,
/// normalise, and the like) — fails [`Opcode::decode`] and is handled by the
/// processor as a fatal fault (see `Processor::step`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Hlt = 0o00,
    Xec = 0o02,
    Stb = 0o03,
    Sta = 0o05,
    Add = 0o10,
    Sub = 0o11,
    Skg = 0o12,
    Skn = 0o13,
    Ana = 0o15,
    Ora = 0o16,
    Era = 0o17,
    Ldb = 0o23,
    Lda = 0o24,
    Jsl = 0o27,
    Mpy = 0o34,
    Div = 0o35,
    Ars = 0o40,
    Als = 0o41,
    Tab = 0o55,
    Ldx = 0o56,
    Iab = 0o57,
    Six = 0o66,
    Jpl = 0o70,
    Jze = 0o71,
    Jmi = 0o72,
    Jnz = 0o73,
    Jmp = 0o74,
    Nop = 0o77,
}

impl Opcode {
    /// Decode a raw 6-bit opcode value. `None` means the byte names either
    /// an unassigned opcode or one this emulator does not implement; both
    /// cases are a fatal fault to the caller.
    pub fn decode(raw: u8) -> Option<Opcode> {
        use Opcode::*;
        Some(match raw {
            0o00 => Hlt,
            0o02 => Xec,
            0o03 => Stb,
            0o05 => Sta,
            0o10 => Add,
            0o11 => Sub,
            0o12 => Skg,
            0o13 => Skn,
            0o15 => Ana,
            0o16 => Ora,
            0o17 => Era,
            0o23 => Ldb,
            0o24 => Lda,
            0o27 => Jsl,
            0o34 => Mpy,
            0o35 => Div,
            0o40 => Ars,
            0o41 => Als,
            0o55 => Tab,
            0o56 => Ldx,
            0o57 => Iab,
            0o66 => Six,
            0o70 => Jpl,
            0o71 => Jze,
            0o72 => Jmi,
            0o73 => Jnz,
            0o74 => Jmp,
            0o77 => Nop,
            _ => return None,
        })
    }
}

/// A decoded instruction word: the four fields of §4.1, before effective
/// address resolution.
#[derive(Debug, Clone, Copy)]
pub struct DecodedInstruction {
    /// Raw 6-bit opcode, not yet validated against [`Opcode`].
    pub raw_opcode: u8,
    pub indirect: bool,
    pub index: u8,
    pub address: u32,
}

/// Split a fetched word into its four instruction fields. Pure function of
/// the word; there is no ambiguity or endianness to resolve.
pub fn decode(instr: u32) -> DecodedInstruction {
    DecodedInstruction {
        raw_opcode: ((instr >> OP_SHIFT) & OP_MASK) as u8,
        indirect: instr & INDIRECT_BIT != 0,
        index: ((instr >> INDEX_SHIFT) & INDEX_MASK) as u8,
        address: instr & ADDR_FIELD_MASK,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_splits_all_four_fields() {
        // opcode=0o24 (LDA), indirect=1, index=2, address=0x0123
        let word = (0o24u32 << OP_SHIFT) | INDIRECT_BIT | (2 << INDEX_SHIFT) | 0x0123;
        let d = decode(word);
        assert_eq!(d.raw_opcode, 0o24);
        assert!(d.indirect);
        assert_eq!(d.index, 2);
        assert_eq!(d.address, 0x0123);
    }

    #[test]
    fn decode_without_indirect_or_index() {
        let word = (0o05u32 << OP_SHIFT) | 0x100;
        let d = decode(word);
        assert_eq!(d.raw_opcode, 0o05);
        assert!(!d.indirect);
        assert_eq!(d.index, 0);
        assert_eq!(d.address, 0x100);
    }

    #[test]
    fn opcode_decode_recognises_implemented_set() {
        assert_eq!(Opcode::decode(0o24), Some(Opcode::Lda));
        assert_eq!(Opcode::decode(0o77), Some(Opcode::Nop));
    }

    #[test]
    fn opcode_decode_rejects_unassigned_and_unimplemented_bytes() {
        // 0o01 is not an assigned opcode in the original ISA at all.
        assert_eq!(Opcode::decode(0o01), None);
        // 0o46 (NRM, Normalize) is assigned in the original manual but not
        // implemented here; it must fault exactly like a genuinely unknown byte.
        assert_eq!(Opcode::decode(0o46), None);
    }
}
