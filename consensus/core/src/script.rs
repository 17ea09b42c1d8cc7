//!
//! Minimal script construction, enough to assemble coinbase scripts.
//!

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_CHECKSIG: u8 = 0xac;

/// Serializes an integer the way script numbers are encoded on the stack:
/// minimal little-endian magnitude with the sign carried in the top bit.
pub fn serialize_script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return vec![];
    }
    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut result = Vec::with_capacity(9);
    while magnitude > 0 {
        result.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }
    // An extra byte is needed when the most significant byte already has the sign bit set
    let last = result.len() - 1;
    if result[last] & 0x80 != 0 {
        result.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        result[last] |= 0x80;
    }
    result
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_op(&mut self, opcode: u8) -> &mut Self {
        self.script.push(opcode);
        self
    }

    /// Pushes `data` with the shortest length prefix able to describe it
    pub fn add_data(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.script.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.script.push(OP_PUSHDATA1);
            self.script.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.script.push(OP_PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.script.push(OP_PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    /// Pushes an integer, using the small-integer opcodes for -1 and 0..=16
    pub fn add_i64(&mut self, value: i64) -> &mut Self {
        match value {
            -1 => self.add_op(OP_1NEGATE),
            0 => self.add_op(OP_0),
            1..=16 => self.add_op(OP_1 + (value as u8 - 1)),
            _ => self.add_data(&serialize_script_num(value)),
        }
    }

    /// Pushes an integer as serialized data, never as a small-integer opcode
    pub fn add_script_num(&mut self, value: i64) -> &mut Self {
        self.add_data(&serialize_script_num(value))
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn drain(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.script)
    }
}

/// Returns `<pubkey> OP_CHECKSIG`
pub fn pay_to_pubkey_script(pubkey: &[u8]) -> Vec<u8> {
    ScriptBuilder::new().add_data(pubkey).add_op(OP_CHECKSIG).drain()
}
