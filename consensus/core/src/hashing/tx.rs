use super::WriterExtensions;
use crate::tx::{Transaction, TransactionInput, TransactionOutput};
use likr_hashes::{GenesisHasher, Hash};

/// Returns the legacy serialization of the transaction, the preimage of its hash
pub fn serialize(tx: &Transaction) -> Vec<u8> {
    let mut writer = Vec::with_capacity(256);
    writer.write_bytes(tx.version.to_le_bytes()).write_compact_size(tx.inputs.len());
    for input in tx.inputs.iter() {
        write_input(&mut writer, input);
    }
    writer.write_compact_size(tx.outputs.len());
    for output in tx.outputs.iter() {
        write_output(&mut writer, output);
    }
    writer.write_bytes(tx.lock_time.to_le_bytes());
    writer
}

/// Returns the transaction hash computed by `hasher`
pub fn hash(tx: &Transaction, hasher: &dyn GenesisHasher) -> Hash {
    hasher.transaction_hash(&serialize(tx))
}

fn write_input(writer: &mut Vec<u8>, input: &TransactionInput) {
    writer
        .write_bytes(input.previous_outpoint.transaction_id)
        .write_bytes(input.previous_outpoint.index.to_le_bytes())
        .write_var_bytes(&input.signature_script)
        .write_bytes(input.sequence.to_le_bytes());
}

fn write_output(writer: &mut Vec<u8>, output: &TransactionOutput) {
    writer.write_bytes(output.value.to_le_bytes()).write_var_bytes(&output.script_public_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::TransactionOutpoint;
    use likr_hashes::{DoubleSha256Hasher, Hasher, Sha256d};

    #[test]
    fn test_serialize_layout() {
        let tx = Transaction::new(
            2,
            vec![TransactionInput::new(TransactionOutpoint::null(), vec![0x51], u32::MAX)],
            vec![TransactionOutput::new(5, vec![0xac])],
            7,
        );
        let bytes = serialize(&tx);
        let mut expected = vec![2, 0, 0, 0, 1];
        expected.extend_from_slice(&[0u8; 32]);
        expected.extend_from_slice(&[0xff; 4]);
        expected.extend_from_slice(&[1, 0x51]);
        expected.extend_from_slice(&[0xff; 4]);
        expected.extend_from_slice(&[1, 5, 0, 0, 0, 0, 0, 0, 0, 1, 0xac]);
        expected.extend_from_slice(&[7, 0, 0, 0]);
        assert_eq!(bytes, expected);
        assert_eq!(hash(&tx, &DoubleSha256Hasher), Sha256d::hash(&expected));
    }
}
