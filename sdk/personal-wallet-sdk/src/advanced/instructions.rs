use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;

/// System Program transfer of `lamports` from `from` to `to`.
/// `from` is marked as a writable signer.
pub fn transfer(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
    system_instruction::transfer(from, to, lamports)
}

/// Compile `instructions` into a message paid for by `payer` and bound to
/// `recent_blockhash`.
///
/// Accounts are deduplicated during compilation, so a payer that also signs
/// an instruction occupies a single signer slot.
pub fn build_message(
    payer: &Pubkey,
    instructions: &[Instruction],
    recent_blockhash: Hash,
) -> Message {
    Message::new_with_blockhash(instructions, Some(payer), &recent_blockhash)
}
