use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use solana_program_test::{processor, ProgramTest};
use solana_sdk::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Signature, Signer},
    transaction::{Transaction, TransactionError},
};

// The Anchor entrypoint ties the slice and account lifetimes together, which
// the builtin processor signature does not.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    vault_acc::entry(program_id, accounts, data)
}

fn program_test(program_id: Pubkey) -> ProgramTest {
    ProgramTest::new("vault_acc", program_id, processor!(process_instruction))
}

fn initialize_ix(program_id: Pubkey) -> Instruction {
    Instruction {
        program_id,
        accounts: vault_acc::accounts::Initialize {}.to_account_metas(None),
        data: vault_acc::instruction::Initialize {}.data(),
    }
}

#[test]
fn initialize_carries_no_accounts_and_only_the_discriminator() {
    let ix = initialize_ix(vault_acc::ID);

    assert!(ix.accounts.is_empty());
    assert_eq!(ix.data, vault_acc::instruction::Initialize::DISCRIMINATOR);
    assert_eq!(ix.data.len(), 8);
}

#[tokio::test]
async fn is_initialized() {
    let (mut banks_client, payer, recent_blockhash) = program_test(vault_acc::ID).start().await;

    let tx = Transaction::new_signed_with_payer(
        &[initialize_ix(vault_acc::ID)],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );
    let signature = tx.signatures[0];

    banks_client.process_transaction(tx).await.unwrap();

    assert_ne!(signature, Signature::default());
    assert!(!signature.to_string().is_empty());
}

#[tokio::test]
async fn initialize_can_run_repeatedly() {
    let (mut banks_client, payer, _) = program_test(vault_acc::ID).start().await;

    for _ in 0..3 {
        // A throwaway remaining account keeps each message distinct under
        // the same blockhash.
        let mut ix = initialize_ix(vault_acc::ID);
        ix.accounts.push(AccountMeta::new_readonly(Pubkey::new_unique(), false));

        let blockhash = banks_client.get_latest_blockhash().await.unwrap();
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&payer.pubkey()),
            &[&payer],
            blockhash,
        );
        banks_client.process_transaction(tx).await.unwrap();
    }
}

#[tokio::test]
async fn rejects_foreign_program_id() {
    let foreign = Pubkey::new_unique();
    let (mut banks_client, payer, recent_blockhash) = program_test(foreign).start().await;

    let tx = Transaction::new_signed_with_payer(
        &[initialize_ix(foreign)],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );

    let err = banks_client.process_transaction(tx).await.unwrap_err();
    assert_eq!(
        err.unwrap(),
        TransactionError::InstructionError(
            0,
            InstructionError::Custom(anchor_lang::error::ErrorCode::DeclaredProgramIdMismatch as u32),
        )
    );
}

#[tokio::test]
async fn rejects_unknown_discriminator() {
    let (mut banks_client, payer, recent_blockhash) = program_test(vault_acc::ID).start().await;

    let ix = Instruction {
        program_id: vault_acc::ID,
        accounts: vec![],
        data: vec![0xff; 8],
    };
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );

    assert!(banks_client.process_transaction(tx).await.is_err());
}

#[tokio::test]
async fn rejects_empty_instruction_data() {
    let (mut banks_client, payer, recent_blockhash) = program_test(vault_acc::ID).start().await;

    let ix = Instruction {
        program_id: vault_acc::ID,
        accounts: vec![],
        data: vec![],
    };
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );

    assert!(banks_client.process_transaction(tx).await.is_err());
}
