use client::{
    context::record::RecordContext,
    mollusk_helpers::{
        checks::IntoCheckFailure,
        helper_trait::RecordStoreTestHelper,
        new_record_store_mollusk_context,
        utils::create_mock_user_account,
    },
    pda::find_record_address,
    views::RecordView,
};
use mollusk_svm::result::Check;
use record_store_interface::{
    error::RecordStoreError,
    instructions::initialize::initialize,
    state::{
        record_header::{
            RecordHeader,
            RECORD_HEADER_SIZE,
        },
        SYSTEM_PROGRAM_ID,
    },
};
use solana_account::Account;
use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::rent::Rent;

const OWNER_LAMPORTS: u64 = 10_000_000_000;

#[test]
fn initialize_creates_an_empty_record() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);
    let rent = mollusk.minimum_balance(RECORD_HEADER_SIZE);

    mollusk.process_and_validate_instruction(
        &record.initialize(),
        &[
            Check::success(),
            Check::account(&record.record)
                .executable(false)
                .owner(&record_store_interface::program::ID)
                .space(RECORD_HEADER_SIZE)
                .lamports(rent)
                .rent_exempt()
                .data(RecordHeader::init(record.bump, &owner).as_bytes())
                .build(),
            Check::account(&owner).lamports(OWNER_LAMPORTS - rent).build(),
        ],
    );

    assert_eq!(
        mollusk.view_record(&owner),
        RecordView {
            owner,
            bump: record.bump,
            data: vec![],
        }
    );
}

#[test]
fn initialize_twice_fails() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);

    mollusk.process_and_validate_instruction(&record.initialize(), &[Check::success()]);
    let owner_lamports = mollusk.get_lamports(&owner);

    mollusk.process_and_validate_instruction(
        &record.initialize(),
        &[
            RecordStoreError::AlreadyInitialized.into_check_failure(),
            Check::account(&owner).lamports(owner_lamports).build(),
        ],
    );
}

#[test]
fn initialize_requires_the_owner_signature() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);

    let mut unsigned = record.initialize();
    unsigned.accounts[0].is_signer = false;

    mollusk.process_and_validate_instruction(
        &unsigned,
        &[RecordStoreError::Unauthorized.into_check_failure()],
    );
}

#[test]
fn initialize_rejects_a_non_derived_slot() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);

    // Another owner's slot is a valid program address, just not this owner's.
    let (someone_elses_slot, _) = find_record_address(&Address::new_unique());
    for slot in [Address::new_unique(), someone_elses_slot] {
        mollusk.process_and_validate_instruction(
            &initialize(&owner, &slot),
            &[RecordStoreError::InvalidRecordAddress.into_check_failure()],
        );
    }
}

#[test]
fn initialize_without_rent_fails() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), 1_000);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);

    mollusk.process_and_validate_instruction(
        &record.initialize(),
        &[RecordStoreError::InsufficientFunds.into_check_failure()],
    );
}

#[test]
fn initialize_that_leaves_the_owner_rent_paying_fails() {
    let rent = Rent::default().minimum_balance(RECORD_HEADER_SIZE);
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), rent + 1);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);

    mollusk.process_and_validate_instruction(
        &record.initialize(),
        &[
            RecordStoreError::InsufficientFunds.into_check_failure(),
            Check::account(&owner).lamports(rent + 1).build(),
        ],
    );
}

#[test]
fn initialize_checks_the_system_program() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);

    let mut wrong_program = record.initialize();
    wrong_program.accounts[2].pubkey = Address::new_unique();

    mollusk.process_and_validate_instruction(
        &wrong_program,
        &[RecordStoreError::InvalidSystemProgram.into_check_failure()],
    );
}

#[test]
fn malformed_instructions_fail() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);

    let mut missing_accounts = record.initialize();
    missing_accounts.accounts.truncate(2);
    mollusk.process_and_validate_instruction(
        &missing_accounts,
        &[RecordStoreError::NotEnoughAccountKeys.into_check_failure()],
    );

    for data in [vec![], vec![2], vec![u8::MAX, 1, 2, 3]] {
        let bad_tag = Instruction {
            data,
            ..record.initialize()
        };
        mollusk.process_and_validate_instruction(
            &bad_tag,
            &[RecordStoreError::InvalidInstructionTag.into_check_failure()],
        );
    }
}

#[test]
fn initialize_prefunded_slot() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let (record_address, _) = find_record_address(&owner);

    for prefunded in [500_000, 5_000_000] {
        let mollusk = new_record_store_mollusk_context(vec![
            (owner, owner_account.clone()),
            (record_address, Account::new(prefunded, 0, &SYSTEM_PROGRAM_ID)),
        ]);
        let record = RecordContext::new(owner);
        let rent = mollusk.minimum_balance(RECORD_HEADER_SIZE);

        // The owner only pays what's missing, or gets back what's above the minimum.
        mollusk.process_and_validate_instruction(
            &record.initialize(),
            &[
                Check::success(),
                Check::account(&record.record)
                    .owner(&record_store_interface::program::ID)
                    .space(RECORD_HEADER_SIZE)
                    .lamports(rent)
                    .build(),
                Check::account(&owner)
                    .lamports(OWNER_LAMPORTS + prefunded - rent)
                    .build(),
            ],
        );
        assert!(mollusk.view_record(&owner).data.is_empty());
    }
}
