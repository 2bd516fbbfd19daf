use std::collections::HashMap;

use client::{
    context::record::RecordContext,
    mollusk_helpers::{
        checks::IntoCheckFailure,
        helper_trait::RecordStoreTestHelper,
        new_record_store_mollusk_context,
        utils::create_mock_user_account,
    },
};
use mollusk_svm::{
    result::Check,
    MolluskContext,
};
use record_store_interface::{
    error::RecordStoreError,
    instructions::update::update,
    state::record_header::RECORD_HEADER_SIZE,
    utils::account_space,
};
use solana_account::Account;
use solana_address::Address;
use solana_sdk::rent::Rent;

const OWNER_LAMPORTS: u64 = 10_000_000_000;
const QUICK_BROWN_FORM: &[u8] = b"The quick brown form jumps over the lazy dog";
const LONELY_NIGHT: &str = "片云天共远，永夜月同孤";

/// The rent-exempt minimum for a slot holding `record_len` bytes under mollusk's default rent.
fn default_rent_for(record_len: usize) -> u64 {
    Rent::default().minimum_balance(account_space(record_len))
}

/// Creates a context with a funded owner whose record slot is already initialized.
fn initialized_record(
    owner_lamports: u64,
) -> (MolluskContext<HashMap<Address, Account>>, RecordContext) {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), owner_lamports);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);
    mollusk.process_and_validate_instruction(&record.initialize(), &[Check::success()]);
    (mollusk, record)
}

/// Checks that the slot holds exactly `expected` and the rent-exempt minimum for it.
fn check_record(
    mollusk: &MolluskContext<HashMap<Address, Account>>,
    record: &RecordContext,
    expected: &[u8],
) {
    let store = mollusk.account_store.borrow();
    let slot = store.get(&record.record).expect("Record slot should exist");
    assert_eq!(slot.data.len(), account_space(expected.len()));
    assert_eq!(&slot.data[RECORD_HEADER_SIZE..], expected);
    assert_eq!(
        slot.lamports,
        mollusk.minimum_balance(account_space(expected.len()))
    );
    drop(store);

    assert_eq!(mollusk.view_record(&record.owner).data, expected);
}

#[test]
fn record_lifecycle() -> anyhow::Result<()> {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);
    check_record(&mollusk, &record, b"");

    // Grow: 0 -> 45 bytes.
    assert_eq!(QUICK_BROWN_FORM.len(), 45);
    mollusk.process_and_validate_instruction(
        &record.update(QUICK_BROWN_FORM),
        &[
            Check::success(),
            Check::account(&record.record)
                .space(account_space(QUICK_BROWN_FORM.len()))
                .rent_exempt()
                .build(),
        ],
    );
    check_record(&mollusk, &record, QUICK_BROWN_FORM);

    // Shrink: 45 -> 30 bytes of multi-byte UTF-8.
    assert_eq!(LONELY_NIGHT.len(), 30);
    mollusk.process_and_validate_instruction(
        &record.update(LONELY_NIGHT.as_bytes()),
        &[Check::success()],
    );
    check_record(&mollusk, &record, LONELY_NIGHT.as_bytes());
    assert_eq!(mollusk.view_record(&record.owner).as_utf8()?, LONELY_NIGHT);

    Ok(())
}

#[test]
fn reads_are_idempotent() {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);
    mollusk.process_and_validate_instruction(&record.update(b"abc"), &[Check::success()]);

    let first = mollusk.view_record(&record.owner);
    let second = mollusk.view_record(&record.owner);
    assert_eq!(first, second);
    assert_eq!(first.data, b"abc");
}

#[test]
fn growth_debits_and_shrink_refunds_the_owner() {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);
    let owner = record.owner;
    let empty_rent = mollusk.minimum_balance(account_space(0));
    let grown_rent = mollusk.minimum_balance(account_space(45));
    let shrunk_rent = mollusk.minimum_balance(account_space(30));

    let before = mollusk.get_lamports(&owner);
    mollusk.process_and_validate_instruction(&record.update(&[1; 45]), &[Check::success()]);
    assert_eq!(mollusk.get_lamports(&owner), before - (grown_rent - empty_rent));

    let before = mollusk.get_lamports(&owner);
    mollusk.process_and_validate_instruction(&record.update(&[2; 30]), &[Check::success()]);
    assert_eq!(mollusk.get_lamports(&owner), before + (grown_rent - shrunk_rent));
}

#[test]
fn same_length_update_moves_no_lamports() {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);
    mollusk.process_and_validate_instruction(&record.update(b"hello"), &[Check::success()]);

    let owner_lamports = mollusk.get_lamports(&record.owner);
    let slot_lamports = mollusk.get_lamports(&record.record);
    mollusk.process_and_validate_instruction(
        &record.update(b"world"),
        &[
            Check::success(),
            Check::account(&record.owner)
                .lamports(owner_lamports)
                .build(),
            Check::account(&record.record)
                .lamports(slot_lamports)
                .space(account_space(5))
                .build(),
        ],
    );
    check_record(&mollusk, &record, b"world");
}

#[test]
fn shrink_leaves_no_residual_bytes() {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);

    mollusk.process_and_validate_instruction(&record.update(&[0xAB; 64]), &[Check::success()]);
    mollusk.process_and_validate_instruction(&record.update(&[0xCD; 8]), &[Check::success()]);
    check_record(&mollusk, &record, &[0xCD; 8]);

    // Growing again exposes zeroed bytes only where the new record writes them.
    mollusk.process_and_validate_instruction(&record.update(&[0xEF; 16]), &[Check::success()]);
    check_record(&mollusk, &record, &[0xEF; 16]);
}

#[test]
fn empty_update_shrinks_to_the_header() {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);
    mollusk.process_and_validate_instruction(&record.update(QUICK_BROWN_FORM), &[Check::success()]);

    mollusk.process_and_validate_instruction(
        &record.update(b""),
        &[
            Check::success(),
            Check::account(&record.record)
                .space(RECORD_HEADER_SIZE)
                .rent_exempt()
                .build(),
        ],
    );
    check_record(&mollusk, &record, b"");
}

#[test]
fn update_by_another_signer_fails() {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);
    mollusk.process_and_validate_instruction(&record.update(b"mine"), &[Check::success()]);

    let (mallory, mallory_account) =
        create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    mollusk
        .account_store
        .borrow_mut()
        .insert(mallory, mallory_account);

    mollusk.process_and_validate_instruction(
        &update(&mallory, &record.record, b"not yours"),
        &[RecordStoreError::Unauthorized.into_check_failure()],
    );
    check_record(&mollusk, &record, b"mine");
}

#[test]
fn update_requires_the_owner_signature() {
    let (mollusk, record) = initialized_record(OWNER_LAMPORTS);

    let mut unsigned = record.update(b"unsigned");
    unsigned.accounts[0].is_signer = false;

    mollusk.process_and_validate_instruction(
        &unsigned,
        &[RecordStoreError::Unauthorized.into_check_failure()],
    );
    check_record(&mollusk, &record, b"");
}

#[test]
fn update_before_initialize_fails() {
    let (owner, owner_account) = create_mock_user_account(Address::new_unique(), OWNER_LAMPORTS);
    let mollusk = new_record_store_mollusk_context(vec![(owner, owner_account)]);
    let record = RecordContext::new(owner);

    mollusk.process_and_validate_instruction(
        &record.update(b"too early"),
        &[RecordStoreError::NotInitialized.into_check_failure()],
    );
}

#[test]
fn growth_beyond_the_owner_balance_fails() {
    let (mollusk, record) = initialized_record(50_000_000);
    let owner_lamports = mollusk.get_lamports(&record.owner);
    let big_record = vec![7; 10_000];
    assert!(
        mollusk.minimum_balance(account_space(big_record.len())) > owner_lamports,
        "The owner should be unable to afford the larger record"
    );

    mollusk.process_and_validate_instruction(
        &record.update(&big_record),
        &[
            RecordStoreError::InsufficientFunds.into_check_failure(),
            Check::account(&record.owner)
                .lamports(owner_lamports)
                .build(),
        ],
    );
    check_record(&mollusk, &record, b"");
}

#[test]
fn growth_that_leaves_the_owner_rent_paying_fails() {
    let header_rent = default_rent_for(0);
    let grown_rent = default_rent_for(200);
    let increment = grown_rent - header_rent;

    // One lamport left over would leave the owner below its own rent-exempt minimum.
    let (mollusk, record) = initialized_record(header_rent + increment + 1);
    assert_eq!(mollusk.get_lamports(&record.owner), increment + 1);

    mollusk.process_and_validate_instruction(
        &record.update(&[9; 200]),
        &[
            RecordStoreError::InsufficientFunds.into_check_failure(),
            Check::account(&record.owner)
                .lamports(increment + 1)
                .build(),
        ],
    );
    check_record(&mollusk, &record, b"");
}

#[test]
fn growth_may_empty_the_owner() {
    let header_rent = default_rent_for(0);
    let increment = default_rent_for(200) - header_rent;

    let (mollusk, record) = initialized_record(header_rent + increment);
    mollusk.process_and_validate_instruction(
        &record.update(&[9; 200]),
        &[
            Check::success(),
            Check::account(&record.owner).lamports(0).build(),
        ],
    );
    check_record(&mollusk, &record, &[9; 200]);
}
