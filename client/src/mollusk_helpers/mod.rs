use std::{
    collections::HashMap,
    path::PathBuf,
};

use mollusk_svm::{
    Mollusk,
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;

pub mod checks;
pub mod helper_trait;
pub mod utils;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `record_store.so` would return the absolute path
/// version of `../target/deploy/record_store`, which is exactly what [`Mollusk::new`] expects.
fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_WORKSPACE_DIR"))
        .join("target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

/// Creates and returns a [`MolluskContext`] with the following created and initialized:
/// - The record store program
/// - The SPL token program
/// - The SPL token 2022 program
/// - The associated token program
/// - The accounts passed
pub fn new_record_store_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mut mollusk = Mollusk::new(
        &record_store_interface::program::ID,
        &deploy_file_to_program_name("record_store.so"),
    );
    mollusk_svm_programs_token::token::add_program(&mut mollusk);
    mollusk_svm_programs_token::token2022::add_program(&mut mollusk);
    mollusk_svm_programs_token::associated_token::add_program(&mut mollusk);

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    // Create each account passed in at its respective address using the specified account data.
    // This "funds" accounts in the sense that it will create the account with the specified
    // lamport balance in its account data.
    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}
