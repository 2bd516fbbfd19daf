use std::collections::HashMap;

use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;
use solana_sdk::program_pack::Pack;
use spl_token_interface::state::Account as TokenAccount;

use crate::{
    context::token::TokenContext,
    pda::find_record_address,
    views::{
        try_record_view_from_owner_and_data,
        RecordView,
    },
};

pub trait RecordStoreTestHelper {
    fn get_lamports(&self, address: &Address) -> u64;

    fn get_token_account(&self, token: &TokenContext, owner: &Address) -> TokenAccount;

    fn view_record(&self, owner: &Address) -> RecordView;

    /// The rent-exempt minimum for `space` bytes under the context's rent sysvar.
    fn minimum_balance(&self, space: usize) -> u64;
}

impl RecordStoreTestHelper for MolluskContext<HashMap<Address, Account>> {
    fn get_lamports(&self, address: &Address) -> u64 {
        self.account_store
            .borrow()
            .get(address)
            .map(|acc| acc.lamports)
            .unwrap_or_default()
    }

    fn get_token_account(&self, token: &TokenContext, owner: &Address) -> TokenAccount {
        let account_store = self.account_store.borrow();

        let ata = token.get_ata_for(owner);

        let acc = account_store.get(&ata).unwrap_or_else(|| {
            panic!("Token account doesn't exist, owner: {owner}, token account: {ata}")
        });

        TokenAccount::unpack(&acc.data).expect("Should unpack token account")
    }

    fn view_record(&self, owner: &Address) -> RecordView {
        let account_store = self.account_store.borrow();

        let (record, _) = find_record_address(owner);
        let acc = account_store
            .get(&record)
            .expect("Record address should exist in mollusk account store");
        try_record_view_from_owner_and_data(acc.owner, &acc.data)
            .expect("Account data isn't valid for a record slot")
    }

    fn minimum_balance(&self, space: usize) -> u64 {
        self.mollusk.sysvars.rent.minimum_balance(space)
    }
}
