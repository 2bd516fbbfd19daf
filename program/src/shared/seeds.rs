/// Builds the `[Seed; 3]` signer seeds for a record slot from the owner address and a one-byte
/// bump array.
///
/// # Example
///
/// ```ignore
/// let bump_seed = [bump];
/// let seeds = record_seeds!(owner.address(), &bump_seed);
/// let signers = [pinocchio::cpi::Signer::from(&seeds)];
/// ```
#[macro_export]
macro_rules! record_seeds {
    ( $owner:expr, $bump_seed:expr ) => {
        [
            pinocchio::cpi::Seed::from(record_store_interface::seeds::RECORD_SEED),
            pinocchio::cpi::Seed::from(AsRef::<[u8]>::as_ref($owner)),
            pinocchio::cpi::Seed::from($bump_seed),
        ]
    };
}
