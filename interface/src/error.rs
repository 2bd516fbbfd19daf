use solana_program_error::ProgramError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[repr(u8)]
pub enum RecordStoreError {
    InvalidInstructionTag,
    NotEnoughAccountKeys,
    Unauthorized,
    NotInitialized,
    AlreadyInitialized,
    InsufficientFunds,
    InvalidRecordAddress,
    InvalidAccountDiscriminant,
    InsufficientByteLength,
    InvalidSystemProgram,
}

impl From<RecordStoreError> for ProgramError {
    #[inline(always)]
    fn from(e: RecordStoreError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<RecordStoreError> for &'static str {
    fn from(value: RecordStoreError) -> Self {
        match value {
            RecordStoreError::InvalidInstructionTag => "Invalid instruction tag",
            RecordStoreError::NotEnoughAccountKeys => "Not enough account keys passed",
            RecordStoreError::Unauthorized => "Signer is not the record owner",
            RecordStoreError::NotInitialized => "Record account hasn't been initialized",
            RecordStoreError::AlreadyInitialized => "Record account is already initialized",
            RecordStoreError::InsufficientFunds => "Owner can't cover the rent deposit",
            RecordStoreError::InvalidRecordAddress => "Record address doesn't match derivation",
            RecordStoreError::InvalidAccountDiscriminant => "Invalid account discriminant",
            RecordStoreError::InsufficientByteLength => "Not enough bytes passed",
            RecordStoreError::InvalidSystemProgram => "Invalid system program account",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for RecordStoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{:?}: {msg}", self)
    }
}

#[cfg(all(feature = "std", not(target_os = "solana")))]
impl std::error::Error for RecordStoreError {}

pub type RecordStoreResult = Result<(), RecordStoreError>;

#[cfg(test)]
mod tests {
    use solana_program_error::ProgramError;
    use strum::IntoEnumIterator;

    use super::RecordStoreError;

    #[test]
    fn custom_error_codes_round_trip() {
        for error in RecordStoreError::iter() {
            let ProgramError::Custom(code) = ProgramError::from(error) else {
                panic!("{error:?} should convert to a custom program error");
            };
            assert_eq!(RecordStoreError::from_repr(code as u8), Some(error));
        }
    }

    #[test]
    fn stable_error_codes() {
        // Clients decode these codes from transaction errors, so they must never shift.
        assert_eq!(RecordStoreError::Unauthorized as u8, 2);
        assert_eq!(RecordStoreError::NotInitialized as u8, 3);
        assert_eq!(RecordStoreError::AlreadyInitialized as u8, 4);
        assert_eq!(RecordStoreError::InsufficientFunds as u8, 5);
    }
}
