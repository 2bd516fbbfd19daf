// Derived from `pinocchio-token-interface` – commit 75116550519a9ee3fdfa6c819aca91e383fffa39, Apache-2.0.
// Modifications by DASMAC, 2025. See: https://github.com/solana-program/token

use crate::error::RecordStoreError;

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast
/// (e.g., `&*(bytes.as_ptr() as *const Self)`).
///
/// # Safety
/// **Implementor guarantees:**
/// - Use a stable layout (`#[repr(C)]` or `#[repr(transparent)]`).
/// - `LEN` bytes form a valid `Self`. Prefer `[u8; N]` and/or transparent byte wrappers.
/// - `size_of::<Self> == LEN`
/// - `align_of::<Self> == 1`
///
/// **Caller guarantees:**
/// - The bytes represent a valid `Self`.
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;
}

/// Returns a reference to a `T: Transmutable` from the first `T::LEN` bytes of `bytes`.
///
/// Trailing bytes past `T::LEN` are ignored, which lets callers view the header at the start of
/// a variable-length account.
///
/// # Safety
/// - Caller must guarantee the first `T::LEN` bytes are a valid representation of `T`.
#[inline(always)]
pub unsafe fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, RecordStoreError> {
    if bytes.len() < T::LEN {
        return Err(RecordStoreError::InsufficientByteLength);
    }
    Ok(&*(bytes.as_ptr() as *const T))
}

/// Mutable counterpart to [`load`].
///
/// # Safety
/// - Caller must guarantee the first `T::LEN` bytes are a valid representation of `T`.
#[inline(always)]
pub unsafe fn load_mut<T: Transmutable>(bytes: &mut [u8]) -> Result<&mut T, RecordStoreError> {
    if bytes.len() < T::LEN {
        return Err(RecordStoreError::InsufficientByteLength);
    }
    Ok(&mut *(bytes.as_mut_ptr() as *mut T))
}
