//! C API error handling for codec option resolution.

use crate::error::{ConfigError, ErrorKind};
use core::ffi::c_char;

/// C-compatible error codes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KtxcoErrorCode {
    /// Operation succeeded
    Success = 0,
    /// An option was used outside its codec, or while its prerequisite is disabled
    InvalidArguments = 1,
    /// The codec name was missing or not recognised
    InvalidCodecSelection = 2,
    /// Null pointer provided for a required parameter
    NullPointer = 3,
}

/// C-compatible Result type.
#[repr(C)]
pub struct KtxcoResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: KtxcoErrorCode,
}

impl KtxcoResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: KtxcoErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: KtxcoErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, KtxcoErrorCode::Success)
    }
}

impl From<ErrorKind> for KtxcoErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidArguments => KtxcoErrorCode::InvalidArguments,
            ErrorKind::InvalidCodecSelection => KtxcoErrorCode::InvalidCodecSelection,
        }
    }
}

impl From<ConfigError> for KtxcoResult {
    fn from(error: ConfigError) -> Self {
        Self::from_error_code(error.kind().into())
    }
}

impl<T> From<Result<T, ConfigError>> for KtxcoResult {
    fn from(result: Result<T, ConfigError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => e.into(),
        }
    }
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
///
/// # Safety
/// This function is safe to call with any valid error code value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ktxco_error_message(error_code: KtxcoErrorCode) -> *const c_char {
    match error_code {
        KtxcoErrorCode::Success => c"Success".as_ptr(),
        KtxcoErrorCode::InvalidArguments => {
            c"Invalid use of an argument for the selected codec".as_ptr()
        }
        KtxcoErrorCode::InvalidCodecSelection => c"Missing or invalid encode codec".as_ptr(),
        KtxcoErrorCode::NullPointer => c"Null pointer provided for a required parameter".as_ptr(),
    }
}
