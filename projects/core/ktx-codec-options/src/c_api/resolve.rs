//! C API for resolving codec options into a `ktxBasisParams`-compatible record.

use crate::args::EncodeArgs;
use crate::c_api::error::{KtxcoErrorCode, KtxcoResult};
use crate::codec::ConfigMode;
use crate::host::SystemHost;
use crate::params::BasisParams;
use crate::resolve::resolve;
use alloc::string::ToString;
use core::ffi::{CStr, c_char};
use core::ptr;

/// `mode` value for [`ktxco_resolve`]: a missing codec means no encoding.
pub const KTXCO_CONFIG_MODE_OPTIONAL: u32 = ConfigMode::Optional as u32;
/// `mode` value for [`ktxco_resolve`]: a missing codec is an error.
pub const KTXCO_CONFIG_MODE_REQUIRED: u32 = ConfigMode::Required as u32;

fn config_mode(mode: u32) -> Option<ConfigMode> {
    match mode {
        KTXCO_CONFIG_MODE_OPTIONAL => Some(ConfigMode::Optional),
        KTXCO_CONFIG_MODE_REQUIRED => Some(ConfigMode::Required),
        _ => None,
    }
}

/// Parsed option values for [`ktxco_resolve`].
///
/// Valued options carry a `has_*` presence flag next to the value; flags are
/// present when `true`. Start from [`ktxco_default_encode_args`].
#[allow(missing_docs)]
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct KtxcoEncodeArgs {
    /// Null-terminated codec name, or null if no codec was given.
    pub codec: *const c_char,

    pub has_clevel: bool,
    pub clevel: u32,
    pub has_qlevel: bool,
    pub qlevel: u32,
    pub no_endpoint_rdo: bool,
    pub no_selector_rdo: bool,
    pub has_max_endpoints: bool,
    pub max_endpoints: u32,
    pub has_endpoint_rdo_threshold: bool,
    pub endpoint_rdo_threshold: f32,
    pub has_max_selectors: bool,
    pub max_selectors: u32,
    pub has_selector_rdo_threshold: bool,
    pub selector_rdo_threshold: f32,

    pub has_uastc_quality: bool,
    pub uastc_quality: u32,
    pub uastc_rdo: bool,
    pub has_uastc_rdo_l: bool,
    pub uastc_rdo_l: f32,
    pub has_uastc_rdo_d: bool,
    pub uastc_rdo_d: u32,
    pub has_uastc_rdo_b: bool,
    pub uastc_rdo_b: f32,
    pub has_uastc_rdo_s: bool,
    pub uastc_rdo_s: f32,
    pub uastc_rdo_f: bool,
    pub uastc_rdo_m: bool,

    pub normal_mode: bool,
    pub has_threads: bool,
    pub threads: u32,
    pub no_sse: bool,
}

impl Default for KtxcoEncodeArgs {
    fn default() -> Self {
        Self {
            codec: ptr::null(),
            has_clevel: false,
            clevel: 0,
            has_qlevel: false,
            qlevel: 0,
            no_endpoint_rdo: false,
            no_selector_rdo: false,
            has_max_endpoints: false,
            max_endpoints: 0,
            has_endpoint_rdo_threshold: false,
            endpoint_rdo_threshold: 0.0,
            has_max_selectors: false,
            max_selectors: 0,
            has_selector_rdo_threshold: false,
            selector_rdo_threshold: 0.0,
            has_uastc_quality: false,
            uastc_quality: 0,
            uastc_rdo: false,
            has_uastc_rdo_l: false,
            uastc_rdo_l: 0.0,
            has_uastc_rdo_d: false,
            uastc_rdo_d: 0,
            has_uastc_rdo_b: false,
            uastc_rdo_b: 0.0,
            has_uastc_rdo_s: false,
            uastc_rdo_s: 0.0,
            uastc_rdo_f: false,
            uastc_rdo_m: false,
            normal_mode: false,
            has_threads: false,
            threads: 0,
            no_sse: false,
        }
    }
}

impl KtxcoEncodeArgs {
    /// Converts to [`EncodeArgs`].
    ///
    /// # Safety
    /// `codec` must be null or point to a valid null-terminated string.
    unsafe fn to_encode_args(&self) -> EncodeArgs {
        let codec = if self.codec.is_null() {
            None
        } else {
            // Non UTF-8 names can't match a codec and are reported as invalid.
            let name = unsafe { CStr::from_ptr(self.codec) };
            Some(name.to_string_lossy().to_string())
        };

        EncodeArgs {
            codec,
            clevel: self.has_clevel.then_some(self.clevel),
            qlevel: self.has_qlevel.then_some(self.qlevel),
            no_endpoint_rdo: self.no_endpoint_rdo,
            no_selector_rdo: self.no_selector_rdo,
            max_endpoints: self.has_max_endpoints.then_some(self.max_endpoints),
            endpoint_rdo_threshold: self
                .has_endpoint_rdo_threshold
                .then_some(self.endpoint_rdo_threshold),
            max_selectors: self.has_max_selectors.then_some(self.max_selectors),
            selector_rdo_threshold: self
                .has_selector_rdo_threshold
                .then_some(self.selector_rdo_threshold),
            uastc_quality: self.has_uastc_quality.then_some(self.uastc_quality),
            uastc_rdo: self.uastc_rdo,
            uastc_rdo_l: self.has_uastc_rdo_l.then_some(self.uastc_rdo_l),
            uastc_rdo_d: self.has_uastc_rdo_d.then_some(self.uastc_rdo_d),
            uastc_rdo_b: self.has_uastc_rdo_b.then_some(self.uastc_rdo_b),
            uastc_rdo_s: self.has_uastc_rdo_s.then_some(self.uastc_rdo_s),
            uastc_rdo_f: self.uastc_rdo_f,
            uastc_rdo_m: self.uastc_rdo_m,
            normal_mode: self.normal_mode,
            threads: self.has_threads.then_some(self.threads),
            no_sse: self.no_sse,
        }
    }
}

/// Returns a [`KtxcoEncodeArgs`] with no codec and no options present.
#[unsafe(no_mangle)]
pub extern "C" fn ktxco_default_encode_args() -> KtxcoEncodeArgs {
    KtxcoEncodeArgs::default()
}

/// Resolve encoder options into a `ktxBasisParams`-compatible record.
///
/// The thread count defaults to the machine's hardware concurrency.
/// `out_params` is only written on success.
///
/// # Parameters
/// - `args`: The parsed options
/// - `mode`: [`KTXCO_CONFIG_MODE_OPTIONAL`] or [`KTXCO_CONFIG_MODE_REQUIRED`]
/// - `out_params`: Receives the resolved parameters
///
/// # Returns
/// A [`KtxcoResult`] indicating success or containing an error.
/// An unknown `mode` gives [`KtxcoErrorCode::InvalidArguments`].
///
/// # Safety
/// - `args` must be a valid pointer to a [`KtxcoEncodeArgs`] whose `codec` is null
///   or a valid C string
/// - `out_params` must be valid for writes of one [`BasisParams`]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ktxco_resolve(
    args: *const KtxcoEncodeArgs,
    mode: u32,
    out_params: *mut BasisParams,
) -> KtxcoResult {
    if args.is_null() || out_params.is_null() {
        return KtxcoResult::from_error_code(KtxcoErrorCode::NullPointer);
    }
    let Some(mode) = config_mode(mode) else {
        return KtxcoResult::from_error_code(KtxcoErrorCode::InvalidArguments);
    };

    let args = unsafe { (*args).to_encode_args() };
    match resolve(mode, &args, &SystemHost) {
        Ok(resolved) => {
            unsafe { out_params.write(resolved.params) };
            KtxcoResult::success()
        }
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_uastc() {
        let args = KtxcoEncodeArgs {
            codec: c"UASTC".as_ptr(),
            has_threads: true,
            threads: 2,
            ..KtxcoEncodeArgs::default()
        };
        let mut params = BasisParams::default();

        let result = unsafe { ktxco_resolve(&args, KTXCO_CONFIG_MODE_REQUIRED, &mut params) };

        assert!(result.is_success());
        assert!(params.uastc);
        assert_eq!(params.thread_count, 2);
        assert_eq!(params.struct_size, BasisParams::STRUCT_SIZE);
    }

    #[test]
    fn reports_invalid_arguments_without_writing_output() {
        let args = KtxcoEncodeArgs {
            codec: c"uastc".as_ptr(),
            has_clevel: true,
            clevel: 3,
            ..KtxcoEncodeArgs::default()
        };
        let mut params = BasisParams::default();
        params.thread_count = 12345;

        let result = unsafe { ktxco_resolve(&args, KTXCO_CONFIG_MODE_REQUIRED, &mut params) };

        assert_eq!(result.error_code, KtxcoErrorCode::InvalidArguments);
        assert_eq!(params.thread_count, 12345);
    }

    #[test]
    fn reports_missing_codec() {
        let args = ktxco_default_encode_args();
        let mut params = BasisParams::default();

        let result = unsafe { ktxco_resolve(&args, KTXCO_CONFIG_MODE_REQUIRED, &mut params) };
        assert_eq!(result.error_code, KtxcoErrorCode::InvalidCodecSelection);
    }

    #[test]
    fn rejects_null_pointers() {
        let args = ktxco_default_encode_args();
        let mode = KTXCO_CONFIG_MODE_OPTIONAL;
        let result = unsafe { ktxco_resolve(&args, mode, ptr::null_mut()) };
        assert_eq!(result.error_code, KtxcoErrorCode::NullPointer);

        let mut params = BasisParams::default();
        let result = unsafe { ktxco_resolve(ptr::null(), mode, &mut params) };
        assert_eq!(result.error_code, KtxcoErrorCode::NullPointer);
    }

    #[test]
    fn rejects_unknown_mode_without_writing_output() {
        let args = KtxcoEncodeArgs {
            codec: c"uastc".as_ptr(),
            ..KtxcoEncodeArgs::default()
        };
        let mut params = BasisParams::default();
        params.thread_count = 12345;

        let result = unsafe { ktxco_resolve(&args, 2, &mut params) };

        assert_eq!(result.error_code, KtxcoErrorCode::InvalidArguments);
        assert_eq!(params.thread_count, 12345);
    }

    #[test]
    fn mode_constants_match_config_mode() {
        assert_eq!(config_mode(0), Some(ConfigMode::Optional));
        assert_eq!(config_mode(1), Some(ConfigMode::Required));
        assert_eq!(config_mode(u32::MAX), None);
    }
}
