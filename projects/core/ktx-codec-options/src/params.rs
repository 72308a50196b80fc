//! The resolved parameter record handed to the Basis encoder.
//!
//! [`BasisParams`] mirrors the native `ktxBasisParams` structure field for field,
//! so it can be passed across FFI by pointer without conversion.

use core::ffi::c_char;
use core::mem::size_of;

/// Default ETC1S compression level of the native library.
pub const ETC1S_DEFAULT_COMPRESSION_LEVEL: u32 = 2;

/// Quality level the encoder uses when neither a quality level nor both
/// cluster limits were supplied.
pub const DEFAULT_QUALITY_LEVEL: u32 = 128;

/// UASTC pack level: fastest, lowest quality.
pub const UASTC_LEVEL_FASTEST: u32 = 0;
/// UASTC pack level: faster.
pub const UASTC_LEVEL_FASTER: u32 = 1;
/// UASTC pack level: default speed/quality tradeoff.
pub const UASTC_LEVEL_DEFAULT: u32 = 2;
/// UASTC pack level: slower.
pub const UASTC_LEVEL_SLOWER: u32 = 3;
/// UASTC pack level: very slow, highest quality.
pub const UASTC_LEVEL_VERYSLOW: u32 = 4;
/// Highest valid UASTC pack level.
pub const UASTC_MAX_LEVEL: u32 = UASTC_LEVEL_VERYSLOW;
/// Bits of the UASTC flags that hold the pack level.
pub const UASTC_LEVEL_MASK: u32 = 0xF;

/// Canonical, fully resolved Basis encoder configuration.
///
/// Layout-compatible with `ktxBasisParams`. Instances are produced by
/// [`CodecOptionsBuilder::finish`](crate::CodecOptionsBuilder::finish) and are
/// never observable in a partially validated state.
///
/// Numeric fields left at `0` mean "let the encoder choose".
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct BasisParams {
    /// Size of this structure in bytes; used by the native side as a version tag.
    pub struct_size: u32,
    /// Encode to UASTC instead of ETC1S.
    pub uastc: bool,
    /// Emit encoder progress output.
    pub verbose: bool,
    /// Forbid use of the SSE instruction set.
    pub no_sse: bool,
    /// Number of encoder threads.
    pub thread_count: u32,

    // ETC1S / BasisLZ
    /// ETC1S compression level, a speed vs. quality tradeoff.
    pub compression_level: u32,
    /// ETC1S quality level, `[1, 255]`, or `0` when unset.
    pub quality_level: u32,
    /// Maximum number of color endpoint clusters, `[1, 16128]`, or `0` when unset.
    pub max_endpoints: u32,
    /// Endpoint RDO quality threshold; `0.0` uses the encoder default.
    pub endpoint_rdo_threshold: f32,
    /// Maximum number of color selector clusters, `[1, 16128]`, or `0` when unset.
    pub max_selectors: u32,
    /// Selector RDO quality threshold; `0.0` uses the encoder default.
    pub selector_rdo_threshold: f32,
    /// Swizzle applied to the input before encoding; all zero for none.
    pub input_swizzle: [c_char; 4],
    /// Treat the input as a normal map.
    pub normal_map: bool,
    /// Map RG input to RGB + A.
    pub separate_rg_to_rgb_a: bool,
    /// Apply the texture's swizzle metadata before encoding.
    pub pre_swizzle: bool,
    /// Disable endpoint rate distortion optimisation.
    pub no_endpoint_rdo: bool,
    /// Disable selector rate distortion optimisation.
    pub no_selector_rdo: bool,

    // UASTC
    /// UASTC pack flags; the low bits ([`UASTC_LEVEL_MASK`]) hold the pack level.
    pub uastc_flags: u32,
    /// Enable the UASTC RDO post-process.
    pub uastc_rdo: bool,
    /// UASTC RDO quality scalar (lambda), or `0.0` when unset.
    pub uastc_rdo_quality_scalar: f32,
    /// UASTC RDO dictionary size in bytes, or `0` when unset.
    pub uastc_rdo_dict_size: u32,
    /// UASTC RDO max smooth block error scale, or `0.0` when unset.
    pub uastc_rdo_max_smooth_block_error_scale: f32,
    /// UASTC RDO max smooth block standard deviation, or `0.0` when unset.
    pub uastc_rdo_max_smooth_block_std_dev: f32,
    /// Do not favour simpler UASTC modes during RDO.
    pub uastc_rdo_dont_favor_simpler_modes: bool,
    /// Disable RDO multithreading.
    pub uastc_rdo_no_multithreading: bool,
}

impl BasisParams {
    /// Declared size of the structure, written to [`struct_size`](Self::struct_size).
    pub const STRUCT_SIZE: u32 = size_of::<BasisParams>() as u32;

    /// The UASTC pack level encoded in [`uastc_flags`](Self::uastc_flags).
    #[inline]
    pub fn uastc_level(&self) -> u32 {
        self.uastc_flags & UASTC_LEVEL_MASK
    }
}

impl Default for BasisParams {
    /// Library-level defaults, before any option or derived default is applied.
    fn default() -> Self {
        Self {
            struct_size: Self::STRUCT_SIZE,
            uastc: false,
            verbose: false,
            no_sse: false,
            thread_count: 1,
            // One below the library default, matching basisu_tool since 1.13.
            compression_level: ETC1S_DEFAULT_COMPRESSION_LEVEL - 1,
            quality_level: 0,
            max_endpoints: 0,
            endpoint_rdo_threshold: 0.0,
            max_selectors: 0,
            selector_rdo_threshold: 0.0,
            input_swizzle: [0; 4],
            normal_map: false,
            separate_rg_to_rgb_a: false,
            pre_swizzle: false,
            no_endpoint_rdo: false,
            no_selector_rdo: false,
            uastc_flags: UASTC_LEVEL_DEFAULT,
            uastc_rdo: false,
            uastc_rdo_quality_scalar: 0.0,
            uastc_rdo_dict_size: 0,
            uastc_rdo_max_smooth_block_error_scale: 0.0,
            uastc_rdo_max_smooth_block_std_dev: 0.0,
            uastc_rdo_dont_favor_simpler_modes: false,
            uastc_rdo_no_multithreading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn struct_size_matches_declared_size() {
        let params = BasisParams::default();
        assert_eq!(params.struct_size as usize, size_of::<BasisParams>());
    }

    #[test]
    fn layout_matches_native_structure() {
        // Offsets of `ktxBasisParams` with a 1-byte `ktx_bool_t`.
        assert_eq!(offset_of!(BasisParams, struct_size), 0);
        assert_eq!(offset_of!(BasisParams, uastc), 4);
        assert_eq!(offset_of!(BasisParams, verbose), 5);
        assert_eq!(offset_of!(BasisParams, no_sse), 6);
        assert_eq!(offset_of!(BasisParams, thread_count), 8);
        assert_eq!(offset_of!(BasisParams, compression_level), 12);
        assert_eq!(offset_of!(BasisParams, quality_level), 16);
        assert_eq!(offset_of!(BasisParams, max_endpoints), 20);
        assert_eq!(offset_of!(BasisParams, endpoint_rdo_threshold), 24);
        assert_eq!(offset_of!(BasisParams, max_selectors), 28);
        assert_eq!(offset_of!(BasisParams, selector_rdo_threshold), 32);
        assert_eq!(offset_of!(BasisParams, input_swizzle), 36);
        assert_eq!(offset_of!(BasisParams, normal_map), 40);
        assert_eq!(offset_of!(BasisParams, no_selector_rdo), 44);
        assert_eq!(offset_of!(BasisParams, uastc_flags), 48);
        assert_eq!(offset_of!(BasisParams, uastc_rdo), 52);
        assert_eq!(offset_of!(BasisParams, uastc_rdo_quality_scalar), 56);
        assert_eq!(offset_of!(BasisParams, uastc_rdo_no_multithreading), 73);
        assert_eq!(size_of::<BasisParams>(), 76);
    }

    #[test]
    fn defaults_match_library() {
        let params = BasisParams::default();
        assert_eq!(params.compression_level, 1);
        assert_eq!(params.uastc_level(), UASTC_LEVEL_DEFAULT);
        assert!(!params.uastc);
        assert_eq!(params.quality_level, 0);
        assert_eq!(params.max_endpoints, 0);
        assert_eq!(params.max_selectors, 0);
    }
}
