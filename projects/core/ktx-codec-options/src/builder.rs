//! Resolution-time state for codec options.
//!
//! [`CodecOptionsBuilder`] owns the [`ClampedOption`]s and flags while the rule
//! table runs. The [`BasisParams`] record is only produced by
//! [`finish`](CodecOptionsBuilder::finish), after every rule has passed, so a
//! partially validated record never escapes.

use crate::clamped_option::ClampedOption;
use crate::codec::EncodeCodec;
use crate::host::{HostInfo, default_thread_count};
use crate::params::*;
use crate::resolve::ResolveWarning;
use alloc::vec::Vec;
use tracing::debug;

/// Upper bound for an explicit `--threads` value.
pub const MAX_THREAD_COUNT: u32 = 10000;
/// Upper bound for `--max-endpoints` and `--max-selectors`.
pub const MAX_CLUSTERS: u32 = 16128;

/// Accumulates option values for a single resolution run.
///
/// Setters are crate-private: values only enter through the rule table in
/// [`crate::rules::RULES`], which checks each option's gate first.
#[derive(Debug, Clone)]
pub struct CodecOptionsBuilder {
    codec: EncodeCodec,

    // ETC1S / BasisLZ; the thresholds and compression level are clamped by the encoder.
    compression_level: Option<u32>,
    quality_level: ClampedOption<u32>,
    max_endpoints: ClampedOption<u32>,
    endpoint_rdo_threshold: Option<f32>,
    max_selectors: ClampedOption<u32>,
    selector_rdo_threshold: Option<f32>,
    no_endpoint_rdo: bool,
    no_selector_rdo: bool,

    // UASTC
    uastc_level: ClampedOption<u32>,
    uastc_rdo: bool,
    uastc_rdo_quality_scalar: ClampedOption<f32>,
    uastc_rdo_dict_size: ClampedOption<u32>,
    uastc_rdo_max_smooth_block_error_scale: ClampedOption<f32>,
    uastc_rdo_max_smooth_block_std_dev: ClampedOption<f32>,
    uastc_rdo_dont_favor_simpler_modes: bool,
    uastc_rdo_no_multithreading: bool,

    // Common
    normal_map: bool,
    thread_count: ClampedOption<u32>,
    no_sse: bool,
}

impl CodecOptionsBuilder {
    /// Creates a builder for the given (already selected) codec with every option unset.
    pub fn new(codec: EncodeCodec) -> Self {
        Self {
            codec,
            compression_level: None,
            quality_level: ClampedOption::new(1, 255),
            max_endpoints: ClampedOption::new(1, MAX_CLUSTERS),
            endpoint_rdo_threshold: None,
            max_selectors: ClampedOption::new(1, MAX_CLUSTERS),
            selector_rdo_threshold: None,
            no_endpoint_rdo: false,
            no_selector_rdo: false,
            uastc_level: ClampedOption::new(UASTC_LEVEL_FASTEST, UASTC_MAX_LEVEL),
            uastc_rdo: false,
            uastc_rdo_quality_scalar: ClampedOption::new(0.001, 50.0),
            uastc_rdo_dict_size: ClampedOption::new(256, 65536),
            uastc_rdo_max_smooth_block_error_scale: ClampedOption::new(1.0, 300.0),
            uastc_rdo_max_smooth_block_std_dev: ClampedOption::new(0.01, 65536.0),
            uastc_rdo_dont_favor_simpler_modes: false,
            uastc_rdo_no_multithreading: false,
            normal_map: false,
            thread_count: ClampedOption::new(1, MAX_THREAD_COUNT),
            no_sse: false,
        }
    }

    /// The active codec.
    #[inline]
    pub fn codec(&self) -> EncodeCodec {
        self.codec
    }

    /// Whether `--no-endpoint-rdo` has been applied.
    #[inline]
    pub fn no_endpoint_rdo(&self) -> bool {
        self.no_endpoint_rdo
    }

    /// Whether `--no-selector-rdo` has been applied.
    #[inline]
    pub fn no_selector_rdo(&self) -> bool {
        self.no_selector_rdo
    }

    /// Whether `--uastc-rdo` has been applied.
    #[inline]
    pub fn uastc_rdo(&self) -> bool {
        self.uastc_rdo
    }

    /// The quality level option as currently held.
    pub fn quality_level(&self) -> &ClampedOption<u32> {
        &self.quality_level
    }

    /// The max endpoints option as currently held.
    pub fn max_endpoints(&self) -> &ClampedOption<u32> {
        &self.max_endpoints
    }

    /// The max selectors option as currently held.
    pub fn max_selectors(&self) -> &ClampedOption<u32> {
        &self.max_selectors
    }

    /// The explicit thread count option as currently held.
    pub fn thread_count(&self) -> &ClampedOption<u32> {
        &self.thread_count
    }

    pub(crate) fn set_compression_level(&mut self, level: u32) {
        self.compression_level = Some(level);
    }

    pub(crate) fn set_quality_level(&mut self, level: u32) {
        self.quality_level.set(level);
    }

    pub(crate) fn disable_endpoint_rdo(&mut self) {
        self.no_endpoint_rdo = true;
    }

    pub(crate) fn disable_selector_rdo(&mut self) {
        self.no_selector_rdo = true;
    }

    pub(crate) fn set_max_endpoints(&mut self, count: u32) {
        self.max_endpoints.set(count);
    }

    pub(crate) fn set_endpoint_rdo_threshold(&mut self, threshold: f32) {
        self.endpoint_rdo_threshold = Some(threshold);
    }

    pub(crate) fn set_max_selectors(&mut self, count: u32) {
        self.max_selectors.set(count);
    }

    pub(crate) fn set_selector_rdo_threshold(&mut self, threshold: f32) {
        self.selector_rdo_threshold = Some(threshold);
    }

    pub(crate) fn set_uastc_level(&mut self, level: u32) {
        self.uastc_level.set(level);
    }

    pub(crate) fn enable_uastc_rdo(&mut self) {
        self.uastc_rdo = true;
    }

    pub(crate) fn set_uastc_rdo_quality_scalar(&mut self, lambda: f32) {
        self.uastc_rdo_quality_scalar.set(lambda);
    }

    pub(crate) fn set_uastc_rdo_dict_size(&mut self, size: u32) {
        self.uastc_rdo_dict_size.set(size);
    }

    pub(crate) fn set_uastc_rdo_max_smooth_block_error_scale(&mut self, scale: f32) {
        self.uastc_rdo_max_smooth_block_error_scale.set(scale);
    }

    pub(crate) fn set_uastc_rdo_max_smooth_block_std_dev(&mut self, deviation: f32) {
        self.uastc_rdo_max_smooth_block_std_dev.set(deviation);
    }

    pub(crate) fn dont_favor_simpler_modes(&mut self) {
        self.uastc_rdo_dont_favor_simpler_modes = true;
    }

    pub(crate) fn disable_rdo_multithreading(&mut self) {
        self.uastc_rdo_no_multithreading = true;
    }

    pub(crate) fn enable_normal_map(&mut self) {
        self.normal_map = true;
    }

    pub(crate) fn set_thread_count(&mut self, count: u32) {
        self.thread_count.set(count);
    }

    pub(crate) fn disable_sse(&mut self) {
        self.no_sse = true;
    }

    /// Applies derived defaults and writes the final [`BasisParams`].
    ///
    /// Derived defaults:
    /// - UASTC codec sets [`BasisParams::uastc`].
    /// - Thread count falls back to the host's hardware concurrency (at least 1).
    /// - For BasisLZ, an explicit quality level is dropped when both cluster limits
    ///   are explicit too ([`ResolveWarning::QualityLevelIgnored`]), and defaults to
    ///   [`DEFAULT_QUALITY_LEVEL`] when neither it nor both limits were given.
    ///
    /// Returns the record along with any non-fatal warnings.
    pub fn finish<H: HostInfo + ?Sized>(mut self, host: &H) -> (BasisParams, Vec<ResolveWarning>) {
        let mut warnings = Vec::new();

        if self.codec == EncodeCodec::BasisLz {
            let both_limits = self.max_endpoints.is_set() && self.max_selectors.is_set();
            if both_limits {
                if let Some(ignored) = self.quality_level.get_if_set() {
                    warnings.push(ResolveWarning::QualityLevelIgnored {
                        quality_level: ignored,
                    });
                    self.quality_level.clear();
                }
            } else if !self.quality_level.is_set() {
                self.quality_level.set(DEFAULT_QUALITY_LEVEL);
            }
        }

        let thread_count = match self.thread_count.get_if_set() {
            Some(explicit) => explicit,
            None => default_thread_count(host).min(self.thread_count.max()),
        };

        if self.no_sse && !host.supports_sse() {
            warnings.push(ResolveWarning::SseUnsupported);
        }

        let defaults = BasisParams::default();
        let uastc_flags = match self.uastc_level.get_if_set() {
            Some(level) => (defaults.uastc_flags & !UASTC_LEVEL_MASK) | level,
            None => defaults.uastc_flags,
        };

        let params = BasisParams {
            uastc: self.codec == EncodeCodec::Uastc,
            no_sse: self.no_sse,
            thread_count,
            compression_level: self.compression_level.unwrap_or(defaults.compression_level),
            quality_level: self.quality_level.get(),
            max_endpoints: self.max_endpoints.get(),
            endpoint_rdo_threshold: self
                .endpoint_rdo_threshold
                .unwrap_or(defaults.endpoint_rdo_threshold),
            max_selectors: self.max_selectors.get(),
            selector_rdo_threshold: self
                .selector_rdo_threshold
                .unwrap_or(defaults.selector_rdo_threshold),
            normal_map: self.normal_map,
            no_endpoint_rdo: self.no_endpoint_rdo,
            no_selector_rdo: self.no_selector_rdo,
            uastc_flags,
            uastc_rdo: self.uastc_rdo,
            uastc_rdo_quality_scalar: self.uastc_rdo_quality_scalar.get(),
            uastc_rdo_dict_size: self.uastc_rdo_dict_size.get(),
            uastc_rdo_max_smooth_block_error_scale: self
                .uastc_rdo_max_smooth_block_error_scale
                .get(),
            uastc_rdo_max_smooth_block_std_dev: self.uastc_rdo_max_smooth_block_std_dev.get(),
            uastc_rdo_dont_favor_simpler_modes: self.uastc_rdo_dont_favor_simpler_modes,
            uastc_rdo_no_multithreading: self.uastc_rdo_no_multithreading,
            ..defaults
        };

        debug!(
            codec = ?self.codec,
            thread_count = params.thread_count,
            quality_level = params.quality_level,
            "codec options resolved"
        );

        (params, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const HOST: FixedHost = FixedHost::new(6);

    #[test]
    fn untouched_basis_lz_builder_gets_default_quality() {
        let (params, warnings) = CodecOptionsBuilder::new(EncodeCodec::BasisLz).finish(&HOST);
        assert_eq!(params.quality_level, DEFAULT_QUALITY_LEVEL);
        assert_eq!(params.thread_count, 6);
        assert!(!params.uastc);
        assert!(warnings.is_empty());
    }

    #[test]
    fn quality_default_only_applies_to_basis_lz() {
        let (params, _) = CodecOptionsBuilder::new(EncodeCodec::Uastc).finish(&HOST);
        assert_eq!(params.quality_level, 0);
        assert!(params.uastc);
    }

    #[rstest]
    #[case(true, false)]
    #[case(false, true)]
    fn single_cluster_limit_keeps_quality_default(
        #[case] endpoints: bool,
        #[case] selectors: bool,
    ) {
        let mut builder = CodecOptionsBuilder::new(EncodeCodec::BasisLz);
        if endpoints {
            builder.set_max_endpoints(1000);
        }
        if selectors {
            builder.set_max_selectors(1000);
        }
        let (params, warnings) = builder.finish(&HOST);
        assert_eq!(params.quality_level, DEFAULT_QUALITY_LEVEL);
        assert!(warnings.is_empty());
    }

    #[test]
    fn both_cluster_limits_without_quality_leave_quality_unset() {
        let mut builder = CodecOptionsBuilder::new(EncodeCodec::BasisLz);
        builder.set_max_endpoints(3000);
        builder.set_max_selectors(4000);
        let (params, warnings) = builder.finish(&HOST);
        assert_eq!(params.quality_level, 0);
        assert_eq!(params.max_endpoints, 3000);
        assert_eq!(params.max_selectors, 4000);
        assert!(warnings.is_empty());
    }

    #[test]
    fn uastc_level_only_replaces_level_bits() {
        let mut builder = CodecOptionsBuilder::new(EncodeCodec::Uastc);
        builder.set_uastc_level(9);
        let (params, _) = builder.finish(&HOST);
        assert_eq!(params.uastc_level(), UASTC_MAX_LEVEL);
        assert_eq!(params.uastc_flags & !UASTC_LEVEL_MASK, 0);
    }

    #[test]
    fn default_thread_count_is_capped() {
        let (params, _) =
            CodecOptionsBuilder::new(EncodeCodec::Uastc).finish(&FixedHost::new(u32::MAX));
        assert_eq!(params.thread_count, MAX_THREAD_COUNT);
    }

    #[test]
    fn no_sse_on_host_without_sse_warns() {
        let mut builder = CodecOptionsBuilder::new(EncodeCodec::BasisLz);
        builder.disable_sse();
        let host = FixedHost {
            hardware_concurrency: 2,
            supports_sse: false,
        };
        let (params, warnings) = builder.finish(&host);
        assert!(params.no_sse);
        assert_eq!(warnings, vec![ResolveWarning::SseUnsupported]);
    }
}
