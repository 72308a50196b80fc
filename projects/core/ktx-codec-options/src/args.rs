//! Parsed, typed option values supplied by the argument parser.

use alloc::string::String;

/// Option values as parsed from the command line.
///
/// Valued options are `Some` when present; flags are `true` when present.
/// The resolver never re-parses text, so producers are expected to have
/// converted every value to its final type already.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodeArgs {
    /// Codec name (`--codec` for `encode`, `--encode` for `create`).
    pub codec: Option<String>,

    /// `--clevel`
    pub clevel: Option<u32>,
    /// `--qlevel`
    pub qlevel: Option<u32>,
    /// `--no-endpoint-rdo`
    pub no_endpoint_rdo: bool,
    /// `--no-selector-rdo`
    pub no_selector_rdo: bool,
    /// `--max-endpoints`
    pub max_endpoints: Option<u32>,
    /// `--endpoint-rdo-threshold`
    pub endpoint_rdo_threshold: Option<f32>,
    /// `--max-selectors`
    pub max_selectors: Option<u32>,
    /// `--selector-rdo-threshold`
    pub selector_rdo_threshold: Option<f32>,

    /// `--uastc-quality`
    pub uastc_quality: Option<u32>,
    /// `--uastc-rdo`
    pub uastc_rdo: bool,
    /// `--uastc-rdo-l`
    pub uastc_rdo_l: Option<f32>,
    /// `--uastc-rdo-d`
    pub uastc_rdo_d: Option<u32>,
    /// `--uastc-rdo-b`
    pub uastc_rdo_b: Option<f32>,
    /// `--uastc-rdo-s`
    pub uastc_rdo_s: Option<f32>,
    /// `--uastc-rdo-f`
    pub uastc_rdo_f: bool,
    /// `--uastc-rdo-m`
    pub uastc_rdo_m: bool,

    /// `--normal-mode`
    pub normal_mode: bool,
    /// `--threads`
    pub threads: Option<u32>,
    /// `--no-sse`
    pub no_sse: bool,
}

impl EncodeArgs {
    /// Creates an empty argument set with the given codec name.
    pub fn with_codec(codec: impl Into<String>) -> Self {
        Self {
            codec: Some(codec.into()),
            ..Self::default()
        }
    }

    /// Returns whether the option called `name` (without leading dashes) was supplied.
    ///
    /// Unknown names are reported as absent.
    pub fn is_present(&self, name: &str) -> bool {
        match name {
            "codec" | "encode" => self.codec.is_some(),
            "clevel" => self.clevel.is_some(),
            "qlevel" => self.qlevel.is_some(),
            "no-endpoint-rdo" => self.no_endpoint_rdo,
            "no-selector-rdo" => self.no_selector_rdo,
            "max-endpoints" => self.max_endpoints.is_some(),
            "endpoint-rdo-threshold" => self.endpoint_rdo_threshold.is_some(),
            "max-selectors" => self.max_selectors.is_some(),
            "selector-rdo-threshold" => self.selector_rdo_threshold.is_some(),
            "uastc-quality" => self.uastc_quality.is_some(),
            "uastc-rdo" => self.uastc_rdo,
            "uastc-rdo-l" => self.uastc_rdo_l.is_some(),
            "uastc-rdo-d" => self.uastc_rdo_d.is_some(),
            "uastc-rdo-b" => self.uastc_rdo_b.is_some(),
            "uastc-rdo-s" => self.uastc_rdo_s.is_some(),
            "uastc-rdo-f" => self.uastc_rdo_f,
            "uastc-rdo-m" => self.uastc_rdo_m,
            "normal-mode" => self.normal_mode,
            "threads" => self.threads.is_some(),
            "no-sse" => self.no_sse,
            _ => false,
        }
    }
}
