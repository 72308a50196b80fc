//! The ordered option validation table.
//!
//! Each [`Rule`] names one option, the [`Gate`] that must hold for the option to
//! be used, and the action that records its value. [`RULES`] is evaluated top to
//! bottom and the first failing gate ends resolution, so the order of the table
//! decides which error a user sees when several options are misused at once.
//! Dependent gates (e.g. endpoint RDO) also read state written by earlier rules.

use crate::args::EncodeArgs;
use crate::builder::CodecOptionsBuilder;
use crate::codec::EncodeCodec;
use crate::error::ConfigError;
use derive_enum_all_values::AllValues;

/// Precondition under which an option may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Gate {
    /// Codec must be BasisLZ.
    BasisLz,
    /// Codec must be BasisLZ and endpoint RDO must not be disabled.
    BasisLzEndpointRdo,
    /// Codec must be BasisLZ and selector RDO must not be disabled.
    BasisLzSelectorRdo,
    /// Codec must be UASTC.
    Uastc,
    /// Codec must be UASTC and UASTC RDO must be enabled.
    UastcRdo,
    /// Any codec must be active.
    CommonEncode,
}

impl Gate {
    /// Checks the gate for option `name` against the builder state so far.
    ///
    /// Composite gates check the codec before the dependency.
    pub fn check(
        self,
        name: &'static str,
        builder: &CodecOptionsBuilder,
    ) -> Result<(), ConfigError> {
        match self {
            Gate::BasisLz => {
                if builder.codec() != EncodeCodec::BasisLz {
                    return Err(ConfigError::BasisLzOnly(name));
                }
            }
            Gate::BasisLzEndpointRdo => {
                Gate::BasisLz.check(name, builder)?;
                if builder.no_endpoint_rdo() {
                    return Err(ConfigError::EndpointRdoDisabled(name));
                }
            }
            Gate::BasisLzSelectorRdo => {
                Gate::BasisLz.check(name, builder)?;
                if builder.no_selector_rdo() {
                    return Err(ConfigError::SelectorRdoDisabled(name));
                }
            }
            Gate::Uastc => {
                if builder.codec() != EncodeCodec::Uastc {
                    return Err(ConfigError::UastcOnly(name));
                }
            }
            Gate::UastcRdo => {
                Gate::Uastc.check(name, builder)?;
                if !builder.uastc_rdo() {
                    return Err(ConfigError::UastcRdoDisabled(name));
                }
            }
            Gate::CommonEncode => {
                if !builder.codec().encodes() {
                    return Err(ConfigError::EncodeOnly(name));
                }
            }
        }
        Ok(())
    }
}

/// One entry of the validation table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Option name, without leading dashes.
    pub name: &'static str,
    /// Precondition for using the option.
    pub gate: Gate,
    apply: fn(&EncodeArgs, &mut CodecOptionsBuilder),
}

impl core::fmt::Debug for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("gate", &self.gate)
            .finish()
    }
}

impl Rule {
    /// Runs the rule: if the option is present, checks its gate and records its value.
    ///
    /// Returns `Ok(true)` if the option was applied, `Ok(false)` if it was absent.
    pub fn evaluate(
        &self,
        args: &EncodeArgs,
        builder: &mut CodecOptionsBuilder,
    ) -> Result<bool, ConfigError> {
        if !args.is_present(self.name) {
            return Ok(false);
        }
        self.gate.check(self.name, builder)?;
        (self.apply)(args, builder);
        Ok(true)
    }
}

/// Every codec option, in validation order.
pub static RULES: [Rule; 19] = [
    // BasisLZ
    Rule {
        name: "clevel",
        gate: Gate::BasisLz,
        apply: |args, b| {
            if let Some(level) = args.clevel {
                b.set_compression_level(level);
            }
        },
    },
    Rule {
        name: "qlevel",
        gate: Gate::BasisLz,
        apply: |args, b| {
            if let Some(level) = args.qlevel {
                b.set_quality_level(level);
            }
        },
    },
    Rule {
        name: "no-endpoint-rdo",
        gate: Gate::BasisLz,
        apply: |_, b| b.disable_endpoint_rdo(),
    },
    Rule {
        name: "no-selector-rdo",
        gate: Gate::BasisLz,
        apply: |_, b| b.disable_selector_rdo(),
    },
    // BasisLZ endpoint / selector tuning
    Rule {
        name: "max-endpoints",
        gate: Gate::BasisLzEndpointRdo,
        apply: |args, b| {
            if let Some(count) = args.max_endpoints {
                b.set_max_endpoints(count);
            }
        },
    },
    Rule {
        name: "endpoint-rdo-threshold",
        gate: Gate::BasisLzEndpointRdo,
        apply: |args, b| {
            if let Some(threshold) = args.endpoint_rdo_threshold {
                b.set_endpoint_rdo_threshold(threshold);
            }
        },
    },
    Rule {
        name: "max-selectors",
        gate: Gate::BasisLzSelectorRdo,
        apply: |args, b| {
            if let Some(count) = args.max_selectors {
                b.set_max_selectors(count);
            }
        },
    },
    Rule {
        name: "selector-rdo-threshold",
        gate: Gate::BasisLzSelectorRdo,
        apply: |args, b| {
            if let Some(threshold) = args.selector_rdo_threshold {
                b.set_selector_rdo_threshold(threshold);
            }
        },
    },
    // UASTC
    Rule {
        name: "uastc-quality",
        gate: Gate::Uastc,
        apply: |args, b| {
            if let Some(level) = args.uastc_quality {
                b.set_uastc_level(level);
            }
        },
    },
    Rule {
        name: "uastc-rdo",
        gate: Gate::Uastc,
        apply: |_, b| b.enable_uastc_rdo(),
    },
    // UASTC RDO tuning
    Rule {
        name: "uastc-rdo-l",
        gate: Gate::UastcRdo,
        apply: |args, b| {
            if let Some(lambda) = args.uastc_rdo_l {
                b.set_uastc_rdo_quality_scalar(lambda);
            }
        },
    },
    Rule {
        name: "uastc-rdo-d",
        gate: Gate::UastcRdo,
        apply: |args, b| {
            if let Some(size) = args.uastc_rdo_d {
                b.set_uastc_rdo_dict_size(size);
            }
        },
    },
    Rule {
        name: "uastc-rdo-b",
        gate: Gate::UastcRdo,
        apply: |args, b| {
            if let Some(scale) = args.uastc_rdo_b {
                b.set_uastc_rdo_max_smooth_block_error_scale(scale);
            }
        },
    },
    Rule {
        name: "uastc-rdo-s",
        gate: Gate::UastcRdo,
        apply: |args, b| {
            if let Some(deviation) = args.uastc_rdo_s {
                b.set_uastc_rdo_max_smooth_block_std_dev(deviation);
            }
        },
    },
    Rule {
        name: "uastc-rdo-f",
        gate: Gate::UastcRdo,
        apply: |_, b| b.dont_favor_simpler_modes(),
    },
    Rule {
        name: "uastc-rdo-m",
        gate: Gate::UastcRdo,
        apply: |_, b| b.disable_rdo_multithreading(),
    },
    // Common encode
    Rule {
        name: "normal-mode",
        gate: Gate::CommonEncode,
        apply: |_, b| b.enable_normal_map(),
    },
    Rule {
        name: "threads",
        gate: Gate::CommonEncode,
        apply: |args, b| {
            if let Some(count) = args.threads {
                b.set_thread_count(count);
            }
        },
    },
    Rule {
        name: "no-sse",
        gate: Gate::CommonEncode,
        apply: |_, b| b.disable_sse(),
    },
];

/// Looks up the rule for option `name`.
pub fn rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            [
                "clevel",
                "qlevel",
                "no-endpoint-rdo",
                "no-selector-rdo",
                "max-endpoints",
                "endpoint-rdo-threshold",
                "max-selectors",
                "selector-rdo-threshold",
                "uastc-quality",
                "uastc-rdo",
                "uastc-rdo-l",
                "uastc-rdo-d",
                "uastc-rdo-b",
                "uastc-rdo-s",
                "uastc-rdo-f",
                "uastc-rdo-m",
                "normal-mode",
                "threads",
                "no-sse",
            ]
        );
    }

    #[test]
    fn gates_are_grouped_in_order() {
        // Each gate occupies one contiguous run of the table, in this order.
        let expected = [
            Gate::BasisLz,
            Gate::BasisLzEndpointRdo,
            Gate::BasisLzSelectorRdo,
            Gate::Uastc,
            Gate::UastcRdo,
            Gate::CommonEncode,
        ];
        let mut runs: Vec<Gate> = Vec::new();
        for rule in RULES.iter() {
            if runs.last() != Some(&rule.gate) {
                runs.push(rule.gate);
            }
        }
        assert_eq!(runs, expected);
        assert_eq!(Gate::all_values().len(), expected.len());
    }

    #[test]
    fn every_rule_name_is_a_known_option() {
        let mut args = EncodeArgs::default();
        for rule in RULES.iter() {
            assert!(!args.is_present(rule.name), "{}", rule.name);
        }
        args.no_sse = true;
        assert!(args.is_present("no-sse"));
    }

    #[rstest]
    #[case(EncodeCodec::None, Gate::BasisLz, Some(ConfigError::BasisLzOnly("x")))]
    #[case(EncodeCodec::Uastc, Gate::BasisLz, Some(ConfigError::BasisLzOnly("x")))]
    #[case(EncodeCodec::BasisLz, Gate::BasisLz, None)]
    #[case(
        EncodeCodec::Uastc,
        Gate::BasisLzEndpointRdo,
        Some(ConfigError::BasisLzOnly("x"))
    )]
    #[case(EncodeCodec::BasisLz, Gate::BasisLzSelectorRdo, None)]
    #[case(EncodeCodec::None, Gate::Uastc, Some(ConfigError::UastcOnly("x")))]
    #[case(EncodeCodec::BasisLz, Gate::Uastc, Some(ConfigError::UastcOnly("x")))]
    #[case(EncodeCodec::Uastc, Gate::Uastc, None)]
    #[case(
        EncodeCodec::BasisLz,
        Gate::UastcRdo,
        Some(ConfigError::UastcOnly("x"))
    )]
    #[case(
        EncodeCodec::Uastc,
        Gate::UastcRdo,
        Some(ConfigError::UastcRdoDisabled("x"))
    )]
    #[case(
        EncodeCodec::None,
        Gate::CommonEncode,
        Some(ConfigError::EncodeOnly("x"))
    )]
    #[case(EncodeCodec::BasisLz, Gate::CommonEncode, None)]
    #[case(EncodeCodec::Uastc, Gate::CommonEncode, None)]
    fn gate_checks_codec_first(
        #[case] codec: EncodeCodec,
        #[case] gate: Gate,
        #[case] expected: Option<ConfigError>,
    ) {
        let builder = CodecOptionsBuilder::new(codec);
        assert_eq!(gate.check("x", &builder).err(), expected);
    }

    #[test]
    fn dependency_gates_follow_builder_state() {
        let mut builder = CodecOptionsBuilder::new(EncodeCodec::BasisLz);
        builder.disable_endpoint_rdo();
        assert_eq!(
            Gate::BasisLzEndpointRdo.check("max-endpoints", &builder),
            Err(ConfigError::EndpointRdoDisabled("max-endpoints"))
        );
        assert_eq!(
            Gate::BasisLzSelectorRdo.check("max-selectors", &builder),
            Ok(())
        );

        builder.disable_selector_rdo();
        assert_eq!(
            Gate::BasisLzSelectorRdo.check("max-selectors", &builder),
            Err(ConfigError::SelectorRdoDisabled("max-selectors"))
        );

        let mut builder = CodecOptionsBuilder::new(EncodeCodec::Uastc);
        builder.enable_uastc_rdo();
        assert_eq!(Gate::UastcRdo.check("uastc-rdo-l", &builder), Ok(()));
    }

    #[test]
    fn applied_rules_record_values_in_builder() {
        let args = EncodeArgs {
            qlevel: Some(300),
            max_endpoints: Some(0),
            max_selectors: Some(64),
            threads: Some(3),
            ..EncodeArgs::with_codec("basis-lz")
        };
        let mut builder = CodecOptionsBuilder::new(EncodeCodec::BasisLz);
        for rule in RULES.iter() {
            rule.evaluate(&args, &mut builder).unwrap();
        }

        assert_eq!(builder.quality_level().get_if_set(), Some(255));
        assert_eq!(builder.max_endpoints().get_if_set(), Some(1));
        assert_eq!(builder.max_selectors().get_if_set(), Some(64));
        assert_eq!(builder.thread_count().get_if_set(), Some(3));
    }

    #[test]
    fn absent_option_is_skipped() {
        let args = EncodeArgs::default();
        let mut builder = CodecOptionsBuilder::new(EncodeCodec::None);
        let clevel = rule("clevel").unwrap();
        assert_eq!(clevel.evaluate(&args, &mut builder), Ok(false));
    }

    #[test]
    fn rule_lookup_by_name() {
        assert_eq!(rule("threads").map(|r| r.gate), Some(Gate::CommonEncode));
        assert!(rule("zstd").is_none());
    }
}
