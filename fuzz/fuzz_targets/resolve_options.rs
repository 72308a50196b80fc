#![no_main]

// Resolves arbitrary option sets and checks the invariants of the result:
// errors name an option that was actually given, records stay within bounds
// and resolution is deterministic.

use ktx_codec_options::params::{DEFAULT_QUALITY_LEVEL, UASTC_MAX_LEVEL};
use ktx_codec_options::rules::rule;
use ktx_codec_options::{ConfigMode, EncodeArgs, EncodeCodec, ErrorKind, FixedHost, resolve};
use libfuzzer_sys::{arbitrary, fuzz_target};

// The last entry is not a codec.
const CODEC_NAMES: [&str; 5] = ["basis-lz", "uastc", "UASTC", "Basis-LZ", "etc1s"];

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzInput {
    pub required: bool,
    pub codec_index: Option<u8>,
    pub hardware_concurrency: u32,
    pub args: FuzzArgs,
}

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzArgs {
    pub clevel: Option<u32>,
    pub qlevel: Option<u32>,
    pub no_endpoint_rdo: bool,
    pub no_selector_rdo: bool,
    pub max_endpoints: Option<u32>,
    pub endpoint_rdo_threshold: Option<f32>,
    pub max_selectors: Option<u32>,
    pub selector_rdo_threshold: Option<f32>,
    pub uastc_quality: Option<u32>,
    pub uastc_rdo: bool,
    pub uastc_rdo_l: Option<f32>,
    pub uastc_rdo_d: Option<u32>,
    pub uastc_rdo_b: Option<f32>,
    pub uastc_rdo_s: Option<f32>,
    pub uastc_rdo_f: bool,
    pub uastc_rdo_m: bool,
    pub normal_mode: bool,
    pub threads: Option<u32>,
    pub no_sse: bool,
}

impl FuzzInput {
    fn encode_args(&self) -> EncodeArgs {
        let a = &self.args;
        EncodeArgs {
            codec: self
                .codec_index
                .map(|i| CODEC_NAMES[i as usize % CODEC_NAMES.len()].to_string()),
            clevel: a.clevel,
            qlevel: a.qlevel,
            no_endpoint_rdo: a.no_endpoint_rdo,
            no_selector_rdo: a.no_selector_rdo,
            max_endpoints: a.max_endpoints,
            endpoint_rdo_threshold: a.endpoint_rdo_threshold,
            max_selectors: a.max_selectors,
            selector_rdo_threshold: a.selector_rdo_threshold,
            uastc_quality: a.uastc_quality,
            uastc_rdo: a.uastc_rdo,
            uastc_rdo_l: a.uastc_rdo_l,
            uastc_rdo_d: a.uastc_rdo_d,
            uastc_rdo_b: a.uastc_rdo_b,
            uastc_rdo_s: a.uastc_rdo_s,
            uastc_rdo_f: a.uastc_rdo_f,
            uastc_rdo_m: a.uastc_rdo_m,
            normal_mode: a.normal_mode,
            threads: a.threads,
            no_sse: a.no_sse,
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let args = input.encode_args();
    let mode = if input.required {
        ConfigMode::Required
    } else {
        ConfigMode::Optional
    };
    let host = FixedHost::new(input.hardware_concurrency);

    let first = resolve(mode, &args, &host);
    let second = resolve(mode, &args, &host);
    // Compared through Debug so NaN thresholds match.
    assert_eq!(format!("{first:?}"), format!("{second:?}"));

    match first {
        Err(e) => match e.kind() {
            ErrorKind::InvalidArguments => {
                let name = e.option().expect("argument errors name their option");
                assert!(args.is_present(name), "error for absent option {name}");
                assert!(rule(name).is_some(), "error for unknown option {name}");
            }
            ErrorKind::InvalidCodecSelection => {
                assert!(args.codec.is_none() || args.codec.as_deref() == Some("etc1s"));
            }
        },
        Ok(resolved) => {
            let p = resolved.params;
            assert_eq!(p.struct_size as usize, size_of_val(&p));
            assert!(p.thread_count >= 1);
            assert_eq!(p.uastc, resolved.codec == EncodeCodec::Uastc);
            assert!(p.uastc_level() <= UASTC_MAX_LEVEL);

            if let Some(threads) = args.threads {
                assert_eq!(p.thread_count, threads.clamp(1, 10000));
            }

            if resolved.codec == EncodeCodec::BasisLz {
                let both_limits = args.max_endpoints.is_some() && args.max_selectors.is_some();
                if both_limits {
                    assert_eq!(p.quality_level, 0);
                } else if args.qlevel.is_none() {
                    assert_eq!(p.quality_level, DEFAULT_QUALITY_LEVEL);
                } else {
                    assert!((1..=255).contains(&p.quality_level));
                }
            }

            if args.uastc_rdo_d.is_some() {
                assert!((256..=65536).contains(&p.uastc_rdo_dict_size));
            }
        }
    }
});
