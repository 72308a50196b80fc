pub mod create;
pub mod encode;

use crate::error::CliError;
use ktx_codec_options::{ConfigMode, EncodeArgs, ResolvedCodec, resolve_for_system};
use std::io::{self, Write};
use tracing::warn;

/// Declares a subcommand carrying every codec option, plus a codec selector
/// under the given field name.
macro_rules! codec_options_command {
    (
        $(#[$meta:meta])*
        $name:ident { $codec:ident: $codec_doc:tt }
    ) => {
        #[derive(argh::FromArgs, Debug, PartialEq)]
        $(#[$meta])*
        pub struct $name {
            #[doc = $codec_doc]
            #[argh(option)]
            pub $codec: Option<String>,

            /// basisLZ compression level, trading speed for quality (default 1)
            #[argh(option)]
            pub clevel: Option<u32>,

            /// basisLZ quality level, 1 to 255 (default 128)
            #[argh(option)]
            pub qlevel: Option<u32>,

            /// disable basisLZ endpoint rate distortion optimizations
            #[argh(switch)]
            pub no_endpoint_rdo: bool,

            /// disable basisLZ selector rate distortion optimizations
            #[argh(switch)]
            pub no_selector_rdo: bool,

            /// maximum number of basisLZ endpoint clusters, 1 to 16128
            #[argh(option)]
            pub max_endpoints: Option<u32>,

            /// basisLZ endpoint RDO quality threshold (default 1.25)
            #[argh(option)]
            pub endpoint_rdo_threshold: Option<f32>,

            /// maximum number of basisLZ selector clusters, 1 to 16128
            #[argh(option)]
            pub max_selectors: Option<u32>,

            /// basisLZ selector RDO quality threshold (default 1.25)
            #[argh(option)]
            pub selector_rdo_threshold: Option<f32>,

            /// UASTC quality level, 0 (fastest) to 4 (very slow)
            #[argh(option)]
            pub uastc_quality: Option<u32>,

            /// enable UASTC rate distortion optimization
            #[argh(switch)]
            pub uastc_rdo: bool,

            /// UASTC RDO quality scalar (lambda), 0.001 to 50.0
            #[argh(option)]
            pub uastc_rdo_l: Option<f32>,

            /// UASTC RDO dictionary size in bytes, 256 to 65536
            #[argh(option)]
            pub uastc_rdo_d: Option<u32>,

            /// UASTC RDO max smooth block error scale, 1.0 to 300.0
            #[argh(option)]
            pub uastc_rdo_b: Option<f32>,

            /// UASTC RDO max smooth block standard deviation, 0.01 to 65536.0
            #[argh(option)]
            pub uastc_rdo_s: Option<f32>,

            /// do not favor simpler UASTC modes during RDO
            #[argh(switch)]
            pub uastc_rdo_f: bool,

            /// disable multithreaded UASTC RDO
            #[argh(switch)]
            pub uastc_rdo_m: bool,

            /// tune the encoder for normal maps
            #[argh(switch)]
            pub normal_mode: bool,

            /// encoder thread count (default: hardware concurrency)
            #[argh(option)]
            pub threads: Option<u32>,

            /// force the encoder not to use SSE
            #[argh(switch)]
            pub no_sse: bool,
        }

        impl $name {
            /// The options as library input.
            pub fn encode_args(&self) -> ktx_codec_options::EncodeArgs {
                ktx_codec_options::EncodeArgs {
                    codec: self.$codec.clone(),
                    clevel: self.clevel,
                    qlevel: self.qlevel,
                    no_endpoint_rdo: self.no_endpoint_rdo,
                    no_selector_rdo: self.no_selector_rdo,
                    max_endpoints: self.max_endpoints,
                    endpoint_rdo_threshold: self.endpoint_rdo_threshold,
                    max_selectors: self.max_selectors,
                    selector_rdo_threshold: self.selector_rdo_threshold,
                    uastc_quality: self.uastc_quality,
                    uastc_rdo: self.uastc_rdo,
                    uastc_rdo_l: self.uastc_rdo_l,
                    uastc_rdo_d: self.uastc_rdo_d,
                    uastc_rdo_b: self.uastc_rdo_b,
                    uastc_rdo_s: self.uastc_rdo_s,
                    uastc_rdo_f: self.uastc_rdo_f,
                    uastc_rdo_m: self.uastc_rdo_m,
                    normal_mode: self.normal_mode,
                    threads: self.threads,
                    no_sse: self.no_sse,
                }
            }
        }
    };
}

pub(crate) use codec_options_command;

/// Resolves `args` against this machine and prints the record to stdout.
pub fn resolve_and_print(mode: ConfigMode, args: &EncodeArgs) -> Result<(), CliError> {
    let resolved = resolve_for_system(mode, args)?;
    for warning in &resolved.warnings {
        warn!("{warning}");
    }

    let stdout = io::stdout();
    write_resolved(&mut stdout.lock(), &resolved)?;
    Ok(())
}

/// Writes the resolved codec on its own line, followed by the full record.
pub fn write_resolved<W: Write>(out: &mut W, resolved: &ResolvedCodec) -> io::Result<()> {
    let codec = resolved.codec.name().unwrap_or("none");
    writeln!(out, "codec: {codec}")?;
    writeln!(out, "{:#?}", resolved.params)
}
