//! Entry point: turns parsed options into a resolved codec configuration.

use crate::args::EncodeArgs;
use crate::builder::CodecOptionsBuilder;
use crate::codec::{ConfigMode, EncodeCodec, select_codec};
use crate::error::ConfigError;
use crate::host::HostInfo;
use crate::params::BasisParams;
use crate::rules::RULES;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use tracing::debug;

/// Non-fatal conditions found during resolution.
///
/// These are handed to the caller's reporting layer; the resolver itself never prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveWarning {
    /// `--qlevel`, `--max-endpoints` and `--max-selectors` were all given;
    /// the explicit cluster limits win and the quality level is dropped.
    QualityLevelIgnored {
        /// The quality level that was supplied and dropped.
        quality_level: u32,
    },
    /// `--no-sse` was given on a CPU without SSE support, so it has no effect.
    SseUnsupported,
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::QualityLevelIgnored { quality_level } => {
                write!(f, "--qlevel {quality_level} is ignored because both ")?;
                f.write_str("--max-endpoints and --max-selectors are set.")
            }
            ResolveWarning::SseUnsupported => {
                f.write_str("--no-sse is ignored because the CPU does not support SSE.")
            }
        }
    }
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCodec {
    /// The active codec.
    pub codec: EncodeCodec,
    /// Normalised (lowercase) codec name; empty for [`EncodeCodec::None`].
    pub codec_name: String,
    /// The fully populated encoder parameters.
    pub params: BasisParams,
    /// Non-fatal conditions for the reporting layer.
    pub warnings: Vec<ResolveWarning>,
}

/// Resolves parsed options into a [`ResolvedCodec`].
///
/// Selects the codec, runs every rule of [`RULES`] in order and applies derived
/// defaults. The only host fact consulted is [`HostInfo`].
///
/// # Errors
///
/// Returns the first [`ConfigError`] encountered; nothing is returned for a
/// partially resolved configuration.
///
/// # Examples
///
/// ```
/// use ktx_codec_options::{resolve, ConfigMode, EncodeArgs, FixedHost};
///
/// let mut args = EncodeArgs::with_codec("uastc");
/// args.uastc_rdo = true;
/// args.uastc_rdo_l = Some(0.5);
///
/// let resolved = resolve(ConfigMode::Required, &args, &FixedHost::new(4))?;
/// assert!(resolved.params.uastc);
/// assert_eq!(resolved.params.thread_count, 4);
/// # Ok::<(), ktx_codec_options::ConfigError>(())
/// ```
pub fn resolve<H: HostInfo + ?Sized>(
    mode: ConfigMode,
    args: &EncodeArgs,
    host: &H,
) -> Result<ResolvedCodec, ConfigError> {
    let (codec, codec_name) = select_codec(mode, args.codec.as_deref())?;

    let mut builder = CodecOptionsBuilder::new(codec);
    for rule in RULES.iter() {
        if rule.evaluate(args, &mut builder)? {
            debug!(option = rule.name, "applied codec option");
        }
    }

    let (params, warnings) = builder.finish(host);
    Ok(ResolvedCodec {
        codec,
        codec_name,
        params,
        warnings,
    })
}

/// [`resolve`] against the running machine.
///
/// # Errors
///
/// See [`resolve`].
#[cfg(feature = "std")]
pub fn resolve_for_system(
    mode: ConfigMode,
    args: &EncodeArgs,
) -> Result<ResolvedCodec, ConfigError> {
    resolve(mode, args, &crate::host::SystemHost)
}
