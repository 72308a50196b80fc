//! Error types for codec option resolution.

use alloc::string::String;
use thiserror::Error;

/// Errors raised while resolving codec options.
///
/// Every error is fatal; resolution stops at the first violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The command requires a codec but none was given.
    #[error("Missing codec argument.")]
    MissingCodec,

    /// The codec name is not recognised.
    #[error("Invalid encode codec: \"{0}\".")]
    InvalidCodec(String),

    /// A common encode option was given but nothing will be encoded.
    #[error("Invalid use of argument --{0} that only applies to encoding.")]
    EncodeOnly(&'static str),

    /// A BasisLZ option was given while another (or no) codec is active.
    #[error("Invalid use of argument --{0} that only applies when the used codec is BasisLZ.")]
    BasisLzOnly(&'static str),

    /// A UASTC option was given while another (or no) codec is active.
    #[error("Invalid use of argument --{0} that only applies when the used codec is UASTC.")]
    UastcOnly(&'static str),

    /// An endpoint tuning option was given alongside `--no-endpoint-rdo`.
    #[error("Invalid use of argument --{0} when endpoint RDO is disabled.")]
    EndpointRdoDisabled(&'static str),

    /// A selector tuning option was given alongside `--no-selector-rdo`.
    #[error("Invalid use of argument --{0} when selector RDO is disabled.")]
    SelectorRdoDisabled(&'static str),

    /// A UASTC RDO tuning option was given without `--uastc-rdo`.
    #[error("Invalid use of argument --{0} when UASTC RDO post-processing was not enabled.")]
    UastcRdoDisabled(&'static str),
}

/// Broad classification of a [`ConfigError`], as surfaced to the reporting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An option was used outside its codec, or while its prerequisite is disabled.
    InvalidArguments,
    /// The codec name was missing or not recognised.
    InvalidCodecSelection,
}

impl ErrorKind {
    /// Process exit code for this kind of failure.
    pub const fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidArguments => 1,
            ErrorKind::InvalidCodecSelection => 2,
        }
    }
}

impl ConfigError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingCodec | ConfigError::InvalidCodec(_) => {
                ErrorKind::InvalidCodecSelection
            }
            ConfigError::EncodeOnly(_)
            | ConfigError::BasisLzOnly(_)
            | ConfigError::UastcOnly(_)
            | ConfigError::EndpointRdoDisabled(_)
            | ConfigError::SelectorRdoDisabled(_)
            | ConfigError::UastcRdoDisabled(_) => ErrorKind::InvalidArguments,
        }
    }

    /// The offending option name, for errors tied to a single option.
    pub fn option(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingCodec | ConfigError::InvalidCodec(_) => None,
            ConfigError::EncodeOnly(name)
            | ConfigError::BasisLzOnly(name)
            | ConfigError::UastcOnly(name)
            | ConfigError::EndpointRdoDisabled(name)
            | ConfigError::SelectorRdoDisabled(name)
            | ConfigError::UastcRdoDisabled(name) => Some(*name),
        }
    }
}
