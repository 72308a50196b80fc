//! Codec selection.

use crate::error::ConfigError;
use alloc::string::{String, ToString};
use derive_enum_all_values::AllValues;

/// The codec requested for an encoding invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum EncodeCodec {
    /// No codec was requested; the texture is stored without Basis encoding.
    None = 0,
    /// ETC1S payload supercompressed with BasisLZ.
    BasisLz = 1,
    /// Transcodable UASTC payload.
    Uastc = 2,
    /// An unrecognised codec name was supplied.
    /// [`EncodeCodec::from_name`] returns this; [`select_codec`] turns it into
    /// [`ConfigError::InvalidCodec`], so a resolved record never carries it.
    Invalid = 0x7FFF_FFFF,
}

impl EncodeCodec {
    /// Maps a (case-insensitive) codec name to a codec.
    ///
    /// Returns [`EncodeCodec::Invalid`] for names that are not recognised.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "basis-lz" => Self::BasisLz,
            "uastc" => Self::Uastc,
            _ => Self::Invalid,
        }
    }

    /// The canonical (lowercase) name of the codec, if it has one.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::BasisLz => Some("basis-lz"),
            Self::Uastc => Some("uastc"),
            Self::None | Self::Invalid => None,
        }
    }

    /// Returns `true` when an actual encode will take place.
    #[inline]
    pub fn encodes(self) -> bool {
        matches!(self, Self::BasisLz | Self::Uastc)
    }
}

/// Whether the calling command requires a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
#[repr(u32)]
pub enum ConfigMode {
    /// Encoding is optional (e.g. `create --encode <codec>`); a missing codec means [`EncodeCodec::None`].
    #[default]
    Optional = 0,
    /// Encoding is mandatory (e.g. `encode --codec <codec>`); a missing codec is fatal.
    Required = 1,
}

/// Determines the active codec from the codec argument.
///
/// On success, returns the codec along with its normalised (lowercase) name,
/// which is empty when no codec was requested.
///
/// # Errors
///
/// - [`ConfigError::MissingCodec`] if `codec_arg` is absent in [`ConfigMode::Required`].
/// - [`ConfigError::InvalidCodec`] if `codec_arg` names an unknown codec.
pub fn select_codec(
    mode: ConfigMode,
    codec_arg: Option<&str>,
) -> Result<(EncodeCodec, String), ConfigError> {
    let Some(name) = codec_arg else {
        return match mode {
            ConfigMode::Optional => Ok((EncodeCodec::None, String::new())),
            ConfigMode::Required => Err(ConfigError::MissingCodec),
        };
    };

    match EncodeCodec::from_name(name) {
        EncodeCodec::Invalid | EncodeCodec::None => {
            Err(ConfigError::InvalidCodec(name.to_string()))
        }
        codec => Ok((codec, name.to_ascii_lowercase())),
    }
}
