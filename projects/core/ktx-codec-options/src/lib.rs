#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Resolution of Basis Universal encoder options.
//!
//! Options arrive already parsed ([`EncodeArgs`]). [`resolve`] selects the codec,
//! validates every option against the active codec and its prerequisites in a
//! fixed order ([`RULES`]), applies derived defaults and returns a
//! [`BasisParams`] record laid out like the native `ktxBasisParams`.
//!
//! ```
//! use ktx_codec_options::{ConfigError, ConfigMode, EncodeArgs, ErrorKind, FixedHost, resolve};
//!
//! let mut args = EncodeArgs::with_codec("uastc");
//! args.clevel = Some(3);
//!
//! let err = resolve(ConfigMode::Required, &args, &FixedHost::new(8)).unwrap_err();
//! assert_eq!(err, ConfigError::BasisLzOnly("clevel"));
//! assert_eq!(err.kind(), ErrorKind::InvalidArguments);
//! ```

extern crate alloc;

pub mod args;
pub mod builder;
pub mod clamped_option;
pub mod codec;
pub mod error;
pub mod host;
pub mod params;
pub mod resolve;
pub mod rules;

#[cfg(feature = "c-exports")]
pub mod c_api;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use args::EncodeArgs;
pub use builder::CodecOptionsBuilder;
pub use clamped_option::ClampedOption;
pub use codec::{ConfigMode, EncodeCodec, select_codec};
pub use error::{ConfigError, ErrorKind};
#[cfg(feature = "std")]
pub use host::SystemHost;
pub use host::{FixedHost, HostInfo};
pub use params::BasisParams;
#[cfg(feature = "std")]
pub use resolve::resolve_for_system;
pub use resolve::{ResolveWarning, ResolvedCodec, resolve};
pub use rules::{Gate, RULES, Rule};
