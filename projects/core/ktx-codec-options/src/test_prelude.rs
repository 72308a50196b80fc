//! Common test imports for codec option tests.
#![allow(unused_imports)]

pub use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

pub use rstest::rstest;

pub use crate::args::EncodeArgs;
pub use crate::builder::CodecOptionsBuilder;
pub use crate::codec::{ConfigMode, EncodeCodec};
pub use crate::error::{ConfigError, ErrorKind};
pub use crate::host::FixedHost;
pub use crate::params::BasisParams;
pub use crate::resolve::ResolveWarning;

/// Host used by resolver tests: 8 hardware threads, SSE available.
pub const TEST_HOST: FixedHost = FixedHost::new(8);
