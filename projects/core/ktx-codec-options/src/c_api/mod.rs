//! # C API (FFI)
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! Resolves encoder options from C into a record that can be passed directly
//! to libktx as a `ktxBasisParams*`.
//!
//! ```c
//! KtxcoEncodeArgs args = ktxco_default_encode_args();
//! args.codec = "basis-lz";
//! args.has_qlevel = true;
//! args.qlevel = 200;
//!
//! ktxBasisParams params;
//! KtxcoResult result =
//!     ktxco_resolve(&args, KTXCO_CONFIG_MODE_REQUIRED, (BasisParams*)&params);
//! if (result.error_code != Success) {
//!     fprintf(stderr, "%s\n", ktxco_error_message(result.error_code));
//! }
//! ```

pub mod error;
pub mod resolve;

pub use error::*;
pub use resolve::*;
