use super::{codec_options_command, resolve_and_print};
use crate::error::CliError;
use ktx_codec_options::ConfigMode;

codec_options_command! {
    /// Resolve encoder options for creating a KTX2 file, optionally supercompressed
    #[argh(subcommand, name = "create")]
    CreateCmd { encode: "codec to encode with: basis-lz or uastc (omit to store uncompressed)" }
}

pub fn handle_create_command(cmd: CreateCmd) -> Result<(), CliError> {
    resolve_and_print(ConfigMode::Optional, &cmd.encode_args())
}
