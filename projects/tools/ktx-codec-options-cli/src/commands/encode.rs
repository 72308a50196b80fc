use super::{codec_options_command, resolve_and_print};
use crate::error::CliError;
use ktx_codec_options::ConfigMode;

codec_options_command! {
    /// Resolve encoder options for re-encoding an existing KTX2 file
    #[argh(subcommand, name = "encode")]
    EncodeCmd { codec: "target codec: basis-lz or uastc (required)" }
}

pub fn handle_encode_command(cmd: EncodeCmd) -> Result<(), CliError> {
    resolve_and_print(ConfigMode::Required, &cmd.encode_args())
}
