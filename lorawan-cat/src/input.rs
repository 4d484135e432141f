use std::ffi::OsString;

use base64::Engine;
use clap::error::ErrorKind;
use clap::Parser;

use crate::{Error, Result, PROGRAM_NAME};

const HEX_FLAG: &str = "--hex";
const BASE64_FLAG: &str = "--base64";

/// `cat` for LoRaWAN packets.
///
/// Only used to render `--help` and `--version`; the input itself is picked
/// by [`select_input`].
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, version, about, long_about = None)]
struct Args {
    /// The LoRaWAN PHYPayload, hex encoded.
    #[clap(long)]
    hex: Option<String>,

    /// The LoRaWAN PHYPayload, base64 encoded.
    #[clap(long)]
    base64: Option<String>,
}

/// The textual encoding of a packet given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Hex,
    Base64,
}

impl core::fmt::Display for Encoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Encoding::Hex => write!(f, "Hex"),
            Encoding::Base64 => write!(f, "Base64"),
        }
    }
}

/// The packet to decode, as selected from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub encoding: Encoding,
    pub data: String,
}

/// Return the argument following the first occurrence of `flag`, if any.
fn value_of(args: &[OsString], flag: &str) -> Option<String> {
    let pos = args.iter().position(|arg| arg == flag)?;
    args.get(pos + 1)
        .map(|value| value.to_string_lossy().into_owned())
}

/// Select the input from the command line arguments, program name first.
///
/// The argument following the first `--hex` is taken as hex data. Failing
/// that, the argument following the first `--base64` is taken as base64 data.
/// Any other argument is ignored.
///
/// # Errors
///
/// Returns [`Error::Help`] when neither flag carries a value and help or
/// version information was requested, [`Error::Usage`] otherwise.
pub fn select_input<I, T>(args: I) -> Result<Input>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let flags = args.get(1..).unwrap_or_default();

    if let Some(data) = value_of(flags, HEX_FLAG) {
        return Ok(Input {
            encoding: Encoding::Hex,
            data,
        });
    }

    if let Some(data) = value_of(flags, BASE64_FLAG) {
        return Ok(Input {
            encoding: Encoding::Base64,
            data,
        });
    }

    match Args::try_parse_from(&args) {
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(Error::Help(e))
        }
        Err(e) => {
            log::debug!("invalid arguments: {}", e.kind());
            Err(Error::Usage)
        }
        Ok(_) => Err(Error::Usage),
    }
}

/// Decode `data` into raw octets.
///
/// Decoding is strict: odd-length hex, characters outside the alphabet and
/// non-canonical base64 padding are all errors.
///
/// # Errors
///
/// Also returns [`Error::EmptyInput`] when `data` decodes to no octets.
pub fn decode_bytes(encoding: Encoding, data: &str) -> Result<Vec<u8>> {
    let bytes = match encoding {
        Encoding::Hex => hex::decode(data)?,
        Encoding::Base64 => base64::engine::general_purpose::STANDARD.decode(data)?,
    };

    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(bytes)
}
