//! Decode a single LoRaWAN packet given on the command line and print its
//! content.
//!
//! The work is split in stages that can be driven separately:
//! - [`select_input`] picks the encoding and data from the arguments.
//! - [`decode_bytes`] turns the data into raw octets.
//! - [`lorawan_frame::Packet::new`] decodes the packet.
//! - [`present`] writes the banner and the rendered packet.
//!
//! [`run`] chains all of them.

use std::ffi::OsString;
use std::io::Write;

use lorawan_frame::Packet;

mod error;
pub use error::{Error, Result};

mod input;
pub use input::{decode_bytes, select_input, Encoding, Input};

mod render;
pub use render::PacketParser;

/// Name of the binary, as shown in the usage text.
pub const PROGRAM_NAME: &str = "lorawan-decode";

/// First line written before a decoded packet.
pub const BANNER: &str = "Decoded packet";
/// Second line written before a decoded packet.
pub const SEPARATOR: &str = "--------------";

/// Decode the packet selected by `args` and write it to `out`.
///
/// `args` starts with the program name, as [`std::env::args_os`] does. The
/// selected input is echoed as `decoding from <Encoding>: <data>` before it is
/// decoded.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let input = select_input(args)?;
    log::info!("selected {} input", input.encoding);
    writeln!(out, "decoding from {}: {}", input.encoding, input.data)?;

    let data = decode_bytes(input.encoding, &input.data)?;
    log::debug!("decoded {} octets", data.len());

    let packet = Packet::new(&data[..])?;

    present(out, &packet)
}

/// Write the banner followed by the rendered packet.
pub fn present<W: Write, T: AsRef<[u8]>>(out: &mut W, packet: &Packet<T>) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{SEPARATOR}")?;
    write!(out, "{}", PacketParser::render(packet))?;
    out.flush()?;

    Ok(())
}

/// The process exit status for the outcome of [`run`].
pub fn exit_code(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Write the usage text.
pub fn usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "\t{PROGRAM_NAME} --hex <data>")?;
    writeln!(out, "\t{PROGRAM_NAME} --base64 <data>")?;
    out.flush()
}
