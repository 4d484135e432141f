use thiserror::Error;

/// Everything that can go wrong while decoding a packet from the command line.
#[derive(Debug, Error)]
pub enum Error {
    /// No `--hex` or `--base64` flag with a value was given.
    #[error("no input given")]
    Usage,

    /// Help or version information was requested.
    #[error(transparent)]
    Help(clap::Error),

    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The data decoded to zero octets.
    #[error("empty input")]
    EmptyInput,

    #[error("unable to decode packet: {0}")]
    Packet(#[from] lorawan_frame::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The process exit status for this error.
    ///
    /// A usage error is `1`, help and version output is `0` and every other
    /// failure is `2`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage => 1,
            Error::Help(_) => 0,
            _ => 2,
        }
    }
}

/// A type alias for `Result<T, lorawan_cat::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
