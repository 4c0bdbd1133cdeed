/*!
Errors surfaced by the print driver. Rendering itself cannot fail; only the sink can.
*/

use std::{fmt, io};

use thiserror::Error;


#[derive(Debug, Error)]
pub enum PrintError {
  /// The output sink rejected a write or a flush.
  #[error("output sink failed: {0}")]
  Io(#[from] io::Error),

  /// A `fmt::Write` target refused the text.
  #[error("formatting target failed")]
  Format(#[from] fmt::Error),

  #[error("unknown display form `{0}`, expected `str` or `repr`")]
  UnknownForm(String),
}

pub type Result<T> = std::result::Result<T, PrintError>;
