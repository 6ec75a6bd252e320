#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
mod color;
pub use color::*;

mod error;
pub use error::*;

mod limits;
pub use limits::*;

mod position;
pub use position::*;

mod pixel_buffer;
pub use pixel_buffer::*;

mod bitmap;
pub use bitmap::*;

pub mod formats;
pub use formats::*;

mod saver;
pub use saver::*;
