use bytes::{Buf, TryGetError};

use crate::error::Error;

/// Checked reads for fixed-layout binary values.
///
/// Values handed to a driver are not trusted, so a short buffer surfaces as
/// [`Error::Protocol`]. Nothing is consumed when a read fails.
#[allow(clippy::module_name_repetitions)]
pub trait BufExt: Buf {
    fn read_u8(&mut self) -> Result<u8, Error>;

    fn read_i32_le(&mut self) -> Result<i32, Error>;
}

impl<B: Buf> BufExt for B {
    fn read_u8(&mut self) -> Result<u8, Error> {
        self.try_get_u8().map_err(short_buffer)
    }

    fn read_i32_le(&mut self) -> Result<i32, Error> {
        self.try_get_i32_le().map_err(short_buffer)
    }
}

fn short_buffer(error: TryGetError) -> Error {
    err_protocol!(
        "expected {} bytes, {} bytes remaining in buffer",
        error.requested,
        error.available
    )
}
