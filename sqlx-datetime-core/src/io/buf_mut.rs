use crate::error::Error;

pub trait BufMutExt {
    /// Writes a payload prefixed by its length as a single byte.
    ///
    /// This is the framing TDS uses for variable-length fixed-size types such as `DATETIMN`.
    fn put_u8_length_prefixed<F>(&mut self, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), Error>;
}

impl BufMutExt for Vec<u8> {
    fn put_u8_length_prefixed<F>(&mut self, write_contents: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), Error>,
    {
        // reserve space to write the prefixed length
        let offset = self.len();
        self.push(0);

        // write the main body of the value
        let write_result = write_contents(self);

        let size_result = write_result.and_then(|_| {
            let size = self.len() - offset - 1;
            u8::try_from(size)
                .map_err(|_| err_protocol!("value size out of range for a u8 length: {size}"))
        });

        match size_result {
            Ok(size) => {
                self[offset] = size;
                Ok(())
            }
            Err(e) => {
                // Put the buffer back to where it was.
                self.truncate(offset);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BufMutExt;
    use crate::error::Error;

    #[test]
    fn test_put_u8_length_prefixed() -> Result<(), Error> {
        let mut buf = vec![0xaa];

        buf.put_u8_length_prefixed(|buf| {
            buf.extend_from_slice(&[1, 2, 3]);
            Ok(())
        })?;

        assert_eq!(buf, [0xaa, 3, 1, 2, 3]);

        Ok(())
    }

    #[test]
    fn test_put_u8_length_prefixed_rolls_back() {
        let mut buf = vec![0xaa];

        let res = buf.put_u8_length_prefixed(|buf| {
            buf.extend_from_slice(&[0; 256]);
            Ok(())
        });

        assert!(res.is_err());
        assert_eq!(buf, [0xaa]);
    }
}
