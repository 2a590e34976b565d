use std::io::Read;

use tracing::debug;

use crate::{reduced, Error, Reducible, Step, Transformer};

/// Byte source reading from any [`Read`] implementation.
///
/// The reader is pulled one byte at a time and only as long as the reduction
/// asks for more, so a stage terminating early leaves the rest of the stream
/// unread. No buffering happens here: pass a `&mut BufReader<_>` for slow
/// readers to keep the read-ahead reachable once the reduction is done. Read
/// failures abort the reduction with [`Error::Io`].
pub struct ByteStream<R> {
    reader: R,
}

impl<R> ByteStream<R>
where
    R: Read,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> Reducible for ByteStream<R>
where
    R: Read,
{
    type Item = u8;

    fn kind(&self) -> &'static str {
        "byte-stream"
    }

    fn fold_with<X>(self, transformer: &mut X, mut acc: X::Acc) -> Result<Step<X::Acc>, Error>
    where
        X: Transformer<u8>,
    {
        let mut bytes = self.reader.bytes();
        let mut offset = 0usize;

        loop {
            if transformer.is_full() {
                return Ok(reduced(acc));
            }

            let byte = match bytes.next() {
                Some(Ok(byte)) => byte,
                Some(Err(err)) => {
                    debug!(offset, error = %err, "byte stream read failed");

                    return Err(err.into());
                }
                None => return Ok(Step::Continue(acc)),
            };

            offset += 1;

            match transformer.step(acc, byte) {
                Step::Continue(next) => acc = next,
                reduced => return Ok(reduced),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use crate::*;

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn reads_bytes_lazily() {
        let mut cursor = Cursor::new(b"hello world".to_vec());
        let out = into(Vec::new(), take(5), ByteStream::new(&mut cursor)).unwrap();

        assert_eq!(out, b"hello".to_vec());
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn buffered_reader_keeps_unread_bytes() {
        let mut reader = BufReader::new(Cursor::new(b"ab cd".to_vec()));
        let first = into(Vec::new(), take_while(|b: &u8| *b != b' '), ByteStream::new(&mut reader)).unwrap();

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();

        assert_eq!(first, b"ab".to_vec());
        assert_eq!(rest, "cd");
    }

    #[test]
    fn read_errors_abort_the_reduction() {
        let err = into(Vec::new(), identity(), ByteStream::new(Failing)).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
