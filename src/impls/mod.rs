mod iter;
mod map;
mod range;
mod read;
mod set;
mod slice;
mod str;
#[cfg(feature = "stream")]
mod stream;
mod vec;

pub use self::iter::Iterable;
pub use self::read::ByteStream;
#[cfg(feature = "stream")]
pub use self::stream::BlockingStream;
