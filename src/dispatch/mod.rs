mod into;
mod reduce;
mod registry;

pub use into::{into, into_assoc, AssocAppender, Appender};
pub use reduce::{reduce, reduce_init, transduce, try_transduce};
pub use registry::{into_any, AnyAppender, Sinks, Sources};
