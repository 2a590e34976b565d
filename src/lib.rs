//! Composable algorithmic transformations.
//!
//! A transducer describes a transformation (map, filter, take, partition, ...)
//! independently of where its input comes from and where its output goes.
//! Stages are built with free functions, composed with [`comp`] or [`comp!`]
//! and applied to a reducing function, which yields a single fused
//! [`Transformer`] that is then driven over a source by [`transduce`],
//! [`reduce`] or [`into`].
//!
//! ```
//! use transducers::{comp, filter, into, map, take};
//!
//! let xform = comp!(
//!     map(|x: u32| x * 3),
//!     filter(|x: &u32| x % 2 == 0),
//!     take(3),
//! );
//!
//! assert_eq!(into(Vec::new(), &xform, 1..).unwrap(), vec![6, 12, 18]);
//! assert_eq!(into(Vec::new(), &xform, vec![1, 2]).unwrap(), vec![6]);
//! ```
//!
//! Any type implementing [`Reducible`] can be used as a source, any type
//! implementing [`Sink`] or [`AssocSink`] as the target of [`into`] and
//! [`into_assoc`]. Type erased sources and seeds are dispatched through the
//! [`Sources`] and [`Sinks`] registries.

mod core;
mod dispatch;
mod error;
mod impls;
mod misc;
mod xform;

pub use self::core::{
    comp, comp_all, deref, ensure_reduced, is_reduced, reduced, unreduced, AssocSink, BoxTransducer,
    BoxTransformer, Comp, Reduced, Reducible, Sink, Step, Transducer, Transformer,
};
pub use self::dispatch::{
    into, into_any, into_assoc, reduce, reduce_init, transduce, try_transduce, AnyAppender, Appender,
    AssocAppender, Sinks, Sources,
};
pub use self::error::Error;
#[cfg(feature = "stream")]
pub use self::impls::BlockingStream;
pub use self::impls::{ByteStream, Iterable};
pub use self::misc::{
    complement, compose, get, guard, key, none, value, Entry, Guarded, Keyed, Lookup, Pair, Try,
};
pub use self::xform::{
    cat::{cat, mapcat, Cat, CatTransformer},
    drop::{drop, DropFirst, DropFirstTransformer},
    drop_while::{drop_while, DropWhile, DropWhileTransformer},
    filter::{filter, remove, Filter, FilterTransformer},
    identity::{identity, Identity},
    keep::{keep, Keep, KeepTransformer},
    map::{map, Map, MapTransformer},
    partition_all::{partition_all, PartitionAll, PartitionAllTransformer},
    partition_by::{partition_by, PartitionBy, PartitionByTransformer},
    take::{take, Take, TakeTransformer},
    take_nth::{take_nth, TakeNth, TakeNthTransformer},
    take_while::{take_while, TakeWhile, TakeWhileTransformer},
    wrap::{wrap, Fold, Init, Seed, TryWrap, Wrap},
};
