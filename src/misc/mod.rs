mod fns;
mod guard;
mod lookup;
mod pair;
mod try_;

pub use fns::{complement, compose, none};
pub use guard::{guard, Guarded};
pub use lookup::{get, Lookup};
pub use pair::{key, value, Entry, Keyed, Pair};
pub use try_::Try;
