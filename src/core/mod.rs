mod reduced;
mod reducible;
mod sink;
mod transducer;
mod transformer;

pub use reduced::{deref, ensure_reduced, is_reduced, reduced, unreduced, Reduced, Step};
pub use reducible::Reducible;
pub use sink::{AssocSink, Sink};
pub use transducer::{comp, comp_all, BoxTransducer, BoxTransformer, Comp, Transducer};
pub use transformer::Transformer;
