use std::any::TypeId;
use std::io;

use thiserror::Error;

/// Errors raised while building stages or driving a reduction.
#[derive(Debug, Error)]
pub enum Error {
    #[error("comp must be given at least 2 stages, got {given}")]
    TooFewStages { given: usize },

    #[error("partition size must be a positive integer")]
    InvalidPartitionSize,

    #[error("take_nth step must be a positive integer")]
    InvalidStep,

    #[error("not a key value pair")]
    NotAPair,

    #[error("no reduce strategy registered for source type {type_id:?}")]
    UnsupportedSource { type_id: TypeId },

    #[error("no append strategy registered for seed type {type_id:?}")]
    UnsupportedSink { type_id: TypeId },

    #[error("source walker `{kind}` kept yielding after the reduction terminated")]
    Overrun { kind: &'static str },

    #[error("reduction was started without a seed accumulator")]
    MissingSeed,

    #[error("failed to read byte stream: {0}")]
    Io(#[from] io::Error),
}
