use crate::Transducer;

/// Pass-through stage, applying it returns the next transformer unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

pub fn identity() -> Identity {
    Identity
}

impl<X> Transducer<X> for Identity {
    type Output = X;

    fn apply(&self, next: X) -> X {
        next
    }
}
