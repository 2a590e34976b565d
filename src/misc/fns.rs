/// Negates a predicate.
pub fn complement<T, O>(mut operation: O) -> impl FnMut(&T) -> bool + Clone
where
    T: ?Sized,
    O: FnMut(&T) -> bool + Clone,
{
    move |item: &T| !operation(item)
}

/// Function composition, `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(mut f: F, mut g: G) -> impl FnMut(A) -> C + Clone
where
    F: FnMut(B) -> C + Clone,
    G: FnMut(A) -> B + Clone,
{
    move |x: A| f(g(x))
}

/// The absent value [`keep`](crate::keep) drops.
pub fn none<T>() -> Option<T> {
    None
}
