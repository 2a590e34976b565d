/// `Sink` appends transformed items to an output collection. It is the
/// append strategy used by [`into`](crate::into).
///
/// # Examples
///
/// Implementing `Sink` for your type:
///
/// ```
/// use transducers::{into, map, Sink};
///
/// struct Total {
///     sum: u64,
/// }
///
/// impl Sink<u64> for Total {
///     fn append(&mut self, item: u64) {
///         self.sum += item;
///     }
/// }
///
/// let total = into(Total { sum: 100 }, map(|x: u64| x * 2), vec![1, 2, 3]).unwrap();
/// assert_eq!(total.sum, 112);
/// ```
pub trait Sink<T> {
    /// Append `item` to the collection.
    fn append(&mut self, item: T);
}

/// `AssocSink` inserts key/value pairs into an associative collection. It is
/// the insert strategy used by [`into_assoc`](crate::into_assoc).
///
/// Inserting a key that is already present must replace its value.
pub trait AssocSink<K, V> {
    fn insert_pair(&mut self, key: K, value: V);
}
