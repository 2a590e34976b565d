use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::ops::ControlFlow;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::{reduced, Error, Sink, Step, Transducer, Transformer};

type Walker<T> = Box<dyn Fn(Box<dyn Any>, &mut dyn FnMut(T) -> ControlFlow<()>) -> Result<(), Error>>;

type Append<T> = Rc<dyn Fn(&mut dyn Any, T) -> Result<(), Error>>;

/* Sources */

/// Runtime table of source kinds for type erased sources.
///
/// Every kind is looked up by the [`TypeId`] of the boxed source. A walker
/// feeds the elements to a visitor and must stop as soon as the visitor
/// answers [`ControlFlow::Break`].
pub struct Sources<T> {
    walkers: HashMap<TypeId, (&'static str, Walker<T>)>,
}

impl<T> Default for Sources<T> {
    fn default() -> Self {
        Self {
            walkers: HashMap::new(),
        }
    }
}

impl<T: 'static> Sources<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Vec<T>` and `VecDeque<T>`.
    pub fn with_defaults() -> Self {
        let mut sources = Self::new();

        sources
            .register_source::<Vec<T>>("vec")
            .register_source::<VecDeque<T>>("vec-deque");

        sources
    }

    /// Registers `S` with a walker that iterates it.
    pub fn register_source<S>(&mut self, kind: &'static str) -> &mut Self
    where
        S: IntoIterator<Item = T> + 'static,
    {
        self.register_source_with(kind, |source: S, visit: &mut dyn FnMut(T) -> ControlFlow<()>| {
            for item in source {
                if let ControlFlow::Break(()) = visit(item) {
                    break;
                }
            }

            Ok(())
        })
    }

    /// Registers `S` with a custom walker.
    pub fn register_source_with<S, W>(&mut self, kind: &'static str, walker: W) -> &mut Self
    where
        S: 'static,
        W: Fn(S, &mut dyn FnMut(T) -> ControlFlow<()>) -> Result<(), Error> + 'static,
    {
        debug!(kind, "register source");

        let walker: Walker<T> = Box::new(move |source: Box<dyn Any>, visit: &mut dyn FnMut(T) -> ControlFlow<()>| match source.downcast::<S>() {
            Ok(source) => walker(*source, visit),
            Err(source) => Err(Error::UnsupportedSource {
                type_id: (*source).type_id(),
            }),
        });

        self.walkers.insert(TypeId::of::<S>(), (kind, walker));

        self
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.walkers.contains_key(&type_id)
    }

    /// Type erased counterpart of [`reduce`](crate::reduce).
    ///
    /// A walker calling the visitor again after it answered `Break` fails the
    /// reduction with [`Error::Overrun`]. The surplus element is not stepped,
    /// `complete` still runs once so that buffering stages are flushed.
    pub fn reduce<X>(&self, mut transformer: X, init: X::Acc, source: Box<dyn Any>) -> Result<X::Acc, Error>
    where
        X: Transformer<T>,
    {
        let type_id = (*source).type_id();
        let (kind, walker) = match self.walkers.get(&type_id) {
            Some((kind, walker)) => (*kind, walker),
            None => {
                debug!(?type_id, "no source kind registered");

                return Err(Error::UnsupportedSource { type_id });
            }
        };

        trace!(kind, "reduce");

        let mut acc = Some(init);
        let mut done = transformer.is_full();
        let mut overrun = false;

        if !done {
            let mut visit = |item: T| {
                let current = match acc.take() {
                    Some(current) if !done => current,
                    current => {
                        acc = current;
                        overrun = true;

                        return ControlFlow::Break(());
                    }
                };

                match transformer.step(current, item) {
                    Step::Continue(next) => {
                        acc = Some(next);
                        done = transformer.is_full();
                    }
                    Step::Reduced(reduced) => {
                        acc = Some(reduced.into_inner());
                        done = true;
                    }
                }

                if done {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            };

            walker(source, &mut visit)?;
        }

        let acc = acc.ok_or(Error::Overrun { kind })?;
        let acc = transformer.complete(acc);

        if overrun {
            debug!(kind, "source walker ignored termination");

            return Err(Error::Overrun { kind });
        }

        Ok(acc)
    }
}

impl Sources<char> {
    /// `Vec<char>`, `VecDeque<char>`, `String` and `&'static str`.
    pub fn text() -> Self {
        let mut sources = Self::with_defaults();

        sources
            .register_source_with("string", |source: String, visit: &mut dyn FnMut(char) -> ControlFlow<()>| {
                walk_chars(&source, visit)
            })
            .register_source_with("string", |source: &'static str, visit: &mut dyn FnMut(char) -> ControlFlow<()>| {
                walk_chars(source, visit)
            });

        sources
    }
}

fn walk_chars(source: &str, visit: &mut dyn FnMut(char) -> ControlFlow<()>) -> Result<(), Error> {
    for c in source.chars() {
        if let ControlFlow::Break(()) = visit(c) {
            break;
        }
    }

    Ok(())
}

/* Sinks */

/// Runtime table of append strategies for type erased seeds.
pub struct Sinks<T> {
    appenders: HashMap<TypeId, (&'static str, Append<T>)>,
}

impl<T> Default for Sinks<T> {
    fn default() -> Self {
        Self {
            appenders: HashMap::new(),
        }
    }
}

impl<T: 'static> Sinks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Vec<T>` and `VecDeque<T>`.
    pub fn with_defaults() -> Self {
        let mut sinks = Self::new();

        sinks
            .register_sink::<Vec<T>>("vec")
            .register_sink::<VecDeque<T>>("vec-deque");

        sinks
    }

    pub fn register_sink<C>(&mut self, kind: &'static str) -> &mut Self
    where
        C: Sink<T> + 'static,
    {
        debug!(kind, "register sink");

        let append: Append<T> = Rc::new(|target: &mut dyn Any, item: T| {
            let type_id = Any::type_id(&*target);

            match target.downcast_mut::<C>() {
                Some(target) => {
                    target.append(item);

                    Ok(())
                }
                None => Err(Error::UnsupportedSink { type_id }),
            }
        });

        self.appenders.insert(TypeId::of::<C>(), (kind, append));

        self
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.appenders.contains_key(&type_id)
    }

    /// Resolves the append strategy for `seed`.
    pub fn appender(&self, seed: &dyn Any) -> Result<AnyAppender<T>, Error> {
        let type_id = Any::type_id(seed);

        match self.appenders.get(&type_id) {
            Some((kind, append)) => Ok(AnyAppender {
                kind: *kind,
                append: append.clone(),
            }),
            None => {
                debug!(?type_id, "no sink kind registered");

                Err(Error::UnsupportedSink { type_id })
            }
        }
    }
}

impl Sinks<char> {
    /// `Vec<char>`, `VecDeque<char>` and `String`.
    pub fn text() -> Self {
        let mut sinks = Self::with_defaults();

        sinks.register_sink::<String>("string");

        sinks
    }
}

/* AnyAppender */

/// Innermost transformer of [`into_any`], appends to a boxed seed.
///
/// An accumulator of another type than the one the appender was resolved for
/// ends the fold with [`Error::UnsupportedSink`]. There is no identity for an
/// erased seed, `init` yields [`Error::MissingSeed`].
pub struct AnyAppender<T> {
    kind: &'static str,
    append: Append<T>,
}

impl<T> AnyAppender<T> {
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl<T> Transformer<T> for AnyAppender<T> {
    type Acc = Result<Box<dyn Any>, Error>;

    fn init(&mut self) -> Self::Acc {
        Err(Error::MissingSeed)
    }

    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        let mut target = match acc {
            Ok(target) => target,
            Err(err) => return reduced(Err(err)),
        };

        match (self.append)(&mut *target, item) {
            Ok(()) => Step::Continue(Ok(target)),
            Err(err) => {
                debug!(kind = self.kind, "seed does not match the resolved sink");

                reduced(Err(err))
            }
        }
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        acc
    }
}

/// Type erased counterpart of [`into`](crate::into): both the seed and the
/// source are resolved at runtime.
///
/// ```
/// use std::any::Any;
///
/// use transducers::{into_any, map, Error, Sinks, Sources};
///
/// let sources = Sources::<i32>::with_defaults();
/// let sinks = Sinks::<i32>::with_defaults();
///
/// let source: Box<dyn Any> = Box::new(vec![1, 2, 3]);
/// let out = into_any(&sources, &sinks, Box::new(Vec::<i32>::new()), map(|x: i32| x + 1), source).unwrap();
/// assert_eq!(out.downcast_ref::<Vec<i32>>(), Some(&vec![2, 3, 4]));
///
/// let source: Box<dyn Any> = Box::new(42u64);
/// let err = into_any(&sources, &sinks, Box::new(Vec::<i32>::new()), map(|x: i32| x), source).unwrap_err();
/// assert!(matches!(err, Error::UnsupportedSource { .. }));
/// ```
pub fn into_any<I, T, X>(
    sources: &Sources<I>,
    sinks: &Sinks<T>,
    empty: Box<dyn Any>,
    xform: X,
    source: Box<dyn Any>,
) -> Result<Box<dyn Any>, Error>
where
    I: 'static,
    T: 'static,
    X: Transducer<AnyAppender<T>>,
    X::Output: Transformer<I, Acc = Result<Box<dyn Any>, Error>>,
{
    let appender = sinks.appender(&*empty)?;

    sources.reduce(xform.apply(appender), Ok(empty), source)?
}
