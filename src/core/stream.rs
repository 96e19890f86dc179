//! Lazy streams of search states.
//!
//! A stream is either exhausted, a resolved node holding one element,
//! or a suspension that computes the rest of the stream when forced.
//! Suspensions are what make infinite search spaces workable: `merge`
//! swaps its operands whenever it meets one, so two streams take turns
//! no matter which of them is infinite.

pub enum Stream<T> {
    Empty,
    Node(T, Box<Stream<T>>),
    Suspended(Box<dyn FnOnce() -> Stream<T>>),
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Node(a, Box::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspended(Box::new(sup))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Number of elements, or `None` if the stream is not fully realized.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut current = self;
        loop {
            match current {
                Stream::Empty => return Some(n),
                Stream::Node(_, d) => {
                    n += 1;
                    current = d;
                }
                Stream::Suspended(_) => return None,
            }
        }
    }

    /// Force suspensions until the stream is empty or starts with a node.
    ///
    /// This is the trampoline: suspensions are forced one after
    /// another in a loop, so long chains of them do not grow the
    /// native call stack.
    pub fn realize(mut self) -> Self {
        loop {
            match self {
                Stream::Suspended(sup) => self = sup(),
                resolved => return resolved,
            }
        }
    }

    /// Realize at most `n` elements.
    pub fn take(self, n: usize) -> Stream<T> {
        self.into_iter().take(n).collect()
    }

    /// Realize all elements. Does not terminate for infinite streams.
    pub fn take_all(self) -> Stream<T> {
        self.into_iter().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stream::Empty, |rest, item| Stream::cons(item, rest))
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: 'static> Stream<T> {
    /// Interleave two streams.
    pub fn merge(s: Stream<T>, t: Stream<T>) -> Self {
        match s {
            Stream::Empty => t,
            Stream::Node(a, d) => Stream::cons(a, Stream::merge(*d, t)),
            Stream::Suspended(sup) => Stream::suspension(move || Stream::merge(t, sup())),
        }
    }

    /// Apply `g` to every element and merge the resulting streams.
    pub fn bind<G>(self, g: G) -> Self
    where
        G: 'static + Clone + Fn(T) -> Stream<T>,
    {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Node(a, d) => Stream::merge(g(a), d.bind(g)),
            Stream::Suspended(sup) => Stream::suspension(move || sup().bind(g)),
        }
    }

    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        match self {
            Stream::Empty => Stream::empty(),
            Stream::Node(a, d) => Stream::cons(f(a), d.map(f)),
            Stream::Suspended(sup) => Stream::suspension(move || sup().map(f)),
        }
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        match (self, other) {
            (Empty, Empty) => true,
            (Node(a, x), Node(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspended(_) => write!(f, "(...)"),
            Stream::Node(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Node(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspended(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Iterator that pulls elements out of a stream on demand.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.0, Stream::Empty).realize() {
            Stream::Node(a, d) => {
                self.0 = *d;
                Some(a)
            }
            _ => None,
        }
    }
}
