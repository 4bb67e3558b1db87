// Lazily computed linked lists

use std::rc::Rc;
use crate::error::{Error, Result};
use crate::thunk::Thunk;

struct Node<A> {
  data: A,
  tail: Thunk<Stream<A>>
}

/// A lazily computed, immutable linked list.
///   * The head of a non-empty stream is always known.
///   * The tail is computed when first requested, and then cached in the node,
///     so all streams that share the node see the same tail.
///   * Cloning a stream is cheap, it just shares the node.
pub struct Stream<A> {
  node: Option<Rc<Node<A>>>
}

impl<A> Clone for Stream<A> {
  fn clone(&self) -> Self { Stream { node: self.node.clone() } }
}

// Unlink forced tails one at a time, so that dropping a long evaluated
// stream does not recurse once per node. Only forced tails are unlinked
// this way: a pending tail is dropped with its closure, and a deep nest of
// unforced closures that each hold a stream still recurses.
impl<A> Drop for Stream<A> {
  fn drop(&mut self) {
    let mut next = self.node.take();
    while let Some(rc) = next {
      next = match Rc::try_unwrap(rc) {
        Ok(node) => node.tail.into_resolved().and_then(|mut s| s.node.take()),
        Err(_)   => None
      };
    }
  }
}


impl<A> Stream<A> {

  /// The empty stream.
  pub fn empty() -> Self { Stream { node: None } }

  /// A stream with the given first element, followed by an already
  /// computed stream.
  pub fn cons(data: A, tail: Stream<A>) -> Self {
    Stream { node: Some(Rc::new(Node { data, tail: Thunk::resolved(tail) })) }
  }

  /// A stream with exactly one element.
  pub fn singleton(data: A) -> Self { Stream::cons(data, Stream::empty()) }

  /// The first element of the stream.
  pub fn first(&self) -> Result<&A> {
    self.head().ok_or(Error::EmptyStreamAccess)
  }

  /// The first element of the stream, if any.
  pub fn head(&self) -> Option<&A> {
    self.node.as_ref().map(|n| &n.data)
  }

  /// The stream without its first element.
  /// The tail is computed at most once per node.
  /// The rest of the empty stream is empty.
  pub fn rest(&self) -> Stream<A> {
    match &self.node {
      None    => Stream::empty(),
      Some(n) => n.tail.force()
    }
  }

  pub fn is_empty(&self) -> bool { self.node.is_none() }

  /// Is the tail of this node already known.
  pub fn is_forced(&self) -> bool {
    match &self.node {
      None    => true,
      Some(n) => n.tail.is_resolved()
    }
  }

  /// Do the two streams refer to the same node.
  pub fn ptr_eq(&self, other: &Stream<A>) -> bool {
    match (&self.node, &other.node) {
      (None, None)       => true,
      (Some(x), Some(y)) => Rc::ptr_eq(x, y),
      _                  => false
    }
  }
}

impl<A: 'static> Stream<A> {

  /// A stream with the given first element.
  /// The rest of the stream is computed by `tail` when first needed.
  pub fn new<F>(data: A, tail: F) -> Self
    where F: FnOnce() -> Stream<A> + 'static
  {
    Stream { node: Some(Rc::new(Node { data, tail: Thunk::new(tail) })) }
  }

  /// A stream with the elements of the iterator.
  /// Only the first element is pulled eagerly, the iterator is advanced
  /// as the tails of the stream are forced.
  pub fn from_iter_lazy<I>(mut iter: I) -> Self
    where I: Iterator<Item = A> + 'static
  {
    match iter.next() {
      None    => Stream::empty(),
      Some(x) => Stream::new(x, move || Stream::from_iter_lazy(iter))
    }
  }
}

impl<A> Default for Stream<A> {
  fn default() -> Self { Stream::empty() }
}


/* Basic Conversions */

impl<A: 'static> From<Vec<A>> for Stream<A> {
  fn from(xs: Vec<A>) -> Self { Stream::from_iter_lazy(xs.into_iter()) }
}

impl<const N: usize, A: 'static> From<[A; N]> for Stream<A> {
  fn from(xs: [A; N]) -> Self { Stream::from_iter_lazy(xs.into_iter()) }
}

impl<A: 'static> FromIterator<A> for Stream<A> {
  fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
    iter.into_iter().collect::<Vec<_>>().into()
  }
}
