use crate::Stream;

/// Iterator over the elements of a stream.
/// A tail is forced only when the element after it is requested.
pub struct Iter<A> {
  cur:     Stream<A>,
  started: bool
}

impl<A> Stream<A> {
  pub fn iter(&self) -> Iter<A> { Iter { cur: self.clone(), started: false } }
}

impl<A: Clone> Iterator for Iter<A> {
  type Item = A;

  fn next(&mut self) -> Option<A> {
    if self.started { self.cur = self.cur.rest() }
    self.started = true;
    self.cur.head().cloned()
  }
}

impl<'a, A: Clone> IntoIterator for &'a Stream<A> {
  type Item = A;
  type IntoIter = Iter<A>;
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
