use crate::Stream;

impl<A> Stream<A> {

  /// Add an element to the front of the stream.
  /// The original stream becomes the tail, nothing is traversed.
  pub fn prepend(&self, value: A) -> Stream<A> {
    Stream::cons(value, self.clone())
  }
}

impl<A: Clone + 'static> Stream<A> {

  /// Add an element at the end of the stream.
  /// The end is reached lazily, so this never returns its last element
  /// if the stream is infinite.
  pub fn append(&self, value: A) -> Stream<A> {
    match self.head() {
      None    => Stream::singleton(value),
      Some(x) => {
        let src = self.clone();
        Stream::new(x.clone(), move || src.rest().append(value))
      }
    }
  }

  /// The elements of this stream, followed by the elements of the other.
  /// If this stream is infinite the other one is never reached.
  pub fn combine(&self, other: &Stream<A>) -> Stream<A> {
    match self.head() {
      None    => other.clone(),
      Some(x) => {
        let (xs, ys) = (self.clone(), other.clone());
        Stream::new(x.clone(), move || xs.rest().combine(&ys))
      }
    }
  }

  /// Pair up the elements of the two streams.
  /// The result is as long as the shorter stream.
  pub fn zip<B: Clone + 'static>(&self, other: &Stream<B>) -> Stream<(A, B)> {
    match (self.head(), other.head()) {
      (Some(x), Some(y)) => {
        let (xs, ys) = (self.clone(), other.clone());
        Stream::new((x.clone(), y.clone()), move || xs.rest().zip(&ys.rest()))
      }
      _ => Stream::empty()
    }
  }
}
