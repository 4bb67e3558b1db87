use crate::Stream;

impl<A: Clone + 'static> Stream<A> {

  /// Keep at most the given number of elements from the front.
  /// The source is never forced past the last kept element.
  pub fn take(&self, amt: usize) -> Stream<A> {
    match self.head() {
      None                => Stream::empty(),
      Some(_) if amt == 0 => Stream::empty(),
      Some(x) if amt == 1 => Stream::singleton(x.clone()),
      Some(x)             => {
        let src = self.clone();
        Stream::new(x.clone(), move || src.rest().take(amt - 1))
      }
    }
  }
}

impl<A> Stream<A> {

  /// Skip the given number of elements from the front.
  /// The skipped nodes are forced eagerly. Skipping nothing returns
  /// this very stream.
  pub fn drop(&self, amt: usize) -> Stream<A> {
    let mut cur = self.clone();
    for _ in 0 .. amt {
      if cur.is_empty() { break }
      cur = cur.rest();
    }
    cur
  }
}
