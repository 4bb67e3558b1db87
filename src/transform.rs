use std::rc::Rc;
use crate::Stream;

impl<A: 'static> Stream<A> {

  /// Apply a function to each element of the stream.
  /// Only the first element is transformed eagerly.
  pub fn map<B, F>(&self, f: F) -> Stream<B>
    where B: 'static, F: Fn(&A) -> B + 'static
  {
    map_with(self, Rc::new(f))
  }
}

fn map_with<A, B, F>(xs: &Stream<A>, f: Rc<F>) -> Stream<B>
  where A: 'static, B: 'static, F: Fn(&A) -> B + 'static
{
  match xs.head() {
    None    => Stream::empty(),
    Some(x) => {
      let y   = f(x);
      let src = xs.clone();
      Stream::new(y, move || map_with(&src.rest(), f))
    }
  }
}


impl<A: Clone + 'static> Stream<A> {

  /// Keep only the elements that satisfy the predicate.
  /// The source is scanned up to the first match, to find the head of
  /// the result. If there is no further match in an infinite source,
  /// forcing the tail does not terminate.
  pub fn filter<P>(&self, pred: P) -> Stream<A>
    where P: Fn(&A) -> bool + 'static
  {
    filter_with(self, Rc::new(pred))
  }

  /// Keep only the elements that do not satisfy the predicate.
  pub fn filter_not<P>(&self, pred: P) -> Stream<A>
    where P: Fn(&A) -> bool + 'static
  {
    self.filter(move |x| !pred(x))
  }

  /// Split the stream into the elements that satisfy the predicate,
  /// and the ones that do not.
  /// The two results walk the source independently, so the predicate is
  /// called twice for each element that is consumed from both.
  pub fn partition<P>(&self, pred: P) -> (Stream<A>, Stream<A>)
    where P: Fn(&A) -> bool + 'static
  {
    let yes = Rc::new(pred);
    let no  = yes.clone();
    (self.filter(move |x| yes(x)), self.filter_not(move |x| no(x)))
  }
}

fn filter_with<A, P>(xs: &Stream<A>, pred: Rc<P>) -> Stream<A>
  where A: Clone + 'static, P: Fn(&A) -> bool + 'static
{
  let mut cur = xs.clone();
  while let Some(x) = cur.head() {
    if pred(x) {
      let x = x.clone();
      return Stream::new(x, move || filter_with(&cur.rest(), pred))
    }
    cur = cur.rest();
  }
  Stream::empty()
}
