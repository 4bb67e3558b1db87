use crate::Stream;

/// How many elements `sample_default` collects.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

// Everything in this module consumes the stream eagerly, one node at a time.
// None of these terminate on an infinite stream unless they short-circuit.

impl<A> Stream<A> {

  /// Combine the elements from left to right, starting with `seed`.
  pub fn fold<B, F>(&self, seed: B, mut f: F) -> B
    where F: FnMut(B, &A) -> B
  {
    let mut acc = seed;
    let mut cur = self.clone();
    while let Some(x) = cur.head() {
      acc = f(acc, x);
      cur = cur.rest();
    }
    acc
  }

  /// Combine the elements from left to right, starting with `seed`.
  /// Returns `seed` for the empty stream.
  pub fn reduce<F>(&self, combine: F, seed: A) -> A
    where F: FnMut(A, &A) -> A
  {
    self.fold(seed, combine)
  }

  /// Is there an element that satisfies the predicate.
  /// Stops at the first one that does.
  pub fn exists<P: FnMut(&A) -> bool>(&self, mut pred: P) -> bool {
    let mut cur = self.clone();
    while let Some(x) = cur.head() {
      if pred(x) { return true }
      cur = cur.rest();
    }
    false
  }

  /// Do all elements satisfy the predicate.
  /// Stops at the first one that does not; true for the empty stream.
  pub fn for_all<P: FnMut(&A) -> bool>(&self, mut pred: P) -> bool {
    !self.exists(|x| !pred(x))
  }
}

impl<A: Clone> Stream<A> {

  /// Collect up to the given number of elements from the front.
  /// Forces only the tails needed to reach the last collected element.
  pub fn sample(&self, amt: usize) -> Vec<A> {
    let mut result = Vec::with_capacity(amt.min(DEFAULT_SAMPLE_SIZE));
    let mut cur    = self.clone();
    while result.len() < amt {
      let Some(x) = cur.head() else { break };
      result.push(x.clone());
      if result.len() < amt { cur = cur.rest() }
    }
    log::debug!("sampled {} of {} elements", result.len(), amt);
    result
  }

  pub fn sample_default(&self) -> Vec<A> { self.sample(DEFAULT_SAMPLE_SIZE) }
}


#[cfg(test)]
mod tests {
  use crate::Stream;
  use crate::proptest::*;
  use crate::numbers::naturals;
  use std::cell::Cell;
  use std::rc::Rc;

  #[test]
  fn reduce_sums() {
    assert_eq!(stream![1, 2, 3, 4].reduce(|a, b| a + b, 0), 10);
    assert_eq!(Stream::<i32>::empty().reduce(|a, b| a + b, 0), 0);
  }

  #[test]
  fn reduce_left_to_right() {
    let s = stream!["b".to_string(), "c".to_string()];
    assert_eq!(s.reduce(|a, b| format!("({}{})", a, b), "a".to_string()), "((ab)c)");
  }

  #[test]
  fn fold_matches_iter() {
    do_test(values, |xs| {
      let step   = |acc: i64, x: &i64| acc.wrapping_mul(3).wrapping_add(*x);
      let expect = xs.iter().fold(0_i64, step);
      Some(Stream::from(xs).fold(0_i64, step) == expect)
    })
  }

  #[test]
  fn exists_short_circuits() {
    assert!(naturals(1_u64).exists(|n| *n == 50));
    assert!(!stream![1, 3, 5].exists(|n| n % 2 == 0));
    assert!(!Stream::<u8>::empty().exists(|_| true));

    let s = stream![1, 2, 3];
    assert!(s.exists(|n| *n == 1));
    assert!(!s.is_forced());
  }

  #[test]
  fn for_all_checks_every_element() {
    assert!(stream![2, 4, 6].for_all(|n| n % 2 == 0));
    assert!(!stream![2, 3, 6].for_all(|n| n % 2 == 0));
    assert!(!naturals(1_u64).for_all(|n| *n < 10));
  }

  #[test]
  fn for_all_on_empty_is_true() {
    assert!(Stream::<u8>::empty().for_all(|_| false));
  }

  #[test]
  fn sample_prefix() {
    assert_eq!(stream![1, 2, 3].map(|n| n * 2).sample_default(), vec![2, 4, 6]);
    assert_eq!(naturals(1_u64).sample_default(), (1 ..= 10).collect::<Vec<_>>());
    assert_eq!(naturals(1_u64).sample(0), Vec::<u64>::new());
    assert_eq!(Stream::<u8>::empty().sample(3), Vec::<u8>::new());
  }

  #[test]
  fn sample_forces_only_what_it_reads() {
    let forced = Rc::new(Cell::new(0));
    let f = forced.clone();
    let s = Stream::from_iter_lazy((0 ..).inspect(move |_| f.set(f.get() + 1)));
    assert_eq!(s.sample(4), vec![0, 1, 2, 3]);
    assert_eq!(forced.get(), 4);
    assert!(!s.drop(3).is_forced());
  }
}
