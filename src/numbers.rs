//! Sample sequences built on top of `Stream`.

use num::{Integer, Num};
use crate::Stream;

/// The numbers `from, from + 1, from + 2, ...`
pub fn naturals<T>(from: T) -> Stream<T>
  where T: Integer + Clone + 'static
{
  Stream::new(from.clone(), move || naturals(from + T::one()))
}

/// `1, 3, 5, ...`
pub fn odd_naturals<T>() -> Stream<T>
  where T: Integer + Clone + 'static
{
  naturals(T::one()).filter_not(|n: &T| n.is_even())
}

/// `2, 4, 6, ...`
pub fn even_naturals<T>() -> Stream<T>
  where T: Integer + Clone + 'static
{
  odd_naturals().map(|n: &T| n.clone() + T::one())
}

/// The prime numbers, in increasing order.
/// Each prime found adds a lazy filter that removes its multiples from the
/// remaining odd candidates.
pub fn primes<T>() -> Stream<T>
  where T: Integer + Clone + From<u8> + 'static
{
  let candidates = naturals(T::from(3_u8)).filter_not(|n: &T| n.is_even());
  sieve(candidates).prepend(T::from(2_u8))
}

fn sieve<T>(candidates: Stream<T>) -> Stream<T>
  where T: Integer + Clone + 'static
{
  let Some(p) = candidates.head().cloned() else { return Stream::empty() };
  Stream::new(p.clone(), move || {
    sieve(candidates.rest().filter_not(move |n: &T| n.is_multiple_of(&p)))
  })
}

/// `1, 1, 2, 3, 5, 8, ...`
pub fn fibonacci<T>() -> Stream<T>
  where T: Num + Clone + 'static
{
  fibonacci_from(T::one(), T::one())
}

/// The Fibonacci recurrence, starting with the given two values.
pub fn fibonacci_from<T>(a: T, b: T) -> Stream<T>
  where T: Num + Clone + 'static
{
  Stream::new(a.clone(), move || {
    let next = a + b.clone();
    fibonacci_from(b, next)
  })
}

/// The Collatz chain starting at `n`, ending with the first 1.
/// The chain is computed eagerly, the result is a finite stream.
/// Empty if `n` is not positive.
/// A chain that starts at 1 is just `[1]`; no step is taken from 1, so it
/// does not go around the `1, 4, 2, 1` loop.
pub fn collatz<T>(n: T) -> Stream<T>
  where T: Integer + Clone + From<u8> + 'static
{
  if n <= T::zero() { return Stream::empty() }

  let mut chain = vec![n.clone()];
  let mut cur   = n;
  while cur != T::one() {
    cur = if cur.is_even() { cur / T::from(2_u8) }
          else { cur * T::from(3_u8) + T::one() };
    chain.push(cur.clone());
  }
  log::debug!("collatz chain of length {}", chain.len());

  chain.into_iter().rev().fold(Stream::empty(), |s, x| s.prepend(x))
}
