use proptest::prelude::*;
use proptest::strategy::*;
use proptest::test_runner::*;

/// Run a property on values generated by the strategy.
/// The property returns `None` to reject an input.
pub fn do_test<S: Strategy>
    ( s: fn () -> S
    , p: fn(S::Value) -> Option<bool>
    ) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  let strategy = s();
  runner.run(&strategy, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

/// Small finite inputs for streams.
pub fn values() -> impl Strategy<Value = Vec<i64>> {
  prop::collection::vec(-1000_i64 .. 1000, 0 .. 48)
}

pub fn values_and_count() -> impl Strategy<Value = (Vec<i64>, usize)> {
  (values(), 0_usize .. 64)
}

pub fn values_and_two_counts() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
  (values(), 0_usize .. 64, 0_usize .. 64)
}

pub fn two_values() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
  (values(), values())
}
