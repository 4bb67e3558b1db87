use std::cell::RefCell;

enum State<A> {
  Pending(Box<dyn FnOnce() -> A>),
  Forcing,
  Panicked,
  Resolved(A),
}

// Marks the thunk as failed if the computation unwinds.
struct Unwinding<'a, A>(&'a RefCell<State<A>>);

impl<A> Drop for Unwinding<'_, A> {
  fn drop(&mut self) {
    if let Ok(mut state) = self.0.try_borrow_mut() { *state = State::Panicked }
  }
}

/// A value that is either already known, or a computation that produces it.
/// The computation runs at most once and its result replaces it.
pub struct Thunk<A> {
  state: RefCell<State<A>>
}

impl<A> Thunk<A> {

  /// A deferred computation.
  pub fn new<F: FnOnce() -> A + 'static>(f: F) -> Self {
    Thunk { state: RefCell::new(State::Pending(Box::new(f))) }
  }

  /// An already computed value.
  pub fn resolved(x: A) -> Self {
    Thunk { state: RefCell::new(State::Resolved(x)) }
  }

  /// Has the value been computed.
  pub fn is_resolved(&self) -> bool {
    matches!(*self.state.borrow(), State::Resolved(_))
  }

  /// Take out the value, if it was computed.
  pub fn into_resolved(self) -> Option<A> {
    match self.state.into_inner() {
      State::Resolved(x) => Some(x),
      _                  => None
    }
  }
}

impl<A: Clone> Thunk<A> {

  /// Get the value, running the computation if this is the first request.
  ///
  /// # Panics
  /// If the computation asks for its own value, or if the computation
  /// panicked on an earlier request.
  pub fn force(&self) -> A {
    if let State::Resolved(x) = &*self.state.borrow() { return x.clone() }

    let prev = std::mem::replace(&mut *self.state.borrow_mut(), State::Forcing);
    let f = match prev {
      State::Pending(f)  => f,
      State::Forcing     => panic!("thunk forced while its computation is running"),
      State::Panicked    => {
        *self.state.borrow_mut() = State::Panicked;
        panic!("thunk computation panicked on an earlier force")
      }
      State::Resolved(_) => unreachable!(),
    };

    log::trace!("forcing thunk");
    let guard = Unwinding(&self.state);
    let x = f();
    std::mem::forget(guard);
    *self.state.borrow_mut() = State::Resolved(x.clone());
    x
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use std::rc::Rc;

  #[test]
  fn force_runs_once() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let t = Thunk::new(move || { c.set(c.get() + 1); 42 });

    assert!(!t.is_resolved());
    assert_eq!(t.force(), 42);
    assert_eq!(t.force(), 42);
    assert!(t.is_resolved());
    assert_eq!(count.get(), 1);
  }

  #[test]
  fn resolved_is_returned_directly() {
    let t = Thunk::resolved("done");
    assert!(t.is_resolved());
    assert_eq!(t.force(), "done");
    assert_eq!(t.into_resolved(), Some("done"));
  }

  #[test]
  fn pending_has_no_value() {
    let t = Thunk::new(|| 1);
    assert_eq!(t.into_resolved(), None);
  }

  #[test]
  fn panicking_computation_is_reported() {
    let t = Thunk::<u32>::new(|| panic!("boom"));
    let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| t.force()));
    assert!(first.is_err());
    assert!(!t.is_resolved());

    let again = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| t.force()));
    let msg = again.err()
      .and_then(|e| e.downcast_ref::<&str>().map(|s| s.to_string()))
      .unwrap_or_default();
    assert_eq!(msg, "thunk computation panicked on an earlier force");
  }

  #[test]
  #[should_panic(expected = "computation is running")]
  fn recursive_force_panics() {
    let slot: Rc<RefCell<Option<Rc<Thunk<u32>>>>> = Rc::new(RefCell::new(None));
    let s = slot.clone();
    let t = Rc::new(Thunk::new(move || {
      let me = s.borrow().clone().unwrap();
      me.force() + 1
    }));
    *slot.borrow_mut() = Some(t.clone());
    t.force();
  }
}
