use crate::Stream;
use std::fmt;

// Only the head is shown, so formatting never forces anything.

impl<A: fmt::Display> fmt::Display for Stream<A> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.head() {
      None    => write!(f, "Empty"),
      Some(x) => write!(f, "Stream({}, <...>)", x)
    }
  }
}

impl<A: fmt::Debug> fmt::Debug for Stream<A> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.head() {
      None    => write!(f, "Empty"),
      Some(x) => write!(f, "Stream({:?}, <...>)", x)
    }
  }
}


#[cfg(test)]
mod tests {
  use crate::Stream;

  #[test]
  fn show() {
    assert_eq!(Stream::<u8>::empty().to_string(), "Empty");
    assert_eq!(stream![1, 2, 3].to_string(), "Stream(1, <...>)");
    assert_eq!(format!("{:?}", stream!["a"]), "Stream(\"a\", <...>)");
  }

  #[test]
  fn show_does_not_force() {
    let s = stream![1, 2];
    let _ = s.to_string();
    let _ = format!("{:?}", s);
    assert!(!s.is_forced());
  }
}
