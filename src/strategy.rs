/*!

The rendering strategy of a type.

Every type that can be printed carries its `Strategy` as an associated constant of `Printable`, so
the choice is made once per type when the crate is compiled and costs nothing at run time. The
four-way classification is ordered; a type that could qualify for more than one rule takes the first:

  1. `Direct`: the type has a native textual form (numbers, strings). `String` and `str` are
     iterable too, but they are written as text.
  2. `Array`: a fixed-size `[T; N]`, rendered element by element with the compile-time `N`.
  3. `Container`: anything else with an iteration capability, rendered as `{e0, e1, ...}`.
  4. `Opaque`: none of the above, rendered as the placeholder `[[X]]`.

Tuples sit outside that ordering. They are always `Aggregate` and render as `(e0, e1, ...)`.

*/

use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::printable::Printable;


#[derive(Copy, Clone, PartialEq, Eq, Display, IntoStaticStr, Debug, EnumIter, Hash)]
pub enum Strategy {
  Direct,
  Array,
  Container,
  Opaque,
  /// Pairs and tuples.
  Aggregate,
}

/// The strategy `T` renders with.
pub const fn classify<T>() -> Strategy
  where T: Printable + ?Sized
{
  T::STRATEGY
}


#[cfg(test)]
mod tests {
  use std::collections::{BTreeMap, HashSet};
  use strum::IntoEnumIterator;

  use crate::printable::Opaque;
  use super::*;

  #[test]
  fn classification_order() {
    assert_eq!(classify::<i32>(), Strategy::Direct);
    assert_eq!(classify::<f64>(), Strategy::Direct);
    assert_eq!(classify::<str>(), Strategy::Direct);
    assert_eq!(classify::<String>(), Strategy::Direct);
    assert_eq!(classify::<&'static str>(), Strategy::Direct);

    assert_eq!(classify::<[i32; 3]>(), Strategy::Array);
    assert_eq!(classify::<[String; 0]>(), Strategy::Array);

    assert_eq!(classify::<Vec<u8>>(), Strategy::Container);
    assert_eq!(classify::<[u8]>(), Strategy::Container);
    assert_eq!(classify::<HashSet<char>>(), Strategy::Container);
    assert_eq!(classify::<BTreeMap<i32, String>>(), Strategy::Container);
    assert_eq!(classify::<Option<i32>>(), Strategy::Container);

    assert_eq!(classify::<Opaque<()>>(), Strategy::Opaque);

    assert_eq!(classify::<(i32, &str)>(), Strategy::Aggregate);
    assert_eq!(classify::<()>(), Strategy::Aggregate);
  }

  #[test]
  fn classification_through_pointers() {
    assert_eq!(classify::<&[i32; 2]>(), Strategy::Array);
    assert_eq!(classify::<Box<Vec<i32>>>(), Strategy::Container);
    assert_eq!(classify::<std::rc::Rc<str>>(), Strategy::Direct);
    assert_eq!(classify::<*const [i32; 3]>(), Strategy::Direct);
  }

  #[test]
  fn strategy_names() {
    let names: Vec<String> = Strategy::iter().map(|s| s.to_string()).collect();
    assert_eq!(names, ["Direct", "Array", "Container", "Opaque", "Aggregate"]);

    let name: &'static str = Strategy::Opaque.into();
    assert_eq!(name, "Opaque");
  }
}
