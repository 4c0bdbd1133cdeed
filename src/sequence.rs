/*!

Element lists: fixed-size arrays and iterable containers, rendered as `{e0, e1, ..., en}`.

Arrays are `Strategy::Array`. Their length is the compile-time `N` of `[T; N]`, so only a value whose
type still carries that length renders as a list. A raw pointer to an array has lost it and renders
as an address (see `scalars`).

Everything else here is `Strategy::Container` and renders in the order its own iterator yields.
For `HashMap` and `HashSet` that order is unspecified. Map entries render as pairs, `(key, value)`,
and `Option` renders as a list of zero or one elements, so a missing value is `{}`.

*/

use std::{
  collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
  fmt::{self, Write},
  hash::BuildHasher,
};

use smallvec::SmallVec;

use crate::{
  aggregate::render_pair,
  format::Formatter,
  printable::Printable,
  strategy::Strategy,
};


/// Writes `{`, then the elements separated by `, `, then `}`. An empty sequence writes `{}`.
pub fn render_elements<I, W>(elements: I, out: &mut W, formatter: &Formatter) -> fmt::Result
  where I: IntoIterator,
        I::Item: Printable,
        W: Write + ?Sized
{
  let mut elements = elements.into_iter();

  out.write_char('{')?;
  if let Some(first) = elements.next() {
    first.render(out, formatter)?;
    for element in elements {
      out.write_str(", ")?;
      element.render(out, formatter)?;
    }
  }
  out.write_char('}')
}


// region Arrays

impl<T, const N: usize> Printable for [T; N]
  where T: Printable
{
  const STRATEGY: Strategy = Strategy::Array;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements((0..N).map(|index| &self[index]), out, formatter)
  }
}

// endregion

// region Containers

macro_rules! container_impl {
  ($(impl<$($param:ident $(: $bound:path)?),*> for $container:ty;)+) => {
    $(
      impl<$($param $(: $bound)?),*> Printable for $container
        where T: Printable
      {
        const STRATEGY: Strategy = Strategy::Container;

        fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
          where W: Write + ?Sized
        {
          render_elements(self.iter(), out, formatter)
        }
      }
    )+
  }
}

container_impl!(
  impl<T> for [T];
  impl<T> for Vec<T>;
  impl<T> for VecDeque<T>;
  impl<T> for LinkedList<T>;
  impl<T> for BinaryHeap<T>;
  impl<T> for BTreeSet<T>;
  impl<T, S: BuildHasher> for HashSet<T, S>;
  impl<T> for Option<T>;
);

impl<A> Printable for SmallVec<A>
  where A: smallvec::Array,
        A::Item: Printable
{
  const STRATEGY: Strategy = Strategy::Container;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements(self.iter(), out, formatter)
  }
}


/// A borrowed map entry, rendered as a pair.
struct Entry<'a, K, V>(&'a K, &'a V);

impl<'a, K, V> Printable for Entry<'a, K, V>
  where K: Printable,
        V: Printable
{
  const STRATEGY: Strategy = Strategy::Aggregate;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_pair(self.0, self.1, out, formatter)
  }
}

impl<K, V, S> Printable for HashMap<K, V, S>
  where K: Printable,
        V: Printable,
        S: BuildHasher
{
  const STRATEGY: Strategy = Strategy::Container;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements(self.iter().map(|(key, value)| Entry(key, value)), out, formatter)
  }
}

impl<K, V> Printable for BTreeMap<K, V>
  where K: Printable,
        V: Printable
{
  const STRATEGY: Strategy = Strategy::Container;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements(self.iter().map(|(key, value)| Entry(key, value)), out, formatter)
  }
}

// endregion


#[cfg(test)]
mod tests {
  use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
  use fnv::FnvHashMap;
  use smallvec::{smallvec, SmallVec};

  use crate::{format::DisplayForm, printable::Opaque};
  use super::*;

  /// Splits the inside of a rendered `{...}` on its top-level `, ` separators.
  fn rendered_elements(text: &str) -> HashSet<String> {
    assert!(text.starts_with('{') && text.ends_with('}'), "not an element list: {}", text);
    let inner = &text[1..text.len() - 1];
    let mut elements = HashSet::new();
    let mut depth = 0;
    let mut start = 0;
    let bytes = inner.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
      match byte {
        b'(' | b'{' => depth += 1,
        b')' | b'}' => depth -= 1,
        b',' if depth == 0 => {
          elements.insert(inner[start..index].to_string());
          start = index + 2;
        }
        _ => {}
      }
    }
    if !inner.is_empty() {
      elements.insert(inner[start..].to_string());
    }
    elements
  }

  #[test]
  fn arrays() {
    let formatter = Formatter::default();

    assert_eq!([1, 2, 3].format(&formatter), "{1, 2, 3}");
    assert_eq!(["only"].format(&formatter), "{only}");
    let empty: [u8; 0] = [];
    assert_eq!(empty.format(&formatter), "{}");
    assert_eq!([[1, 2], [3, 4]].format(&formatter), "{{1, 2}, {3, 4}}");
  }

  #[test]
  fn containers() {
    let formatter = Formatter::default();

    assert_eq!(vec![1.5, 2.25].format(&formatter), "{1.5, 2.25}");
    assert_eq!(Vec::<i32>::new().format(&formatter), "{}");
    assert_eq!(vec![1, 2, 3][1..].format(&formatter), "{2, 3}");
    assert_eq!(VecDeque::from(vec!['a', 'b']).format(&formatter), "{a, b}");
    assert_eq!(vec![vec![], vec![1]].format(&formatter), "{{}, {1}}");
    assert_eq!(vec![(1, "one"), (2, "two")].format(&formatter), "{(1, one), (2, two)}");

    let small: SmallVec<[u16; 4]> = smallvec![4, 5];
    assert_eq!(small.format(&formatter), "{4, 5}");
  }

  #[test]
  fn missing_values_are_empty_lists() {
    let formatter = Formatter::default();
    let array = [1, 2, 3];

    let present: Option<&[i32; 3]> = Some(&array);
    let missing: Option<&[i32; 3]> = None;

    assert_eq!(present.format(&formatter), "{{1, 2, 3}}");
    assert_eq!(missing.format(&formatter), "{}");
  }

  #[test]
  fn ordered_maps() {
    let formatter = Formatter::default();
    let map: BTreeMap<i32, &str> = [(42, "foo"), (5, "bar")].into_iter().collect();

    assert_eq!(map.format(&formatter), "{(5, bar), (42, foo)}");
    assert_eq!(BTreeMap::<i32, i32>::new().format(&formatter), "{}");
  }

  #[test]
  fn unordered_maps() {
    let formatter = Formatter::default();
    let map: HashMap<i32, String> =
      [(42, "foo".to_string()), (5, "bar".to_string())].into_iter().collect();

    let expected: HashSet<String> = ["(42, foo)", "(5, bar)"].iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered_elements(&map.format(&formatter)), expected);

    let mut fnv_map: FnvHashMap<&str, Vec<i32>> = FnvHashMap::default();
    fnv_map.insert("evens", vec![2, 4]);
    fnv_map.insert("none", vec![]);
    let expected: HashSet<String> = ["(evens, {2, 4})", "(none, {})"].iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered_elements(&fnv_map.format(&formatter)), expected);
  }

  #[test]
  fn repr_reaches_elements() {
    let formatter = Formatter::from(DisplayForm::Repr);

    assert_eq!(vec!["a", "b"].format(&formatter), "{'a', 'b'}");
    let map: BTreeMap<&str, char> = [("k", 'v')].into_iter().collect();
    assert_eq!(map.format(&formatter), "{('k', 'v')}");
  }

  #[test]
  fn opaque_elements() {
    let formatter = Formatter::default();
    assert_eq!([Opaque(1), Opaque(2)].format(&formatter), "{[[X]], [[X]]}");
  }
}
