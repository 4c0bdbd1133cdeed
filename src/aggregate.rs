/*!

Pairs and tuples. A tuple renders as `(e0, e1, ..., e{n-1})` with each element rendered by its own
type's strategy, so tuples nest to any depth their type allows. The unit tuple renders as `()` and a
one-tuple as `(e0)`, without Python's trailing comma.

A pair is the two-tuple `(A, B)`. Map entries reuse `render_pair` without building a tuple.

*/

use std::fmt::{self, Write};

use crate::{
  format::Formatter,
  printable::Printable,
  strategy::Strategy,
};


pub(crate) fn render_pair<A, B, W>(first: &A, second: &B, out: &mut W, formatter: &Formatter) -> fmt::Result
  where A: Printable + ?Sized,
        B: Printable + ?Sized,
        W: Write + ?Sized
{
  out.write_char('(')?;
  first.render(out, formatter)?;
  out.write_str(", ")?;
  second.render(out, formatter)?;
  out.write_char(')')
}


impl Printable for () {
  const STRATEGY: Strategy = Strategy::Aggregate;

  fn render<W>(&self, out: &mut W, _formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    out.write_str("()")
  }
}

impl<A, B> Printable for (A, B)
  where A: Printable,
        B: Printable
{
  const STRATEGY: Strategy = Strategy::Aggregate;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_pair(&self.0, &self.1, out, formatter)
  }
}

// Element 0 is written before the loop so that every later element is preceded by exactly one
// separator.
macro_rules! tuple_impl {
  ($( ($first_name:ident $first_index:tt $(, $name:ident $index:tt)*) )+) => {
    $(
      impl<$first_name $(, $name)*> Printable for ($first_name, $($name,)*)
        where $first_name: Printable,
              $($name: Printable,)*
      {
        const STRATEGY: Strategy = Strategy::Aggregate;

        fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
          where W: Write + ?Sized
        {
          out.write_char('(')?;
          self.$first_index.render(out, formatter)?;
          $(
            out.write_str(", ")?;
            self.$index.render(out, formatter)?;
          )*
          out.write_char(')')
        }
      }
    )+
  }
}

tuple_impl! {
  (T0 0)
  (T0 0, T1 1, T2 2)
  (T0 0, T1 1, T2 2, T3 3)
  (T0 0, T1 1, T2 2, T3 3, T4 4)
  (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5)
  (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6)
  (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7)
  (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8)
  (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9)
  (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10)
  (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10, T11 11)
}
