/*!

`Printable` is the capability every renderable type has. It pairs the type's `Strategy`, fixed at
compile time, with a `render` method that writes the type's text into any `fmt::Write` sink.
Composite impls call `render` on their elements, which is how the classifier recurses.

Implementations are spread over the crate by strategy:

  * `scalars`   : `Direct` types.
  * `sequence`  : `Array` and `Container` types.
  * `aggregate` : tuples.

Types outside the crate opt in with `printable_display!` (writes `Display`) or `printable_opaque!`
(writes `[[X]]`). Top-level arguments of the printing macros need neither, see `dispatch`.

*/

use std::{
  fmt::{self, Display, Write},
  rc::Rc,
  sync::Arc,
};

use crate::{
  format::Formatter,
  strategy::Strategy,
};

/// The placeholder written for values with no textual form and no iteration capability.
pub const OPAQUE_TOKEN: &str = "[[X]]";


pub trait Printable {
  const STRATEGY: Strategy;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized;

  /// Renders `self` into a fresh `String`.
  ///
  /// Only a `Display` impl reached through `Direct` or `printable_display!` can fail here. The text
  /// then stops where that impl gave up; use `try_format` to see the failure.
  fn format(&self, formatter: &Formatter) -> String {
    let mut text = String::new();
    let _ = self.render(&mut text, formatter);
    text
  }

  /// Renders `self` into a fresh `String`, failing if any `Display` impl it reaches fails.
  fn try_format(&self, formatter: &Formatter) -> Result<String, fmt::Error> {
    let mut text = String::new();
    self.render(&mut text, formatter)?;
    Ok(text)
  }

  /// A `Display` view of `self` using the default `Formatter`.
  fn pretty(&self) -> Pretty<'_, Self> {
    Pretty(self)
  }
}


/// Renders the wrapped value with the default `Formatter` wherever `Display` is expected.
pub struct Pretty<'a, T: ?Sized>(pub &'a T);

impl<'a, T> Display for Pretty<'a, T>
  where T: Printable + ?Sized
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.render(f, &Formatter::default())
  }
}


/// Writes the borrowed value with its `Display` impl.
#[derive(Copy, Clone)]
pub struct Direct<'a, T: ?Sized>(pub &'a T);

impl<'a, T> Printable for Direct<'a, T>
  where T: Display + ?Sized
{
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, _formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    write!(out, "{}", self.0)
  }
}


/// Always writes `[[X]]`, whatever it holds.
#[derive(Copy, Clone, Debug, Default)]
pub struct Opaque<T>(pub T);

impl<T> Printable for Opaque<T> {
  const STRATEGY: Strategy = Strategy::Opaque;

  fn render<W>(&self, out: &mut W, _formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    out.write_str(OPAQUE_TOKEN)
  }
}


// Pointers render as their pointee.
macro_rules! forward_printable_impl {
  ($($pointer:ty),+) => {
    $(
      impl<T> Printable for $pointer
        where T: Printable + ?Sized
      {
        const STRATEGY: Strategy = T::STRATEGY;

        #[inline]
        fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
          where W: Write + ?Sized
        {
          (**self).render(out, formatter)
        }
      }
    )+
  }
}

forward_printable_impl!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);


/// Implements `Printable` as `Strategy::Direct` for types that implement `Display`.
#[macro_export]
macro_rules! printable_display {
  ($($type_name:ty),+ $(,)?) => {
    $(
      impl $crate::Printable for $type_name {
        const STRATEGY: $crate::Strategy = $crate::Strategy::Direct;

        fn render<W>(&self, out: &mut W, _formatter: &$crate::Formatter) -> ::std::fmt::Result
          where W: ::std::fmt::Write + ?Sized
        {
          ::std::write!(out, "{}", self)
        }
      }
    )+
  }
}

/// Implements `Printable` as `Strategy::Opaque`, so values of the type print as `[[X]]` wherever
/// they are nested.
#[macro_export]
macro_rules! printable_opaque {
  ($($type_name:ty),+ $(,)?) => {
    $(
      impl $crate::Printable for $type_name {
        const STRATEGY: $crate::Strategy = $crate::Strategy::Opaque;

        fn render<W>(&self, out: &mut W, _formatter: &$crate::Formatter) -> ::std::fmt::Result
          where W: ::std::fmt::Write + ?Sized
        {
          out.write_str($crate::OPAQUE_TOKEN)
        }
      }
    )+
  }
}
