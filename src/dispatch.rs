/*!

Classification of top-level macro arguments of any type, with no opt-in required.

`Printable` cannot be implemented for "every other type" without specialization, so a type from
another crate that never opted in could not be printed at all. The printing macros avoid that by
resolving each argument through method-call priority, which the compiler settles statically. From
the most to the least preferred:

  1. `T: Printable`. The argument is used as is.
  2. `T: Display`. The argument is written with `Display`, which is `Strategy::Direct`.
  3. `T` is `[E; N]` with `E: Display`. An `Array` of `Display` elements.
  4. `T` is `[E; N]`. An `Array` of `N` placeholders.
  5. `&T: IntoIterator` with a `Display` item. A `Container` of `Display` elements.
  6. `&T: IntoIterator`. A `Container` of placeholders, one per element.
  7. Anything else. The argument is written as `[[X]]`.

Tier `k` is implemented on `Wrap` behind `7 - k` references, and the macros call
`(&&&&&&&Wrap(&value)).pp_adapt()`. Method lookup peels one reference per step and stops at the
first impl whose bounds hold, then yields a `Printable` adapter.

Tuples are handled by syntax instead: a tuple literal written in the argument list, such as
`(1, handle)`, is split and each element goes through the tiers above on its own. A tuple held in a
variable is a single value and needs every element to be `Printable` to render as `(...)`.

All of this only works where the argument's type is concrete at the call site, which is why it is
confined to the macros. Elements nested inside a container are classified one level deep (tiers 3
to 6); below that they go through `Printable`.

*/

use std::fmt::{self, Display, Write};

use crate::{
  format::Formatter,
  printable::{Direct, Opaque, Printable},
  sequence::render_elements,
  strategy::Strategy,
};


#[doc(hidden)]
pub struct Wrap<'a, T: ?Sized>(pub &'a T);


// region Adapters

/// An owned item with a `Display` impl, such as a container's `&E`.
struct Shown<T>(T);

impl<T: Display> Printable for Shown<T> {
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, _formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    write!(out, "{}", self.0)
  }
}

#[doc(hidden)]
pub struct DisplayArray<'a, E, const N: usize>(&'a [E; N]);

impl<'a, E: Display, const N: usize> Printable for DisplayArray<'a, E, N> {
  const STRATEGY: Strategy = Strategy::Array;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements(self.0.iter().map(Direct), out, formatter)
  }
}

#[doc(hidden)]
pub struct OpaqueArray<'a, E, const N: usize>(&'a [E; N]);

impl<'a, E, const N: usize> Printable for OpaqueArray<'a, E, N> {
  const STRATEGY: Strategy = Strategy::Array;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements(self.0.iter().map(Opaque), out, formatter)
  }
}

#[doc(hidden)]
pub struct DisplayContainer<'a, C: ?Sized>(&'a C);

impl<'a, C> Printable for DisplayContainer<'a, C>
  where C: ?Sized,
        &'a C: IntoIterator,
        <&'a C as IntoIterator>::Item: Display
{
  const STRATEGY: Strategy = Strategy::Container;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements(IntoIterator::into_iter(self.0).map(Shown), out, formatter)
  }
}

#[doc(hidden)]
pub struct OpaqueContainer<'a, C: ?Sized>(&'a C);

impl<'a, C> Printable for OpaqueContainer<'a, C>
  where C: ?Sized,
        &'a C: IntoIterator
{
  const STRATEGY: Strategy = Strategy::Container;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    render_elements(IntoIterator::into_iter(self.0).map(Opaque), out, formatter)
  }
}

// endregion

// region Tiers

#[doc(hidden)]
pub trait ViaPrintable<'a> {
  type Adapted: Printable;
  fn pp_adapt(&self) -> Self::Adapted;
}

impl<'a, T> ViaPrintable<'a> for &&&&&&Wrap<'a, T>
  where T: Printable + ?Sized
{
  type Adapted = &'a T;

  fn pp_adapt(&self) -> &'a T {
    self.0
  }
}

#[doc(hidden)]
pub trait ViaDisplay<'a> {
  type Adapted: Printable;
  fn pp_adapt(&self) -> Self::Adapted;
}

impl<'a, T> ViaDisplay<'a> for &&&&&Wrap<'a, T>
  where T: Display + ?Sized
{
  type Adapted = Direct<'a, T>;

  fn pp_adapt(&self) -> Direct<'a, T> {
    Direct(self.0)
  }
}

#[doc(hidden)]
pub trait ViaDisplayArray<'a> {
  type Adapted: Printable;
  fn pp_adapt(&self) -> Self::Adapted;
}

impl<'a, E, const N: usize> ViaDisplayArray<'a> for &&&&Wrap<'a, [E; N]>
  where E: Display
{
  type Adapted = DisplayArray<'a, E, N>;

  fn pp_adapt(&self) -> DisplayArray<'a, E, N> {
    DisplayArray(self.0)
  }
}

#[doc(hidden)]
pub trait ViaOpaqueArray<'a> {
  type Adapted: Printable;
  fn pp_adapt(&self) -> Self::Adapted;
}

impl<'a, E, const N: usize> ViaOpaqueArray<'a> for &&&Wrap<'a, [E; N]> {
  type Adapted = OpaqueArray<'a, E, N>;

  fn pp_adapt(&self) -> OpaqueArray<'a, E, N> {
    OpaqueArray(self.0)
  }
}

#[doc(hidden)]
pub trait ViaDisplayContainer<'a> {
  type Adapted: Printable;
  fn pp_adapt(&self) -> Self::Adapted;
}

impl<'a, C> ViaDisplayContainer<'a> for &&Wrap<'a, C>
  where C: ?Sized,
        &'a C: IntoIterator,
        <&'a C as IntoIterator>::Item: Display
{
  type Adapted = DisplayContainer<'a, C>;

  fn pp_adapt(&self) -> DisplayContainer<'a, C> {
    DisplayContainer(self.0)
  }
}

#[doc(hidden)]
pub trait ViaOpaqueContainer<'a> {
  type Adapted: Printable;
  fn pp_adapt(&self) -> Self::Adapted;
}

impl<'a, C> ViaOpaqueContainer<'a> for &Wrap<'a, C>
  where C: ?Sized,
        &'a C: IntoIterator
{
  type Adapted = OpaqueContainer<'a, C>;

  fn pp_adapt(&self) -> OpaqueContainer<'a, C> {
    OpaqueContainer(self.0)
  }
}

#[doc(hidden)]
pub trait ViaOpaque<'a> {
  type Adapted: Printable;
  fn pp_adapt(&self) -> Self::Adapted;
}

impl<'a, T: ?Sized> ViaOpaque<'a> for Wrap<'a, T> {
  type Adapted = Opaque<&'a T>;

  fn pp_adapt(&self) -> Opaque<&'a T> {
    Opaque(self.0)
  }
}

// endregion


/// The `Strategy` of an already adapted argument.
#[doc(hidden)]
pub fn strategy_of<T>(_adapted: &T) -> Strategy
  where T: Printable + ?Sized
{
  T::STRATEGY
}


/// Adapts one value to `Printable` by the first tier that applies to its type.
#[doc(hidden)]
#[macro_export]
macro_rules! pp_adapt {
  ($value:expr) => {{
    #[allow(unused_imports)]
    use $crate::dispatch::{
      ViaDisplay as _, ViaDisplayArray as _, ViaDisplayContainer as _, ViaOpaque as _,
      ViaOpaqueArray as _, ViaOpaqueContainer as _, ViaPrintable as _,
    };
    (&&&&&&&$crate::dispatch::Wrap(&$value)).pp_adapt()
  }}
}

/// Adapts a comma separated list into a tuple of adapters. Tuple literals in the list are adapted
/// element by element.
#[doc(hidden)]
#[macro_export]
macro_rules! pp_adapt_list {
  (@[$($done:expr,)*]) => {
    ( $($done,)* )
  };
  (@[$($done:expr,)*] ( $($inner:tt)* ) , $($rest:tt)*) => {
    $crate::pp_adapt_list!(@[$($done,)* $crate::pp_adapt_group!($($inner)*),] $($rest)*)
  };
  (@[$($done:expr,)*] ( $($inner:tt)* )) => {
    $crate::pp_adapt_list!(@[$($done,)* $crate::pp_adapt_group!($($inner)*),])
  };
  (@[$($done:expr,)*] $item:expr , $($rest:tt)*) => {
    $crate::pp_adapt_list!(@[$($done,)* $crate::pp_adapt!($item),] $($rest)*)
  };
  (@[$($done:expr,)*] $item:expr) => {
    $crate::pp_adapt_list!(@[$($done,)* $crate::pp_adapt!($item),])
  };
}

/// The contents of a parenthesized argument: the unit value, a parenthesized expression, or a
/// tuple literal.
#[doc(hidden)]
#[macro_export]
macro_rules! pp_adapt_group {
  () => {
    $crate::pp_adapt!(())
  };
  ($item:expr) => {
    $crate::pp_adapt!(($item))
  };
  ($($elements:tt)+) => {
    $crate::pp_adapt_list!(@[] $($elements)+)
  };
}

/// Adapts a single argument, splitting it if it is a tuple literal.
#[doc(hidden)]
#[macro_export]
macro_rules! pp_adapt_item {
  (( $($inner:tt)* )) => {
    $crate::pp_adapt_group!($($inner)*)
  };
  ($item:expr) => {
    $crate::pp_adapt!($item)
  };
}

/// The `Strategy` an expression would print with when passed to `pprint!`.
///
/// ```
/// use pythonic_print::{strategy_of, Strategy};
///
/// struct Unprintable;
///
/// assert_eq!(strategy_of!(vec![1, 2]), Strategy::Container);
/// assert_eq!(strategy_of!(std::path::Path::new("/").display()), Strategy::Direct);
/// assert_eq!(strategy_of!(Unprintable), Strategy::Opaque);
/// assert_eq!(strategy_of!([Unprintable, Unprintable]), Strategy::Array);
/// assert_eq!(strategy_of!((1, Unprintable)), Strategy::Aggregate);
/// ```
#[macro_export]
macro_rules! strategy_of {
  ($($value:tt)+) => {
    $crate::dispatch::strategy_of(&$crate::pp_adapt_item!($($value)+))
  }
}
