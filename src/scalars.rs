/*!

Types with a native textual form, written directly to the sink.

Numbers, `bool`, and the network address types write their `Display` form in every `DisplayForm`.
Strings and chars write their bare text under `DisplayForm::Str` and a Python-style quoted literal
under `DisplayForm::Repr`.

Raw pointers write the address they hold. A pointer to an array is a single address-holding item:
its length is unknowable, so it is never scanned.

*/

use std::{
  borrow::Cow,
  fmt::{self, Write},
  net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
  num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
  },
};

use crate::{
  format::Formatter,
  printable::Printable,
  strategy::Strategy,
};


macro_rules! direct_impl {
  ($($type_name:ty),+ $(,)?) => {
    $(
      impl Printable for $type_name {
        const STRATEGY: Strategy = Strategy::Direct;

        fn render<W>(&self, out: &mut W, _formatter: &Formatter) -> fmt::Result
          where W: Write + ?Sized
        {
          write!(out, "{}", self)
        }
      }
    )+
  }
}

direct_impl!(
  i8, i16, i32, i64, i128, isize,
  u8, u16, u32, u64, u128, usize,
  f32, f64,
  bool,
  NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
  NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
  IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6,
);

#[cfg(feature = "rug")]
direct_impl!(rug::Integer, rug::Rational, rug::Float);


// Text

impl Printable for str {
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    if formatter.is_repr() {
      write_repr_str(out, self)
    } else {
      out.write_str(self)
    }
  }
}

impl Printable for String {
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    self.as_str().render(out, formatter)
  }
}

impl<'a> Printable for Cow<'a, str> {
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    self.as_ref().render(out, formatter)
  }
}

impl Printable for char {
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    if formatter.is_repr() {
      let mut buffer = [0u8; 4];
      write_repr_str(out, self.encode_utf8(&mut buffer))
    } else {
      out.write_char(*self)
    }
  }
}


// Addresses

impl<T: ?Sized> Printable for *const T {
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, _formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    write!(out, "{:p}", *self)
  }
}

impl<T: ?Sized> Printable for *mut T {
  const STRATEGY: Strategy = Strategy::Direct;

  fn render<W>(&self, out: &mut W, _formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    write!(out, "{:p}", *self)
  }
}


/// Writes `text` as a Python string literal. Single quotes are used unless the text contains a
/// single quote and no double quote, which is the choice Python's `repr` makes.
pub(crate) fn write_repr_str<W>(out: &mut W, text: &str) -> fmt::Result
  where W: Write + ?Sized
{
  let quote = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };

  out.write_char(quote)?;
  for c in text.chars() {
    match c {
      '\\'             => out.write_str("\\\\")?,
      '\n'             => out.write_str("\\n")?,
      '\r'             => out.write_str("\\r")?,
      '\t'             => out.write_str("\\t")?,
      c if c == quote  => { out.write_char('\\')?; out.write_char(c)?; }
      c if c.is_control() => write!(out, "\\x{:02x}", c as u32)?,
      c                => out.write_char(c)?,
    }
  }
  out.write_char(quote)
}


#[cfg(test)]
mod tests {
  use std::num::NonZeroU32;
  use crate::format::DisplayForm;
  use super::*;

  #[test]
  fn numbers_write_their_standard_form() {
    let formatter = Formatter::default();

    assert_eq!(42i32.format(&formatter), "42");
    assert_eq!((-7i64).format(&formatter), "-7");
    assert_eq!(3.14f64.format(&formatter), "3.14");
    assert_eq!(0.5f32.format(&formatter), "0.5");
    assert_eq!(u128::MAX.format(&formatter), u128::MAX.to_string());
    assert_eq!(true.format(&formatter), "true");
    assert_eq!(NonZeroU32::new(9).unwrap().format(&formatter), "9");
    assert_eq!(Ipv4Addr::LOCALHOST.format(&formatter), "127.0.0.1");
  }

  #[test]
  fn text_is_not_iterated() {
    let formatter = Formatter::default();

    assert_eq!("hello".format(&formatter), "hello");
    assert_eq!(String::from("world").format(&formatter), "world");
    assert_eq!(Cow::Borrowed("cow").format(&formatter), "cow");
    assert_eq!('x'.format(&formatter), "x");
    assert_eq!("".format(&formatter), "");
  }

  #[test]
  fn repr_quotes_text() {
    let formatter = Formatter::from(DisplayForm::Repr);

    assert_eq!("hello".format(&formatter), "'hello'");
    assert_eq!("it's".format(&formatter), "\"it's\"");
    assert_eq!("it's \"x\"".format(&formatter), "'it\\'s \"x\"'");
    assert_eq!("a\tb\n".format(&formatter), "'a\\tb\\n'");
    assert_eq!("back\\slash".format(&formatter), "'back\\\\slash'");
    assert_eq!("\u{7}".format(&formatter), "'\\x07'");
    assert_eq!('q'.format(&formatter), "'q'");
    assert_eq!(12u8.format(&formatter), "12");
  }

  #[test]
  fn pointers_write_an_address() {
    let formatter = Formatter::default();
    let array = [1, 2, 3];
    let pointer: *const [i32; 3] = &array;

    let text = pointer.format(&formatter);
    assert!(text.starts_with("0x"));
    assert_eq!(text, format!("{:p}", pointer));
    assert!(!text.contains('{'));
  }
}
