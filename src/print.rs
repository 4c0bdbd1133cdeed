/*!

The print driver. A line is the rendering of each argument, separated by the formatter's separator
(one space by default) and followed by its terminator (a newline by default). With no arguments the
line is the terminator alone.

Arguments are a heterogeneous list, expressed as a tuple of `Printable` values, so every argument
keeps its own type and its own strategy:

```
use pythonic_print::{render_line, pp_args};

let line = render_line(&("hello", "world", 42, 3.14));
assert_eq!(line, "hello world 42 3.14\n");

// The macros accept any type; those with no textual form print as `[[X]]`.
struct Unprintable;
let line = render_line(&pp_args!("value:", Unprintable));
assert_eq!(line, "value: [[X]]\n");
```

The sink is borrowed for one call and never closed. Calls share no state, but nothing here locks a
sink other than standard output, so callers sharing one sink across threads serialize it themselves.

*/

use std::{
  fmt::{self, Write},
  io,
};

use log::{debug, trace};

use crate::{
  error::{PrintError, Result},
  format::Formatter,
  printable::Printable,
};


/// A list of arguments to print on one line.
pub trait Arguments {
  const COUNT: usize;

  /// Renders the arguments joined by the separator, without the terminator.
  fn render_arguments<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized;
}

impl Arguments for () {
  const COUNT: usize = 0;

  fn render_arguments<W>(&self, _out: &mut W, _formatter: &Formatter) -> fmt::Result
    where W: Write + ?Sized
  {
    Ok(())
  }
}

macro_rules! arguments_impl {
  ($( $count:literal => ($first_name:ident $first_index:tt $(, $name:ident $index:tt)*) )+) => {
    $(
      impl<$first_name $(, $name)*> Arguments for ($first_name, $($name,)*)
        where $first_name: Printable,
              $($name: Printable,)*
      {
        const COUNT: usize = $count;

        fn render_arguments<W>(&self, out: &mut W, formatter: &Formatter) -> fmt::Result
          where W: Write + ?Sized
        {
          self.$first_index.render(out, formatter)?;
          $(
            out.write_str(&formatter.separator)?;
            self.$index.render(out, formatter)?;
          )*
          Ok(())
        }
      }
    )+
  }
}

arguments_impl! {
  1  => (A0 0)
  2  => (A0 0, A1 1)
  3  => (A0 0, A1 1, A2 2)
  4  => (A0 0, A1 1, A2 2, A3 3)
  5  => (A0 0, A1 1, A2 2, A3 3, A4 4)
  6  => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5)
  7  => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6)
  8  => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7)
  9  => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8)
  10 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9)
  11 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10)
  12 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11)
  13 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12)
  14 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12, A13 13)
  15 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12, A13 13,
         A14 14)
  16 => (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12, A13 13,
         A14 14, A15 15)
}


/// Counts the bytes passed through to `out`.
struct Counting<'a, W: ?Sized> {
  out    : &'a mut W,
  written: usize,
}

impl<'a, W> Write for Counting<'a, W>
  where W: Write + ?Sized
{
  fn write_str(&mut self, text: &str) -> fmt::Result {
    self.out.write_str(text)?;
    self.written += text.len();
    Ok(())
  }
}


/// Lets `fmt::Write` rendering target an `io::Write` sink, keeping the sink's own error.
struct IoSink<'a, S: ?Sized> {
  sink : &'a mut S,
  error: Option<io::Error>,
}

impl<'a, S> Write for IoSink<'a, S>
  where S: io::Write + ?Sized
{
  fn write_str(&mut self, text: &str) -> fmt::Result {
    match self.sink.write_all(text.as_bytes()) {
      Ok(()) => Ok(()),
      Err(error) => {
        self.error = Some(error);
        Err(fmt::Error)
      }
    }
  }
}


impl Formatter {
  /// Renders the arguments and the terminator into `out`, returning the number of bytes written.
  pub fn write_line<W, A>(&self, out: &mut W, arguments: &A) -> Result<usize>
    where W: Write + ?Sized,
          A: Arguments + ?Sized
  {
    let mut counting = Counting { out, written: 0 };
    arguments.render_arguments(&mut counting, self)?;
    counting.write_str(&self.terminator)?;
    trace!("rendered {} argument(s) into a line of {} bytes", A::COUNT, counting.written);
    Ok(counting.written)
  }

  /// The arguments joined by the separator, without the terminator.
  ///
  /// A `String` target only fails when an argument's own `Display` impl does. The line then ends
  /// with whatever that argument wrote before failing; `try_render` reports the failure instead.
  pub fn render<A>(&self, arguments: &A) -> String
    where A: Arguments + ?Sized
  {
    let mut line = String::new();
    let _ = arguments.render_arguments(&mut line, self);
    line
  }

  /// Like `render`, failing if any argument's `Display` impl fails.
  pub fn try_render<A>(&self, arguments: &A) -> Result<String>
    where A: Arguments + ?Sized
  {
    let mut line = String::new();
    arguments.render_arguments(&mut line, self)?;
    Ok(line)
  }

  /// The full line, terminator included.
  pub fn render_line<A>(&self, arguments: &A) -> String
    where A: Arguments + ?Sized
  {
    let mut line = self.render(arguments);
    line.push_str(&self.terminator);
    line
  }

  /// Writes the line to `sink`. Errors from the sink are returned as they are.
  pub fn print_to<S, A>(&self, sink: &mut S, arguments: &A) -> Result<()>
    where S: io::Write + ?Sized,
          A: Arguments + ?Sized
  {
    let mut adapter = IoSink { sink, error: None };

    if let Err(error) = self.write_line(&mut adapter, arguments) {
      return Err(match adapter.error.take() {
        Some(io_error) => {
          debug!("sink rejected a write: {}", io_error);
          PrintError::Io(io_error)
        }
        None => error,
      });
    }

    if self.flush {
      adapter.sink.flush().map_err(|io_error| {
        debug!("sink rejected a flush: {}", io_error);
        PrintError::Io(io_error)
      })?;
    }
    Ok(())
  }

  /// Writes the line to standard output, holding its lock for the whole line.
  pub fn print<A>(&self, arguments: &A) -> Result<()>
    where A: Arguments + ?Sized
  {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    self.print_to(&mut lock, arguments)
  }
}


/// Prints the arguments to standard output with the default `Formatter`.
pub fn print<A>(arguments: &A) -> Result<()>
  where A: Arguments + ?Sized
{
  Formatter::default().print(arguments)
}

/// Prints the arguments to `sink` with the default `Formatter`.
pub fn print_to<S, A>(sink: &mut S, arguments: &A) -> Result<()>
  where S: io::Write + ?Sized,
        A: Arguments + ?Sized
{
  Formatter::default().print_to(sink, arguments)
}

/// The arguments joined by single spaces, without a newline.
pub fn render<A>(arguments: &A) -> String
  where A: Arguments + ?Sized
{
  Formatter::default().render(arguments)
}

/// The arguments joined by single spaces, with a trailing newline.
pub fn render_line<A>(arguments: &A) -> String
  where A: Arguments + ?Sized
{
  Formatter::default().render_line(arguments)
}


/// Builds an argument list from values of any type, for use with `Formatter`'s methods. Tuple
/// literals among the arguments are adapted element by element.
#[macro_export]
macro_rules! pp_args {
  ($($argument:tt)*) => {
    $crate::pp_adapt_list!(@[] $($argument)*)
  }
}

/// Prints its arguments to standard output, space separated, followed by a newline.
/// Evaluates to `pythonic_print::Result<()>`.
#[macro_export]
macro_rules! pprint {
  ($($argument:tt)*) => {
    $crate::print(&$crate::pp_args!($($argument)*))
  }
}

/// Like `pprint!`, with the output going to the `io::Write` sink given first.
#[macro_export]
macro_rules! pprint_to {
  ($sink:expr $(,)?) => {
    $crate::print_to(&mut $sink, &$crate::pp_args!())
  };
  ($sink:expr, $($argument:tt)+) => {
    $crate::print_to(&mut $sink, &$crate::pp_args!($($argument)+))
  };
}

/// The line `pprint!` would print, without its newline.
#[macro_export]
macro_rules! pformat {
  ($($argument:tt)*) => {
    $crate::render(&$crate::pp_args!($($argument)*))
  }
}
