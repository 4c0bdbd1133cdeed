/*!

  A `Formatter` holds information about how to print a line of values: which textual form strings
  take, what goes between arguments, and what ends the line. These are the `sep`, `end`, and `flush`
  keyword arguments of Python's `print`, which a Rust function has no other way to take.

  The `DisplayForm` is threaded down through every recursive render, so a container of strings
  follows the same form as a bare string. The default, `DisplayForm::Str`, writes strings as they
  are at every depth, so `("tuples", ("inside",))` prints as `(tuples, (inside))`. With
  `DisplayForm::Repr`, strings and chars are quoted the way Python's `repr` quotes them.

*/
use std::{
  borrow::Cow,
  str::FromStr
};

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::PrintError;


#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr, Hash)]
pub enum DisplayForm {
  #[strum(serialize = "str")]
  Str,
  #[strum(serialize = "repr")]
  Repr,
}

impl Default for DisplayForm {
  fn default() -> DisplayForm {
    DisplayForm::Str
  }
}

impl DisplayForm {
  /// Parses a form name, `"str"` or `"repr"`.
  pub fn parse(name: &str) -> Result<DisplayForm, PrintError> {
    DisplayForm::from_str(name).map_err(|_| PrintError::UnknownForm(name.to_string()))
  }
}


#[derive(Clone, PartialEq, Eq, Debug, Hash)]
/// Parameters used by everything that turns values into text.
pub struct Formatter {
  pub form      : DisplayForm,
  /// Written between consecutive top-level arguments.
  pub separator : Cow<'static, str>,
  /// Written after the last argument.
  pub terminator: Cow<'static, str>,
  /// Flush the sink after the terminator is written.
  pub flush     : bool,
}

impl Default for Formatter {
  fn default() -> Self {
    Formatter {
      form      : DisplayForm::Str,
      separator : Cow::Borrowed(" "),
      terminator: Cow::Borrowed("\n"),
      flush     : true,
    }
  }
}

impl Formatter {
  pub fn with_form(mut self, form: DisplayForm) -> Self {
    self.form = form;
    self
  }

  pub fn with_separator<S>(mut self, separator: S) -> Self
    where S: Into<Cow<'static, str>>
  {
    self.separator = separator.into();
    self
  }

  pub fn with_terminator<S>(mut self, terminator: S) -> Self
    where S: Into<Cow<'static, str>>
  {
    self.terminator = terminator.into();
    self
  }

  pub fn with_flush(mut self, flush: bool) -> Self {
    self.flush = flush;
    self
  }

  pub fn is_repr(&self) -> bool {
    self.form == DisplayForm::Repr
  }
}

impl From<DisplayForm> for Formatter {
  fn from(form: DisplayForm) -> Self {
    Formatter::default().with_form(form)
  }
}


#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;
  use super::*;

  #[test]
  fn form_names() {
    for form in DisplayForm::iter() {
      let name: &'static str = form.into();
      assert_eq!(DisplayForm::parse(name).unwrap(), form);
      assert_eq!(form.to_string(), name);
    }
  }

  #[test]
  fn unknown_form() {
    match DisplayForm::parse("latex") {
      Err(PrintError::UnknownForm(name)) => assert_eq!(name, "latex"),
      other => panic!("expected UnknownForm, got {:?}", other),
    }
  }

  #[test]
  fn builder() {
    let formatter = Formatter::from(DisplayForm::Repr)
        .with_separator(", ")
        .with_terminator(String::from(";\n"))
        .with_flush(false);

    assert!(formatter.is_repr());
    assert_eq!(formatter.separator, ", ");
    assert_eq!(formatter.terminator, ";\n");
    assert!(!formatter.flush);

    let default = Formatter::default();
    assert_eq!(default.form, DisplayForm::Str);
    assert_eq!(default.separator, " ");
    assert_eq!(default.terminator, "\n");
    assert!(default.flush);
  }
}
