/*!

  A `Formatter` holds information about how to format a group element, that is, how to express the element as a
  string.

  "Formatting" needs to be distinct from Rust's standard `Display` trait, because elements are formatted differently
  depending on where the string is going: a terminal wants Unicode sub- and superscripts, a file that will be read back
  by the parser wants plain ASCII, and a paper wants TeX. `Display` always uses the default `Formatter`, which produces
  the standard (Unicode) form.

*/

use strum::EnumString;

use crate::abstractions::{Exponent, Subscript};


/// Unicode subscript digits ₀ through ₉.
static SUBSCRIPT_DIGITS: [char; 10] = [
  '\u{2080}', '\u{2081}', '\u{2082}', '\u{2083}', '\u{2084}',
  '\u{2085}', '\u{2086}', '\u{2087}', '\u{2088}', '\u{2089}'
];

/// Unicode superscript digits ⁰ through ⁹. Note that ¹, ², ³ live in Latin-1, not with the others.
static SUPERSCRIPT_DIGITS: [char; 10] = [
  '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}',
  '\u{2075}', '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}'
];

static SUPERSCRIPT_MINUS: char = '\u{207B}';


#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumString, Hash)]
pub enum DisplayForm {
  /// Unicode, e.g. `x₁²x₀⁻¹`.
  #[strum(serialize = "StandardForm", serialize = "Standard")]
  Standard,
  /// ASCII that the parser reads back, e.g. `x_1^2 x_0^-1`.
  #[strum(serialize = "InputForm", serialize = "Input")]
  Input,
  /// TeX, e.g. `x_{1}^{2}x_{0}^{-1}`.
  #[strum(serialize = "TeXForm", serialize = "TeX")]
  TeX,
}

impl Default for DisplayForm {
  fn default() -> DisplayForm {
    DisplayForm::Standard
  }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
/// Parameters used in methods that transform elements into strings.
pub struct Formatter {
  pub form: DisplayForm,
}

impl From<DisplayForm> for Formatter {
  fn from(form: DisplayForm) -> Self {
    Formatter {
      form
    }
  }
}

pub trait Formattable {
  fn format(&self, formatter: &Formatter) -> String;
}


/// Implements `Display` in terms of `Formattable` using the default `Formatter`.
macro_rules! display_formattable_impl {
  ($type_name:ty) => {
    impl std::fmt::Display for $type_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
          f,
          "{}",
          $crate::format::Formattable::format(self, &$crate::format::Formatter::default())
        )
      }
    }
  }
}
pub(crate) use display_formattable_impl;


// region Glyph helpers

fn map_digits(n: u64, table: &[char; 10]) -> String {
  n.to_string()
   .chars()
   .map(|c| table[c.to_digit(10).unwrap_or(0) as usize])
   .collect()
}

pub(crate) fn subscript_digits(n: Subscript) -> String {
  map_digits(n as u64, &SUBSCRIPT_DIGITS)
}

pub(crate) fn superscript_digits(n: u64) -> String {
  map_digits(n, &SUPERSCRIPT_DIGITS)
}

/// Formats the single syllable `x_subscript^exponent` in the given form. An exponent of 1 is omitted.
pub(crate) fn format_syllable(subscript: Subscript, exponent: Exponent, form: DisplayForm) -> String {
  match form {

    DisplayForm::Standard => {
      let mut text = format!("x{}", subscript_digits(subscript));
      if exponent < 0 {
        text.push(SUPERSCRIPT_MINUS);
        text.push_str(superscript_digits(exponent.unsigned_abs()).as_str());
      } else if exponent > 1 {
        text.push_str(superscript_digits(exponent.unsigned_abs()).as_str());
      }
      text
    }

    DisplayForm::Input => {
      if exponent == 1 {
        format!("x_{}", subscript)
      } else {
        format!("x_{}^{}", subscript, exponent)
      }
    }

    DisplayForm::TeX => {
      if exponent == 1 {
        format!("x_{{{}}}", subscript)
      } else {
        format!("x_{{{}}}^{{{}}}", subscript, exponent)
      }
    }

  }
}

// endregion
