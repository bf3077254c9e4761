/*!

Reads group elements written in input form, the ASCII form produced by `DisplayForm::Input`:

```text
x_1^2 x_0^-1 x_3
x1^2 * x0^-1 * x3
```

A factor is `x`, an optional `_`, a subscript, and an optional `^` followed by a signed exponent. Factors are
separated by blanks, `*`, or nothing at all. The literal `1` is the identity and may appear anywhere, and the empty
string is the identity too. Parsing does not normalize: the element keeps the syllables exactly as written.

*/

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
  abstractions::{Exponent, Subscript},
  element::{GroupElement, Syllable},
  error::{Error, Result},
};


lazy_static! {
  static ref FACTOR: Regex = Regex::new(r"^x_?([0-9]+)(?:\^([+-]?[0-9]+))?").unwrap();
  static ref SEPARATOR: Regex = Regex::new(r"^[ \t\r\n*]+").unwrap();
}


fn parse_error(text: &str, offset: usize) -> Error {
  let found = text[offset..].split_whitespace().next().unwrap_or("").to_string();
  Error::Parse {
    offset,
    found: if found.is_empty() { "end of input".to_string() } else { found },
  }
}

/// Parses a list of syllables in input form. Identity literals contribute no syllables.
pub fn parse_syllables(text: &str) -> Result<Vec<Syllable>> {
  let mut syllables = Vec::new();
  let mut offset    = 0;

  while offset < text.len() {
    let rest = &text[offset..];

    if let Some(separator) = SEPARATOR.find(rest) {
      offset += separator.end();
      continue;
    }

    if rest.starts_with('1') && !rest[1..].starts_with(|c: char| c.is_ascii_digit()) {
      offset += 1;
      continue;
    }

    let captures = match FACTOR.captures(rest) {
      Some(captures) => captures,
      None => return Err(parse_error(text, offset)),
    };

    // Group 1 always participates in a match.
    let subscript = match captures.get(1).map(|m| m.as_str().parse::<Subscript>()) {
      Some(Ok(subscript)) => subscript,
      _ => return Err(parse_error(text, offset)),
    };
    let exponent = match captures.get(2) {
      Some(m) => {
        match m.as_str().parse::<Exponent>() {
          Ok(exponent) => exponent,
          Err(_) => return Err(parse_error(text, offset)),
        }
      }
      None => 1,
    };

    syllables.push(Syllable::new(subscript, exponent));
    offset += captures.get(0).map_or(0, |m| m.end());
  }

  Ok(syllables)
}

impl FromStr for GroupElement {
  type Err = Error;

  fn from_str(text: &str) -> Result<GroupElement> {
    let syllables = parse_syllables(text)?;
    if syllables.is_empty() {
      Ok(GroupElement::identity())
    } else {
      Ok(GroupElement::from_syllables(syllables))
    }
  }
}


#[cfg(test)]
mod tests {
  use crate::format::{DisplayForm, Formattable, Formatter};
  use super::*;

  fn parse(text: &str) -> GroupElement {
    text.parse::<GroupElement>().unwrap()
  }

  #[test]
  fn factors_are_read_as_written() {
    let element = parse("x_1^2 x_0^-1 x_3");
    assert_eq!(vec![1, 0, 3], element.subscripts());
    assert_eq!(vec![2, -1, 1], element.exponents());

    let element = parse("x1^+2*x0^-1 * x3");
    assert_eq!(vec![1, 0, 3], element.subscripts());
    assert_eq!(vec![2, -1, 1], element.exponents());

    // No normalization.
    let element = parse("x_0 x_0^-1");
    assert_eq!(2, element.syllable_count());
    assert!(element.is_identity());
  }

  #[test]
  fn adjacent_factors() {
    let element = parse("x_12x_0^-3x_4");
    assert_eq!(vec![12, 0, 4], element.subscripts());
    assert_eq!(vec![1, -3, 1], element.exponents());
  }

  #[test]
  fn identity_literals() {
    assert!(parse("").is_identity());
    assert!(parse("  ").is_identity());
    assert!(parse("1").is_identity());
    assert_eq!(GroupElement::identity().syllables(), parse("1").syllables());
    assert_eq!(vec![2], parse("1 * x_2 * 1").subscripts());
  }

  #[test]
  fn malformed_input() {
    assert_eq!(
      Err(Error::Parse { offset: 4, found: "y_2".to_string() }),
      "x_1 y_2".parse::<GroupElement>()
    );
    assert_eq!(
      Err(Error::Parse { offset: 0, found: "x_".to_string() }),
      "x_".parse::<GroupElement>().map(|_| ())
    );
    assert!("12".parse::<GroupElement>().is_err());
    assert!("x_99999999999999999999999".parse::<GroupElement>().is_err());
    assert_eq!(
      Err(Error::Parse { offset: 3, found: "^".to_string() }),
      "x_1^".parse::<GroupElement>().map(|_| ())
    );
  }

  #[test]
  fn input_form_round_trips() {
    let formatter = Formatter::from(DisplayForm::Input);
    for text in ["x_0^3 x_2 x_5^-1 x_1^-2", "x_1 x_2^-1 x_1^-1", "1", "x_10^-7"] {
      let element = parse(text);
      assert_eq!(text, element.format(&formatter));
      assert_eq!(element, parse(element.format(&formatter).as_str()));
    }
  }
}
