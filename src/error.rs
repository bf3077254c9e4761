//! Common error type.

use thiserror::Error;

/// Everything that can go wrong when building or measuring elements of F.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
  /// The subscript and exponent lists given to `GroupElement::new` have different lengths.
  #[error("number of subscripts ({subscripts}) and exponents ({exponents}) must be equal")]
  ArityMismatch {
    subscripts: usize,
    exponents : usize,
  },

  /// Labeling the gaps of a forest diagram did not classify every gap of both forests. This is a bug in diagram
  /// construction, not bad input.
  #[error("forest labeling is inconsistent: {gaps} gaps, {top} top labels, {bottom} bottom labels")]
  LabelingInconsistency {
    gaps  : usize,
    top   : usize,
    bottom: usize,
  },

  /// Text that is not an element in input form.
  #[error("cannot parse group element: unexpected `{found}` at offset {offset}")]
  Parse {
    offset: usize,
    found : String,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
