/*!

Elements of Thompson's group F as words in the generators `x₀, x₁, x₂, …`.

A `GroupElement` is a sequence of `Syllable`s, read left to right, each syllable a generator raised to a nonzero
power. The element is whatever the word happens to be: it need not be reduced. All group operations reduce their
result, and equality, hashing, and ordering go through the normal form, so two elements compare equal whenever they
are equal in F, however they were written.

Elements are immutable. Every operation returns a new value.

*/

use std::{
  cmp::Ordering,
  hash::{Hash, Hasher},
  iter::Product,
  ops::{Div, Mul},
};

use crate::{
  abstractions::{Exponent, Subscript},
  error::{Error, Result},
  forest::ForestDiagram,
  format::{display_formattable_impl, format_syllable, DisplayForm, Formattable, Formatter},
  normal_form::{normalize, NormalForm},
};


/// The power `x_subscript^exponent` of a single generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Syllable {
  pub subscript: Subscript,
  pub exponent : Exponent,
}

impl Syllable {
  /// `x₀⁰`, the sentinel that stands for the identity.
  pub const IDENTITY: Syllable = Syllable { subscript: 0, exponent: 0 };

  pub fn new(subscript: Subscript, exponent: Exponent) -> Syllable {
    Syllable {
      subscript,
      exponent
    }
  }

  pub fn inverse(&self) -> Syllable {
    Syllable::new(self.subscript, -self.exponent)
  }
}

impl Formattable for Syllable {
  fn format(&self, formatter: &Formatter) -> String {
    format_syllable(self.subscript, self.exponent, formatter.form)
  }
}

display_formattable_impl!(Syllable);


#[derive(Clone, Debug)]
pub struct GroupElement {
  syllables: Vec<Syllable>,
}

impl GroupElement {

  // region Construction

  /// Creates the element `x_{s₀}^{e₀} x_{s₁}^{e₁} ⋯` from its subscripts and exponents. The element
  /// `x₅²x₃x₇⁻¹x₁₁³x₀⁻⁷`, for example, has subscripts `[5, 3, 7, 11, 0]` and exponents `[2, 1, -1, 3, -7]`.
  pub fn new(subscripts: &[Subscript], exponents: &[Exponent]) -> Result<GroupElement> {
    if subscripts.len() != exponents.len() {
      return Err(Error::ArityMismatch {
        subscripts: subscripts.len(),
        exponents : exponents.len(),
      });
    }

    Ok(GroupElement {
      syllables: subscripts.iter()
                           .zip(exponents.iter())
                           .map(|(&subscript, &exponent)| Syllable::new(subscript, exponent))
                           .collect()
    })
  }

  pub fn from_syllables(syllables: Vec<Syllable>) -> GroupElement {
    GroupElement {
      syllables
    }
  }

  pub fn identity() -> GroupElement {
    NormalForm::identity().into_element()
  }

  /// The generator `xᵢ`.
  pub fn generator(i: Subscript) -> GroupElement {
    GroupElement::from_syllables(vec![Syllable::new(i, 1)])
  }

  /// The inverse generator `xᵢ⁻¹`.
  pub fn generator_inverse(i: Subscript) -> GroupElement {
    GroupElement::from_syllables(vec![Syllable::new(i, -1)])
  }

  // endregion

  // region Accessors

  /// The syllables as written, not reduced.
  pub fn syllables(&self) -> &[Syllable] {
    &self.syllables
  }

  pub fn subscripts(&self) -> Vec<Subscript> {
    self.syllables.iter().map(|s| s.subscript).collect()
  }

  pub fn exponents(&self) -> Vec<Exponent> {
    self.syllables.iter().map(|s| s.exponent).collect()
  }

  /// The number of syllables as written. This is not the word length; see `word_length` for that.
  pub fn syllable_count(&self) -> usize {
    self.syllables.len()
  }

  // endregion

  // region Group operations

  pub fn normal_form(&self) -> NormalForm {
    normalize(&self.syllables)
  }

  /// Returns the same element written in normal form.
  pub fn normalized(&self) -> GroupElement {
    self.normal_form().into_element()
  }

  pub fn is_identity(&self) -> bool {
    self.normal_form().is_identity()
  }

  /// The product `self · other`, in normal form.
  pub fn multiply(&self, other: &GroupElement) -> GroupElement {
    let mut syllables = Vec::with_capacity(self.syllables.len() + other.syllables.len());
    syllables.extend_from_slice(&self.syllables);
    syllables.extend_from_slice(&other.syllables);
    normalize(&syllables).into_element()
  }

  /// The inverse, in normal form.
  pub fn inverse(&self) -> GroupElement {
    self.normal_form().inverse().into_element()
  }

  /// The quotient `self · other⁻¹`, in normal form.
  pub fn divide(&self, other: &GroupElement) -> GroupElement {
    self.multiply(&other.inverse())
  }

  /// The `n`th power, in normal form. Negative powers are powers of the inverse.
  pub fn pow(&self, n: i64) -> GroupElement {
    let base = if n < 0 { self.inverse() } else { self.normalized() };
    let mut syllables = Vec::new();
    for _ in 0..n.unsigned_abs() {
      syllables.extend_from_slice(&base.syllables);
    }
    normalize(&syllables).into_element()
  }

  // endregion

  // region Derived structures

  /// The forest diagram of the element, computed from its normal form.
  pub fn forest_diagram(&self) -> ForestDiagram {
    ForestDiagram::build(&self.normal_form())
  }

  /// The weight of the element's forest diagram, reported as its length in `x₀, x₁` and their inverses.
  /// See `word_metric::word_length`.
  pub fn word_length(&self) -> Result<usize> {
    self.normal_form().word_length()
  }

  // endregion

  /// Formats a word. Zero-exponent syllables are skipped, and a word with nothing left to show is `1`.
  pub(crate) fn format_syllables(syllables: &[Syllable], formatter: &Formatter) -> String {
    let factors: Vec<String> = syllables.iter()
                                        .filter(|s| s.exponent != 0)
                                        .map(|s| s.format(formatter))
                                        .collect();

    if factors.is_empty() {
      return "1".to_string();
    }

    match formatter.form {
      DisplayForm::Input => factors.join(" "),
      _ => factors.concat(),
    }
  }
}

impl Default for GroupElement {
  fn default() -> Self {
    GroupElement::identity()
  }
}

impl From<NormalForm> for GroupElement {
  fn from(normal_form: NormalForm) -> Self {
    normal_form.into_element()
  }
}

impl From<Syllable> for GroupElement {
  fn from(syllable: Syllable) -> Self {
    GroupElement::from_syllables(vec![syllable])
  }
}


// region Comparison through the normal form

impl PartialEq for GroupElement {
  fn eq(&self, other: &Self) -> bool {
    self.normal_form() == other.normal_form()
  }
}

impl Eq for GroupElement {}

impl Hash for GroupElement {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.normal_form().hash(state);
  }
}

impl PartialOrd for GroupElement {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Lexicographic order on the syllables of the normal forms. The order has no group-theoretic meaning. It exists so
/// elements can be sorted and kept in ordered collections.
impl Ord for GroupElement {
  fn cmp(&self, other: &Self) -> Ordering {
    self.normal_form().cmp(&other.normal_form())
  }
}

// endregion


// region Operators

impl Mul<&GroupElement> for &GroupElement {
  type Output = GroupElement;

  fn mul(self, rhs: &GroupElement) -> GroupElement {
    self.multiply(rhs)
  }
}

impl Mul for GroupElement {
  type Output = GroupElement;

  fn mul(self, rhs: GroupElement) -> GroupElement {
    self.multiply(&rhs)
  }
}

impl Div<&GroupElement> for &GroupElement {
  type Output = GroupElement;

  fn div(self, rhs: &GroupElement) -> GroupElement {
    self.divide(rhs)
  }
}

impl Div for GroupElement {
  type Output = GroupElement;

  fn div(self, rhs: GroupElement) -> GroupElement {
    self.divide(&rhs)
  }
}

impl Product for GroupElement {
  fn product<I: Iterator<Item = GroupElement>>(iter: I) -> GroupElement {
    let syllables: Vec<Syllable> = iter.flat_map(|element| element.syllables).collect();
    normalize(&syllables).into_element()
  }
}

impl<'a> Product<&'a GroupElement> for GroupElement {
  fn product<I: Iterator<Item = &'a GroupElement>>(iter: I) -> GroupElement {
    let syllables: Vec<Syllable> = iter.flat_map(|element| element.syllables.iter().copied()).collect();
    normalize(&syllables).into_element()
  }
}

// endregion


impl Formattable for GroupElement {
  fn format(&self, formatter: &Formatter) -> String {
    GroupElement::format_syllables(&self.syllables, formatter)
  }
}

display_formattable_impl!(GroupElement);


#[cfg(test)]
mod tests {
  use std::collections::{BTreeSet, HashSet};
  use proptest::prelude::*;

  use super::*;

  fn element(subscripts: &[Subscript], exponents: &[Exponent]) -> GroupElement {
    GroupElement::new(subscripts, exponents).unwrap()
  }

  fn arbitrary_element() -> impl Strategy<Value = GroupElement> {
    prop::collection::vec((0usize..5, -2i64..=2), 0..6)
        .prop_map(|pairs| {
          GroupElement::from_syllables(pairs.into_iter().map(|(s, e)| Syllable::new(s, e)).collect())
        })
  }

  #[test]
  fn arity_mismatch() {
    assert_eq!(
      Err(Error::ArityMismatch { subscripts: 2, exponents: 1 }),
      GroupElement::new(&[0, 1], &[1])
    );
  }

  #[test]
  fn identity_scenarios() {
    let empty = element(&[], &[]);
    let zero  = element(&[0], &[0]);

    assert!(empty.is_identity());
    assert!(zero.is_identity());
    assert_eq!(empty, zero);
    assert_eq!(GroupElement::identity(), GroupElement::default());
    assert_eq!(vec![0], zero.normalized().subscripts());
    assert_eq!(vec![0], zero.normalized().exponents());
    assert_eq!(0, zero.word_length().unwrap());
    assert_eq!(0, empty.word_length().unwrap());
  }

  #[test]
  fn already_normal() {
    let e = element(&[1, 0], &[1, -1]);
    assert_eq!(e.syllables(), e.normalized().syllables());
  }

  #[test]
  fn conjugation_relation() {
    // x₀⁻¹x₁x₀ = x₂
    let conjugate = element(&[0, 1, 0], &[-1, 1, 1]);
    assert_eq!(vec![2], conjugate.normalized().subscripts());
    assert_eq!(vec![1], conjugate.normalized().exponents());

    // x₀x₁x₀⁻¹ is already a normal form, and it is not x₂.
    let other_way = element(&[0, 1, 0], &[1, 1, -1]);
    assert_eq!(other_way.syllables(), other_way.normalized().syllables());
    assert_ne!(other_way, GroupElement::generator(2));
  }

  #[test]
  fn canonicity_of_relations() {
    for i in 0..4 {
      for j in i + 1..6 {
        let conjugate = element(&[i, j, i], &[-1, 1, 1]);
        assert_eq!(GroupElement::generator(j + 1).normal_form(), conjugate.normal_form());
      }
    }
  }

  #[test]
  fn multiply_by_inverse_generator() {
    let product = GroupElement::generator(0).multiply(&GroupElement::generator_inverse(0));
    assert_eq!(vec![Syllable::IDENTITY], product.syllables());
    assert!(product.is_identity());
  }

  #[test]
  fn generator_lengths() {
    assert_eq!(1, GroupElement::generator(0).word_length().unwrap());
    assert_eq!(1, GroupElement::generator(1).word_length().unwrap());
    assert_eq!(3, GroupElement::generator(2).word_length().unwrap());
    assert_eq!(5, GroupElement::generator(3).word_length().unwrap());
  }

  #[test]
  fn operators() {
    let x0 = GroupElement::generator(0);
    let x1 = GroupElement::generator(1);

    // x₀⁻¹x₁x₀ = x₂
    let conjugate = &(&x0.inverse() * &x1) * &x0;
    assert_eq!(GroupElement::generator(2), conjugate);
    assert_eq!(x1.clone(), &(&x1 * &x0) / &x0);
    assert_eq!(GroupElement::identity(), x1.clone() / x1.clone());
    assert_eq!(element(&[0, 1], &[1, 1]), x0.clone() * x1.clone());

    let product: GroupElement = vec![x0.inverse(), x1.clone(), x0.clone()].into_iter().product();
    assert_eq!(GroupElement::generator(2), product);
    let product: GroupElement = [x0.clone(), x0.clone()].iter().product();
    assert_eq!(element(&[0], &[2]), product);
  }

  #[test]
  fn powers() {
    let x1 = GroupElement::generator(1);
    assert_eq!(element(&[1], &[3]), x1.pow(3));
    assert_eq!(element(&[1], &[-2]), x1.pow(-2));
    assert!(x1.pow(0).is_identity());
    assert_eq!(vec![(1, 3)], x1.pow(3).syllables().iter().map(|s| (s.subscript, s.exponent)).collect::<Vec<_>>());
  }

  #[test]
  fn equality_hashing_and_order_agree() {
    let x2     = GroupElement::generator(2);
    let x2_too = element(&[0, 1, 0], &[-1, 1, 1]);

    let mut set = HashSet::new();
    set.insert(x2.clone());
    assert!(set.contains(&x2_too));

    let ordered: BTreeSet<GroupElement> = vec![x2, x2_too, GroupElement::generator(0)].into_iter().collect();
    assert_eq!(2, ordered.len());
  }

  #[test]
  fn display() {
    assert_eq!("x₁₂x₀⁻¹⁰x₃²", element(&[12, 0, 3], &[1, -10, 2]).to_string());
    assert_eq!("1", GroupElement::identity().to_string());
    assert_eq!("1", element(&[], &[]).to_string());
    assert_eq!("x₀x₁x₀⁻¹", element(&[0, 1, 0], &[1, 1, -1]).normalized().to_string());
  }

  #[test]
  fn formats() {
    let e = element(&[1, 0], &[2, -1]);
    assert_eq!("x_1^2 x_0^-1", e.format(&DisplayForm::Input.into()));
    assert_eq!("x_{1}^{2}x_{0}^{-1}", e.format(&DisplayForm::TeX.into()));
    assert_eq!("x₁²x₀⁻¹", e.format(&DisplayForm::Standard.into()));
  }

  proptest! {
    #[test]
    fn inverse_law(e in arbitrary_element()) {
      prop_assert!(e.multiply(&e.inverse()).is_identity());
      prop_assert!(e.inverse().multiply(&e).is_identity());
    }
  }

  #[cfg(not(feature = "single-pass-caret-cancellation"))]
  proptest! {
    #[test]
    fn associativity(a in arbitrary_element(), b in arbitrary_element(), c in arbitrary_element()) {
      prop_assert_eq!((&a * &b) * c.clone(), a * (&b * &c));
    }

    #[test]
    fn length_symmetry(e in arbitrary_element()) {
      prop_assert_eq!(e.word_length().unwrap(), e.inverse().word_length().unwrap());
    }

    #[test]
    fn length_zero_only_for_identity(e in arbitrary_element()) {
      prop_assert_eq!(e.word_length().unwrap() == 0, e.is_identity());
    }

    #[test]
    fn idempotence(e in arbitrary_element()) {
      let once  = e.normalized();
      let twice = once.normalized();
      prop_assert_eq!(once.syllables(), twice.syllables());
    }
  }
}
