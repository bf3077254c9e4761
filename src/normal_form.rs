/*!

# Normalization

Thompson's group F has the infinite presentation

```text
F = ⟨ x₀, x₁, x₂, … | xᵢ⁻¹xⱼxᵢ = xⱼ₊₁ for i < j ⟩.
```

Every element has a unique _normal form_

```text
x_{i₁}^{a₁} ⋯ x_{iₙ}^{aₙ} x_{jₘ}^{-bₘ} ⋯ x_{j₁}^{-b₁}
```

with `i₁ < ⋯ < iₙ`, `j₁ < ⋯ < jₘ`, all `aₖ, bₖ > 0`, and with the extra condition that whenever a subscript `k`
appears in both the positive prefix and the negative suffix, `k + 1` appears somewhere as well. Two words represent
the same element exactly when their normal forms are identical, so the normal form is the key for equality, hashing,
and ordering of elements.

Reduction happens in four stages.

1. _Expansion._ Every syllable `xᵢᵉ` becomes `|e|` unit syllables `xᵢ^{±1}`.
2. _Seminormalization._ For each subscript `elem = 0, 1, 2, …` in turn, a cursor sweeps the word and applies the
   first rule that matches at the cursor, then steps back one position:
     * adjacent inverse units cancel;
     * a positive `x_elem` moves left past a larger `x_j^{±1}`, which becomes `x_{j+1}^{±1}`
       (`x_j x_elem = x_elem x_{j+1}`);
     * a negative `x_elem⁻¹` moves right past a larger `x_j^{±1}`, which becomes `x_{j+1}^{±1}`
       (`x_elem⁻¹ x_j = x_{j+1} x_elem⁻¹`).
   If no rule matches, the cursor advances. The result is _seminormal_: correctly ordered, but possibly containing
   matched pairs `xᵢ ⋯ xᵢ⁻¹` that a normal form forbids.
3. _Recombination._ Runs of equal subscripts merge into single syllables.
4. _Caret cancellation._ If `i` occurs exactly twice and `i + 1` does not occur at all, the pair `xᵢ ⋯ xᵢ⁻¹` cancels:
   every subscript strictly between the two occurrences drops by one, and both exponents move one step toward zero.

The last stage is applied exhaustively: each subscript is cancelled as long as it qualifies, and ascending passes
repeat until nothing changes. With the `single-pass-caret-cancellation` feature, a single ascending pass that
cancels at most once per subscript is made instead, which can leave words like `x₁²x₄⁻¹x₁⁻²` only partially reduced.

*/

use smallvec::SmallVec;

use crate::{
  abstractions::Subscript,
  element::{GroupElement, Syllable},
  error::Result,
  forest::ForestDiagram,
  format::{display_formattable_impl, Formattable, Formatter},
  logging::{log, Channel},
  word_metric,
};


/// An element of F written in its unique normal form. The only way to obtain one is through `normalize` (or
/// `GroupElement::normal_form`), so holding a `NormalForm` is proof that reduction has happened.
///
/// Comparison, ordering, and hashing are structural. Since the normal form is unique, structural equality is group
/// equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalForm {
  syllables: Vec<Syllable>,
}

impl NormalForm {
  /// The normal form of the identity, the sentinel syllable `x₀⁰`.
  pub fn identity() -> NormalForm {
    NormalForm {
      syllables: vec![Syllable::IDENTITY]
    }
  }

  pub fn syllables(&self) -> &[Syllable] {
    &self.syllables
  }

  pub fn is_identity(&self) -> bool {
    self.syllables.as_slice() == [Syllable::IDENTITY]
  }

  /// The syllables with positive exponent, in increasing subscript order.
  pub fn positive_prefix(&self) -> &[Syllable] {
    let split = self.syllables.iter().take_while(|s| s.exponent > 0).count();
    &self.syllables[..split]
  }

  /// The syllables with negative exponent, in decreasing subscript order.
  pub fn negative_suffix(&self) -> &[Syllable] {
    let split = self.syllables.iter().take_while(|s| s.exponent > 0).count();
    &self.syllables[split..]
  }

  /// Checks whether `syllables` has the shape of a normal form. The identity sentinel `[x₀⁰]` counts as canonical.
  pub fn is_canonical(syllables: &[Syllable]) -> bool {
    if syllables == [Syllable::IDENTITY] {
      return true;
    }
    if syllables.is_empty() || syllables.iter().any(|s| s.exponent == 0) {
      return false;
    }

    let split = syllables.iter().take_while(|s| s.exponent > 0).count();
    let (prefix, suffix) = syllables.split_at(split);

    if suffix.iter().any(|s| s.exponent > 0) {
      return false;
    }
    if prefix.windows(2).any(|w| w[0].subscript >= w[1].subscript) {
      return false;
    }
    if suffix.windows(2).any(|w| w[0].subscript <= w[1].subscript) {
      return false;
    }

    let occurs = |k: Subscript| syllables.iter().any(|s| s.subscript == k);
    prefix.iter()
          .filter(|p| suffix.iter().any(|s| s.subscript == p.subscript))
          .all(|p| occurs(p.subscript + 1))
  }

  /// The inverse, itself in normal form. Reversing and negating a normal form does not in general give a normal
  /// form, so the result is reduced again.
  pub fn inverse(&self) -> NormalForm {
    let reversed: Vec<Syllable> = self.syllables.iter().rev().map(Syllable::inverse).collect();
    normalize(&reversed)
  }

  pub fn forest_diagram(&self) -> ForestDiagram {
    ForestDiagram::build(self)
  }

  /// The weight of the element's forest diagram, reported as its length in `x₀, x₁` and their inverses.
  /// See `word_metric::word_length`.
  pub fn word_length(&self) -> Result<usize> {
    word_metric::word_length(self)
  }

  pub fn into_element(self) -> GroupElement {
    GroupElement::from_syllables(self.syllables)
  }
}

impl Default for NormalForm {
  fn default() -> Self {
    NormalForm::identity()
  }
}

impl Formattable for NormalForm {
  fn format(&self, formatter: &Formatter) -> String {
    GroupElement::format_syllables(&self.syllables, formatter)
  }
}

display_formattable_impl!(NormalForm);


/// Reduces the word `syllables` to its normal form.
pub fn normalize(syllables: &[Syllable]) -> NormalForm {
  let mut word = expand(syllables);
  if word.is_empty() {
    return NormalForm::identity();
  }

  seminormalize(&mut word);
  if word.is_empty() {
    return NormalForm::identity();
  }

  let mut word = recombine(&word);
  log(
    Channel::Debug,
    5,
    format!("Seminormal form: {}", GroupElement::format_syllables(&word, &Formatter::default())).as_str()
  );

  cancel_carets(&mut word);
  if word.is_empty() {
    return NormalForm::identity();
  }

  NormalForm {
    syllables: word
  }
}


// region Reduction stages

fn max_subscript(word: &[Syllable]) -> Option<Subscript> {
  word.iter().map(|s| s.subscript).max()
}

/// Upper bound on the units reserved up front by `expand`.
const MAX_RESERVED_UNITS: usize = 1 << 16;

/// The number of units to reserve for expanding `syllables`, saturating instead of overflowing.
fn expansion_capacity(syllables: &[Syllable]) -> usize {
  syllables.iter()
           .map(|s| usize::try_from(s.exponent.unsigned_abs()).unwrap_or(usize::MAX))
           .fold(0usize, |total, units| total.saturating_add(units))
           .min(MAX_RESERVED_UNITS)
}

/// Expands every syllable `xᵢᵉ` into `|e|` unit syllables with exponent `±1`.
fn expand(syllables: &[Syllable]) -> Vec<Syllable> {
  let mut units = Vec::with_capacity(expansion_capacity(syllables));

  for syllable in syllables {
    let unit = Syllable::new(syllable.subscript, syllable.exponent.signum());
    for _ in 0..syllable.exponent.unsigned_abs() {
      units.push(unit);
    }
  }

  units
}

/// Rewrites a word of unit syllables into seminormal form in place. The word may become empty, in which case it
/// represents the identity.
fn seminormalize(word: &mut Vec<Syllable>) {
  let mut elem: Subscript = 0;

  // The maximum is recomputed every round, because commutation raises subscripts.
  while let Some(max) = max_subscript(word) {
    if elem > max {
      break;
    }

    let mut cursor = 0;
    while cursor < word.len() {
      let has_right = cursor + 1 < word.len();
      let current   = word[cursor];

      if has_right && current.subscript == word[cursor + 1].subscript
          && current.exponent == -word[cursor + 1].exponent
      {
        // Cancellation
        word.drain(cursor..cursor + 2);
        if word.is_empty() {
          return;
        }
        cursor = cursor.saturating_sub(1);
      } else if cursor > 0 && current.subscript == elem && current.exponent > 0
          && word[cursor - 1].subscript > elem
      {
        // Left-commutation: x_j x_elem = x_elem x_{j+1}
        let displaced    = word[cursor - 1];
        word[cursor - 1] = current;
        word[cursor]     = Syllable::new(displaced.subscript + 1, displaced.exponent);
        cursor -= 1;
      } else if has_right && current.subscript == elem && current.exponent < 0
          && word[cursor + 1].subscript > elem
      {
        // Right-commutation: x_elem⁻¹ x_j = x_{j+1} x_elem⁻¹
        let displaced    = word[cursor + 1];
        word[cursor + 1] = current;
        word[cursor]     = Syllable::new(displaced.subscript + 1, displaced.exponent);
        cursor = cursor.saturating_sub(1);
      } else {
        cursor += 1;
      }
    }

    elem += 1;
  }
}

/// Merges runs of equal subscripts into single syllables.
fn recombine(units: &[Syllable]) -> Vec<Syllable> {
  let mut word: Vec<Syllable> = Vec::with_capacity(units.len());

  for unit in units {
    match word.last_mut() {
      Some(last) if last.subscript == unit.subscript => {
        last.exponent += unit.exponent;
      }
      _ => word.push(*unit),
    }
  }

  word.retain(|s| s.exponent != 0);
  word
}

/// Cancels matched caret pairs until the seminormal `word` is in normal form.
fn cancel_carets(word: &mut Vec<Syllable>) {
  let single_pass = cfg!(feature = "single-pass-caret-cancellation");

  loop {
    let max = match max_subscript(word) {
      Some(max) => max,
      None => return,
    };

    let mut changed = false;
    for i in 0..=max {
      while cancel_caret_pair(word, i) {
        changed = true;
        if single_pass {
          break;
        }
      }
    }

    if single_pass || !changed {
      return;
    }
  }
}

/// Cancels one matched pair `xᵢ ⋯ xᵢ⁻¹` if `i` occurs exactly twice and `i + 1` does not occur. Reports whether
/// anything was cancelled.
fn cancel_caret_pair(word: &mut Vec<Syllable>, i: Subscript) -> bool {
  let occurrences: SmallVec<[usize; 2]> = word.iter()
                                              .enumerate()
                                              .filter(|(_, s)| s.subscript == i)
                                              .map(|(position, _)| position)
                                              .take(3)
                                              .collect();

  if occurrences.len() != 2 || word.iter().any(|s| s.subscript == i + 1) {
    return false;
  }

  let (first, last) = (occurrences[0], occurrences[1]);
  for syllable in &mut word[first + 1..last] {
    syllable.subscript -= 1;
  }

  // Back to front, so that removing the second occurrence does not move the first.
  for &position in occurrences.iter().rev() {
    let exponent = word[position].exponent;
    if exponent.abs() == 1 {
      word.remove(position);
    } else {
      word[position].exponent -= exponent.signum();
    }
  }

  log(Channel::Debug, 5, format!("Cancelled caret pair at subscript {}.", i).as_str());
  true
}

// endregion
