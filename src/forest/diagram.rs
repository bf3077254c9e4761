/*!

Forest diagrams, as described in "Forest Diagrams for Elements of Thompson's Group F" by Belk and Brown.

A forest diagram is a pair of forests with the same number of leaves, each with a pointer marking one of its trees.
The diagram of an element is built from its normal form

```text
x_{i₁}^{a₁} ⋯ x_{iₙ}^{aₙ} x_{jₘ}^{-bₘ} ⋯ x_{j₁}^{-b₁}
```

by starting from two single-leaf forests and reading the word from right to left. Each negative unit `xⱼ⁻¹` acts on
the bottom forest and each positive unit `xᵢ` on the top forest:

  * `x₀⁻¹` prepends a leaf to both forests and moves the bottom pointer one tree to the right;
  * `xⱼ⁻¹`, `j > 0`, inserts a leaf into the top forest and splits leaf `j` of the bottom forest into a caret;
  * `x₀` moves the top pointer one tree to the right, growing both forests if the pointer falls off the end;
  * `xᵢ`, `i > 0`, joins the trees `i - 1` and `i` places right of the top pointer under a caret.

Both forests are padded with lone leaves on the right whenever an operation needs more leaves than there are.

*/

use crate::{
  logging::{log, log_at_level, Channel},
  normal_form::NormalForm,
};

use super::Forest;


#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ForestDiagram {
  pub top           : Forest,
  pub top_pointer   : usize,
  pub bottom        : Forest,
  pub bottom_pointer: usize,
}

impl ForestDiagram {
  /// The diagram of the identity: two single-leaf forests, both pointers on the only tree.
  pub fn identity() -> ForestDiagram {
    DiagramBuilder::new().finish()
  }

  /// Builds the forest diagram of the element with the given normal form.
  pub fn build(normal_form: &NormalForm) -> ForestDiagram {
    let mut builder = DiagramBuilder::new();

    // Right to left: the negative suffix in ascending subscript order, then the positive prefix in descending order.
    for syllable in normal_form.syllables().iter().rev().filter(|s| s.exponent < 0) {
      for _ in 0..syllable.exponent.unsigned_abs() {
        builder.apply_inverse_generator(syllable.subscript);
      }
    }
    for syllable in normal_form.syllables().iter().rev().filter(|s| s.exponent > 0) {
      for _ in 0..syllable.exponent.unsigned_abs() {
        builder.apply_generator(syllable.subscript);
      }
    }

    let diagram = builder.finish();
    log(
      Channel::Debug,
      5,
      format!("Forest diagram of {}: {}", normal_form, diagram).as_str()
    );
    diagram
  }

  /// The common number of leaves of the two forests.
  pub fn leaf_count(&self) -> usize {
    self.top.leaf_count()
  }

  /// The diagram as the tuple `(top, top_pointer, bottom, bottom_pointer)`.
  pub fn into_parts(self) -> (Forest, usize, Forest, usize) {
    (self.top, self.top_pointer, self.bottom, self.bottom_pointer)
  }
}

impl Default for ForestDiagram {
  fn default() -> Self {
    ForestDiagram::identity()
  }
}

impl std::fmt::Display for ForestDiagram {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{} @{}] / [{} @{}]", self.top, self.top_pointer, self.bottom, self.bottom_pointer)
  }
}


/// The working state while a diagram is built one generator at a time.
#[derive(Clone, Debug)]
pub struct DiagramBuilder {
  top           : Forest,
  top_pointer   : usize,
  bottom        : Forest,
  bottom_pointer: usize,
}

impl DiagramBuilder {
  pub fn new() -> DiagramBuilder {
    DiagramBuilder {
      top           : Forest::trivial(),
      top_pointer   : 0,
      bottom        : Forest::trivial(),
      bottom_pointer: 0,
    }
  }

  fn pad(&mut self, n: usize) {
    self.top.push_leaves(n);
    self.bottom.push_leaves(n);
  }

  /// Applies `xⱼ⁻¹` to the bottom forest.
  pub fn apply_inverse_generator(&mut self, j: usize) {
    log_at_level(5, format!("Applying x{}^-1 to {} / {}", j, self.top, self.bottom).as_str());

    if j == 0 {
      self.top.prepend_leaf();
      self.bottom.prepend_leaf();
      self.bottom_pointer += 1;
      return;
    }

    let leaves = self.bottom.leaf_count();
    if leaves < j {
      self.pad(j - leaves);
    }
    self.top.insert_leaf(self.top_pointer + j);
    self.bottom.graft_at_leaf(j - 1);
  }

  /// Applies `xᵢ` to the top forest.
  pub fn apply_generator(&mut self, i: usize) {
    log_at_level(5, format!("Applying x{} to {} / {}", i, self.top, self.bottom).as_str());

    if i == 0 {
      if self.top_pointer + 1 == self.top.tree_count() {
        self.pad(1);
      }
      self.top_pointer += 1;
      return;
    }

    let needed = self.top_pointer + i + 1;
    let trees  = self.top.tree_count();
    if trees < needed {
      self.pad(needed - trees);
    }
    self.top.join(self.top_pointer + i - 1);
  }

  /// Pads the forest with fewer leaves so both have the same number, and returns the diagram.
  pub fn finish(mut self) -> ForestDiagram {
    let top_leaves    = self.top.leaf_count();
    let bottom_leaves = self.bottom.leaf_count();
    if top_leaves < bottom_leaves {
      self.top.push_leaves(bottom_leaves - top_leaves);
    } else if bottom_leaves < top_leaves {
      self.bottom.push_leaves(top_leaves - bottom_leaves);
    }

    ForestDiagram {
      top           : self.top,
      top_pointer   : self.top_pointer,
      bottom        : self.bottom,
      bottom_pointer: self.bottom_pointer,
    }
  }
}

impl Default for DiagramBuilder {
  fn default() -> Self {
    DiagramBuilder::new()
  }
}


#[cfg(test)]
mod tests {
  use std::collections::{HashMap, HashSet};

  use proptest::prelude::*;

  use crate::element::{GroupElement, Syllable};
  use super::*;

  /// The diagram of the given word as `(top, top_pointer, bottom, bottom_pointer)` with forests in bracket notation.
  fn diagram(subscripts: &[usize], exponents: &[i64]) -> (String, usize, String, usize) {
    let diagram = GroupElement::new(subscripts, exponents).unwrap().forest_diagram();
    (diagram.top.to_string(), diagram.top_pointer, diagram.bottom.to_string(), diagram.bottom_pointer)
  }

  fn expected(top: &str, top_pointer: usize, bottom: &str, bottom_pointer: usize) -> (String, usize, String, usize) {
    (top.to_string(), top_pointer, bottom.to_string(), bottom_pointer)
  }

  #[test]
  fn identity() {
    assert_eq!(expected(".", 0, ".", 0), diagram(&[0], &[0]));
    assert_eq!(ForestDiagram::identity(), GroupElement::identity().forest_diagram());
    assert_eq!(1, ForestDiagram::identity().leaf_count());
  }

  #[test]
  fn generators() {
    assert_eq!(expected(". .", 1, ". .", 0), diagram(&[0], &[1]));
    assert_eq!(expected(". .", 0, ". .", 1), diagram(&[0], &[-1]));
    assert_eq!(expected("(.)(.)", 0, ". .", 0), diagram(&[1], &[1]));
    assert_eq!(expected(". .", 0, "(.)(.)", 0), diagram(&[1], &[-1]));
    assert_eq!(expected(". (.)(.)", 0, ". . .", 0), diagram(&[2], &[1]));
    assert_eq!(expected(". . .", 0, ". (.)(.)", 0), diagram(&[2], &[-1]));
    assert_eq!(expected(". . (.)(.)", 0, ". . . .", 0), diagram(&[3], &[1]));
  }

  #[test]
  fn powers_and_products() {
    assert_eq!(expected(". . .", 2, ". . .", 0), diagram(&[0], &[2]));
    assert_eq!(expected(". . .", 0, ". . .", 2), diagram(&[0], &[-2]));
    assert_eq!(expected("((.)(.))(.)", 0, ". . .", 0), diagram(&[1], &[2]));
    assert_eq!(expected("(.)(.) .", 1, ". . .", 0), diagram(&[0, 1], &[1, 1]));
    assert_eq!(expected(". .", 1, "(.)(.)", 0), diagram(&[0, 1], &[1, -1]));
    assert_eq!(expected("(.)(.)", 0, ". .", 1), diagram(&[1, 0], &[1, -1]));
    assert_eq!(expected("(.)((.)(.)) .", 1, ". . . .", 0), diagram(&[0, 1, 2], &[1, 1, 1]));
    assert_eq!(expected(". . . .", 0, "(.)((.)(.)) .", 1), diagram(&[2, 1, 0], &[-1, -1, -1]));
    assert_eq!(expected("(.)(.) .", 0, "(.)((.)(.))", 0), diagram(&[1, 2, 1], &[1, -1, -1]));
    assert_eq!(expected(". . (.)(.)", 0, "(.)(.) . .", 0), diagram(&[3, 1], &[1, -1]));
    assert_eq!(expected("(((.)(.))(.))(.)", 0, ". . . .", 2), diagram(&[1, 0], &[3, -2]));
    assert_eq!(expected("(.)(.) .", 1, ". . .", 1), diagram(&[0, 1, 0], &[1, 1, -1]));
  }

  #[test]
  fn diagram_of_unreduced_word_uses_normal_form() {
    // x₀⁻¹x₁x₀ = x₂
    assert_eq!(diagram(&[2], &[1]), diagram(&[0, 1, 0], &[-1, 1, 1]));
  }

  #[test]
  fn builder_finish_pads() {
    let mut builder = DiagramBuilder::new();
    builder.top.push_leaves(2);
    let diagram = builder.finish();
    assert_eq!(3, diagram.top.leaf_count());
    assert_eq!(3, diagram.bottom.leaf_count());
  }

  #[test]
  fn display() {
    let diagram = GroupElement::generator(0).forest_diagram();
    assert_eq!("[. . @1] / [. . @0]", diagram.to_string());
  }

  #[cfg(not(feature = "single-pass-caret-cancellation"))]
  #[test]
  fn distinct_normal_forms_have_distinct_diagrams() {
    let generators: Vec<GroupElement> = vec![
      GroupElement::generator(0),
      GroupElement::generator_inverse(0),
      GroupElement::generator(1),
      GroupElement::generator_inverse(1),
    ];

    // Every element within six letters of the identity.
    let mut seen     : HashSet<NormalForm>                = HashSet::new();
    let mut diagrams : HashMap<ForestDiagram, NormalForm> = HashMap::new();
    let mut frontier : Vec<GroupElement>                  = vec![GroupElement::identity()];
    seen.insert(NormalForm::identity());

    for _ in 0..6 {
      let mut next = Vec::new();
      for element in &frontier {
        for generator in &generators {
          let product = element * generator;
          if seen.insert(product.normal_form()) {
            next.push(product);
          }
        }
      }
      frontier = next;
    }

    for normal_form in seen.iter() {
      if let Some(other) = diagrams.insert(normal_form.forest_diagram(), normal_form.clone()) {
        panic!("{} and {} share the diagram {}", normal_form, other, normal_form.forest_diagram());
      }
    }
    assert_eq!(seen.len(), diagrams.len());
    assert!(seen.len() > 100);
  }

  proptest! {
    #[test]
    fn forests_have_equal_leaf_counts(pairs in prop::collection::vec((0usize..6, -3i64..=3), 0..8)) {
      let element = GroupElement::from_syllables(pairs.into_iter().map(|(s, e)| Syllable::new(s, e)).collect());
      let diagram = element.forest_diagram();
      prop_assert_eq!(diagram.top.leaf_count(), diagram.bottom.leaf_count());
      prop_assert!(diagram.top_pointer < diagram.top.tree_count());
      prop_assert!(diagram.bottom_pointer < diagram.bottom.tree_count());
    }
  }
}
