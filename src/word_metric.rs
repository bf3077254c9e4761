/*!

The word metric of F with respect to the generating set {x₀, x₁}, computed from forest diagrams by the method of
Belk and Brown.

Every gap between two consecutive leaves of a forest gets a label:

| Label | Meaning                                                                   |
|:------|:--------------------------------------------------------------------------|
| `L`   | Left exterior: between two trees, left of the pointer.                    |
| `N`   | Next to a caret: immediately left of the left edge of some caret.         |
| `R`   | Right exterior: between two trees, at or right of the pointer.            |
| `I`   | Interior: inside a tree.                                                  |

The weight of a diagram is the number of carets in it plus, for each gap, a cost that depends on the pair of
labels the gap receives in the top and bottom forests.

*/

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
  error::{Error, Result},
  forest::{Forest, ForestDiagram},
  logging::{log, Channel},
  normal_form::NormalForm,
};


#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[repr(usize)]
pub enum Label {
  L = 0,
  N,
  R,
  I,
}

/// Row is the top label, column the bottom label, both in the order `L, N, R, I`.
static LABEL_PAIR_COSTS: [[usize; 4]; 4] = [
  // L  N  R  I
  [  2, 1, 1, 1 ], // L
  [  1, 2, 2, 2 ], // N
  [  1, 2, 2, 0 ], // R
  [  1, 2, 0, 0 ], // I
];

pub fn label_pair_cost(top: Label, bottom: Label) -> usize {
  LABEL_PAIR_COSTS[top as usize][bottom as usize]
}


/// Labels the gaps of `forest`, whose pointer is on tree `pointer`. Gaps that fit no rule are skipped, so a result
/// shorter than `leaf_count() - 1` means the forest is malformed.
pub fn label_gaps(forest: &Forest, pointer: usize) -> Vec<Label> {
  let positions  = forest.leaf_positions();
  let trees      = forest.trees();
  let mut labels = Vec::with_capacity(positions.len().saturating_sub(1));
  let mut left_exterior_count = 0;

  for pair in positions.windows(2) {
    let (leaf, next) = (pair[0], pair[1]);
    let exterior     = leaf.tree != next.tree;

    let label =
      if exterior && left_exterior_count < pointer {
        left_exterior_count += 1;
        Label::L
      } else if next.openings > leaf.openings || (exterior && trees[next.tree].is_caret()) {
        Label::N
      } else if exterior {
        Label::R
      } else if trees[leaf.tree].is_caret() {
        Label::I
      } else {
        continue;
      };

    labels.push(label);
  }

  labels
}

impl Forest {
  /// The gap labels of this forest when its pointer is on tree `pointer`.
  pub fn labels(&self, pointer: usize) -> Vec<Label> {
    label_gaps(self, pointer)
  }
}


fn render_labels(labels: &[Label]) -> String {
  labels.iter().map(|label| -> &'static str { (*label).into() }).collect()
}

/// The weight of a forest diagram: its caret count plus the cost of every labeled gap.
pub fn diagram_weight(diagram: &ForestDiagram) -> Result<usize> {
  let gaps          = diagram.top.leaf_count().saturating_sub(1);
  let top_labels    = diagram.top.labels(diagram.top_pointer);
  let bottom_labels = diagram.bottom.labels(diagram.bottom_pointer);

  log(
    Channel::Debug,
    4,
    format!(
      "Labels of {}: top {}, bottom {}",
      diagram,
      render_labels(&top_labels),
      render_labels(&bottom_labels)
    ).as_str()
  );

  if top_labels.len() != gaps || bottom_labels.len() != gaps {
    let error = Error::LabelingInconsistency {
      gaps,
      top   : top_labels.len(),
      bottom: bottom_labels.len(),
    };
    log(Channel::Error, 1, error.to_string().as_str());
    return Err(error);
  }

  let carets = diagram.top.caret_count() + diagram.bottom.caret_count();
  let costs: usize =
    top_labels.iter()
              .zip(bottom_labels.iter())
              .map(|(top, bottom)| label_pair_cost(*top, *bottom))
              .sum();

  Ok(carets + costs)
}

/// The weight of the forest diagram of the element with the given normal form: its carets plus the labeled gap
/// costs. This is the length reported for the element. It is not always the length of a shortest word in x₀, x₁ and
/// their inverses: `x₁⁵x₂` weighs 6 but needs 8 letters.
pub fn word_length(normal_form: &NormalForm) -> Result<usize> {
  if normal_form.is_identity() {
    return Ok(0);
  }

  let length = diagram_weight(&normal_form.forest_diagram())?;
  log(Channel::Info, 4, format!("Word length of {} is {}", normal_form, length).as_str());
  Ok(length)
}
