/*!

Elements of Thompson's group F,

```text
F = ⟨ x₀, x₁, x₂, … | xᵢ⁻¹ xⱼ xᵢ = xⱼ₊₁ for i < j ⟩,
```

with their unique normal forms, their forest diagrams, and their word length with respect to {x₀, x₁}.

```
use thompson::GroupElement;

// x₀⁻¹ x₁ x₀ = x₂
let conjugate = GroupElement::new(&[0, 1, 0], &[-1, 1, 1]).unwrap();
assert_eq!(GroupElement::generator(2), conjugate);
assert_eq!("x₂", conjugate.normal_form().to_string());
assert_eq!(3, conjugate.word_length().unwrap());
```

*/

mod abstractions;
mod element;
mod error;
mod forest;
mod format;
mod normal_form;
mod parser;
mod word_metric;
pub mod logging;

pub use abstractions::{Exponent, Subscript};
pub use element::{GroupElement, Syllable};
pub use error::{Error, Result};
pub use forest::{DiagramBuilder, Forest, ForestDiagram, LeafPosition, Tree};
pub use format::{DisplayForm, Formattable, Formatter};
pub use logging::{set_verbosity, Channel};
pub use normal_form::{normalize, NormalForm};
pub use parser::parse_syllables;
pub use word_metric::{diagram_weight, label_gaps, label_pair_cost, word_length, Label};
