/*!

Ordered binary forests.

A `Tree` is either a `Leaf` or a `Caret` with a left and a right subtree. A `Forest` is an ordered sequence of trees.
The leaves of a forest are ordered left to right across all of its trees, so "leaf 5" means the sixth leaf counting
from the left end of the forest, whatever tree it happens to sit in.

Forests render to a bracket notation: `.` is a leaf, `(left)(right)` is a caret, and trees are separated by a single
space. The forest with a caret over two leaves followed by a lone leaf is `(.)(.) .`.

*/

mod diagram;

use std::fmt::{Display, Formatter as FmtFormatter};

pub use diagram::{DiagramBuilder, ForestDiagram};


#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tree {
  Leaf,
  Caret(Box<Tree>, Box<Tree>),
}

impl Tree {
  pub fn caret(left: Tree, right: Tree) -> Tree {
    Tree::Caret(Box::new(left), Box::new(right))
  }

  pub fn is_caret(&self) -> bool {
    matches!(self, Tree::Caret(..))
  }

  pub fn leaf_count(&self) -> usize {
    match self {
      Tree::Leaf => 1,
      Tree::Caret(left, right) => left.leaf_count() + right.leaf_count(),
    }
  }

  /// Every caret joins two subtrees into one, so a tree with n leaves has n - 1 carets.
  pub fn caret_count(&self) -> usize {
    self.leaf_count() - 1
  }

  /// Replaces the leaf at `index` (counted from the left within this tree) with a caret over two leaves.
  fn graft_at_leaf(&mut self, index: usize) {
    match self {
      Tree::Leaf => {
        *self = Tree::caret(Tree::Leaf, Tree::Leaf);
      }

      Tree::Caret(left, right) => {
        let left_leaves = left.leaf_count();
        if index < left_leaves {
          left.graft_at_leaf(index);
        } else {
          right.graft_at_leaf(index - left_leaves);
        }
      }
    }
  }

  fn write_brackets(&self, out: &mut String) {
    match self {
      Tree::Leaf => out.push('.'),
      Tree::Caret(left, right) => {
        out.push('(');
        left.write_brackets(out);
        out.push_str(")(");
        right.write_brackets(out);
        out.push(')');
      }
    }
  }
}

impl Display for Tree {
  fn fmt(&self, f: &mut FmtFormatter<'_>) -> std::fmt::Result {
    let mut text = String::new();
    self.write_brackets(&mut text);
    write!(f, "{}", text)
  }
}


/// Where a leaf sits in its forest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LeafPosition {
  /// Index of the tree that owns the leaf.
  pub tree: usize,
  /// The number of opening brackets between the previous leaf and this one in the bracket notation, i.e. how many
  /// subtrees begin at this leaf. For the first leaf of a tree, this is its depth along the left spine.
  pub openings: usize,
}


#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Forest {
  trees: Vec<Tree>,
}

impl Forest {
  /// The forest with a single leaf.
  pub fn trivial() -> Forest {
    Forest::with_leaves(1)
  }

  /// A forest of `n` lone leaves.
  pub fn with_leaves(n: usize) -> Forest {
    Forest {
      trees: vec![Tree::Leaf; n]
    }
  }

  pub fn from_trees(trees: Vec<Tree>) -> Forest {
    Forest {
      trees
    }
  }

  pub fn trees(&self) -> &[Tree] {
    &self.trees
  }

  pub fn tree_count(&self) -> usize {
    self.trees.len()
  }

  pub fn leaf_count(&self) -> usize {
    self.trees.iter().map(Tree::leaf_count).sum()
  }

  pub fn caret_count(&self) -> usize {
    self.trees.iter().map(Tree::caret_count).sum()
  }

  /// The leaf-to-tree mapping of the forest, together with the bracket openings in front of each leaf. Entry `k`
  /// describes leaf `k`.
  pub fn leaf_positions(&self) -> Vec<LeafPosition> {
    let mut positions = Vec::with_capacity(self.trees.len());

    for (tree_index, tree) in self.trees.iter().enumerate() {
      let mut stack: Vec<(&Tree, usize)> = vec![(tree, 0)];

      while let Some((node, openings)) = stack.pop() {
        match node {
          Tree::Leaf => {
            positions.push(LeafPosition { tree: tree_index, openings });
          }

          Tree::Caret(left, right) => {
            // The right subtree opens after `)(`, the left one after every bracket still pending above it.
            stack.push((right.as_ref(), 1));
            stack.push((left.as_ref(), openings + 1));
          }
        }
      }
    }

    positions
  }

  // region Mutation used by `DiagramBuilder`

  pub(crate) fn prepend_leaf(&mut self) {
    self.trees.insert(0, Tree::Leaf);
  }

  pub(crate) fn push_leaves(&mut self, n: usize) {
    self.trees.extend(std::iter::repeat(Tree::Leaf).take(n));
  }

  /// Inserts a lone leaf as tree number `index`, or at the end if the forest has fewer trees.
  pub(crate) fn insert_leaf(&mut self, index: usize) {
    let index = index.min(self.trees.len());
    self.trees.insert(index, Tree::Leaf);
  }

  /// Joins trees `index` and `index + 1` under a new caret. Does nothing if there is no tree `index + 1`.
  pub(crate) fn join(&mut self, index: usize) {
    if index + 1 >= self.trees.len() {
      return;
    }
    let right = self.trees.remove(index + 1);
    let left  = std::mem::replace(&mut self.trees[index], Tree::Leaf);
    self.trees[index] = Tree::caret(left, right);
  }

  /// Replaces leaf number `leaf_index` of the forest with a caret over two leaves. Does nothing if the forest has
  /// fewer leaves.
  pub(crate) fn graft_at_leaf(&mut self, leaf_index: usize) {
    let mut remaining = leaf_index;
    for tree in self.trees.iter_mut() {
      let leaves = tree.leaf_count();
      if remaining < leaves {
        tree.graft_at_leaf(remaining);
        return;
      }
      remaining -= leaves;
    }
  }

  // endregion
}

impl Default for Forest {
  fn default() -> Self {
    Forest::trivial()
  }
}

impl Display for Forest {
  fn fmt(&self, f: &mut FmtFormatter<'_>) -> std::fmt::Result {
    let mut text = String::new();
    for (index, tree) in self.trees.iter().enumerate() {
      if index > 0 {
        text.push(' ');
      }
      tree.write_brackets(&mut text);
    }
    write!(f, "{}", text)
  }
}
