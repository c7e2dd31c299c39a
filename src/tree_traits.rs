use termtree::Tree;
use tracing::instrument;

use crate::domain::composite::Node;

/// Conversion into a box-drawing `termtree` for display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    #[instrument(level = "debug", skip(self), fields(node = %self.name()))]
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(self.label()).with_leaves(leaves)
    }
}
