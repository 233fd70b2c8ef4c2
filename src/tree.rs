use std::fmt;

/// A parse tree produced by the grammar parser.
///
/// Internal nodes carry the label of the production they were built from and
/// their children in sentence order. Leaves are the words of the sentence.
/// A tree is never modified once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// An internal node.
    Node {
        /// The label of the production.
        label:    String,
        /// The children, left to right.
        children: Vec<Tree>,
    },
    /// A word of the sentence.
    Leaf(String),
}

impl Tree {
    /// Creates an internal node.
    #[must_use]
    pub fn node(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Node { label: label.into(),
                     children }
    }

    /// Creates a leaf.
    #[must_use]
    pub fn leaf(word: impl Into<String>) -> Self {
        Self::Leaf(word.into())
    }

    /// Returns the label of an internal node, or `None` for a leaf.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Node { label, .. } => Some(label),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the word of a leaf, or `None` for an internal node.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Leaf(word) => Some(word),
            Self::Node { .. } => None,
        }
    }

    /// Returns the children of an internal node; a leaf has none.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Node { children, .. } => children,
            Self::Leaf(_) => &[],
        }
    }

    /// Returns the words covered by the tree, left to right.
    ///
    /// # Example
    /// ```
    /// use sage::tree::Tree;
    ///
    /// let tree = Tree::node("Plius", vec![Tree::leaf("pridėti")]);
    /// assert_eq!(tree.words(), vec!["pridėti"]);
    /// ```
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            match tree {
                Self::Leaf(word) => words.push(word.as_str()),
                Self::Node { children, .. } => pending.extend(children.iter().rev()),
            }
        }
        words
    }
}

/// Renders the tree in bracketed notation: `(Plius plius)`.
///
/// Nodes are visited with an explicit stack, so deep trees print without
/// deep recursion.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `None` closes the innermost open node.
        let mut pending = vec![Some(self)];
        let mut first = true;

        while let Some(next) = pending.pop() {
            let Some(tree) = next else {
                write!(f, ")")?;
                continue;
            };
            if !first {
                write!(f, " ")?;
            }
            first = false;

            match tree {
                Self::Leaf(word) => write!(f, "{word}")?,
                Self::Node { label, .. } => {
                    write!(f, "({label}")?;
                    pending.push(None);
                    pending.extend(tree.children().iter().rev().map(Some));
                },
            }
        }
        Ok(())
    }
}
