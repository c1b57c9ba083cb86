//! Search tree nodes.
//!
//! Nodes only point back at their parent, so the path to any
//! node is recovered by walking parent links to the root.

use std::fmt::Debug;
use std::rc::Rc;

use crate::traits::Cost;

/// One step along a candidate path.
///
/// Nodes are never modified once built; extending a node
/// produces a new child which shares its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S, A> {
    state: S,
    cost: Cost,
    parent: Option<Rc<Node<S, A>>>,
    action: Option<A>,
}

impl<S, A> Node<S, A> {
    /// The node at the start of every path, with no cost.
    pub fn root(state: S) -> Self {
        Self {
            state,
            cost: 0,
            parent: None,
            action: None,
        }
    }

    /// Build the node reached by taking `action` from `parent`,
    /// which lands on `state` at an additional `step` cost.
    /// The search checks that the total fits in a [Cost] first.
    pub fn extend(parent: Rc<Self>, action: A, state: S, step: Cost) -> Self {
        Self {
            state,
            cost: parent.cost + step,
            parent: Some(parent),
            action: Some(action),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Accumulated cost from the root to this node.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn parent(&self) -> Option<&Node<S, A>> {
        self.parent.as_deref()
    }

    /// The action which produced this node, `None` for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Iterate from this node back to the root.
    pub fn ancestors(&self) -> Ancestors<'_, S, A> {
        Ancestors { next: Some(self) }
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

impl<S, A> Node<S, A>
where
    S: Clone,
    A: Clone,
{
    /// States visited from the root up to and including this node.
    pub fn states(&self) -> Vec<S> {
        let mut states: Vec<S> = self.ancestors().map(|n| n.state.clone()).collect();
        states.reverse();
        states
    }

    /// Actions taken from the root to reach this node.
    pub fn actions(&self) -> Vec<A> {
        let mut actions: Vec<A> = self.ancestors().filter_map(|n| n.action.clone()).collect();
        actions.reverse();
        actions
    }
}

/// Walks parent links towards the root.
#[derive(Debug)]
pub struct Ancestors<'n, S, A> {
    next: Option<&'n Node<S, A>>,
}

impl<'n, S, A> Iterator for Ancestors<'n, S, A> {
    type Item = &'n Node<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root() {
        let node: Node<u32, char> = Node::root(7);
        assert_eq!(node.state(), &7);
        assert_eq!(node.cost(), 0);
        assert_eq!(node.depth(), 0);
        assert!(node.parent().is_none());
        assert!(node.action().is_none());
        assert_eq!(node.states(), vec![7]);
        assert!(node.actions().is_empty());
    }

    #[test]
    fn extend() {
        let root = Rc::new(Node::root(0));
        let one = Rc::new(Node::extend(root.clone(), 'a', 1, 3));
        let two = Node::extend(one.clone(), 'b', 2, 4);

        assert_eq!(two.cost(), 7);
        assert_eq!(two.depth(), 2);
        assert_eq!(two.action(), Some(&'b'));
        assert_eq!(two.parent().map(|p| *p.state()), Some(1));
        assert_eq!(two.states(), vec![0, 1, 2]);
        assert_eq!(two.actions(), vec!['a', 'b']);
    }

    #[test]
    fn shared_parent() {
        let root = Rc::new(Node::root(0));
        let left = Node::extend(root.clone(), 'l', 1, 1);
        let right = Node::extend(root.clone(), 'r', 2, 5);

        assert_eq!(Rc::strong_count(&root), 3);
        assert_eq!(left.states(), vec![0, 1]);
        assert_eq!(right.states(), vec![0, 2]);
        assert_eq!(right.cost(), 5);
    }
}
