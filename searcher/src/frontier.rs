//! Frontiers hold the nodes which have been discovered
//! but not yet expanded.
//!
//! The three disciplines share one interface, so the search
//! driver does not care which order nodes come back in.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::default::Default;
use std::hash::Hash;

use crate::node::Node;
use crate::traits::Cost;

/// Trait used to implement the open set of a search.
pub trait Frontier<S, A>: Default {
    /// Add a node. Disciplines which are not ordered by
    /// priority ignore it.
    fn add(&mut self, node: Node<S, A>, priority: Cost);

    /// Take the next node to expand.
    fn remove(&mut self) -> Option<Node<S, A>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is there an entry for this state waiting in the frontier?
    fn contains(&self, state: &S) -> bool;
}

/// Counts how many frontier entries exist for each state.
#[derive(Debug)]
struct Membership<S>
where
    S: Eq + Hash,
{
    counts: HashMap<S, usize>,
}

impl<S> Default for Membership<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        Membership {
            counts: HashMap::new(),
        }
    }
}

impl<S> Membership<S>
where
    S: Clone + Eq + Hash,
{
    fn insert(&mut self, state: &S) {
        *self.counts.entry(state.clone()).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &S) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &S) -> bool {
        self.counts.contains_key(state)
    }
}

/// Last in, first out. Used for depth-first search.
#[derive(Debug)]
pub struct StackFrontier<S, A>
where
    S: Eq + Hash,
{
    stack: Vec<Node<S, A>>,
    members: Membership<S>,
}

impl<S, A> Default for StackFrontier<S, A>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        StackFrontier {
            stack: Vec::new(),
            members: Membership::default(),
        }
    }
}

impl<S, A> Frontier<S, A> for StackFrontier<S, A>
where
    S: Clone + Eq + Hash,
{
    fn add(&mut self, node: Node<S, A>, _priority: Cost) {
        self.members.insert(node.state());
        self.stack.push(node);
    }

    fn remove(&mut self) -> Option<Node<S, A>> {
        let node = self.stack.pop()?;
        self.members.remove(node.state());
        Some(node)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }
}

/// First in, first out. Used for breadth-first search.
#[derive(Debug)]
pub struct QueueFrontier<S, A>
where
    S: Eq + Hash,
{
    queue: VecDeque<Node<S, A>>,
    members: Membership<S>,
}

impl<S, A> Default for QueueFrontier<S, A>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        QueueFrontier {
            queue: VecDeque::new(),
            members: Membership::default(),
        }
    }
}

impl<S, A> Frontier<S, A> for QueueFrontier<S, A>
where
    S: Clone + Eq + Hash,
{
    fn add(&mut self, node: Node<S, A>, _priority: Cost) {
        self.members.insert(node.state());
        self.queue.push_back(node);
    }

    fn remove(&mut self) -> Option<Node<S, A>> {
        let node = self.queue.pop_front()?;
        self.members.remove(node.state());
        Some(node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }
}

/// Wrapper for frontier entries which sorts so that the
/// max-heap pops the lowest priority, and among equal
/// priorities, the entry which was added first.
#[derive(Debug)]
struct Prioritized<S, A> {
    priority: Cost,
    sequence: usize,
    node: Node<S, A>,
}

impl<S, A> PartialEq for Prioritized<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<S, A> Eq for Prioritized<S, A> {}

impl<S, A> Ord for Prioritized<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<S, A> PartialOrd for Prioritized<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always hands back the node with
/// the smallest priority. Used for uniform-cost and A* search.
///
/// A state may be present more than once with different
/// priorities; the search's reached map decides which copy counts.
#[derive(Debug)]
pub struct PriorityFrontier<S, A>
where
    S: Eq + Hash,
{
    heap: BinaryHeap<Prioritized<S, A>>,
    members: Membership<S>,
    sequence: usize,
}

impl<S, A> Default for PriorityFrontier<S, A>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            members: Membership::default(),
            sequence: 0,
        }
    }
}

impl<S, A> Frontier<S, A> for PriorityFrontier<S, A>
where
    S: Clone + Eq + Hash,
{
    fn add(&mut self, node: Node<S, A>, priority: Cost) {
        self.members.insert(node.state());
        self.heap.push(Prioritized {
            priority,
            sequence: self.sequence,
            node,
        });
        self.sequence += 1;
    }

    fn remove(&mut self) -> Option<Node<S, A>> {
        let Prioritized { node, .. } = self.heap.pop()?;
        self.members.remove(node.state());
        Some(node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    type TestNode = Node<u32, char>;

    fn node(state: u32) -> TestNode {
        let root = Rc::new(Node::root(0));
        Node::extend(root, 'x', state, 1)
    }

    fn drain<F: Frontier<u32, char>>(frontier: &mut F) -> Vec<u32> {
        let mut order = Vec::new();
        while let Some(n) = frontier.remove() {
            order.push(*n.state());
        }
        order
    }

    #[test]
    fn stack() {
        let mut frontier: StackFrontier<u32, char> = StackFrontier::default();
        assert!(frontier.is_empty());

        frontier.add(node(1), 0);
        frontier.add(node(2), 0);
        frontier.add(node(3), 0);
        assert_eq!(frontier.len(), 3);
        assert!(frontier.contains(&2));
        assert!(!frontier.contains(&4));

        assert_eq!(drain(&mut frontier), vec![3, 2, 1]);
        assert!(frontier.is_empty());
        assert!(!frontier.contains(&2));
    }

    #[test]
    fn queue() {
        let mut frontier: QueueFrontier<u32, char> = QueueFrontier::default();
        frontier.add(node(1), 9);
        frontier.add(node(2), 0);
        frontier.add(node(3), 5);

        assert_eq!(frontier.remove().map(|n| *n.state()), Some(1));
        assert!(!frontier.contains(&1));
        assert!(frontier.contains(&3));
        assert_eq!(drain(&mut frontier), vec![2, 3]);
    }

    #[test]
    fn priority() {
        let mut frontier: PriorityFrontier<u32, char> = PriorityFrontier::default();
        frontier.add(node(1), 5);
        frontier.add(node(2), 1);
        frontier.add(node(3), 3);

        assert_eq!(drain(&mut frontier), vec![2, 3, 1]);
    }

    #[test]
    fn priority_ties_are_stable() {
        let mut frontier: PriorityFrontier<u32, char> = PriorityFrontier::default();
        frontier.add(node(4), 2);
        frontier.add(node(1), 2);
        frontier.add(node(3), 1);
        frontier.add(node(2), 2);

        assert_eq!(drain(&mut frontier), vec![3, 4, 1, 2]);
    }

    #[test]
    fn priority_duplicates() {
        let mut frontier: PriorityFrontier<u32, char> = PriorityFrontier::default();
        frontier.add(node(1), 8);
        frontier.add(node(1), 2);
        assert_eq!(frontier.len(), 2);

        let first = frontier.remove().unwrap();
        assert_eq!(first.state(), &1);
        assert!(frontier.contains(&1));

        frontier.remove().unwrap();
        assert!(!frontier.contains(&1));
        assert!(frontier.is_empty());
    }
}
