/// This module implements a breadth-first search in the spirit of
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
/// Nodes are recorded in an insertion-ordered map together with the index of the node that
/// discovered them, so the map doubles as visited set and predecessor table.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Walks the parent links back from `end` and returns the nodes in start-to-end order.
fn reverse_path<N>(parents: &FxIndexMap<N, usize>, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(end), |&i| {
        parents.get_index(i).map(|(_, &p)| p)
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Finds a shortest (in number of edges) sequence of nodes from `start` to the first node for
/// which `success` holds. Successors are enqueued in the order `successors` yields them and are
/// marked visited on enqueue, so every node is expanded at most once and ties between equally
/// short paths are broken by that order. The goal test is applied when a node is dequeued.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    let mut to_see = VecDeque::from([0]);
    while let Some(index) = to_see.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                e.insert(index);
                to_see.push_back(n);
            }
        }
    }
    None
}
