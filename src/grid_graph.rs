use crate::bfs::bfs;
use crate::{Cell, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the orthogonal neighbours in expansion order: left, right, up, down.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A vertex of the [GridGraph], one per passable cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub point: Point,
    /// Arena indices of the passable orthogonal neighbours, in [NEIGHBOUR_OFFSETS] order.
    pub neighbours: SmallVec<[usize; N_SMALLVEC_SIZE]>,
}

/// [GridGraph] is the adjacency structure over the passable cells of a fixed grid snapshot.
/// Nodes live in an arena indexed by `y * width + x`, with `None` in the slots of blocked
/// cells, and refer to their neighbours by arena index. Connected components are kept in a
/// [UnionFind] structure so unreachable goals are rejected without searching.
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: usize,
    height: usize,
    nodes: Vec<Option<Node>>,
    components: UnionFind<usize>,
}

impl Default for GridGraph {
    fn default() -> GridGraph {
        GridGraph {
            width: 0,
            height: 0,
            nodes: Vec::new(),
            components: UnionFind::new(0),
        }
    }
}

impl GridGraph {
    /// Builds the graph of the given grid, in which `true` marks a blocked cell.
    pub fn new(grid: &BoolGrid) -> GridGraph {
        let mut graph = GridGraph::default();
        graph.build(grid);
        graph
    }

    /// Replaces the whole structure by the graph of `grid`. Panics if the grid has no cells.
    pub fn build(&mut self, grid: &BoolGrid) {
        let w = grid.width();
        let h = grid.height();
        assert!(
            w > 0 && h > 0,
            "cannot build a graph of a {}x{} grid",
            w,
            h
        );
        self.width = w;
        self.height = h;
        self.nodes = vec![None; w * h];
        self.components = UnionFind::new(w * h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                if grid.get(x, y) {
                    continue;
                }
                let point = Point::new(x, y);
                let neighbours = NEIGHBOUR_OFFSETS
                    .iter()
                    .map(|&(dx, dy)| Point::new(x + dx, y + dy))
                    .filter(|&p| grid.point_in_bounds(p) && !grid.get_point(p))
                    .map(|p| self.ix(&p))
                    .collect::<SmallVec<[usize; N_SMALLVEC_SIZE]>>();
                let ix = self.ix(&point);
                for &n in &neighbours {
                    self.components.union(ix, n);
                }
                self.nodes[ix] = Some(Node { point, neighbours });
            }
        }
        info!(
            "Built graph of {}x{} grid with {} nodes",
            w,
            h,
            self.node_count()
        );
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes, which equals the number of passable cells.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Whether the point is a passable cell of the grid the graph was built from.
    pub fn contains(&self, point: &Point) -> bool {
        self.node(point).is_some()
    }

    pub fn cell_type(&self, point: &Point) -> Option<Cell> {
        self.in_bounds(point)
            .then(|| Cell::from_blocked(!self.contains(point)))
    }

    pub fn node(&self, point: &Point) -> Option<&Node> {
        if self.in_bounds(point) {
            self.nodes[self.ix(point)].as_ref()
        } else {
            None
        }
    }

    /// The linked neighbours of a node in expansion order, or [None] if there is no node at
    /// `point`.
    pub fn neighbours(&self, point: &Point) -> Option<Vec<Point>> {
        self.node(point)
            .map(|node| node.neighbours.iter().map(|&n| self.point(n)).collect())
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.contains(point)
            .then(|| self.components.find(self.ix(point)))
    }

    /// Checks if start and goal are nodes on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.contains(start)
            && self.contains(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    /// Checks if start and goal are not nodes on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Computes a path with the least number of steps from start to goal, both included.
    /// Among equally short paths the one preferred by the left, right, up, down expansion
    /// order is returned. If start and goal are equal the path consists of that single point.
    /// Returns [None] if the goal cannot be reached.
    ///
    /// Panics if start or goal is not a node of the graph.
    pub fn find_path(&self, start: Point, goal: Point) -> Option<Vec<Point>> {
        self.assert_node(&start);
        self.assert_node(&goal);
        if start == goal {
            return Some(vec![start]);
        }
        if self.unreachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return None;
        }
        let goal_ix = self.ix(&goal);
        let path = bfs(
            &self.ix(&start),
            |&ix| self.successors(ix),
            |&ix| ix == goal_ix,
        );
        if path.is_none() {
            warn!("Reachable goal could not be pathed to, is the component structure correct?");
        }
        path.map(|ixs| ixs.into_iter().map(|ix| self.point(ix)).collect())
    }

    fn successors(&self, ix: usize) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        self.nodes[ix]
            .as_ref()
            .map(|node| node.neighbours.clone())
            .unwrap_or_default()
    }

    fn assert_node(&self, point: &Point) {
        assert!(
            self.in_bounds(point),
            "{} is outside of the {}x{} grid",
            point,
            self.width,
            self.height
        );
        assert!(self.contains(point), "{} is not a passable cell", point);
    }

    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    fn point(&self, ix: usize) -> Point {
        Point::new((ix % self.width) as i32, (ix / self.width) as i32)
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.width.max(1)) {
            let line = row
                .iter()
                .map(|node| Cell::from_blocked(node.is_none()).symbol())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
