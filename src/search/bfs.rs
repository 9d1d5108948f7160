/*
 * Copyright (c) 2019, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Breadth-first search for a shortest augmenting path.
//!
//! The nodes are visited in order of their distance (number of arcs) from
//! the source, so the path found to the sink has as few arcs as possible.
//!
//! # Example
//!
//! ```
//! use rs_netflow::ResidualGraph;
//! use rs_netflow::search::bfs;
//!
//! let mut g = ResidualGraph::<i32>::new(4);
//! g.add_edge(0, 1, 1).unwrap();
//! g.add_edge(1, 2, 1).unwrap();
//! g.add_edge(2, 3, 1).unwrap();
//! let e = g.add_edge(0, 3, 1).unwrap();
//!
//! assert_eq!(bfs::find_path(&g, 0, 3), Some(vec![e]));
//! ```

use crate::num::traits::NumAssign;
use crate::residual::{EdgeId, ResidualGraph};

use std::collections::VecDeque;

/// Breadth-first search with reusable data structures.
pub struct Bfs {
    pred: Vec<Option<EdgeId>>,
    seen: Vec<bool>,
    queue: VecDeque<usize>,
}

impl Bfs {
    /// Create the data structures for a graph with `n` nodes.
    pub fn new(n: usize) -> Self {
        Bfs {
            pred: vec![None; n],
            seen: vec![false; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    /// Search a shortest augmenting path from `src` to `snk`.
    ///
    /// Returns `true` if the sink has been reached. The search stops as
    /// soon as the sink is reached, otherwise the seen nodes are exactly
    /// the nodes reachable from `src` in the residual graph.
    pub fn search<F, C>(&mut self, g: &ResidualGraph<F, C>, src: usize, snk: usize) -> bool
    where
        F: NumAssign + Ord + Copy,
        C: Copy,
    {
        let n = g.num_nodes();
        self.pred.clear();
        self.pred.resize(n, None);
        self.seen.clear();
        self.seen.resize(n, false);
        self.queue.clear();

        self.seen[src] = true;
        self.queue.push_back(src);
        while let Some(u) = self.queue.pop_front() {
            for &e in g.outarcs(u) {
                let v = g.snk(e);
                if !self.seen[v] && g.residual(e) > F::zero() {
                    self.seen[v] = true;
                    self.pred[v] = Some(e);
                    if v == snk {
                        return true;
                    }
                    self.queue.push_back(v);
                }
            }
        }

        false
    }

    /// Return the incoming arc of each node found by the last search.
    pub fn pred(&self) -> &[Option<EdgeId>] {
        &self.pred
    }

    /// Return the incoming arc of a node.
    pub fn incoming_edge(&self, u: usize) -> Option<EdgeId> {
        self.pred[u]
    }

    /// Return whether `u` has been reached by the last search.
    pub fn is_seen(&self, u: usize) -> bool {
        self.seen.get(u).cloned().unwrap_or(false)
    }
}

/// Return a shortest augmenting path from `src` to `snk`.
pub fn find_path<F, C>(g: &ResidualGraph<F, C>, src: usize, snk: usize) -> Option<Vec<EdgeId>>
where
    F: NumAssign + Ord + Copy,
    C: Copy,
{
    let mut bfs = Bfs::new(g.num_nodes());
    if bfs.search(g, src, snk) {
        g.path(bfs.pred(), src, snk)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{find_path, Bfs};
    use crate::ResidualGraph;

    #[test]
    fn test_fewest_arcs() {
        let mut g = ResidualGraph::<i32>::new(6);
        g.add_edge(0, 1, 9).unwrap();
        g.add_edge(1, 2, 9).unwrap();
        g.add_edge(2, 5, 9).unwrap();
        let a = g.add_edge(0, 3, 1).unwrap();
        let b = g.add_edge(3, 4, 1).unwrap();
        let c = g.add_edge(4, 5, 1).unwrap();
        g.add_edge(3, 5, 0).unwrap();

        // both paths have three arcs, the first one found wins
        let path = find_path(&g, 0, 5).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(g.src(path[0]), 0);
        assert_eq!(g.snk(path[0]), 1);

        let d = g.add_edge(1, 5, 1).unwrap();
        assert_eq!(find_path(&g, 0, 5), Some(vec![0, d]));

        g.augment(&[0, d], 1);
        g.augment(&[0, 2, 4], 8);
        assert_eq!(find_path(&g, 0, 5), Some(vec![a, b, c]));
    }

    #[test]
    fn test_unreachable() {
        let mut g = ResidualGraph::<i32>::new(4);
        let a = g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 3).unwrap();
        g.add_edge(3, 2, 3).unwrap();

        let mut bfs = Bfs::new(g.num_nodes());
        assert!(!bfs.search(&g, 0, 3));
        assert_eq!((0..4).filter(|&u| bfs.is_seen(u)).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(bfs.incoming_edge(1), Some(a));
        assert_eq!(bfs.incoming_edge(0), None);
    }
}
