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

//! Depth-first search for an augmenting path.
//!
//! The search is iterative. It keeps an explicit stack of nodes together
//! with the position of the next outgoing arc to be scanned, so the nodes
//! on the stack always form the current path from the source. The order in
//! which arcs are scanned is the same as in the recursive formulation: the
//! arcs of the top node are scanned in insertion order and the search
//! descends into the first unvisited node reachable over an arc with
//! positive residual capacity. The first path to the sink wins.
//!
//! # Example
//!
//! ```
//! use rs_netflow::ResidualGraph;
//! use rs_netflow::search::dfs;
//!
//! let mut g = ResidualGraph::<i32>::new(4);
//! let a = g.add_edge(0, 1, 1).unwrap();
//! let b = g.add_edge(0, 2, 1).unwrap();
//! let c = g.add_edge(1, 3, 1).unwrap();
//! g.add_edge(2, 3, 1).unwrap();
//!
//! assert_eq!(dfs::find_path(&g, 0, 3), Some(vec![a, c]));
//!
//! g.push(a, 1);
//! assert_eq!(dfs::find_path(&g, 0, 3).map(|p| p[0]), Some(b));
//! ```

use crate::num::traits::NumAssign;
use crate::residual::{EdgeId, ResidualGraph};

/// Depth-first search with reusable data structures.
pub struct Dfs {
    pred: Vec<Option<EdgeId>>,
    visited: Vec<bool>,
    stack: Vec<(usize, usize)>,
}

impl Dfs {
    /// Create the data structures for a graph with `n` nodes.
    pub fn new(n: usize) -> Self {
        Dfs {
            pred: vec![None; n],
            visited: vec![false; n],
            stack: Vec::with_capacity(n),
        }
    }

    /// Search an augmenting path from `src` to `snk`.
    ///
    /// Returns `true` if the sink has been reached. The path can then be
    /// extracted from [`Dfs::pred`]. If the sink cannot be reached, the
    /// visited nodes are exactly the nodes reachable from `src` in the
    /// residual graph.
    pub fn search<F, C>(&mut self, g: &ResidualGraph<F, C>, src: usize, snk: usize) -> bool
    where
        F: NumAssign + Ord + Copy,
        C: Copy,
    {
        let n = g.num_nodes();
        self.pred.clear();
        self.pred.resize(n, None);
        self.visited.clear();
        self.visited.resize(n, false);
        self.stack.clear();

        self.visited[src] = true;
        self.stack.push((src, 0));
        while let Some(top) = self.stack.last_mut() {
            let (u, pos) = *top;
            let arcs = g.outarcs(u);
            if pos == arcs.len() {
                // all arcs scanned, backtrack
                self.stack.pop();
                continue;
            }
            top.1 += 1;

            let e = arcs[pos];
            let v = g.snk(e);
            if !self.visited[v] && g.residual(e) > F::zero() {
                self.visited[v] = true;
                self.pred[v] = Some(e);
                if v == snk {
                    return true;
                }
                self.stack.push((v, 0));
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

    /// Return whether `u` has been visited by the last search.
    pub fn is_visited(&self, u: usize) -> bool {
        self.visited.get(u).cloned().unwrap_or(false)
    }
}

/// Return an augmenting path from `src` to `snk` found by depth-first search.
///
/// The path is returned as sequence of arcs starting at `src`.
pub fn find_path<F, C>(g: &ResidualGraph<F, C>, src: usize, snk: usize) -> Option<Vec<EdgeId>>
where
    F: NumAssign + Ord + Copy,
    C: Copy,
{
    let mut dfs = Dfs::new(g.num_nodes());
    if dfs.search(g, src, snk) {
        g.path(dfs.pred(), src, snk)
    } else {
        None
    }
}
