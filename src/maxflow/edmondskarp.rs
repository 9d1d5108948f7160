/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! # Example
//!
//! ```
//! use rs_netflow::ResidualGraph;
//! use rs_netflow::maxflow::EdmondsKarp;
//!
//! let (s, a, b, c, d, t) = (0, 1, 2, 3, 4, 5);
//! let mut g = ResidualGraph::<i32>::new(6);
//! for &(u, v, cap) in &[(s, a, 5), (s, c, 5), (a, b, 2), (a, c, 1), (a, d, 1),
//!                       (c, d, 2), (d, b, 2), (b, t, 4), (d, t, 5)] {
//!     g.add_edge(u, v, cap).unwrap();
//! }
//!
//! let mut maxflow = EdmondsKarp::new(&mut g);
//! maxflow.solve(s, t).unwrap();
//! assert_eq!(maxflow.value(), 5);
//!
//! let mut mincut = maxflow.mincut();
//! mincut.sort();
//! assert_eq!(mincut, vec![s, a, c]);
//!
//! assert!(g.is_feasible(s, t));
//! assert_eq!(g.value(s), 5);
//! ```

use crate::error::{check_terminals, Result};
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::residual::ResidualGraph;
use crate::search::Bfs;

use log::{debug, trace};

/// Max-flow algorithm of Edmonds and Karp.
pub struct EdmondsKarp<'a, F, C = F> {
    g: &'a mut ResidualGraph<F, C>,
    bfs: Bfs,
    value: F,
    niter: usize,
}

impl<'a, F, C> EdmondsKarp<'a, F, C>
where
    F: NumAssign + Ord + Copy + CheckedAdd,
    C: Copy,
{
    /// Create a new Edmonds-Karp algorithm instance for a graph.
    pub fn new(g: &'a mut ResidualGraph<F, C>) -> Self {
        let n = g.num_nodes();
        EdmondsKarp {
            g,
            bfs: Bfs::new(n),
            value: F::zero(),
            niter: 0,
        }
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &ResidualGraph<F, C> {
        self.g
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the number of augmentations of the latest computation.
    pub fn num_augmentations(&self) -> usize {
        self.niter
    }

    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// The flow on all arcs is reset to zero first.
    pub fn solve(&mut self, src: usize, snk: usize) -> Result<()> {
        check_terminals(src, snk, self.g.num_nodes())?;

        // initialize network flow
        self.g.reset();
        self.value = F::zero();
        self.niter = 0;

        // augment along shortest paths until the sink cannot be reached
        while self.bfs.search(self.g, src, snk) {
            let (_, len) = super::augment(self.g, self.bfs.pred(), src, snk, &mut self.value)?;
            self.niter += 1;
            trace!("augmentation {} along {} arcs", self.niter, len);
        }

        debug!("edmonds-karp finished after {} augmentations", self.niter);
        Ok(())
    }

    /// Return the minimal cut associated with the last maximum flow.
    ///
    /// These are the nodes reachable from the source in the final residual
    /// graph.
    pub fn mincut(&self) -> Vec<usize> {
        (0..self.g.num_nodes()).filter(|&u| self.bfs.is_seen(u)).collect()
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source node `src`
/// to the sink node `snk` on `g`. The flow is stored in `g`, the function
/// returns the flow value.
pub fn edmondskarp<F, C>(g: &mut ResidualGraph<F, C>, src: usize, snk: usize) -> Result<F>
where
    F: NumAssign + Ord + Copy + CheckedAdd,
    C: Copy,
{
    let mut maxflow = EdmondsKarp::new(g);
    maxflow.solve(src, snk)?;
    Ok(maxflow.value())
}
