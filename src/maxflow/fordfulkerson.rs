/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements the max flow algorithm of Ford-Fulkerson.
//!
//! Augmenting paths are found by depth-first search. No bound on the
//! number of augmentations better than the flow value itself holds, see
//! [`EdmondsKarp`](super::EdmondsKarp) for a polynomial variant.
//!
//! # Example
//!
//! ```
//! use rs_netflow::ResidualGraph;
//! use rs_netflow::maxflow::{edmondskarp, fordfulkerson};
//!
//! let mut g = ResidualGraph::<i32>::new(4);
//! g.add_edge(0, 1, 100).unwrap();
//! g.add_edge(1, 2, 50).unwrap();
//! g.add_edge(2, 3, 100).unwrap();
//!
//! let mut h = g.clone();
//! assert_eq!(fordfulkerson(&mut g, 0, 3), Ok(50));
//! assert_eq!(edmondskarp(&mut h, 0, 3), Ok(50));
//! assert_eq!(g, h);
//! ```

use crate::error::{check_terminals, Result};
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::residual::ResidualGraph;
use crate::search::Dfs;

use log::{debug, trace};

/// Max-flow algorithm of Ford and Fulkerson.
pub struct FordFulkerson<'a, F, C = F> {
    g: &'a mut ResidualGraph<F, C>,
    dfs: Dfs,
    value: F,
    niter: usize,
}

impl<'a, F, C> FordFulkerson<'a, F, C>
where
    F: NumAssign + Ord + Copy + CheckedAdd,
    C: Copy,
{
    /// Create a new Ford-Fulkerson algorithm instance for a graph.
    pub fn new(g: &'a mut ResidualGraph<F, C>) -> Self {
        let n = g.num_nodes();
        FordFulkerson {
            g,
            dfs: Dfs::new(n),
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

        self.g.reset();
        self.value = F::zero();
        self.niter = 0;

        while self.dfs.search(self.g, src, snk) {
            let (_, len) = super::augment(self.g, self.dfs.pred(), src, snk, &mut self.value)?;
            self.niter += 1;
            trace!("augmentation {} along {} arcs", self.niter, len);
        }

        debug!("ford-fulkerson finished after {} augmentations", self.niter);
        Ok(())
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<usize> {
        (0..self.g.num_nodes()).filter(|&u| self.dfs.is_visited(u)).collect()
    }
}

/// Solve the maxflow problem using the algorithm of Ford-Fulkerson.
///
/// The flow is stored in `g`, the function returns the flow value.
pub fn fordfulkerson<F, C>(g: &mut ResidualGraph<F, C>, src: usize, snk: usize) -> Result<F>
where
    F: NumAssign + Ord + Copy + CheckedAdd,
    C: Copy,
{
    let mut maxflow = FordFulkerson::new(g);
    maxflow.solve(src, snk)?;
    Ok(maxflow.value())
}
