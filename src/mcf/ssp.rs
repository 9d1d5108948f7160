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

//! Successive shortest path algorithm.
//!
//! In each iteration a cheapest augmenting path is computed by the
//! algorithm of Moore-Bellman-Ford and the flow is augmented along this
//! path by its bottleneck capacity. The algorithm stops when the sink
//! cannot be reached anymore, so the resulting flow is a maximum flow.
//!
//! If the network does not contain a cycle of negative cost, the
//! residual graph never contains one either and each intermediate flow is
//! a cheapest flow of its value.
//!
//! # Example
//!
//! ```
//! use rs_netflow::ResidualGraph;
//! use rs_netflow::mcf::MinCostFlow;
//!
//! let mut g = ResidualGraph::<i32>::new(4);
//! g.add_edge_with_cost(0, 1, 2, 1).unwrap();
//! g.add_edge_with_cost(1, 3, 2, 1).unwrap();
//! g.add_edge_with_cost(0, 2, 2, 5).unwrap();
//! g.add_edge_with_cost(2, 3, 2, 5).unwrap();
//! g.add_edge_with_cost(1, 2, 1, 1).unwrap();
//!
//! let mut mcf = MinCostFlow::new(&mut g);
//! mcf.solve(0, 3).unwrap();
//! assert_eq!(mcf.value(), 4);
//! assert_eq!(mcf.cost(), 24);
//! ```

use crate::error::{check_terminals, Error, Result};
use crate::num::traits::{CheckedAdd, CheckedMul, NumAssign, NumCast, ToPrimitive};
use crate::residual::{EdgeId, ResidualGraph};
use crate::shortestpath::moorebellmanford;

use log::{debug, trace};

/// Successive shortest path algorithm.
pub struct MinCostFlow<'a, F, C = F> {
    g: &'a mut ResidualGraph<F, C>,
    dist: Vec<Option<C>>,
    pred: Vec<Option<EdgeId>>,
    value: F,
    cost: C,
    niter: usize,

    /// Whether the shortest path computation checks for negative cycles.
    ///
    /// If this is `false`, a negative cycle in the residual graph is not
    /// necessarily detected and the computed flow is arbitrary. This
    /// saves one pass over all arcs in each iteration. The default is
    /// `true`.
    pub check_negative_cycles: bool,
}

impl<'a, F, C> MinCostFlow<'a, F, C>
where
    F: NumAssign + Ord + Copy + CheckedAdd + ToPrimitive,
    C: NumAssign + Ord + Copy + CheckedAdd + CheckedMul + NumCast,
{
    /// Create a new successive shortest path instance for a graph.
    pub fn new(g: &'a mut ResidualGraph<F, C>) -> Self {
        let n = g.num_nodes();
        MinCostFlow {
            g,
            dist: vec![None; n],
            pred: vec![None; n],
            value: F::zero(),
            cost: C::zero(),
            niter: 0,
            check_negative_cycles: true,
        }
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &ResidualGraph<F, C> {
        self.g
    }

    /// Return the value of the latest computed flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the cost of the latest computed flow.
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Return the number of augmentations of the latest computation.
    pub fn num_augmentations(&self) -> usize {
        self.niter
    }

    /// Compute a maximum flow of minimal cost from `src` to `snk`.
    ///
    /// The flow on all arcs is reset to zero first.
    pub fn solve(&mut self, src: usize, snk: usize) -> Result<()> {
        check_terminals(src, snk, self.g.num_nodes())?;

        self.g.reset();
        self.value = F::zero();
        self.cost = C::zero();
        self.niter = 0;

        while moorebellmanford::residual(
            self.g,
            src,
            snk,
            &mut self.dist,
            &mut self.pred,
            self.check_negative_cycles,
        )? {
            // without cycle detection the predecessors may form a cycle
            let path = self.g.path(&self.pred, src, snk).ok_or(Error::NegativeCycle(snk))?;
            let df = self.g.bottleneck(&path).unwrap_or_else(F::zero);
            let pathcost = self.dist[snk].unwrap_or_else(C::zero);
            debug_assert!(df > F::zero());

            self.cost = <C as NumCast>::from(df)
                .and_then(|df| df.checked_mul(&pathcost))
                .and_then(|dc| self.cost.checked_add(&dc))
                .ok_or(Error::Overflow("flow cost"))?;
            self.value = self.value.checked_add(&df).ok_or(Error::Overflow("flow value"))?;
            self.g.augment(&path, df);

            self.niter += 1;
            trace!("augmentation {} along {} arcs", self.niter, path.len());
        }

        debug!("successive shortest paths finished after {} augmentations", self.niter);
        Ok(())
    }

    /// Return the minimal cut associated with the last flow.
    pub fn mincut(&self) -> Vec<usize> {
        (0..self.g.num_nodes()).filter(|&u| self.dist[u].is_some()).collect()
    }
}

/// Compute a maximum flow of minimal cost with respect to the arc costs of
/// `g`.
///
/// The flow is stored in `g`, the function returns the flow value.
pub fn min_cost_flow<F, C>(g: &mut ResidualGraph<F, C>, src: usize, snk: usize) -> Result<F>
where
    F: NumAssign + Ord + Copy + CheckedAdd + ToPrimitive,
    C: NumAssign + Ord + Copy + CheckedAdd + CheckedMul + NumCast,
{
    let mut mcf = MinCostFlow::new(g);
    mcf.solve(src, snk)?;
    Ok(mcf.value())
}

/// Compute a maximum flow using augmenting paths with as few arcs as
/// possible.
///
/// The arc costs of `g` are ignored: the flow is computed on a copy of `g`
/// where each edge has cost one (see
/// [`ResidualGraph::with_unit_costs`]). The value of the flow equals the
/// maximum flow value, `g` itself is not modified.
///
/// # Example
///
/// ```
/// use rs_netflow::ResidualGraph;
/// use rs_netflow::mcf::unit_cost_flow;
///
/// let mut g = ResidualGraph::<i32>::new(4);
/// g.add_edge(0, 1, 100).unwrap();
/// g.add_edge(1, 2, 50).unwrap();
/// g.add_edge(2, 3, 100).unwrap();
///
/// assert_eq!(unit_cost_flow(&g, 0, 3), Ok(50));
/// ```
pub fn unit_cost_flow<F, C>(g: &ResidualGraph<F, C>, src: usize, snk: usize) -> Result<F>
where
    F: NumAssign + Ord + Copy + CheckedAdd + ToPrimitive,
    C: Copy,
{
    let mut unit = g.with_unit_costs::<i64>();
    min_cost_flow(&mut unit, src, snk)
}

#[cfg(test)]
mod tests {
    use super::{min_cost_flow, unit_cost_flow, MinCostFlow};
    use crate::error::Error;
    use crate::ResidualGraph;

    #[test]
    fn test_cancel_expensive_arc() {
        let mut g = ResidualGraph::<i32>::new(4);
        g.add_edge_with_cost(0, 1, 1, 1).unwrap();
        let a = g.add_edge_with_cost(1, 2, 1, 1).unwrap();
        g.add_edge_with_cost(2, 3, 1, 1).unwrap();
        g.add_edge_with_cost(0, 2, 1, 3).unwrap();
        g.add_edge_with_cost(1, 3, 1, 3).unwrap();

        let mut mcf = MinCostFlow::new(&mut g);
        mcf.solve(0, 3).unwrap();
        assert_eq!(mcf.value(), 2);
        assert_eq!(mcf.cost(), 8);
        assert_eq!(mcf.num_augmentations(), 2);
        assert_eq!(mcf.mincut(), vec![0]);
        assert_eq!(mcf.as_graph().flow(a), 0);
        assert!(mcf.as_graph().is_feasible(0, 3));
    }

    #[test]
    fn test_unit_costs() {
        let mut g = ResidualGraph::<i32>::new(6);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 3).unwrap();
        g.add_edge(2, 5, 3).unwrap();
        g.add_edge(0, 3, 2).unwrap();
        g.add_edge(3, 5, 2).unwrap();
        g.add_edge(0, 4, 0).unwrap();
        g.add_edge(4, 5, 7).unwrap();

        let orig = g.clone();
        assert_eq!(unit_cost_flow(&g, 0, 5), Ok(5));
        assert_eq!(g, orig);

        let mut unit = g.with_unit_costs::<i64>();
        assert_eq!(unit.num_edges(), 6);
        let mut mcf = MinCostFlow::new(&mut unit);
        mcf.solve(0, 5).unwrap();
        assert_eq!(mcf.value(), 5);
        // the short path is used first
        assert_eq!(mcf.cost(), 2 * 2 + 3 * 3);
    }

    #[test]
    fn test_negative_cycle() {
        let mut g = ResidualGraph::<i32>::new(4);
        g.add_edge_with_cost(0, 1, 1, 1).unwrap();
        g.add_edge_with_cost(1, 2, 1, -5).unwrap();
        g.add_edge_with_cost(2, 1, 1, 1).unwrap();
        g.add_edge_with_cost(2, 3, 1, 1).unwrap();
        assert!(matches!(min_cost_flow(&mut g, 0, 3), Err(Error::NegativeCycle(_))));

        // the unit cost variant ignores the costs
        assert_eq!(unit_cost_flow(&g, 0, 3), Ok(1));
    }

    #[test]
    fn test_without_cycle_check() {
        let mut g = ResidualGraph::<i32>::new(3);
        g.add_edge_with_cost(0, 1, 4, 2).unwrap();
        g.add_edge_with_cost(1, 2, 3, -1).unwrap();

        let mut mcf = MinCostFlow::new(&mut g);
        mcf.check_negative_cycles = false;
        mcf.solve(0, 2).unwrap();
        assert_eq!(mcf.value(), 3);
        assert_eq!(mcf.cost(), 3);
        assert_eq!(mcf.mincut(), vec![0, 1]);
    }

    #[test]
    fn test_cost_overflow() {
        let mut g = ResidualGraph::<i32, i16>::new(3);
        g.add_edge_with_cost(0, 1, 1000, 100).unwrap();
        g.add_edge_with_cost(1, 2, 1000, 100).unwrap();
        assert_eq!(min_cost_flow(&mut g, 0, 2), Err(Error::Overflow("flow cost")));
    }
}
