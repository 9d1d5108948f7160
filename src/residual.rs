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

//! A residual network with paired forward and backward arcs.
//!
//! Each edge added to the graph is stored as two arcs: the *forward* arc
//! with the requested capacity and the *backward* arc in the opposite
//! direction with capacity zero (and negated cost). Both arcs know each
//! other, each arc stores the index of its twin. Pushing flow over an arc
//! increases its flow and decreases the flow of its twin by the same
//! amount, hence flow on the forward arc can be cancelled by pushing flow
//! over the backward arc.
//!
//! The residual capacity of an arc is always `cap - flow`.
//!
//! # Example
//!
//! ```
//! use rs_netflow::ResidualGraph;
//!
//! let mut g = ResidualGraph::<i32>::new(3);
//! let e = g.add_edge(0, 1, 5).unwrap();
//! let f = g.add_edge(1, 2, 3).unwrap();
//!
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.num_arcs(), 4);
//! assert_eq!(g.residual(e), 5);
//! assert_eq!(g.residual(g.twin(e)), 0);
//!
//! g.augment(&[e, f], 3);
//! assert_eq!(g.flow(e), 3);
//! assert_eq!(g.residual(e), 2);
//! assert_eq!(g.residual(g.twin(e)), 3);
//! assert_eq!(g.value(0), 3);
//! assert!(g.is_feasible(0, 2));
//! ```

use crate::error::{check_node, Error, Result};
use crate::num::traits::{CheckedNeg, NumAssign, Signed, Zero};

use std::cmp::min;

/// The index of an arc in a residual graph.
///
/// The id returned by [`ResidualGraph::add_edge`] is the index of the
/// forward arc.
pub type EdgeId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Arc<F, C> {
    src: usize,
    snk: usize,
    cap: F,
    flow: F,
    cost: C,
    twin: EdgeId,
}

/// A directed residual network.
///
/// `F` is the type of capacities and flows, `C` the type of arc costs.
/// Both must be signed because the flow on a backward arc is the negated
/// flow on its forward arc.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidualGraph<F, C = F> {
    arcs: Vec<Arc<F, C>>,
    outarcs: Vec<Vec<EdgeId>>,
}

impl<F, C> ResidualGraph<F, C>
where
    F: NumAssign + Ord + Copy,
    C: Copy,
{
    /// Create a new graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        Self::with_capacity(n, 0)
    }

    /// Create a new graph with `n` nodes and room for `m` edges.
    pub fn with_capacity(n: usize, m: usize) -> Self {
        ResidualGraph {
            arcs: Vec::with_capacity(2 * m),
            outarcs: vec![vec![]; n],
        }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.outarcs.len()
    }

    /// Return the number of edges added to the graph.
    pub fn num_edges(&self) -> usize {
        self.arcs.len() / 2
    }

    /// Return the number of arcs, this is twice the number of edges.
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    fn add_pair(&mut self, u: usize, v: usize, cap: F, cost: C, revcost: C) -> Result<EdgeId> {
        let n = self.num_nodes();
        check_node(u, n)?;
        check_node(v, n)?;
        if cap < F::zero() {
            return Err(Error::InvalidGraph(format!("negative capacity on edge ({},{})", u, v)));
        }

        let e = self.arcs.len();
        self.arcs.push(Arc {
            src: u,
            snk: v,
            cap,
            flow: F::zero(),
            cost,
            twin: e + 1,
        });
        self.arcs.push(Arc {
            src: v,
            snk: u,
            cap: F::zero(),
            flow: F::zero(),
            cost: revcost,
            twin: e,
        });
        self.outarcs[u].push(e);
        self.outarcs[v].push(e + 1);

        Ok(e)
    }

    /// Return the tail of arc `e`.
    pub fn src(&self, e: EdgeId) -> usize {
        self.arcs[e].src
    }

    /// Return the head of arc `e`.
    pub fn snk(&self, e: EdgeId) -> usize {
        self.arcs[e].snk
    }

    /// Return the capacity of arc `e`.
    ///
    /// The capacity of a backward arc is always zero.
    pub fn cap(&self, e: EdgeId) -> F {
        self.arcs[e].cap
    }

    /// Return the cost of arc `e`.
    pub fn cost(&self, e: EdgeId) -> C {
        self.arcs[e].cost
    }

    /// Return the current flow on arc `e`.
    pub fn flow(&self, e: EdgeId) -> F {
        self.arcs[e].flow
    }

    /// Return the residual capacity `cap - flow` of arc `e`.
    pub fn residual(&self, e: EdgeId) -> F {
        let a = &self.arcs[e];
        a.cap - a.flow
    }

    /// Return the arc paired with `e`.
    pub fn twin(&self, e: EdgeId) -> EdgeId {
        self.arcs[e].twin
    }

    /// Return `true` if `e` is a forward arc, i.e. an edge added by the
    /// user.
    pub fn is_forward(&self, e: EdgeId) -> bool {
        self.arcs[e].twin > e
    }

    /// Return the arcs leaving node `u` in insertion order.
    ///
    /// This contains the forward arcs of all edges starting at `u` and
    /// the backward arcs of all edges ending at `u`. The order determines
    /// which augmenting path the searches find.
    pub fn outarcs(&self, u: usize) -> &[EdgeId] {
        &self.outarcs[u]
    }

    /// Return an iterator over the forward arcs.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.arcs.len()).filter(move |&e| self.is_forward(e))
    }

    /// Push `df` units of flow over arc `e`.
    ///
    /// The flow on the twin is decreased by the same amount.
    pub fn push(&mut self, e: EdgeId, df: F) {
        let twin = self.arcs[e].twin;
        self.arcs[e].flow += df;
        self.arcs[twin].flow -= df;
    }

    /// Return a copy of the graph where each edge has cost one.
    ///
    /// Edges with capacity zero are dropped, all flows of the copy are
    /// zero. Because of the dropped edges the edge ids of the copy may
    /// differ from the ids of this graph.
    pub fn with_unit_costs<D>(&self) -> ResidualGraph<F, D>
    where
        D: Signed + Copy,
    {
        let mut g = ResidualGraph::with_capacity(self.num_nodes(), self.num_edges());
        for e in self.edges().filter(|&e| !self.cap(e).is_zero()) {
            let a = &self.arcs[e];
            g.outarcs[a.src].push(g.arcs.len());
            g.outarcs[a.snk].push(g.arcs.len() + 1);
            g.arcs.push(Arc {
                src: a.src,
                snk: a.snk,
                cap: a.cap,
                flow: F::zero(),
                cost: D::one(),
                twin: g.arcs.len() + 1,
            });
            g.arcs.push(Arc {
                src: a.snk,
                snk: a.src,
                cap: F::zero(),
                flow: F::zero(),
                cost: -D::one(),
                twin: g.arcs.len() - 1,
            });
        }
        g
    }

    /// Set the flow on all arcs to zero.
    pub fn reset(&mut self) {
        for a in &mut self.arcs {
            a.flow = F::zero();
        }
    }

    /// Extract the path from `src` to `snk` stored in a predecessor table.
    ///
    /// `pred[v]` must be the arc over which `v` has been reached. The arcs
    /// are returned in order from `src` to `snk`. Returns `None` if the
    /// incoming arcs do not lead back to `src` within `num_nodes` steps.
    pub fn path(&self, pred: &[Option<EdgeId>], src: usize, snk: usize) -> Option<Vec<EdgeId>> {
        let mut path = vec![];
        let mut v = snk;
        while v != src {
            if path.len() >= self.num_nodes() {
                return None;
            }
            let e = pred[v]?;
            path.push(e);
            v = self.arcs[e].src;
        }
        path.reverse();
        Some(path)
    }

    /// Return the minimal residual capacity of the arcs on `path`.
    ///
    /// Returns `None` if the path is empty.
    pub fn bottleneck(&self, path: &[EdgeId]) -> Option<F> {
        path.iter().map(|&e| self.residual(e)).fold(None, |df, r| match df {
            Some(df) => Some(min(df, r)),
            None => Some(r),
        })
    }

    /// Push `df` units of flow along all arcs of `path`.
    pub fn augment(&mut self, path: &[EdgeId], df: F) {
        for &e in path {
            self.push(e, df);
        }
    }

    /// Return the net flow leaving node `u`.
    pub fn value(&self, u: usize) -> F {
        // backward arcs leaving `u` carry the negated inflow
        self.outarcs[u].iter().fold(F::zero(), |v, &e| v + self.arcs[e].flow)
    }

    /// Return `true` if the current flow is a feasible `src`-`snk`-flow.
    ///
    /// The flow on each edge must be between zero and its capacity and the
    /// flow must be conserved at each node except `src` and `snk`.
    pub fn is_feasible(&self, src: usize, snk: usize) -> bool {
        self.edges()
            .all(|e| self.flow(e) >= F::zero() && self.flow(e) <= self.cap(e))
            && (0..self.num_nodes())
                .filter(|&u| u != src && u != snk)
                .all(|u| self.value(u).is_zero())
    }
}

impl<F, C> ResidualGraph<F, C>
where
    F: NumAssign + Ord + Copy,
    C: Zero + Copy,
{
    /// Add a new edge from `u` to `v` with capacity `cap` and cost zero.
    ///
    /// Returns the id of the forward arc. The backward arc is its twin.
    ///
    /// Fails if `u` or `v` is not a node or the capacity is negative.
    pub fn add_edge(&mut self, u: usize, v: usize, cap: F) -> Result<EdgeId> {
        self.add_pair(u, v, cap, C::zero(), C::zero())
    }
}

impl<F, C> ResidualGraph<F, C>
where
    F: NumAssign + Ord + Copy,
    C: CheckedNeg + Copy,
{
    /// Add a new edge from `u` to `v` with capacity `cap` and cost `cost`.
    ///
    /// The backward arc gets cost `-cost`.
    pub fn add_edge_with_cost(&mut self, u: usize, v: usize, cap: F, cost: C) -> Result<EdgeId> {
        let revcost = cost.checked_neg().ok_or(Error::Overflow("edge cost"))?;
        self.add_pair(u, v, cap, cost, revcost)
    }
}

#[cfg(test)]
mod tests {
    use super::ResidualGraph;
    use crate::error::Error;

    #[test]
    fn test_pairing() {
        let mut g = ResidualGraph::<i32>::new(4);
        let a = g.add_edge(0, 1, 100).unwrap();
        let b = g.add_edge(1, 2, 50).unwrap();
        let c = g.add_edge(2, 3, 100).unwrap();

        assert_eq!((a, b, c), (0, 2, 4));
        for e in 0..g.num_arcs() {
            assert_eq!(g.twin(g.twin(e)), e);
            assert_eq!(g.src(e), g.snk(g.twin(e)));
            assert_eq!(g.is_forward(e), !g.is_forward(g.twin(e)));
        }
        assert_eq!(g.cap(g.twin(b)), 0);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![0, 2, 4]);

        assert_eq!(g.outarcs(0), &[0]);
        assert_eq!(g.outarcs(1), &[1, 2]);
        assert_eq!(g.outarcs(2), &[3, 4]);
        assert_eq!(g.outarcs(3), &[5]);
    }

    #[test]
    fn test_invalid_edges() {
        let mut g = ResidualGraph::<i32>::new(3);
        assert!(matches!(g.add_edge(0, 3, 1), Err(Error::InvalidGraph(_))));
        assert!(matches!(g.add_edge(5, 1, 1), Err(Error::InvalidGraph(_))));
        assert!(matches!(g.add_edge(0, 1, -1), Err(Error::InvalidGraph(_))));
        assert_eq!(
            g.add_edge_with_cost(0, 1, 1, i32::min_value()),
            Err(Error::Overflow("edge cost"))
        );
        assert_eq!(g.num_edges(), 0);
        assert!(g.add_edge(0, 1, 0).is_ok());
    }

    #[test]
    fn test_costs() {
        let mut g = ResidualGraph::<i32, i64>::new(3);
        let e = g.add_edge_with_cost(0, 1, 4, 7).unwrap();
        g.add_edge(1, 2, 0).unwrap();
        let f = g.add_edge_with_cost(1, 2, 2, -3).unwrap();
        assert_eq!(g.cost(e), 7);
        assert_eq!(g.cost(g.twin(e)), -7);
        assert_eq!(g.cost(g.twin(f)), 3);

        let h = g.with_unit_costs::<i32>();
        assert_eq!(h.num_edges(), 2);
        assert!(h.edges().all(|e| h.cost(e) == 1 && h.cost(h.twin(e)) == -1));
        assert_eq!(h.edges().map(|e| h.cap(e)).collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn test_cancel_flow() {
        let mut g = ResidualGraph::<i32>::new(2);
        let e = g.add_edge(0, 1, 5).unwrap();
        g.push(e, 4);
        g.push(g.twin(e), 3);
        assert_eq!(g.flow(e), 1);
        assert_eq!(g.flow(g.twin(e)), -1);
        assert_eq!(g.residual(g.twin(e)), 1);

        g.reset();
        assert_eq!(g.flow(e), 0);
        assert_eq!(g.residual(g.twin(e)), 0);
    }

    #[test]
    fn test_path() {
        let mut g = ResidualGraph::<i32>::new(4);
        let a = g.add_edge(0, 1, 7).unwrap();
        let b = g.add_edge(1, 2, 2).unwrap();
        let c = g.add_edge(2, 3, 9).unwrap();
        let pred = vec![None, Some(a), Some(b), Some(c)];

        let path = g.path(&pred, 0, 3).unwrap();
        assert_eq!(path, vec![a, b, c]);
        assert_eq!(g.bottleneck(&path), Some(2));
        assert_eq!(g.bottleneck(&[]), None);

        g.augment(&path, 2);
        assert_eq!(g.value(0), 2);
        assert_eq!(g.value(3), -2);
        assert!(g.is_feasible(0, 3));

        assert_eq!(g.path(&[None, None, None, None], 0, 3), None);
        // a cyclic predecessor table never reaches the source
        assert_eq!(g.path(&[None, Some(g.twin(b)), Some(b), Some(c)], 0, 3), None);
    }

    #[test]
    fn test_infeasible() {
        let mut g = ResidualGraph::<i32>::new(3);
        let a = g.add_edge(0, 1, 2).unwrap();
        g.add_edge(1, 2, 2).unwrap();
        g.push(a, 1);
        assert!(!g.is_feasible(0, 2));
        g.push(a, 2);
        assert!(!g.is_feasible(0, 1));
    }
}
