// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

use crate::error::{Error, Result};
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::residual::{EdgeId, ResidualGraph};

/// The shortest-path algorithm by Moore-Bellman-Ford on a residual graph.
///
/// Only arcs with positive residual capacity are used. The arc costs may
/// be negative (backward arcs have negated costs) but the residual graph
/// must not contain a negative cycle reachable from `src`.
///
/// On return `dist[u]` is the length of a shortest path from `src` to `u`
/// (or `None` if `u` is not reachable) and `pred[u]` is the last arc on
/// such a path. The function returns `true` iff `snk` is reachable.
///
/// The algorithm runs at most `n - 1` passes over all arcs, the
/// iteration stops early if no distance label changed in a pass. If
/// `check_cycles` is `true` one more pass is allowed. If a label still
/// changes in this pass the residual graph contains a negative cycle and
/// [`Error::NegativeCycle`] is returned.
///
/// # Example
///
/// ```
/// use rs_netflow::ResidualGraph;
/// use rs_netflow::shortestpath::moorebellmanford;
///
/// let mut g = ResidualGraph::<i32>::new(4);
/// let a = g.add_edge_with_cost(0, 1, 1, 1).unwrap();
/// let b = g.add_edge_with_cost(0, 2, 1, 4).unwrap();
/// let c = g.add_edge_with_cost(1, 2, 1, 1).unwrap();
/// g.add_edge_with_cost(1, 3, 1, 5).unwrap();
/// let d = g.add_edge_with_cost(2, 3, 1, 1).unwrap();
///
/// let mut dist = vec![None; 4];
/// let mut pred = vec![None; 4];
/// assert_eq!(moorebellmanford::residual(&g, 0, 3, &mut dist, &mut pred, true), Ok(true));
/// assert_eq!(dist, vec![Some(0), Some(1), Some(2), Some(3)]);
/// assert_eq!(g.path(&pred, 0, 3), Some(vec![a, c, d]));
///
/// // saturate (0,1): the only way to node 1 is backwards over (1,2)
/// g.push(a, 1);
/// g.push(c, 1);
/// assert_eq!(moorebellmanford::residual(&g, 0, 3, &mut dist, &mut pred, true), Ok(true));
/// assert_eq!(dist, vec![Some(0), Some(3), Some(4), Some(5)]);
/// assert_eq!(g.path(&pred, 0, 3), Some(vec![b, d]));
/// ```
pub fn residual<F, C>(
    g: &ResidualGraph<F, C>,
    src: usize,
    snk: usize,
    dist: &mut [Option<C>],
    pred: &mut [Option<EdgeId>],
    check_cycles: bool,
) -> Result<bool>
where
    F: NumAssign + Ord + Copy,
    C: NumAssign + Ord + Copy + CheckedAdd,
{
    let n = g.num_nodes();
    for d in dist.iter_mut() {
        *d = None;
    }
    for p in pred.iter_mut() {
        *p = None;
    }
    dist[src] = Some(C::zero());

    let npasses = if check_cycles { n } else { n.saturating_sub(1) };
    for i in 0..npasses {
        let mut changed = false;
        for u in 0..n {
            // skip nodes that have not been seen, yet
            let du = match dist[u] {
                Some(du) => du,
                None => continue,
            };
            for &e in g.outarcs(u) {
                if g.residual(e) <= F::zero() {
                    continue;
                }
                let v = g.snk(e);
                let newdist = du.checked_add(&g.cost(e)).ok_or(Error::Overflow("path cost"))?;
                if dist[v].map(|dv| newdist < dv).unwrap_or(true) {
                    if i + 1 == n {
                        return Err(Error::NegativeCycle(v));
                    }
                    dist[v] = Some(newdist);
                    pred[v] = Some(e);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    Ok(dist[snk].is_some())
}

/// Return a shortest augmenting path from `src` to `snk`.
///
/// This is a convenience wrapper around [`residual`]. It returns the arcs
/// of the path together with its cost, or `None` if `snk` is not
/// reachable.
pub fn find_path<F, C>(g: &ResidualGraph<F, C>, src: usize, snk: usize) -> Result<Option<(Vec<EdgeId>, C)>>
where
    F: NumAssign + Ord + Copy,
    C: NumAssign + Ord + Copy + CheckedAdd,
{
    let mut dist = vec![None; g.num_nodes()];
    let mut pred = vec![None; g.num_nodes()];
    if !residual(g, src, snk, &mut dist, &mut pred, true)? {
        return Ok(None);
    }
    match (g.path(&pred, src, snk), dist[snk]) {
        (Some(path), Some(d)) => Ok(Some((path, d))),
        _ => Err(Error::NegativeCycle(snk)),
    }
}

#[cfg(test)]
mod tests {
    use super::{find_path, residual};
    use crate::error::Error;
    use crate::ResidualGraph;

    #[test]
    fn test_negative_arcs() {
        let mut g = ResidualGraph::<i32>::new(7);
        for &(u, v, w) in [
            (0, 1, -8),
            (1, 4, -3),
            (2, 0, 2),
            (2, 1, 1),
            (2, 5, -3),
            (3, 1, 0),
            (3, 2, 5),
            (4, 3, 8),
            (5, 3, -1),
            (6, 3, 4),
            (6, 4, 6),
            (6, 5, 3),
        ]
        .iter()
        {
            g.add_edge_with_cost(u, v, 1, w).unwrap();
        }

        let mut dist = vec![None; 7];
        let mut pred = vec![None; 7];
        assert_eq!(residual(&g, 6, 0, &mut dist, &mut pred, true), Ok(true));
        assert_eq!(pred[6], None);
        for &(u, p) in [(0, 2), (1, 0), (2, 3), (4, 1), (5, 6)].iter() {
            assert_eq!(pred[u].map(|e| g.src(e)), Some(p));
        }
        assert_eq!(dist[4], Some(-2));
    }

    #[test]
    fn test_unreachable() {
        let mut g = ResidualGraph::<i32>::new(3);
        g.add_edge_with_cost(0, 1, 1, 1).unwrap();
        g.add_edge_with_cost(1, 2, 0, 1).unwrap();
        assert_eq!(find_path(&g, 0, 2), Ok(None));
    }

    #[test]
    fn test_negative_cycle() {
        let mut g = ResidualGraph::<i32>::new(4);
        g.add_edge_with_cost(0, 1, 1, 1).unwrap();
        g.add_edge_with_cost(1, 2, 1, -2).unwrap();
        g.add_edge_with_cost(2, 1, 1, 1).unwrap();
        g.add_edge_with_cost(2, 3, 1, 1).unwrap();
        assert!(matches!(find_path(&g, 0, 3), Err(Error::NegativeCycle(_))));

        let mut dist = vec![None; 4];
        let mut pred = vec![None; 4];
        assert_eq!(residual(&g, 0, 3, &mut dist, &mut pred, false), Ok(true));
    }

    #[test]
    fn test_overflow() {
        let mut g = ResidualGraph::<i32, i8>::new(3);
        g.add_edge_with_cost(0, 1, 1, 100).unwrap();
        g.add_edge_with_cost(1, 2, 1, 100).unwrap();
        assert_eq!(find_path(&g, 0, 2), Err(Error::Overflow("path cost")));
    }
}
