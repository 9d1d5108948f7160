// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Augmenting path maximum flow algorithms.
//!
//! Both algorithms repeatedly search an augmenting path in the residual
//! graph, push the bottleneck capacity along the path and stop as soon as
//! the sink cannot be reached anymore. They differ only in the search:
//!
//! - [`FordFulkerson`] uses a depth-first search, which finds *some*
//!   augmenting path. The number of iterations is only bounded by the
//!   flow value.
//! - [`EdmondsKarp`] uses a breadth-first search, which finds a shortest
//!   augmenting path. The number of iterations is in `O(nm)`.
//!
//! The flow is stored in the residual graph itself. Each solver borrows its
//! graph mutably, clone the graph to run several algorithms on the same
//! network.

pub mod fordfulkerson;
pub use self::fordfulkerson::{fordfulkerson, FordFulkerson};

pub mod edmondskarp;
pub use self::edmondskarp::{edmondskarp, EdmondsKarp};

use crate::error::{Error, Result};
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::residual::{EdgeId, ResidualGraph};

/// Augment the flow along the path in `pred` and add the amount to `value`.
///
/// Returns the augmentation value and the number of arcs on the path.
pub(crate) fn augment<F, C>(
    g: &mut ResidualGraph<F, C>,
    pred: &[Option<EdgeId>],
    src: usize,
    snk: usize,
    value: &mut F,
) -> Result<(F, usize)>
where
    F: NumAssign + Ord + Copy + CheckedAdd,
    C: Copy,
{
    let path = g
        .path(pred, src, snk)
        .ok_or_else(|| Error::InvalidGraph(format!("no path from {} to {} in predecessor table", src, snk)))?;
    let df = g.bottleneck(&path).unwrap_or_else(F::zero);
    debug_assert!(df > F::zero());

    *value = value.checked_add(&df).ok_or(Error::Overflow("flow value"))?;
    g.augment(&path, df);

    Ok((df, path.len()))
}
