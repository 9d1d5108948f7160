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

//! Errors raised while building residual graphs or solving flow problems.
//!
//! Not finding an augmenting path is *not* an error, it is the regular
//! termination condition of every flow algorithm.

use thiserror::Error;

/// Error of graph construction or a flow computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge or terminal refers to a node that does not exist, an
    /// edge has a negative capacity or source and sink coincide.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    /// Accumulating flow values or path costs exceeded the numeric type.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
    /// The residual graph contains a cycle of negative cost reachable
    /// from the source. The node is some node on that cycle.
    #[error("negative cost cycle through node {0}")]
    NegativeCycle(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Return an error if `u` is not a valid node of a graph with `n` nodes.
pub(crate) fn check_node(u: usize, n: usize) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(Error::InvalidGraph(format!("invalid node id {} (must be in 0..{})", u, n)))
    }
}

/// Check the source and sink node of a flow problem.
pub(crate) fn check_terminals(src: usize, snk: usize, n: usize) -> Result<()> {
    check_node(src, n)?;
    check_node(snk, n)?;
    if src == snk {
        return Err(Error::InvalidGraph(format!("source and sink node must not be equal ({})", src)));
    }
    Ok(())
}
