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

#![forbid(unsafe_code)]

//! Maximum flow algorithms on residual networks.
//!
//! A network is built as a [`ResidualGraph`] with
//! [`add_edge`](ResidualGraph::add_edge) and handed to one of the flow
//! algorithms:
//!
//! - [`maxflow::fordfulkerson`]: augmenting paths by depth-first search,
//! - [`maxflow::edmondskarp`]: shortest augmenting paths by breadth-first
//!   search,
//! - [`mcf::min_cost_flow`] and [`mcf::unit_cost_flow`]: cheapest augmenting
//!   paths by the label-correcting algorithm of Moore-Bellman-Ford.
//!
//! Each algorithm stores the flow in the graph it works on and returns the
//! flow value. Clone the graph to run several algorithms on the same
//! network.
//!
//! # Example
//!
//! ```
//! use rs_netflow::ResidualGraph;
//! use rs_netflow::maxflow::{edmondskarp, fordfulkerson};
//! use rs_netflow::mcf::unit_cost_flow;
//!
//! let mut g = ResidualGraph::<i32>::new(4);
//! g.add_edge(0, 1, 100).unwrap();
//! g.add_edge(1, 2, 50).unwrap();
//! g.add_edge(2, 3, 100).unwrap();
//!
//! assert_eq!(fordfulkerson(&mut g.clone(), 0, 3), Ok(50));
//! assert_eq!(edmondskarp(&mut g.clone(), 0, 3), Ok(50));
//! assert_eq!(unit_cost_flow(&g, 0, 3), Ok(50));
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod residual;
pub use self::residual::{EdgeId, ResidualGraph};

// # Algorithms

pub mod maxflow;
pub mod mcf;
pub mod search;
pub mod shortestpath;

#[cfg(feature = "dimacs")]
pub mod dimacs;
