/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Minimum cost flow algorithms.
//!
//! The flow problem solved here is a maximum flow from a source to a sink
//! where each augmentation uses a cheapest augmenting path in the residual
//! graph (successive shortest paths). Because backward arcs have negated
//! costs, the shortest paths are computed by the label-correcting
//! algorithm of Moore-Bellman-Ford.

pub mod ssp;
pub use self::ssp::{min_cost_flow, unit_cost_flow, MinCostFlow};
