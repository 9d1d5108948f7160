/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_netflow::dimacs;
use rs_netflow::maxflow::{EdmondsKarp, FordFulkerson};
use rs_netflow::mcf::{unit_cost_flow, MinCostFlow};
use rs_netflow::ResidualGraph;

use std::error::Error;

const TESTS: &[(&str, i64)] = &[
    ("tests/maxflow_test1.dat", 19),
    ("tests/maxflow_test2.dat", 23),
    ("tests/maxflow_test3.dat", 50),
    ("tests/maxflow_test4.dat", 0),
];

/// Sum of the capacities of all edges leaving `cut`.
fn cut_capacity(g: &ResidualGraph<i64>, cut: &[usize]) -> i64 {
    let mut inside = vec![false; g.num_nodes()];
    for &u in cut {
        inside[u] = true;
    }
    g.edges()
        .filter(|&e| inside[g.src(e)] && !inside[g.snk(e)])
        .map(|e| g.cap(e))
        .sum()
}

#[test]
fn test_fordfulkerson() -> Result<(), Box<dyn Error>> {
    for &(file, expected) in TESTS {
        let instance = dimacs::read_from_file::<i64>(file)?;
        let mut g = instance.graph;
        let s = instance.src;
        let t = instance.snk;

        let mut maxflow = FordFulkerson::new(&mut g);
        maxflow.solve(s, t)?;
        assert_eq!(maxflow.value(), expected, "{}", file);
        assert!(maxflow.num_augmentations() as i64 <= expected);

        let cut = maxflow.mincut();
        assert!(cut.contains(&s) && !cut.contains(&t));
        assert_eq!(cut_capacity(maxflow.as_graph(), &cut), expected);
        assert!(maxflow.as_graph().is_feasible(s, t));
        assert_eq!(maxflow.as_graph().value(s), expected);
    }

    Ok(())
}

#[test]
fn test_edmondskarp() -> Result<(), Box<dyn Error>> {
    for &(file, expected) in TESTS {
        let instance = dimacs::read_from_file::<i64>(file)?;
        let mut g = instance.graph;
        let s = instance.src;
        let t = instance.snk;

        let mut maxflow = EdmondsKarp::new(&mut g);
        maxflow.solve(s, t)?;
        assert_eq!(maxflow.value(), expected, "{}", file);

        let cut = maxflow.mincut();
        assert!(cut.contains(&s) && !cut.contains(&t));
        assert_eq!(cut_capacity(maxflow.as_graph(), &cut), expected);
        assert!(maxflow.as_graph().is_feasible(s, t));
        assert_eq!(maxflow.as_graph().value(t), -expected);
    }

    Ok(())
}

#[test]
fn test_unit_cost_flow() -> Result<(), Box<dyn Error>> {
    for &(file, expected) in TESTS {
        let instance = dimacs::read_from_file::<i64>(file)?;
        let g = instance.graph;
        assert_eq!(unit_cost_flow(&g, instance.src, instance.snk)?, expected, "{}", file);

        let mut unit = g.with_unit_costs::<i64>();
        let mut mcf = MinCostFlow::new(&mut unit);
        mcf.solve(instance.src, instance.snk)?;
        assert_eq!(mcf.value(), expected);
        assert!(mcf.as_graph().is_feasible(instance.src, instance.snk));
    }

    Ok(())
}

#[test]
fn test_resolve() -> Result<(), Box<dyn Error>> {
    let instance = dimacs::read_from_file::<i64>("tests/maxflow_test2.dat")?;
    let mut g = instance.graph;

    let mut maxflow = EdmondsKarp::new(&mut g);
    maxflow.solve(instance.src, instance.snk)?;
    let first = maxflow.as_graph().clone();
    maxflow.solve(instance.src, instance.snk)?;
    assert_eq!(maxflow.value(), 23);
    assert_eq!(maxflow.as_graph(), &first);

    // the other direction is blocked by the missing reverse arcs
    maxflow.solve(instance.snk, instance.src)?;
    assert_eq!(maxflow.value(), 0);

    Ok(())
}

#[test]
fn test_write_read() -> Result<(), Box<dyn Error>> {
    let instance = dimacs::read_from_file::<i64>("tests/maxflow_test1.dat")?;

    let mut buf = Vec::new();
    dimacs::write(&mut buf, &instance)?;
    let copy = dimacs::read::<_, i64>(&buf[..])?;

    assert_eq!(copy.src, instance.src);
    assert_eq!(copy.snk, instance.snk);
    assert_eq!(copy.graph, instance.graph);

    Ok(())
}
