/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use rs_netflow::dimacs;
use rs_netflow::maxflow::{EdmondsKarp, FordFulkerson};
use rs_netflow::mcf::MinCostFlow;
use rs_netflow::{Result, ResidualGraph};

use std::error::Error;

/// Repeat `solve` `niter` times and report the time and the flow value.
fn run<S>(name: &str, niter: usize, mut solve: S) -> Result<i64>
where
    S: FnMut() -> Result<i64>,
{
    let tstart = OffsetDateTime::now_utc();
    let mut value = 0;
    for _ in 0..niter {
        value = solve()?;
    }
    let tend = OffsetDateTime::now_utc();
    println!("{}", name);
    println!("  Time: {}", (tend - tstart).as_seconds_f64());
    println!("  Flow: {}", value);
    Ok(value)
}

fn check(g: &ResidualGraph<i64>, src: usize, snk: usize, value: i64) {
    assert!(g.is_feasible(src, snk));
    assert_eq!(g.value(src), value);
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve a max-flow problem with augmenting path algorithms.";
        opt algorithm:String=String::from("all"), desc:"Algorithm (ff, ek, mcf or all).";
        opt num:usize=1, desc:"Number of times each algorithm is repeated.";
        param file:Option<String>, desc:"Instance file name (DIMACS max format).";
    }
    .parse_or_exit();

    let (ff, ek, mcf) = match args.algorithm.as_str() {
        "ff" => (true, false, false),
        "ek" => (false, true, false),
        "mcf" => (false, false, true),
        "all" => (true, true, true),
        alg => return Err(format!("unknown algorithm: {}", alg).into()),
    };

    let tstart = OffsetDateTime::now_utc();
    let (g, s, t) = match args.file {
        Some(ref file) => {
            let instance = dimacs::read_from_file::<i64>(file)?;
            (instance.graph, instance.src, instance.snk)
        }
        None => {
            let mut g = ResidualGraph::new(4);
            g.add_edge(0, 1, 100)?;
            g.add_edge(1, 2, 50)?;
            g.add_edge(2, 3, 100)?;
            (g, 0, 3)
        }
    };
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of nodes: {}", g.num_nodes());
    println!("  number of edges: {}", g.num_edges());

    if ff {
        let mut h = g.clone();
        let mut maxflow = FordFulkerson::new(&mut h);
        let value = run("Ford-Fulkerson", args.num, || {
            maxflow.solve(s, t)?;
            Ok(maxflow.value())
        })?;
        println!("  augmentations: {}", maxflow.num_augmentations());
        check(maxflow.as_graph(), s, t, value);
    }

    if ek {
        let mut h = g.clone();
        let mut maxflow = EdmondsKarp::new(&mut h);
        let value = run("Edmonds-Karp", args.num, || {
            maxflow.solve(s, t)?;
            Ok(maxflow.value())
        })?;
        println!("  augmentations: {}", maxflow.num_augmentations());
        check(maxflow.as_graph(), s, t, value);
    }

    if mcf {
        let mut h = g.with_unit_costs::<i64>();
        let mut mcf = MinCostFlow::new(&mut h);
        let value = run("Unit cost flow", args.num, || {
            mcf.solve(s, t)?;
            Ok(mcf.value())
        })?;
        println!("  augmentations: {}", mcf.num_augmentations());
        println!("  cost: {}", mcf.cost());
        check(mcf.as_graph(), s, t, value);
    }

    Ok(())
}
