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

//! The DIMACS max-flow format.
//!
//! ```text
//! c comment lines and empty lines are ignored
//! p max <n> <m>
//! n <source> s
//! n <sink> t
//! a <u> <v> <capacity>
//! ...
//! ```
//!
//! The problem line comes first and is followed by the two node lines
//! (source and sink in any order) and exactly `m` arc lines. Node numbers
//! in the file are `1..=n`, the nodes of the [`ResidualGraph`] are
//! `0..n`. Edges are added in the order of the arc lines. Loops are
//! rejected, parallel arcs are accepted.
//!
//! # Example
//!
//! ```
//! use rs_netflow::dimacs;
//! use rs_netflow::maxflow::edmondskarp;
//!
//! let file = "p max 3 2\nn 1 s\nn 3 t\na 1 2 5\na 2 3 4\n";
//! let mut instance = dimacs::read::<_, i32>(file.as_bytes()).unwrap();
//! assert_eq!((instance.src, instance.snk), (0, 2));
//! assert_eq!(edmondskarp(&mut instance.graph, 0, 2), Ok(4));
//! ```

use super::{Error, Line, LineReader, Result};
use crate::num::traits::NumAssign;
use crate::residual::ResidualGraph;

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

/// A max-flow problem instance.
#[derive(Clone, Debug)]
pub struct Instance<F> {
    /// The network, the capacities are stored on its forward arcs.
    pub graph: ResidualGraph<F>,
    /// The source node.
    pub src: usize,
    /// The sink node.
    pub snk: usize,
}

/// Parse a 1-based node number and return the 0-based node.
fn node(line: &mut Line, n: usize) -> Result<usize> {
    let u: usize = line.parse()?;
    if u == 0 || u > n {
        return Err(Error::data(line.lineno, format!("node {} out of range 1..={}", u, n)));
    }
    Ok(u - 1)
}

/// Read the source and the sink line.
fn terminals<R: Read>(reader: &mut LineReader<R>, n: usize) -> Result<(usize, usize)> {
    let mut src = None;
    let mut snk = None;
    for _ in 0..2 {
        let mut line = reader.line("n")?;
        let u = node(&mut line, n)?;
        let slot = match line.word()? {
            "s" => &mut src,
            "t" => &mut snk,
            kind => {
                return Err(Error::format(
                    line.lineno,
                    format!("node type must be 's' or 't', got '{}'", kind),
                ))
            }
        };
        if slot.replace(u).is_some() {
            return Err(Error::format(line.lineno, "terminal node given twice"));
        }
        line.finish()?;
    }

    match (src, snk) {
        (Some(s), Some(t)) if s != t => Ok((s, t)),
        _ => Err(Error::data(reader.lineno(), "source and sink must be different nodes")),
    }
}

/// Read a max-flow instance.
pub fn read<R, F>(r: R) -> Result<Instance<F>>
where
    R: Read,
    F: NumAssign + Ord + Copy + FromStr,
    F::Err: Display,
{
    let mut reader = LineReader::new(r);

    let mut line = reader.line("p")?;
    let kind = line.word()?;
    if kind != "max" {
        return Err(Error::format(line.lineno, format!("expected problem 'max', got '{}'", kind)));
    }
    let n: usize = line.parse()?;
    let m: usize = line.parse()?;
    line.finish()?;

    let (src, snk) = terminals(&mut reader, n)?;

    let mut graph = ResidualGraph::with_capacity(n, m);
    for _ in 0..m {
        let mut line = reader.line("a")?;
        let u = node(&mut line, n)?;
        let v = node(&mut line, n)?;
        let cap: F = line.parse()?;
        let lineno = line.lineno;
        line.finish()?;

        if u == v {
            return Err(Error::data(lineno, format!("loop at node {}", u + 1)));
        }
        graph
            .add_edge(u, v, cap)
            .map_err(|e| Error::data(lineno, e))?;
    }

    if let Some(line) = reader.next_line()? {
        return Err(Error::format(
            line.lineno,
            format!("expected {} arc lines, found more", m),
        ));
    }

    Ok(Instance { graph, src, snk })
}

/// Read a max-flow instance from a named file.
pub fn read_from_file<F>(filename: &str) -> Result<Instance<F>>
where
    F: NumAssign + Ord + Copy + FromStr,
    F::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a max-flow instance.
///
/// Only the forward arcs and their capacities are written, the current flow
/// is ignored.
pub fn write<W, F>(mut w: W, instance: &Instance<F>) -> std::io::Result<()>
where
    W: Write,
    F: NumAssign + Ord + Copy + Display,
{
    let g = &instance.graph;
    writeln!(w, "p max {} {}", g.num_nodes(), g.num_edges())?;
    writeln!(w, "n {} s", instance.src + 1)?;
    writeln!(w, "n {} t", instance.snk + 1)?;
    for e in g.edges() {
        writeln!(w, "a {} {} {}", g.src(e) + 1, g.snk(e) + 1, g.cap(e))?;
    }
    Ok(())
}

/// Write a max-flow instance to a named file.
pub fn write_to_file<F>(filename: &str, instance: &Instance<F>) -> std::io::Result<()>
where
    F: NumAssign + Ord + Copy + Display,
{
    write(std::fs::File::create(filename)?, instance)
}

#[cfg(test)]
mod tests {
    use crate::dimacs::{self, Error, Instance};
    use crate::ResidualGraph;

    #[test]
    fn test_read() {
        let file = "c network with
c two paths

p max 5 6
n 5 t
n 2 s
a 2 1 3
a 2 3 4

c middle part
a 1 3 1
a 1 4 2
a 3 4 9
a 4 5 5
";
        let instance = dimacs::read::<_, i64>(file.as_bytes()).unwrap();
        let g = &instance.graph;
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 6);
        assert_eq!(instance.src, 1);
        assert_eq!(instance.snk, 4);

        let arcs: Vec<_> = g.edges().map(|e| (g.src(e), g.snk(e), g.cap(e))).collect();
        assert_eq!(
            arcs,
            vec![(1, 0, 3), (1, 2, 4), (0, 2, 1), (0, 3, 2), (2, 3, 9), (3, 4, 5)]
        );
        assert!(g.edges().all(|e| g.flow(e) == 0));
    }

    #[test]
    fn test_errors() {
        let bad = [
            ("", 0),
            ("p min 2 1\n", 1),
            ("p max 2 1 0\n", 1),
            ("p max 2 1\nn 1 s\nn 1 s\n", 3),
            ("p max 2 1\nn 1 s\nn 1 t\n", 3),
            ("p max 2 1\nn 1 s\nn 3 t\n", 3),
            ("p max 2 1\nn 1 s\nn 2 x\n", 3),
            ("p max 2 1\nn 1 s\na 1 2 4\n", 3),
            ("p max 2 1\nn 1 s\nn 2 t\na 2 2 4\n", 4),
            ("p max 2 1\nn 1 s\nn 2 t\na 1 2 -4\n", 4),
            ("p max 2 1\nn 1 s\nn 2 t\na 1 2 4 7\n", 4),
            ("p max 2 1\nn 1 s\nn 2 t\na 1 2 z\n", 4),
            ("p max 2 1\nn 1 s\nn 2 t\na 1 2 4\na 2 1 4\n", 5),
        ];
        for &(file, errline) in bad.iter() {
            match dimacs::read::<_, i64>(file.as_bytes()) {
                Err(Error::Format { line, .. }) | Err(Error::Data { line, .. }) => {
                    assert_eq!(line, errline, "{:?}", file)
                }
                Err(e) => panic!("unexpected error {} for {:?}", e, file),
                Ok(_) => panic!("no error for {:?}", file),
            }
        }
    }

    #[test]
    fn test_write() {
        let mut g = ResidualGraph::<i32>::new(4);
        for &(u, v, c) in &[(0, 1, 4), (0, 2, 2), (1, 2, 2), (1, 3, 3), (2, 3, 5)] {
            g.add_edge(u, v, c).unwrap();
        }
        // the flow is not written
        g.push(0, 2);

        let mut buf = Vec::new();
        dimacs::write(&mut buf, &Instance { graph: g, src: 0, snk: 3 }).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "p max 4 5\nn 1 s\nn 4 t\na 1 2 4\na 1 3 2\na 2 3 2\na 2 4 3\na 3 4 5\n"
        );
    }
}
