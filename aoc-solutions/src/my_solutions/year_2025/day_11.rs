use anyhow::{anyhow, bail};
use aoc_runner::{AutoRegisterSolution, Part, SolveContext, SolveError, Solution};
use log::debug;
use rustc_hash::FxHashMap;

#[derive(AutoRegisterSolution)]
#[aoc(tags = ["graph"])]
pub struct Day11;

const MAX_VIA: usize = 16;

impl Solution for Day11 {
    fn day(&self) -> u8 {
        11
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError> {
        let lines = ctx.load_lines_with(aoc_runner::convert::owned)?;
        let graph =
            DeviceGraph::parse(&lines).map_err(|e| SolveError::InvalidInput(e.to_string()))?;

        let paths = match ctx.part() {
            Part::First => graph.count_paths("you", "out", &[]),
            Part::Second => graph.count_paths("svr", "out", &["fft", "dac"]),
        }
        .map_err(|e| SolveError::Failed(e.into()))?;
        Ok(paths.to_string())
    }
}

/// Directed device graph built from `name: out1 out2 ...` lines
#[derive(Debug, Default)]
pub struct DeviceGraph {
    ids: FxHashMap<String, usize>,
    edges: Vec<Vec<usize>>,
}

impl DeviceGraph {
    pub fn parse(lines: &[String]) -> anyhow::Result<Self> {
        let mut graph = Self::default();
        for line in lines {
            let (name, outputs) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("missing ':' in {line:?}"))?;
            let name = name.trim();
            if name.is_empty() {
                bail!("empty device name in {line:?}");
            }

            let from = graph.intern(name);
            for output in outputs.split_whitespace() {
                let to = graph.intern(output);
                graph.edges[from].push(to);
            }
        }
        Ok(graph)
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.edges.len();
        self.ids.insert(name.to_string(), id);
        self.edges.push(Vec::new());
        id
    }

    pub fn node(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Count the paths from `from` to `to` that visit every node in `via`.
    ///
    /// Unknown device names have no paths. Paths stop at `to`.
    pub fn count_paths(&self, from: &str, to: &str, via: &[&str]) -> anyhow::Result<u64> {
        if via.len() > MAX_VIA {
            bail!("at most {MAX_VIA} required devices are supported, got {}", via.len());
        }
        let (Some(from), Some(to)) = (self.node(from), self.node(to)) else {
            return Ok(0);
        };
        let Some(via) = via.iter().map(|name| self.node(name)).collect::<Option<Vec<_>>>() else {
            return Ok(0);
        };

        let search = PathSearch {
            graph: self,
            target: to,
            via: &via,
            full_mask: ((1u32 << via.len()) - 1),
        };

        if self.has_cycle_from(from) {
            debug!("Device graph has a cycle, counting simple paths");
            let mut visited = vec![false; self.len()];
            Ok(search.count_simple(from, 0, &mut visited))
        } else {
            let mut memo = FxHashMap::default();
            Ok(search.count_acyclic(from, 0, &mut memo))
        }
    }

    fn has_cycle_from(&self, start: usize) -> bool {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        fn visit(graph: &DeviceGraph, node: usize, marks: &mut [Mark]) -> bool {
            marks[node] = Mark::Active;
            for &next in &graph.edges[node] {
                let mark = marks[next];
                match mark {
                    Mark::Active => return true,
                    Mark::New if visit(graph, next, marks) => return true,
                    _ => {}
                }
            }
            marks[node] = Mark::Done;
            false
        }

        let mut marks = vec![Mark::New; self.len()];
        visit(self, start, &mut marks)
    }
}

struct PathSearch<'a> {
    graph: &'a DeviceGraph,
    target: usize,
    via: &'a [usize],
    full_mask: u32,
}

impl PathSearch<'_> {
    fn visit_mask(&self, node: usize, mask: u32) -> u32 {
        self.via
            .iter()
            .position(|&v| v == node)
            .map_or(mask, |i| mask | (1 << i))
    }

    fn count_acyclic(
        &self,
        node: usize,
        mask: u32,
        memo: &mut FxHashMap<(usize, u32), u64>,
    ) -> u64 {
        let mask = self.visit_mask(node, mask);
        if node == self.target {
            return u64::from(mask == self.full_mask);
        }
        if let Some(&count) = memo.get(&(node, mask)) {
            return count;
        }

        let count = self.graph.edges[node]
            .iter()
            .map(|&next| self.count_acyclic(next, mask, memo))
            .sum();
        memo.insert((node, mask), count);
        count
    }

    fn count_simple(&self, node: usize, mask: u32, visited: &mut [bool]) -> u64 {
        let mask = self.visit_mask(node, mask);
        if node == self.target {
            return u64::from(mask == self.full_mask);
        }

        visited[node] = true;
        let mut count = 0;
        for &next in &self.graph.edges[node] {
            if !visited[next] {
                count += self.count_simple(next, mask, visited);
            }
        }
        visited[node] = false;
        count
    }
}
