use std::ops::ControlFlow;

use serde::Serialize;

use crate::color::{Assignment, Color, ColoringInstance, Solution, VertexId};
use crate::error::InputError;


/**
returns true iff color c can be given to vertex v: no vertex adjacent to v
already uses c. Uncolored vertices never conflict.
*/
pub fn is_safe(inst:&dyn ColoringInstance, v:VertexId, c:Color, colors:&[Option<Color>]) -> bool {
    inst.vertices().all(|u| !(inst.are_adjacent(v, u) && colors[u] == Some(c)))
}


/** search statistics */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// number of search nodes (partial assignments) visited
    pub nb_nodes: usize,
    /// number of candidate colors refused by `is_safe`
    pub nb_rejected: usize,
    /// number of complete colorings recorded
    pub nb_solutions: usize,
}


/**
Backtracking search space for the m-coloring problem.

Vertices are colored in order 0..n, colors tried in order 1..=m.
*/
#[derive(Debug)]
pub struct BacktrackingSpace<'a> {
    /// instance
    inst: &'a dyn ColoringInstance,
    /// color budget
    nb_colors: usize,
    /// if false, stop at the first solution
    find_all: bool,
    /// colors[v]: color assigned to vertex v
    colors: Assignment,
    /// solutions found so far (in discovery order)
    solutions: Vec<Solution>,
    /// statistics
    stats: SearchStats,
}

impl<'a> BacktrackingSpace<'a> {
    /** creates a new backtracking search space. fails if nb_colors is 0. */
    pub fn new(inst:&'a dyn ColoringInstance, nb_colors:usize, find_all:bool) -> Result<Self, InputError> {
        if nb_colors == 0 { return Err(InputError::NoColors); }
        Ok(Self {
            inst,
            nb_colors,
            find_all,
            colors: vec![None ; inst.nb_vertices()],
            solutions: Vec::new(),
            stats: SearchStats::default(),
        })
    }

    /// colors the vertices from v onwards. Break(()) once the search should stop.
    fn dfs(&mut self, v:VertexId) -> ControlFlow<()> {
        self.stats.nb_nodes += 1;
        if v == self.inst.nb_vertices() {
            let sol:Solution = self.colors.iter().flatten().copied().collect();
            debug_assert_eq!(sol.len(), self.colors.len());
            self.solutions.push(sol);
            self.stats.nb_solutions += 1;
            return if self.find_all { ControlFlow::Continue(()) } else { ControlFlow::Break(()) };
        }
        for c in 1..=self.nb_colors {
            if !is_safe(self.inst, v, c, &self.colors) {
                self.stats.nb_rejected += 1;
                continue;
            }
            debug_assert!(self.colors[v].is_none());
            self.colors[v] = Some(c);
            let flow = self.dfs(v+1);
            self.colors[v] = None;
            if let ControlFlow::Break(()) = flow { return flow; }
        }
        ControlFlow::Continue(())
    }

    /** runs the search. Can only be run once (later calls do nothing). */
    pub fn run(&mut self) {
        if self.stats.nb_nodes > 0 { return; }
        let _ = self.dfs(0);
        log::debug!(
            "backtracking ({} colors, find_all: {}): {} nodes, {} rejected, {} solutions",
            self.nb_colors, self.find_all,
            self.stats.nb_nodes, self.stats.nb_rejected, self.stats.nb_solutions
        );
    }

    /// current (working) assignment
    pub fn colors(&self) -> &[Option<Color>] { &self.colors }

    /// solutions found
    pub fn solutions(&self) -> &[Solution] { &self.solutions }

    /// search statistics
    pub fn stats(&self) -> &SearchStats { &self.stats }

    /// consumes the space and returns its solutions
    pub fn into_solutions(self) -> Vec<Solution> { self.solutions }
}


/**
solves the m-coloring problem by backtracking.
 - find_all: false → at most one solution (the first in lexicographic order)
 - find_all: true → every proper coloring, in lexicographic order

returns an empty vector if the graph is not colorable with nb_colors colors.
*/
pub fn solve(inst:&dyn ColoringInstance, nb_colors:usize, find_all:bool) -> Result<Vec<Solution>, InputError> {
    let mut space = BacktrackingSpace::new(inst, nb_colors, find_all)?;
    space.run();
    Ok(space.into_solutions())
}

/** returns a coloring using at most nb_colors colors if one exists */
pub fn can_color(inst:&dyn ColoringInstance, nb_colors:usize) -> Result<Option<Solution>, InputError> {
    Ok(solve(inst, nb_colors, false)?.into_iter().next())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::compact_instance::CompactInstance;
    use crate::generator::{complete_graph, cycle_graph, random_graph, sample_graph};

    /// enumerates every assignment in lexicographic order, keeps the proper ones
    fn brute_force(inst:&dyn ColoringInstance, nb_colors:usize) -> Vec<Solution> {
        let n = inst.nb_vertices();
        let mut res = Vec::new();
        let mut sol = vec![1 ; n];
        loop {
            if let CheckerResult::Ok(_) = checker(inst, nb_colors, &sol) { res.push(sol.clone()); }
            // next assignment (odometer, last vertex fastest)
            let mut i = n;
            loop {
                if i == 0 { return res; }
                i -= 1;
                if sol[i] < nb_colors { sol[i] += 1; break; }
                sol[i] = 1;
            }
        }
    }

    fn is_valid(inst:&dyn ColoringInstance, nb_colors:usize, sol:&[Color]) -> bool {
        matches!(checker(inst, nb_colors, sol), CheckerResult::Ok(_))
    }

    #[test]
    fn test_is_safe() {
        let inst = sample_graph();
        let colors = vec![Some(1), None, Some(2), None];
        assert!(!is_safe(&inst, 1, 1, &colors));
        assert!(!is_safe(&inst, 1, 2, &colors));
        assert!(is_safe(&inst, 1, 3, &colors));
        // 3 is only adjacent to 1, which is uncolored
        assert!(is_safe(&inst, 3, 1, &colors));
        assert!(is_safe(&inst, 3, 2, &colors));
    }

    #[test]
    fn test_sample_first_found() {
        let inst = sample_graph();
        let sol = can_color(&inst, 3).unwrap().unwrap();
        assert_eq!(sol, vec![1,2,3,1]);
        assert!(is_valid(&inst, 3, &sol));
    }

    #[test]
    fn test_sample_unsatisfiable() {
        let inst = sample_graph();
        assert_eq!(can_color(&inst, 2).unwrap(), None);
        assert!(solve(&inst, 2, true).unwrap().is_empty());
    }

    #[test]
    fn test_sample_all() {
        let inst = sample_graph();
        let sols = solve(&inst, 3, true).unwrap();
        // 3! colorings of the triangle, 2 choices left for the pendant vertex
        assert_eq!(sols.len(), 12);
        assert_eq!(sols, brute_force(&inst, 3));
        assert!(sols.iter().all(|s| is_valid(&inst, 3, s)));
    }

    #[test]
    fn test_single_vertex() {
        let inst = CompactInstance::new(vec![vec![]]);
        assert_eq!(solve(&inst, 1, true).unwrap(), vec![vec![1]]);
        assert_eq!(can_color(&inst, 1).unwrap(), Some(vec![1]));
    }

    #[test]
    fn test_empty_graph() {
        let inst = CompactInstance::new(vec![]);
        assert_eq!(solve(&inst, 2, true).unwrap(), vec![Vec::<Color>::new()]);
    }

    #[test]
    fn test_triangle() {
        let inst = complete_graph(3);
        let sols = solve(&inst, 3, true).unwrap();
        assert_eq!(sols.len(), 6);
        assert_eq!(sols[0], vec![1,2,3]);
        assert_eq!(sols[5], vec![3,2,1]);
        assert!(solve(&inst, 2, true).unwrap().is_empty());
        assert!(solve(&inst, 2, false).unwrap().is_empty());
    }

    #[test]
    fn test_no_colors() {
        let inst = sample_graph();
        assert_eq!(solve(&inst, 0, false).unwrap_err(), InputError::NoColors);
        assert_eq!(can_color(&inst, 0).unwrap_err(), InputError::NoColors);
    }

    #[test]
    fn test_complete_graph_threshold() {
        for k in 1..=5 {
            let inst = complete_graph(k);
            for m in 1..=6 {
                assert_eq!(can_color(&inst, m).unwrap().is_some(), m >= k, "K{} with {} colors", k, m);
            }
        }
    }

    #[test]
    fn test_cycles() {
        for n in 3..=9 {
            let inst = cycle_graph(n);
            assert_eq!(can_color(&inst, 2).unwrap().is_some(), n % 2 == 0);
            // chromatic polynomial of C_n: (m-1)^n + (-1)^n (m-1)
            let m:i64 = 3;
            let expected = (m-1).pow(n as u32) + if n % 2 == 0 { m-1 } else { -(m-1) };
            assert_eq!(solve(&inst, 3, true).unwrap().len() as i64, expected);
        }
    }

    #[test]
    fn test_brute_force_cross_check() {
        for seed in 0..20 {
            let n = 3 + (seed as usize) % 4;
            let inst = random_graph(n, 0.5, seed);
            for m in 1..=3 {
                let sols = solve(&inst, m, true).unwrap();
                let expected = brute_force(&inst, m);
                assert_eq!(sols, expected, "seed {} n {} m {}", seed, n, m);
                // first-found consistency
                assert_eq!(can_color(&inst, m).unwrap(), expected.first().cloned());
            }
        }
    }

    #[test]
    fn test_monotonicity() {
        for seed in 0..10 {
            let inst = random_graph(8, 0.6, 100+seed);
            let first = (1..=8).find(|m| can_color(&inst, *m).unwrap().is_some());
            let first = first.unwrap(); // 8 colors always suffice for 8 vertices
            for m in first..=first+3 {
                let sol = can_color(&inst, m).unwrap();
                assert!(sol.is_some());
                assert!(is_valid(&inst, m, &sol.unwrap()));
            }
        }
    }

    #[test]
    fn test_working_state_restored() {
        let inst = sample_graph();
        for (m,find_all) in [(2,false), (2,true), (3,false), (3,true)] {
            let mut space = BacktrackingSpace::new(&inst, m, find_all).unwrap();
            space.run();
            assert!(space.colors().iter().all(|c| c.is_none()));
        }
    }

    #[test]
    fn test_early_termination() {
        // first-found mode on an unconstrained graph: a single path down the tree
        let inst = CompactInstance::new(vec![vec![] ; 6]);
        let mut space = BacktrackingSpace::new(&inst, 3, false).unwrap();
        space.run();
        assert_eq!(space.solutions(), &[vec![1 ; 6]]);
        assert_eq!(space.stats().nb_nodes, 7);
        assert_eq!(space.stats().nb_solutions, 1);
        // enumerate mode visits the whole tree: 1 + 3 + ... + 3^6 nodes
        let mut space_all = BacktrackingSpace::new(&inst, 3, true).unwrap();
        space_all.run();
        assert_eq!(space_all.stats().nb_solutions, 729);
        assert_eq!(space_all.stats().nb_nodes, 1093);
    }

    #[test]
    fn test_stats_rejections() {
        let inst = complete_graph(2);
        let mut space = BacktrackingSpace::new(&inst, 2, true).unwrap();
        space.run();
        // root: 2 accepted; each second level: 1 rejected, 1 accepted
        assert_eq!(space.stats(), &SearchStats { nb_nodes:5, nb_rejected:2, nb_solutions:2 });
        space.run(); // no effect
        assert_eq!(space.solutions().len(), 2);
    }

    #[test]
    fn test_dimacs_instances() {
        let petersen = CompactInstance::from_dimacs_file("insts/other-instances/petersen.col").unwrap();
        assert!(can_color(&petersen, 2).unwrap().is_none());
        let sol = can_color(&petersen, 3).unwrap().unwrap();
        assert!(is_valid(&petersen, 3, &sol));
        assert_eq!(solve(&petersen, 3, true).unwrap().len(), 120);
        let myciel3 = CompactInstance::from_dimacs_file("insts/other-instances/myciel3.col").unwrap();
        assert!(can_color(&myciel3, 3).unwrap().is_none());
        assert!(can_color(&myciel3, 4).unwrap().is_some());
    }
}
