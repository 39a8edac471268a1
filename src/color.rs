use bit_set::BitSet;

/** Vertex Id */
pub type VertexId = usize;

/** Color (valid colors are 1..=m, m being the color budget) */
pub type Color = usize;

/** partial assignment: colors[v] is None while v is not colored */
pub type Assignment = Vec<Option<Color>>;

/** Solution of a graph coloring problem
(solution[v]: color of vertex v).
*/
pub type Solution = Vec<Color>;

/** models an (immutable) graph coloring instance */
pub trait ColoringInstance: std::fmt::Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of edges
    fn nb_edges(&self) -> usize { self.edges().len() }

    /// vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list (u < v)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// iterator over the vertices
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// logs some statistics of the instance
    fn display_statistics(&self) {
        log::info!("\t{} \t vertices", self.nb_vertices());
        log::info!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            log::info!("\t{} \t min degree", min);
            log::info!("\t{} \t max degree", max);
        }
    }
}


/** result of the checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible solution, number of colors actually used
    Ok(usize),
    /// the solution does not have one color per vertex (length of the solution)
    WrongLength(usize),
    /// vertex uses a color outside 1..=m
    ColorOutOfRange(VertexId, Color),
    /// both endpoints of an edge share the same color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks that a solution is a proper coloring of inst using colors 1..=nb_colors.
returns the number of distinct colors used if it is the case.
*/
pub fn checker(inst:&dyn ColoringInstance, nb_colors:usize, sol:&[Color]) -> CheckerResult {
    if sol.len() != inst.nb_vertices() {
        return CheckerResult::WrongLength(sol.len());
    }
    let mut used = BitSet::with_capacity(nb_colors+1);
    for (v,c) in sol.iter().enumerate() {
        if *c == 0 || *c > nb_colors {
            return CheckerResult::ColorOutOfRange(v, *c);
        }
        used.insert(*c);
    }
    for (a,b) in inst.edges() {
        if sol[*a] == sol[*b] { return CheckerResult::ConflictingEdge(*a, *b); }
    }
    CheckerResult::Ok(used.len())
}

/** renders a solution as a vertex to color listing */
pub fn format_coloring(sol:&[Color]) -> String {
    let mut res = String::from("Vertex : Color\n");
    for (v,c) in sol.iter().enumerate() {
        res += format!("{} : {}\n", v, c).as_str();
    }
    res
}

/** color classes of a solution (res[i]: vertices colored i+1) */
pub fn solution_to_classes(sol:&[Color], nb_colors:usize) -> Vec<Vec<VertexId>> {
    let mut res = vec![Vec::new() ; nb_colors];
    for (v,c) in sol.iter().enumerate() {
        if *c >= 1 && *c <= nb_colors { res[*c-1].push(v); }
    }
    res
}
