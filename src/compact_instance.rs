use std::fs;
use std::path::Path;

use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};
use crate::dimacs::read_from_file;
use crate::error::{DimacsError, InputError};

/** models a Graph Coloring instance.  */
#[derive(Debug, Clone)]
pub struct CompactInstance {
    /// nb vertices
    n: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}

impl ColoringInstance for CompactInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj_matrix[u].contains(v) }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}


impl CompactInstance {

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list.
    The list is trusted: it must be symmetric, in range and without self-loops
    (use `from_adj_list` to validate it).
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        let edges = Self::build_edges(&adj_list);
        let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
        for (a,resa) in adj_matrix.iter_mut().enumerate() {
            for b in &adj_list[a] {
                resa.insert(*b);
            }
        }
        Self { n, edges, adj_list, adj_matrix }
    }

    /** validated constructor using an adjacency list.
    Neighbor lists are sorted and duplicates merged.
    */
    pub fn from_adj_list(mut adj_list:Vec<Vec<VertexId>>) -> Result<Self, InputError> {
        let n = adj_list.len();
        for (u,l) in adj_list.iter_mut().enumerate() {
            for v in l.iter() {
                if *v >= n { return Err(InputError::VertexOutOfRange { vertex:*v, nb_vertices:n }); }
                if *v == u { return Err(InputError::SelfLoop(u)); }
            }
            l.sort_unstable();
            l.dedup();
        }
        for (u,l) in adj_list.iter().enumerate() {
            for v in l {
                if adj_list[*v].binary_search(&u).is_err() {
                    return Err(InputError::AsymmetricMatrix { u, v:*v });
                }
            }
        }
        Ok(Self::new(adj_list))
    }

    /** validated constructor from an edge list (0-based endpoints) */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, InputError> {
        let mut adj_list = vec![Vec::new() ; n];
        for (u,v) in edges {
            for w in [*u, *v] {
                if w >= n { return Err(InputError::VertexOutOfRange { vertex:w, nb_vertices:n }); }
            }
            if u == v { return Err(InputError::SelfLoop(*u)); }
            adj_list[*u].push(*v);
            adj_list[*v].push(*u);
        }
        Self::from_adj_list(adj_list)
    }

    /** validated constructor from an adjacency matrix.
    matrix[u][v] != T::default() means u and v are adjacent
    (works for 0/1 integer matrices and boolean matrices).
    */
    pub fn from_matrix<T:Copy+Default+PartialEq>(matrix:&[Vec<T>]) -> Result<Self, InputError> {
        let n = matrix.len();
        let absent = T::default();
        for (row,l) in matrix.iter().enumerate() {
            if l.len() != n {
                return Err(InputError::RaggedMatrix { row, len:l.len(), expected:n });
            }
        }
        let mut adj_list = vec![Vec::new() ; n];
        for u in 0..n {
            if matrix[u][u] != absent { return Err(InputError::SelfLoop(u)); }
            for v in 0..n {
                if matrix[u][v] != absent {
                    if matrix[v][u] == absent { return Err(InputError::AsymmetricMatrix { u, v }); }
                    adj_list[u].push(v);
                }
            }
        }
        Ok(Self::new(adj_list))
    }

    /// creates an instance from a DIMACS file
    pub fn from_dimacs_file<P:AsRef<Path>>(filename:P) -> Result<Self, DimacsError> {
        let (_,_,adj_list) = read_from_file(filename)?;
        Ok(Self::new(adj_list))
    }

    /** writes a string encoding the color classes (use this to export the solution) */
    pub fn solution_to_string(&self, classes:&[Vec<VertexId>]) -> String {
        let mut res = String::default();
        for e in classes {
            for v in e {
                res += format!("{} ", v).as_str();
            }
            res += "\n";
        }
        res
    }

    /** writes color classes into a file. each line corresponds to a color. */
    pub fn write_solution<P:AsRef<Path>>(&self, filename:P, classes:&[Vec<VertexId>]) -> std::io::Result<()> {
        fs::write(filename, self.solution_to_string(classes))
    }
}
