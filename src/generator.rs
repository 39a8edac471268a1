use crate::color::VertexId;
use crate::compact_instance::CompactInstance;

/** complete graph on k vertices */
pub fn complete_graph(k:usize) -> CompactInstance {
    let adj_list = (0..k).map(|u| (0..k).filter(|v| *v != u).collect()).collect();
    CompactInstance::new(adj_list)
}

/** cycle on n vertices (0-1-...-(n-1)-0). n < 3 gives a path. */
pub fn cycle_graph(n:usize) -> CompactInstance {
    let mut adj_list:Vec<Vec<VertexId>> = vec![Vec::new() ; n];
    for u in 0..n {
        let v = (u+1) % n;
        if u == v || adj_list[u].contains(&v) { continue; }
        adj_list[u].push(v);
        adj_list[v].push(u);
    }
    for l in adj_list.iter_mut() { l.sort_unstable(); }
    CompactInstance::new(adj_list)
}

/** random graph: each pair of vertices is adjacent with probability density.
Same (n, density, seed) gives the same graph.
*/
pub fn random_graph(n:usize, density:f64, seed:u64) -> CompactInstance {
    let rng = fastrand::Rng::with_seed(seed);
    let mut adj_list:Vec<Vec<VertexId>> = vec![Vec::new() ; n];
    for u in 0..n {
        for v in (u+1)..n {
            if rng.f64() < density {
                adj_list[u].push(v);
                adj_list[v].push(u);
            }
        }
    }
    for l in adj_list.iter_mut() { l.sort_unstable(); }
    CompactInstance::new(adj_list)
}

/** triangle 0-1-2 with pendant vertex 3 attached to 1 */
pub fn sample_graph() -> CompactInstance {
    CompactInstance::new(vec![
        vec![1,2],
        vec![0,2,3],
        vec![0,1],
        vec![1],
    ])
}
