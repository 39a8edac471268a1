use std::fs;
use std::path::Path;

use bit_set::BitSet;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map, map_res, rest};
use nom::sequence::{preceded, separated_pair, terminated};

use crate::color::VertexId;
use crate::error::{DimacsError, InputError};


/** a single line of a DIMACS file */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimacsLine {
    /// "c ..." line (or empty line)
    Comment,
    /// "p edge n m" (or "p col n m")
    Header(usize, usize),
    /// "e a b" (WARNING: indices start at 1 in the DIMACS format)
    Edge(usize, usize),
}

/// reads a non-negative integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    separated_pair(read_integer, space1, read_integer)(s)
}

/// skips a single comment
fn read_comment(s:&str) -> IResult<&str, DimacsLine> {
    map(preceded(tag("c"), rest), |_| DimacsLine::Comment)(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        terminated(tag("p"), space1),
        preceded(terminated(alt((tag("edge"), tag("col"))), space1), read_two_integers)
    )(s)
}

/// reads edge line
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(terminated(tag("e"), space1), read_two_integers)(s)
}

/// reads a full line (trailing spaces allowed)
pub fn read_line(s:&str) -> IResult<&str, DimacsLine> {
    all_consuming(terminated(
        alt((
            read_comment,
            map(read_header, |(n,m)| DimacsLine::Header(n, m)),
            map(read_edge, |(a,b)| DimacsLine::Edge(a, b)),
        )),
        space0
    ))(s)
}

/// reads an instance from a string, returns (n,m,adj_list)
pub fn read_from_str(content:&str) -> Result<(usize, usize, Vec<Vec<VertexId>>), DimacsError> {
    let mut header:Option<(usize,usize)> = None;
    let mut adj_matrix:Vec<BitSet> = Vec::new();
    let mut adj_list:Vec<Vec<VertexId>> = Vec::new();
    let mut check_nb_edges = 0;
    for (i,raw) in content.lines().enumerate() {
        let line = i+1;
        let trimmed = raw.trim();
        if trimmed.is_empty() { continue; }
        let parsed = match read_line(trimmed) {
            Ok((_,parsed)) => parsed,
            Err(_) => return Err(DimacsError::Syntax { line, content:trimmed.to_string() }),
        };
        match parsed {
            DimacsLine::Comment => {},
            DimacsLine::Header(n,m) => {
                if header.is_some() { return Err(DimacsError::DuplicateHeader { line }); }
                header = Some((n,m));
                adj_matrix = vec![BitSet::with_capacity(n) ; n];
                adj_list = vec![Vec::new() ; n];
            },
            DimacsLine::Edge(a,b) => {
                let n = match header {
                    None => return Err(DimacsError::EdgeBeforeHeader { line }),
                    Some((n,_)) => n,
                };
                for w in [a, b] {
                    if w == 0 || w > n {
                        return Err(DimacsError::Instance {
                            line,
                            source: InputError::VertexOutOfRange { vertex:w, nb_vertices:n },
                        });
                    }
                }
                let (u,v) = (a-1, b-1);
                if u == v {
                    return Err(DimacsError::Instance { line, source:InputError::SelfLoop(u) });
                }
                check_nb_edges += 1;
                if adj_matrix[u].insert(v) {
                    adj_matrix[v].insert(u);
                    adj_list[u].push(v);
                    adj_list[v].push(u);
                }
            },
        }
    }
    let (n,m) = header.ok_or(DimacsError::MissingHeader)?;
    if check_nb_edges != m && 2*check_nb_edges != m {
        log::warn!("DIMACS header declares {} edges, {} edge lines read", m, check_nb_edges);
    }
    for l in adj_list.iter_mut() { l.sort_unstable(); }
    Ok((n, m, adj_list))
}

/// reads an instance from file, returns (n,m,adj_list)
pub fn read_from_file<P:AsRef<Path>>(filename:P) -> Result<(usize, usize, Vec<Vec<VertexId>>), DimacsError> {
    let content = fs::read_to_string(filename)?;
    read_from_str(content.as_str())
}
