use std::fmt;

use crate::color::VertexId;

/** invalid input given to the solver or to an instance constructor */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// the color budget must be at least 1
    NoColors,
    /// row `row` of an adjacency matrix has `len` entries instead of `expected`
    RaggedMatrix {
        /// row index
        row: usize,
        /// number of entries in the row
        len: usize,
        /// number of rows of the matrix
        expected: usize,
    },
    /// (u,v) is an edge but (v,u) is not
    AsymmetricMatrix {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
    },
    /// a vertex index does not belong to 0..nb_vertices
    VertexOutOfRange {
        /// offending index
        vertex: VertexId,
        /// number of vertices of the graph
        nb_vertices: usize,
    },
    /// a vertex is adjacent to itself
    SelfLoop(VertexId),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NoColors => write!(f, "the number of colors must be positive"),
            InputError::RaggedMatrix { row, len, expected } => write!(
                f, "adjacency matrix row {} has {} entries (expected {})", row, len, expected
            ),
            InputError::AsymmetricMatrix { u, v } => write!(
                f, "adjacency is not symmetric: {} -> {} without {} -> {}", u, v, v, u
            ),
            InputError::VertexOutOfRange { vertex, nb_vertices } => write!(
                f, "vertex {} out of range (graph has {} vertices)", vertex, nb_vertices
            ),
            InputError::SelfLoop(v) => write!(f, "vertex {} is adjacent to itself", v),
        }
    }
}

impl std::error::Error for InputError {}


/** error raised while reading a DIMACS file */
#[derive(Debug)]
pub enum DimacsError {
    /// unable to read the file
    Io(std::io::Error),
    /// line that is neither a comment, a header nor an edge (1-based line number)
    Syntax {
        /// line number
        line: usize,
        /// content of the line
        content: String,
    },
    /// no "p edge N M" line found
    MissingHeader,
    /// a second header line
    DuplicateHeader {
        /// line number
        line: usize,
    },
    /// an edge line appears before the header
    EdgeBeforeHeader {
        /// line number
        line: usize,
    },
    /// an edge line is not a valid edge of the declared graph
    Instance {
        /// line number
        line: usize,
        /// reason
        source: InputError,
    },
}

impl fmt::Display for DimacsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimacsError::Io(e) => write!(f, "unable to read the instance: {}", e),
            DimacsError::Syntax { line, content } => write!(
                f, "line {}: unable to parse \"{}\"", line, content
            ),
            DimacsError::MissingHeader => write!(f, "missing \"p edge\" header"),
            DimacsError::DuplicateHeader { line } => write!(f, "line {}: duplicate header", line),
            DimacsError::EdgeBeforeHeader { line } => write!(
                f, "line {}: edge found before the header", line
            ),
            DimacsError::Instance { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl std::error::Error for DimacsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DimacsError::Io(e) => Some(e),
            DimacsError::Instance { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DimacsError {
    fn from(e: std::io::Error) -> Self { DimacsError::Io(e) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_input_error() {
        assert_eq!(InputError::NoColors.to_string(), "the number of colors must be positive");
        assert_eq!(
            InputError::RaggedMatrix { row: 2, len: 3, expected: 4 }.to_string(),
            "adjacency matrix row 2 has 3 entries (expected 4)"
        );
        assert_eq!(InputError::SelfLoop(5).to_string(), "vertex 5 is adjacent to itself");
    }

    #[test]
    fn test_dimacs_error_source() {
        use std::error::Error;
        let e = DimacsError::Instance { line: 3, source: InputError::SelfLoop(1) };
        assert_eq!(e.to_string(), "line 3: vertex 1 is adjacent to itself");
        assert!(e.source().is_some());
        assert!(DimacsError::MissingHeader.source().is_none());
    }
}
