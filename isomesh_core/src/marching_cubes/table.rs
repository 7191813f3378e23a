//! The paired corner/edge/triangle lookup used by the triangulator.

use crate::error::{IsoCoreError, Result};
use crate::types::CubeIndex;

use super::tables::{CORNER_OFFSETS, EDGE_CORNERS, TRI_TABLE};

/// Terminator value in a triangle table entry.
pub const TERMINATOR: i8 = -1;

/// Edge-to-corner mapping and triangle table, validated together.
///
/// The two halves are co-designed: edge ids in the triangle table only make sense
/// against the matching edge-to-corner mapping and corner numbering. Construction
/// through [`TriangulationTable::new`] rejects malformed data up front, so the
/// per-cell code never has to.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangulationTable {
    edges: [(usize, usize); 12],
    triangles: [[i8; 16]; 256],
}

static STANDARD: TriangulationTable = TriangulationTable {
    edges: EDGE_CORNERS,
    triangles: TRI_TABLE,
};

// The built-in table is checked at compile time.
const _: () = assert!(validate(&EDGE_CORNERS, &TRI_TABLE).is_ok());

impl TriangulationTable {
    /// Build a table from an edge-to-corner mapping and a triangle table.
    ///
    /// # Errors
    /// * `NonAdjacentEdge` - an edge joins corners that do not share a cube edge
    /// * `InvalidEdge` - an entry references an edge id outside 0..12
    /// * `MalformedTableEntry` - an entry length is not a multiple of 3
    /// * `DataAfterTerminator` - an entry continues after its `-1`
    pub fn new(edges: [(usize, usize); 12], triangles: [[i8; 16]; 256]) -> Result<Self> {
        validate(&edges, &triangles)?;
        Ok(Self { edges, triangles })
    }

    /// The built-in table matching the bit-packed corner numbering.
    #[inline]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Corner pair joined by `edge`.
    #[inline]
    pub fn edge_corners(&self, edge: usize) -> (usize, usize) {
        self.edges[edge]
    }

    /// Raw `-1`-terminated entry for a configuration.
    #[inline]
    pub fn entry(&self, cube: CubeIndex) -> &[i8; 16] {
        &self.triangles[cube.as_usize()]
    }

    /// Edge triples of every triangle emitted for a configuration, in table order.
    pub fn triangles(&self, cube: CubeIndex) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.entry(cube)
            .chunks_exact(3)
            .take_while(|tri| tri[0] != TERMINATOR)
            .map(|tri| [tri[0] as usize, tri[1] as usize, tri[2] as usize])
    }

    /// Number of triangles emitted for a configuration.
    #[inline]
    pub fn triangle_count(&self, cube: CubeIndex) -> usize {
        entry_len(self.entry(cube)) / 3
    }
}

impl Default for TriangulationTable {
    fn default() -> Self {
        STANDARD.clone()
    }
}

const fn entry_len(entry: &[i8; 16]) -> usize {
    let mut len = 0;
    while len < 16 && entry[len] != TERMINATOR {
        len += 1;
    }
    len
}

const fn validate(edges: &[(usize, usize); 12], triangles: &[[i8; 16]; 256]) -> Result<()> {
    let mut e = 0;
    while e < 12 {
        let (a, b) = edges[e];
        if a >= 8 || b >= 8 {
            return Err(IsoCoreError::NonAdjacentEdge { edge: e as u8 });
        }
        let ca = CORNER_OFFSETS[a];
        let cb = CORNER_OFFSETS[b];
        let diff = ca.0.abs_diff(cb.0) + ca.1.abs_diff(cb.1) + ca.2.abs_diff(cb.2);
        if diff != 1 {
            return Err(IsoCoreError::NonAdjacentEdge { edge: e as u8 });
        }
        e += 1;
    }

    let mut cube = 0;
    while cube < 256 {
        let entry = &triangles[cube];
        let len = entry_len(entry);
        if len % 3 != 0 {
            return Err(IsoCoreError::MalformedTableEntry {
                cube_index: cube as u8,
                len,
            });
        }
        let mut i = 0;
        while i < 16 {
            let edge = entry[i];
            if i < len {
                if edge < 0 || edge >= 12 {
                    return Err(IsoCoreError::InvalidEdge {
                        cube_index: cube as u8,
                        edge,
                    });
                }
            } else if edge != TERMINATOR {
                return Err(IsoCoreError::DataAfterTerminator {
                    cube_index: cube as u8,
                });
            }
            i += 1;
        }
        cube += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert!(TriangulationTable::new(EDGE_CORNERS, TRI_TABLE).is_ok());
        assert_eq!(TriangulationTable::default(), *TriangulationTable::standard());
    }

    #[test]
    fn test_rejects_short_entry() {
        let mut triangles = TRI_TABLE;
        triangles[1] = [0, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1];
        assert_eq!(
            TriangulationTable::new(EDGE_CORNERS, triangles),
            Err(IsoCoreError::MalformedTableEntry {
                cube_index: 1,
                len: 2
            })
        );
    }

    #[test]
    fn test_rejects_data_after_terminator() {
        let mut triangles = TRI_TABLE;
        triangles[0][5] = 3;
        assert_eq!(
            TriangulationTable::new(EDGE_CORNERS, triangles),
            Err(IsoCoreError::DataAfterTerminator { cube_index: 0 })
        );
    }

    #[test]
    fn test_rejects_invalid_edge() {
        let mut triangles = TRI_TABLE;
        triangles[2][1] = 12;
        assert_eq!(
            TriangulationTable::new(EDGE_CORNERS, triangles),
            Err(IsoCoreError::InvalidEdge {
                cube_index: 2,
                edge: 12
            })
        );
    }

    #[test]
    fn test_rejects_diagonal_edge() {
        let mut edges = EDGE_CORNERS;
        edges[4] = (0, 7);
        assert_eq!(
            TriangulationTable::new(edges, TRI_TABLE),
            Err(IsoCoreError::NonAdjacentEdge { edge: 4 })
        );
    }

    #[test]
    fn test_triangles_iterates_in_table_order() {
        let table = TriangulationTable::standard();
        let cube = CubeIndex(1);
        let tris: Vec<[usize; 3]> = table.triangles(cube).collect();
        let entry = table.entry(cube);
        assert_eq!(tris.len(), 1);
        assert_eq!(
            tris[0],
            [entry[0] as usize, entry[1] as usize, entry[2] as usize]
        );
        assert_eq!(table.triangle_count(CubeIndex::EMPTY), 0);
        assert_eq!(table.triangle_count(CubeIndex::FULL), 0);
    }
}
