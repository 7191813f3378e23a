//! Comprehensive Test Suite for isomesh_core
//!
//! Each section pins down one part of the observable behavior of the crate, so
//! any implementation passing all of them extracts the same surfaces.
//!
//! # Test Categories
//!
//! 1. **Point3** - Vector arithmetic used by interpolation
//! 2. **Lattice Coordinates** - Offsets and flat indexing
//! 3. **Classification** - Cube index packing
//! 4. **Corner and Edge Numbering** - Bit-packed corners and edge adjacency
//! 5. **Interpolation** - Edge crossing placement and the degenerate guard
//! 6. **Table Invariants** - Structure and consistency of the triangle table
//! 7. **Single Corner Configurations** - Exact geometry of the simplest cases
//! 8. **Error Conditions** - Bounds and table validation failures
//! 9. **Sampling** - Purity of the sampler
//! 10. **Properties** - Randomized checks

use isomesh_core::marching_cubes::{
    classify, interpolate_vertex, process_cell, process_cell_no_alloc, sample_cell, triangulate,
    CellSamples, CORNER_OFFSETS, EDGE_CORNERS, TRI_TABLE,
};
use isomesh_core::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;

// =============================================================================
// Test Helpers
// =============================================================================

const EPS: f32 = 1e-6;

fn approx_eq(a: Point3, b: Point3) -> bool {
    (a - b).length() < EPS
}

fn corner_position(corner: usize) -> Point3 {
    let (x, y, z) = CORNER_OFFSETS[corner];
    Point3::new(x as f32, y as f32, z as f32)
}

/// Unit cell at the origin with the given corner densities.
fn unit_cell(values: [f32; 8]) -> CellSamples {
    CellSamples::from_cube(Point3::default(), 1.0, values)
}

/// Corner densities with `-1` for inside corners of `cube` and `+1` elsewhere.
fn signed_values(cube: u8) -> [f32; 8] {
    let mut values = [1.0; 8];
    for (i, v) in values.iter_mut().enumerate() {
        if cube & (1 << i) != 0 {
            *v = -1.0;
        }
    }
    values
}

fn entry_edges(cube: usize) -> Vec<usize> {
    TRI_TABLE[cube]
        .iter()
        .take_while(|&&e| e != -1)
        .map(|&e| e as usize)
        .collect()
}

/// Trilinear density inside the unit cell, used to check facing.
fn trilinear(values: &[f32; 8], p: Point3) -> f32 {
    let mut sum = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let (cx, cy, cz) = CORNER_OFFSETS[i];
        let wx = if cx == 1 { p.x } else { 1.0 - p.x };
        let wy = if cy == 1 { p.y } else { 1.0 - p.y };
        let wz = if cz == 1 { p.z } else { 1.0 - p.z };
        sum += wx * wy * wz * v;
    }
    sum
}

/// Lattice source that counts every sample it serves.
struct CountingSource {
    values: Vec<f32>,
    extent: [u32; 3],
    reads: Cell<usize>,
}

impl CountingSource {
    fn new(extent: [u32; 3], f: impl Fn(LatticeCoord) -> f32) -> Self {
        let n = (extent[0] * extent[1] * extent[2]) as usize;
        let values = (0..n)
            .map(|i| f(LatticeCoord::from_flat_index(i, extent)))
            .collect();
        Self {
            values,
            extent,
            reads: Cell::new(0),
        }
    }
}

impl LatticeSource for CountingSource {
    fn extent(&self) -> [u32; 3] {
        self.extent
    }

    fn sample(&self, coord: LatticeCoord) -> Result<f32, IsoCoreError> {
        check_bounds(coord, self.extent)?;
        self.reads.set(self.reads.get() + 1);
        Ok(self.values[coord.flat_index(self.extent)])
    }

    fn position(&self, coord: LatticeCoord) -> Point3 {
        lattice_position(Point3::default(), coord, 1.0)
    }
}

// =============================================================================
// SECTION 1: Point3 Tests
// =============================================================================

mod point3_tests {
    use super::*;

    #[test]
    fn should_have_default_at_origin() {
        assert_eq!(Point3::default(), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn should_add_and_subtract_componentwise() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Point3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Point3::splat(3.0));
    }

    #[test]
    fn should_scale_by_scalar() {
        let a = Point3::new(1.0, -2.0, 4.0);
        assert_eq!(a * 2.0, Point3::new(2.0, -4.0, 8.0));
        assert_eq!(a / 2.0, Point3::new(0.5, -1.0, 2.0));
    }

    #[test]
    fn should_compute_dot_and_cross() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Point3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn should_normalize_to_unit_length() {
        let n = Point3::new(3.0, 4.0, 0.0).normalize();
        assert!((n.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn should_lerp_between_endpoints() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 4.0, 6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn should_compute_componentwise_min_max() {
        let a = Point3::new(1.0, 5.0, -2.0);
        let b = Point3::new(3.0, 0.0, -1.0);
        assert_eq!(a.min(b), Point3::new(1.0, 0.0, -2.0));
        assert_eq!(a.max(b), Point3::new(3.0, 5.0, -1.0));
    }

    #[test]
    fn should_detect_non_finite_components() {
        assert!(Point3::splat(1.0).is_finite());
        assert!(!Point3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Point3::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}

// =============================================================================
// SECTION 2: Lattice Coordinate Tests
// =============================================================================

mod lattice_coord_tests {
    use super::*;

    #[test]
    fn should_offset_by_corner() {
        let c = LatticeCoord::new(3, 4, 5);
        assert_eq!(c.offset((1, 0, 1)), LatticeCoord::new(4, 4, 6));
    }

    #[test]
    fn should_index_with_x_fastest() {
        let extent = [4, 3, 2];
        assert_eq!(LatticeCoord::new(0, 0, 0).flat_index(extent), 0);
        assert_eq!(LatticeCoord::new(1, 0, 0).flat_index(extent), 1);
        assert_eq!(LatticeCoord::new(0, 1, 0).flat_index(extent), 4);
        assert_eq!(LatticeCoord::new(0, 0, 1).flat_index(extent), 12);
        assert_eq!(LatticeCoord::new(3, 2, 1).flat_index(extent), 23);
    }

    #[test]
    fn should_roundtrip_flat_index() {
        let extent = [5, 7, 3];
        for i in 0..(5 * 7 * 3) {
            assert_eq!(LatticeCoord::from_flat_index(i, extent).flat_index(extent), i);
        }
    }

    #[test]
    fn should_map_lattice_to_world() {
        let p = lattice_position(Point3::new(-1.0, 2.0, 0.0), LatticeCoord::new(4, 0, 2), 0.25);
        assert_eq!(p, Point3::new(0.0, 2.0, 0.5));
    }
}

// =============================================================================
// SECTION 3: Classification Tests
// =============================================================================

mod classification_tests {
    use super::*;

    #[test]
    fn should_classify_all_outside_as_zero() {
        assert_eq!(classify(&[0.5; 8], 0.0), CubeIndex::EMPTY);
    }

    #[test]
    fn should_classify_all_inside_as_255() {
        assert_eq!(classify(&[-0.5; 8], 0.0), CubeIndex::FULL);
    }

    #[test]
    fn should_set_bit_i_for_corner_i() {
        for corner in 0..8 {
            let mut values = [1.0; 8];
            values[corner] = -1.0;
            let cube = classify(&values, 0.0);
            assert_eq!(cube, CubeIndex(1 << corner));
            assert!(cube.is_inside(corner));
        }
    }

    #[test]
    fn should_treat_value_equal_to_iso_as_outside() {
        let mut values = [2.0; 8];
        values[5] = 1.5;
        assert_eq!(classify(&values, 1.5), CubeIndex::EMPTY);
        values[5] = 1.4999;
        assert_eq!(classify(&values, 1.5), CubeIndex(1 << 5));
    }

    #[test]
    fn should_respect_nonzero_isovalue() {
        let values = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4];
        assert_eq!(classify(&values, 0.5), CubeIndex(0b0000_0111));
    }

    #[test]
    fn should_report_trivial_configurations() {
        assert!(CubeIndex::EMPTY.is_trivial());
        assert!(CubeIndex::FULL.is_trivial());
        assert!(!CubeIndex(17).is_trivial());
    }
}

// =============================================================================
// SECTION 4: Corner and Edge Numbering Tests
// =============================================================================

mod numbering_tests {
    use super::*;

    #[test]
    fn should_bit_pack_corner_offsets() {
        for (i, &(x, y, z)) in CORNER_OFFSETS.iter().enumerate() {
            assert_eq!(x as usize, i & 1);
            assert_eq!(y as usize, (i >> 1) & 1);
            assert_eq!(z as usize, (i >> 2) & 1);
            assert_eq!(corner_from_index(i), (x, y, z));
            assert_eq!(index_from_corner((x, y, z)), i);
        }
    }

    #[test]
    fn should_join_adjacent_corners_on_every_edge() {
        for (edge, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
            let d = corner_position(a) - corner_position(b);
            assert!(
                (d.length() - 1.0).abs() < EPS,
                "Edge {} joins non-adjacent corners {} and {}",
                edge,
                a,
                b
            );
        }
    }

    #[test]
    fn should_cover_all_twelve_cube_edges_once() {
        let mut pairs: Vec<(usize, usize)> = EDGE_CORNERS
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), 12);
    }

    #[test]
    fn should_give_every_corner_three_edges() {
        for corner in 0..8 {
            let degree = EDGE_CORNERS
                .iter()
                .filter(|&&(a, b)| a == corner || b == corner)
                .count();
            assert_eq!(degree, 3, "Corner {} has {} edges", corner, degree);
        }
    }
}

// =============================================================================
// SECTION 5: Interpolation Tests
// =============================================================================

mod interpolation_tests {
    use super::*;

    #[test]
    fn should_place_vertex_at_t_0_4() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(1.0, 2.0, 8.0);
        let v = interpolate_vertex(p1, p2, -2.0, 3.0, 0.0);
        assert!(approx_eq(v, Point3::new(1.0, 2.0, 5.0)), "got {:?}", v);
    }

    #[test]
    fn should_be_symmetric_in_edge_direction() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 3.0, 0.0);
        let forward = interpolate_vertex(a, b, -1.0, 2.0, 0.0);
        let backward = interpolate_vertex(b, a, 2.0, -1.0, 0.0);
        assert!(approx_eq(forward, backward));
        assert!(approx_eq(forward, Point3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn should_use_isovalue_in_crossing() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let v = interpolate_vertex(a, b, 1.0, 3.0, 2.5);
        assert!(approx_eq(v, Point3::new(0.75, 0.0, 0.0)));
    }

    #[test]
    fn should_return_midpoint_for_degenerate_edge() {
        let a = Point3::new(2.0, 2.0, 2.0);
        let b = Point3::new(4.0, 2.0, 2.0);
        let v = interpolate_vertex(a, b, 0.0, 0.0, 0.0);
        assert!(v.is_finite());
        assert_eq!(v, Point3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn should_land_on_endpoint_when_sample_equals_iso() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 1.0);
        assert_eq!(interpolate_vertex(a, b, 0.0, 1.0, 0.0), a);
    }
}

// =============================================================================
// SECTION 6: Triangle Table Invariants
// =============================================================================

mod table_invariant_tests {
    use super::*;

    #[test]
    fn should_have_256_entries_of_16() {
        assert_eq!(TRI_TABLE.len(), 256);
        for entry in &TRI_TABLE {
            assert_eq!(entry.len(), 16);
        }
    }

    #[test]
    fn should_have_length_multiple_of_three() {
        for cube in 0..256 {
            let len = entry_edges(cube).len();
            assert_eq!(len % 3, 0, "Entry {} has length {}", cube, len);
            assert!(len <= 15);
        }
    }

    #[test]
    fn should_only_hold_terminators_after_first_terminator() {
        for (cube, entry) in TRI_TABLE.iter().enumerate() {
            let len = entry_edges(cube).len();
            assert!(
                entry[len..].iter().all(|&e| e == -1),
                "Entry {} has data after its terminator",
                cube
            );
        }
    }

    #[test]
    fn should_have_no_triangles_for_trivial_configs() {
        let table = TriangulationTable::standard();
        assert_eq!(table.triangle_count(CubeIndex::EMPTY), 0);
        assert_eq!(table.triangle_count(CubeIndex::FULL), 0);
        for cube in 1..255u8 {
            assert!(table.triangle_count(CubeIndex(cube)) > 0, "Entry {} is empty", cube);
        }
    }

    #[test]
    fn should_reference_exactly_the_crossing_edges() {
        for cube in 0..256usize {
            let used = entry_edges(cube);
            for (edge, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
                let crosses = ((cube >> a) & 1) != ((cube >> b) & 1);
                assert_eq!(
                    used.contains(&edge),
                    crosses,
                    "Entry {} and edge {} disagree (crosses = {})",
                    cube,
                    edge,
                    crosses
                );
            }
        }
    }

    #[test]
    fn should_reference_same_edges_for_complement_configs() {
        for cube in 0..128usize {
            let mut a = entry_edges(cube);
            let mut b = entry_edges(255 - cube);
            a.sort_unstable();
            a.dedup();
            b.sort_unstable();
            b.dedup();
            assert_eq!(a, b, "Asymmetry at configs {} and {}", cube, 255 - cube);
        }
    }

    #[test]
    fn should_not_repeat_an_edge_within_a_triangle() {
        for cube in 0..256 {
            for tri in entry_edges(cube).chunks_exact(3) {
                assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
            }
        }
    }

    #[test]
    fn should_face_every_triangle_into_the_solid() {
        let table = TriangulationTable::standard();
        for cube in 1..255u8 {
            let values = signed_values(cube);
            let samples = unit_cell(values);
            let mut mesh = Mesh::new();
            triangulate(table, CubeIndex(cube), &samples, 0.0, &mut mesh);

            for [a, b, c] in mesh.iter_triangles() {
                let normal = (b - a).cross(c - a);
                let centroid = (a + b + c) / 3.0;
                // Density grows outward, so a step along the normal must lower it.
                let step = normal.normalize() * 1e-2;
                assert!(
                    trilinear(&values, centroid + step) < trilinear(&values, centroid - step),
                    "Config {} has a triangle facing outward",
                    cube
                );
            }
        }
    }
}

// =============================================================================
// SECTION 7: Single Corner Configurations
// =============================================================================

mod single_corner_tests {
    use super::*;

    #[test]
    fn should_emit_one_triangle_at_edge_midpoints() {
        let table = TriangulationTable::standard();
        for corner in 0..8 {
            let mut values = [1.0; 8];
            values[corner] = -1.0;
            let samples = unit_cell(values);
            let cube = classify(&values, 0.0);

            let mut mesh = Mesh::new();
            let n = triangulate(table, cube, &samples, 0.0, &mut mesh);
            assert_eq!(n, 1, "Corner {} should produce one triangle", corner);
            assert_eq!(mesh.vertex_count(), 3);

            let mut expected: Vec<Point3> = EDGE_CORNERS
                .iter()
                .filter(|&&(a, b)| a == corner || b == corner)
                .map(|&(a, b)| (corner_position(a) + corner_position(b)) * 0.5)
                .collect();

            for v in &mesh.vertices {
                let pos = expected
                    .iter()
                    .position(|e| approx_eq(*e, *v))
                    .unwrap_or_else(|| panic!("Vertex {:?} is not an edge midpoint of corner {}", v, corner));
                expected.remove(pos);
            }
            assert!(expected.is_empty());
        }
    }

    #[test]
    fn should_emit_triangle_for_single_corner_outside() {
        let table = TriangulationTable::standard();
        for corner in 0..8 {
            let cube = CubeIndex(!(1u8 << corner));
            assert_eq!(table.triangle_count(cube), 1);
        }
    }

    #[test]
    fn should_split_cell_with_two_triangles_for_half_space() {
        // Corners with y = 0 inside: a horizontal quad at the crossing height.
        let values = [-1.0, -1.0, 3.0, 3.0, -1.0, -1.0, 3.0, 3.0];
        let samples = unit_cell(values);
        let cube = classify(&values, 0.0);
        assert_eq!(cube, CubeIndex(0b0011_0011));

        let mut mesh = Mesh::new();
        let n = triangulate(TriangulationTable::standard(), cube, &samples, 0.0, &mut mesh);
        assert_eq!(n, 2);
        for v in &mesh.vertices {
            assert!((v.y - 0.25).abs() < EPS);
        }
    }
}

// =============================================================================
// SECTION 8: Error Conditions
// =============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn should_reject_cell_outside_lattice() {
        let field = |p: Point3| p.x - 0.5;
        let lattice = FieldLattice::new(&field, Point3::default(), 1.0, [3, 3, 3]);
        let mut mesh = Mesh::new();
        let table = TriangulationTable::standard();

        let err = process_cell(&lattice, LatticeCoord::new(0, 3, 0), 0.0, table, &mut mesh)
            .unwrap_err();
        assert!(matches!(
            err,
            IsoCoreError::CoordOutOfBounds {
                axis: Axis::Y,
                coord: 4,
                extent: 4
            }
        ));
        assert!(mesh.is_empty(), "A failed cell must not emit triangles");
    }

    #[test]
    fn should_reject_cell_outside_lattice_without_alloc() {
        let field = |p: Point3| p.x - 0.5;
        let lattice = FieldLattice::new(&field, Point3::default(), 1.0, [2, 2, 2]);
        let result = process_cell_no_alloc(
            &lattice,
            LatticeCoord::new(2, 0, 0),
            0.0,
            TriangulationTable::standard(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn should_describe_out_of_bounds_error() {
        let err = IsoCoreError::CoordOutOfBounds {
            axis: Axis::Z,
            coord: 9,
            extent: 9,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("z=9"), "unexpected message: {}", msg);
        assert!(msg.contains('9'));
    }

    #[test]
    fn should_reject_malformed_table() {
        let mut triangles = TRI_TABLE;
        triangles[7][9] = 4;
        triangles[7][10] = -1;
        let result = TriangulationTable::new(EDGE_CORNERS, triangles);
        assert!(matches!(
            result,
            Err(IsoCoreError::MalformedTableEntry { cube_index: 7, len: 10 })
        ));
    }

    #[test]
    fn should_be_usable_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(IsoCoreError::NonAdjacentEdge { edge: 3 });
        assert!(!err.to_string().is_empty());
    }
}

// =============================================================================
// SECTION 9: Sampling Tests
// =============================================================================

mod sampling_tests {
    use super::*;

    #[test]
    fn should_read_eight_corners_per_cell() {
        let source = CountingSource::new([3, 3, 3], |c| c.x as f32 - 0.5);
        let samples = sample_cell(&source, LatticeCoord::new(1, 1, 1)).unwrap();
        assert_eq!(source.reads.get(), 8);

        for (i, p) in samples.positions.iter().enumerate() {
            assert_eq!(*p, corner_position(i) + Point3::splat(1.0));
        }
    }

    #[test]
    fn should_return_same_samples_when_read_twice() {
        let source = CountingSource::new([4, 4, 4], |c| {
            (c.x as f32 * 0.3).sin() + c.y as f32 * 0.1 - c.z as f32 * 0.2
        });
        let cell = LatticeCoord::new(2, 1, 0);
        let first = sample_cell(&source, cell).unwrap();
        let second = sample_cell(&source, cell).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_share_corner_samples_between_neighbor_cells() {
        let source = CountingSource::new([3, 2, 2], |c| c.x as f32 + 10.0 * c.y as f32);
        let left = sample_cell(&source, LatticeCoord::new(0, 0, 0)).unwrap();
        let right = sample_cell(&source, LatticeCoord::new(1, 0, 0)).unwrap();

        // Corner 1 of the left cell is corner 0 of the right one.
        assert_eq!(left.values[1], right.values[0]);
        assert_eq!(left.values[7], right.values[6]);
        assert_eq!(left.positions[3], right.positions[2]);
    }
}

// =============================================================================
// SECTION 10: Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Interpolated vertices stay on the edge between the two corners.
    #[test]
    fn interpolated_vertex_stays_on_crossing_edge(
        v0 in -10.0f32..-0.01,
        v1 in 0.01f32..10.0,
        len in 0.1f32..5.0,
    ) {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + len, 2.0, 3.0);
        let p = interpolate_vertex(a, b, v0, v1, 0.0);
        prop_assert!(p.x >= a.x - EPS && p.x <= b.x + EPS, "{:?} left the edge", p);
        prop_assert_eq!(p.y, 2.0);
        prop_assert_eq!(p.z, 3.0);
    }

    /// Every configuration yields a whole number of triangles, none of them degenerate in value.
    #[test]
    fn random_cells_emit_finite_triangles(
        values in prop::array::uniform8(-5.0f32..5.0),
        iso in -1.0f32..1.0,
    ) {
        let samples = unit_cell(values);
        let cube = classify(&values, iso);
        let mut mesh = Mesh::new();
        let n = triangulate(TriangulationTable::standard(), cube, &samples, iso, &mut mesh);

        prop_assert_eq!(n, TriangulationTable::standard().triangle_count(cube));
        prop_assert_eq!(mesh.vertex_count(), 3 * n);
        prop_assert!(mesh.validate().is_ok());
        for v in &mesh.vertices {
            prop_assert!(v.is_finite());
            for c in v.as_array() {
                prop_assert!((-EPS..=1.0 + EPS).contains(&c), "{:?} left the cell", v);
            }
        }
    }

    /// The allocating and fixed-size cell paths agree.
    #[test]
    fn alloc_and_no_alloc_paths_agree(
        cx in 0.2f32..1.8,
        cy in 0.2f32..1.8,
        radius in 0.2f32..1.2,
        x in 0u32..4,
        y in 0u32..4,
        z in 0u32..4,
    ) {
        let field = move |p: Point3| (p - Point3::new(cx, cy, 1.0)).length() - radius;
        let lattice = FieldLattice::new(&field, Point3::default(), 0.5, [4, 4, 4]);
        let table = TriangulationTable::standard();
        let cell = LatticeCoord::new(x, y, z);

        let mut mesh = Mesh::new();
        let n = process_cell(&lattice, cell, 0.0, table, &mut mesh).unwrap();
        let (tris, count) = process_cell_no_alloc(&lattice, cell, 0.0, table).unwrap();

        prop_assert_eq!(n, count);
        for (i, tri) in tris.iter().take(count).enumerate() {
            prop_assert_eq!(mesh.triangle(i), *tri);
        }
    }
}
