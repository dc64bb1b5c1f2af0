//! # Assembly Tests

use super::*;
use crate::ops::contour::Contour;
use crate::ops::extrude::PartBase;
use crate::ops::tessellate::Triangulation;
use crate::part::SourceKind;
use approx::assert_relative_eq;

fn triangle_part(offset: DVec2) -> Part {
    let points: Vec<DVec2> = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)]
        .iter()
        .map(|&p| p + offset)
        .collect();
    Part {
        contours: vec![Contour::from_points(points.clone())],
        triangulation: Triangulation {
            vertices: points,
            triangles: vec![[0, 1, 2]],
        },
        ..Part::empty(SourceKind::Glyph)
    }
}

fn unit_bounds() -> Rect {
    Rect::new(DVec2::ZERO, DVec2::ONE)
}

#[test]
fn test_layout_puts_faces_before_walls() {
    let parts = vec![triangle_part(DVec2::ZERO), triangle_part(DVec2::X * 5.0)];
    let layout = BufferLayout::plan(&parts).unwrap();

    assert_eq!(layout.face_vertex_count, 12);
    assert_eq!(layout.face_index_count, 12);
    assert_eq!(layout.vertex_count, 24);
    assert_eq!(layout.index_count, 48);
    assert_eq!(
        layout.bases,
        vec![
            PartBase {
                face_vertex: 0,
                face_index: 0,
                wall_vertex: 12,
                wall_index: 12,
            },
            PartBase {
                face_vertex: 6,
                face_index: 6,
                wall_vertex: 18,
                wall_index: 30,
            },
        ]
    );
}

#[test]
fn test_layout_of_nothing_is_empty() {
    let layout = BufferLayout::plan(&[]).unwrap();
    assert!(layout.is_empty());
    assert!(layout.bases.is_empty());
}

#[test]
fn test_builder_rejects_out_of_range_writes() {
    let mut builder = MeshBuilder::with_capacity(2, 3);
    let vertex = MeshVertex::default();

    assert!(builder.fill_vertices(1, &[vertex]).is_ok());
    let err = builder.fill_vertices(1, &[vertex, vertex]).unwrap_err();
    assert!(matches!(
        err,
        MeshError::BufferOverflow {
            buffer: "vertex",
            offset: 1,
            len: 2,
            capacity: 2
        }
    ));

    assert!(builder.fill_indices(0, &[1, 2, 3]).is_ok());
    assert!(builder.fill_indices(usize::MAX, &[1]).is_err());
}

#[test]
fn test_builder_starts_zeroed() {
    let builder = MeshBuilder::with_capacity(3, 3);
    let mesh = builder.finish(unit_bounds(), None);
    assert!(mesh.vertices().iter().all(|v| *v == MeshVertex::default()));
    assert_eq!(mesh.indices(), &[0, 0, 0]);
}

#[test]
fn test_uv_maps_bounds_corners() {
    let uv = UvMapper::new(Rect::new(DVec2::new(-2.0, 0.0), DVec2::new(2.0, 4.0)));
    assert_eq!(uv.map(DVec2::new(-2.0, 0.0)), DVec2::new(0.0, 1.0));
    assert_eq!(uv.map(DVec2::new(2.0, 4.0)), DVec2::new(1.0, 0.0));
    assert_eq!(uv.map(DVec2::new(0.0, 1.0)), DVec2::new(0.5, 0.75));
}

#[test]
fn test_uv_zero_extent_maps_to_range_start() {
    let uv = UvMapper::new(Rect::new(DVec2::new(3.0, 3.0), DVec2::new(3.0, 3.0)));
    assert_eq!(uv.map(DVec2::new(3.0, 3.0)), DVec2::new(0.0, 1.0));
}

#[test]
fn test_single_triangle_mesh() {
    let parts = vec![triangle_part(DVec2::ZERO)];
    let mesh = assemble(&parts, 1.0, unit_bounds(), Some("paper".to_string())).unwrap();

    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.index_count(), 24);
    assert!(mesh.validate());
    assert_eq!(mesh.texture(), Some("paper"));
    assert_eq!(&mesh.indices()[..6], &[2, 1, 0, 3, 4, 5]);
    assert_eq!(&mesh.indices()[6..9], &[6, 7, 9]);

    let back = mesh.vertices()[3];
    assert_eq!(back.position, [0.0, 0.0, -1.0]);
    assert_eq!(back.uv, [0.0, 1.0]);
    assert_eq!(back.normal, [0.0; 3]);
}

#[test]
fn test_parts_do_not_share_indices() {
    let parts = vec![
        triangle_part(DVec2::ZERO),
        triangle_part(DVec2::new(2.0, 0.0)),
        triangle_part(DVec2::new(4.0, 0.0)),
    ];
    let layout = BufferLayout::plan(&parts).unwrap();
    let mesh = assemble(&parts, 1.0, unit_bounds(), None).unwrap();

    for (i, base) in layout.bases.iter().enumerate() {
        let face = &mesh.indices()[base.face_index..base.face_index + 6];
        let lo = base.face_vertex;
        assert!(face.iter().all(|&v| v >= lo && v < lo + 6), "part {i} face");

        let wall = &mesh.indices()[base.wall_index..base.wall_index + 18];
        let lo = base.wall_vertex;
        assert!(wall.iter().all(|&v| v >= lo && v < lo + 6), "part {i} wall");
    }
}

#[test]
fn test_part_vertices_are_translated_copies() {
    let parts = vec![triangle_part(DVec2::ZERO), triangle_part(DVec2::new(10.0, 0.0))];
    let mesh = assemble(&parts, 2.0, Rect::new(DVec2::ZERO, DVec2::new(11.0, 1.0)), None).unwrap();

    let second_front = mesh.vertices()[6].position;
    assert_eq!(second_front, [10.0, 0.0, 0.0]);
    assert_relative_eq!(mesh.vertices()[6].uv[0], 10.0 / 11.0, epsilon = 1e-6);
}

#[test]
fn test_empty_parts_assemble_to_empty_mesh() {
    let parts = vec![Part::empty(SourceKind::Glyph), Part::empty(SourceKind::VectorArt)];
    let mesh = assemble(&parts, 1.0, unit_bounds(), None).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.index_count(), 0);
    assert_eq!(mesh.bounds(), unit_bounds());
}
