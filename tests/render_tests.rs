//! End-to-end rendering tests against the public library API.

use std::collections::BTreeSet;

use textcube::graphics::draw_triangle;
use textcube::math::{Vec2, Vec3};
use textcube::mesh::Mesh;
use textcube::renderer::DEFAULT_PALETTE;
use textcube::transform::Transform;
use textcube::{ConfigError, FrameBuffer, RenderSettings, Renderer, Rotation};

fn filled_set(fb: &FrameBuffer) -> BTreeSet<(usize, usize)> {
    let mut cells = BTreeSet::new();
    for (row, line) in fb.lines().enumerate() {
        for (col, &c) in line.iter().enumerate() {
            if c != ' ' {
                cells.insert((row, col));
            }
        }
    }
    cells
}

fn rasterize(points: [(f64, f64); 3]) -> BTreeSet<(usize, usize)> {
    let mut fb = FrameBuffer::new(20, 12).unwrap();
    let [a, b, c] = points.map(|(x, y)| Vec2::new(x, y));
    draw_triangle(&mut fb, a, b, c, '#');
    filled_set(&fb)
}

#[test]
fn test_front_view_golden_frame() {
    let mut renderer = Renderer::new(&RenderSettings::new(40, 20)).unwrap();
    let frame = renderer.render_frame(Rotation::default());

    // The front face spans rows 1..=19 and overhangs both sides of the grid.
    let lines = frame.snapshot();
    assert_eq!(lines[0], " ".repeat(40));
    for line in &lines[1..] {
        assert_eq!(line, &"$".repeat(40));
    }
    assert_eq!(frame.filled_cells(), 19 * 40);
    assert_eq!(frame.get(10, 20), Some('$'));
}

#[test]
fn test_render_is_deterministic() {
    let mut renderer = Renderer::new(&RenderSettings::new(40, 20)).unwrap();
    let rotation = Rotation::new(0.7, 1.1, 0.4);

    let first = renderer.render_frame(rotation).clone();
    renderer.render_frame(Rotation::new(2.0, 0.5, 3.0));
    let second = renderer.render_frame(rotation).clone();

    assert_eq!(first, second);
    assert!(first.filled_cells() > 0);
}

#[test]
fn test_rotating_cube_always_covers_center() {
    let mut renderer = Renderer::new(&RenderSettings::new(40, 20)).unwrap();
    let mut rotation = Rotation::default();

    for _ in 0..64 {
        let frame = renderer.render_frame(rotation);
        assert_eq!((frame.columns(), frame.rows()), (40, 20));
        let center = frame.get(10, 20).unwrap();
        assert!(DEFAULT_PALETTE.contains(center), "{:?} at {:?}", center, rotation);
        rotation.rotate(0.1, 0.1, 0.1);
    }
}

#[test]
fn test_camera_inside_cube_stays_in_bounds() {
    let mut settings = RenderSettings::new(40, 20);
    settings.transform = Transform {
        distance: 0.5,
        ..Transform::default()
    };
    let mut renderer = Renderer::new(&settings).unwrap();

    // Vertices behind the camera project far outside the grid.
    let frame = renderer.render_frame(Rotation::new(0.2, 0.3, 0.1));
    assert_eq!(frame.cells().len(), 40 * 20);
    assert!(frame.filled_cells() <= 40 * 20);
}

#[test]
fn test_zero_depth_triangles_are_skipped() {
    let mut settings = RenderSettings::new(40, 20);
    settings.transform = Transform {
        distance: 1.0,
        ..Transform::default()
    };
    let mut renderer = Renderer::new(&settings).unwrap();

    // The front face sits exactly at z = 0 and the rest is culled.
    assert!(renderer.visible_triangles(Rotation::default()).is_empty());
    assert_eq!(renderer.render_frame(Rotation::default()).filled_cells(), 0);
}

#[test]
fn test_flat_top_matches_nudged_split() {
    let flat = rasterize([(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]);
    let nudged = rasterize([(0.0, 0.0), (10.0, 1e-6), (5.0, 8.0)]);
    assert_eq!(flat.len(), 54);
    // Edge truncation may differ by at most one cell per row.
    assert!(flat.symmetric_difference(&nudged).count() <= 9);

    let flat = rasterize([(3.0, 9.0), (15.0, 9.0), (8.0, 1.0)]);
    let nudged = rasterize([(3.0, 9.0), (15.0, 9.0 - 1e-9), (8.0, 1.0)]);
    assert!(flat.symmetric_difference(&nudged).count() <= 9);
}

#[test]
fn test_renderers_of_different_sizes_coexist() {
    let mut small = Renderer::new(&RenderSettings::new(20, 10)).unwrap();
    let mut large = Renderer::new(&RenderSettings::new(80, 24)).unwrap();
    let rotation = Rotation::new(0.7, 1.1, 0.4);

    let small_cells = small.render_frame(rotation).filled_cells();
    let large_cells = large.render_frame(rotation).filled_cells();

    assert!(small_cells <= 20 * 10);
    assert!(large_cells > small_cells);
    assert_eq!(small.frame().columns(), 20);
    assert_eq!(large.frame().rows(), 24);
}

#[test]
fn test_custom_mesh() {
    // A single triangle facing the camera.
    let mesh = Mesh::new(
        vec![
            Vec3::new(-0.1, -0.1, 0.0),
            Vec3::new(-0.1, 0.1, 0.0),
            Vec3::new(0.1, 0.1, 0.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let mut renderer = Renderer::with_mesh(&RenderSettings::new(40, 20), mesh).unwrap();
    assert_eq!(renderer.visible_triangles(Rotation::default()), vec![0]);

    let frame = renderer.render_frame(Rotation::default());
    assert!(frame.filled_cells() > 0);
    assert!(frame.cells().iter().all(|&c| c == ' ' || c == '$'));
}

#[test]
fn test_configuration_errors() {
    assert_eq!(
        Renderer::new(&RenderSettings::new(0, 20)).unwrap_err(),
        ConfigError::EmptySurface {
            columns: 0,
            rows: 20
        }
    );
    assert!(matches!(
        Mesh::new(vec![Vec3::default()], vec![[0, 0, 1]]),
        Err(ConfigError::InvalidMesh { index: 1, .. })
    ));
}
