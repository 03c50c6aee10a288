//! Polygon against polygon, using the separating axis test to pick a
//! reference face and clipping the incident edge against its side planes.

use crate::collision::manifold::{
    ContactFeature, ContactId, Manifold, ManifoldPoint, MAX_MANIFOLD_POINTS,
};
use crate::math::{Transform, Vector2};
use crate::shapes::PolygonShape;

/// Prefer the first polygon's face unless the second is clearly better.
const RELATIVE_TOLERANCE: f32 = 0.98;
const ABSOLUTE_TOLERANCE: f32 = 0.001;

#[derive(Debug, Clone, Copy, Default)]
struct ClipVertex {
    v: Vector2,
    id: ContactFeature,
}

/// Computes the manifold between two convex polygons
pub fn collide_polygons(
    manifold: &mut Manifold,
    poly_a: &PolygonShape,
    xf_a: &Transform,
    poly_b: &PolygonShape,
    xf_b: &Transform,
) {
    manifold.clear();

    let (edge_a, separation_a) = find_max_separation(poly_a, xf_a, poly_b, xf_b);
    if separation_a > 0.0 {
        return;
    }

    let (edge_b, separation_b) = find_max_separation(poly_b, xf_b, poly_a, xf_a);
    if separation_b > 0.0 {
        return;
    }

    let (poly1, xf1, poly2, xf2, edge1, flip) =
        if separation_b > RELATIVE_TOLERANCE * separation_a + ABSOLUTE_TOLERANCE {
            (poly_b, xf_b, poly_a, xf_a, edge_b, 1u8)
        } else {
            (poly_a, xf_a, poly_b, xf_b, edge_a, 0u8)
        };

    let incident_edge = find_incident_edge(poly1, xf1, edge1, poly2, xf2);

    let vertices1 = poly1.get_vertices();
    let v11 = vertices1[edge1];
    let v12 = vertices1[(edge1 + 1) % vertices1.len()];

    let side_normal = xf1.transform_direction(v12 - v11).normalize();
    let front_normal = side_normal.cross_scalar(1.0);

    let v11 = xf1.transform_point(v11);
    let v12 = xf1.transform_point(v12);

    let front_offset = front_normal.dot(&v11);
    let side_offset1 = -side_normal.dot(&v11);
    let side_offset2 = side_normal.dot(&v12);

    // Clip the incident edge against the extruded side edges of the reference face.
    let mut clip_points1 = [ClipVertex::default(); 2];
    if clip_segment_to_line(&mut clip_points1, &incident_edge, -side_normal, side_offset1) < 2 {
        return;
    }

    let mut clip_points2 = [ClipVertex::default(); 2];
    if clip_segment_to_line(&mut clip_points2, &clip_points1, side_normal, side_offset2) < 2 {
        return;
    }

    manifold.normal = if flip == 1 { -front_normal } else { front_normal };

    for clip_point in clip_points2.iter().take(MAX_MANIFOLD_POINTS) {
        let separation = front_normal.dot(&clip_point.v) - front_offset;
        if separation <= 0.0 {
            let mut id = clip_point.id;
            id.flip = flip;
            manifold.push_point(ManifoldPoint::new(
                xf_a.inverse_transform_point(clip_point.v),
                xf_b.inverse_transform_point(clip_point.v),
                separation,
                ContactId::from_features(id),
            ));
        }
    }
}

/// Finds the edge of `poly1` with the largest separation from `poly2`
fn find_max_separation(
    poly1: &PolygonShape,
    xf1: &Transform,
    poly2: &PolygonShape,
    xf2: &Transform,
) -> (usize, f32) {
    let mut best_index = 0;
    let mut max_separation = f32::MIN;

    for (i, (vertex, normal)) in poly1.get_vertices().iter().zip(poly1.get_normals()).enumerate() {
        let n = xf1.transform_direction(*normal);
        let v1 = xf1.transform_point(*vertex);

        let separation = poly2
            .get_vertices()
            .iter()
            .map(|v2| n.dot(&(xf2.transform_point(*v2) - v1)))
            .fold(f32::MAX, f32::min);

        if separation > max_separation {
            max_separation = separation;
            best_index = i;
        }
    }

    (best_index, max_separation)
}

/// Finds the edge of `poly2` most anti-parallel to the reference normal
fn find_incident_edge(
    poly1: &PolygonShape,
    xf1: &Transform,
    edge1: usize,
    poly2: &PolygonShape,
    xf2: &Transform,
) -> [ClipVertex; 2] {
    let normal1 = xf2.inverse_transform_direction(xf1.transform_direction(poly1.get_normals()[edge1]));

    let normals2 = poly2.get_normals();
    let mut index = 0;
    let mut min_dot = f32::MAX;
    for (i, normal2) in normals2.iter().enumerate() {
        let dot = normal1.dot(normal2);
        if dot < min_dot {
            min_dot = dot;
            index = i;
        }
    }

    let vertices2 = poly2.get_vertices();
    let i1 = index;
    let i2 = (i1 + 1) % vertices2.len();

    [
        ClipVertex {
            v: xf2.transform_point(vertices2[i1]),
            id: ContactFeature {
                reference_edge: edge1 as u8,
                incident_edge: i1 as u8,
                incident_vertex: 0,
                flip: 0,
            },
        },
        ClipVertex {
            v: xf2.transform_point(vertices2[i2]),
            id: ContactFeature {
                reference_edge: edge1 as u8,
                incident_edge: i2 as u8,
                incident_vertex: 1,
                flip: 0,
            },
        },
    ]
}

/// Keeps the part of a segment behind the line `dot(normal, v) = offset`
fn clip_segment_to_line(
    v_out: &mut [ClipVertex; 2],
    v_in: &[ClipVertex; 2],
    normal: Vector2,
    offset: f32,
) -> usize {
    let mut num_out = 0;

    let distance0 = normal.dot(&v_in[0].v) - offset;
    let distance1 = normal.dot(&v_in[1].v) - offset;

    if distance0 <= 0.0 {
        v_out[num_out] = v_in[0];
        num_out += 1;
    }
    if distance1 <= 0.0 {
        v_out[num_out] = v_in[1];
        num_out += 1;
    }

    // The points are on opposite sides of the plane.
    if distance0 * distance1 < 0.0 {
        let interp = distance0 / (distance0 - distance1);
        v_out[num_out] = ClipVertex {
            v: v_in[0].v + (v_in[1].v - v_in[0].v) * interp,
            id: if distance0 > 0.0 { v_in[0].id } else { v_in[1].id },
        };
        num_out += 1;
    }

    num_out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_segment_keeps_inside_part() {
        let segment = [
            ClipVertex { v: Vector2::new(-1.0, 0.0), id: ContactFeature::default() },
            ClipVertex {
                v: Vector2::new(1.0, 0.0),
                id: ContactFeature { incident_vertex: 1, ..ContactFeature::default() },
            },
        ];
        let mut out = [ClipVertex::default(); 2];
        let count = clip_segment_to_line(&mut out, &segment, Vector2::unit_x(), 0.5);

        assert_eq!(count, 2);
        assert_eq!(out[0].v, Vector2::new(-1.0, 0.0));
        assert!((out[1].v.x - 0.5).abs() < 1.0e-6);
        // The clipped point inherits the id of the vertex that was cut away.
        assert_eq!(out[1].id.incident_vertex, 1);
    }
}
