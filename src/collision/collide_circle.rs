//! Narrow-phase routines for round shapes: circles, points, and polygons
//! against either.
//!
//! Every routine clears the manifold first and only fills it when the
//! shapes overlap. The normal points from the first shape to the second.

use crate::collision::manifold::{ContactFeature, ContactId, Manifold, ManifoldPoint, NULL_FEATURE};
use crate::math::{Transform, Vector2, EPSILON};
use crate::shapes::{CircleShape, PointShape, PolygonShape};

/// Computes the manifold between two circles
pub fn collide_circles(
    manifold: &mut Manifold,
    circle1: &CircleShape,
    xf1: &Transform,
    circle2: &CircleShape,
    xf2: &Transform,
) {
    collide_round(
        manifold,
        xf1.transform_point(circle1.get_local_position()),
        circle1.get_radius(),
        xf1,
        xf2.transform_point(circle2.get_local_position()),
        circle2.get_radius(),
        xf2,
    );
}

/// Computes the manifold between a point and a circle
pub fn collide_point_and_circle(
    manifold: &mut Manifold,
    point1: &PointShape,
    xf1: &Transform,
    circle2: &CircleShape,
    xf2: &Transform,
) {
    collide_round(
        manifold,
        xf1.transform_point(point1.get_local_position()),
        0.0,
        xf1,
        xf2.transform_point(circle2.get_local_position()),
        circle2.get_radius(),
        xf2,
    );
}

/// Computes the manifold between a polygon and a circle
pub fn collide_polygon_and_circle(
    manifold: &mut Manifold,
    polygon: &PolygonShape,
    xf1: &Transform,
    circle: &CircleShape,
    xf2: &Transform,
) {
    collide_polygon_and_round(
        manifold,
        polygon,
        xf1,
        xf2.transform_point(circle.get_local_position()),
        circle.get_radius(),
        xf2,
    );
}

/// Computes the manifold between a polygon and a point
pub fn collide_polygon_and_point(
    manifold: &mut Manifold,
    polygon: &PolygonShape,
    xf1: &Transform,
    point: &PointShape,
    xf2: &Transform,
) {
    collide_polygon_and_round(
        manifold,
        polygon,
        xf1,
        xf2.transform_point(point.get_local_position()),
        0.0,
        xf2,
    );
}

fn collide_round(
    manifold: &mut Manifold,
    p1: Vector2,
    r1: f32,
    xf1: &Transform,
    p2: Vector2,
    r2: f32,
    xf2: &Transform,
) {
    manifold.clear();

    let d = p2 - p1;
    let dist_sqr = d.length_squared();
    let radius_sum = r1 + r2;
    if dist_sqr > radius_sum * radius_sum {
        return;
    }

    let (separation, normal) = if dist_sqr < EPSILON {
        (-radius_sum, Vector2::unit_y())
    } else {
        let dist = dist_sqr.sqrt();
        (dist - radius_sum, d / dist)
    };

    manifold.normal = normal;

    // Halfway between the two surfaces.
    let position = ((p1 + normal * r1) + (p2 - normal * r2)) * 0.5;
    manifold.push_point(ManifoldPoint::new(
        xf1.inverse_transform_point(position),
        xf2.inverse_transform_point(position),
        separation,
        ContactId::ZERO,
    ));
}

fn collide_polygon_and_round(
    manifold: &mut Manifold,
    polygon: &PolygonShape,
    xf1: &Transform,
    center: Vector2,
    radius: f32,
    xf2: &Transform,
) {
    manifold.clear();

    let c_local = xf1.inverse_transform_point(center);
    let vertices = polygon.get_vertices();
    let normals = polygon.get_normals();

    // Find the face of minimum penetration.
    let mut normal_index = 0;
    let mut separation = f32::MIN;
    for (i, (vertex, normal)) in vertices.iter().zip(normals).enumerate() {
        let s = normal.dot(&(c_local - *vertex));
        if s > radius {
            return;
        }
        if s > separation {
            separation = s;
            normal_index = i;
        }
    }

    // Center inside the polygon: push out through the closest face.
    if separation < EPSILON {
        let normal = xf1.transform_direction(normals[normal_index]);
        let position = center - normal * radius;
        manifold.normal = normal;
        manifold.push_point(ManifoldPoint::new(
            xf1.inverse_transform_point(position),
            xf2.inverse_transform_point(position),
            separation - radius,
            ContactId::from_features(ContactFeature {
                reference_edge: 0,
                incident_edge: normal_index as u8,
                incident_vertex: NULL_FEATURE,
                flip: 0,
            }),
        ));
        return;
    }

    // Project the center onto the edge of the separating face.
    let vert_index1 = normal_index;
    let vert_index2 = (vert_index1 + 1) % vertices.len();
    let mut e = vertices[vert_index2] - vertices[vert_index1];
    let length = e.normalize_mut();
    let u = (c_local - vertices[vert_index1]).dot(&e);

    let (p_local, incident_edge, incident_vertex) = if u <= 0.0 {
        (vertices[vert_index1], NULL_FEATURE, vert_index1 as u8)
    } else if u >= length {
        (vertices[vert_index2], NULL_FEATURE, vert_index2 as u8)
    } else {
        (vertices[vert_index1] + e * u, normal_index as u8, NULL_FEATURE)
    };

    let mut d = c_local - p_local;
    let dist = d.normalize_mut();
    if dist > radius {
        return;
    }

    let normal = xf1.transform_direction(d);
    let position = center - normal * radius;
    manifold.normal = normal;
    manifold.push_point(ManifoldPoint::new(
        xf1.inverse_transform_point(position),
        xf2.inverse_transform_point(position),
        dist - radius,
        ContactId::from_features(ContactFeature {
            reference_edge: 0,
            incident_edge,
            incident_vertex,
            flip: 0,
        }),
    ));
}
