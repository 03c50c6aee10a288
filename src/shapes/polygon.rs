use crate::error::PhysicsError;
use crate::math::{Transform, Vector2, EPSILON};
use crate::Result;

/// Maximum number of vertices on a polygon
pub const MAX_POLYGON_VERTICES: usize = 8;

/// A convex polygon with counter-clockwise winding
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    /// Vertices in body-local coordinates
    vertices: Vec<Vector2>,

    /// Outward unit normal of the edge starting at the vertex with the same index
    normals: Vec<Vector2>,
}

impl PolygonShape {
    /// Creates a polygon from counter-clockwise, convex vertices
    pub fn new(vertices: &[Vector2]) -> Result<Self> {
        let count = vertices.len();
        if !(3..=MAX_POLYGON_VERTICES).contains(&count) {
            return Err(PhysicsError::InvalidParameter(format!(
                "Polygon needs between 3 and {} vertices, got {}",
                MAX_POLYGON_VERTICES, count
            )));
        }

        let mut normals = Vec::with_capacity(count);
        for i in 0..count {
            let edge = vertices[(i + 1) % count] - vertices[i];
            if edge.length_squared() <= EPSILON * EPSILON {
                return Err(PhysicsError::InvalidParameter(format!(
                    "Polygon edge {} is degenerate",
                    i
                )));
            }
            normals.push(edge.cross_scalar(1.0).normalize());
        }

        // Every other vertex must lie strictly to the left of each edge.
        for i in 0..count {
            let start = vertices[i];
            let edge = vertices[(i + 1) % count] - start;
            for (j, v) in vertices.iter().enumerate() {
                if j == i || j == (i + 1) % count {
                    continue;
                }
                if edge.cross(&(*v - start)) <= 0.0 {
                    return Err(PhysicsError::InvalidParameter(
                        "Polygon must be convex with counter-clockwise winding".to_string(),
                    ));
                }
            }
        }

        Ok(Self {
            vertices: vertices.to_vec(),
            normals,
        })
    }

    /// Creates an axis-aligned box centered on the body origin
    pub fn new_box(half_width: f32, half_height: f32) -> Result<Self> {
        Self::new(&[
            Vector2::new(-half_width, -half_height),
            Vector2::new(half_width, -half_height),
            Vector2::new(half_width, half_height),
            Vector2::new(-half_width, half_height),
        ])
    }

    /// Creates a box centered at `center` and rotated by `angle` in body coordinates
    pub fn new_oriented_box(half_width: f32, half_height: f32, center: Vector2, angle: f32) -> Result<Self> {
        let xf = Transform::from_position_angle(center, angle);
        Self::new(&[
            xf.transform_point(Vector2::new(-half_width, -half_height)),
            xf.transform_point(Vector2::new(half_width, -half_height)),
            xf.transform_point(Vector2::new(half_width, half_height)),
            xf.transform_point(Vector2::new(-half_width, half_height)),
        ])
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertices in body-local coordinates
    pub fn get_vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns the outward edge normals in body-local coordinates
    pub fn get_normals(&self) -> &[Vector2] {
        &self.normals
    }

    /// Returns the area-weighted centroid in body-local coordinates
    pub fn get_centroid(&self) -> Vector2 {
        let origin = self.vertices[0];
        let mut area = 0.0;
        let mut center = Vector2::zero();
        for i in 1..self.vertex_count() - 1 {
            let e1 = self.vertices[i] - origin;
            let e2 = self.vertices[i + 1] - origin;
            let triangle_area = 0.5 * e1.cross(&e2);
            area += triangle_area;
            center += (e1 + e2) * (triangle_area / 3.0);
        }
        origin + center / area
    }
}
