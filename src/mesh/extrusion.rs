use earcutr::earcut;

use super::Triangle;

/// Triangle indices into `ring` covering the polygon interior
pub fn triangulate(ring: &[(f32, f32)]) -> Vec<usize> {
    if ring.len() < 3 {
        return Vec::new();
    }

    let vertices: Vec<f64> = ring
        .iter()
        .flat_map(|&(x, y)| [f64::from(x), f64::from(y)])
        .collect();

    earcut(&vertices, &[], 2).unwrap_or_default()
}

/// Extrude a simple polygon into a closed solid between `z_bottom` and `z_top`
///
/// The ring may wind either way; it is treated as implicitly closed.
pub fn extrude_polygon(ring: &[(f32, f32)], z_bottom: f32, z_top: f32) -> Vec<Triangle> {
    if ring.len() < 3 {
        return Vec::new();
    }

    let mut ring = ring.to_vec();
    if signed_area(&ring) < 0.0 {
        ring.reverse();
    }

    let indices = triangulate(&ring);
    if indices.is_empty() {
        return Vec::new();
    }

    let mut triangles = Vec::with_capacity(indices.len() / 3 * 2 + ring.len() * 2);

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (ring[tri[0]], ring[tri[1]], ring[tri[2]]);
        let mut top = Triangle::new([a.0, a.1, z_top], [b.0, b.1, z_top], [c.0, c.1, z_top]);
        if top.normal[2] < 0.0 {
            top = top.flipped();
        }
        let mut bottom = top.flipped();
        for v in bottom.vertices.iter_mut() {
            v[2] = z_bottom;
        }
        triangles.push(top);
        triangles.push(bottom);
    }

    // counter-clockwise ring: walls wound p1 -> p2 face outward
    for i in 0..ring.len() {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % ring.len()];

        triangles.push(Triangle::new(
            [p1.0, p1.1, z_bottom],
            [p2.0, p2.1, z_bottom],
            [p2.0, p2.1, z_top],
        ));
        triangles.push(Triangle::new(
            [p1.0, p1.1, z_bottom],
            [p2.0, p2.1, z_top],
            [p1.0, p1.1, z_top],
        ));
    }

    triangles
}

fn signed_area(ring: &[(f32, f32)]) -> f32 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let (x1, y1) = ring[i];
            let (x2, y2) = ring[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum::<f32>()
        / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangulate_square() {
        let square = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        assert_eq!(triangulate(&square).len(), 6);
    }

    #[test]
    fn test_extrude_square_either_winding() {
        let ccw = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let mut cw = ccw.clone();
        cw.reverse();

        for ring in [ccw, cw] {
            let triangles = extrude_polygon(&ring, 0.0, 2.0);
            // 2 top + 2 bottom + 4 walls * 2
            assert_eq!(triangles.len(), 12);

            let up = triangles.iter().filter(|t| t.normal[2] > 0.99).count();
            let down = triangles.iter().filter(|t| t.normal[2] < -0.99).count();
            assert_eq!(up, 2);
            assert_eq!(down, 2);

            // Wall on x = 10 must face +x
            let east = triangles
                .iter()
                .filter(|t| t.vertices.iter().all(|v| v[0] == 10.0))
                .all(|t| t.normal[0] > 0.99);
            assert!(east);
        }
    }

    #[test]
    fn test_extrude_degenerate() {
        assert!(extrude_polygon(&[(0.0, 0.0), (1.0, 1.0)], 0.0, 1.0).is_empty());
    }
}
