/// A triangle for STL output
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Three vertices: [[x, y, z], [x, y, z], [x, y, z]]
    pub vertices: [[f32; 3]; 3],
    /// Unit normal following the right-hand rule
    pub normal: [f32; 3],
}

impl Triangle {
    pub fn new(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        Self {
            vertices: [v0, v1, v2],
            normal: unit_normal(v0, v1, v2),
        }
    }

    /// Same triangle with reversed winding, facing the other way
    pub fn flipped(&self) -> Self {
        let [v0, v1, v2] = self.vertices;
        Self::new(v0, v2, v1)
    }
}

fn unit_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];

    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len > 1e-10 {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        // degenerate
        [0.0, 0.0, 1.0]
    }
}
