use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera used for both rendering and ray queries.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space ray from the camera eye through a normalized device
    /// coordinate (`x`, `y` in `[-1, 1]`, y up).
    pub fn ndc_ray(&self, ndc: Vec2) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p_far - self.eye).normalize(),
        }
    }
}

/// Half-line used for pointer proximity queries.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Distance from `point` to the nearest position on the ray. Points
    /// behind the origin measure to the origin itself.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        let t = (point - self.origin).dot(self.dir);
        if t < 0.0 {
            return point.distance(self.origin);
        }
        point.distance(self.origin + self.dir * t)
    }
}
