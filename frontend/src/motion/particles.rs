use rand::Rng;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[cfg(test)]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Uniformly fills a cube of side `spread` centred on the origin.
pub fn scatter<R: Rng>(rng: &mut R, count: usize, spread: f64) -> Vec<Point3> {
    let half = spread / 2.0;
    (0..count)
        .map(|_| Point3 {
            x: rng.gen_range(-half..=half),
            y: rng.gen_range(-half..=half),
            z: rng.gen_range(-half..=half),
        })
        .collect()
}

/// Field rotation after `elapsed` seconds: (about x, about y) in radians.
pub fn rotation_at(elapsed: f64) -> (f64, f64) {
    (elapsed * 0.05, elapsed * 0.075)
}

/// Rotates about x, then y.
pub fn rotate(p: Point3, rx: f64, ry: f64) -> Point3 {
    let (sx, cx) = rx.sin_cos();
    let (sy, cy) = ry.sin_cos();
    let y = p.y * cx - p.z * sx;
    let z = p.y * sx + p.z * cx;
    Point3 {
        x: p.x * cy + z * sy,
        y,
        z: -p.x * sy + z * cy,
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera {
    /// Distance from the origin along +z, looking towards it.
    pub distance: f64,
    pub fov_deg: f64,
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 5.0,
            fov_deg: 75.0,
            near: 0.1,
        }
    }
}

/// A point on screen, in pixels, with its perspective size factor.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Camera {
    pub fn project(&self, p: Point3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.distance - p.z;
        if depth <= self.near || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let focal = (height / 2.0) / (self.fov_deg.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            x: width / 2.0 + p.x * scale,
            y: height / 2.0 - p.y * scale,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scatter_stays_inside_the_cube() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = scatter(&mut rng, 2_000, 10.0);
        assert_eq!(points.len(), 2_000);
        assert!(points
            .iter()
            .all(|p| p.x.abs() <= 5.0 && p.y.abs() <= 5.0 && p.z.abs() <= 5.0));
    }

    #[test]
    fn rotation_preserves_distance() {
        let p = Point3 { x: 1.5, y: -2.0, z: 3.25 };
        for t in [0.0, 1.0, 12.5, 600.0] {
            let (rx, ry) = rotation_at(t);
            assert!(close(rotate(p, rx, ry).length(), p.length()));
        }
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = Point3 { x: 0.3, y: 0.2, z: -0.1 };
        let r = rotate(p, 0.0, 0.0);
        assert!(close(r.x, p.x) && close(r.y, p.y) && close(r.z, p.z));
    }

    #[test]
    fn origin_projects_to_the_canvas_center() {
        let cam = Camera::default();
        let projected = cam.project(Point3 { x: 0.0, y: 0.0, z: 0.0 }, 800.0, 600.0).unwrap();
        assert!(close(projected.x, 400.0));
        assert!(close(projected.y, 300.0));
    }

    #[test]
    fn nearer_points_draw_larger_and_behind_camera_is_culled() {
        let cam = Camera::default();
        let far = cam.project(Point3 { x: 0.0, y: 0.0, z: -4.0 }, 800.0, 600.0).unwrap();
        let near = cam.project(Point3 { x: 0.0, y: 0.0, z: 4.0 }, 800.0, 600.0).unwrap();
        assert!(near.scale > far.scale);
        assert!(cam.project(Point3 { x: 0.0, y: 0.0, z: 6.0 }, 800.0, 600.0).is_none());
        assert!(cam.project(Point3 { x: 0.0, y: 0.0, z: 0.0 }, 0.0, 600.0).is_none());
    }

    #[test]
    fn up_is_up_on_screen() {
        let cam = Camera::default();
        let above = cam.project(Point3 { x: 0.0, y: 1.0, z: 0.0 }, 800.0, 600.0).unwrap();
        assert!(above.y < 300.0);
    }
}
