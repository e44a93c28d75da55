use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(point1: Vec3, point2: Vec3) -> AABB {
        let min = point1.min(point2);
        let max = point1.max(point2);
        AABB { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<AABB> {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(points.fold(AABB::new(first, first), |aabb, point| AABB {
            min: aabb.min.min(point),
            max: aabb.max.max(point),
        }))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_spans_all_points() {
        let aabb = AABB::from_points([
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-4.0, 5.0, 0.0),
            Vec3::new(2.0, 0.0, -1.0),
        ])
        .unwrap();

        assert_eq!(aabb.min, Vec3::new(-4.0, -2.0, -1.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 5.0, 3.0));
        assert_eq!(aabb.center(), Vec3::new(-1.0, 1.5, 1.0));
        assert_eq!(aabb.size(), Vec3::new(6.0, 7.0, 4.0));
    }

    #[test]
    fn from_no_points_is_none() {
        assert!(AABB::from_points(std::iter::empty()).is_none());
    }
}
