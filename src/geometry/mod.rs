use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;

use crate::errors::Result;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// 2D Point
/// Only used for rendering and hit testing, never by the path engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }

    /// Divide both coordinates by a scale factor
    /// Converts a screen offset into canvas coordinates
    pub fn unscale(&self, scale: f64) -> Self {
        Self { x: self.x / scale, y: self.y / scale }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}


/// Find the key whose point lies closest to `target`, within `radius`
/// Builds a throwaway kd-tree, graphs handled here are tiny
pub fn nearest_within<'a, K, I>(points: I, target: &Point, radius: f64) -> Result<Option<K>>
where
    K: Clone + 'a,
    I: IntoIterator<Item = (&'a K, &'a Point)>,
    {

    let mut candidates: Vec<(K, Point)> = Vec::new();
    let mut tree: KdTree<f64, usize, [f64; 2]> = KdTree::new(2);

    for (key, point) in points {
        tree.add([point.x, point.y], candidates.len())?;
        candidates.push((key.clone(), *point));
    }

    let nearest = tree.nearest(&[target.x, target.y], 1, &kt_squared_euclidean)?;

    match nearest.first() {
        Some(&(_, &idx)) if candidates[idx].1.distance(target) <= radius => {
            Ok(Some(candidates[idx].0.clone()))
        }
        _ => Ok(None),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(Point::new(1.0, 1.0).distance(&Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(10.0, 20.0) + Point::new(1.0, -2.0);
        assert_eq!(p, Point::new(11.0, 18.0));
        assert_eq!(p - Point::new(11.0, 18.0), Point::default());
        assert_eq!(Point::new(20.0, 10.0).unscale(2.0), Point::new(10.0, 5.0));
    }

    #[test]
    fn test_nearest_within() {
        let keys = vec!["a".to_string(), "b".to_string()];
        let points = vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)];

        let hit = nearest_within(keys.iter().zip(points.iter()), &Point::new(95.0, 3.0), 16.0).unwrap();
        assert_eq!(hit, Some("b".to_string()));

        // exactly on the radius still counts
        let edge = nearest_within(keys.iter().zip(points.iter()), &Point::new(100.0, 16.0), 16.0).unwrap();
        assert_eq!(edge, Some("b".to_string()));

        // Outside of every radius
        let miss = nearest_within(keys.iter().zip(points.iter()), &Point::new(50.0, 0.0), 16.0).unwrap();
        assert_eq!(miss, None);
    }

    #[test]
    fn test_nearest_within_empty() {
        let keys: Vec<String> = vec![];
        let points: Vec<Point> = vec![];
        let hit = nearest_within(keys.iter().zip(points.iter()), &Point::new(0.0, 0.0), 16.0).unwrap();
        assert_eq!(hit, None);
    }
}
