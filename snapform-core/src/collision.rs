/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Picks the drop target under the pointer.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Among the targets whose rectangle holds `pointer`, returns the one whose
/// center is nearest. Equal distances keep the earlier target.
pub fn closest_center<'a, T>(pointer: Point, targets: &'a [(T, Rect)]) -> Option<&'a T> {
    targets
        .iter()
        .filter(|(_, rect)| rect.contains(pointer))
        .fold(None::<(&T, f64)>, |best, (target, rect)| {
            let d = pointer.distance_sq(rect.center());
            match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((target, d)),
            }
        })
        .map(|(target, _)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_under_pointer() {
        let targets = [("a", Rect::new(0.0, 0.0, 10.0, 10.0))];
        assert_eq!(closest_center(Point::new(50.0, 50.0), &targets), None);
    }

    #[test]
    fn overlap_resolves_to_nearest_center() {
        let targets = [
            ("wide", Rect::new(0.0, 0.0, 200.0, 100.0)),
            ("small", Rect::new(150.0, 40.0, 40.0, 20.0)),
        ];
        assert_eq!(closest_center(Point::new(165.0, 50.0), &targets), Some(&"small"));
        assert_eq!(closest_center(Point::new(100.0, 50.0), &targets), Some(&"wide"));
    }

    #[test]
    fn tie_keeps_first() {
        let targets = [
            ("first", Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("second", Rect::new(0.0, 0.0, 10.0, 10.0)),
        ];
        assert_eq!(closest_center(Point::new(2.0, 2.0), &targets), Some(&"first"));
    }
}
