use bezier_pen::Point;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"[{random()*300:.3f}, {random()*300:.3f}],")
/// ```
pub static POINTS: [[f64; 2]; 10] = [
    [12.408, 271.530],
    [188.262, 44.915],
    [251.772, 230.046],
    [63.981, 117.209],
    [142.370, 8.632],
    [290.115, 164.487],
    [33.604, 205.318],
    [207.941, 289.760],
    [96.527, 71.093],
    [170.844, 152.276],
];

fn point(i: usize) -> Point {
    Point::new(POINTS[i][0], POINTS[i][1])
}

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
#[allow(non_snake_case)]
pub struct Curves {
    pub TRIANGLES: Vec<Vec<Point>>,
    pub QUADS: Vec<Vec<Point>>,
    pub HIGHER: Vec<Vec<Point>>,
}
impl Curves {
    pub fn new() -> Curves {
        Curves {
            TRIANGLES: vec![
                [0, 1, 2].into_iter().map(point).collect(),
                [3, 4, 5].into_iter().map(point).collect(),
                [6, 7, 8].into_iter().map(point).collect(),
                [9, 0, 5].into_iter().map(point).collect(),
            ],
            QUADS: vec![
                [0, 1, 2, 3].into_iter().map(point).collect(),
                [4, 5, 6, 7].into_iter().map(point).collect(),
                [8, 9, 0, 1].into_iter().map(point).collect(),
                [1, 5, 3, 7].into_iter().map(point).collect(),
            ],
            HIGHER: vec![
                (0..10).map(point).collect(),
                (0..10).rev().map(point).collect(),
                [0, 4, 2, 6, 8, 1, 5, 3].into_iter().map(point).collect(),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.TRIANGLES
            .iter()
            .chain(self.QUADS.iter())
            .chain(self.HIGHER.iter())
    }
}
