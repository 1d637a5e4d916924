//! Static board topology per variant.
//!
//! Two lookups per point:
//! - `neighbors`: points reachable by one slide
//! - `mill_lines`: pairs of points that form a mill together with the point
//!
//! Twelve Men's Morris adds the four corner diagonals (0-3-6, 2-5-8,
//! 15-18-21, 17-20-23) as both connections and mill lines. The tables are
//! selected once per game through `Variant::topology`.

use crate::core::{Point, Variant, POINT_COUNT};

/// Adjacency and mill lines for one variant.
#[derive(Debug)]
pub struct Topology {
    neighbors: [&'static [u8]; POINT_COUNT],
    mills: [&'static [[u8; 2]]; POINT_COUNT],
}

impl Topology {
    /// Topology for a variant.
    #[must_use]
    pub fn of(variant: Variant) -> &'static Topology {
        match variant {
            Variant::Nine => &NINE,
            Variant::Twelve => &TWELVE,
        }
    }

    /// Points one slide away from `point`, ascending.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        self.neighbors[point.index()].iter().map(|&i| Point::new(i))
    }

    /// Are `a` and `b` connected by a line segment?
    #[must_use]
    pub fn are_adjacent(&self, a: Point, b: Point) -> bool {
        self.neighbors[a.index()].contains(&(b.index() as u8))
    }

    /// Pairs completing a mill through `point`.
    pub fn mill_lines(&self, point: Point) -> impl Iterator<Item = [Point; 2]> + '_ {
        self.mills[point.index()]
            .iter()
            .map(|&[a, b]| [Point::new(a), Point::new(b)])
    }

    /// Number of distinct mill lines on the board.
    #[must_use]
    pub fn mill_count(&self) -> usize {
        self.mills.iter().map(|lines| lines.len()).sum::<usize>() / 3
    }
}

impl Variant {
    /// Topology tables for this variant.
    #[must_use]
    pub fn topology(self) -> &'static Topology {
        Topology::of(self)
    }
}

static NINE: Topology = Topology {
    neighbors: [
        &[1, 9],
        &[0, 2, 4],
        &[1, 14],
        &[4, 10],
        &[1, 3, 5, 7],
        &[4, 13],
        &[7, 11],
        &[4, 6, 8],
        &[7, 12],
        &[0, 10, 21],
        &[3, 9, 11, 18],
        &[6, 10, 15],
        &[8, 13, 17],
        &[5, 12, 14, 20],
        &[2, 13, 23],
        &[11, 16],
        &[15, 17, 19],
        &[12, 16],
        &[10, 19],
        &[16, 18, 20, 22],
        &[13, 19],
        &[9, 22],
        &[19, 21, 23],
        &[14, 22],
    ],
    mills: [
        &[[1, 2], [9, 21]],
        &[[0, 2], [4, 7]],
        &[[0, 1], [14, 23]],
        &[[4, 5], [10, 18]],
        &[[3, 5], [1, 7]],
        &[[3, 4], [13, 20]],
        &[[7, 8], [11, 15]],
        &[[6, 8], [1, 4]],
        &[[6, 7], [12, 17]],
        &[[0, 21], [10, 11]],
        &[[9, 11], [3, 18]],
        &[[9, 10], [6, 15]],
        &[[13, 14], [8, 17]],
        &[[12, 14], [5, 20]],
        &[[12, 13], [2, 23]],
        &[[16, 17], [6, 11]],
        &[[15, 17], [19, 22]],
        &[[15, 16], [8, 12]],
        &[[19, 20], [3, 10]],
        &[[18, 20], [16, 22]],
        &[[18, 19], [5, 13]],
        &[[22, 23], [0, 9]],
        &[[21, 23], [16, 19]],
        &[[21, 22], [2, 14]],
    ],
};

static TWELVE: Topology = Topology {
    neighbors: [
        &[1, 3, 9],
        &[0, 2, 4],
        &[1, 5, 14],
        &[0, 4, 6, 10],
        &[1, 3, 5, 7],
        &[2, 4, 8, 13],
        &[3, 7, 11],
        &[4, 6, 8],
        &[5, 7, 12],
        &[0, 10, 21],
        &[3, 9, 11, 18],
        &[6, 10, 15],
        &[8, 13, 17],
        &[5, 12, 14, 20],
        &[2, 13, 23],
        &[11, 16, 18],
        &[15, 17, 19],
        &[12, 16, 20],
        &[10, 15, 19, 21],
        &[16, 18, 20, 22],
        &[13, 17, 19, 23],
        &[9, 18, 22],
        &[19, 21, 23],
        &[14, 20, 22],
    ],
    mills: [
        &[[1, 2], [9, 21], [3, 6]],
        &[[0, 2], [4, 7]],
        &[[0, 1], [14, 23], [5, 8]],
        &[[4, 5], [10, 18], [0, 6]],
        &[[3, 5], [1, 7]],
        &[[3, 4], [13, 20], [2, 8]],
        &[[7, 8], [11, 15], [0, 3]],
        &[[6, 8], [1, 4]],
        &[[6, 7], [12, 17], [2, 5]],
        &[[0, 21], [10, 11]],
        &[[9, 11], [3, 18]],
        &[[9, 10], [6, 15]],
        &[[13, 14], [8, 17]],
        &[[12, 14], [5, 20]],
        &[[12, 13], [2, 23]],
        &[[16, 17], [6, 11], [18, 21]],
        &[[15, 17], [19, 22]],
        &[[15, 16], [8, 12], [20, 23]],
        &[[19, 20], [3, 10], [15, 21]],
        &[[18, 20], [16, 22]],
        &[[18, 19], [5, 13], [17, 23]],
        &[[22, 23], [0, 9], [15, 18]],
        &[[21, 23], [16, 19]],
        &[[21, 22], [2, 14], [17, 20]],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [Variant; 2] = [Variant::Nine, Variant::Twelve];

    #[test]
    fn test_adjacency_is_symmetric() {
        for variant in VARIANTS {
            let topology = variant.topology();
            for a in Point::all() {
                for b in topology.neighbors(a) {
                    assert!(
                        topology.are_adjacent(b, a),
                        "{variant}: {a} -> {b} has no reverse edge"
                    );
                }
            }
        }
    }

    #[test]
    fn test_neighbors_ascending() {
        for variant in VARIANTS {
            let topology = variant.topology();
            for point in Point::all() {
                let list: Vec<_> = topology.neighbors(point).collect();
                let mut sorted = list.clone();
                sorted.sort();
                assert_eq!(list, sorted);
            }
        }
    }

    #[test]
    fn test_mill_lines_are_consistent() {
        for variant in VARIANTS {
            let topology = variant.topology();
            for point in Point::all() {
                for [a, b] in topology.mill_lines(point) {
                    let mut line = [point, a, b];
                    line.sort();
                    for member in [a, b] {
                        let found = topology.mill_lines(member).any(|[x, y]| {
                            let mut other = [member, x, y];
                            other.sort();
                            other == line
                        });
                        assert!(found, "{variant}: line {line:?} missing at {member}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_mill_counts() {
        assert_eq!(Variant::Nine.topology().mill_count(), 16);
        assert_eq!(Variant::Twelve.topology().mill_count(), 20);
    }

    #[test]
    fn test_twelve_diagonal_points_have_three_lines() {
        let topology = Variant::Twelve.topology();
        let diagonal = [0, 2, 3, 5, 6, 8, 15, 17, 18, 20, 21, 23];
        for point in Point::all() {
            let expected = if diagonal.contains(&point.index()) { 3 } else { 2 };
            assert_eq!(topology.mill_lines(point).count(), expected, "point {point}");
        }
        for point in Point::all() {
            assert_eq!(Variant::Nine.topology().mill_lines(point).count(), 2);
        }
    }

    #[test]
    fn test_twelve_diagonal_connections() {
        let nine = Variant::Nine.topology();
        let twelve = Variant::Twelve.topology();
        assert!(!nine.are_adjacent(Point::new(0), Point::new(3)));
        assert!(twelve.are_adjacent(Point::new(0), Point::new(3)));
        assert!(twelve.are_adjacent(Point::new(20), Point::new(23)));
        assert!(!twelve.are_adjacent(Point::new(0), Point::new(6)));
    }
}
