use grid_util::point::Point;

/// A distance estimate from a cell to the goal, used to order A*'s frontier.
/// Implementations are passed into the solver by reference; selection
/// happens once at the configuration boundary, not inside the search loop.
pub trait Heuristic {
    fn estimate(&self, cell: &Point, goal: &Point) -> u32;
}

/// Manhattan distance. Admissible under the elevation cost model: every step
/// costs at least 1, so the estimate never exceeds the true remaining cost.
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, cell: &Point, goal: &Point) -> u32 {
        cell.manhattan_distance(goal) as u32
    }
}

/// Squared Euclidean distance, i.e. without the square root. The square can
/// overestimate the true remaining cost, so this heuristic is not admissible
/// in general and A* paths found with it are not guaranteed cost-optimal.
/// That is a known property of this estimate, kept as-is.
pub struct EuclideanSq;

impl Heuristic for EuclideanSq {
    fn estimate(&self, cell: &Point, goal: &Point) -> u32 {
        let dx = cell.x - goal.x;
        let dy = cell.y - goal.y;
        (dx * dx + dy * dy) as u32
    }
}

/// Heuristic selection as validated at the configuration boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum HeuristicKind {
    Manhattan,
    Euclidean,
}

impl HeuristicKind {
    pub fn as_heuristic(&self) -> &'static dyn Heuristic {
        match self {
            HeuristicKind::Manhattan => &Manhattan,
            HeuristicKind::Euclidean => &EuclideanSq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axis_distances() {
        let estimate = Manhattan.estimate(&Point::new(1, 2), &Point::new(4, 0));
        assert_eq!(estimate, 5);
    }

    #[test]
    fn euclidean_is_the_squared_distance() {
        let estimate = EuclideanSq.estimate(&Point::new(0, 0), &Point::new(3, 4));
        assert_eq!(estimate, 25);
    }

    #[test]
    fn euclidean_overestimates_along_an_axis() {
        // Three unit steps away, but the squared estimate says nine: the
        // estimate is not admissible.
        let estimate = EuclideanSq.estimate(&Point::new(0, 0), &Point::new(3, 0));
        assert_eq!(estimate, 9);
    }
}
