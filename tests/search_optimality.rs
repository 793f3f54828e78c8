//! Search properties checked against a brute-force Dijkstra oracle on small boxes.

use gridwalk::{
    edge_cost, Cell, CellBounds, Path, PathSearch, SearchConfig, SearchRegion, SearchStatus,
};
use pathfinding::prelude::dijkstra;
use proptest::prelude::*;

const SCALE: f64 = 1_000_000.0;

/// Minimum route cost between two cells, searching every cell of `bounds`.
fn oracle_cost(start: Cell, goal: Cell, bounds: CellBounds) -> Option<f64> {
    dijkstra(
        &start,
        |cell: &Cell| {
            let from = *cell;
            from.neighbors()
                .into_iter()
                .filter(|n| bounds.contains(*n))
                .map(move |n| (n, (edge_cost(from, n) * SCALE).round() as u64))
                .collect::<Vec<_>>()
        },
        |cell| *cell == goal,
    )
    .map(|(_, cost)| cost as f64 / SCALE)
}

fn route_cells(path: &Path) -> Vec<Cell> {
    path.waypoints().map(Cell::from_world).collect()
}

fn route_cost(path: &Path) -> f64 {
    route_cells(path)
        .windows(2)
        .map(|pair| edge_cost(pair[0], pair[1]))
        .sum()
}

fn small_cell() -> impl Strategy<Value = Cell> {
    (-3i32..=3, -2i32..=2, -3i32..=3).prop_map(|(x, y, z)| Cell::new(x, y, z))
}

#[test]
fn test_matches_oracle_on_fixed_pairs() {
    let search = PathSearch::with_defaults();
    let bounds = CellBounds::new(Cell::new(-8, -8, -8), Cell::new(8, 8, 8));
    let pairs = [
        (Cell::new(2, 0, 2), Cell::new(0, 0, 0)),
        (Cell::new(-3, 1, 4), Cell::new(3, -2, -1)),
        (Cell::new(0, 0, 0), Cell::new(5, 1, 2)),
        (Cell::new(1, 1, 1), Cell::new(1, 1, 1)),
    ];

    for (start, goal) in pairs {
        let result = search.search_cells(start, goal);
        let expected = oracle_cost(start, goal, bounds).unwrap();
        assert_eq!(result.status, SearchStatus::Found);
        assert!(
            (route_cost(&result.path) - expected).abs() < 1e-3,
            "{} -> {}: got {}, oracle {}",
            start,
            goal,
            route_cost(&result.path),
            expected
        );
    }
}

#[test]
fn test_unbounded_region_finds_same_cost() {
    let bounded = PathSearch::with_defaults();
    let unbounded = PathSearch::new(SearchConfig::default().with_region(SearchRegion::Unbounded));
    let start = Cell::new(-4, 2, 0);
    let goal = Cell::new(3, -1, 5);
    let a = bounded.search_cells(start, goal).cost.unwrap();
    let b = unbounded.search_cells(start, goal).cost.unwrap();
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn test_cap_exhaustion_is_unreachable() {
    let config = SearchConfig::default()
        .with_region(SearchRegion::Unbounded)
        .with_max_expansions(200);
    let result = PathSearch::new(config).search_cells(Cell::origin(), Cell::new(60, 40, -30));
    assert_eq!(result.status, SearchStatus::ExpansionCapReached);
    assert!(result.path.is_empty());
}

proptest! {
    #[test]
    fn prop_cost_is_optimal(start in small_cell(), goal in small_cell()) {
        let result = PathSearch::with_defaults().search_cells(start, goal);
        let bounds = CellBounds::new(Cell::new(-6, -6, -6), Cell::new(6, 6, 6));
        let expected = oracle_cost(start, goal, bounds).unwrap();
        prop_assert_eq!(result.status, SearchStatus::Found);
        prop_assert!((route_cost(&result.path) - expected).abs() < 1e-3);
        prop_assert!((result.cost.unwrap() - expected).abs() < 1e-3);
    }

    #[test]
    fn prop_endpoints_are_quantized_cells(
        sx in -5.0f32..5.0, sy in -2.0f32..2.0, sz in -5.0f32..5.0,
        gx in -5.0f32..5.0, gy in -2.0f32..2.0, gz in -5.0f32..5.0,
    ) {
        let start = gridwalk::Vec3::new(sx, sy, sz);
        let goal = gridwalk::Vec3::new(gx, gy, gz);
        let path = PathSearch::with_defaults().find_path(start, goal);
        prop_assert_eq!(path.front(), Some(Cell::from_world(start).position()));
        prop_assert_eq!(path.back(), Some(Cell::from_world(goal).position()));

        let cells = route_cells(&path);
        prop_assert!(cells.windows(2).all(|pair| pair[0].is_adjacent(pair[1])));
    }

    #[test]
    fn prop_repeated_searches_agree(start in small_cell(), goal in small_cell()) {
        let search = PathSearch::with_defaults();
        let first = search.search_cells(start, goal).path;
        let second = search.search_cells(start, goal).path;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_goal_outside_fixed_region_is_empty(goal in small_cell()) {
        let region = SearchRegion::Fixed { min: Cell::new(10, 10, 10), max: Cell::new(12, 12, 12) };
        let result = PathSearch::new(SearchConfig::default().with_region(region))
            .search_cells(Cell::new(11, 11, 11), goal);
        prop_assert_eq!(result.status, SearchStatus::OutsideRegion);
        prop_assert!(result.path.is_empty());
    }
}
