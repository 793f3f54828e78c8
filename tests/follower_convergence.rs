//! Convergence and step-size properties of the path follower.

use gridwalk::{Cell, FollowerMode, FollowerState, Path, PathSearch, Vec3};
use proptest::prelude::*;

const TOLERANCE: f32 = 1e-5;

fn direction() -> impl Strategy<Value = Vec3> {
    (0.0f32..std::f32::consts::TAU, -1.0f32..1.0).prop_map(|(azimuth, height)| {
        let ring = (1.0 - height * height).sqrt();
        Vec3::new(ring * azimuth.cos(), height, ring * azimuth.sin())
    })
}

fn cell() -> impl Strategy<Value = Cell> {
    (-4i32..=4, -2i32..=2, -4i32..=4).prop_map(|(x, y, z)| Cell::new(x, y, z))
}

fn route(start: Cell, goal: Cell) -> Path {
    PathSearch::with_defaults().find_path(start.position(), goal.position())
}

/// Generous upper bound on ticks needed to consume `path` from `position`.
fn tick_budget(position: Vec3, path: &Path, step: f32) -> usize {
    let lead = path.front().map_or(0.0, |front| position.distance(front));
    let travel = lead + path.length();
    2 * path.len() + (2.0 * travel / step).ceil() as usize + 10
}

#[test]
fn test_scenario_route_converges_without_smoothing() {
    let path = route(Cell::new(2, 0, 2), Cell::origin());
    let mut follower =
        FollowerState::new(Vec3::new(2.5, 0.0, 2.5), 0.1).with_corner_smoothing(false);
    follower.install_path(path);

    let mut ticks = 0;
    while follower.mode() == FollowerMode::Following && ticks < 100 {
        assert!(follower.tick().displacement <= 0.1 + TOLERANCE);
        ticks += 1;
    }
    assert_eq!(follower.mode(), FollowerMode::Idle);
    assert!(follower.position().length() <= 0.1 + TOLERANCE);
}

proptest! {
    #[test]
    fn prop_single_waypoint_takes_ceil_ticks(
        heading in direction(),
        distance in 0.01f32..5.0,
        step in 0.05f32..1.0,
    ) {
        let ratio = distance as f64 / step as f64;
        prop_assume!(ratio.fract() > 0.02 && ratio.fract() < 0.98);

        let waypoint = heading * distance;
        let mut follower = FollowerState::new(Vec3::ZERO, step);
        follower.install_path(Path::from_waypoints(vec![waypoint]));

        let expected = ratio.ceil() as usize;
        let mut ticks = 0;
        while follower.mode() == FollowerMode::Following && ticks <= expected {
            let report = follower.tick();
            prop_assert!(report.displacement <= step + TOLERANCE);
            ticks += 1;
        }

        prop_assert_eq!(follower.mode(), FollowerMode::Idle);
        prop_assert_eq!(ticks, expected);
        prop_assert!(follower.position().distance(waypoint) <= step + TOLERANCE);
    }

    #[test]
    fn prop_smoothed_route_converges(
        start in cell(),
        goal in cell(),
        offset in direction(),
        step in 0.05f32..0.5,
    ) {
        let path = route(start, goal);
        let position = start.position() + offset * 0.5;
        let budget = tick_budget(position, &path, step);
        let mut follower = FollowerState::new(position, step);
        follower.install_path(path);

        let mut remaining = follower.path().len();
        let mut ticks = 0;
        while follower.mode() == FollowerMode::Following && ticks < budget {
            let report = follower.tick();
            prop_assert!(report.displacement <= 2.0 * step + TOLERANCE);
            prop_assert!(follower.path().len() <= remaining);
            remaining = follower.path().len();
            ticks += 1;
        }

        prop_assert_eq!(follower.mode(), FollowerMode::Idle);
        prop_assert!(follower.position().distance(goal.position()) <= 2.0 * step + TOLERANCE);
    }

    #[test]
    fn prop_unsmoothed_drops_only_within_step(
        start in cell(),
        goal in cell(),
        offset in direction(),
        step in 0.05f32..0.5,
    ) {
        let path = route(start, goal);
        let position = start.position() + offset * 0.5;
        let budget = tick_budget(position, &path, step);
        let mut follower = FollowerState::new(position, step).with_corner_smoothing(false);
        follower.install_path(path);

        let mut ticks = 0;
        while let Some(front) = follower.path().front() {
            prop_assert!(ticks < budget);
            let before = follower.position();
            let report = follower.tick();
            prop_assert!(report.displacement <= step + TOLERANCE);
            if report.dropped > 0 {
                prop_assert_eq!(report.dropped, 1);
                prop_assert!(before.distance(front) <= step);
                prop_assert_eq!(report.position, before);
            }
            ticks += 1;
        }

        prop_assert!(follower.position().distance(goal.position()) <= step + TOLERANCE);
    }
}
