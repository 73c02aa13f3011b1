use rrt_planner::math::Point2d;
use rrt_planner::{Config, Obstacle, Planner};

fn main() {
    println!("RRT path planning demo");

    let obstacles = vec![
        Obstacle::new(2.0, 2.0, 2.0, 2.0),
        Obstacle::new(6.0, 1.0, 1.0, 3.0),
        Obstacle::new(1.0, 6.0, 3.0, 1.0),
    ];
    let config = Config {
        step_size: 0.5,
        max_iterations: 2000,
        goal_sample_rate: 0.1,
        goal_tolerance: 0.3,
        ..Default::default()
    };

    let mut planner = Planner::new(obstacles, config);
    planner.set_bounds(0.0, 10.0, 0.0, 10.0);

    let start = Point2d::new(1.0, 1.0);
    let goal = Point2d::new(9.0, 9.0);
    let path = planner.find_path(start, goal);

    if path.is_empty() {
        println!("No path found!");
        return;
    }

    println!("Found path with {} points:", path.len());
    let waypoints = path
        .iter()
        .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
        .collect::<Vec<_>>();
    println!("{}", waypoints.join(" -> "));
}
