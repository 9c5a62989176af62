use grid_field::{Field, FieldConfig};
use grid_util::point::Point;

// Generates a 20x10 field with 25% walls and prints a path between the first and the last
// passable cell, where
// - # marks a wall
// - S marks the start
// - G marks the goal
// - o marks the cells in between
//
// An optional first argument is used as seed, so a field can be reproduced.

fn main() {
    let mut config = FieldConfig::new(20, 10).with_wall_probability(25);
    if let Some(seed) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }
    let field = match Field::from_config(&config) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return;
        }
    };
    let passable = (0..field.height() as i32)
        .flat_map(|y| (0..field.width() as i32).map(move |x| Point::new(x, y)))
        .filter(|p| field.is_passable(p))
        .collect::<Vec<Point>>();
    let (Some(&start), Some(&goal)) = (passable.first(), passable.last()) else {
        println!("{field}No passable cells");
        return;
    };
    if start == goal {
        println!("{field}Only one passable cell");
        return;
    }
    let path = field.find_path(start, goal).unwrap_or_default();
    for y in 0..field.height() as i32 {
        let line = (0..field.width() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if p == start {
                    'S'
                } else if p == goal {
                    'G'
                } else if path.contains(&p) {
                    'o'
                } else {
                    field.cell_type(&p).symbol()
                }
            })
            .collect::<String>();
        println!("{line}");
    }
    if path.is_empty() {
        println!("No path from {start} to {goal}");
    } else {
        println!("Path from {start} to {goal} takes {} steps", path.len() - 1);
    }
}
