//! Fuzzes the pathfinding system by checking for many random fields that a path is found exactly
//! when the goal is on the same connected component, that it is as short as a reference
//! distance table says and that it is a proper chain of orthogonal steps.
use grid_field::{is_valid_path, Cell, Field};
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_point(field: &Field, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..field.width()) as i32,
        rng.gen_range(0..field.height()) as i32,
    )
}

/// Step distances from `start` to every cell, computed by flooding the field directly.
fn distance_table(field: &Field, start: Point) -> Vec<Option<usize>> {
    let w = field.width();
    let ix = |p: Point| p.y as usize * w + p.x as usize;
    let mut dist = vec![None; w * field.height()];
    dist[ix(start)] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = dist[ix(p)].unwrap();
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let n = Point::new(p.x + dx, p.y + dy);
            if field.contains(&n) && field.is_passable(&n) && dist[ix(n)].is_none() {
                dist[ix(n)] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn visualize_field(field: &Field, start: &Point, end: &Point) {
    for y in 0..field.height() as i32 {
        for x in 0..field.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if field.cell_type(&p) == Cell::Blocked {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_FIELDS: usize = 2000;
    const QUERIES: usize = 5;
    let mut rng = StdRng::seed_from_u64(0);
    for wall_probability in [0, 20, 40, 60] {
        for _ in 0..N_FIELDS {
            let field = Field::with_rng(N, N, wall_probability, &mut rng);
            for _ in 0..QUERIES {
                let start = random_point(&field, &mut rng);
                let goal = random_point(&field, &mut rng);
                if start == goal || !field.is_passable(&start) || !field.is_passable(&goal) {
                    continue;
                }
                let distances = distance_table(&field, start);
                let distance = distances[goal.y as usize * N + goal.x as usize];
                let path = field.find_path(start, goal);
                // Show the field if the result disagrees with the reference
                if path.as_ref().map(|p| p.len() - 1) != distance {
                    visualize_field(&field, &start, &goal);
                }
                assert_eq!(path.as_ref().map(|p| p.len() - 1), distance);
                assert_eq!(path.is_some(), field.graph().reachable(&start, &goal));
                if let Some(path) = path {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&goal));
                    assert!(is_valid_path(&path));
                    assert!(path.iter().all(|p| field.is_passable(p)));
                }
            }
        }
    }
}

/// Reversing a query gives a path of the same length.
#[test]
fn fuzz_symmetric_distance() {
    const N_FIELDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_FIELDS {
        let field = Field::with_rng(8, 6, 30, &mut rng);
        let start = random_point(&field, &mut rng);
        let goal = random_point(&field, &mut rng);
        if start == goal || !field.is_passable(&start) || !field.is_passable(&goal) {
            continue;
        }
        let there = field.find_path(start, goal).map(|p| p.len());
        let back = field.find_path(goal, start).map(|p| p.len());
        assert_eq!(there, back);
    }
}

/// Every node of an open field has one neighbour per in-bounds direction.
#[test]
fn open_fields_are_fully_linked() {
    for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 2), (7, 4)] {
        let field = Field::with_seed(w, h, 0, 0);
        let graph = field.graph();
        assert_eq!(graph.node_count(), w * h);
        let total_links: usize = (0..h as i32)
            .flat_map(|y| (0..w as i32).map(move |x| Point::new(x, y)))
            .map(|p| graph.neighbours(&p).unwrap().len())
            .sum();
        // Each undirected edge is listed by both of its end points
        assert_eq!(total_links, 2 * ((w - 1) * h + w * (h - 1)));
    }
}

#[test]
fn regenerate_replaces_field() {
    let mut field = Field::with_seed(6, 6, 100, 5);
    assert_eq!(field.passable_count(), 0);
    field.regenerate_with_seed(5, 5, 0, 5);
    assert_eq!(field.passable_count(), 25);
    let path = field
        .find_path(Point::new(0, 0), Point::new(4, 4))
        .unwrap();
    assert_eq!(path.len() - 1, 8);
}

#[test]
fn enclosed_cell_is_unreachable() {
    let field: Field = "
        .....
        ..#..
        .#.#.
        ..#..
        ....."
        .parse()
        .unwrap();
    assert_eq!(field.find_path(Point::new(0, 0), Point::new(2, 2)), None);
    assert_eq!(field.find_path(Point::new(2, 2), Point::new(4, 4)), None);
    assert!(field.find_path(Point::new(0, 0), Point::new(4, 4)).is_some());
}
