use grid_field::{Field, Selection};
use grid_util::point::Point;

// Replays a sequence of clicks on a fixed 5x4 field with shape
//  _____
// |.....|
// |.###.|
// |...#.|
// |.#...|
//  _____
// and prints how the selection reacts to each of them.

fn main() {
    let field: Field = "
        .....
        .###.
        ...#.
        .#..."
        .parse()
        .expect("map is well formed");
    let clicks = [(0, 0), (2, 2), (2, 1), (2, 2), (4, 3), (0, 0), (9, 9)];
    let mut selection = Selection::new();
    for (x, y) in clicks {
        let cell = Point::new(x, y);
        match selection.click(&field, cell) {
            Ok(()) => println!("{cell}: {:?}", selection),
            Err(e) => println!("{cell}: rejected, {e}"),
        }
    }
}
