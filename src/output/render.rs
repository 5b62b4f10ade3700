//! ASCII drawings of shapes.

use std::fmt;

use crate::compute::Shape;

/// Character for an occupied cell in the default drawing.
pub const FILLED: char = '#';
/// Character for an empty cell in the default drawing.
pub const EMPTY: char = ' ';

/// Draw `shape` over its bounding box: one line per y, one column per x,
/// every line terminated by a newline.
pub fn render_with(shape: &Shape, filled: char, empty: char) -> String {
    let (width, height) = (shape.width(), shape.height());
    let mut grid = vec![vec![empty; width]; height];

    for cell in shape.cells() {
        grid[cell.y as usize][cell.x as usize] = filled;
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_with(self, FILLED, EMPTY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Cell;

    #[test]
    fn test_render_l_tetromino() {
        let l = Shape::new([
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
        ]);
        assert_eq!(l.to_string(), "# \n# \n##\n");
    }

    #[test]
    fn test_render_custom_markers() {
        let t = Shape::new([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(1, 1),
        ]);
        assert_eq!(render_with(&t, 'O', '.'), "OOO\n.O.\n");
    }

    #[test]
    fn test_render_empty_shape() {
        assert_eq!(Shape::new(Vec::<Cell>::new()).to_string(), "");
    }
}
