pub mod circle;
pub mod line;
pub mod point;
pub mod polygon;
pub mod rectangle;
pub mod shape;
pub mod text;
pub mod triangle;

pub use circle::Circle;
pub use line::{Line, Segment};
pub use point::Point;
pub use polygon::Polygon;
pub use rectangle::{Rectangle, Square};
pub use shape::Shape;
pub use text::parse_vertices;
pub use triangle::Triangle;
