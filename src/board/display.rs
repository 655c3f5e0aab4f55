use std::fmt;

use super::Board;

impl fmt::Display for Board {
    /// ASCII grid, rank `size` at the top. White pieces are uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;
        let border: String = std::iter::once("   +")
            .chain(std::iter::repeat("---+").take(size as usize))
            .collect();

        writeln!(f, "{border}")?;
        for rank in (0..size).rev() {
            write!(f, "{:>2} |", rank + 1)?;
            for file in 0..size {
                let ch = self
                    .piece_at(super::Square::new(file, rank))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }

        write!(f, "    ")?;
        for file in 0..size {
            write!(f, " {}  ", (b'a' + file) as char)?;
        }
        writeln!(f)
    }
}
