//! Tile kinds and their layout codes

/// One cell of the store grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor,
    Wall,
    Shelf,
    /// Store entrance (customers only, so the player bumps into it)
    Door,
    /// Checkout counter
    Counter,
}

impl Tile {
    /// Does this tile block the player?
    pub fn is_solid(self) -> bool {
        match self {
            Tile::Floor => false,
            Tile::Wall | Tile::Shelf | Tile::Door | Tile::Counter => true,
        }
    }

    /// Decode a layout character.
    ///
    /// `N` marks a purchase spot in the store layout; the player sees it as floor.
    pub fn from_code(code: char) -> Option<Tile> {
        match code {
            '.' | 'N' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            'S' => Some(Tile::Shelf),
            'D' => Some(Tile::Door),
            'C' => Some(Tile::Counter),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tile::Floor => "Floor",
            Tile::Wall => "Wall",
            Tile::Shelf => "Shelf",
            Tile::Door => "Door",
            Tile::Counter => "Counter",
        }
    }
}
