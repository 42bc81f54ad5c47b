use serde::{Deserialize, Serialize};

/// Decorative plants placed on dry grass columns.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum DecorationKind {
    Poppy,
    Dandelion,
    Cornflower,
    Tulip,
    TallGrass,
    Fern,
}

impl DecorationKind {
    /// Catalog the generator picks from uniformly.
    pub const ALL: [DecorationKind; 6] = [
        DecorationKind::Poppy,
        DecorationKind::Dandelion,
        DecorationKind::Cornflower,
        DecorationKind::Tulip,
        DecorationKind::TallGrass,
        DecorationKind::Fern,
    ];
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum BlockKind {
    Grass,
    Sand,
    Dirt,
    Stone,
    Water,
    Wood,
    Leaves,
    Decoration(DecorationKind),
}

impl BlockKind {
    pub fn is_solid(&self) -> bool {
        !matches!(self, BlockKind::Water | BlockKind::Decoration(_))
    }

    pub fn is_fluid(&self) -> bool {
        matches!(self, BlockKind::Water)
    }

    pub fn is_decoration(&self) -> bool {
        matches!(self, BlockKind::Decoration(_))
    }
}
