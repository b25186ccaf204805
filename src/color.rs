/// Node and token-end colors. Concrete colors start at 1.
pub type Color = usize;

/// The null color: a node carrying it has not been colored yet.
pub const UNCOLORED: Color = 0;
