/// One cell of the punchcard grid: either a hole or blank card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stitch {
    #[default]
    Unpunched,
    Punched,
}

impl Stitch {
    /// The opposite value, used when a click or key press flips a cell.
    pub fn toggled(self) -> Self {
        match self {
            Stitch::Unpunched => Stitch::Punched,
            Stitch::Punched => Stitch::Unpunched,
        }
    }

    /// Character used in the text format: `x` punched, `-` unpunched.
    pub fn to_char(self) -> char {
        match self {
            Stitch::Unpunched => '-',
            Stitch::Punched => 'x',
        }
    }

    /// Permissive mapping from the text format: exactly `x` is punched,
    /// anything else is unpunched. Malformed input never errors here.
    pub fn from_char(c: char) -> Self {
        if c == 'x' { Stitch::Punched } else { Stitch::Unpunched }
    }
}
