#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row step a pawn of this colour advances by. Row 0 is rank 8.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices in the order they are generated.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Lowercase letter used for this kind in move and position notation.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parses the promotion suffix of a move (`q`, `r`, `b`, `n`, either case).
    pub const fn from_promotion_byte(b: u8) -> Option<PieceKind> {
        match b.to_ascii_lowercase() {
            b'q' => Some(PieceKind::Queen),
            b'r' => Some(PieceKind::Rook),
            b'b' => Some(PieceKind::Bishop),
            b'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }
}

/// The twelve piece symbols, indexed by `[color][kind]`.
pub const PIECE_SYMBOLS: [[char; 6]; 2] = [
    ['P', 'N', 'B', 'R', 'Q', 'K'],
    ['p', 'n', 'b', 'r', 'q', 'k'],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Classifies a piece symbol; uppercase is White, lowercase is Black.
    pub fn from_symbol(symbol: char) -> Option<Piece> {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                if PIECE_SYMBOLS[color.idx()][kind.idx()] == symbol {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    pub fn symbol(self) -> char {
        PIECE_SYMBOLS[self.color.idx()][self.kind.idx()]
    }
}

/// A grid coordinate. Row 0 is rank 8, column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Bounds-checked construction from signed coordinates.
    pub fn at(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        Square::at(self.row as i8 + drow, self.col as i8 + dcol)
    }

    /// File letter and rank digit, e.g. `b'e', b'4'`.
    pub const fn from_bytes(file: u8, rank: u8) -> Option<Square> {
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square::new(b'8' - rank, file - b'a'))
    }

    pub fn from_coord(coord: &str) -> Option<Square> {
        match coord.as_bytes() {
            [file, rank] => Square::from_bytes(*file, *rank),
            _ => None,
        }
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// All 64 squares, rank 8 first, file a first within a rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promo: Option<PieceKind>,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promo: None,
        }
    }

    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promo: Some(kind),
        }
    }

    /// Builds a move from coordinate text at compile time. Malformed text
    /// fails const evaluation.
    pub const fn literal(text: &str) -> Move {
        let b = text.as_bytes();
        assert!(b.len() == 4 || b.len() == 5, "move literal must be 4 or 5 bytes");
        let (from, to) = match (Square::from_bytes(b[0], b[1]), Square::from_bytes(b[2], b[3])) {
            (Some(from), Some(to)) => (from, to),
            _ => panic!("move literal has an invalid square"),
        };
        if b.len() == 5 {
            match PieceKind::from_promotion_byte(b[4]) {
                Some(kind) => Move::promoting(from, to, kind),
                None => panic!("move literal has an invalid promotion letter"),
            }
        } else {
            Move::new(from, to)
        }
    }
}
