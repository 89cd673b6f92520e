//! Literal opening lines consulted before searching.
//!
//! White follows its lines proactively, one ply per turn, while the game
//! still matches. Black answers with counter lines and one fixed reaction to
//! an early queen-or-bishop attack on f7. First match in table order wins.

use chess_core::{Color, Move};

const fn m(text: &str) -> Move {
    Move::literal(text)
}

/// How an entry decides whether it applies to the game so far.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Play the line's next ply while the history is a prefix of it.
    Line(&'static [Move]),
    /// Play `reply` on `turn` if every `(index, choices)` pair finds the
    /// history move at `index` among `choices`.
    Reaction {
        turn: u32,
        plies: &'static [(usize, &'static [Move])],
        reply: Move,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct BookEntry {
    pub name: &'static str,
    pub matcher: Matcher,
}

impl BookEntry {
    /// The move this entry suggests at history index `index`, if it matches.
    fn suggest(&self, turn: u32, index: usize, history: &[Move]) -> Option<Move> {
        match self.matcher {
            Matcher::Line(line) => {
                let next = line.get(index)?;
                (history.get(..index)? == &line[..index]).then_some(*next)
            }
            Matcher::Reaction {
                turn: on_turn,
                plies,
                reply,
            } => {
                let hit = on_turn == turn
                    && plies.iter().all(|(at, choices)| {
                        history.get(*at).is_some_and(|played| choices.contains(played))
                    });
                hit.then_some(reply)
            }
        }
    }
}

/// A suggestion from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookMove {
    pub mv: Move,
    pub line: &'static str,
}

#[derive(Debug)]
pub struct OpeningBook {
    /// Lines for the side that moves first
    pub proactive: &'static [BookEntry],
    /// Counters and reactions for the responding side
    pub responses: &'static [BookEntry],
}

impl OpeningBook {
    /// The built-in table.
    pub fn standard() -> &'static OpeningBook {
        &STANDARD_BOOK
    }

    /// Looks up the move for `side` on fullmove `turn`, given the moves
    /// played so far. Never indexes past the end of `history`.
    pub fn lookup(&self, turn: u32, side: Color, history: &[Move]) -> Option<BookMove> {
        let own_ply = 2 * turn.saturating_sub(1) as usize;
        let (entries, index) = match side {
            Color::White => (self.proactive, own_ply),
            Color::Black => (self.responses, own_ply + 1),
        };

        entries.iter().find_map(|entry| {
            entry.suggest(turn, index, history).map(|mv| BookMove {
                mv,
                line: entry.name,
            })
        })
    }
}

#[rustfmt::skip]
static STANDARD_BOOK: OpeningBook = OpeningBook {
    proactive: &[
        BookEntry {
            name: "Italian Game",
            matcher: Matcher::Line(&[
                m("e2e4"), m("e7e5"), m("g1f3"), m("b8c6"), m("f1c4"), m("f8c5"), m("d2d3"),
            ]),
        },
        BookEntry {
            name: "Smith-Morra Gambit",
            matcher: Matcher::Line(&[
                m("e2e4"), m("c7c5"), m("d2d4"), m("c5d4"), m("c2c3"), m("d4c3"), m("b1c3"),
            ]),
        },
        BookEntry {
            name: "Fried Liver Attack",
            matcher: Matcher::Line(&[
                m("e2e4"), m("e7e5"), m("g1f3"), m("b8c6"), m("f1c4"), m("g8f6"),
                m("f3g5"), m("d7d5"), m("e4d5"), m("f6d5"), m("g5f7"), m("d1f3"),
            ]),
        },
    ],
    responses: &[
        BookEntry {
            name: "Scholar's Mate defence",
            matcher: Matcher::Reaction {
                turn: 2,
                plies: &[
                    (0, &[m("e2e3"), m("e2e4")]),
                    (2, &[m("f1c4"), m("d1h5")]),
                ],
                reply: m("g7g6"),
            },
        },
        BookEntry {
            name: "Sicilian Defence, Dragon",
            matcher: Matcher::Line(&[
                m("e2e4"), m("c7c5"), m("g1f3"), m("d7d6"), m("d2d4"),
                m("c5d4"), m("f3d4"), m("g8f6"), m("b1c3"), m("g7g6"),
            ]),
        },
        BookEntry {
            name: "Queen's Gambit Declined, Elephant Trap",
            matcher: Matcher::Line(&[
                m("d2d4"), m("d7d5"), m("c2c4"), m("e7e6"),
                m("b1c3"), m("g8f6"), m("c1g5"), m("b8d7"),
            ]),
        },
        BookEntry {
            name: "From's Gambit",
            matcher: Matcher::Line(&[
                m("f2f4"), m("e7e5"), m("f4e5"), m("d7d6"), m("e5d6"), m("f8d6"),
                m("d2d4"), m("d8h4"), m("g2g3"), m("d6g3"), m("e1d2"), m("h4d4"),
            ]),
        },
    ],
};

#[cfg(test)]
#[path = "opening_tests.rs"]
mod opening_tests;
