//! Card records and the fixed name-to-value table

/// Game value for each known card face, keyed by texture name
const CARD_VALUES: &[(&str, i32)] = &[
    ("cardJoker1", 1),
    ("cardSpades2", 2),
    ("cardSpades3", 3),
    ("cardSpades4", 4),
    ("cardSpades5", 5),
    ("cardSpades6", 6),
    ("cardSpades7", 7),
    ("cardSpades8", 8),
    ("cardSpades9", 9),
    ("cardSpades10", 10),
    ("cardSpades11", 11),
    ("cardSpades12", 12),
    ("cardSpades13", 13),
    ("cardSpades14", 14),
    ("cardHearts12", 12),
    ("cardHearts13", 13),
    ("cardHearts14", 14),
];

/// Look up the game value of a card face. Unknown names are worth 0.
pub fn card_value(name: &str) -> i32 {
    CARD_VALUES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
        .unwrap_or(0)
}

/// One card in a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Position in the collection it was dealt into
    pub id: usize,
    pub name: String,
    pub value: i32,
    /// Index into the texture set the card was built from (not owned)
    pub texture: usize,
}
