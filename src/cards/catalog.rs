//! Static card data: property sets, action kinds, money denominations.
//!
//! Everything here is read-only. The two predicates `is_set_complete` and
//! `bank_total` are pure and are the only rules the catalog owns.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Property colors. Each color is one property set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Pink,
    DarkBlue,
    Green,
    Yellow,
    Red,
    Black,
    LightGreen,
}

/// Catalog entry for one property set.
#[derive(Clone, Copy, Debug)]
pub struct PropertySet {
    /// Display name of the set.
    pub name: &'static str,
    /// Cards needed for the set to count as complete.
    pub set_size: usize,
    /// Bank value of each card in the set.
    pub value: u32,
    /// Names of the property cards issued for this color.
    pub cards: &'static [&'static str],
}

static PROPERTY_SETS: [PropertySet; Color::COUNT] = [
    PropertySet {
        name: "Jaipur",
        set_size: 2,
        value: 2,
        cards: &["Hawa Mahal", "City Palace"],
    },
    PropertySet {
        name: "Mumbai",
        set_size: 2,
        value: 4,
        cards: &["Antilia", "Sea Link"],
    },
    PropertySet {
        name: "Delhi",
        set_size: 3,
        value: 4,
        cards: &["Lutyens Delhi", "India Gate", "Red Fort"],
    },
    PropertySet {
        name: "Bangalore",
        set_size: 3,
        value: 3,
        cards: &["Indiranagar", "Tech Park", "Cubbon Park"],
    },
    PropertySet {
        name: "Kolkata",
        set_size: 3,
        value: 3,
        cards: &["Howrah Bridge", "Victoria Memorial", "Park Street"],
    },
    PropertySet {
        name: "Transport",
        set_size: 4,
        value: 2,
        cards: &["Metro", "Rickshaw", "Local Train", "Auto"],
    },
    PropertySet {
        name: "Utilities",
        set_size: 2,
        value: 2,
        cards: &["Adani Power", "Jio Fiber"],
    },
];

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 7;

    /// All colors in catalog order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Pink,
        Color::DarkBlue,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::Black,
        Color::LightGreen,
    ];

    /// Position in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The catalog entry for this color.
    #[must_use]
    pub fn set(self) -> &'static PropertySet {
        &PROPERTY_SETS[self.index()]
    }

    /// Cards needed to complete this color's set.
    #[must_use]
    pub fn set_size(self) -> usize {
        self.set().set_size
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.set().name)
    }
}

/// Action card kinds. Effects are hard-coded per kind in the stage machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Steal a completed property set from an opponent.
    StealSet,
    /// Cancel an action played against you.
    BlockAction,
    /// Force one player to pay a fixed amount.
    DebtCollection,
    /// Every opponent pays a fixed amount.
    Birthday,
    /// Steal one property that is not part of a complete set.
    StealSingleProperty,
    /// Swap a property with an opponent.
    SwapProperty,
    /// Draw two extra cards.
    PassGo,
}

impl ActionKind {
    /// All action kinds in catalog order.
    pub const ALL: [ActionKind; 7] = [
        ActionKind::StealSet,
        ActionKind::BlockAction,
        ActionKind::DebtCollection,
        ActionKind::Birthday,
        ActionKind::StealSingleProperty,
        ActionKind::SwapProperty,
        ActionKind::PassGo,
    ];

    /// Copies of this card in the deck.
    #[must_use]
    pub const fn quantity(self) -> usize {
        match self {
            ActionKind::StealSet => 2,
            ActionKind::PassGo => 10,
            _ => 3,
        }
    }

    /// Printed card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::StealSet => "Scam 1992",
            ActionKind::BlockAction => "Abba Nahi Manenge",
            ActionKind::DebtCollection => "Vasooli Bhai",
            ActionKind::Birthday => "Shagun",
            ActionKind::StealSingleProperty => "Jugaad",
            ActionKind::SwapProperty => "Adla Badli",
            ActionKind::PassGo => "Pass Go",
        }
    }

    /// Rules text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ActionKind::StealSet => "Steal a completed property set from any opponent",
            ActionKind::BlockAction => "Cancel any action played against you",
            ActionKind::DebtCollection => "Force a player to pay 5",
            ActionKind::Birthday => "All players pay you 2",
            ActionKind::StealSingleProperty => "Steal a single property from any opponent",
            ActionKind::SwapProperty => "Swap a property with any opponent",
            ActionKind::PassGo => "Draw 2 extra cards from the deck",
        }
    }
}

/// Money denominations as (value, copies in deck).
pub const MONEY_DENOMINATIONS: [(u32, usize); 6] = [(1, 6), (2, 5), (3, 3), (4, 3), (5, 2), (10, 1)];

/// Is a run of `cards` enough to complete `color`?
#[must_use]
pub fn is_set_complete(cards: &[Card], color: Color) -> bool {
    cards.len() >= color.set_size()
}

/// Sum of the bank value of `cards`. Action cards count as 0.
#[must_use]
pub fn bank_total(cards: &[Card]) -> u32 {
    cards.iter().map(Card::value).sum()
}
