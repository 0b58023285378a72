use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Card ranks in base order, Ace (low) to King (high).
///
/// The base order drives straight detection. The highest-card tie-break uses a
/// different order where the ace plays high, see [`Rank::high_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    /// All ranks in base order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank symbols in base order. A run of ranks is a straight only if it
    /// appears in this string.
    pub const ORDER: &'static str = "A23456789TJQK";

    /// Position in the base order (Ace = 0, King = 12).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Strength with the ace playing high (Two = 1 .. King = 12, Ace = 13).
    pub const fn high_value(self) -> u8 {
        match self {
            Rank::Ace => 13,
            r => r as u8,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            _ => Err(CardError::InvalidRank(c)),
        }
    }
}

/// The four suits. Suits carry no order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid rank: '{0}'")]
    InvalidRank(char),
    #[error("invalid suit: '{0}'")]
    InvalidSuit(char),
    #[error("invalid card: '{0}'")]
    InvalidToken(String),
    #[error("cannot order {left} and {right}: suits differ")]
    IncomparableSuits { left: Card, right: Card },
}

/// A playing card: rank + suit.
///
/// Two cards are ordered only when they share a suit, so `partial_cmp` returns
/// `None` across suits.
///
/// ```
/// use draw_poker::cards::{Card, Rank, Suit};
///
/// let ten = Card::new(Rank::Ten, Suit::Hearts);
/// let king = Card::new(Rank::King, Suit::Hearts);
/// assert_eq!(ten.to_string(), "Th");
/// assert!(ten < king);
/// assert_eq!(ten.partial_cmp(&Card::new(Rank::King, Suit::Spades)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from its rank and suit symbols, validating both.
    pub fn from_symbols(rank: char, suit: char) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Compare by base rank order. Fails for cards of different suits.
    pub fn try_cmp(&self, other: &Card) -> Result<Ordering, CardError> {
        self.partial_cmp(other)
            .ok_or(CardError::IncomparableSuits { left: *self, right: *other })
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.suit != other.suit {
            return None;
        }
        Some(self.rank.index().cmp(&other.rank.index()))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Card::from_symbols(rank, suit),
            _ => Err(CardError::InvalidToken(s.to_string())),
        }
    }
}

/// Parse whitespace-separated two-character card tokens.
///
/// ```
/// use draw_poker::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("th jh  qc").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0], Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(cards[2], Card::new(Rank::Queen, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input.split_whitespace().map(Card::from_str).collect()
}
