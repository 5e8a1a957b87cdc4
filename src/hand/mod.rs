
use core::fmt;
use core::num::NonZeroU8;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use thiserror::Error;

/// A suit of playing cards
///
/// The derived order is the bidding order: ♣ < ♦ < ♥ < ♠.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// ♣, coded as `C`
    Clubs,
    /// ♦, coded as `D`
    Diamonds,
    /// ♥, coded as `H`
    Hearts,
    /// ♠, coded as `S`
    Spades,
}

impl Suit {
    /// Suits in the ascending order, the order in this crate
    pub const ASC: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Suits in the descending order, the order of segments in hand text
    pub const DESC: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// The single-letter code of the suit
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.code())
    }
}

/// Error raised when a suit code is not one of `C`, `D`, `H`, `S`
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown suit code")]
pub struct ParseSuitError;

impl TryFrom<char> for Suit {
    type Error = ParseSuitError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'C' => Ok(Self::Clubs),
            'D' => Ok(Self::Diamonds),
            'H' => Ok(Self::Hearts),
            'S' => Ok(Self::Spades),
            _ => Err(ParseSuitError),
        }
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::try_from(code),
            _ => Err(ParseSuitError),
        }
    }
}

/// Rank of a playing card
///
/// The discriminant is the face value, so J, Q, K, A are 11, 12, 13, 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2
    Two = 2,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10, the only two-character code
    Ten,
    /// J
    Jack,
    /// Q
    Queen,
    /// K
    King,
    /// A
    Ace,
}

impl Rank {
    /// Ranks in the ascending order
    pub const ASC: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// High-card points: A = 4, K = 3, Q = 2, J = 1, others 0
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Ace => 4,
            Self::King => 3,
            Self::Queen => 2,
            Self::Jack => 1,
            _ => 0,
        }
    }

    /// The text code of the rank
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Split the leading rank code off `text`
    ///
    /// `10` is tried before any single character, so `1` never matches alone.
    fn split_code(text: &str) -> Option<(Self, &str)> {
        if let Some(rest) = text.strip_prefix("10") {
            return Some((Self::Ten, rest));
        }

        let mut chars = text.chars();
        let rank = match chars.next()? {
            'A' => Self::Ace,
            'K' => Self::King,
            'Q' => Self::Queen,
            'J' => Self::Jack,
            '9' => Self::Nine,
            '8' => Self::Eight,
            '7' => Self::Seven,
            '6' => Self::Six,
            '5' => Self::Five,
            '4' => Self::Four,
            '3' => Self::Three,
            '2' => Self::Two,
            _ => return None,
        };
        Some((rank, chars.as_str()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error raised when a rank code is not one of `2`..`10`, `J`, `Q`, `K`, `A`
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown rank code")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::split_code(s) {
            Some((rank, "")) => Ok(rank),
            _ => Err(ParseRankError),
        }
    }
}

/// Longest-match scanner over concatenated rank codes
struct Ranks<'a>(&'a str);

impl Iterator for Ranks<'_> {
    type Item = Result<Rank, ParseRankError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }

        Some(match Rank::split_code(self.0) {
            Some((rank, rest)) => {
                self.0 = rest;
                Ok(rank)
            }
            None => {
                self.0 = "";
                Err(ParseRankError)
            }
        })
    }
}

/// A playing card
///
/// Text form is the suit code followed by the rank code, e.g. `SA`, `H10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(NonZeroU8);

impl Card {
    /// Create a card from suit and rank
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        match NonZeroU8::new((rank as u8) << 2 | suit as u8) {
            Some(bits) => Self(bits),
            None => unreachable!(),
        }
    }

    /// The suit of the card
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ASC[(self.0.get() & 3) as usize]
    }

    /// The rank of the card
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ASC[(self.0.get() >> 2) as usize - 2]
    }

    /// High-card points of the card
    #[must_use]
    pub const fn points(self) -> u8 {
        self.rank().points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.suit(), self.rank())
    }
}

/// Error raised when parsing a card
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseCardError {
    /// The first character is not a suit code
    #[error(transparent)]
    Suit(#[from] ParseSuitError),

    /// The remainder is not a rank code
    #[error(transparent)]
    Rank(#[from] ParseRankError),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = Suit::try_from(chars.next().ok_or(ParseSuitError)?)?;
        let rank = chars.as_str().parse()?;
        Ok(Self::new(suit, rank))
    }
}

/// All 52 cards, rank by rank from the deuces to the aces
pub const ALL_CARDS: [Card; 52] = {
    let mut cards = [Card::new(Suit::Clubs, Rank::Two); 52];
    let mut index = 0;

    while index < 52 {
        cards[index] = Card::new(Suit::ASC[index % 4], Rank::ASC[index / 4]);
        index += 1;
    }

    cards
};

/// A set whose size is known at compile time
pub trait SmallSet<T>: Copy + Eq {
    /// The empty set
    const EMPTY: Self;

    /// The set containing all possible values
    const ALL: Self;

    /// The number of elements in the set
    #[must_use]
    fn len(self) -> usize;

    /// Whether the set is empty
    #[must_use]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Whether the set contains a value
    fn contains(self, value: T) -> bool;

    /// Insert a value into the set, returning whether it was absent
    fn insert(&mut self, value: T) -> bool;
}

/// A set of ranks held in one suit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Holding(u16);

impl SmallSet<Rank> for Holding {
    const EMPTY: Self = Self(0);
    const ALL: Self = Self(0x7FFC);

    fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    fn contains(self, rank: Rank) -> bool {
        self.0 & 1 << rank as u8 != 0
    }

    fn insert(&mut self, rank: Rank) -> bool {
        let insertion = 1 << rank as u8;
        let inserted = insertion & !self.0 != 0;
        self.0 |= insertion;
        inserted
    }
}

impl Holding {
    /// Ranks in the holding, in the ascending order
    pub fn iter(self) -> impl DoubleEndedIterator<Item = Rank> {
        Rank::ASC.into_iter().filter(move |&rank| self.contains(rank))
    }

    /// High-card points of the holding
    #[must_use]
    pub fn points(self) -> u8 {
        self.iter().map(Rank::points).sum()
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.iter().rev().try_for_each(|rank| f.write_str(rank.code()))
    }
}

/// Error raised when adding a card already in the hand
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{0} already in hand")]
pub struct DuplicateCardError(pub Card);

/// A hand of playing cards
///
/// Text form is four `.`-separated holdings in the order ♠, ♥, ♦, ♣, e.g.
/// `87.AJ10.QJ3.KQ1075`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand(pub [Holding; 4]);

impl Index<Suit> for Hand {
    type Output = Holding;

    fn index(&self, suit: Suit) -> &Holding {
        &self.0[suit as usize]
    }
}

impl IndexMut<Suit> for Hand {
    fn index_mut(&mut self, suit: Suit) -> &mut Holding {
        &mut self.0[suit as usize]
    }
}

impl SmallSet<Card> for Hand {
    const EMPTY: Self = Self([Holding::EMPTY; 4]);
    const ALL: Self = Self([Holding::ALL; 4]);

    fn len(self) -> usize {
        self.0.iter().map(|holding| holding.len()).sum()
    }

    fn contains(self, card: Card) -> bool {
        self[card.suit()].contains(card.rank())
    }

    fn insert(&mut self, card: Card) -> bool {
        self[card.suit()].insert(card.rank())
    }
}

impl Hand {
    /// Create a hand from distinct cards
    ///
    /// # Errors
    /// [`DuplicateCardError`] if any card occurs twice.
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, DuplicateCardError> {
        cards.into_iter().try_fold(Self::EMPTY, |mut hand, card| {
            hand.add(card)?;
            Ok(hand)
        })
    }

    /// Add a card to the hand
    ///
    /// # Errors
    /// [`DuplicateCardError`] if the card is already in the hand.
    pub fn add(&mut self, card: Card) -> Result<(), DuplicateCardError> {
        if self.insert(card) {
            Ok(())
        } else {
            Err(DuplicateCardError(card))
        }
    }

    /// High-card points of the hand
    #[must_use]
    pub fn points(self) -> u8 {
        self.0.iter().map(|holding| holding.points()).sum()
    }

    /// Number of cards held in a suit
    #[must_use]
    pub fn length(self, suit: Suit) -> usize {
        self[suit].len()
    }

    /// Cards in the hand, ♣ to ♠ and low to high within each suit
    pub fn iter(self) -> impl Iterator<Item = Card> {
        Suit::ASC
            .into_iter()
            .flat_map(move |suit| self[suit].iter().map(move |rank| Card::new(suit, rank)))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self[Suit::Spades],
            self[Suit::Hearts],
            self[Suit::Diamonds],
            self[Suit::Clubs]
        )
    }
}

/// Error raised when parsing a hand
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseHandError {
    /// The text does not split into four holdings
    #[error("expecting exactly 4 suits")]
    NotFourSuits,

    /// A holding contains text that is not a sequence of rank codes
    #[error("unknown card rank")]
    UnknownRank,

    /// A card occurs twice
    #[error(transparent)]
    DuplicateCard(#[from] DuplicateCardError),
}

impl From<ParseRankError> for ParseHandError {
    fn from(_: ParseRankError) -> Self {
        Self::UnknownRank
    }
}

impl FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();

        if segments.len() != 4 {
            return Err(ParseHandError::NotFourSuits);
        }

        // Reject unknown ranks anywhere before reporting any duplicate
        let holdings = segments
            .into_iter()
            .map(|segment| Ranks(segment).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut hand = Self::EMPTY;

        for (suit, ranks) in Suit::DESC.into_iter().zip(holdings) {
            for rank in ranks {
                hand.add(Card::new(suit, rank))?;
            }
        }

        Ok(hand)
    }
}
