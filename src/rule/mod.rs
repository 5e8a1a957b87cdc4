#[cfg(test)]
mod test;

use crate::condition::Condition;
use crate::contract::Bid;
use crate::hand::Hand;
use core::fmt;
use std::borrow::Cow;

/// A bid with the conditions a hand must meet to make it
///
/// A hand matches when every `require` condition holds and no `exclude`
/// condition holds.  Empty lists impose nothing.
///
/// The [`Display`](fmt::Display) form is the bid with the optional note in
/// parentheses, e.g. `1C (natural)`.  See [`Rule::describe`] for the full
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The bid this rule proposes
    pub bid: Bid,
    /// Conditions that must all hold
    pub require: Vec<Condition>,
    /// Conditions that must all fail
    pub exclude: Vec<Condition>,
    /// Short human-readable tag
    pub note: Option<Cow<'static, str>>,
}

impl Rule {
    /// Create a rule for a bid without any conditions
    #[must_use]
    pub const fn new(bid: Bid) -> Self {
        Self {
            bid,
            require: Vec::new(),
            exclude: Vec::new(),
            note: None,
        }
    }

    /// Add conditions that must hold
    #[must_use]
    pub fn require(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.require.extend(conditions);
        self
    }

    /// Add conditions that must fail
    #[must_use]
    pub fn exclude(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.exclude.extend(conditions);
        self
    }

    /// Attach a note
    #[must_use]
    pub fn note(mut self, note: impl Into<Cow<'static, str>>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether the hand qualifies for the bid
    #[must_use]
    pub fn matches(&self, hand: &Hand) -> bool {
        self.require.iter().all(|condition| condition.evaluate(hand))
            && !self.exclude.iter().any(|condition| condition.evaluate(hand))
    }

    /// Describe the rule with all its conditions
    ///
    /// The format is `<bid>: <require>, ... wyklucza <exclude>, ...`, where
    /// either part is omitted when it is empty.  For example,
    /// `2H: 6 kierów, 7-11 PC wyklucza od 4 pików`.
    #[must_use]
    pub fn describe(&self) -> impl fmt::Display + '_ {
        Description(self)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.note.as_deref() {
            Some(note) if !note.is_empty() => write!(f, "{} ({note})", self.bid),
            _ => write!(f, "{}", self.bid),
        }
    }
}

fn join(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

struct Description<'a>(&'a Rule);

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let require = join(&self.0.require);
        let exclude = join(&self.0.exclude);

        write!(f, "{}", self.0.bid)?;

        if !require.is_empty() || !exclude.is_empty() {
            f.write_str(":")?;
        }
        if !require.is_empty() {
            write!(f, " {require}")?;
        }
        if !exclude.is_empty() {
            write!(f, " wyklucza {exclude}")?;
        }
        Ok(())
    }
}
