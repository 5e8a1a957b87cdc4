//! Contract bridge hands and declarative opening-bid rules.
//!
//! A [`Hand`] parses from and prints to the `S.H.D.C` text form, e.g.
//! `87.AJ10.QJ3.KQ1075`.  A [`Rule`] pairs a [`Bid`] with the [`Condition`]s a
//! hand must meet, and [`openings`] is a fixed table of opening
//! bids.  [`Dealer`] and [`BidStats`] simulate how often each
//! opening comes up.
#![warn(missing_docs)]

mod condition;
mod contract;
mod convention;
mod deal;
mod hand;
mod rule;
mod stats;

pub use condition::*;
pub use contract::*;
pub use convention::*;
pub use deal::*;
pub use hand::*;
pub use rule::*;
pub use stats::*;
