//! The pair of dice and the move tokens they grant.
//!
//! A roll of two different faces grants two tokens, one per die. Doubles
//! grant four: each die's face can be used twice. Tokens move through
//! `Unused -> Selected -> Expended`, and at most one token is selected at a
//! time. The turn is over once every token is expended.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::die::Die;
use crate::core::{CommandError, DieRoller, TokenId};

/// Usage state of one move token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenState {
    Unused,
    Selected,
    Expended,
}

/// One usable move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveToken {
    pub id: TokenId,
    /// Which die (0 or 1) granted this token.
    pub die: usize,
    /// Number of spaces this token moves a frog.
    pub value: u8,
    pub state: TokenState,
}

/// Two dice plus the tokens of the current roll.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dice {
    dice: [Die; 2],
    tokens: SmallVec<[MoveToken; 4]>,
    selected: Option<TokenId>,
}

impl Dice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Faces currently shown.
    #[must_use]
    pub fn faces(&self) -> [u8; 2] {
        [self.dice[0].face(), self.dice[1].face()]
    }

    #[must_use]
    pub fn die(&self, index: usize) -> &Die {
        &self.dice[index]
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.dice.iter().any(Die::is_rolling)
    }

    #[must_use]
    pub fn is_doubles(&self) -> bool {
        self.dice[0].face() == self.dice[1].face()
    }

    /// Roll both dice at once and grant fresh tokens.
    pub fn roll(&mut self, roller: &mut impl DieRoller) {
        for die in &mut self.dice {
            die.roll(roller);
        }
        self.grant_tokens();
    }

    /// Start both dice shaking. No tokens exist until they stop.
    pub fn start_rolling(&mut self, roller: &mut impl DieRoller) {
        for die in &mut self.dice {
            die.start_roll(roller);
        }
        self.clear_tokens();
    }

    /// Advance the shake animation.
    pub fn shake(&mut self, dt: f64, interval: f64, roller: &mut impl DieRoller) {
        for die in &mut self.dice {
            die.shake(dt, interval, roller);
        }
    }

    /// Stop both dice and grant tokens for the faces shown.
    pub fn stop_rolling(&mut self) -> [u8; 2] {
        for die in &mut self.dice {
            die.stop();
        }
        self.grant_tokens();
        self.faces()
    }

    fn grant_tokens(&mut self) {
        let uses = if self.is_doubles() { 2 } else { 1 };
        self.tokens.clear();
        self.selected = None;
        for (die, d) in self.dice.iter().enumerate() {
            for _ in 0..uses {
                let id = TokenId(self.tokens.len() as u8);
                self.tokens.push(MoveToken {
                    id,
                    die,
                    value: d.face(),
                    state: TokenState::Unused,
                });
            }
        }
    }

    /// Drop all tokens (end of turn).
    pub fn clear_tokens(&mut self) {
        self.tokens.clear();
        self.selected = None;
    }

    #[must_use]
    pub fn tokens(&self) -> &[MoveToken] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&MoveToken> {
        self.tokens.get(id.index())
    }

    #[must_use]
    pub fn selected(&self) -> Option<TokenId> {
        self.selected
    }

    #[must_use]
    pub fn selected_token(&self) -> Option<&MoveToken> {
        self.selected.and_then(|id| self.token(id))
    }

    /// Number of tokens not yet expended.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.state != TokenState::Expended)
            .count()
    }

    /// Whether the roll has been fully used.
    #[must_use]
    pub fn all_expended(&self) -> bool {
        !self.tokens.is_empty() && self.remaining() == 0
    }

    /// Mark an unused token as selected.
    ///
    /// Fails with `InvalidSelection` if the token does not exist, is not
    /// unused, or another token is already selected.
    pub fn select(&mut self, id: TokenId) -> Result<(), CommandError> {
        if self.selected.is_some() {
            return Err(CommandError::InvalidSelection);
        }
        let token = self
            .tokens
            .get_mut(id.index())
            .ok_or(CommandError::InvalidSelection)?;
        if token.state != TokenState::Unused {
            return Err(CommandError::InvalidSelection);
        }
        token.state = TokenState::Selected;
        self.selected = Some(id);
        Ok(())
    }

    /// Return the selected token to unused.
    pub fn deselect(&mut self) -> Option<TokenId> {
        let id = self.selected.take()?;
        if let Some(token) = self.tokens.get_mut(id.index()) {
            token.state = TokenState::Unused;
        }
        Some(id)
    }

    /// Expend the selected token after its move completes.
    pub fn expend_selected(&mut self) -> Option<MoveToken> {
        let id = self.selected.take()?;
        let token = self.tokens.get_mut(id.index())?;
        token.state = TokenState::Expended;
        Some(*token)
    }
}
