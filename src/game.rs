//! Match controller: two grids, two agents, alternating turns.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::agent::{Agent, Shot};
use crate::common::{ConfigError, MatchError};
use crate::config::GameConfig;
use crate::fleet::deploy_fleet;
use crate::grid::Grid;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Lifecycle of a match. `PlayerWon` and `ComputerWon` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchState {
    Setup,
    PlayerTurn,
    ComputerTurn,
    PlayerWon,
    ComputerWon,
}

impl MatchState {
    fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => MatchState::PlayerTurn,
            Side::Computer => MatchState::ComputerTurn,
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::Player => MatchState::PlayerWon,
            Side::Computer => MatchState::ComputerWon,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, MatchState::PlayerWon | MatchState::ComputerWon)
    }

    /// Side to move, if the match is in play.
    pub fn active_side(self) -> Option<Side> {
        match self {
            MatchState::PlayerTurn => Some(Side::Player),
            MatchState::ComputerTurn => Some(Side::Computer),
            _ => None,
        }
    }
}

/// One shot as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub shooter: Side,
    pub shot: Shot,
    /// State after the shot was applied.
    pub next: MatchState,
}

/// A match between a player and a computer side. Each side owns the grid its
/// fleet sits on; the player's grid is revealed to its owner, the computer's
/// is hidden.
pub struct Match<P, C> {
    config: GameConfig,
    player_grid: Grid,
    computer_grid: Grid,
    player: P,
    computer: C,
    state: MatchState,
    turns: usize,
}

impl<P: Agent, C: Agent> Match<P, C> {
    /// New match in `Setup` with empty grids.
    pub fn new(config: GameConfig, player: P, computer: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            player_grid: Grid::new(config.size, true)?,
            computer_grid: Grid::new(config.size, false)?,
            config,
            player,
            computer,
            state: MatchState::Setup,
            turns: 0,
        })
    }

    /// Match over pre-deployed grids, skipping `Setup`.
    pub fn with_grids(
        player_grid: Grid,
        computer_grid: Grid,
        player: P,
        computer: C,
        first: Side,
    ) -> Self {
        let config = GameConfig {
            size: player_grid.size(),
            fleet: player_grid.vessels().iter().map(|v| v.length()).collect(),
        };
        Self {
            config,
            player_grid,
            computer_grid,
            player,
            computer,
            state: MatchState::turn_of(first),
            turns: 0,
        }
    }

    /// Deploy both fleets and toss for the first turn.
    pub fn start(&mut self, rng: &mut SmallRng) -> Result<MatchState, MatchError> {
        if self.state != MatchState::Setup {
            return Err(MatchError::AlreadyStarted);
        }
        self.player_grid = deploy_fleet(rng, &self.config, true)?;
        self.computer_grid = deploy_fleet(rng, &self.config, false)?;
        let first = if rng.random_bool(0.5) {
            Side::Player
        } else {
            Side::Computer
        };
        log::info!("{:?} moves first", first);
        self.state = MatchState::turn_of(first);
        Ok(self.state)
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shots resolved so far, including repeats.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::PlayerWon => Some(Side::Player),
            MatchState::ComputerWon => Some(Side::Computer),
            _ => None,
        }
    }

    /// Grid holding `side`'s fleet.
    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::Player => &self.player_grid,
            Side::Computer => &self.computer_grid,
        }
    }

    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    pub fn computer_grid(&self) -> &Grid {
        &self.computer_grid
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn computer(&self) -> &C {
        &self.computer
    }

    /// Move to a terminal state if either fleet is gone.
    fn check_victory(&mut self) -> bool {
        let winner = if self.player_grid.all_destroyed() {
            Some(Side::Computer)
        } else if self.computer_grid.all_destroyed() {
            Some(Side::Player)
        } else {
            None
        };
        if let Some(side) = winner {
            if !self.state.is_terminal() {
                log::info!("{:?} wins after {} shots", side, self.turns);
            }
            self.state = MatchState::won_by(side);
        }
        self.state.is_terminal()
    }

    /// Play one shot. Returns `None` once the match is over.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<Option<TurnReport>, MatchError> {
        let side = match self.state {
            MatchState::Setup => return Err(MatchError::NotStarted),
            MatchState::PlayerWon | MatchState::ComputerWon => return Ok(None),
            MatchState::PlayerTurn => Side::Player,
            MatchState::ComputerTurn => Side::Computer,
        };
        if self.check_victory() {
            return Ok(None);
        }

        let shot = match side {
            Side::Player => self.player.take_turn(rng, &mut self.computer_grid),
            Side::Computer => self.computer.take_turn(rng, &mut self.player_grid),
        }
        .map_err(|e| {
            log::warn!("{:?} could not take a turn: {}", side, e);
            e
        })?;
        self.turns += 1;
        log::info!(
            "turn {}: {:?} fired at {} -> {:?}",
            self.turns,
            side,
            shot.target,
            shot.outcome
        );

        if !shot.fires_again {
            self.state = MatchState::turn_of(side.opponent());
        }
        self.check_victory();
        Ok(Some(TurnReport {
            shooter: side,
            shot,
            next: self.state,
        }))
    }

    /// Play until one fleet is destroyed, handing every report to `observer`.
    pub fn run<F>(&mut self, rng: &mut SmallRng, mut observer: F) -> Result<Side, MatchError>
    where
        F: FnMut(&Self, &TurnReport),
    {
        while let Some(report) = self.step(rng)? {
            observer(&*self, &report);
        }
        self.winner().ok_or(MatchError::NotStarted)
    }
}
