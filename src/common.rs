//! Common types for the engine: shot outcomes and the error enums.

use crate::cellset::CellSetError;
use crate::coord::Coordinate;

/// Result of resolving a single shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed outside the board; nothing changed.
    OutOfBounds,
    /// Cell was already fired upon (or revealed around a kill); nothing changed.
    AlreadyTried,
    /// Shot hit open water.
    Missed,
    /// Shot hit a vessel that still has cells left.
    Damaged,
    /// Shot hit the last intact cell of a vessel.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shot changed the target grid.
    pub fn is_resolved(self) -> bool {
        !matches!(self, ShotOutcome::OutOfBounds | ShotOutcome::AlreadyTried)
    }
}

/// Errors returned by `Grid::deploy` and the fleet generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Vessel length is zero or longer than the board side.
    InvalidLength { length: usize, size: i32 },
    /// A vessel cell falls outside the board.
    OutOfBounds(Coordinate),
    /// A vessel cell touches or overlaps a vessel already deployed.
    Overlap(Coordinate),
    /// The fleet could not be packed within the attempt limit.
    FleetDoesNotFit { attempts: u32 },
    /// Grid construction failed.
    Config(ConfigError),
}

impl From<ConfigError> for PlacementError {
    fn from(err: ConfigError) -> Self {
        PlacementError::Config(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::InvalidLength { length, size } => {
                write!(f, "Vessel length {} does not fit a {}x{} board", length, size, size)
            }
            PlacementError::OutOfBounds(c) => write!(f, "Vessel cell {} is out of bounds", c),
            PlacementError::Overlap(c) => {
                write!(f, "Vessel cell {} overlaps or touches another vessel", c)
            }
            PlacementError::FleetDoesNotFit { attempts } => {
                write!(f, "Fleet could not be placed after {} attempts", attempts)
            }
            PlacementError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

/// Invalid board or fleet parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size outside `[1, max]`.
    InvalidBoardSize { size: i32, max: i32 },
    /// No vessels in the fleet.
    EmptyFleet,
    /// A vessel length is zero or longer than the board.
    InvalidVesselLength { length: usize, size: i32 },
    /// The fleet has more cells than the board.
    FleetTooLarge { cells: usize, capacity: usize },
    /// Backing cell set cannot hold the board.
    CellSet(CellSetError),
}

impl From<CellSetError> for ConfigError {
    fn from(err: CellSetError) -> Self {
        ConfigError::CellSet(err)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidBoardSize { size, max } => {
                write!(f, "Board size {} must be between 1 and {}", size, max)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one vessel"),
            ConfigError::InvalidVesselLength { length, size } => {
                write!(f, "Vessel length {} does not fit a {}x{} board", length, size, size)
            }
            ConfigError::FleetTooLarge { cells, capacity } => {
                write!(f, "Fleet needs {} cells but the board has {}", cells, capacity)
            }
            ConfigError::CellSet(e) => write!(f, "Cell set error: {}", e),
        }
    }
}

/// Rejected textual coordinate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two integer tokens.
    Malformed,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::Malformed => write!(f, "Expected two integers separated by a space (x y)"),
        }
    }
}

/// Errors an agent can hit while taking a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentError {
    /// The input stream ended before a coordinate was supplied.
    InputClosed,
    /// Every coordinate has already been tried.
    NoTargetsLeft,
}

impl core::fmt::Display for AgentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AgentError::InputClosed => write!(f, "Input closed before a shot was entered"),
            AgentError::NoTargetsLeft => write!(f, "No untried coordinates left"),
        }
    }
}

/// Errors returned by the match controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// `step` or `run` was called before `start`.
    NotStarted,
    /// `start` was called on a match that is already under way.
    AlreadyStarted,
    Placement(PlacementError),
    Agent(AgentError),
}

impl From<PlacementError> for MatchError {
    fn from(err: PlacementError) -> Self {
        MatchError::Placement(err)
    }
}

impl From<AgentError> for MatchError {
    fn from(err: AgentError) -> Self {
        MatchError::Agent(err)
    }
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::NotStarted => write!(f, "Match has not been set up yet"),
            MatchError::AlreadyStarted => write!(f, "Match is already under way"),
            MatchError::Placement(e) => write!(f, "Placement error: {}", e),
            MatchError::Agent(e) => write!(f, "Agent error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for AgentError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
