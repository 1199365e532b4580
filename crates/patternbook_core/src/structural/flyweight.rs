//! Flyweight dress cache shared across game players.
//!
//! # Responsibility
//! - Hand out one shared `Dress` per kind instead of allocating a dress
//!   for every player.
//!
//! # Invariants
//! - At most one `Dress` is ever constructed per kind.
//! - An unrecognized dress code fails the lookup and leaves the cache
//!   untouched.
//! - Cached dresses are immutable; sharing them needs no further
//!   synchronization.

use log::info;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

/// External code for a terrorist dress.
pub const TERRORIST_DRESS_CODE: &str = "tDress";
/// External code for a counter-terrorist dress.
pub const COUNTER_TERRORIST_DRESS_CODE: &str = "ctDress";

static SHARED_FACTORY: OnceCell<DressFactory> = OnceCell::new();

/// Error raised by a dress lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DressError {
    UnknownKind(String),
}

impl Display for DressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKind(code) => write!(f, "wrong dress type passed: `{code}`"),
        }
    }
}

impl Error for DressError {}

/// Closed set of dress kinds the factory can share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DressKind {
    Terrorist,
    CounterTerrorist,
}

impl DressKind {
    /// Parses an external dress code at the boundary.
    ///
    /// # Errors
    /// - `UnknownKind` for any code outside the closed set.
    pub fn from_code(code: &str) -> Result<Self, DressError> {
        match code {
            TERRORIST_DRESS_CODE => Ok(Self::Terrorist),
            COUNTER_TERRORIST_DRESS_CODE => Ok(Self::CounterTerrorist),
            other => Err(DressError::UnknownKind(other.to_string())),
        }
    }

    fn color(self) -> DressColor {
        match self {
            Self::Terrorist => DressColor::Red,
            Self::CounterTerrorist => DressColor::Green,
        }
    }
}

/// Dress color carried by the shared flyweight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DressColor {
    Red,
    Green,
}

/// Shared, immutable dress state.
#[derive(Debug, PartialEq, Eq)]
pub struct Dress {
    kind: DressKind,
    color: DressColor,
}

impl Dress {
    fn new(kind: DressKind) -> Self {
        info!("event=dress_created module=flyweight status=ok kind={kind:?}");
        Self {
            kind,
            color: kind.color(),
        }
    }

    pub fn kind(&self) -> DressKind {
        self.kind
    }

    pub fn color(&self) -> DressColor {
        self.color
    }
}

/// Lazily fills and serves the per-kind dress cache.
#[derive(Default)]
pub struct DressFactory {
    dresses: Mutex<HashMap<DressKind, Arc<Dress>>>,
}

impl DressFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared dress for an external code, constructing it
    /// on first request for that kind.
    ///
    /// # Errors
    /// - `UnknownKind` when the code is not recognized; the cache is not
    ///   populated in that case.
    pub fn dress_for(&self, code: &str) -> Result<Arc<Dress>, DressError> {
        let kind = DressKind::from_code(code)?;
        let mut dresses = self
            .dresses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let dress = dresses
            .entry(kind)
            .or_insert_with(|| Arc::new(Dress::new(kind)));
        Ok(Arc::clone(dress))
    }

    /// Number of distinct dresses constructed so far.
    pub fn cached_kinds(&self) -> usize {
        self.dresses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

/// Process-wide factory instance, created once on first access.
pub fn shared_factory() -> &'static DressFactory {
    SHARED_FACTORY.get_or_init(DressFactory::new)
}

/// Team a player fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Terrorist,
    CounterTerrorist,
}

/// A player holding a shared dress and a mutable position.
pub struct Player {
    team: Team,
    dress: Arc<Dress>,
    lat: i32,
    long: i32,
}

impl Player {
    fn new(team: Team, dress: Arc<Dress>) -> Self {
        Self {
            team,
            dress,
            lat: 0,
            long: 0,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn dress(&self) -> &Arc<Dress> {
        &self.dress
    }

    pub fn move_to(&mut self, lat: i32, long: i32) {
        self.lat = lat;
        self.long = long;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.lat, self.long)
    }
}

/// Game context holding both rosters. All players of a kind share one
/// dress instance through the factory.
#[derive(Default)]
pub struct Game {
    terrorists: Vec<Player>,
    counter_terrorists: Vec<Player>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a terrorist wearing the dress for `dress_code`.
    pub fn add_terrorist(&mut self, dress_code: &str) -> Result<(), DressError> {
        let dress = shared_factory().dress_for(dress_code)?;
        self.terrorists.push(Player::new(Team::Terrorist, dress));
        Ok(())
    }

    /// Adds a counter-terrorist wearing the dress for `dress_code`.
    pub fn add_counter_terrorist(&mut self, dress_code: &str) -> Result<(), DressError> {
        let dress = shared_factory().dress_for(dress_code)?;
        self.counter_terrorists
            .push(Player::new(Team::CounterTerrorist, dress));
        Ok(())
    }

    pub fn terrorists(&self) -> &[Player] {
        &self.terrorists
    }

    pub fn counter_terrorists(&self) -> &[Player] {
        &self.counter_terrorists
    }
}
