/*!
 * Transition Tags
 * Every state change a simulated process can record in the trace
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Transition tag attached to each trace entry
///
/// Serialized with the classic state-diagram labels (`LISTO`, `DESPACHADO`, ...)
/// so traces stay comparable with the course material they model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transition {
    /// Catalog entry as defined, before scheduling
    Initial,
    Ready,
    Dispatched,
    Running,
    TimeExpired,
    /// Leaving the CPU for an I/O or event wait
    Block,
    Blocked,
    /// I/O or event completed
    Wake,
    Finished,
    SuspendReady,
    SuspendedReady,
    ResumeReady,
    SuspendBlocked,
    SuspendedBlocked,
    ResumeBlocked,
    /// Suspended-blocked process whose event completed while swapped out
    SuspendedBlockedToReady,
    ReadyToSuspended,
    /// Partition membership snapshot
    Partitioned,
    /// Rejected by partition admission
    NotExecuted,
    /// Entered the blocking path under partition rules
    BlockingTransition,
}

impl Transition {
    pub const ALL: [Transition; 20] = [
        Self::Initial,
        Self::Ready,
        Self::Dispatched,
        Self::Running,
        Self::TimeExpired,
        Self::Block,
        Self::Blocked,
        Self::Wake,
        Self::Finished,
        Self::SuspendReady,
        Self::SuspendedReady,
        Self::ResumeReady,
        Self::SuspendBlocked,
        Self::SuspendedBlocked,
        Self::ResumeBlocked,
        Self::SuspendedBlockedToReady,
        Self::ReadyToSuspended,
        Self::Partitioned,
        Self::NotExecuted,
        Self::BlockingTransition,
    ];

    /// Trace label
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "INICIAL",
            Self::Ready => "LISTO",
            Self::Dispatched => "DESPACHADO",
            Self::Running => "EN_EJECUCION",
            Self::TimeExpired => "TIEMPO_EXPIRADO",
            Self::Block => "BLOQUEAR",
            Self::Blocked => "BLOQUEADO",
            Self::Wake => "DESPERTAR",
            Self::Finished => "FINALIZADO",
            Self::SuspendReady => "SUSPENDER_LISTOS",
            Self::SuspendedReady => "SUSPENDIDO_LISTO",
            Self::ResumeReady => "REANUDAR_LISTOS",
            Self::SuspendBlocked => "SUSPENDER_BLOQUEADOS",
            Self::SuspendedBlocked => "SUSPENDIDO_BLOQUEADO",
            Self::ResumeBlocked => "REANUDAR_BLOQUEADOS",
            Self::SuspendedBlockedToReady => "TRANSICION_BLOQUEADO_A_LISTO",
            Self::ReadyToSuspended => "DE_LISTO_A_SUSPENDIDO",
            Self::Partitioned => "PARTICIONES",
            Self::NotExecuted => "NO_EJECUTADO",
            Self::BlockingTransition => "TRANSICION_BLOQUEO",
        }
    }
}

impl FromStr for Transition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown transition tag '{}'", s))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Transition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Transition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Trace query selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// The whole trace, unfiltered
    All,
    Only(Transition),
}

impl Filter {
    pub const WILDCARD: &'static str = "TODO";

    #[inline]
    pub fn accepts(&self, transition: Transition) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == transition,
        }
    }
}

impl From<Transition> for Filter {
    fn from(transition: Transition) -> Self {
        Self::Only(transition)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::WILDCARD) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::WILDCARD),
            Self::Only(t) => t.fmt(f),
        }
    }
}
