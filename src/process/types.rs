/*!
 * Process Types
 * Process definitions and their per-run runtime state
 */

use crate::core::serde::{is_false, is_none, is_zero_u64};
use crate::core::types::{Cycles, Size, Time};
use crate::core::InlineString;
use serde::{Deserialize, Serialize};

/// Medium-term scheduler flags of a process
///
/// The three flags are independent booleans; the catalog validator rejects
/// `resumed` without a suspension reason unless validation is permissive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SuspensionFlags {
    #[serde(default, skip_serializing_if = "is_false")]
    pub suspended_ready: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub suspended_blocked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub resumed: bool,
}

impl SuspensionFlags {
    pub const NONE: Self = Self::new(false, false, false);

    pub const fn new(suspended_ready: bool, suspended_blocked: bool, resumed: bool) -> Self {
        Self {
            suspended_ready,
            suspended_blocked,
            resumed,
        }
    }

    /// Whether any suspension reason is set
    #[inline]
    pub const fn is_suspended(&self) -> bool {
        self.suspended_ready || self.suspended_blocked
    }

    pub fn suspended_ready_label(&self) -> &'static str {
        yes_no(self.suspended_ready)
    }

    pub fn suspended_blocked_label(&self) -> &'static str {
        yes_no(self.suspended_blocked)
    }

    pub fn resumed_label(&self) -> &'static str {
        yes_no(self.resumed)
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Si"
    } else {
        "No"
    }
}

pub(crate) fn blocking_label(blocked: bool) -> &'static str {
    if blocked {
        "Bloqueado"
    } else {
        "No Bloqueado"
    }
}

/// Process definition supplied by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: String,
    pub time: Time,
    #[serde(default, skip_serializing_if = "is_false")]
    pub blocked: bool,
    #[serde(flatten)]
    pub suspension: SuspensionFlags,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub size: Size,
    #[serde(default, skip_serializing_if = "is_none")]
    pub partition: Option<String>,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>, time: Time) -> Self {
        Self {
            name: name.into(),
            time,
            blocked: false,
            suspension: SuspensionFlags::NONE,
            size: 0,
            partition: None,
        }
    }

    pub fn blocked(mut self) -> Self {
        self.blocked = true;
        self
    }

    pub fn suspended_ready(mut self) -> Self {
        self.suspension.suspended_ready = true;
        self
    }

    pub fn suspended_blocked(mut self) -> Self {
        self.suspension.suspended_blocked = true;
        self
    }

    pub fn resumed(mut self) -> Self {
        self.suspension.resumed = true;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn in_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }
}

/// Simulated process
///
/// Catalog entries hold the definition; each run works on deep clones whose
/// `remaining_time` and `cycle_count` advance while the catalog stays untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    name: InlineString,
    original_time: Time,
    remaining_time: Time,
    cycle_count: Cycles,
    blocked: bool,
    suspension: SuspensionFlags,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    size: Size,
    #[serde(default, skip_serializing_if = "is_none")]
    partition: Option<InlineString>,
}

impl Process {
    /// Build a fresh catalog entry from a definition
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            name: spec.name.trim().into(),
            original_time: spec.time,
            remaining_time: spec.time,
            cycle_count: 0,
            blocked: spec.blocked,
            suspension: spec.suspension,
            size: spec.size,
            partition: spec
                .partition
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(InlineString::from),
        }
    }

    /// Rebuild a display value from a definition plus mid-run state
    pub(crate) fn with_runtime_state(
        definition: &Process,
        remaining_time: Time,
        cycle_count: Cycles,
        blocked: bool,
        suspension: SuspensionFlags,
    ) -> Self {
        Self {
            remaining_time,
            cycle_count,
            blocked,
            suspension,
            ..definition.clone()
        }
    }

    /// Charge one dispatch: subtract the quantum (clamped at zero) and count the cycle
    #[inline]
    pub(crate) fn consume_quantum(&mut self, quantum: Time) {
        self.remaining_time = self.remaining_time.saturating_sub(quantum);
        self.cycle_count += 1;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    #[inline]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.matches(name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn inline_name(&self) -> &InlineString {
        &self.name
    }

    pub fn original_time(&self) -> Time {
        self.original_time
    }

    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    pub fn cycle_count(&self) -> Cycles {
        self.cycle_count
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn suspension(&self) -> SuspensionFlags {
        self.suspension
    }

    pub fn is_suspended_ready(&self) -> bool {
        self.suspension.suspended_ready
    }

    pub fn is_suspended_blocked(&self) -> bool {
        self.suspension.suspended_blocked
    }

    pub fn is_resumed(&self) -> bool {
        self.suspension.resumed
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Identifier of the partition this process asked for, if any
    pub fn partition(&self) -> Option<&str> {
        self.partition.as_deref()
    }

    pub(crate) fn inline_partition(&self) -> Option<&InlineString> {
        self.partition.as_ref()
    }

    pub fn status_label(&self) -> &'static str {
        blocking_label(self.blocked)
    }
}
