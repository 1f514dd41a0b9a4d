//! Shared constants for the Hearken device shims.
//!
//! Topic names and timing values used across the workspace. Topic strings
//! must match the radio-stack daemon exactly; changing them breaks the
//! bus contract.

// ============================================================================
// Bus Topics
// ============================================================================

/// Topic carrying raw HFP state events from the radio stack.
///
/// Messages on this topic are JSON documents of the form
/// `{"action": "stateupdate" | "ring", ...state fields}`.
pub const HFP_EVENT_TOPIC: &str = "bluetooth.hfp.event";

/// Topic accepting HFP commands addressed to the radio stack.
///
/// Messages on this topic are JSON documents of the form
/// `{"command": "<NAME>", ...params}` and are published with instant QoS.
pub const HFP_COMMAND_TOPIC: &str = "bluetooth.hfp.command";

// ============================================================================
// Timing
// ============================================================================

/// Grace window between issuing the final close command and releasing the
/// bus subscription during adapter teardown (milliseconds).
///
/// Best effort only: the window gives the `OFF` command a chance to
/// propagate through the radio stack before resources are released, it is
/// not a delivery guarantee.
///
/// # Value: 3000ms (3 seconds)
pub const DESTROY_GRACE_MS: u64 = 3000;
