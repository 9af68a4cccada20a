//! Domain layer constants
//!
//! Names shared by every layer. Infrastructure-specific constants remain in
//! `pcb_infrastructure::constants`.

// ============================================================================
// DISCOVERY CONSTANTS
// ============================================================================

/// Environment variable naming the policy provider to instantiate on first use
pub const POLICY_PROVIDER_ENV: &str = "PCB_POLICY_PROVIDER";

/// Configuration key naming the policy provider inside the TOML configuration
pub const POLICY_PROVIDER_KEY: &str = "policy.provider";

// ============================================================================
// POLICY CONSTANTS
// ============================================================================

/// Role name that selects every role in `remove_role`
pub const ALL_ROLES: &str = "*";
