/*!
 * System Limits
 *
 * Centralized location for simulation-wide limits and thresholds.
 * All values include rationale comments explaining WHY they exist.
 */

/// Maximum number of processes accepted in a single batch
/// Bounds record and ready-queue storage against untrusted interactive input
pub const MAX_PROCESSES: usize = 4096;
