/// Router Module Index
///
/// Organizes the application's routing logic into purpose-segregated modules.
/// Registration stays explicit at the module level so the full HTTP surface
/// can be read in one place per concern.

/// The role-administration surface consumed by the scheduling frontend.
/// All endpoints live under the `/users` prefix, matching the paths the
/// frontend already calls.
pub mod roles;

/// Operational endpoints (service metadata, health) used by monitoring and
/// load balancers rather than end users.
pub mod system;
