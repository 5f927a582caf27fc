use super::{Principal, Role};
use thiserror::Error;

/// A role or ownership check failed
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("access denied")]
pub struct Forbidden;

/// Operations on a single task that require an authorization decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Read,
    Update,
    Delete,
}

/// The check an operation must pass, beyond authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    /// Only the owning principal may perform the operation
    OwnerOnly,
    /// The owning principal, or any principal holding the given role
    OwnerOrRole(Role),
}

/// Per-operation policy table.
///
/// Update is owner-only: the admin override applies to read/delete
/// visibility but does not extend to mutating someone else's task. The
/// asymmetry is deliberate policy, kept visible here rather than buried in
/// per-handler conditionals.
pub fn access_rule(action: TaskAction) -> AccessRule {
    match action {
        TaskAction::Read => AccessRule::OwnerOrRole(Role::Admin),
        TaskAction::Update => AccessRule::OwnerOnly,
        TaskAction::Delete => AccessRule::OwnerOrRole(Role::Admin),
    }
}

/// Strict role equality check. No hierarchy, no partial matches.
pub fn require_role(principal: &Principal, role: Role) -> Result<(), Forbidden> {
    if principal.role == role {
        Ok(())
    } else {
        Err(Forbidden)
    }
}

/// Decides whether a principal may perform an action on a task owned by
/// `owner_id`.
///
/// Callers must confirm the task exists first: a missing task is reported
/// as not-found before ownership is ever evaluated, so denied access and
/// absence are never conflated.
pub fn authorize(
    principal: &Principal,
    owner_id: i64,
    action: TaskAction,
) -> Result<(), Forbidden> {
    let is_owner = principal.subject_id == owner_id;
    match access_rule(action) {
        AccessRule::OwnerOnly if is_owner => Ok(()),
        AccessRule::OwnerOrRole(role) if is_owner || require_role(principal, role).is_ok() => {
            Ok(())
        }
        _ => Err(Forbidden),
    }
}
