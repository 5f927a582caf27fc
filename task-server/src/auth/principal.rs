use serde::{Deserialize, Serialize};

/// Role membership carried by a credential.
///
/// There is no hierarchy between the two values: `Admin` is a distinct role,
/// not a superset of `User`. Callers wanting "admin or owner" combine the
/// role guard with the ownership check explicitly.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The verified identity of the caller for one request.
///
/// Only `auth::verify` constructs this outside of tests; holding a Principal
/// is proof that a credential passed signature and expiry validation. It is
/// immutable and threaded as an explicit argument through every downstream
/// decision, never stashed in request-scoped mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// Subject id from the credential's claims
    pub subject_id: i64,
    /// Role membership from the credential's claims
    pub role: Role,
}
