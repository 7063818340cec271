//! Field-name compatibility shim for the reset payload.
//!
//! Older clients send the password as `new_password`; current ones send
//! `newPassword`. Precedence is resolved here, in one tested place,
//! rather than through ad hoc fallback chains at the call sites.

/// Resolve the new-password value from its canonical and legacy fields
///
/// The canonical field wins whenever it is present; the legacy field is
/// consulted only when the canonical one is absent. Neither present
/// yields `None` ("unresolved"). No validation happens here.
pub fn resolve_new_password(canonical: Option<&str>, legacy: Option<&str>) -> Option<String> {
    canonical.or(legacy).map(str::to_owned)
}
