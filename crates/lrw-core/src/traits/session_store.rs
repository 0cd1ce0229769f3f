use crate::errors::SessionResult;
use crate::models::AcademicSession;

/// Academic session storage keyed by (tenant, org, sourced id).
pub trait IAcademicSessionStore: Send + Sync {
    /// Look up a session. Fails with `NotFound` when the key is absent.
    fn find_by_sourced_id(
        &self,
        tenant_id: &str,
        org_id: &str,
        sourced_id: &str,
    ) -> SessionResult<AcademicSession>;

    /// Insert or replace a session (last write wins). Fails with
    /// `InvalidArgument` when tenant, org, or sourced id is blank.
    fn upsert(
        &self,
        tenant_id: &str,
        org_id: &str,
        session: AcademicSession,
    ) -> SessionResult<AcademicSession>;
}
