//! Authorization rules for file records.
//!
//! Two predicates decide every access: reads are allowed on public
//! records or to the owner; writes are owner-only with no administrative
//! override. "Not authenticated at all" and "authenticated but not the
//! owner" are distinguished by the caller being `None` versus `Some` —
//! the service layer maps the two onto different externally visible
//! errors depending on the operation.
//!
//! Metadata lookups apply the write rule directly at the store as
//! owner-constrained lookups (`find_owned`), so that an ownership miss
//! is indistinguishable from a missing record; mutations check
//! [`can_write`] against the fetched record and report the same miss.

use filebox_entity::file::FileRecord;

use crate::context::Caller;

/// Whether `caller` may read `record`'s content.
pub fn can_read(caller: Option<&Caller>, record: &FileRecord) -> bool {
    record.is_public || caller.is_some_and(|c| c.user_id == record.user_id)
}

/// Whether `caller` may mutate `record`. Owner-only.
pub fn can_write(caller: Option<&Caller>, record: &FileRecord) -> bool {
    caller.is_some_and(|c| c.user_id == record.user_id)
}
