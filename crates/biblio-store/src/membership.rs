//! # Membership Operations
//!
//! Member create/update/remove on the [`Library`] store. Same contract
//! shape as the catalog: validate first, explicit `NotFound`, and
//! cascade-restrict removal while open loans exist.

use biblio_core::types::{Member, MemberDraft};
use biblio_core::validation::validate_member_draft;
use tracing::{debug, info};

use crate::error::{InvariantViolation, StoreError, StoreResult};
use crate::library::Library;

impl Library {
    /// Registers a new member.
    pub fn add_member(&mut self, draft: MemberDraft) -> StoreResult<Member> {
        debug!(name = %draft.name, "Adding member");

        validate_member_draft(&draft)?;

        let member = Member {
            id: self.next_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            joined_at: self.now(),
            status: draft.status,
        };

        self.members.push(member.clone());
        info!(id = %member.id, name = %member.name, "Member added");
        Ok(member)
    }

    /// Replaces a member's fields wholesale. `id` and `joined_at` are kept.
    ///
    /// Setting the status to inactive does not touch the member's open
    /// loans; it only blocks new ones at the borrow boundary.
    pub fn update_member(&mut self, id: &str, draft: MemberDraft) -> StoreResult<Member> {
        debug!(id = %id, "Updating member");

        validate_member_draft(&draft)?;

        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("Member", id))?;

        member.name = draft.name;
        member.email = draft.email;
        member.phone = draft.phone;
        member.status = draft.status;

        let member = member.clone();
        info!(id = %member.id, "Member updated");
        Ok(member)
    }

    /// Removes a member from the register.
    ///
    /// ## Returns
    /// * `Err(StoreError::Invariant)` - the member still holds open loans
    pub fn remove_member(&mut self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Removing member");

        if self.member(id).is_none() {
            return Err(StoreError::not_found("Member", id));
        }

        let open = self.open_loans_of_member(id);
        if open > 0 {
            return Err(InvariantViolation::OpenLoansExist {
                entity: "Member",
                id: id.to_string(),
                open,
            }
            .into());
        }

        self.members.retain(|m| m.id != id);
        info!(id = %id, "Member removed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
