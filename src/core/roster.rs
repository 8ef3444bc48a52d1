//! Teams, their members, and the roster store.

use parking_lot::RwLock;
use uuid::Uuid;

use crate::core::error::{Entity, FloorError};

/// A person on a team.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TeamMember {
    /// Unique member identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email; unique within a team, compared case-insensitively.
    pub email: String,
}

impl TeamMember {
    /// Member with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A production team and its membership roster.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Team {
    /// Stable team identifier, shared with the team's capacity resource.
    pub id: String,
    /// Human-readable team name.
    pub name: String,
    /// Members in insertion order.
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Empty team.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Copy of this team with `member` appended.
    ///
    /// Pure: `self` is untouched either way, so a failed add leaves no
    /// partial state behind.
    ///
    /// # Errors
    /// Returns [`FloorError::DuplicateMember`] when a member with the same
    /// email (ASCII-case-insensitively) already exists.
    pub fn with_member(&self, member: TeamMember) -> Result<Self, FloorError> {
        if self
            .members
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(&member.email))
        {
            return Err(FloorError::DuplicateMember {
                team_id: self.id.clone(),
                email: member.email,
            });
        }
        let mut next = self.clone();
        next.members.push(member);
        Ok(next)
    }
}

/// Shared store of team rosters.
///
/// Membership changes swap in the team produced by the pure
/// [`Team::with_member`], under the write lock, so a rejected add never
/// leaves a half-written roster.
#[derive(Debug, Default)]
pub struct RosterStore {
    inner: RwLock<Vec<Team>>,
}

impl RosterStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new team.
    ///
    /// # Errors
    /// Returns [`FloorError::InvalidConfig`] when the team id is already
    /// registered.
    pub fn register(&self, team: Team) -> Result<(), FloorError> {
        let mut teams = self.inner.write();
        if teams.iter().any(|existing| existing.id == team.id) {
            return Err(FloorError::InvalidConfig(format!(
                "team `{}` already registered",
                team.id
            )));
        }
        teams.push(team);
        Ok(())
    }

    /// Add a member to a team, returning the updated roster.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown team and
    /// [`FloorError::DuplicateMember`] on an email collision.
    pub fn add_member(&self, team_id: &str, member: TeamMember) -> Result<Team, FloorError> {
        let mut teams = self.inner.write();
        let slot = teams
            .iter_mut()
            .find(|team| team.id == team_id)
            .ok_or_else(|| FloorError::NotFound {
                entity: Entity::Team,
                id: team_id.to_string(),
            })?;
        let updated = slot.with_member(member)?;
        *slot = updated.clone();
        Ok(updated)
    }

    /// Copy of one team's roster.
    #[must_use]
    pub fn team(&self, team_id: &str) -> Option<Team> {
        self.inner.read().iter().find(|t| t.id == team_id).cloned()
    }

    /// Every team, in registration order.
    #[must_use]
    pub fn teams(&self) -> Vec<Team> {
        self.inner.read().clone()
    }
}
