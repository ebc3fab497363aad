pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{GroupId, SpaceId, UserId};

#[derive(Debug, Clone)]
pub struct Space {
    pub space_id: SpaceId,
    pub space_name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: SpaceOwner,
    pub role_groups: RoleGroups,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceOwner {
    pub owner_id: UserId,
    pub owner_name: String,
}

/// The three fixed membership groups every space is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGroups {
    pub team: GroupId,
    pub members: GroupId,
    pub admins: GroupId,
}

impl RoleGroups {
    pub fn contains(&self, group_id: GroupId) -> bool {
        group_id == self.team || group_id == self.members || group_id == self.admins
    }
}

impl Space {
    /// True if any of the given groups is one of this space's role groups.
    pub fn has_member(&self, group_ids: &[GroupId]) -> bool {
        group_ids.iter().any(|id| self.role_groups.contains(*id))
    }
}

/// Narrows an accessible-space list down to the spaces the user is an actual
/// member of, keeping the input order.
pub fn filter_member_spaces(spaces: &[Space], group_ids: &[GroupId]) -> Vec<Space> {
    spaces
        .iter()
        .filter(|space| space.has_member(group_ids))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(name: &str, role_groups: RoleGroups) -> Space {
        Space {
            space_id: SpaceId::new(),
            space_name: name.into(),
            created_at: Utc::now(),
            expires_at: None,
            created_by: SpaceOwner {
                owner_id: UserId::new(),
                owner_name: "owner".into(),
            },
            role_groups,
        }
    }

    fn role_groups() -> RoleGroups {
        RoleGroups {
            team: GroupId::new(),
            members: GroupId::new(),
            admins: GroupId::new(),
        }
    }

    #[test]
    fn role_groups_contain_each_of_the_three_groups() {
        let groups = role_groups();
        assert!(groups.contains(groups.team));
        assert!(groups.contains(groups.members));
        assert!(groups.contains(groups.admins));
        assert!(!groups.contains(GroupId::new()));
    }

    #[test]
    fn member_spaces_require_one_of_the_three_role_groups() {
        let first = role_groups();
        let second = role_groups();
        let spaces = vec![space("first", first), space("second", second)];

        let kept = filter_member_spaces(&spaces, &[second.members]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].space_name, "second");

        let kept = filter_member_spaces(&spaces, &[first.admins, second.team]);
        assert_eq!(kept.len(), 2);

        assert!(filter_member_spaces(&spaces, &[GroupId::new()]).is_empty());
        assert!(filter_member_spaces(&spaces, &[]).is_empty());
    }

    #[test]
    fn member_filter_preserves_input_order() {
        let first = role_groups();
        let second = role_groups();
        let third = role_groups();
        let spaces = vec![
            space("first", first),
            space("second", second),
            space("third", third),
        ];

        let kept = filter_member_spaces(&spaces, &[third.team, first.team]);
        let names: Vec<_> = kept.iter().map(|s| s.space_name.as_str()).collect();
        assert_eq!(names, ["first", "third"]);
    }
}
