//! Membership filter
//!
//! Removes members that should never show up in member-facing reports: the
//! configured ignore list plus the service's placeholder accounts.

use super::member::{Member, Members};

/// Placeholder accounts the service creates in every workspace
pub const ALWAYS_IGNORED: [&str; 2] = ["unassigned", "everyone"];

/// Returns true if `member` matches an ignore entry or a placeholder account
///
/// User name and email are checked independently and case-sensitively.
pub fn is_ignored<S: AsRef<str>>(member: &Member, ignore: &[S]) -> bool {
    let matches = |value: &str| {
        ALWAYS_IGNORED.contains(&value) || ignore.iter().any(|entry| entry.as_ref() == value)
    };

    matches(&member.user_name) || matches(&member.email)
}

/// Drops ignored members from the mapping
pub fn filter_members<S: AsRef<str>>(raw: Members, ignore: &[S]) -> Members {
    raw.into_iter()
        .filter(|(_, member)| !is_ignored(member, ignore))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::{index_members, MemberId};
    use proptest::prelude::*;

    const NO_IGNORES: [&str; 0] = [];

    #[test]
    fn placeholder_accounts_always_dropped() {
        let raw = index_members(vec![
            Member::new(1, "alice", "a@x.com"),
            Member::new(2, "unassigned", "u@x.com"),
        ]);

        let filtered = filter_members(raw, &NO_IGNORES);

        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key(&MemberId(1)));
    }

    #[test]
    fn everyone_matched_by_email_field_too() {
        let raw = index_members(vec![Member::new(3, "Everyone", "everyone")]);
        assert!(filter_members(raw, &NO_IGNORES).is_empty());
    }

    #[test]
    fn ignore_list_matches_name_or_email() {
        let raw = index_members(vec![
            Member::new(1, "alice", "a@x.com"),
            Member::new(2, "bob", "b@x.com"),
            Member::new(3, "carol", "c@x.com"),
        ]);

        let filtered = filter_members(raw, &["bob", "c@x.com"]);

        let mut ids: Vec<_> = filtered.keys().copied().collect();
        ids.sort();
        assert_eq!(ids, vec![MemberId(1)]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let raw = index_members(vec![
            Member::new(1, "Alice", "A@X.com"),
            Member::new(2, "Unassigned", "nobody@x.com"),
        ]);

        let filtered = filter_members(raw, &["alice", "a@x.com"]);
        assert_eq!(filtered.len(), 2);
    }

    fn word() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("unassigned".to_string()),
            Just("everyone".to_string()),
            "[a-c]{1,2}",
        ]
    }

    fn member_strategy() -> impl Strategy<Value = Member> {
        (any::<u16>(), word(), word())
            .prop_map(|(id, name, email)| Member::new(u64::from(id), name, email))
    }

    proptest! {
        #[test]
        fn filtered_members_never_match_ignores(
            members in prop::collection::vec(member_strategy(), 0..20),
            ignore in prop::collection::vec("[a-c]{1,2}", 0..4),
        ) {
            let raw = index_members(members);
            let filtered = filter_members(raw.clone(), &ignore[..]);

            for member in filtered.values() {
                for value in [&member.user_name, &member.email] {
                    prop_assert!(!ignore.contains(value));
                    prop_assert!(!ALWAYS_IGNORED.contains(&value.as_str()));
                }
            }

            // Nothing else is dropped
            let kept = raw.values().filter(|m| !is_ignored(m, &ignore[..])).count();
            prop_assert_eq!(filtered.len(), kept);
        }
    }
}
