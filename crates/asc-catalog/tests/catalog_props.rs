use asc_catalog::{AgentRole, CapabilityCatalog, Skill};
use proptest::prelude::*;

fn any_role() -> impl Strategy<Value = AgentRole> {
    prop::sample::select(AgentRole::ALL.to_vec())
}

fn any_skill() -> impl Strategy<Value = Skill> {
    prop::sample::select(Skill::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_first_role_never_excluded(
        skill in any_skill(),
        exclude in prop::collection::vec(any_role(), 0..6)
    ) {
        let catalog = CapabilityCatalog::standard();
        if let Some(role) = catalog.first_role_with(skill, &exclude) {
            prop_assert!(!exclude.contains(&role));
            prop_assert!(catalog.role_satisfies(role, skill));
        }
    }

    #[test]
    fn prop_first_role_is_earliest_match(skill in any_skill()) {
        let catalog = CapabilityCatalog::standard();
        let expected = catalog
            .entries()
            .iter()
            .find(|e| e.skills.contains(&skill))
            .map(|e| e.role);
        prop_assert_eq!(catalog.first_role_with(skill, &[]), expected);
    }

    #[test]
    fn prop_labels_parse_back(role in any_role(), skill in any_skill()) {
        prop_assert_eq!(role.to_string().parse::<AgentRole>().unwrap(), role);
        prop_assert_eq!(skill.to_string().parse::<Skill>().unwrap(), skill);
    }
}

#[test]
fn every_skill_belongs_to_exactly_one_standard_role() {
    let catalog = CapabilityCatalog::standard();
    for skill in Skill::ALL {
        let owners = catalog.entries().iter().filter(|e| e.satisfies(skill)).count();
        assert_eq!(owners, 1, "{skill} owned by {owners} roles");
    }
}
