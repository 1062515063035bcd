use asc_catalog::{AgentRole, Skill};
use asc_planning::{CollaborationPattern, ComplexityTier, TeamPlanner};
use asc_topology::{build_graph, build_graph_from_label, TopologyShape};
use proptest::prelude::*;

fn any_roles(max: usize) -> impl Strategy<Value = Vec<AgentRole>> {
    prop::collection::vec(prop::sample::select(AgentRole::ALL.to_vec()), 0..=max)
}

fn any_pattern() -> impl Strategy<Value = CollaborationPattern> {
    prop::sample::select(CollaborationPattern::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_fully_connected_is_complete(roles in any_roles(12)) {
        let n = roles.len();
        let g = build_graph(&roles, CollaborationPattern::FullyConnected);
        prop_assert_eq!(g.edge_count(), n * n.saturating_sub(1) / 2);
        if n >= 2 {
            prop_assert_eq!(g.connectivity(), 1.0);
        }
    }

    #[test]
    fn prop_sequential_has_n_minus_one_edges(roles in any_roles(12)) {
        let g = build_graph(&roles, CollaborationPattern::Sequential);
        prop_assert_eq!(g.edge_count(), roles.len().saturating_sub(1));
    }

    #[test]
    fn prop_connectivity_in_unit_range(roles in any_roles(12), pattern in any_pattern()) {
        let g = build_graph(&roles, pattern);
        prop_assert!((0.0..=1.0).contains(&g.connectivity()));
        prop_assert_eq!(g.node_count(), roles.len());
        for e in g.edges() {
            prop_assert!(e.from < roles.len() && e.to < roles.len());
        }
    }

    #[test]
    fn prop_arbitrary_labels_never_panic(roles in any_roles(6), label in "[a-z_]{0,20}") {
        let g = build_graph_from_label(&roles, &label);
        prop_assert_eq!(g.node_count(), roles.len());
        if label.parse::<CollaborationPattern>().is_err() {
            prop_assert_eq!(g.shape(), TopologyShape::Placeholder);
        }
    }

    #[test]
    fn prop_planned_teams_build_connected_graphs(
        tier in prop::sample::select(ComplexityTier::ALL.to_vec()),
        skills in prop::collection::vec(prop::sample::select(Skill::REQUIRABLE.to_vec()), 0..6)
    ) {
        let plan = TeamPlanner::default().form_team(tier, &skills);
        let g = build_graph(&plan.roles, plan.pattern);
        prop_assert_eq!(g.node_count(), plan.roles.len());
        prop_assert!(g.is_connected());
    }
}
