use asc_cli::{build_cli, execute, load_config, render};
use asc_test_utils::{
    assert_graph_matches_plan, assert_trace_well_formed, setup_fixed_target_coordinator,
    setup_test_coordinator, two_record_ledger, write_config, write_sample_config,
};
use pretty_assertions::assert_eq;

fn args<'a>(base: &[&'a str], config: &'a str) -> Vec<&'a str> {
    let mut v = base.to_vec();
    v.extend(["--config", config]);
    v
}

#[test]
fn config_flag_is_visible_after_subcommand() {
    let cfg = write_sample_config();
    let path = cfg.path.to_str().unwrap();
    let matches = build_cli()
        .try_get_matches_from(args(&["asc", "demo"], path))
        .unwrap();

    let config = load_config(&matches).unwrap();
    assert_eq!(config.team.max_team_size, 4);
    assert_eq!(config.analytics.success_threshold, 0.75);
}

#[tokio::test]
async fn plan_json_uses_configured_limits() {
    let cfg = write_sample_config();
    let path = cfg.path.to_str().unwrap();
    let matches = build_cli()
        .try_get_matches_from(args(
            &["asc", "plan", "Evaluate solar and wind power", "--domain", "energy", "--json"],
            path,
        ))
        .unwrap();

    let out = execute(&matches).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["task"]["tier"], "high");
    assert_eq!(json["task"]["domain"], "energy");
    assert!(json["plan"]["roles"].as_array().unwrap().len() <= 4);
    assert_eq!(json["trace"]["values"][0], 0.65);
    assert_eq!(json["trace"]["target"], 0.9);
}

#[tokio::test]
async fn invalid_config_is_reported() {
    let cfg = write_config("[team]\nmax_team_size = 0\n");
    let path = cfg.path.to_str().unwrap();
    let matches = build_cli()
        .try_get_matches_from(args(&["asc", "demo"], path))
        .unwrap();

    let err = execute(&matches).await.unwrap_err();
    assert!(format!("{err:#}").contains("team.max_team_size"));
}

#[tokio::test]
async fn demo_text_lists_queries_and_insights() {
    let matches = build_cli().try_get_matches_from(["asc", "demo"]).unwrap();
    let out = execute(&matches).await.unwrap();

    assert!(out.contains("== Query 5 =="));
    assert!(out.contains("Edge Optimization"));
    assert!(out.contains("Node Optimization"));
    assert!(out.contains("Best pattern:"));
    assert!(out.contains("  * "));
}

#[tokio::test]
async fn demo_json_has_every_section() {
    let matches = build_cli().try_get_matches_from(["asc", "demo", "--json"]).unwrap();
    let out = execute(&matches).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["outcomes"].as_array().unwrap().len(), 5);
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 2);
    assert_eq!(json["analytics"]["status"], "summary");
    assert_eq!(json["analytics"]["total_tasks"], 5);
}

#[tokio::test]
async fn topology_text_lists_nodes() {
    let matches = build_cli()
        .try_get_matches_from([
            "asc", "topology", "--roles", "IO,TOT,WEB,CODE", "--pattern", "hub_and_spoke",
        ])
        .unwrap();
    let out = execute(&matches).await.unwrap();

    assert!(out.contains("4 nodes, 3 edges"));
    assert!(out.contains("IO_0         degree 3 #FF6B6B"));
    assert!(out.contains("TOT_1        degree 1 #4ECDC4"));
}

#[test]
fn rendered_analytics_match_ledger() {
    let mut out = String::new();
    render::analytics(&mut out, &two_record_ledger().report()).unwrap();

    assert!(out.contains("Tasks:        2"));
    assert!(out.contains("Success rate: 50.0%"));
    assert!(out.contains("  medium           0.000"));
    assert!(out.contains("Best pattern: hub_and_spoke"));
    assert!(out.contains("  * Centralized coordination works well"));
}

#[test]
fn rendered_outcomes_are_well_formed() {
    let coordinator = setup_test_coordinator();
    let fixed = setup_fixed_target_coordinator(0.65, 0.85);

    for query in asc_core::DEMO_QUERIES {
        for c in [&coordinator, &fixed] {
            let outcome = c.process(query, "research");
            assert_trace_well_formed(&outcome.trace, 10);
            assert_graph_matches_plan(&outcome.graph, &outcome.plan);

            let mut out = String::new();
            render::outcome(&mut out, &outcome).unwrap();
            assert!(out.contains(query));
        }
    }
    assert_eq!(fixed.ledger().len(), 5);
}
