//! Plain-text rendering of pipeline results

use asc_core::prelude::*;
use asc_core::DemoReport;
use asc_optimize::{PerformanceTrace, ScenarioResult};
use std::fmt::{self, Write};

/// Render one processed task
pub fn outcome(out: &mut String, outcome: &TaskOutcome) -> fmt::Result {
    let task = &outcome.task;
    let plan = &outcome.plan;

    writeln!(out, "Task {} [{}]", task.id(), task.domain())?;
    writeln!(out, "  Query:      {}", task.query())?;
    writeln!(
        out,
        "  Tier:       {} (time limit {}s)",
        task.tier(),
        task.time_limit().as_secs()
    )?;
    writeln!(out, "  Skills:     {}", join(task.required_skills()))?;
    writeln!(out, "  Team:       {}", join(&plan.roles))?;
    writeln!(out, "  Strategy:   {}", plan.strategy)?;
    writeln!(out, "  Pattern:    {}", plan.pattern)?;
    writeln!(out, "  Predicted:  {:.3}", plan.predicted_performance)?;
    if !plan.uncovered_skills.is_empty() {
        writeln!(out, "  Uncovered:  {}", join(&plan.uncovered_skills))?;
    }
    graph(out, &outcome.graph)?;
    writeln!(out, "  Trace:      {}", trace_line(&outcome.trace))?;
    writeln!(
        out,
        "  Final:      {:.3} ({})",
        outcome.final_performance,
        if outcome.success { "success" } else { "below threshold" }
    )
}

/// Render a graph summary with one line per node
pub fn graph(out: &mut String, graph: &TopologyGraph) -> fmt::Result {
    writeln!(
        out,
        "  Graph:      {} nodes, {} edges, connectivity {:.2}",
        graph.node_count(),
        graph.edge_count(),
        graph.connectivity()
    )?;
    for node in graph.nodes() {
        writeln!(
            out,
            "    {:<12} degree {} {}",
            node.label,
            graph.degree(node.id),
            node.color
        )?;
    }
    Ok(())
}

/// Render a simulated trace
pub fn trace(out: &mut String, trace: &PerformanceTrace) -> fmt::Result {
    writeln!(out, "Trace:       {}", trace_line(trace))?;
    writeln!(out, "Iterations:  {}", trace.iterations())?;
    writeln!(out, "Improvement: {:+.3}", trace.improvement())?;
    writeln!(out, "Converged:   {}", trace.converged())
}

/// Render one optimization scenario
pub fn scenario(out: &mut String, result: &ScenarioResult) -> fmt::Result {
    let s = &result.scenario;
    writeln!(out, "{} ({})", s.name, s.description)?;
    writeln!(out, "  {:.2} -> {:.2}: {}", s.initial, s.target, trace_line(&result.trace))?;
    writeln!(out, "  Improvement: {:+.3}", result.improvement)
}

/// Render analytics and insights
pub fn analytics(out: &mut String, analytics: &Analytics) -> fmt::Result {
    let Some(summary) = analytics.summary() else {
        return writeln!(out, "No tasks recorded");
    };

    writeln!(out, "Tasks:        {}", summary.total_tasks)?;
    writeln!(out, "Success rate: {:.1}%", summary.success_rate * 100.0)?;
    writeln!(out, "Average:      {:.3}", summary.average_performance)?;
    for (tier, avg) in &summary.tier_performance {
        writeln!(out, "  {:<16} {avg:.3}", tier.as_str())?;
    }
    for (pattern, avg) in &summary.pattern_performance {
        writeln!(out, "  {:<16} {avg:.3}", pattern.as_str())?;
    }
    writeln!(out, "Best pattern: {}", summary.best_pattern)?;
    for insight in summary.insights() {
        writeln!(out, "  * {insight}")?;
    }
    Ok(())
}

/// Render a full demo run
pub fn demo(out: &mut String, report: &DemoReport) -> fmt::Result {
    for (i, o) in report.outcomes.iter().enumerate() {
        writeln!(out, "== Query {} ==", i + 1)?;
        outcome(out, o)?;
        writeln!(out)?;
    }
    writeln!(out, "== Optimization ==")?;
    for s in &report.scenarios {
        scenario(out, s)?;
    }
    writeln!(out)?;
    writeln!(out, "== Analytics ==")?;
    analytics(out, &report.analytics)
}

fn trace_line(trace: &PerformanceTrace) -> String {
    trace
        .values()
        .iter()
        .map(|v| format!("{v:.3}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_analytics() {
        let mut out = String::new();
        analytics(&mut out, &Analytics::NoData).unwrap();
        assert_eq!(out, "No tasks recorded\n");
    }

    #[test]
    fn outcome_lists_team_and_trace() {
        let o = Coordinator::default().process("What is machine learning?", "");
        let mut out = String::new();
        outcome(&mut out, &o).unwrap();

        assert!(out.contains("Tier:       low (time limit 60s)"));
        assert!(out.contains("Skills:     -"));
        assert!(out.contains("Team:       IO, IO"));
        assert!(out.contains("Pattern:    sequential"));
        assert!(out.contains("IO_0"));
        assert!(out.contains("0.600 -> "));
    }

    #[test]
    fn join_uses_display_labels() {
        assert_eq!(join(&[AgentRole::Io, AgentRole::Tot]), "IO, TOT");
        assert_eq!(join::<Skill>(&[]), "-");
    }
}
