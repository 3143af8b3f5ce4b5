//! Plain-text rendering of search results and comparison tables.

use crate::{mlb::types::PlayerCandidate, session::ComparisonReport};

/// Appended to the better value in a row.
pub const BETTER_MARKER: &str = "*";

/// Numbered candidate list, one per line: `  1. Aaron Judge (New York Yankees) [RF] #592450`.
pub fn render_candidates(candidates: &[PlayerCandidate]) -> String {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let position = c
                .position
                .as_deref()
                .map(|p| format!(" [{p}]"))
                .unwrap_or_default();
            format!("{:>3}. {}{} #{}", i + 1, c, position, c.id)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Side-by-side table; the better value in each row is marked with `*`.
pub fn render_table(report: &ComparisonReport, verbose: bool) -> String {
    let cell = |value: &str, better: bool| {
        if better {
            format!("{value} {BETTER_MARKER}")
        } else {
            value.to_string()
        }
    };
    let left_cells: Vec<String> = report
        .rows
        .iter()
        .map(|r| cell(&r.left, r.left_better))
        .collect();
    let right_cells: Vec<String> = report
        .rows
        .iter()
        .map(|r| cell(&r.right, r.right_better))
        .collect();

    let label_w = report
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .chain(std::iter::once(4))
        .max()
        .unwrap_or(4);
    let left_w = left_cells
        .iter()
        .map(|c| c.chars().count())
        .chain(std::iter::once(report.left.name.chars().count()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{:<label_w$}  {:<left_w$}  {}",
        "Stat", report.left.name, report.right.name
    )];

    if verbose {
        let describe = |team: &Option<String>, position: &Option<String>| match (team, position) {
            (Some(t), Some(p)) => format!("{t}, {p}"),
            (Some(t), None) => t.clone(),
            (None, Some(p)) => p.clone(),
            (None, None) => String::new(),
        };
        lines.push(format!(
            "{:<label_w$}  {:<left_w$}  {}",
            "",
            describe(&report.left.team, &report.left.position),
            describe(&report.right.team, &report.right.position)
        ));
    }

    let right_w = right_cells
        .iter()
        .map(|c| c.chars().count())
        .chain(std::iter::once(report.right.name.chars().count()))
        .max()
        .unwrap_or(0);
    lines.push("-".repeat(label_w + left_w + right_w + 4));

    for ((row, left), right) in report.rows.iter().zip(&left_cells).zip(&right_cells) {
        lines.push(
            format!("{:<label_w$}  {:<left_w$}  {}", row.label, left, right)
                .trim_end()
                .to_string(),
        );
    }

    if verbose {
        for header in [&report.left, &report.right] {
            if let Some(url) = &header.headshot_url {
                lines.push(format!("Player {} headshot: {}", header.slot, url));
            }
        }
    }

    lines.join("\n")
}
