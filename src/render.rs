//! Plain-text rendering of simulation results.
//!
//! Produces the solution tables (one row per frame, one column per
//! reference), the statistic summary and the worked calculation behind a
//! single statistic.

use std::fmt;

use crate::common::config::EMPTY_SLOT_LABEL;
use crate::common::{FrameId, PageId};
use crate::frames::FrameSnapshot;
use crate::sim::{Access, ShiftStep, Step};
use crate::stats::Statistics;

/// Placeholder for cells dimmed by highlighting.
const DIMMED_CELL: &str = "·";

/// Anything that can be drawn as one table column.
pub trait TableColumn {
    /// The referenced page, shown in the header row.
    fn page(&self) -> PageId;

    /// Frame contents shown in the body.
    fn frames(&self) -> &FrameSnapshot;

    /// Hit/fault flag for the status row, if this column has one.
    fn access(&self) -> Option<Access>;
}

impl TableColumn for Step {
    fn page(&self) -> PageId {
        self.page
    }

    fn frames(&self) -> &FrameSnapshot {
        &self.frames
    }

    fn access(&self) -> Option<Access> {
        Some(self.access)
    }
}

impl TableColumn for ShiftStep {
    fn page(&self) -> PageId {
        self.page
    }

    fn frames(&self) -> &FrameSnapshot {
        &self.frames
    }

    fn access(&self) -> Option<Access> {
        None
    }
}

/// What to include when drawing a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Header row listing the referenced pages.
    pub include_page_row: bool,

    /// Trailing "Status" row with Hit/Fault per column.
    pub include_status: bool,

    /// Dim every column whose status differs from this one.
    pub highlight: Option<Access>,
}

impl TableOptions {
    /// Page row and status row: the main solution table.
    pub fn standard() -> Self {
        Self {
            include_page_row: true,
            include_status: true,
            highlight: None,
        }
    }

    /// Frames only: the visualization table.
    pub fn visualization() -> Self {
        Self {
            include_page_row: false,
            include_status: false,
            highlight: None,
        }
    }

    /// Same options, highlighting columns with the given status.
    pub fn with_highlight(mut self, highlight: Option<Access>) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Draw a solution table.
///
/// Row `i` is labelled `Frame i+1`; each column is one reference. Empty
/// slots are blank. Highlighting only applies to columns that carry a
/// hit/fault flag.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
/// use pagesim::render::{render_table, TableOptions};
/// use pagesim::{simulate_fifo, PageId};
///
/// let pages = [PageId(1), PageId(2), PageId(1)];
/// let result = simulate_fifo(&pages, NonZeroUsize::new(2).unwrap());
/// let table = render_table(&result.steps, 2, TableOptions::standard());
///
/// assert!(table.starts_with("Page"));
/// assert!(table.contains("Frame 2"));
/// assert!(table.lines().last().unwrap().starts_with("Status"));
/// ```
pub fn render_table<C: TableColumn>(
    columns: &[C],
    frame_count: usize,
    options: TableOptions,
) -> String {
    let mut rows: Vec<(String, Vec<String>)> = Vec::with_capacity(frame_count + 2);

    if options.include_page_row {
        let cells = columns.iter().map(|c| c.page().to_string()).collect();
        rows.push(("Page".to_string(), cells));
    }

    for i in 0..frame_count {
        let frame_id = FrameId::new(i);
        let cells = columns
            .iter()
            .map(|c| match c.frames().get(frame_id) {
                Some(page) => page.to_string(),
                None => EMPTY_SLOT_LABEL.to_string(),
            })
            .collect();
        rows.push((frame_id.to_string(), cells));
    }

    if options.include_status {
        let cells = columns
            .iter()
            .map(|c| c.access().map(|a| a.to_string()).unwrap_or_default())
            .collect();
        rows.push(("Status".to_string(), cells));
    }

    // Dim whole columns that do not match the highlighted status
    if let Some(wanted) = options.highlight {
        for (col, column) in columns.iter().enumerate() {
            if matches!(column.access(), Some(access) if access != wanted) {
                for (_, cells) in rows.iter_mut() {
                    cells[col] = DIMMED_CELL.to_string();
                }
            }
        }
    }

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns.len())
        .map(|col| {
            rows.iter()
                .map(|(_, cells)| cells[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (r, (label, cells)) in rows.iter().enumerate() {
        let mut line = format!("{:<width$}", label, width = label_width);
        for (cell, &width) in cells.iter().zip(&widths) {
            line.push_str(" | ");
            let pad = width - cell.chars().count();
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if r == 0 && options.include_page_row {
            let mut rule = "-".repeat(label_width);
            for &width in &widths {
                rule.push_str("-+-");
                rule.push_str(&"-".repeat(width));
            }
            out.push_str(&rule);
            out.push('\n');
        }
    }
    out
}

/// Draw the statistic summary.
pub fn render_statistics(stats: &Statistics) -> String {
    let rows = [
        ("Page Hits", stats.hits.to_string(), format!("{:.2}%", stats.hit_rate)),
        (
            "Page Faults",
            stats.faults.to_string(),
            format!("{:.2}%", stats.fault_rate),
        ),
        ("Total References", stats.total.to_string(), String::new()),
        ("Hit/Fault Ratio", stats.hit_fault_ratio.to_string(), String::new()),
    ];

    let value_width = rows.iter().map(|(_, v, _)| v.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(title, value, rate)| {
            let line = format!("{:<16}  {:>width$}  {}", title, value, rate, width = value_width);
            format!("{}\n", line.trim_end())
        })
        .collect()
}

/// Which statistic to explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Hit,
    Fault,
    Total,
    Ratio,
}

/// Worked calculation for one statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub title: &'static str,
    pub body: String,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n  {}", self.title, self.body)
    }
}

/// Explain how a statistic was computed.
///
/// # Example
/// ```
/// use pagesim::aggregate;
/// use pagesim::render::{explain, StatKind};
///
/// let text = explain(StatKind::Hit, &aggregate(3, 9, 12));
/// assert_eq!(text.title, "Hit Rate Calculation");
/// assert_eq!(text.body, "(3 Hits / 12 Total) * 100% = 25.00%");
/// ```
pub fn explain(kind: StatKind, stats: &Statistics) -> Explanation {
    match kind {
        StatKind::Hit => Explanation {
            title: "Hit Rate Calculation",
            body: format!(
                "({} Hits / {} Total) * 100% = {:.2}%",
                stats.hits, stats.total, stats.hit_rate
            ),
        },
        StatKind::Fault => Explanation {
            title: "Fault Rate Calculation",
            body: format!(
                "({} Faults / {} Total) * 100% = {:.2}%",
                stats.faults, stats.total, stats.fault_rate
            ),
        },
        StatKind::Total => Explanation {
            title: "Total References",
            body: format!(
                "The total number of pages in the reference string is {}.",
                stats.total
            ),
        },
        StatKind::Ratio => Explanation {
            title: "Hit/Fault Ratio Calculation",
            body: format!(
                "{} Hits / {} Faults = {}",
                stats.hits, stats.faults, stats.hit_fault_ratio
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{simulate_fifo, simulate_lru, visualize_lru_shift};
    use crate::stats::aggregate;
    use std::num::NonZeroUsize;

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn two() -> NonZeroUsize {
        NonZeroUsize::new(2).unwrap()
    }

    #[test]
    fn test_standard_table_layout() {
        let result = simulate_fifo(&pages(&[1, 2, 1, 3]), two());
        let table = render_table(&result.steps, 2, TableOptions::standard());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Page    |     1 |     2 |   1 |     3",
                "--------+-------+-------+-----+------",
                "Frame 1 |     1 |     1 |   1 |     3",
                "Frame 2 |       |     2 |   2 |     2",
                "Status  | Fault | Fault | Hit | Fault",
            ]
        );
    }

    #[test]
    fn test_visualization_table_has_frames_only() {
        let refs = pages(&[1, 2, 1]);
        let standard = simulate_lru(&refs, two());
        let view = visualize_lru_shift(&refs, two(), &standard.steps);
        let table = render_table(&view, 2, TableOptions::visualization());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines, vec!["Frame 1 | 1 | 2 | 1", "Frame 2 |   | 1 | 2"]);
    }

    #[test]
    fn test_highlight_dims_other_columns() {
        let result = simulate_fifo(&pages(&[1, 2, 1]), two());
        let options = TableOptions::standard().with_highlight(Some(Access::Hit));
        let table = render_table(&result.steps, 2, options);
        let status = table.lines().last().unwrap();

        assert_eq!(status, "Status  | · | · | Hit");
        assert_eq!(table.lines().next().unwrap(), "Page    | · | · |   1");
    }

    #[test]
    fn test_highlight_ignored_without_status() {
        let refs = pages(&[1, 1]);
        let standard = simulate_fifo(&refs, two());
        let view = crate::sim::visualize_fifo_shift(&refs, two(), &standard.steps);
        let options = TableOptions::visualization().with_highlight(Some(Access::Fault));

        let table = render_table(&view, 2, options);
        assert!(!table.contains(DIMMED_CELL));
    }

    #[test]
    fn test_render_statistics() {
        let text = render_statistics(&aggregate(3, 9, 12));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Page Hits            3  25.00%");
        assert_eq!(lines[1], "Page Faults          9  75.00%");
        assert_eq!(lines[2], "Total References    12");
        assert_eq!(lines[3], "Hit/Fault Ratio   0.33");
    }

    #[test]
    fn test_explain_each_kind() {
        let stats = aggregate(4, 9, 13);

        assert_eq!(
            explain(StatKind::Fault, &stats).body,
            "(9 Faults / 13 Total) * 100% = 69.23%"
        );
        assert_eq!(
            explain(StatKind::Total, &stats).body,
            "The total number of pages in the reference string is 13."
        );
        assert_eq!(
            explain(StatKind::Ratio, &stats).body,
            "4 Hits / 9 Faults = 0.44"
        );
        assert_eq!(
            explain(StatKind::Ratio, &aggregate(0, 0, 0)).body,
            "0 Hits / 0 Faults = N/A"
        );
    }

    #[test]
    fn test_explanation_display() {
        let text = explain(StatKind::Total, &aggregate(1, 1, 2)).to_string();
        assert_eq!(
            text,
            "Total References\n  The total number of pages in the reference string is 2."
        );
    }
}
