use super::layout::{Layout, Mode, COLS, DONE, NEXT_PAGE, ROWS};
use super::navigation::{is_control_filler, PAGE_COL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct LayoutIssue {
    pub layout: String,
    pub message: String,
    pub kind: IssueKind,
}

impl LayoutIssue {
    pub fn is_error(&self) -> bool {
        self.kind == IssueKind::Error
    }

    fn error(layout: &Layout, message: String) -> Self {
        Self { layout: layout.label.to_string(), message, kind: IssueKind::Error }
    }

    fn warning(layout: &Layout, message: String) -> Self {
        Self { layout: layout.label.to_string(), message, kind: IssueKind::Warning }
    }
}

/// Check a layout for configuration defects before it is used for navigation
///
/// Errors make the layout unusable. Warnings flag grids that navigate
/// correctly but only because the cursor search is bounded, such as a row or
/// column made entirely of empty cells.
pub fn validate_layout(layout: &Layout) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();

    if layout.label.trim().is_empty() {
        issues.push(LayoutIssue::error(layout, "label is empty".to_string()));
    }

    let selectable = (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| (row, col)))
        .filter(|&(row, col)| !layout.is_empty_cell(row, col) && !is_control_filler(row, col))
        .count();
    if selectable == 0 {
        issues.push(LayoutIssue::error(layout, "no selectable cell".to_string()));
    }

    if layout.find(DONE).is_empty() {
        issues.push(LayoutIssue::error(layout, format!("no {} key", DONE)));
    }

    for (row, col) in layout.find(NEXT_PAGE) {
        if row != ROWS - 1 || col != PAGE_COL {
            issues.push(LayoutIssue::warning(
                layout,
                format!("{} key at ({}, {}) is outside the bottom-right control slot", NEXT_PAGE, row, col),
            ));
        }
    }

    for row in 0..ROWS {
        if (0..COLS).all(|col| layout.is_empty_cell(row, col)) {
            issues.push(LayoutIssue::warning(layout, format!("row {} has no keys", row)));
        }
    }
    for col in 0..COLS {
        if (0..ROWS).all(|row| layout.is_empty_cell(row, col)) {
            issues.push(LayoutIssue::warning(layout, format!("column {} has no keys", col)));
        }
    }

    issues
}

/// Validate a full layout table, tagging every issue with its mode
///
/// The registry and the `validate` command both go through here.
pub fn validate_table(layouts: &[Layout; Mode::COUNT]) -> Vec<(Mode, LayoutIssue)> {
    Mode::ALL
        .iter()
        .zip(layouts.iter())
        .flat_map(|(mode, layout)| validate_layout(layout).into_iter().map(move |issue| (*mode, issue)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::layout::SPACE;
    use crate::keyboard::layouts::BUILTIN_LAYOUTS;

    fn errors(issues: &[LayoutIssue]) -> usize {
        issues.iter().filter(|i| i.is_error()).count()
    }

    #[test]
    fn test_builtin_layouts_have_no_errors() {
        for (mode, layout) in Mode::ALL.iter().zip(BUILTIN_LAYOUTS.iter()) {
            let issues = validate_layout(layout);
            assert_eq!(errors(&issues), 0, "{}: {:?}", mode, issues);
        }
    }

    #[test]
    fn test_table_issues_are_tagged_with_mode() {
        let issues = validate_table(&BUILTIN_LAYOUTS);
        assert!(!issues.iter().any(|(_, issue)| issue.is_error()));
        assert!(issues
            .iter()
            .any(|(mode, issue)| *mode == Mode::Symbol && issue.message == "row 6 has no keys"));

        let mut broken = BUILTIN_LAYOUTS.clone();
        broken[Mode::Hangul2.index()] = Layout::new("", [[""; COLS]; ROWS]);
        let errors: Vec<Mode> = validate_table(&broken)
            .into_iter()
            .filter(|(_, issue)| issue.is_error())
            .map(|(mode, _)| mode)
            .collect();
        assert_eq!(errors, vec![Mode::Hangul2; 3]);
    }

    #[test]
    fn test_empty_rows_are_flagged() {
        let issues = validate_layout(&BUILTIN_LAYOUTS[Mode::Symbol.index()]);
        assert_eq!(errors(&issues), 0);
        let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert!(messages.contains(&"row 6 has no keys"));
        assert!(messages.contains(&"row 7 has no keys"));
    }

    #[test]
    fn test_empty_column_is_flagged() {
        let mut grid = [["A"; COLS]; ROWS];
        for row in grid.iter_mut() {
            row[3] = "";
        }
        grid[ROWS - 1][PAGE_COL] = NEXT_PAGE;
        grid[ROWS - 1][COLS - 2] = DONE;
        let issues = validate_layout(&Layout::new("<Test>", grid));
        assert_eq!(errors(&issues), 0);
        assert!(issues.iter().any(|i| i.message == "column 3 has no keys"));
    }

    #[test]
    fn test_missing_done_and_label_are_errors() {
        let mut grid = [[""; COLS]; ROWS];
        grid[0][0] = SPACE;
        let issues = validate_layout(&Layout::new(" ", grid));
        assert_eq!(errors(&issues), 2);
    }

    #[test]
    fn test_misplaced_page_key_is_a_warning() {
        let mut grid = [["x"; COLS]; ROWS];
        grid[0][0] = NEXT_PAGE;
        grid[ROWS - 1][COLS - 2] = DONE;
        let issues = validate_layout(&Layout::new("<Test>", grid));
        assert_eq!(errors(&issues), 0);
        assert!(issues.iter().any(|i| i.kind == IssueKind::Warning && i.message.contains("(0, 0)")));
    }
}
