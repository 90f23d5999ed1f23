use std::io::Write;

use unicode_width::{
    UnicodeWidthChar,
    UnicodeWidthStr,
};

use crate::domain::FlatRecord;
use crate::error::CoreResult;

/// Column labels; downstream parsers depend on their order and spelling
pub const HEADERS: [&str; 9] = [
    "Repository",
    "Workflow",
    "Event",
    "Job",
    "JobStartedAt",
    "JobCompletedAt",
    "Conclusion",
    "AnnotationLevel",
    "Message",
];

const COLUMN_GAP: &str = "  ";

/// Narrowest the message column is cut to, however small the terminal
const MIN_MESSAGE_WIDTH: usize = 10;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Space-padded columns for a terminal. With a `max_width` the message
    /// column is shortened so rows fit on one screen line.
    Aligned { max_width: Option<usize> },
    /// One tab between cells, for pipes and files
    Tabs,
}

fn cells(record: &FlatRecord) -> [String; 9] {
    [
        &record.repository,
        &record.workflow_name,
        &record.workflow_event,
        &record.job_name,
        &record.job_started_at,
        &record.job_completed_at,
        &record.job_conclusion,
        &record.annotation_level,
        &record.message,
    ]
    .map(|value| single_line(value))
}

/// Keeps every record on one line
fn single_line(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
        .collect()
}

/// Cuts `value` to at most `limit` terminal columns, marking the cut
fn truncate(value: &str, limit: usize) -> String {
    if value.width() <= limit {
        return value.to_string();
    }

    let budget = limit.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let mut cut: String = value
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    cut.push_str(ELLIPSIS);
    cut
}

pub fn render_table<W: Write>(
    records: &[FlatRecord], style: TableStyle, out: &mut W,
) -> CoreResult<()> {
    let header = HEADERS.map(String::from);
    let rows: Vec<[String; 9]> = std::iter::once(header)
        .chain(records.iter().map(cells))
        .collect();

    match style {
        TableStyle::Tabs => {
            for row in &rows {
                writeln!(out, "{}", row.join("\t"))?;
            }
        }
        TableStyle::Aligned { max_width } => {
            let mut widths = [0usize; 9];
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.width());
                }
            }

            let last = HEADERS.len() - 1;
            let message_limit = max_width.map(|max| {
                let leading: usize = widths[..last].iter().sum::<usize>() + COLUMN_GAP.len() * last;
                max.saturating_sub(leading).max(MIN_MESSAGE_WIDTH)
            });

            for row in &rows {
                let mut line = String::new();
                for (i, cell) in row[..last].iter().enumerate() {
                    line.push_str(cell);
                    line.extend(std::iter::repeat(' ').take(widths[i] - cell.width()));
                    line.push_str(COLUMN_GAP);
                }
                match message_limit {
                    Some(limit) => line.push_str(&truncate(&row[last], limit)),
                    None => line.push_str(&row[last]),
                }
                writeln!(out, "{line}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(workflow: &str, job: &str, level: &str, message: &str) -> FlatRecord {
        FlatRecord {
            repository: "swfz/gh-annotations".to_string(),
            workflow_name: workflow.to_string(),
            workflow_event: "push".to_string(),
            workflow_path: ".github/workflows/sample.yml".to_string(),
            workflow_url: String::new(),
            workflow_started_at: String::new(),
            workflow_created_at: String::new(),
            workflow_updated_at: String::new(),
            job_name: job.to_string(),
            job_conclusion: "success".to_string(),
            job_started_at: "2023-03-20T10:00:00Z".to_string(),
            job_completed_at: "2023-03-20T10:02:00Z".to_string(),
            annotation_level: level.to_string(),
            message: message.to_string(),
            annotation_path: String::new(),
            annotation_title: String::new(),
            start_line: 0,
            end_line: 0,
        }
    }

    const ALIGNED: TableStyle = TableStyle::Aligned { max_width: None };

    fn render(records: &[FlatRecord], style: TableStyle) -> String {
        let mut out = Vec::new();
        render_table(records, style, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(
            render(&[], ALIGNED),
            "Repository  Workflow  Event  Job  JobStartedAt  JobCompletedAt  Conclusion  AnnotationLevel  Message\n"
        );
    }

    #[test]
    fn test_aligned_rows() {
        let records = vec![
            record("Sample Workflow Run", "Sample Job", "warning", "This is a sample annotation"),
            record("Sample Workflow Run", "Sample Job", "warning", "annotation in line"),
        ];

        let expected = concat!(
            "Repository           Workflow             Event  Job         JobStartedAt          JobCompletedAt        Conclusion  AnnotationLevel  Message\n",
            "swfz/gh-annotations  Sample Workflow Run  push   Sample Job  2023-03-20T10:00:00Z  2023-03-20T10:02:00Z  success     warning          This is a sample annotation\n",
            "swfz/gh-annotations  Sample Workflow Run  push   Sample Job  2023-03-20T10:00:00Z  2023-03-20T10:02:00Z  success     warning          annotation in line\n",
        );
        assert_eq!(render(&records, ALIGNED), expected);
    }

    #[test]
    fn test_tab_rows() {
        let records = vec![record("CI", "build", "failure", "boom")];
        let text = render(&records, TableStyle::Tabs);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split('\t').collect::<Vec<_>>(), HEADERS.to_vec());
        assert_eq!(
            lines[1],
            "swfz/gh-annotations\tCI\tpush\tbuild\t2023-03-20T10:00:00Z\t2023-03-20T10:02:00Z\tsuccess\tfailure\tboom"
        );
    }

    #[test]
    fn test_multiline_message_stays_on_one_row() {
        let records = vec![record("CI", "build", "failure", "line one\nline\ttwo")];
        let text = render(&records, TableStyle::Tabs);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("\tline one line two"));
        assert_eq!(lines[1].split('\t').count(), HEADERS.len());
    }

    #[test]
    fn test_alignment_uses_display_width() {
        let records = vec![
            record("ビルド", "build", "notice", "ok"),
            record("abcdef", "build", "notice", "ok"),
        ];
        let text = render(&records, ALIGNED);
        let lines: Vec<&str> = text.lines().collect();

        // Each kana takes two columns, so both names are six columns wide
        let repo_cell = "swfz/gh-annotations  ";
        assert!(lines[0][repo_cell.len()..].starts_with("Workflow  Event"));
        assert!(lines[1][repo_cell.len()..].starts_with("ビルド    push"));
        assert!(lines[2][repo_cell.len()..].starts_with("abcdef    push"));

        let event_column = |line: &str| line[..line.find("push").unwrap()].width();
        assert_eq!(event_column(lines[1]), event_column(lines[2]));
    }

    #[test]
    fn test_wide_message_is_cut_to_terminal_width() {
        let message = "x".repeat(200);
        let records = vec![record("CI", "build", "failure", &message)];
        let text = render(&records, TableStyle::Aligned { max_width: Some(150) });
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].ends_with("AnnotationLevel  Message"));
        assert_eq!(lines[1].width(), 150);
        assert!(lines[1].ends_with("x..."));
    }

    #[test]
    fn test_rows_that_fit_are_untouched() {
        let records = vec![record("CI", "build", "failure", "short message")];
        assert_eq!(
            render(&records, TableStyle::Aligned { max_width: Some(500) }),
            render(&records, ALIGNED)
        );
    }

    #[test]
    fn test_narrow_terminal_keeps_some_message() {
        let message = "x".repeat(200);
        let records = vec![record("CI", "build", "failure", &message)];
        let text = render(&records, TableStyle::Aligned { max_width: Some(40) });
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[1].ends_with("failure          xxxxxxx..."));
    }

    #[test]
    fn test_truncation_respects_wide_characters() {
        assert_eq!(truncate("ああああああ", 12), "ああああああ");
        assert_eq!(truncate("あああああああああ", 13), "あああああ...");
        assert_eq!(truncate("abcdefghijkl", 10), "abcdefg...");
    }
}
