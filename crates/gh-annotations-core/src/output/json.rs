use std::io::Write;

use crate::domain::FlatRecord;
use crate::error::CoreResult;

/// Pretty-printed array; an empty slice prints `[]`
pub fn render_json<W: Write>(records: &[FlatRecord], out: &mut W) -> CoreResult<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use gh_annotations_api::{
        Annotation,
        Job,
        RepoRef,
        WorkflowRun,
    };
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_is_brackets() {
        let mut out = Vec::new();
        render_json(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim_end(), "[]");
    }

    #[test]
    fn test_records_are_indented() {
        let repo = RepoRef::new("swfz", "gh-annotations");
        let run: WorkflowRun = serde_json::from_value(json!({
            "id": 1001, "workflow_id": 1, "name": "Sample Workflow Run", "event": "push"
        }))
        .unwrap();
        let job: Job = serde_json::from_value(json!({ "id": 10001, "name": "Sample Job" })).unwrap();
        let annotation: Annotation = serde_json::from_value(json!({
            "annotation_level": "warning",
            "message": "This is a sample annotation"
        }))
        .unwrap();
        let record = FlatRecord::from_parts(&repo, &run, &job, &annotation);

        let mut out = Vec::new();
        render_json(std::slice::from_ref(&record), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("[\n  {\n    \"repository\": \"swfz/gh-annotations\""));
        let parsed: Vec<FlatRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![record]);
    }
}
