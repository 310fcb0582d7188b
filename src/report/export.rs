use std::path::Path;

use crate::error::Result;
use crate::models::Report;

/// Write a report to a CSV file, one row per label/value pair.
pub fn write_csv(report: &Report, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["section", "label", "value"])?;

    for section in &report.sections {
        for (label, value) in &section.rows {
            wtr.write_record([section.title.as_str(), label.as_str(), value.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportKind, ReportSection};

    #[test]
    fn test_csv_export_flattens_sections() {
        let mut section = ReportSection::new("Health Analysis");
        section.row("BMI", "22.9 (Normal weight)");
        section.row("TDEE", "2035 kcal");

        let report = Report {
            kind: ReportKind::Daily,
            sections: vec![section],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "section,label,value");
        assert_eq!(lines.next().unwrap(), "Health Analysis,BMI,22.9 (Normal weight)");
        assert_eq!(lines.next().unwrap(), "Health Analysis,TDEE,2035 kcal");
    }
}
