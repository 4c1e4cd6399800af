use serde::Serialize;

use super::ReportError;
use crate::pipeline::ScoreResult;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Filename")]
    filename: &'a str,
    #[serde(rename = "Score")]
    score: f64,
}

/// `Filename,Score` header, then one row per result in pipeline order.
pub fn render_csv(results: &[ScoreResult]) -> Result<Vec<u8>, ReportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    if results.is_empty() {
        writer.write_record(["Filename", "Score"])?;
    }
    for result in results {
        writer.serialize(CsvRow {
            filename: &result.filename,
            score: result.score,
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))
}
