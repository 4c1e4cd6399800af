use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use super::ReportError;
use crate::pipeline::ScoreResult;

pub const SHEET_NAME: &str = "Results";

/// Single sheet: bold `Filename` / `Score` header, scores as numeric cells.
pub fn render_xlsx(results: &[ScoreResult]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold().set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.write_string_with_format(0, 0, "Filename", &header)?;
    worksheet.write_string_with_format(0, 1, "Score", &header)?;

    for (i, result) in results.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, result.filename.as_str())?;
        worksheet.write_number(row, 1, result.score)?;
    }
    worksheet.set_column_width(0, 40.0)?;
    worksheet.set_column_width(1, 12.0)?;

    Ok(workbook.save_to_buffer()?)
}
