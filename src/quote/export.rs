use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::line::QuoteLineItem;

pub const CSV_HEADER: [&str; 2] = ["Référence", "Quantité"];

/// 품번/수량 CSV를 쓴다. 품번이 비었거나 수량이 0인 줄은 건너뛴다.
pub fn write_csv<W: Write>(writer: W, lines: &[QuoteLineItem]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for line in lines
        .iter()
        .filter(|l| !l.reference.trim().is_empty() && l.quantity > 0)
    {
        wtr.write_record([line.reference.as_str(), line.quantity.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv(path: impl AsRef<Path>, lines: &[QuoteLineItem]) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_csv(file, lines)
}
