use csv::{QuoteStyle, WriterBuilder};

use crate::catalog::CoverageFlag;

use super::domain::ProviderRecord;

/// Error raised while rendering the comparison export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write comparison csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("comparison csv was not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render the derived comparison view as delimited text: an `Attributes`
/// column followed by one column per provider; an IDV row, one row per
/// selected coverage feature (`YES`/`NO`), and fixed premium, payout, and
/// net-cost rows (`N/A` when absent). Every field is quoted.
pub fn comparison_csv(
    records: &[ProviderRecord],
    selected_features: &[CoverageFlag],
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    let mut header = vec!["Attributes".to_string()];
    header.extend(records.iter().map(|record| record.display_name.clone()));
    writer.write_record(&header)?;

    let mut idv_row = vec!["IDV Value".to_string()];
    idv_row.extend(records.iter().map(|record| {
        if record.idv_value.is_empty() {
            "N/A".to_string()
        } else {
            record.idv_value.clone()
        }
    }));
    writer.write_record(&idv_row)?;

    for flag in selected_features {
        let mut row = vec![flag.label().to_string()];
        row.extend(
            records
                .iter()
                .map(|record| if record.flag(*flag) { "YES" } else { "NO" }.to_string()),
        );
        writer.write_record(&row)?;
    }

    writer.write_record(numeric_row("Total Premium (₹)", records, |record| {
        record.premium.map(i64::from)
    }))?;
    writer.write_record(numeric_row("Payout (₹)", records, |record| {
        record.payout.map(i64::from)
    }))?;
    writer.write_record(numeric_row("After Payout (₹)", records, |record| {
        record.net_cost
    }))?;

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(csv::Error::from(err.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}

fn numeric_row(
    label: &str,
    records: &[ProviderRecord],
    value: impl Fn(&ProviderRecord) -> Option<i64>,
) -> Vec<String> {
    let mut row = vec![label.to_string()];
    row.extend(records.iter().map(|record| {
        value(record)
            .map(|amount| amount.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }));
    row
}
