use crate::error::{ParseError, ParseResult};
use crate::input::{split_on_marker, Marker};
use crate::model::command::DisplaySelector;
use crate::time::{parse_iso_date, split_date_range};

/// Grammar, first match wins:
///
/// - `MODULE` alone selects by module code (upper-cased).
/// - `[MODULE] /date START-END` selects a date range; a module code is ignored.
/// - `MODULE /date DATE` selects by module and date.
/// - `/date DATE` selects by date.
///
/// Dates are `YYYY-MM-DD` or `YYYY/MM/DD`.
pub fn validate_display(rest: Option<&str>) -> ParseResult<DisplaySelector> {
    let rest = rest.map(str::trim).unwrap_or_default();

    let (first, remainder) = match rest.split_once(' ') {
        Some((first, remainder)) => (first, Some(remainder)),
        None => (rest, None),
    };

    let mut module_code = None;
    if !first.is_empty() && !first.contains(Marker::Date.as_str()) {
        let code = first.to_uppercase();
        if remainder.is_none() {
            return Ok(DisplaySelector::ByModuleCode { code });
        }
        module_code = Some(code);
    }

    let Some((_, dates)) = split_on_marker(rest, Marker::Date) else {
        return Err(ParseError::WrongInputFormat);
    };
    let dates = dates.trim();

    if let Some((start, end)) = split_date_range(dates) {
        return Ok(DisplaySelector::ByDateRange {
            start: parse_iso_date(start)?,
            end: parse_iso_date(end)?,
        });
    }

    let date = parse_iso_date(dates)?;
    Ok(match module_code {
        Some(code) => DisplaySelector::ByModuleAndDate { code, date },
        None => DisplaySelector::ByDate { date },
    })
}
