use crate::catalog::Operation;
use crate::error::ConvertError;
use crate::log::row::LogRow;

/// Separates the measurement from the rest of a log line.
pub const MEASUREMENT_DELIMITER: &str = ": ";

/// Classify one log line against an operation.
///
/// Expected shape:
/// <container><operation>...: <integer>
///
/// Example:
/// arrayListAddAtBeginning: 1234
///
/// Returns `Ok(None)` when the line does not mention the operation. The
/// container type is everything before the first occurrence of the operation
/// name; the measurement follows the first delimiter at or after it.
pub fn classify_line(
    lineno: usize,
    line: &str,
    operation: Operation,
) -> Result<Option<LogRow>, ConvertError> {
    let Some(split) = line.find(operation.name()) else {
        return Ok(None);
    };

    let container = &line[..split];
    let rest = &line[split..];

    let value = match rest.find(MEASUREMENT_DELIMITER) {
        Some(pos) => &rest[pos + MEASUREMENT_DELIMITER.len()..],
        None => {
            return Err(ConvertError::Format {
                line: lineno,
                reason: "missing measurement delimiter",
                text: line.to_string(),
            });
        }
    };

    let measurement = value.parse::<i64>().map_err(|_| ConvertError::Format {
        line: lineno,
        reason: "measurement is not an integer",
        text: line.to_string(),
    })?;

    Ok(Some(LogRow {
        line: lineno,
        container: container.to_string(),
        measurement,
    }))
}
