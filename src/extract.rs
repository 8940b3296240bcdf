use crate::errors::MalformedLineError;
use crate::transaction::Transaction;
use chrono::NaiveDate;

/// Width of a bank reference number, fixed across both layouts.
pub const REF_NUM_WIDTH: usize = 9;

/// Width of the last-four token that leads new-layout lines.
const LAST_FOUR_WIDTH: usize = 4;

/// Parse one classified transaction line into a record.
///
/// Fields sit in a fixed left-to-right order with a variable-width name in
/// the middle, so the line is peeled from both ends: last-four token, date
/// and reference from the front, amount from the back, name as the
/// residual. Each step hands the remainder to the next.
pub fn extract_transaction(
    line: &str,
    statement_year: i32,
    january_statement: bool,
    last_four: &str,
    old_format: bool,
    interest_charge: bool,
) -> Result<Transaction, MalformedLineError> {
    let mut rest = line;

    // Old-layout and interest lines never carry the leading last-four token.
    if !old_format && !interest_charge {
        rest = strip_leading_last_four(rest, line)?;
    }

    let (date, rest) = take_date(rest, statement_year, january_statement, line)?;

    let (reference, rest) = if interest_charge {
        (String::new(), rest)
    } else {
        take_reference(rest, line)?
    };

    let (amount, rest) = take_amount(rest, line)?;

    let name = rest.trim_end();
    if name.is_empty() {
        return Err(MalformedLineError::EmptyName(line.to_string()));
    }

    Ok(Transaction {
        date,
        reference,
        amount,
        name: name.to_string(),
        last_four: last_four.to_string(),
        interest_charge,
        old_format,
        sequence: 0,
    })
}

/// Drop the fixed-width token at the first non-space position.
fn strip_leading_last_four<'a>(
    rest: &'a str,
    line: &str,
) -> Result<&'a str, MalformedLineError> {
    let start = rest.len() - rest.trim_start().len();
    rest.get(start + LAST_FOUR_WIDTH..)
        .ok_or_else(|| MalformedLineError::Truncated(line.to_string()))
}

/// Month is the two characters before the `/`, day the two after. A
/// December transaction on a January statement happened the year before the
/// statement was issued.
fn take_date<'a>(
    rest: &'a str,
    statement_year: i32,
    january_statement: bool,
    line: &str,
) -> Result<(NaiveDate, &'a str), MalformedLineError> {
    let slash = rest
        .find('/')
        .ok_or_else(|| MalformedLineError::MissingDate(line.to_string()))?;
    if slash < 2 {
        return Err(MalformedLineError::InvalidDate(line.to_string()));
    }

    let month: u32 = rest
        .get(slash - 2..slash)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| MalformedLineError::InvalidDate(line.to_string()))?;
    let day: u32 = rest
        .get(slash + 1..slash + 3)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| MalformedLineError::InvalidDate(line.to_string()))?;

    let year = if january_statement && month == 12 {
        statement_year - 1
    } else {
        statement_year
    };
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| MalformedLineError::InvalidDate(line.to_string()))?;

    Ok((date, rest.get(slash + 3..).unwrap_or("")))
}

/// The fixed-width token starting at the first non-space character. Spans
/// whatever the width covers, exactly as printed.
fn take_reference<'a>(
    rest: &'a str,
    line: &str,
) -> Result<(String, &'a str), MalformedLineError> {
    let start = rest.len() - rest.trim_start().len();
    let end = start + REF_NUM_WIDTH;
    let reference = rest
        .get(start..end)
        .ok_or_else(|| MalformedLineError::MissingReference(line.to_string()))?;
    Ok((reference.to_string(), &rest[end..]))
}

/// The token after the last space of the trimmed remainder, with
/// thousands-separator commas removed. May be negative for credits.
fn take_amount<'a>(rest: &'a str, line: &str) -> Result<(f64, &'a str), MalformedLineError> {
    let trimmed = rest.trim();
    let split = trimmed
        .rfind(' ')
        .ok_or_else(|| MalformedLineError::MissingAmount(line.to_string()))?;
    let token = trimmed[split + 1..].replace(',', "");
    let amount: f64 = token
        .parse()
        .map_err(|_| MalformedLineError::InvalidAmount(line.to_string()))?;
    Ok((amount, &trimmed[..split]))
}
