use crate::Value;
use crate::error::Result;
use std::io::BufRead;

/// Longest leading `[+-]?digits` run of `token`.
fn numeric_prefix(token: &[u8]) -> &[u8] {
    let sign = usize::from(matches!(token.first(), Some(b'+' | b'-')));
    let digits = token[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return &[];
    }
    &token[..sign + digits]
}

fn parse_prefix(prefix: &[u8]) -> Option<Value> {
    std::str::from_utf8(prefix).ok()?.parse().ok()
}

/// Reads whitespace-separated integers until end of input or the first token
/// that is not a valid [`Value`].
///
/// A token with a numeric prefix (`5abc`, `2.5`) contributes that prefix and
/// then ends the read. Out-of-range numbers and bytes that are not text end
/// the read without contributing anything. Input is consumed line by line, so
/// an interactive session ends as soon as such a token is entered. Only real
/// read failures are errors.
pub fn read_values<R: BufRead>(mut reader: R) -> Result<Vec<Value>> {
    let mut values = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        for token in line
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
        {
            let prefix = numeric_prefix(token);
            let value = parse_prefix(prefix);
            if let Some(value) = value {
                values.push(value);
            }
            if value.is_none() || prefix.len() < token.len() {
                log::debug!(
                    "stopping at token {:?}",
                    String::from_utf8_lossy(token)
                );
                return Ok(values);
            }
        }
    }

    log::debug!("end of input after {} values", values.len());
    Ok(values)
}
