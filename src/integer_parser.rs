use ufmt::derive::uDebug;

#[derive(Copy, Clone, PartialEq, Debug, uDebug)]
pub enum ParseIntError {
    /// No digits after the optional whitespace and sign
    NoDigits,
    /// The number does not fit into an `i32`; carries the saturated value
    OutOfRange(i32),
}

impl ParseIntError {
    /// Value `strtol` would have produced for the rejected text
    pub fn fallback(&self) -> i32 {
        match self {
            ParseIntError::NoDigits => 0,
            ParseIntError::OutOfRange(saturated) => *saturated,
        }
    }
}

fn is_space(character: u8) -> bool {
    matches!(character, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Parse the decimal integer at the start of `text`
///
/// Leading whitespace and one `+` or `-` are accepted. Parsing stops at the
/// first non-digit (or a NUL byte); everything after it is ignored.
pub fn try_parse_int(text: &[u8]) -> Result<i32, ParseIntError> {
    let mut bytes = text
        .iter()
        .copied()
        .take_while(|&c| c != 0)
        .skip_while(|&c| is_space(c))
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    // Accumulate towards the sign so that i32::MIN does not overflow
    let mut value: i32 = 0;
    let mut saw_digit = false;
    let mut overflow = false;
    for digit in bytes.take_while(u8::is_ascii_digit) {
        saw_digit = true;
        if overflow {
            continue;
        }
        let digit = (digit - b'0') as i32;
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        match next {
            Some(next) => value = next,
            None => overflow = true,
        }
    }

    if !saw_digit {
        Err(ParseIntError::NoDigits)
    } else if overflow {
        Err(ParseIntError::OutOfRange(if negative {
            i32::MIN
        } else {
            i32::MAX
        }))
    } else {
        Ok(value)
    }
}

/// Permissive variant of [`try_parse_int`]
///
/// Text without a number yields `0` and out-of-range numbers saturate, the
/// same results `strtol` gives on a 32-bit target.
pub fn parse_int(text: &[u8]) -> i32 {
    try_parse_int(text).unwrap_or_else(|error| error.fallback())
}
