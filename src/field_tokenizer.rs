//! Splitting a line into separator-delimited fields
//!
//! A source ends at its first NUL byte or at the end of the slice, whichever
//! comes first; both act as the string terminator.

const NUL: u8 = 0;

/// Length of `source` up to (not including) its terminator
pub fn logical_len(source: &[u8]) -> usize {
    source.iter().position(|&c| c == NUL).unwrap_or(source.len())
}

/// Return if `index` returned by [`read_field`] lies past the terminator,
/// meaning every field has been read
pub fn at_end(source: &[u8], index: usize) -> bool {
    index > logical_len(source)
}

/// Copy the field starting at `start` into `field` and return where the next field begins
///
/// Copying stops at a byte from `separators` (skipped), at the terminator (the
/// returned index is one past it) or when `field` is full. Bytes that do not
/// fit are dropped up to and including the next separator, so the returned
/// index always starts a new field. `field` is NUL-terminated unless it is
/// empty.
pub fn read_field(source: &[u8], start: usize, field: &mut [u8], separators: &[u8]) -> usize {
    let end = logical_len(source);
    let room = field.len().saturating_sub(1);

    if start > end {
        if let Some(first) = field.first_mut() {
            *first = NUL;
        }
        return start;
    }

    let mut copied = 0;
    let mut index = start;
    loop {
        if index >= end {
            index = end + 1;
            break;
        }

        let character = source[index];
        index += 1;
        if separators.contains(&character) {
            break;
        }
        if copied < room {
            field[copied] = character;
            copied += 1;
        }
    }

    if let Some(terminator) = field.get_mut(copied) {
        *terminator = NUL;
    }
    index
}

/// Contents of a NUL-terminated field without the terminator
pub fn field_str(field: &[u8]) -> &[u8] {
    &field[..logical_len(field)]
}

/// Iterator over the fields of a line, each copied into a scratch buffer of `N` bytes
pub struct Fields<'a, const N: usize> {
    source: &'a [u8],
    separators: &'a [u8],
    index: usize,
    buffer: [u8; N],
}

impl<'a, const N: usize> Fields<'a, N> {
    pub fn new(source: &'a [u8], separators: &'a [u8]) -> Self {
        Self {
            source,
            separators,
            index: 0,
            buffer: [0; N],
        }
    }

    /// Next field, truncated to `N - 1` bytes, or `None` once the line is used up
    pub fn next_field(&mut self) -> Option<&[u8]> {
        if at_end(self.source, self.index) {
            return None;
        }
        self.index = read_field(self.source, self.index, &mut self.buffer, self.separators);
        Some(field_str(&self.buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_three_fields_then_signals_end() {
        let source = b"10,20,30\0";
        let mut field = [0xffu8; 8];

        let next = read_field(source, 0, &mut field, b",");
        assert_eq!(next, 3);
        assert_eq!(&field[..3], b"10\0");
        assert!(!at_end(source, next));

        let next = read_field(source, next, &mut field, b",");
        assert_eq!(next, 6);
        assert_eq!(&field[..3], b"20\0");

        let next = read_field(source, next, &mut field, b",");
        assert_eq!(next, 9);
        assert_eq!(&field[..3], b"30\0");
        assert!(at_end(source, next));
    }

    #[test]
    fn slice_end_acts_as_terminator() {
        let source = b"10,20,30";
        let mut field = [0u8; 8];

        assert_eq!(read_field(source, 0, &mut field, b","), 3);
        assert_eq!(read_field(source, 3, &mut field, b","), 6);
        assert_eq!(read_field(source, 6, &mut field, b","), 9);
        assert_eq!(field_str(&field), b"30");
        assert!(at_end(source, 9));
    }

    #[test]
    fn stops_at_embedded_nul() {
        let source = b"7,8\09,10";
        let mut field = [0u8; 8];

        let next = read_field(source, 2, &mut field, b",");
        assert_eq!(next, 4);
        assert_eq!(field_str(&field), b"8");
        assert!(at_end(source, next));
    }

    #[test]
    fn any_separator_in_the_set_splits() {
        let source = b"1 2\t3,4";
        let mut fields: Fields<8> = Fields::new(source, b" \t,");
        assert_eq!(fields.next_field(), Some(&b"1"[..]));
        assert_eq!(fields.next_field(), Some(&b"2"[..]));
        assert_eq!(fields.next_field(), Some(&b"3"[..]));
        assert_eq!(fields.next_field(), Some(&b"4"[..]));
        assert_eq!(fields.next_field(), None);
    }

    #[test]
    fn adjacent_separators_give_empty_fields() {
        let source = b",5,,";
        let mut fields: Fields<4> = Fields::new(source, b",");
        assert_eq!(fields.next_field(), Some(&b""[..]));
        assert_eq!(fields.next_field(), Some(&b"5"[..]));
        assert_eq!(fields.next_field(), Some(&b""[..]));
        assert_eq!(fields.next_field(), Some(&b""[..]));
        assert_eq!(fields.next_field(), None);
    }

    #[test]
    fn long_field_is_truncated_and_rest_dropped() {
        let source = b"123456,7";
        let mut field = [0xffu8; 4];

        let next = read_field(source, 0, &mut field, b",");
        assert_eq!(&field, b"123\0");
        assert_eq!(next, 7);

        let next = read_field(source, next, &mut field, b",");
        assert_eq!(field_str(&field), b"7");
        assert!(at_end(source, next));
    }

    #[test]
    fn tiny_destinations_stay_in_bounds() {
        let source = b"ab,cd";
        let mut none: [u8; 0] = [];
        assert_eq!(read_field(source, 0, &mut none, b","), 3);

        let mut single = [0xffu8; 1];
        assert_eq!(read_field(source, 3, &mut single, b","), 6);
        assert_eq!(single, [0]);
    }

    #[test]
    fn start_past_end_is_stable() {
        let source = b"1";
        let mut field = [0xffu8; 4];
        assert_eq!(read_field(source, 5, &mut field, b","), 5);
        assert_eq!(field[0], 0);
        assert!(at_end(source, 5));
    }

    #[test]
    fn empty_line_has_one_empty_field() {
        let mut fields: Fields<4> = Fields::new(b"\0\0\0", b",");
        assert_eq!(fields.next_field(), Some(&b""[..]));
        assert_eq!(fields.next_field(), None);
    }
}
