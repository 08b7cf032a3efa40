use tracing::debug;

use crate::structure::{Structure, MIN_STRUCTURE_LEN};

const END_OF_TABLE: u8 = 127;

/// Walk a structure table into owned records.
///
/// Decoding stops at the end-of-table record, at a record whose declared
/// length is below the header size, or at a record whose formatted area runs
/// past the buffer. Everything collected up to that point is returned.
pub fn decode_structures(table: &[u8]) -> Vec<Structure> {
    let mut structures = Vec::new();
    let mut cursor = 0usize;

    while let Some(&[kind, length]) = table.get(cursor..cursor + 2) {
        if kind == END_OF_TABLE {
            break;
        }

        let length = usize::from(length);
        if length < MIN_STRUCTURE_LEN {
            debug!(offset = cursor, kind, length, "structure shorter than its header");
            break;
        }

        let Some(formatted) = table.get(cursor..cursor + length) else {
            debug!(
                offset = cursor,
                kind,
                length,
                remaining = table.len() - cursor,
                "structure runs past end of table"
            );
            break;
        };

        let (strings, next) = read_string_set(table, cursor + length);
        structures.push(Structure::new(kind, formatted.to_vec(), strings));
        cursor = next;
    }

    structures
}

/// Read the null-terminated strings that follow a formatted area, returning
/// them with the offset just past the double-null terminator.
fn read_string_set(table: &[u8], start: usize) -> (Vec<String>, usize) {
    let mut strings = Vec::new();
    if table.get(start..start + 2) == Some(&[0, 0][..]) {
        return (strings, start + 2);
    }

    let mut cursor = start;
    loop {
        let rest = match table.get(cursor..) {
            Some(rest) if !rest.is_empty() => rest,
            _ => return (strings, table.len()),
        };

        let Some(len) = rest.iter().position(|b| *b == 0) else {
            debug!(offset = cursor, "string set runs past end of table");
            return (strings, table.len());
        };

        if len > 0 {
            strings.push(String::from_utf8_lossy(&rest[..len]).into_owned());
        }
        cursor += len + 1;

        if table.get(cursor) == Some(&0) {
            return (strings, cursor + 1);
        }
    }
}
