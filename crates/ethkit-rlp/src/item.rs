use ethkit_canonical::strip_leading_zeros;

use crate::errors::RlpError;

/// Prefix offset for byte strings of at most 55 bytes: `0x80`.
pub const SHORT_STRING_OFFSET: u8 = 0x80;

/// Prefix offset for byte strings longer than 55 bytes: `0xb7`.
pub const LONG_STRING_OFFSET: u8 = 0xb7;

/// Prefix offset for lists with at most 55 payload bytes: `0xc0`.
pub const SHORT_LIST_OFFSET: u8 = 0xc0;

/// Prefix offset for lists with more than 55 payload bytes: `0xf7`.
pub const LONG_LIST_OFFSET: u8 = 0xf7;

/// Longest payload that still uses a one-byte prefix.
pub const MAX_SHORT_LENGTH: usize = 55;

/// Maximum list nesting accepted by the decoder.
pub const MAX_DEPTH: usize = 1024;

/// How the decoder treats bytes after the top-level item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Strict mode: trailing bytes are errors.
    #[default]
    Strict,
    /// Permissive mode: decoding stops after the first item.
    Permissive,
}

/// Structural RLP tree: a byte string or a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// Byte string (possibly empty).
    Bytes(Vec<u8>),
    /// List of items (possibly empty).
    List(Vec<Item>),
}

impl Item {
    /// Returns the byte string, if this is one.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Item::Bytes(bytes) => Some(bytes),
            Item::List(_) => None,
        }
    }

    /// Returns the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Item::List(items) => Some(items),
            Item::Bytes(_) => None,
        }
    }

    /// Human-readable structural type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Item::Bytes(_) => "byte string",
            Item::List(_) => "list",
        }
    }

    /// Serializes the item to RLP.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            Item::Bytes(bytes) if bytes.len() == 1 && bytes[0] < SHORT_STRING_OFFSET => {
                out.push(bytes[0]);
            }
            Item::Bytes(bytes) => {
                out.extend_from_slice(&encode_length(bytes.len(), SHORT_STRING_OFFSET));
                out.extend_from_slice(bytes);
            }
            Item::List(items) => {
                let mut payload = Vec::new();
                for item in items {
                    item.encode_into(&mut payload);
                }
                out.extend_from_slice(&encode_length(payload.len(), SHORT_LIST_OFFSET));
                out.extend_from_slice(&payload);
            }
        }
    }

    /// Deserializes one item from `input`.
    ///
    /// Returns the item and the number of bytes left unread after it, which
    /// is always zero in [`DecodeMode::Strict`].
    ///
    /// # Errors
    ///
    /// Returns [`RlpError`] if:
    /// - The input is truncated
    /// - Any length prefix is not minimal
    /// - Nesting exceeds [`MAX_DEPTH`]
    /// - Trailing bytes remain in strict mode
    pub fn decode(input: &[u8], mode: DecodeMode) -> Result<(Self, usize), RlpError> {
        let (item, end) = decode_at(input, 0, 0)?;
        let trailing = input.len() - end;
        if trailing > 0 && mode == DecodeMode::Strict {
            return Err(RlpError::TrailingBytes { count: trailing });
        }
        Ok((item, trailing))
    }
}

impl From<Vec<u8>> for Item {
    fn from(value: Vec<u8>) -> Self {
        Item::Bytes(value)
    }
}

impl From<Vec<Item>> for Item {
    fn from(value: Vec<Item>) -> Self {
        Item::List(value)
    }
}

/// Builds the length prefix for a payload of `len` bytes.
///
/// `offset` is [`SHORT_STRING_OFFSET`] for byte strings and
/// [`SHORT_LIST_OFFSET`] for lists; the long forms are derived from it.
pub fn encode_length(len: usize, offset: u8) -> Vec<u8> {
    if len <= MAX_SHORT_LENGTH {
        return vec![offset + len as u8];
    }
    let len_bytes = len.to_be_bytes();
    let len_bytes = strip_leading_zeros(&len_bytes);
    let mut prefix = Vec::with_capacity(1 + len_bytes.len());
    prefix.push(offset + MAX_SHORT_LENGTH as u8 + len_bytes.len() as u8);
    prefix.extend_from_slice(len_bytes);
    prefix
}

/// Location of an item's payload within the input.
struct Header {
    list: bool,
    payload_start: usize,
    payload_len: usize,
}

impl Header {
    fn end(&self) -> usize {
        self.payload_start + self.payload_len
    }
}

fn read_header(input: &[u8], offset: usize) -> Result<Header, RlpError> {
    let prefix = *input
        .get(offset)
        .ok_or(RlpError::UnexpectedEof { offset, needed: 1 })?;

    let header = match prefix {
        0x00..=0x7f => Header {
            list: false,
            payload_start: offset,
            payload_len: 1,
        },
        0x80..=0xb7 => Header {
            list: false,
            payload_start: offset + 1,
            payload_len: usize::from(prefix - SHORT_STRING_OFFSET),
        },
        0xb8..=0xbf => {
            let len_of_len = usize::from(prefix - LONG_STRING_OFFSET);
            Header {
                list: false,
                payload_start: offset + 1 + len_of_len,
                payload_len: read_long_length(input, offset, len_of_len)?,
            }
        }
        0xc0..=0xf7 => Header {
            list: true,
            payload_start: offset + 1,
            payload_len: usize::from(prefix - SHORT_LIST_OFFSET),
        },
        0xf8..=0xff => {
            let len_of_len = usize::from(prefix - LONG_LIST_OFFSET);
            Header {
                list: true,
                payload_start: offset + 1 + len_of_len,
                payload_len: read_long_length(input, offset, len_of_len)?,
            }
        }
    };

    let available = input.len() - header.payload_start.min(input.len());
    if header.payload_len > available {
        return Err(RlpError::UnexpectedEof {
            offset,
            needed: header.payload_len - available,
        });
    }

    if !header.list
        && prefix == SHORT_STRING_OFFSET + 1
        && input[header.payload_start] < SHORT_STRING_OFFSET
    {
        return Err(RlpError::NonCanonical(format!(
            "single byte 0x{:02x} at offset {} must encode as itself",
            input[header.payload_start], offset
        )));
    }

    Ok(header)
}

/// Reads the big-endian length that follows a long-form prefix at `offset`.
fn read_long_length(input: &[u8], offset: usize, len_of_len: usize) -> Result<usize, RlpError> {
    let start = offset + 1;
    let len_bytes = input
        .get(start..start + len_of_len)
        .ok_or_else(|| RlpError::UnexpectedEof {
            offset,
            needed: start + len_of_len - input.len(),
        })?;

    if len_bytes[0] == 0 {
        return Err(RlpError::NonCanonical(format!(
            "length at offset {offset} has a leading zero byte"
        )));
    }

    // A length that overflows usize can never be satisfied by the input.
    let len = len_bytes
        .iter()
        .try_fold(0usize, |acc, &b| {
            acc.checked_mul(256).map(|acc| acc | usize::from(b))
        })
        .ok_or(RlpError::UnexpectedEof {
            offset,
            needed: usize::MAX,
        })?;

    if len <= MAX_SHORT_LENGTH {
        return Err(RlpError::NonCanonical(format!(
            "long-form length {len} at offset {offset} fits the short form"
        )));
    }
    Ok(len)
}

/// Decodes the item at `offset`, returning it with the offset just past it.
fn decode_at(input: &[u8], offset: usize, depth: usize) -> Result<(Item, usize), RlpError> {
    if depth > MAX_DEPTH {
        return Err(RlpError::TooDeep { max: MAX_DEPTH });
    }

    let header = read_header(input, offset)?;
    let end = header.end();
    if !header.list {
        return Ok((Item::Bytes(input[header.payload_start..end].to_vec()), end));
    }

    // Children are read from a view that ends with the list, so an item
    // overrunning its parent surfaces as truncation.
    let scope = &input[..end];
    let mut items = Vec::new();
    let mut cursor = header.payload_start;
    while cursor < end {
        let (item, next) = decode_at(scope, cursor, depth + 1)?;
        items.push(item);
        cursor = next;
    }
    Ok((Item::List(items), end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(data: &[u8]) -> Item {
        Item::Bytes(data.to_vec())
    }

    fn strict(input: &[u8]) -> Result<Item, RlpError> {
        Item::decode(input, DecodeMode::Strict).map(|(item, _)| item)
    }

    #[test]
    fn single_bytes_encode_as_themselves() {
        assert_eq!(bytes(&[0x00]).encode(), vec![0x00]);
        assert_eq!(bytes(&[0x7f]).encode(), vec![0x7f]);
        assert_eq!(bytes(&[0x80]).encode(), vec![0x81, 0x80]);
    }

    #[test]
    fn short_and_long_strings() {
        assert_eq!(bytes(b"").encode(), vec![0x80]);
        assert_eq!(bytes(b"dog").encode(), b"\x83dog".to_vec());

        let max_short = vec![b'a'; 55];
        assert_eq!(bytes(&max_short).encode()[0], 0xb7);

        let long = vec![b'a'; 56];
        let encoded = bytes(&long).encode();
        assert_eq!(&encoded[..2], &[0xb8, 56]);
        assert_eq!(encoded.len(), 58);

        let longer = vec![0u8; 1024];
        assert_eq!(&bytes(&longer).encode()[..3], &[0xb9, 0x04, 0x00]);
    }

    #[test]
    fn lists_use_list_offsets() {
        assert_eq!(Item::List(vec![]).encode(), vec![0xc0]);
        let pair = Item::List(vec![bytes(b"cat"), bytes(b"dog")]);
        assert_eq!(pair.encode(), b"\xc8\x83cat\x83dog".to_vec());

        let long = Item::List(vec![bytes(&[b'x'; 60])]);
        let encoded = long.encode();
        assert_eq!(&encoded[..2], &[0xf8, 62]);
    }

    #[test]
    fn encode_length_prefixes() {
        assert_eq!(encode_length(0, SHORT_STRING_OFFSET), vec![0x80]);
        assert_eq!(encode_length(55, SHORT_LIST_OFFSET), vec![0xf7]);
        assert_eq!(encode_length(56, SHORT_LIST_OFFSET), vec![0xf8, 56]);
        assert_eq!(encode_length(256, SHORT_STRING_OFFSET), vec![0xb9, 0x01, 0x00]);
    }

    #[test]
    fn decode_round_trip() {
        let item = Item::List(vec![
            bytes(b""),
            bytes(&[0x05]),
            Item::List(vec![bytes(&[0xaa; 70])]),
            Item::List(vec![]),
        ]);
        assert_eq!(strict(&item.encode()).unwrap(), item);
    }

    #[test]
    fn decode_rejects_non_canonical_single_byte() {
        assert!(matches!(strict(&[0x81, 0x00]), Err(RlpError::NonCanonical(_))));
        assert_eq!(strict(&[0x81, 0x80]).unwrap(), bytes(&[0x80]));
    }

    #[test]
    fn decode_rejects_long_form_for_short_payload() {
        let mut input = vec![0xb8, 0x01];
        input.push(0xff);
        assert!(matches!(strict(&input), Err(RlpError::NonCanonical(_))));
        assert!(matches!(strict(&[0xf8, 0x00]), Err(RlpError::NonCanonical(_))));
    }

    #[test]
    fn decode_rejects_leading_zero_in_length() {
        let mut input = vec![0xb9, 0x00, 0x40];
        input.extend(vec![0u8; 64]);
        assert!(matches!(strict(&input), Err(RlpError::NonCanonical(_))));
    }

    #[test]
    fn decode_rejects_truncation() {
        assert!(matches!(strict(&[]), Err(RlpError::UnexpectedEof { .. })));
        assert!(matches!(strict(&[0xc3]), Err(RlpError::UnexpectedEof { .. })));
        assert!(matches!(strict(&[0x83, b'd']), Err(RlpError::UnexpectedEof { needed: 2, .. })));
        assert!(matches!(strict(&[0xb8]), Err(RlpError::UnexpectedEof { .. })));
        // list claims two bytes but its child needs three
        assert!(matches!(
            strict(&[0xc2, 0x82, 0xff, 0xff]),
            Err(RlpError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn trailing_bytes_depend_on_mode() {
        assert_eq!(
            Item::decode(&[0x80, 0x00], DecodeMode::Strict),
            Err(RlpError::TrailingBytes { count: 1 })
        );
        assert_eq!(
            Item::decode(&[0x80, 0x00], DecodeMode::Permissive).unwrap(),
            (bytes(b""), 1)
        );
    }

    #[test]
    fn decode_rejects_excessive_nesting() {
        let mut item = Item::List(vec![]);
        for _ in 0..=MAX_DEPTH {
            item = Item::List(vec![item]);
        }
        assert_eq!(strict(&item.encode()), Err(RlpError::TooDeep { max: MAX_DEPTH }));
    }
}
