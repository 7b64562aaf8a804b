// SPDX-License-Identifier: MPL-2.0
//! Serde adapter storing embedded page images as a byte string.
//!
//! The derived `Vec<u8>` impl would encode one array element per byte.

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bytes(bytes)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_byte_buf(BytesVisitor)
}

struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a byte string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(v.to_vec())
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(v)
    }

    // Records written by other encoders may carry a plain array
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        data: Vec<u8>,
    }

    #[derive(Serialize)]
    struct PlainHolder {
        data: Vec<u8>,
    }

    #[test]
    fn byte_string_survives_cbor() {
        let holder = Holder {
            data: vec![0, 1, 2, 250, 255],
        };
        let mut encoded = Vec::new();
        ciborium::into_writer(&holder, &mut encoded).unwrap();
        let decoded: Holder = ciborium::from_reader(encoded.as_slice()).unwrap();
        assert_eq!(decoded, holder);
    }

    #[test]
    fn byte_string_is_more_compact_than_array() {
        let data: Vec<u8> = (0..=255).collect();
        let mut compact = Vec::new();
        ciborium::into_writer(&Holder { data: data.clone() }, &mut compact).unwrap();
        let mut plain = Vec::new();
        ciborium::into_writer(&PlainHolder { data }, &mut plain).unwrap();
        assert!(compact.len() < plain.len());
    }

    #[test]
    fn plain_array_is_accepted() {
        let mut encoded = Vec::new();
        ciborium::into_writer(&PlainHolder { data: vec![7, 8, 9] }, &mut encoded).unwrap();
        let decoded: Holder = ciborium::from_reader(encoded.as_slice()).unwrap();
        assert_eq!(decoded.data, vec![7, 8, 9]);
    }
}
