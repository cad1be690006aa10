//! JSON wire format shared by every storage backend.
//!
//! `[{"id": 1, "name": "a", "done": false}, ...]`

use crate::domain::Item;
use crate::error::StorageResult;

pub fn encode(items: &[Item]) -> StorageResult<String> {
    Ok(serde_json::to_string(items)?)
}

pub fn decode(raw: &str) -> StorageResult<Vec<Item>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use crate::error::StorageError;

    #[test]
    fn test_decode_browser_output() {
        let raw = r#"[{"id":1700000000001,"name":"a","done":false},{"id":1700000000002,"name":"b","done":true}]"#;
        let items = decode(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId(1700000000001));
        assert!(items[1].done);
    }

    #[test]
    fn test_encode_keeps_order() {
        let items = vec![Item::new(ItemId(2), "second"), Item::new(ItemId(1), "first")];
        let raw = encode(&items).unwrap();
        assert_eq!(raw, r#"[{"id":2,"name":"second","done":false},{"id":1,"name":"first","done":false}]"#);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("not json"), Err(StorageError::Codec(_))));
        assert!(matches!(decode(r#"{"id":1}"#), Err(StorageError::Codec(_))));
        assert!(matches!(decode(r#"[{"id":-1,"name":"a","done":false}]"#), Err(StorageError::Codec(_))));
    }
}
