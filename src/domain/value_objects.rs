#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// アイテムID - カタログ内で一意な識別子
///
/// 呼び出し側が付与する文字列キー（例: "b1"）。生成は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // TDD: ItemId のテスト
    #[test]
    fn test_item_id_equality_by_value() {
        let id1 = ItemId::new("b1");
        let id2 = ItemId::from("b1");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_item_id_distinct_values_differ() {
        let id1 = ItemId::new("b1");
        let id2 = ItemId::new("b2");
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_item_id_value() {
        let id = ItemId::new("b1");
        assert_eq!(id.value(), "b1");
    }

    #[test]
    fn test_item_id_display() {
        let id = ItemId::new("b1");
        assert_eq!(id.to_string(), "b1");
    }
}
