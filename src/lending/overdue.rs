use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::domain::ItemId;

/// 延滞スキャン
///
/// カタログを走査し、返却期限を過ぎた貸出中アイテムのidを返す。
///
/// ビジネスルール：
/// - 返却期限（due_date）を厳密に過ぎた貸出中のアイテムを延滞とする
/// - 貸出されていないアイテム、貸出能力を持たないエントリは対象外
///
/// 純粋なクエリであり状態は変更しない。
///
/// # 引数
/// * `catalog` - カタログ
/// * `now` - 判定基準時刻（呼び出し側が注入する）
///
/// # 戻り値
/// 延滞と判定したアイテムのid一覧（順序は不定）
pub fn find_overdue_items(catalog: &Catalog, now: DateTime<Utc>) -> Vec<ItemId> {
    catalog
        .iter()
        .filter(|entry| {
            entry
                .as_loanable()
                .is_some_and(|loanable| loanable.is_overdue(now))
        })
        .map(|entry| entry.id().clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, CatalogEntry, Item};
    use crate::lending::{borrow_item, check_in_item};
    use chrono::Duration;

    fn book_entry(id: &str) -> CatalogEntry {
        CatalogEntry::Book(Book::new(Item::new(
            ItemId::new(id),
            "Test Book",
            "Test Author",
        )))
    }

    // TDD: find_overdue_items() のテスト
    #[test]
    fn test_find_overdue_items_detects_backdated_loan() {
        let mut catalog = Catalog::new();
        catalog.add(book_entry("b1"));
        let now = Utc::now();

        // 過去の日付で貸出（延滞させる）
        borrow_item(&mut catalog, &ItemId::new("b1"), now - Duration::days(30)).unwrap();

        let overdue = find_overdue_items(&catalog, now);

        assert_eq!(overdue, vec![ItemId::new("b1")]);
    }

    #[test]
    fn test_find_overdue_items_ignores_fresh_loan() {
        let mut catalog = Catalog::new();
        catalog.add(book_entry("b1"));
        let now = Utc::now();

        borrow_item(&mut catalog, &ItemId::new("b1"), now).unwrap();

        // 貸出直後は延滞ではない
        assert!(find_overdue_items(&catalog, now).is_empty());
    }

    #[test]
    fn test_find_overdue_items_ignores_available_and_reference_entries() {
        let mut catalog = Catalog::new();
        catalog.add(book_entry("b1"));
        catalog.add(CatalogEntry::Reference(Item::new(
            ItemId::new("r1"),
            "Reading Room Atlas",
            "Test Author",
        )));

        assert!(find_overdue_items(&catalog, Utc::now()).is_empty());
    }

    #[test]
    fn test_find_overdue_items_after_check_in() {
        let mut catalog = Catalog::new();
        catalog.add(book_entry("b1"));
        let now = Utc::now();

        borrow_item(&mut catalog, &ItemId::new("b1"), now - Duration::days(30)).unwrap();
        check_in_item(&mut catalog, &ItemId::new("b1")).unwrap();

        // 返却済みのアイテムは延滞として検出されない
        assert!(find_overdue_items(&catalog, now).is_empty());
    }
}
