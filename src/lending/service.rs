use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::domain::{CatalogEntry, ItemId, Loanable};

use super::errors::{LendingError, Result};

/// アイテムを貸し出す
///
/// ビジネスルール：
/// - アイテムがカタログに存在すること
/// - アイテムが貸出能力を持つこと
/// - 貸出中でないこと
///
/// 成功時はAvailable → Borrowedの遷移を行い、エントリへの参照を返す。
/// 副作用は対象エントリの貸出フィールドのインプレース更新のみで、
/// 失敗時は状態を一切変更しない。
///
/// # 引数
/// * `catalog` - カタログ
/// * `item_id` - アイテムID
/// * `borrowed_at` - 貸出日時（呼び出し側が注入する）
///
/// # 戻り値
/// 貸出したエントリへの参照
pub fn borrow_item<'a>(
    catalog: &'a mut Catalog,
    item_id: &ItemId,
    borrowed_at: DateTime<Utc>,
) -> Result<&'a CatalogEntry> {
    // 1. カタログからエントリを取得
    let entry = catalog.get_mut(item_id).ok_or(LendingError::ItemNotFound)?;

    // 2. 貸出能力の確認
    let loanable: &mut dyn Loanable = entry
        .as_loanable_mut()
        .ok_or(LendingError::ItemNotBorrowable)?;

    // 3. 貸出中でないことの確認
    if loanable.loan_state().is_borrowed {
        return Err(LendingError::AlreadyBorrowed);
    }

    // 4. 貸出遷移
    loanable.loan_state_mut().check_out(borrowed_at);

    Ok(entry)
}

/// アイテムを返却する
///
/// idをカタログで解決してから貸出能力の`check_in`を呼ぶ。
/// 返却処理自体は常に成功する（既にAvailableでも冪等）。
///
/// # 引数
/// * `catalog` - カタログ
/// * `item_id` - アイテムID
pub fn check_in_item(catalog: &mut Catalog, item_id: &ItemId) -> Result<()> {
    let entry = catalog.get_mut(item_id).ok_or(LendingError::ItemNotFound)?;

    let loanable: &mut dyn Loanable = entry
        .as_loanable_mut()
        .ok_or(LendingError::ItemNotBorrowable)?;

    loanable.check_in();

    Ok(())
}
