#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 7;

/// 貸出状態
///
/// 不変条件：`is_borrowed == true` のとき両日付は必ず設定され、
/// `is_borrowed == false` のとき両日付は必ず未設定。
/// 変更は貸出サービスの貸出遷移と`Loanable::check_in`のみが行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanState {
    pub borrow_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_borrowed: bool,
}

impl LoanState {
    /// 新規作成（貸出可能状態）
    pub fn new() -> Self {
        Self::default()
    }

    /// 貸出遷移：Available → Borrowed
    ///
    /// ビジネスルール：
    /// - 貸出日は`borrowed_at`
    /// - 返却期限は貸出日 + 7日間
    pub fn check_out(&mut self, borrowed_at: DateTime<Utc>) {
        self.borrow_date = Some(borrowed_at);
        self.due_date = Some(borrowed_at + Duration::days(LOAN_PERIOD_DAYS));
        self.is_borrowed = true;
    }
}

/// 貸出能力
///
/// 貸出に参加するアイテム種別が実装するトレイト。
/// `check_in`と`is_overdue`はデフォルト実装を共有するため、
/// 各アイテム種別は貸出状態へのアクセサのみを提供すればよい。
pub trait Loanable {
    fn loan_state(&self) -> &LoanState;

    fn loan_state_mut(&mut self) -> &mut LoanState;

    /// 返却遷移：Borrowed → Available
    ///
    /// ビジネスルール：
    /// - バリデーションなし。既にAvailableの場合も同じクリア結果になる（冪等）
    fn check_in(&mut self) {
        let state = self.loan_state_mut();
        state.borrow_date = None;
        state.due_date = None;
        state.is_borrowed = false;
    }

    /// 延滞判定
    ///
    /// 返却期限が設定されており、かつ`now`が期限を厳密に過ぎている場合のみtrue。
    /// 貸出されていない場合はfalse。
    fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.loan_state().due_date {
            Some(due_date) => now > due_date,
            None => false,
        }
    }
}
