use thiserror::Error;

/// 貸出サービスのエラー
///
/// いずれもシステム自身によるリトライは行わない（リトライは呼び出し側の方針）。
/// すべての失敗経路は区別可能なエラー値として呼び出し側に返る。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// アイテムがカタログに存在しない
    #[error("Item not found")]
    ItemNotFound,

    /// アイテムが貸出能力を持たない
    #[error("Item is not borrowable")]
    ItemNotBorrowable,

    /// 既に貸出中
    #[error("Item is already borrowed")]
    AlreadyBorrowed,
}

/// 貸出サービスの Result型
pub type Result<T> = std::result::Result<T, LendingError>;
