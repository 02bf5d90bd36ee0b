use serde::{Deserialize, Serialize};

use super::loan::{LoanState, Loanable};
use super::value_objects::ItemId;

/// アイテムの識別情報
///
/// カタログ登録時に一度だけ生成され、以後変更されない。
/// 削除操作は提供しない（プロセス終了まで生存）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub author: String,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// 書籍 - 貸出可能なアイテム種別
///
/// 継承ではなく合成：識別情報（`Item`）と貸出状態（`LoanState`）を埋め込み、
/// 貸出の振る舞いは`Loanable`トレイトで付与する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub item: Item,
    pub loan: LoanState,
}

impl Book {
    /// 新規作成（貸出可能状態）
    pub fn new(item: Item) -> Self {
        Self {
            item,
            loan: LoanState::new(),
        }
    }
}

impl Loanable for Book {
    fn loan_state(&self) -> &LoanState {
        &self.loan
    }

    fn loan_state_mut(&mut self) -> &mut LoanState {
        &mut self.loan
    }
}

/// DVD - 貸出可能なアイテム種別
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dvd {
    pub item: Item,
    pub loan: LoanState,
}

impl Dvd {
    /// 新規作成（貸出可能状態）
    pub fn new(item: Item) -> Self {
        Self {
            item,
            loan: LoanState::new(),
        }
    }
}

impl Loanable for Dvd {
    fn loan_state(&self) -> &LoanState {
        &self.loan
    }

    fn loan_state_mut(&mut self) -> &mut LoanState {
        &mut self.loan
    }
}

/// カタログエントリ統合型
///
/// `Book`と`Dvd`は貸出能力を持つ。`Reference`は閲覧専用の資料で、
/// 識別情報のみを持ち貸出には参加しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CatalogEntry {
    Book(Book),
    Dvd(Dvd),
    Reference(Item),
}

impl CatalogEntry {
    pub fn id(&self) -> &ItemId {
        &self.item().id
    }

    pub fn item(&self) -> &Item {
        match self {
            CatalogEntry::Book(book) => &book.item,
            CatalogEntry::Dvd(dvd) => &dvd.item,
            CatalogEntry::Reference(item) => item,
        }
    }

    /// 貸出能力へのキャスト
    ///
    /// 貸出能力を持たないエントリは`None`を返す。
    pub fn as_loanable(&self) -> Option<&dyn Loanable> {
        match self {
            CatalogEntry::Book(book) => Some(book),
            CatalogEntry::Dvd(dvd) => Some(dvd),
            CatalogEntry::Reference(_) => None,
        }
    }

    pub fn as_loanable_mut(&mut self) -> Option<&mut dyn Loanable> {
        match self {
            CatalogEntry::Book(book) => Some(book),
            CatalogEntry::Dvd(dvd) => Some(dvd),
            CatalogEntry::Reference(_) => None,
        }
    }
}
