//! インメモリの貸出管理モデル
//!
//! カタログ（id→エントリのインメモリストア）と、貸出適格性ルールを
//! 強制し貸出状態を遷移させる貸出サービスの2コンポーネントからなる。
//! 単一プロセス・シングルスレッド前提で、永続化やネットワーク境界は持たない。

pub mod catalog;
pub mod domain;
pub mod lending;
