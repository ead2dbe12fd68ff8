//! Внешние источники сведений для разбора: правила шардирования и метаданные таблиц
//!
//! Парсеры обращаются к ним только через трейты, поэтому маршрутизатор может
//! подставить собственные реализации. `StaticShardingRule` и
//! `StaticTableMetaData` строятся из конфигурации.

pub mod metadata;
pub mod sharding_rule;

#[cfg(test)]
pub mod tests;

pub use metadata::{ShardingTableMetaData, StaticTableMetaData};
pub use sharding_rule::{ShardingRule, StaticShardingRule};
