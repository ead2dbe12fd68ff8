//! Кэш результатов разбора
//!
//! Один и тот же SQL с параметрами `?` приходит многократно, поэтому
//! результат разбора переиспользуется. Ключом служит пара (диалект, текст).

use crate::common::constants::DEFAULT_CACHE_CAPACITY;
use crate::dialect::DatabaseType;
use crate::parser::ast::SqlStatement;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Статистика кэша
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStatistics {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStatistics {
    /// Доля попаданий
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Потокобезопасный кэш разобранных выражений
#[derive(Debug)]
pub struct ParsingResultCache {
    entries: DashMap<(DatabaseType, String), SqlStatement>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl ParsingResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn get(&self, database_type: DatabaseType, sql: &str) -> Option<SqlStatement> {
        match self.entries.get(&(database_type, sql.to_string())) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Сохраняет результат; при заполнении вытесняет произвольную запись
    pub fn put(&self, database_type: DatabaseType, sql: &str, statement: SqlStatement) {
        let key = (database_type, sql.to_string());
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            let victim = self.entries.iter().next().map(|entry| entry.key().clone());
            if let Some(victim) = victim {
                log::warn!("Parsing cache is full ({}), evicting: {}", self.capacity, victim.1);
                self.entries.remove(&victim);
                self.evictions.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.entries.insert(key, statement);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn statistics(&self) -> CacheStatistics {
        CacheStatistics {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

impl Default for ParsingResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
