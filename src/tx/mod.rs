/*-
 * #%L
 * TPCC Bench Framework
 * %%
 * Copyright (C) 2023 OceanBase
 * %%
 * TPCC Bench Framework is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the
 * Mulan PSL v2. You may obtain a copy of Mulan PSL v2 at:
 *          http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
 * KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
 * NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 * #L%
 */

//! Transaction profile plumbing: transaction types, the shared
//! statistics sink and the positional output sink.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::StoreResult;

pub mod order_status;
pub mod stock_level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxType {
    OrderStatus,
    StockLevel,
}

impl TxType {
    pub const COUNT: usize = 2;

    fn index(self) -> usize {
        match self {
            TxType::OrderStatus => 0,
            TxType::StockLevel => 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct TxCount {
    committed: AtomicU64,
    killed: AtomicU64,
}

impl TxCount {
    pub fn committed(&self) -> u64 {
        self.committed.load(Ordering::Relaxed)
    }

    pub fn killed(&self) -> u64 {
        self.killed.load(Ordering::Relaxed)
    }
}

/// Per-type commit/kill counters. Shared across worker threads; each
/// profile execution bumps exactly one counter.
#[derive(Debug, Default)]
pub struct Stat {
    counts: [TxCount; TxType::COUNT],
}

impl Stat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, tx_type: TxType) -> &TxCount {
        &self.counts[tx_type.index()]
    }

    fn commit(&self, tx_type: TxType) {
        self.counts[tx_type.index()]
            .committed
            .fetch_add(1, Ordering::Relaxed);
    }

    fn kill(&self, tx_type: TxType) {
        self.counts[tx_type.index()]
            .killed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Classifies a finished profile run into the counters and hands
    /// the status back unchanged.
    pub(crate) fn finish(&self, tx_type: TxType, res: StoreResult<()>) -> StoreResult<()> {
        match res {
            Ok(()) => self.commit(tx_type),
            Err(_) => self.kill(tx_type),
        }
        res
    }
}

/// One typed field on the output stream. Consumers treat the stream as
/// positional; `Null` marks an unset optional slot (e.g. carrier id of
/// an undelivered order).
#[derive(Clone, Debug, PartialEq)]
pub enum OutputField {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F64(f64),
    Str(String),
    Timestamp(i64),
    Null,
}

impl From<u8> for OutputField {
    fn from(v: u8) -> Self {
        OutputField::U8(v)
    }
}

impl From<u16> for OutputField {
    fn from(v: u16) -> Self {
        OutputField::U16(v)
    }
}

impl From<u32> for OutputField {
    fn from(v: u32) -> Self {
        OutputField::U32(v)
    }
}

impl From<u64> for OutputField {
    fn from(v: u64) -> Self {
        OutputField::U64(v)
    }
}

impl From<usize> for OutputField {
    fn from(v: usize) -> Self {
        OutputField::U64(v as u64)
    }
}

impl From<f64> for OutputField {
    fn from(v: f64) -> Self {
        OutputField::F64(v)
    }
}

impl From<String> for OutputField {
    fn from(v: String) -> Self {
        OutputField::Str(v)
    }
}

impl From<&str> for OutputField {
    fn from(v: &str) -> Self {
        OutputField::Str(v.to_owned())
    }
}

impl From<i64> for OutputField {
    fn from(v: i64) -> Self {
        OutputField::Timestamp(v)
    }
}

impl<T: Into<OutputField>> From<Option<T>> for OutputField {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => OutputField::Null,
        }
    }
}

/// Append-only positional output record of one profile execution. On a
/// killed outcome the caller discards whatever was appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Output {
    fields: Vec<OutputField>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<OutputField>) {
        self.fields.push(field.into());
    }

    pub fn fields(&self) -> &[OutputField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use scoped_threadpool::Pool;

    use super::*;
    use crate::store::Abort;

    #[test]
    fn test_output_positional() {
        let mut out = Output::new();
        out.push(1u16);
        out.push(5u8);
        out.push(42u32);
        out.push("JOE");
        out.push(150.0);
        out.push(None::<u8>);
        assert_eq!(
            out.fields(),
            &[
                OutputField::U16(1),
                OutputField::U8(5),
                OutputField::U32(42),
                OutputField::Str("JOE".to_owned()),
                OutputField::F64(150.0),
                OutputField::Null,
            ]
        );
        out.clear();
        assert!(out.is_empty());
    }

    #[test]
    fn test_stat_finish() {
        let stat = Stat::new();
        assert!(stat.finish(TxType::OrderStatus, Ok(())).is_ok());
        assert!(stat.finish(TxType::OrderStatus, Err(Abort::Conflict)).is_err());
        assert!(stat.finish(TxType::StockLevel, Ok(())).is_ok());
        assert_eq!(stat.count(TxType::OrderStatus).committed(), 1);
        assert_eq!(stat.count(TxType::OrderStatus).killed(), 1);
        assert_eq!(stat.count(TxType::StockLevel).committed(), 1);
        assert_eq!(stat.count(TxType::StockLevel).killed(), 0);
    }

    #[test]
    fn test_stat_concurrent_increment() {
        let stat = Arc::new(Stat::new());
        let mut pool = Pool::new(8);
        pool.scoped(|scope| {
            for _ in 0..8 {
                let stat = stat.clone();
                scope.execute(move || {
                    for _ in 0..1000 {
                        let _ = stat.finish(TxType::StockLevel, Ok(()));
                    }
                });
            }
        });
        assert_eq!(stat.count(TxType::StockLevel).committed(), 8000);
    }
}
