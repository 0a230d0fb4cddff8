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

extern crate chrono;
extern crate rand;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod error;
pub mod generator;
pub mod record;
pub mod store;
pub mod tx;
mod util;

pub use self::{
    error::{Error, Result},
    store::{mem::MemStore, Abort, StoreResult, StoreTx},
    tx::{
        order_status::{CustomerSelector, OrderStatusTx},
        stock_level::StockLevelTx,
        Output, OutputField, Stat, TxType,
    },
};
