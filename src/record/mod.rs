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

//! TPC-C record layouts as read by the read-only transaction profiles.
//! Physical representation is owned by the store; these are the logical
//! rows handed back through the capability interface.

pub mod key;

use self::key::{CustomerKey, DistrictKey, OrderKey, OrderLineKey, StockKey};

pub const DISTS_PER_WARE: u8 = 10;
pub const CUSTS_PER_DIST: u32 = 3000;
pub const MAX_ORDER_LINES: u8 = 15;
pub const MIN_ORDER_LINES: u8 = 5;

/// Raw id echoed on the output stream when a customer is resolved by
/// last name instead of by primary key. Never a valid customer id.
pub const UNUSED_ID: u32 = 0;

#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    pub c_id: u32,
    pub c_d_id: u8,
    pub c_w_id: u16,
    pub c_first: String,
    pub c_middle: String,
    pub c_last: String,
    pub c_balance: f64,
}

impl Customer {
    pub fn key(&self) -> CustomerKey {
        CustomerKey::new(self.c_w_id, self.c_d_id, self.c_id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub o_id: u32,
    pub o_d_id: u8,
    pub o_w_id: u16,
    pub o_c_id: u32,
    pub o_entry_d: i64,
    pub o_carrier_id: Option<u8>,
    pub o_ol_cnt: u8,
}

impl Order {
    pub fn key(&self) -> OrderKey {
        OrderKey::new(self.o_w_id, self.o_d_id, self.o_id)
    }
}

/// `ol_i_id` is `None` for a line with no associated item; such lines
/// are excluded from StockLevel aggregation.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLine {
    pub ol_o_id: u32,
    pub ol_d_id: u8,
    pub ol_w_id: u16,
    pub ol_number: u8,
    pub ol_i_id: Option<u32>,
    pub ol_supply_w_id: u16,
    pub ol_delivery_d: Option<i64>,
    pub ol_quantity: u8,
    pub ol_amount: f64,
}

impl OrderLine {
    pub fn key(&self) -> OrderLineKey {
        OrderLineKey::new(self.ol_w_id, self.ol_d_id, self.ol_o_id, self.ol_number)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct District {
    pub d_id: u8,
    pub d_w_id: u16,
    pub d_next_o_id: u32,
}

impl District {
    pub fn key(&self) -> DistrictKey {
        DistrictKey::new(self.d_w_id, self.d_id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stock {
    pub s_i_id: u32,
    pub s_w_id: u16,
    pub s_quantity: u32,
}

impl Stock {
    pub fn key(&self) -> StockKey {
        StockKey::new(self.s_w_id, self.s_i_id)
    }
}
