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

//! The capability set a transactional store must expose to the
//! read-only profiles. Failure never surfaces as a panic or an `Error`;
//! it travels on the [`StoreResult`] status channel and the profile
//! stops at the first non-success status.

use std::fmt;

use crate::record::{
    key::{CustomerKey, CustomerNameKey, DistrictKey, OrderCustomerKey, OrderLineKey, StockKey},
    Customer, District, Order, OrderLine, Stock,
};

pub mod loader;
pub mod mem;

/// Why a store operation could not complete. The profiles treat every
/// variant identically (immediate kill); the variants exist so the
/// caller can log or drive its retry policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Abort {
    /// No record matched the key (point or secondary lookup).
    NotFound,
    /// The read was invalidated by a conflicting concurrent writer.
    Conflict,
    /// The store gave up on the operation.
    Timeout,
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Abort::NotFound => write!(f, "not found"),
            Abort::Conflict => write!(f, "conflict"),
            Abort::Timeout => write!(f, "timeout"),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, Abort>;

/// Point lookup capability for one primary key type.
pub trait PointRead<K> {
    type Rec;

    fn get(&self, key: K) -> StoreResult<Self::Rec>;
}

/// Ordered range scan capability for one primary key type.
pub trait RangeScan<K> {
    type Rec;

    /// Visits every record with key in `[low, up)` in ascending key
    /// order. Stops and reports failure if the scan is invalidated.
    fn scan<F: FnMut(&Self::Rec)>(&self, low: K, up: K, visitor: F) -> StoreResult<()>;
}

/// The full capability set consumed by the transaction profiles: point
/// reads of Customer/District/Stock, an OrderLine range scan, and the
/// two named secondary-index lookups.
pub trait StoreTx:
    PointRead<CustomerKey, Rec = Customer>
    + PointRead<DistrictKey, Rec = District>
    + PointRead<StockKey, Rec = Stock>
    + RangeScan<OrderLineKey, Rec = OrderLine>
{
    /// Returns the customer at the canonical middle position (matches
    /// ordered ascending by first name) among all customers with the
    /// given last name in (warehouse, district).
    fn get_customer_by_last_name(&self, key: &CustomerNameKey) -> StoreResult<Customer>;

    /// Returns the most recently created order for the given
    /// (warehouse, district, customer id).
    fn get_order_by_customer_id(&self, key: OrderCustomerKey) -> StoreResult<Order>;

    /// Point lookup by primary key.
    fn get_record<K>(&self, key: K) -> StoreResult<<Self as PointRead<K>>::Rec>
    where
        Self: PointRead<K>,
    {
        PointRead::get(self, key)
    }

    /// Ascending scan over `[low, up)` driving `visitor` per record.
    fn range_query<K, F>(&self, low: K, up: K, visitor: F) -> StoreResult<()>
    where
        Self: RangeScan<K>,
        F: FnMut(&<Self as RangeScan<K>>::Rec),
    {
        RangeScan::scan(self, low, up, visitor)
    }
}
