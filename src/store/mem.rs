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

//! `BTreeMap`-backed reference store. Serves the same purpose the
//! local SQLite backend serves for the YCSB driver: an always-available
//! implementation of the capability set for tests and local bench runs.

use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};

use crate::{
    record::{
        key::{
            CustomerKey, CustomerNameKey, DistrictKey, OrderCustomerKey, OrderKey, OrderLineKey,
            StockKey,
        },
        Customer, District, Order, OrderLine, Stock,
    },
    store::{Abort, PointRead, RangeScan, StoreResult, StoreTx},
};

#[derive(Debug, Default)]
pub struct MemStore {
    customers: BTreeMap<CustomerKey, Customer>,
    customers_by_name: BTreeMap<CustomerNameKey, Vec<CustomerKey>>,
    orders: BTreeMap<OrderKey, Order>,
    latest_order: BTreeMap<OrderCustomerKey, u32>,
    order_lines: BTreeMap<OrderLineKey, OrderLine>,
    districts: BTreeMap<DistrictKey, District>,
    stocks: BTreeMap<StockKey, Stock>,
    // remaining successful operations; None = unlimited
    op_budget: Option<AtomicI64>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// After `ops` successful operations every further operation
    /// reports `Abort::Conflict`, emulating an invalidated read.
    pub fn set_op_budget(&mut self, ops: i64) {
        self.op_budget = Some(AtomicI64::new(ops));
    }

    pub fn insert_customer(&mut self, c: Customer) {
        let name_key = CustomerNameKey::new(c.c_w_id, c.c_d_id, &c.c_last);
        self.customers_by_name
            .entry(name_key)
            .or_default()
            .push(c.key());
        self.customers.insert(c.key(), c);
    }

    pub fn insert_order(&mut self, o: Order) {
        let by_customer = OrderCustomerKey::new(o.o_w_id, o.o_d_id, o.o_c_id);
        let latest = self.latest_order.entry(by_customer).or_insert(o.o_id);
        if o.o_id >= *latest {
            *latest = o.o_id;
        }
        self.orders.insert(o.key(), o);
    }

    pub fn insert_order_line(&mut self, ol: OrderLine) {
        self.order_lines.insert(ol.key(), ol);
    }

    pub fn insert_district(&mut self, d: District) {
        self.districts.insert(d.key(), d);
    }

    pub fn insert_stock(&mut self, s: Stock) {
        self.stocks.insert(s.key(), s);
    }

    fn tick(&self) -> StoreResult<()> {
        if let Some(budget) = &self.op_budget {
            if budget.fetch_sub(1, Ordering::Relaxed) <= 0 {
                return Err(Abort::Conflict);
            }
        }
        Ok(())
    }
}

impl PointRead<CustomerKey> for MemStore {
    type Rec = Customer;

    fn get(&self, key: CustomerKey) -> StoreResult<Customer> {
        self.tick()?;
        self.customers.get(&key).cloned().ok_or(Abort::NotFound)
    }
}

impl PointRead<DistrictKey> for MemStore {
    type Rec = District;

    fn get(&self, key: DistrictKey) -> StoreResult<District> {
        self.tick()?;
        self.districts.get(&key).cloned().ok_or(Abort::NotFound)
    }
}

impl PointRead<StockKey> for MemStore {
    type Rec = Stock;

    fn get(&self, key: StockKey) -> StoreResult<Stock> {
        self.tick()?;
        self.stocks.get(&key).cloned().ok_or(Abort::NotFound)
    }
}

impl RangeScan<OrderLineKey> for MemStore {
    type Rec = OrderLine;

    fn scan<F: FnMut(&OrderLine)>(
        &self,
        low: OrderLineKey,
        up: OrderLineKey,
        mut visitor: F,
    ) -> StoreResult<()> {
        self.tick()?;
        for ol in self.order_lines.range(low..up).map(|(_, ol)| ol) {
            visitor(ol);
        }
        Ok(())
    }
}

impl StoreTx for MemStore {
    fn get_customer_by_last_name(&self, key: &CustomerNameKey) -> StoreResult<Customer> {
        self.tick()?;
        let keys = self.customers_by_name.get(key).ok_or(Abort::NotFound)?;
        let mut matches: Vec<&Customer> = keys.iter().map(|k| &self.customers[k]).collect();
        if matches.is_empty() {
            return Err(Abort::NotFound);
        }
        matches.sort_by(|a, b| a.c_first.cmp(&b.c_first));
        // canonical middle position: ceil(n/2), 1-based
        let middle = (matches.len() + 1) / 2 - 1;
        Ok(matches[middle].clone())
    }

    fn get_order_by_customer_id(&self, key: OrderCustomerKey) -> StoreResult<Order> {
        self.tick()?;
        let o_id = *self.latest_order.get(&key).ok_or(Abort::NotFound)?;
        self.orders
            .get(&OrderKey::new(key.w_id, key.d_id, o_id))
            .cloned()
            .ok_or(Abort::NotFound)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn customer(c_id: u32, first: &str, last: &str) -> Customer {
        Customer {
            c_id,
            c_d_id: 1,
            c_w_id: 1,
            c_first: first.to_owned(),
            c_middle: "OE".to_owned(),
            c_last: last.to_owned(),
            c_balance: -10.0,
        }
    }

    fn order(o_id: u32, c_id: u32) -> Order {
        Order {
            o_id,
            o_d_id: 1,
            o_w_id: 1,
            o_c_id: c_id,
            o_entry_d: 1_000,
            o_carrier_id: Some(3),
            o_ol_cnt: 5,
        }
    }

    fn line(o_id: u32, number: u8, i_id: u32) -> OrderLine {
        OrderLine {
            ol_o_id: o_id,
            ol_d_id: 1,
            ol_w_id: 1,
            ol_number: number,
            ol_i_id: Some(i_id),
            ol_supply_w_id: 1,
            ol_delivery_d: None,
            ol_quantity: 5,
            ol_amount: 42.0,
        }
    }

    #[test]
    fn test_point_read_not_found() {
        let store = MemStore::new();
        assert_eq!(
            PointRead::<CustomerKey>::get(&store, CustomerKey::new(1, 1, 1)),
            Err(Abort::NotFound)
        );
    }

    #[test]
    fn test_last_name_median_odd() {
        let mut store = MemStore::new();
        store.insert_customer(customer(1, "CARL", "BARBARBAR"));
        store.insert_customer(customer(2, "ANNA", "BARBARBAR"));
        store.insert_customer(customer(3, "BETT", "BARBARBAR"));
        let key = CustomerNameKey::new(1, 1, "BARBARBAR");
        // sorted by first name: ANNA, BETT, CARL -> middle is BETT
        let c = store.get_customer_by_last_name(&key).unwrap();
        assert_eq!(c.c_id, 3);
    }

    #[test]
    fn test_last_name_median_even() {
        let mut store = MemStore::new();
        store.insert_customer(customer(1, "DORA", "EINGEINGEING"));
        store.insert_customer(customer(2, "ANNA", "EINGEINGEING"));
        store.insert_customer(customer(3, "CARL", "EINGEINGEING"));
        store.insert_customer(customer(4, "BETT", "EINGEINGEING"));
        let key = CustomerNameKey::new(1, 1, "EINGEINGEING");
        // n = 4 -> position ceil(4/2) = 2 -> BETT
        let c = store.get_customer_by_last_name(&key).unwrap();
        assert_eq!(c.c_id, 4);
    }

    #[test]
    fn test_last_name_no_match() {
        let store = MemStore::new();
        let key = CustomerNameKey::new(1, 1, "NOSUCHNAME");
        assert_eq!(store.get_customer_by_last_name(&key), Err(Abort::NotFound));
    }

    #[test]
    fn test_latest_order_wins() {
        let mut store = MemStore::new();
        store.insert_order(order(10, 7));
        store.insert_order(order(30, 7));
        store.insert_order(order(20, 7));
        let o = store
            .get_order_by_customer_id(OrderCustomerKey::new(1, 1, 7))
            .unwrap();
        assert_eq!(o.o_id, 30);
    }

    #[test]
    fn test_scan_ascending_half_open() {
        let mut store = MemStore::new();
        for number in [3u8, 1, 2] {
            store.insert_order_line(line(10, number, 100 + number as u32));
        }
        store.insert_order_line(line(9, 1, 99));
        store.insert_order_line(line(11, 1, 111));

        let mut seen = Vec::new();
        store
            .scan(
                OrderLineKey::new(1, 1, 10, 0),
                OrderLineKey::new(1, 1, 11, 0),
                |ol: &OrderLine| seen.push(ol.ol_number),
            )
            .unwrap();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_op_budget_injects_conflict() {
        let mut store = MemStore::new();
        store.insert_district(District {
            d_id: 1,
            d_w_id: 1,
            d_next_o_id: 100,
        });
        store.set_op_budget(1);
        let key = DistrictKey::new(1, 1);
        assert!(store.get_record(key).is_ok());
        assert_eq!(store.get_record(key), Err(Abort::Conflict));
        assert_eq!(store.get_record(key), Err(Abort::Conflict));
    }
}
