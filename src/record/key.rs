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

//! Ordered, comparable index keys built from business identifiers.
//!
//! `Ord` is derived field by field, so key comparison follows the
//! declaration order. For [`OrderLineKey`] that gives the range
//! invariant the profiles rely on: `[ (w, d, o, 0), (w, d, o + 1, 0) )`
//! covers exactly the lines of order `o`, in ascending line number.

/// Customer primary key: (warehouse, district, customer id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerKey {
    pub w_id: u16,
    pub d_id: u8,
    pub c_id: u32,
}

impl CustomerKey {
    pub fn new(w_id: u16, d_id: u8, c_id: u32) -> Self {
        Self { w_id, d_id, c_id }
    }
}

/// Customer secondary key: (warehouse, district, last name). May match
/// several customers; the store resolves the canonical one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerNameKey {
    pub w_id: u16,
    pub d_id: u8,
    pub c_last: String,
}

impl CustomerNameKey {
    pub fn new(w_id: u16, d_id: u8, c_last: &str) -> Self {
        Self {
            w_id,
            d_id,
            c_last: c_last.to_owned(),
        }
    }
}

/// Order primary key: (warehouse, district, order id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey {
    pub w_id: u16,
    pub d_id: u8,
    pub o_id: u32,
}

impl OrderKey {
    pub fn new(w_id: u16, d_id: u8, o_id: u32) -> Self {
        Self { w_id, d_id, o_id }
    }
}

/// Order secondary key: (warehouse, district, customer id), resolving
/// to the customer's most recent order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderCustomerKey {
    pub w_id: u16,
    pub d_id: u8,
    pub c_id: u32,
}

impl OrderCustomerKey {
    pub fn new(w_id: u16, d_id: u8, c_id: u32) -> Self {
        Self { w_id, d_id, c_id }
    }
}

/// OrderLine primary key: (warehouse, district, order id, line number).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderLineKey {
    pub w_id: u16,
    pub d_id: u8,
    pub o_id: u32,
    pub number: u8,
}

impl OrderLineKey {
    pub fn new(w_id: u16, d_id: u8, o_id: u32, number: u8) -> Self {
        Self {
            w_id,
            d_id,
            o_id,
            number,
        }
    }
}

/// District primary key: (warehouse, district).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DistrictKey {
    pub w_id: u16,
    pub d_id: u8,
}

impl DistrictKey {
    pub fn new(w_id: u16, d_id: u8) -> Self {
        Self { w_id, d_id }
    }
}

/// Stock primary key: (warehouse, item id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StockKey {
    pub w_id: u16,
    pub i_id: u32,
}

impl StockKey {
    pub fn new(w_id: u16, i_id: u32) -> Self {
        Self { w_id, i_id }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_order_line_key_order() {
        let mut keys = vec![
            OrderLineKey::new(1, 2, 10, 3),
            OrderLineKey::new(1, 2, 10, 1),
            OrderLineKey::new(1, 2, 9, 15),
            OrderLineKey::new(1, 2, 11, 0),
            OrderLineKey::new(1, 1, 12, 7),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                OrderLineKey::new(1, 1, 12, 7),
                OrderLineKey::new(1, 2, 9, 15),
                OrderLineKey::new(1, 2, 10, 1),
                OrderLineKey::new(1, 2, 10, 3),
                OrderLineKey::new(1, 2, 11, 0),
            ]
        );
    }

    #[test]
    fn test_order_line_range_covers_one_order() {
        let low = OrderLineKey::new(3, 4, 100, 0);
        let up = OrderLineKey::new(3, 4, 101, 0);
        for number in 1..=15u8 {
            let k = OrderLineKey::new(3, 4, 100, number);
            assert!(low <= k && k < up, "line {number} outside range");
        }
        // neighbours stay out
        assert!(OrderLineKey::new(3, 4, 99, 15) < low);
        assert!(OrderLineKey::new(3, 4, 101, 1) >= up);
        assert!(OrderLineKey::new(3, 5, 100, 1) >= up);
        assert!(OrderLineKey::new(2, 4, 100, 1) < low);
    }

    #[test]
    fn test_customer_name_key_eq() {
        let a = CustomerNameKey::new(1, 1, "BARBARBAR");
        let b = CustomerNameKey::new(1, 1, "BARBARBAR");
        let c = CustomerNameKey::new(1, 1, "BARBAROUGHT");
        assert_eq!(a, b);
        assert!(a < c);
    }
}
