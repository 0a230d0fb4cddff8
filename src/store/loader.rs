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

//! Scaled TPC-C-shaped population for the in-memory store: the load
//! phase of a bench run. Only the attributes the read-only profiles
//! consume are materialized.

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{CommonErrCode, Error, Result},
    generator::{make_clast, nurand_int, urand_int, A_C_LAST, C_C_LAST},
    record::{
        Customer, District, Order, OrderLine, Stock, DISTS_PER_WARE, MAX_ORDER_LINES,
        MIN_ORDER_LINES,
    },
    store::mem::MemStore,
    util,
};

/// How much data to load. Defaults follow the TPC-C per-warehouse
/// cardinalities; tests and local runs pass something smaller.
#[derive(Clone, Debug)]
pub struct LoadScale {
    pub warehouses: u16,
    pub items: u32,
    pub customers_per_district: u32,
    pub orders_per_district: u32,
}

impl Default for LoadScale {
    fn default() -> Self {
        Self {
            warehouses: 1,
            items: 100_000,
            customers_per_district: 3000,
            orders_per_district: 3000,
        }
    }
}

impl LoadScale {
    fn validate(&self) -> Result<()> {
        if self.warehouses == 0
            || self.items == 0
            || self.customers_per_district == 0
            || self.orders_per_district == 0
        {
            return Err(Error::Common(
                CommonErrCode::InvalidParam,
                format!("all load scale cardinalities must be positive, got {self:?}"),
            ));
        }
        Ok(())
    }
}

/// Populates `store` per `scale`. Deterministic for a fixed RNG seed.
pub fn load(store: &mut MemStore, rng: &mut impl Rng, scale: &LoadScale) -> Result<()> {
    scale.validate()?;
    let now = util::current_time_millis();

    for w_id in 1..=scale.warehouses {
        debug!("loading warehouse {w_id}");
        for i_id in 1..=scale.items {
            store.insert_stock(Stock {
                s_i_id: i_id,
                s_w_id: w_id,
                s_quantity: urand_int(rng, 10, 100),
            });
        }
        for d_id in 1..=DISTS_PER_WARE {
            load_district(store, rng, scale, w_id, d_id, now);
        }
    }

    info!(
        "loaded {} warehouse(s), {} item(s), {} district(s) each",
        scale.warehouses, scale.items, DISTS_PER_WARE
    );
    Ok(())
}

fn load_district(
    store: &mut MemStore,
    rng: &mut impl Rng,
    scale: &LoadScale,
    w_id: u16,
    d_id: u8,
    now: i64,
) {
    store.insert_district(District {
        d_id,
        d_w_id: w_id,
        d_next_o_id: scale.orders_per_district + 1,
    });

    for c_id in 1..=scale.customers_per_district {
        // the first thousand names walk the syllable table so every
        // name the input generator can draw exists at full scale
        let name_num = if c_id <= 1000 {
            (c_id - 1) % 1000
        } else {
            nurand_int(rng, A_C_LAST, C_C_LAST, 0, 999)
        };
        store.insert_customer(Customer {
            c_id,
            c_d_id: d_id,
            c_w_id: w_id,
            c_first: format!("FIRST-{:06}", urand_int(rng, 0, 999_999)),
            c_middle: "OE".to_owned(),
            c_last: make_clast(name_num),
            c_balance: -10.0,
        });
    }

    // one customer per order, in a random permutation; wraps around
    // when there are more orders than customers
    let mut customer_seq: Vec<u32> = (1..=scale.customers_per_district)
        .cycle()
        .take(scale.orders_per_district as usize)
        .collect();
    customer_seq.shuffle(rng);

    for (idx, &o_c_id) in customer_seq.iter().enumerate() {
        let o_id = idx as u32 + 1;
        let o_ol_cnt = urand_int(
            rng,
            u32::from(MIN_ORDER_LINES),
            u32::from(MAX_ORDER_LINES),
        ) as u8;
        let delivered = u64::from(o_id) * 10 <= u64::from(scale.orders_per_district) * 7;
        store.insert_order(Order {
            o_id,
            o_d_id: d_id,
            o_w_id: w_id,
            o_c_id,
            o_entry_d: now,
            o_carrier_id: delivered.then(|| urand_int(rng, 1, 10) as u8),
            o_ol_cnt,
        });
        for ol_number in 1..=o_ol_cnt {
            store.insert_order_line(OrderLine {
                ol_o_id: o_id,
                ol_d_id: d_id,
                ol_w_id: w_id,
                ol_number,
                ol_i_id: Some(urand_int(rng, 1, scale.items)),
                ol_supply_w_id: w_id,
                ol_delivery_d: delivered.then_some(now),
                ol_quantity: 5,
                ol_amount: f64::from(urand_int(rng, 1, 999_999)) / 100.0,
            });
        }
    }
}
