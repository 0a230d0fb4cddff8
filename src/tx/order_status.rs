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

//! OrderStatus: resolve one customer (by id or by last name), fetch the
//! customer's most recent order and echo its line items.

use rand::Rng;

use crate::{
    generator::{make_clast, nurand_int, urand_int, A_C_ID, A_C_LAST, C_C_ID, C_C_LAST},
    record::{
        key::{CustomerKey, CustomerNameKey, OrderCustomerKey, OrderLineKey},
        Customer, OrderLine, CUSTS_PER_DIST, DISTS_PER_WARE, UNUSED_ID,
    },
    store::{StoreResult, StoreTx},
    tx::{Output, Stat, TxType},
};

/// How the customer is identified. Exactly one branch applies per
/// input: 60% of inputs resolve through the last-name secondary index,
/// the rest by primary key.
#[derive(Clone, Debug, PartialEq)]
pub enum CustomerSelector {
    ById(u32),
    ByLastName(String),
}

impl CustomerSelector {
    /// Raw id for the positional output echo. By-name inputs echo the
    /// unused-id value; the real id is only known after resolution.
    pub fn raw_id(&self) -> u32 {
        match self {
            CustomerSelector::ById(c_id) => *c_id,
            CustomerSelector::ByLastName(_) => UNUSED_ID,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderStatusInput {
    pub w_id: u16,
    pub d_id: u8,
    pub customer: CustomerSelector,
}

impl OrderStatusInput {
    pub fn generate(rng: &mut impl Rng, w_id: u16) -> Self {
        let d_id = urand_int(rng, 1, DISTS_PER_WARE as u32) as u8;
        let by_last_name = urand_int(rng, 1, 100) <= 60;
        let customer = if by_last_name {
            CustomerSelector::ByLastName(make_clast(nurand_int(rng, A_C_LAST, C_C_LAST, 0, 999)))
        } else {
            CustomerSelector::ById(nurand_int(rng, A_C_ID, C_C_ID, 1, CUSTS_PER_DIST))
        };
        Self { w_id, d_id, customer }
    }

    fn print(&self) {
        match &self.customer {
            CustomerSelector::ByLastName(c_last) => trace!(
                "ordstts: w_id={} d_id={} by_last_name=t c_last={}",
                self.w_id, self.d_id, c_last
            ),
            CustomerSelector::ById(c_id) => trace!(
                "ordstts: w_id={} d_id={} by_last_name=f c_id={}",
                self.w_id, self.d_id, c_id
            ),
        }
    }
}

pub struct OrderStatusTx {
    pub input: OrderStatusInput,
}

impl OrderStatusTx {
    pub fn new(rng: &mut impl Rng, w_id: u16) -> Self {
        let input = OrderStatusInput::generate(rng, w_id);
        input.print();
        Self { input }
    }

    /// Builds a profile from a fixed input, bypassing generation.
    pub fn from_input(input: OrderStatusInput) -> Self {
        input.print();
        Self { input }
    }

    /// Runs the profile once. The first failing store operation stops
    /// the sequence and classifies the run as killed; a caller seeing
    /// `Err` must discard the partial output.
    pub fn run<S: StoreTx>(&self, tx: &S, stat: &Stat, out: &mut Output) -> StoreResult<()> {
        stat.finish(TxType::OrderStatus, self.execute(tx, out))
    }

    fn execute<S: StoreTx>(&self, tx: &S, out: &mut Output) -> StoreResult<()> {
        let w_id = self.input.w_id;
        let d_id = self.input.d_id;

        out.push(w_id);
        out.push(d_id);
        out.push(self.input.customer.raw_id());

        let res = match &self.input.customer {
            CustomerSelector::ByLastName(c_last) => {
                tx.get_customer_by_last_name(&CustomerNameKey::new(w_id, d_id, c_last))
            }
            CustomerSelector::ById(c_id) => tx.get_record(CustomerKey::new(w_id, d_id, *c_id)),
        };
        trace!("customer res: {:?}", res.as_ref().map(|c: &Customer| c.c_id));
        let c = res?;

        // the id may have been unknown before this step
        let c_id = c.c_id;
        out.push(c.c_first);
        out.push(c.c_middle);
        out.push(c.c_last);
        out.push(c.c_balance);

        let res = tx.get_order_by_customer_id(OrderCustomerKey::new(w_id, d_id, c_id));
        trace!("order res: {:?}", res.as_ref().map(|o| o.o_id));
        let o = res?;

        out.push(o.o_id);
        out.push(o.o_entry_d);
        out.push(o.o_carrier_id);

        let low = OrderLineKey::new(w_id, d_id, o.o_id, 0);
        let up = OrderLineKey::new(w_id, d_id, o.o_id + 1, 0);
        let res = tx.range_query(low, up, |ol: &OrderLine| {
            out.push(ol.ol_supply_w_id);
            out.push(ol.ol_i_id);
            out.push(ol.ol_quantity);
            out.push(ol.ol_amount);
            out.push(ol.ol_delivery_d);
        });
        trace!("order line scan res: {:?}", res);
        res
    }
}
