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

//! StockLevel: count the distinct items referenced by the 20 most
//! recent orders of a district whose stock sits below a threshold.

use std::collections::BTreeSet;

use rand::Rng;

use crate::{
    generator::urand_int,
    record::{
        key::{DistrictKey, OrderLineKey, StockKey},
        District, OrderLine, Stock,
    },
    store::{StoreResult, StoreTx},
    tx::{Output, Stat, TxType},
};

#[derive(Clone, Debug, PartialEq)]
pub struct StockLevelInput {
    pub w_id: u16,
    pub d_id: u8,
    pub threshold: u8,
}

impl StockLevelInput {
    pub fn generate(rng: &mut impl Rng, w_id: u16, d_id: u8) -> Self {
        let threshold = urand_int(rng, 10, 20) as u8;
        Self {
            w_id,
            d_id,
            threshold,
        }
    }

    fn print(&self) {
        trace!(
            "stklvl: w_id={} d_id={} threshold={}",
            self.w_id, self.d_id, self.threshold
        );
    }
}

pub struct StockLevelTx {
    pub input: StockLevelInput,
}

impl StockLevelTx {
    pub fn new(rng: &mut impl Rng, w_id: u16, d_id: u8) -> Self {
        let input = StockLevelInput::generate(rng, w_id, d_id);
        input.print();
        Self { input }
    }

    /// Builds a profile from a fixed input, bypassing generation.
    pub fn from_input(input: StockLevelInput) -> Self {
        input.print();
        Self { input }
    }

    /// Runs the profile once; see [`OrderStatusTx::run`] for the
    /// commit/kill contract.
    ///
    /// [`OrderStatusTx::run`]: crate::tx::order_status::OrderStatusTx::run
    pub fn run<S: StoreTx>(&self, tx: &S, stat: &Stat, out: &mut Output) -> StoreResult<()> {
        stat.finish(TxType::StockLevel, self.execute(tx, out))
    }

    fn execute<S: StoreTx>(&self, tx: &S, out: &mut Output) -> StoreResult<()> {
        let StockLevelInput {
            w_id,
            d_id,
            threshold,
        } = self.input;

        out.push(w_id);
        out.push(d_id);
        out.push(threshold);

        let res = tx.get_record(DistrictKey::new(w_id, d_id));
        trace!("district res: {:?}", res.as_ref().map(|d: &District| d.d_next_o_id));
        let d = res?;

        // distinct item ids over the 20 most recent orders, in item-id
        // order so the stock reads below are deterministic
        let mut item_ids = BTreeSet::new();
        let low = OrderLineKey::new(w_id, d_id, d.d_next_o_id.saturating_sub(20), 0);
        let up = OrderLineKey::new(w_id, d_id, d.d_next_o_id + 1, 0);
        let res = tx.range_query(low, up, |ol: &OrderLine| {
            if let Some(i_id) = ol.ol_i_id {
                item_ids.insert(i_id);
            }
        });
        trace!("order line scan res: {:?}", res);
        res?;

        let mut low_stock = 0usize;
        for i_id in item_ids {
            let s: Stock = tx.get_record(StockKey::new(w_id, i_id))?;
            if s.s_quantity < u32::from(threshold) {
                low_stock += 1;
            }
        }

        out.push(low_stock);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn test_generate_threshold_bounds() {
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..10_000 {
            let input = StockLevelInput::generate(&mut rng, 4, 9);
            assert_eq!(input.w_id, 4);
            assert_eq!(input.d_id, 9);
            assert!((10..=20).contains(&input.threshold));
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let mut a = SmallRng::seed_from_u64(17);
        let mut b = SmallRng::seed_from_u64(17);
        for _ in 0..100 {
            assert_eq!(
                StockLevelInput::generate(&mut a, 1, 2),
                StockLevelInput::generate(&mut b, 1, 2)
            );
        }
    }
}
