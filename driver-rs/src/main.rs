use std::{fs, sync::Arc, thread, time::Instant};

use anyhow::{bail, Result};
use log::info;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use structopt::StructOpt;
use tpcc::{
    record::DISTS_PER_WARE,
    store::{
        loader::{self, LoadScale},
        mem::MemStore,
    },
    OrderStatusTx, Output, Stat, StockLevelTx, TxType,
};

mod properties;
use properties::Properties;

#[derive(StructOpt, Debug)]
#[structopt(name = "tpcc-driver")]
struct Opt {
    #[structopt(short, long)]
    workload: String,
    #[structopt(short, long, default_value = "1")]
    threads: usize,
}

fn run_worker(
    store: Arc<MemStore>,
    stat: Arc<Stat>,
    props: Arc<Properties>,
    operation_count: usize,
) {
    let mut rng = SmallRng::from_entropy();
    let mut out = Output::new();
    for _ in 0..operation_count {
        let w_id = rng.gen_range(1..=props.warehouses);
        out.clear();
        // a killed profile is only counted; retry policy is out of scope
        if rng.gen_bool(props.order_status_proportion) {
            let tx = OrderStatusTx::new(&mut rng, w_id);
            let _ = tx.run(store.as_ref(), &stat, &mut out);
        } else {
            let d_id = rng.gen_range(1..=DISTS_PER_WARE);
            let tx = StockLevelTx::new(&mut rng, w_id, d_id);
            let _ = tx.run(store.as_ref(), &stat, &mut out);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let raw_props = fs::read_to_string(&opt.workload)?;
    let props: Properties = toml::from_str(&raw_props)?;
    info!("workload properties: {props:?}");
    let props = Arc::new(props);

    if opt.threads == 0 {
        bail!("at least one thread required");
    }
    if props.operation_count as usize % opt.threads != 0 {
        bail!("'operationcount' should be an exact multiple of the 'threads'");
    }
    if !(0.0..=1.0).contains(&props.order_status_proportion) {
        bail!("'orderstatusproportion' must be within [0, 1]");
    }
    let thread_operation_count = props.operation_count as usize / opt.threads;
    println!(
        "Threads: {}, Counts Per Thread: {thread_operation_count}",
        opt.threads
    );

    let scale = LoadScale {
        warehouses: props.warehouses,
        items: props.items,
        customers_per_district: props.customers_per_district,
        orders_per_district: props.orders_per_district,
    };
    let mut store = MemStore::new();
    let load_start = Instant::now();
    loader::load(
        &mut store,
        &mut SmallRng::seed_from_u64(props.load_seed),
        &scale,
    )?;
    println!("[LOAD], RunTime(ms), {}", load_start.elapsed().as_millis());

    let store = Arc::new(store);
    let stat = Arc::new(Stat::new());

    let start = Instant::now();
    let mut threads = vec![];
    for _ in 0..opt.threads {
        let store = store.clone();
        let stat = stat.clone();
        let props = props.clone();
        threads.push(thread::spawn(move || {
            run_worker(store, stat, props, thread_operation_count)
        }));
    }
    for t in threads {
        let _ = t.join();
    }

    let runtime = start.elapsed().as_millis();
    println!("****************************");
    println!("[OVERALL], ThreadCount, {}", opt.threads);
    println!("[OVERALL], RunTime(ms), {runtime}");
    let throughput = props.operation_count as f64 / (runtime as f64 / 1000.0);
    println!("[OVERALL], Throughput(ops/sec), {throughput}");
    for (name, tx_type) in [
        ("ORDER-STATUS", TxType::OrderStatus),
        ("STOCK-LEVEL", TxType::StockLevel),
    ] {
        let count = stat.count(tx_type);
        println!("[{name}], Committed, {}", count.committed());
        println!("[{name}], Killed, {}", count.killed());
    }
    println!("****************************");

    Ok(())
}
