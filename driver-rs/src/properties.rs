use serde_derive::Deserialize;

fn warehouses_default() -> u16 {
    1
}

fn items_default() -> u32 {
    10_000
}

fn customers_per_district_default() -> u32 {
    300
}

fn orders_per_district_default() -> u32 {
    300
}

fn operation_count_default() -> u64 {
    10_000
}

fn order_status_proportion_default() -> f64 {
    0.5
}

fn load_seed_default() -> u64 {
    42
}

#[derive(Deserialize, Debug)]
pub struct Properties {
    #[serde(default = "warehouses_default", rename = "warehouses")]
    pub warehouses: u16,
    #[serde(default = "items_default", rename = "items")]
    pub items: u32,
    #[serde(
        default = "customers_per_district_default",
        rename = "customersperdistrict"
    )]
    pub customers_per_district: u32,
    #[serde(
        default = "orders_per_district_default",
        rename = "ordersperdistrict"
    )]
    pub orders_per_district: u32,
    #[serde(default = "operation_count_default", rename = "operationcount")]
    pub operation_count: u64,
    // remainder of the mix runs StockLevel
    #[serde(
        default = "order_status_proportion_default",
        rename = "orderstatusproportion"
    )]
    pub order_status_proportion: f64,
    #[serde(default = "load_seed_default", rename = "loadseed")]
    pub load_seed: u64,
}
