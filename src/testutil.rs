//! Shared helpers for the component unit tests.

use std::sync::Arc;

use chrono::TimeZone;
use serde_json::Value;
use vitrine_client::BoxedClient;
use vitrine_pdf::LopdfRenderer;
use vitrine_traits::{BaseUrlLinks, MapTranslator};
use vitrine_view::{Config, Params, Services, View};

use crate::bootstrap::{standard_engine, standard_registry};
use crate::domain::{Order, OrderLine};

pub(crate) fn create_services(config: Value) -> Arc<Services> {
    let services = Services::builder()
        .with_engine(standard_engine().unwrap())
        .with_translator(MapTranslator::new())
        .with_links(BaseUrlLinks::new("http://shop.test/").unwrap())
        .with_pdf(LopdfRenderer::default())
        .with_config(Config::new(config))
        .build()
        .unwrap();
    Arc::new(services)
}

pub(crate) fn create_view(config: Value, params: &[(&str, &str)]) -> View {
    View::with_params(
        create_services(config),
        Params::from_pairs(params.iter().copied()),
    )
}

pub(crate) fn create_client(path: &str, config: Value) -> BoxedClient {
    standard_registry()
        .create(path, &Config::new(config))
        .unwrap()
}

pub(crate) fn sample_order(status: i64) -> Order {
    Order {
        id: "1003".into(),
        customer: "Erika Mustermann".into(),
        currency: "EUR".into(),
        payment_status: status,
        created: chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        lines: vec![
            OrderLine {
                product: "Summer dress".into(),
                quantity: 2,
                price: 5990,
            },
            OrderLine {
                product: "Belt".into(),
                quantity: 1,
                price: 1250,
            },
        ],
    }
}
