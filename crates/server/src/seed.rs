//! Startup sample data. Mirrors what a fresh deployment is expected to
//! contain so the frontend has something to render; skipped entirely when
//! the store already holds records.

use rust_decimal::Decimal;
use tracing::info;

use service::errors::ServiceError;
use service::repository::{AttendantInput, ProductInput};

use crate::state::ServerState;

pub async fn load_sample_data(state: &ServerState) -> Result<(), ServiceError> {
    let products_loaded = load_sample_products(state).await?;
    let attendants_loaded = load_sample_attendants(state).await?;
    info!(
        products = products_loaded,
        attendants = attendants_loaded,
        "sample data check complete"
    );
    Ok(())
}

async fn load_sample_products(state: &ServerState) -> Result<usize, ServiceError> {
    let repo = state.products.as_ref();
    if !repo.find_all().await?.is_empty() {
        return Ok(0);
    }

    let samples = vec![
        ProductInput {
            name: "Dell XPS 13 Laptop".into(),
            price: Decimal::new(129999, 2),
            category: "Electronics".into(),
            stock: 15,
            description: Some(
                "High-performance ultrabook with 13.3-inch display, Intel Core i7 \
                 processor, 16GB RAM, and 512GB SSD."
                    .into(),
            ),
        },
        ProductInput {
            name: "Breville Espresso Machine".into(),
            price: Decimal::new(29950, 2),
            category: "Appliances".into(),
            stock: 8,
            description: Some(
                "Premium espresso machine with 15-bar pump, milk frother, and \
                 adjustable temperature control."
                    .into(),
            ),
        },
        ProductInput {
            name: "Rust Programming Guide".into(),
            price: Decimal::new(4599, 2),
            category: "Books".into(),
            stock: 25,
            description: Some(
                "Comprehensive programming guide covering basics to advanced topics, \
                 with practical examples and exercises."
                    .into(),
            ),
        },
        ProductInput {
            name: "Wilson Tennis Racket".into(),
            price: Decimal::new(8999, 2),
            category: "Sports".into(),
            stock: 12,
            description: Some(
                "Professional-grade tennis racket with carbon fiber frame and \
                 comfortable grip."
                    .into(),
            ),
        },
        ProductInput {
            name: "Ergonomic Office Chair".into(),
            price: Decimal::new(34900, 2),
            category: "Furniture".into(),
            stock: 6,
            description: Some(
                "Adjustable office chair with lumbar support, breathable mesh back, \
                 and padded armrests."
                    .into(),
            ),
        },
    ];

    let count = samples.len();
    for input in samples {
        repo.insert(&input).await?;
    }
    info!(count, "sample products loaded");
    Ok(count)
}

async fn load_sample_attendants(state: &ServerState) -> Result<usize, ServiceError> {
    let repo = state.attendants.as_ref();
    if !repo.find_all().await?.is_empty() {
        return Ok(0);
    }

    let samples = vec![
        AttendantInput {
            name: "John Smith".into(),
            address: Some("123 Queen Street, Auckland CBD, Auckland 1010".into()),
            mobile: Some("+64 21 123 4567".into()),
            email: Some("john.smith@company.co.nz".into()),
            comments: Some(
                "Senior attendant with 5 years experience. Specializes in electronics \
                 and IT products."
                    .into(),
            ),
        },
        AttendantInput {
            name: "Sarah Johnson".into(),
            address: Some("456 Ponsonby Road, Ponsonby, Auckland 1011".into()),
            mobile: Some("+64 22 234 5678".into()),
            email: Some("sarah.johnson@company.co.nz".into()),
            comments: Some(
                "Customer service specialist. Fluent in English and Mandarin. \
                 Available for morning shifts."
                    .into(),
            ),
        },
        AttendantInput {
            name: "Michael Brown".into(),
            address: Some("789 K Road, Newton, Auckland 1010".into()),
            mobile: Some("+64 21 345 6789".into()),
            email: Some("michael.brown@company.co.nz".into()),
            comments: Some(
                "Part-time attendant, available weekends. Experience in furniture \
                 and home appliances."
                    .into(),
            ),
        },
        AttendantInput {
            name: "Emma Wilson".into(),
            address: Some("321 Dominion Road, Mount Eden, Auckland 1024".into()),
            mobile: Some("+64 22 456 7890".into()),
            email: Some("emma.wilson@company.co.nz".into()),
            comments: Some(
                "Team leader with excellent organizational skills. Training \
                 coordinator for new staff."
                    .into(),
            ),
        },
    ];

    let count = samples.len();
    for input in samples {
        repo.insert(&input).await?;
    }
    info!(count, "sample attendants loaded");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::storage::memory::{MemoryAttendantRepository, MemoryProductRepository};
    use std::sync::Arc;

    fn memory_state() -> ServerState {
        ServerState {
            products: Arc::new(MemoryProductRepository::new()),
            attendants: Arc::new(MemoryAttendantRepository::new()),
        }
    }

    #[tokio::test]
    async fn seeding_is_skipped_when_data_exists() {
        let state = memory_state();
        load_sample_data(&state).await.expect("first seed");
        let before = state.products.find_all().await.expect("list ok").len();
        assert_eq!(before, 5);
        assert_eq!(state.attendants.find_all().await.expect("list ok").len(), 4);

        load_sample_data(&state).await.expect("second seed");
        let after = state.products.find_all().await.expect("list ok").len();
        assert_eq!(before, after);
    }
}
