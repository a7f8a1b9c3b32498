use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use tradebook_core::domain::common::entities::app_errors::CoreError;
use tradebook_core::domain::common::services::Service;
use tradebook_core::domain::deal_item::entities::{Deal, Material};
use tradebook_core::domain::deal_item::ports::{DealItemRepository, DealItemService};
use tradebook_core::domain::deal_item::value_objects::{
    CreateDealItemInput, MaterialDealItemsQuery, UpdateDealItemInput,
};
use tradebook_core::infrastructure::deal_item::repositories::InMemoryDealStore;

const SELF_PARTY: i64 = 1;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
}

fn deal(id: i64, seller_id: i64, buyer_id: i64, deal_time: DateTime<Utc>) -> Deal {
    Deal {
        id,
        seller_id,
        buyer_id,
        deal_time,
        timestamp: deal_time,
        deal_price_id: 0,
        deal_payment_id: 0,
        buyer: None,
        seller: None,
    }
}

fn service() -> Service<InMemoryDealStore> {
    Service::new(InMemoryDealStore::new(), SELF_PARTY)
}

async fn add_item(
    service: &Service<InMemoryDealStore>,
    deal_id: i64,
    material_id: i64,
    price: i64,
) -> i64 {
    service
        .deal_item_repository
        .insert(CreateDealItemInput {
            deal_id,
            material_id,
            price_per_one: Decimal::new(price, 0),
            quantity: Decimal::ONE,
        })
        .await
        .unwrap()
        .id
}

fn listing(material_id: i64) -> MaterialDealItemsQuery {
    MaterialDealItemsQuery {
        material_id,
        ..Default::default()
    }
}

#[tokio::test]
async fn deal_listing_joins_material_and_orders_by_id() {
    let service = service();
    let store = &service.deal_item_repository;
    store.insert_deal(deal(5, SELF_PARTY, 2, at(9))).unwrap();
    store.insert_deal(deal(6, SELF_PARTY, 2, at(9))).unwrap();
    store
        .insert_material(Material {
            id: 9,
            name: "copper".to_string(),
        })
        .unwrap();

    add_item(&service, 5, 9, 100).await;
    add_item(&service, 6, 9, 120).await;
    add_item(&service, 5, 9, 140).await;

    let items = service.get_deal_items_of_deal(5).await.unwrap();
    assert_eq!(
        items.iter().map(|row| row.item.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert!(items.iter().all(|row| row.material.name == "copper"));
}

#[tokio::test]
async fn deal_listing_of_unknown_deal_is_empty() {
    let service = service();
    assert_eq!(service.get_deal_items_of_deal(42).await.unwrap(), vec![]);
}

#[tokio::test]
async fn material_listing_returns_the_requested_slice() {
    let service = service();
    let store = &service.deal_item_repository;
    store.insert_deal(deal(5, SELF_PARTY, 2, at(9))).unwrap();
    for _ in 0..3 {
        add_item(&service, 5, 9, 100).await;
    }

    let page = service
        .get_deal_items_of_material(MaterialDealItemsQuery {
            material_id: 9,
            page: Some(2),
            per_page: Some(1),
            sort: Some("id asc".to_string()),
            filter: None,
        })
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(
        page.items.iter().map(|row| row.item.id).collect::<Vec<_>>(),
        vec![2]
    );
}

#[tokio::test]
async fn material_listing_pages_partition_the_result_set() {
    let service = service();
    let store = &service.deal_item_repository;
    // Two deals share a deal time so the id tie-break is exercised.
    store.insert_deal(deal(10, SELF_PARTY, 2, at(9))).unwrap();
    store.insert_deal(deal(11, SELF_PARTY, 2, at(12))).unwrap();
    store.insert_deal(deal(12, SELF_PARTY, 2, at(12))).unwrap();
    store.insert_deal(deal(13, SELF_PARTY, 2, at(15))).unwrap();

    for n in 0..7i64 {
        add_item(&service, 10 + (n % 4), 9, 100 + n).await;
    }
    // Noise on another material.
    add_item(&service, 10, 4, 50).await;
    add_item(&service, 11, 4, 60).await;

    let full = service
        .get_deal_items_of_material(MaterialDealItemsQuery {
            material_id: 9,
            per_page: Some(100),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(full.total, 7);

    let mut collected = Vec::new();
    for page in 1..=3 {
        let slice = service
            .get_deal_items_of_material(MaterialDealItemsQuery {
                material_id: 9,
                page: Some(page),
                per_page: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(slice.total, 7);
        collected.extend(slice.items.into_iter().map(|row| row.item.id));
    }

    let full_ids = full
        .items
        .iter()
        .map(|row| row.item.id)
        .collect::<Vec<_>>();
    assert_eq!(collected, full_ids);
    assert_eq!(collected.iter().collect::<HashSet<_>>().len(), 7);
}

#[tokio::test]
async fn material_listing_is_reproducible_across_calls() {
    let service = service();
    let store = &service.deal_item_repository;
    store.insert_deal(deal(5, SELF_PARTY, 2, at(9))).unwrap();
    store.insert_deal(deal(6, SELF_PARTY, 2, at(9))).unwrap();
    for n in 0..5i64 {
        add_item(&service, 5 + (n % 2), 9, 100).await;
    }

    let first = service.get_deal_items_of_material(listing(9)).await.unwrap();
    let second = service.get_deal_items_of_material(listing(9)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn material_listing_defaults_to_most_recent_deal_first() {
    let service = service();
    let store = &service.deal_item_repository;
    store.insert_deal(deal(5, SELF_PARTY, 2, at(9))).unwrap();
    store.insert_deal(deal(6, SELF_PARTY, 2, at(15))).unwrap();
    store.insert_deal(deal(7, SELF_PARTY, 2, at(12))).unwrap();
    add_item(&service, 5, 9, 100).await;
    add_item(&service, 6, 9, 110).await;
    add_item(&service, 7, 9, 120).await;

    let page = service.get_deal_items_of_material(listing(9)).await.unwrap();
    assert_eq!(
        page.items.iter().map(|row| row.deal.id).collect::<Vec<_>>(),
        vec![6, 7, 5]
    );
}

#[tokio::test]
async fn material_listing_applies_filter_clauses() {
    let service = service();
    let store = &service.deal_item_repository;
    store.insert_deal(deal(5, SELF_PARTY, 2, at(9))).unwrap();
    store.insert_deal(deal(6, 3, 2, at(12))).unwrap();
    add_item(&service, 5, 9, 100).await;
    add_item(&service, 6, 9, 120).await;
    add_item(&service, 5, 9, 80).await;

    let page = service
        .get_deal_items_of_material(MaterialDealItemsQuery {
            material_id: 9,
            filter: Some("deal.sellerId=1,pricePerOne>=100".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].item.id, 1);
}

#[tokio::test]
async fn material_listing_rejects_invalid_specs() {
    let service = service();

    let bad_sort = service
        .get_deal_items_of_material(MaterialDealItemsQuery {
            material_id: 9,
            sort: Some("unknownField desc".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(bad_sort, Err(CoreError::InvalidSortSpec(_))));

    let bad_filter = service
        .get_deal_items_of_material(MaterialDealItemsQuery {
            material_id: 9,
            filter: Some("unknownField=5".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(bad_filter, Err(CoreError::InvalidFilterSpec(_))));

    for (page, per_page) in [(Some(0), None), (None, Some(0))] {
        let bad_page = service
            .get_deal_items_of_material(MaterialDealItemsQuery {
                material_id: 9,
                page,
                per_page,
                ..Default::default()
            })
            .await;
        assert!(matches!(bad_page, Err(CoreError::InvalidPageSpec(_))));
    }
}

#[tokio::test]
async fn last_sale_price_breaks_deal_time_ties_by_lowest_item_id() {
    let service = service();
    let store = &service.deal_item_repository;
    // Both deals sold by the self party at the same instant.
    store.insert_deal(deal(5, SELF_PARTY, 2, at(12))).unwrap();
    store.insert_deal(deal(6, SELF_PARTY, 3, at(12))).unwrap();
    add_item(&service, 5, 9, 100).await;
    add_item(&service, 6, 9, 120).await;

    assert_eq!(
        service.get_last_sale_price(9).await.unwrap(),
        Decimal::new(100, 0)
    );
}

#[tokio::test]
async fn last_sale_price_prefers_the_most_recent_deal_time() {
    let service = service();
    let store = &service.deal_item_repository;
    store.insert_deal(deal(5, SELF_PARTY, 2, at(9))).unwrap();
    store.insert_deal(deal(6, SELF_PARTY, 2, at(15))).unwrap();
    add_item(&service, 5, 9, 80).await;
    add_item(&service, 6, 9, 110).await;

    assert_eq!(
        service.get_last_sale_price(9).await.unwrap(),
        Decimal::new(110, 0)
    );
}

#[tokio::test]
async fn last_purchase_price_matches_the_buyer_side_only() {
    let service = service();
    let store = &service.deal_item_repository;
    // Self sells in deal 5, buys in deal 6.
    store.insert_deal(deal(5, SELF_PARTY, 4, at(15))).unwrap();
    store.insert_deal(deal(6, 4, SELF_PARTY, at(9))).unwrap();
    add_item(&service, 5, 9, 130).await;
    add_item(&service, 6, 9, 90).await;

    assert_eq!(
        service.get_last_purchase_price(9).await.unwrap(),
        Decimal::new(90, 0)
    );
    assert_eq!(
        service.get_last_sale_price(9).await.unwrap(),
        Decimal::new(130, 0)
    );
}

#[tokio::test]
async fn last_prices_are_zero_without_candidates() {
    let service = service();
    assert_eq!(service.get_last_sale_price(9).await.unwrap(), Decimal::ZERO);
    assert_eq!(
        service.get_last_purchase_price(9).await.unwrap(),
        Decimal::ZERO
    );

    // A foreign deal on the right material still yields no candidate.
    let store = &service.deal_item_repository;
    store.insert_deal(deal(5, 3, 4, at(9))).unwrap();
    add_item(&service, 5, 9, 100).await;
    assert_eq!(service.get_last_sale_price(9).await.unwrap(), Decimal::ZERO);
}

#[tokio::test]
async fn crud_round_trip_and_not_found_reporting() {
    let service = service();

    let created = service
        .create_deal_item(CreateDealItemInput {
            deal_id: 5,
            material_id: 9,
            price_per_one: Decimal::new(100, 0),
            quantity: Decimal::new(3, 0),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let mut updated = created.clone();
    updated.price_per_one = Decimal::new(140, 0);
    service
        .update_deal_item(UpdateDealItemInput {
            deal_item_id: created.id,
            deal_item: updated.clone(),
        })
        .await
        .unwrap();
    assert_eq!(
        service.get_deal_item(created.id).await.unwrap().price_per_one,
        Decimal::new(140, 0)
    );

    let mut orphan = created.clone();
    orphan.id = 99;
    assert_eq!(
        service
            .update_deal_item(UpdateDealItemInput {
                deal_item_id: 99,
                deal_item: orphan,
            })
            .await,
        Err(CoreError::NotFound)
    );

    let removed = service.delete_deal_item(created.id).await.unwrap();
    assert_eq!(removed.price_per_one, Decimal::new(140, 0));
    assert_eq!(
        service.delete_deal_item(created.id).await,
        Err(CoreError::NotFound)
    );
    assert_eq!(
        service.get_deal_item(created.id).await,
        Err(CoreError::NotFound)
    );
}
