//! Room registry reads against Postgres.

use rust_decimal::Decimal;
use salvo::http::StatusCode;

use pawstay_service::registry;
use pawstay_test::app::api::ROOMS_ROUTE_PREFIX;

use super::helpers::*;

/// ## Summary
/// The cheapest room of a type wins; equal prices fall back to name order.
#[test_log::test(tokio::test)]
async fn cheapest_by_type_breaks_ties_by_name() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    test_db
        .seed_room("Kennel B", RoomType::Kennel, 2, Decimal::new(3000, 2))
        .await
        .expect("seed room");
    let expected = test_db
        .seed_room("Kennel A", RoomType::Kennel, 2, Decimal::new(3000, 2))
        .await
        .expect("seed room");
    test_db
        .seed_room("Kennel C", RoomType::Kennel, 2, Decimal::new(4500, 2))
        .await
        .expect("seed room");
    test_db
        .seed_room("Cheap yard", RoomType::Yard, 8, Decimal::new(1000, 2))
        .await
        .expect("seed room");

    let mut conn = test_db.get_conn().await.expect("connection");
    let cheapest = registry::cheapest_by_type(&mut conn, RoomType::Kennel)
        .await
        .expect("query succeeds");

    assert_eq!(cheapest, Some(expected));
    assert_eq!(
        registry::cheapest_by_type(&mut conn, RoomType::Indoor)
            .await
            .expect("query succeeds"),
        None
    );
}

/// ## Summary
/// The offer lists every type in order, empty where no room exists.
#[test_log::test(tokio::test)]
async fn offer_covers_every_type() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let yard = test_db
        .seed_room("Shared yard", RoomType::Yard, 10, Decimal::new(2000, 2))
        .await
        .expect("seed room");

    let mut conn = test_db.get_conn().await.expect("connection");
    let offers = registry::offer(&mut conn).await.expect("offer");

    let types: Vec<_> = offers.iter().map(|offer| offer.room_type).collect();
    assert_eq!(types, RoomType::ALL.to_vec());
    assert_eq!(offers[0].room, None);
    assert_eq!(offers[1].room, None);
    assert_eq!(offers[2].room, Some(yard));
}

/// ## Summary
/// Rooms of an unknown type are invisible to listing and lookup.
#[test_log::test(tokio::test)]
async fn legacy_types_are_not_listed() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let kennel = test_db
        .seed_room("Kennel", RoomType::Kennel, 5, Decimal::ZERO)
        .await
        .expect("seed room");
    let legacy_id = test_db
        .seed_legacy_room("Old suite", "suite", 3)
        .await
        .expect("seed legacy room");

    let mut conn = test_db.get_conn().await.expect("connection");
    let rooms = registry::list_rooms(&mut conn).await.expect("list");
    assert_eq!(rooms, vec![kennel]);

    let err = registry::get_room(&mut conn, legacy_id)
        .await
        .expect_err("legacy room is hidden");
    assert!(matches!(
        err,
        pawstay_service::error::ServiceError::NotFound(_)
    ));
}

/// ## Summary
/// The rooms endpoints serve the registry as JSON.
#[test_log::test(tokio::test)]
async fn rooms_endpoints_serve_registry() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let indoor = test_db
        .seed_room("Indoor room", RoomType::Indoor, 5, Decimal::new(4999, 2))
        .await
        .expect("seed room");
    let service = create_db_test_service(&test_db.url()).await;

    let listing = TestRequest::get(ROOMS_ROUTE_PREFIX)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let listing = listing.as_array().expect("room array");
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["name"], "Indoor room");
    assert_eq!(listing[0]["room_type"], "indoor");
    assert_eq!(listing[0]["price_per_day"], "49.99");

    let single = TestRequest::get(&format!("{ROOMS_ROUTE_PREFIX}/{}", indoor.id))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(single["id"], indoor.id);

    TestRequest::get(&format!("{ROOMS_ROUTE_PREFIX}/{}", indoor.id + 1000))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let offer = TestRequest::get(&format!("{ROOMS_ROUTE_PREFIX}/offer"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(offer.as_array().expect("offer array").len(), 3);
    assert_eq!(offer[0]["room"]["id"], indoor.id);
    assert!(offer[1]["room"].is_null());
}
