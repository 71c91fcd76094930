//! Sibling ordering behavior through the service facades.

mod support;

use std::sync::Arc;

use menuboard_core::domain::{NewCategory, NewItem};
use menuboard_core::error::DomainError;
use menuboard_core::services::{CategoryService, ItemService, SiblingOrder};
use menuboard_core::store::HierarchyStore;

use support::{seed_place, MemoryStore};

const ALICE: &str = "auth0|alice";

fn new_category(menu: uuid::Uuid, name: &str) -> NewCategory {
    NewCategory {
        menu,
        name: name.to_string(),
        position: None,
    }
}

#[tokio::test]
async fn move_up_swaps_adjacent_positions() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let categories = CategoryService::new(Arc::clone(&store));
    // The seed chain made "Food" at position 0; append a second category.
    let drinks = categories
        .create(ALICE, new_category(menu_id, "Drinks"))
        .await
        .unwrap();
    assert_eq!(drinks.position, 1);

    categories.move_up(drinks.id, ALICE).await.unwrap();

    let siblings = store.categories_by_menu(menu_id).await.unwrap();
    assert_eq!(siblings[0].id, drinks.id);
    assert_eq!(siblings[0].position, 0);
    assert_eq!(siblings[1].name, "Food");
    assert_eq!(siblings[1].position, 1);

    // The displaced sibling is now the mover's next.
    let order = SiblingOrder::new(Arc::clone(&store));
    let next = order.next_category(&siblings[0]).await.unwrap().unwrap();
    assert_eq!(next.name, "Food");
}

#[tokio::test]
async fn move_up_then_down_restores_arrangement() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let categories = CategoryService::new(Arc::clone(&store));
    let drinks = categories
        .create(ALICE, new_category(menu_id, "Drinks"))
        .await
        .unwrap();

    let before = store.categories_by_menu(menu_id).await.unwrap();
    categories.move_up(drinks.id, ALICE).await.unwrap();
    categories.move_down(drinks.id, ALICE).await.unwrap();
    let after = store.categories_by_menu(menu_id).await.unwrap();

    let key = |cs: &[menuboard_core::domain::Category]| {
        cs.iter().map(|c| (c.id, c.position)).collect::<Vec<_>>()
    };
    assert_eq!(key(&before), key(&after));
}

#[tokio::test]
async fn move_up_on_first_sibling_is_rejected() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let first = store.categories_by_menu(menu_id).await.unwrap()[0].clone();
    let categories = CategoryService::new(Arc::clone(&store));
    let result = categories.move_up(first.id, ALICE).await;
    assert!(matches!(result, Err(DomainError::NothingToSwap)));
}

#[tokio::test]
async fn move_down_on_last_sibling_is_rejected() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let categories = CategoryService::new(Arc::clone(&store));
    let drinks = categories
        .create(ALICE, new_category(menu_id, "Drinks"))
        .await
        .unwrap();
    let result = categories.move_down(drinks.id, ALICE).await;
    assert!(matches!(result, Err(DomainError::NothingToSwap)));
}

#[tokio::test]
async fn positions_stay_pairwise_distinct() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let categories = CategoryService::new(Arc::clone(&store));
    for name in ["Drinks", "Desserts", "Specials"] {
        categories
            .create(ALICE, new_category(menu_id, name))
            .await
            .unwrap();
    }
    let middle = store.categories_by_menu(menu_id).await.unwrap()[2].clone();
    categories.move_up(middle.id, ALICE).await.unwrap();
    categories.move_up(middle.id, ALICE).await.unwrap();

    let siblings = store.categories_by_menu(menu_id).await.unwrap();
    let mut positions: Vec<i32> = siblings.iter().map(|c| c.position).collect();
    positions.sort_unstable();
    positions.dedup();
    assert_eq!(positions.len(), siblings.len());
}

#[tokio::test]
async fn next_position_is_strictly_greater_than_every_sibling() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let categories = CategoryService::new(Arc::clone(&store));
    // Explicit position leaves a gap; the next append must clear it.
    categories
        .create(
            ALICE,
            NewCategory {
                menu: menu_id,
                name: "Specials".to_string(),
                position: Some(7),
            },
        )
        .await
        .unwrap();

    let order = SiblingOrder::new(Arc::clone(&store));
    let next = order.next_category_position(menu_id).await.unwrap();
    let siblings = store.categories_by_menu(menu_id).await.unwrap();
    assert!(siblings.iter().all(|c| c.position < next));
    assert_eq!(next, 8);
}

#[tokio::test]
async fn oversized_positions_fail_validation_instead_of_wrapping() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();
    let categories = CategoryService::new(Arc::clone(&store));

    // Far-out explicit positions are rejected outright.
    let result = categories
        .create(
            ALICE,
            NewCategory {
                menu: menu_id,
                name: "Way Out".to_string(),
                position: Some(i32::MAX),
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    // At the cap the create succeeds; the next append then fails validation
    // instead of producing a wrapped-around position.
    categories
        .create(
            ALICE,
            NewCategory {
                menu: menu_id,
                name: "At The Cap".to_string(),
                position: Some(1_000_000),
            },
        )
        .await
        .unwrap();
    let result = categories
        .create(ALICE, new_category(menu_id, "One Too Far"))
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    // The failed creates persisted nothing out of range.
    let siblings = store.categories_by_menu(menu_id).await.unwrap();
    assert!(siblings.iter().all(|c| (0..=1_000_000).contains(&c.position)));
}

#[tokio::test]
async fn first_and_last_queries_track_the_order() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let categories = CategoryService::new(Arc::clone(&store));
    let drinks = categories
        .create(ALICE, new_category(menu_id, "Drinks"))
        .await
        .unwrap();

    let order = SiblingOrder::new(Arc::clone(&store));
    let food = store.categories_by_menu(menu_id).await.unwrap()[0].clone();
    assert!(order.is_first_category(&food).await.unwrap());
    assert!(!order.is_last_category(&food).await.unwrap());
    assert!(!order.is_first_category(&drinks).await.unwrap());
    assert!(order.is_last_category(&drinks).await.unwrap());

    // A lone sibling is both first and last.
    let group = store.groups_by_category(food.id).await.unwrap()[0].clone();
    assert!(order.is_first_group(&group).await.unwrap());
    assert!(order.is_last_group(&group).await.unwrap());
    let item = store.items_by_group(group.id).await.unwrap()[0].clone();
    assert!(order.is_first_item(&item).await.unwrap());
    assert!(order.is_last_item(&item).await.unwrap());
}

#[tokio::test]
async fn items_move_within_their_group_only() {
    let store = MemoryStore::shared();
    let place = seed_place(&store, ALICE).await;
    let menu_id = place.primary_menu.unwrap();

    let category = store.categories_by_menu(menu_id).await.unwrap()[0].clone();
    let group = store.groups_by_category(category.id).await.unwrap()[0].clone();

    let items = ItemService::new(Arc::clone(&store));
    let soup = items
        .create(
            ALICE,
            NewItem {
                group: group.id,
                name: "Soup".to_string(),
                position: None,
                description: None,
                price: 4.5,
                old_price: None,
                weight: None,
                image_url: None,
                visible: None,
                available: None,
            },
        )
        .await
        .unwrap();
    // Seeded "Breadsticks" sits at 0, the new item appends at 1.
    assert_eq!(soup.position, 1);

    items.move_up(soup.id, ALICE).await.unwrap();
    let ordered = store.items_by_group(group.id).await.unwrap();
    assert_eq!(ordered[0].name, "Soup");
    assert_eq!(ordered[1].name, "Breadsticks");

    // Already first now.
    let result = items.move_up(soup.id, ALICE).await;
    assert!(matches!(result, Err(DomainError::NothingToSwap)));
}
