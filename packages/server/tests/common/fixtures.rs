//! Test fixtures for seeding the in-memory store.
//!
//! Fixtures go through the same store traits the services use; event
//! fixtures go through the creation effect so the creator lands on the
//! roster exactly like in production.

use chrono::{Duration, Utc};
use server_core::common::{Condition, Role, Status, UserId};
use server_core::domains::events::effects::event_operations;
use server_core::domains::events::models::{CreateEvent, Event};
use server_core::domains::identity::models::{User, UserAttributes};
use server_core::domains::products::models::{Product, ProductAttributes};
use server_core::kernel::ServerDeps;

/// Insert a user mirrored from the identity provider.
pub async fn create_user(deps: &ServerDeps, external_id: &str, email: &str, role: Role) -> User {
    deps.users
        .insert(UserAttributes {
            external_id: external_id.to_string(),
            email: email.to_string(),
            nickname: None,
            first_name: None,
            last_name: None,
            phone_number: None,
            image_url: None,
            role,
        })
        .await
        .expect("failed to insert user fixture")
}

pub async fn create_admin(deps: &ServerDeps) -> User {
    create_user(deps, "user_admin", "admin@example.com", Role::Administrator).await
}

pub async fn create_member(deps: &ServerDeps, tag: &str) -> User {
    create_user(
        deps,
        &format!("user_{tag}"),
        &format!("{tag}@example.com"),
        Role::Member,
    )
    .await
}

/// Insert a product owned by the given user, In Stock with defaults.
pub async fn create_product_for(deps: &ServerDeps, owner: UserId, name: &str) -> Product {
    deps.products
        .insert(ProductAttributes {
            product_name: name.to_string(),
            description: format!("{name} description"),
            quantity: 1,
            character_name: vec!["Kiki".to_string()],
            license_name: vec!["Studio Ghibli".to_string()],
            product_type: vec![],
            condition: Condition::New,
            status: Status::InStock,
            storage_location: "Shelf A".to_string(),
            purchase_location: "Convention".to_string(),
            purchase_date: Utc::now(),
            purchase_price: 40.0,
            sell_location: None,
            sell_date: None,
            sell_price: None,
            threshold: 1,
            photo: None,
            collection_id: None,
            owner_user_id: owner,
        })
        .await
        .expect("failed to insert product fixture")
}

/// Create an event through the effect, so the creator is seated on the
/// roster as in production. Runs one week from now for two hours.
pub async fn create_event_for(deps: &ServerDeps, admin: &User, name: &str) -> Event {
    let start_time = Utc::now() + Duration::days(7);
    let id = event_operations::create(
        deps,
        admin,
        CreateEvent {
            name: name.to_string(),
            description: format!("{name} description"),
            start_time,
            end_time: start_time + Duration::hours(2),
            location: Some("Main hall".to_string()),
        },
    )
    .await
    .expect("failed to create event fixture");

    deps.events
        .get(id)
        .await
        .expect("failed to load event fixture")
        .expect("event fixture missing after creation")
}
