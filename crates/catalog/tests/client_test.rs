use catalog::clients::{ProductClient, UserClient};
use catalog::lifecycle::{CatalogConfig, CatalogSystem};
use catalog::model::{ProductCreate, ProductId, ProductUpdate, UserCreate, UserId, UserUpdate};
use catalog::products::{ProductError, ProductQuery};
use catalog::store::CatalogStore;
use catalog::users::UserError;
use registry::EntityClient;
use rust_decimal::Decimal;

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[tokio::test]
async fn test_create_user_rejects_blank_fields() {
    let store = CatalogStore::new();
    let client = UserClient::new(store.clone());

    let err = client
        .create_user(UserCreate::new("", "x@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::Validation(_)));

    let err = client.create_user(UserCreate::new("x", "   ")).await.unwrap_err();
    assert!(matches!(err, UserError::Validation(_)));

    // Rejected input never reaches the store, so no identity is spent.
    let ok = client.create_user(UserCreate::new("x", "x@example.com")).await.unwrap();
    assert_eq!(ok.id, UserId(1));
    assert_eq!(store.users_len().await, 1);
}

#[tokio::test]
async fn test_create_user_rejects_duplicates_without_spending_ids() {
    let client = UserClient::new(CatalogStore::new());
    client
        .create_user(UserCreate::new("admin", "admin@example.com"))
        .await
        .unwrap();

    let err = client
        .create_user(UserCreate::new("admin", "second@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::AlreadyExists("username admin".into()));

    let err = client
        .create_user(UserCreate::new("root", "admin@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::AlreadyExists("email admin@example.com".into()));

    let next = client
        .create_user(UserCreate::new("root", "root@example.com"))
        .await
        .unwrap();
    assert_eq!(next.id, UserId(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_registrations_admit_one() {
    let client = UserClient::new(CatalogStore::new());

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create_user(UserCreate::new("same", format!("same{i}@example.com")))
                .await
        }));
    }

    let mut ok = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(user) => {
                ok += 1;
                assert_eq!(user.id, UserId(1));
            }
            Err(UserError::AlreadyExists(_)) => duplicates += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!((ok, duplicates), (1, 19));
    assert_eq!(client.list().await.len(), 1);
}

#[tokio::test]
async fn test_user_update_require_and_delete() {
    let client = UserClient::new(CatalogStore::new());
    let user = client
        .create_user(UserCreate::new("gus", "gus@example.com"))
        .await
        .unwrap();

    let updated = client
        .update_user(
            user.id,
            UserUpdate {
                full_name: Some("Gus Grey".into()),
                is_active: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.full_name, "Gus Grey");
    assert!(updated.is_active);

    assert_eq!(client.require(user.id).await.unwrap(), updated);
    assert_eq!(client.delete(user.id).await.unwrap(), updated);
    assert!(client.get(user.id).await.is_none());

    assert_eq!(
        client.require(user.id).await.unwrap_err(),
        UserError::NotFound("user_1".into())
    );
    assert!(matches!(
        client.update_user(user.id, UserUpdate::default()).await,
        Err(UserError::NotFound(_))
    ));
    assert!(matches!(client.delete(user.id).await, Err(UserError::NotFound(_))));
}

#[tokio::test]
async fn test_create_product_validation() {
    let client = ProductClient::new(CatalogStore::new());

    let err = client
        .create_product(ProductCreate::new("  ", price(100)))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::Validation(_)));

    let err = client
        .create_product(ProductCreate::new("Freebie", Decimal::ZERO))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::Validation(_)));

    let err = client
        .create_product(ProductCreate::new("Refund", price(-500)))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::Validation(_)));

    let ok = client
        .create_product(ProductCreate::new("Lamp", price(2500)).with_stock(3))
        .await
        .unwrap();
    assert_eq!(ok.id, ProductId(1));
    assert_eq!(ok.price, price(2500));
    assert_eq!(ok.stock, 3);
}

#[tokio::test]
async fn test_update_product_validation_and_not_found() {
    let client = ProductClient::new(CatalogStore::new());
    let lamp = client
        .create_product(ProductCreate::new("Lamp", price(2500)))
        .await
        .unwrap();

    let negative = ProductUpdate {
        price: Some(price(-100)),
        ..Default::default()
    };
    assert!(matches!(
        client.update_product(lamp.id, negative).await,
        Err(ProductError::Validation(_))
    ));

    // Blank text fields leave the stored values alone; a zero price is allowed.
    let blanks = ProductUpdate {
        name: Some(String::new()),
        category: Some(String::new()),
        price: Some(Decimal::ZERO),
        ..Default::default()
    };
    let cleared = client.update_product(lamp.id, blanks).await.unwrap();
    assert_eq!(cleared.name, "Lamp");
    assert_eq!(cleared.price, Decimal::ZERO);

    let restock = ProductUpdate {
        stock: Some(40),
        category: Some("lighting".into()),
        ..Default::default()
    };
    let updated = client.update_product(lamp.id, restock).await.unwrap();
    assert_eq!(updated.stock, 40);
    assert_eq!(updated.category, "lighting");
    assert_eq!(updated.price, Decimal::ZERO);
    assert_eq!(updated.name, "Lamp");
    assert_eq!(updated.created_at, lamp.created_at);

    assert_eq!(
        client
            .update_product(ProductId(9), ProductUpdate::default())
            .await,
        Err(ProductError::NotFound("product_9".into()))
    );
}

#[tokio::test]
async fn test_search_products() {
    let client = ProductClient::new(CatalogStore::new());
    for (name, cents, category) in [
        ("Desk Lamp", 2500, "lighting"),
        ("Floor Lamp", 7900, "lighting"),
        ("Notebook", 450, "stationery"),
        ("Pen", 199, "stationery"),
    ] {
        client
            .create_product(ProductCreate::new(name, price(cents)).with_category(category))
            .await
            .unwrap();
    }

    let lamps = client
        .search_products(ProductQuery::default().with_search("lamp"))
        .await
        .unwrap();
    let names: Vec<&str> = lamps.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Floor Lamp", "Desk Lamp"]);

    let cheap = client
        .search_products(
            ProductQuery::default()
                .with_category("stationery")
                .with_price_range(None, Some(price(200))),
        )
        .await
        .unwrap();
    assert_eq!(cheap.total, 1);
    assert_eq!(cheap.products[0].name, "Pen");

    let second_page = client
        .search_products(ProductQuery::default().with_page(2, 3))
        .await
        .unwrap();
    assert_eq!(second_page.total, 4);
    assert_eq!(second_page.products.len(), 1);
    assert_eq!(second_page.products[0].id, ProductId(1));

    let err = client
        .search_products(ProductQuery::default().with_page(1, 500))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_search_lists_newest_first() {
    let client = ProductClient::new(CatalogStore::new());
    for name in ["First", "Second", "Third"] {
        client
            .create_product(ProductCreate::new(name, price(500)))
            .await
            .unwrap();
    }

    let page = client.search_products(ProductQuery::default()).await.unwrap();
    let ids: Vec<u64> = page.products.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_list_users_pages() {
    let client = UserClient::new(CatalogStore::new());
    for i in 1..=7 {
        client
            .create_user(UserCreate::new(format!("user{i}"), format!("user{i}@example.com")))
            .await
            .unwrap();
    }

    let first = client.list_users(1, 3).await.unwrap();
    assert_eq!(first.total, 7);
    assert_eq!((first.page, first.limit), (1, 3));
    let ids: Vec<u64> = first.users.iter().map(|u| u.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let last = client.list_users(3, 3).await.unwrap();
    assert_eq!(last.total, 7);
    assert_eq!(last.users.len(), 1);
    assert_eq!(last.users[0].username, "user7");

    let past_end = client.list_users(4, 3).await.unwrap();
    assert!(past_end.users.is_empty());
    assert_eq!(past_end.total, 7);

    assert!(matches!(
        client.list_users(1, 0).await,
        Err(UserError::Validation(_))
    ));
    assert!(matches!(
        client.list_users(0, 10).await,
        Err(UserError::Validation(_))
    ));
    assert!(matches!(
        client.list_users(1, 101).await,
        Err(UserError::Validation(_))
    ));
}

#[tokio::test]
async fn test_system_seeds_demo_data_through_create_path() {
    let system = CatalogSystem::start(&CatalogConfig::default()).await.unwrap();

    let admin = system.user_client.require(UserId(1)).await.unwrap();
    assert_eq!(admin.username, "admin");
    assert_eq!(admin.email, "admin@example.com");

    let guide = system.product_client.require(ProductId(1)).await.unwrap();
    assert_eq!(guide.price, price(9999));
    assert_eq!(guide.stock, 100);

    // The next records continue after the seeded ones.
    let next = system
        .user_client
        .create_user(UserCreate::new("alice", "alice@example.com"))
        .await
        .unwrap();
    assert_eq!(next.id, UserId(2));

    system.shutdown().await;
}

#[tokio::test]
async fn test_system_without_seed_starts_empty() {
    let config = CatalogConfig {
        seed_demo_data: false,
        ..CatalogConfig::default()
    };
    let system = CatalogSystem::start(&config).await.unwrap();
    assert!(system.user_client.list().await.is_empty());
    assert!(system.product_client.list().await.is_empty());

    let first = system
        .user_client
        .create_user(UserCreate::new("admin", "admin@example.com"))
        .await
        .unwrap();
    assert_eq!(first.id, UserId(1));
    assert_eq!(system.store.get_user(UserId(1)).await, Some(first));
}

#[test]
fn test_create_payload_defaults_to_active() {
    let user: UserCreate =
        serde_json::from_str(r#"{"username":"amy","email":"amy@example.com"}"#).unwrap();
    assert!(user.is_active);
    assert!(user.full_name.is_empty());

    let product: ProductCreate =
        serde_json::from_str(r#"{"name":"Mug","price":"12.50","is_active":false}"#).unwrap();
    assert!(!product.is_active);
    assert_eq!(product.price, price(1250));
    assert_eq!(product.stock, 0);
}
