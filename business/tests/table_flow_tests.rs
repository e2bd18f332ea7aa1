//! End-to-end tests for the resource table controller against a mock
//! backend: loading, filtering, and row actions with their refetch rules.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sustaingo_business::resources::{AdminResource as _, Bag, Ngo, Reservation};
use sustaingo_business::{
    ActionOutcome, AdminConfig, AlwaysConfirm, ApiError, Credential, ResourceTable, Session,
    TableStatus,
};

fn bag_json(id: i64, title: &str, is_active: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "vendor": {
            "id": 4,
            "name": "Bakery 961",
            "logo": "",
            "image_url": "",
            "total_reviews": 12,
            "average_rating": 4.3,
            "delivery_time_minutes": 30
        },
        "title": title,
        "description": "",
        "quantity_available": 2,
        "price": "5.00",
        "is_donation": false,
        "pickup_start": "17:00:00",
        "pickup_end": "19:00:00",
        "date_posted": "2025-04-02T10:00:00Z",
        "is_active": is_active
    })
}

async fn test_config() -> (MockServer, AdminConfig) {
    let server = MockServer::start().await;
    let config = AdminConfig::new(server.uri());
    (server, config)
}

fn authed() -> Session {
    Session::with_credential(Credential::new("T1", "T2"))
}

mod load_tests {
    use super::*;

    #[tokio::test]
    async fn test_load_sends_bearer_and_replaces_rows() {
        let (server, config) = test_config().await;

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                bag_json(1, "Bread Box", true),
                bag_json(2, "Milk", true),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Bag>::new();
        table.load(&config, &authed()).await.unwrap();

        assert_eq!(*table.status(), TableStatus::Loaded);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].title, "Bread Box");
    }

    #[tokio::test]
    async fn test_load_without_credential_makes_no_request() {
        let (server, config) = test_config().await;

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Bag>::new();
        let err = table.load(&config, &Session::anonymous()).await.unwrap_err();

        assert_eq!(err, ApiError::MissingCredential);
        assert_eq!(err.to_string(), "No token found. Please log in.");
        assert_eq!(*table.status(), TableStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_rows() {
        let (server, config) = test_config().await;
        let session = authed();
        let mut table = ResourceTable::<Bag>::new();

        {
            let _ok = Mock::given(method("GET"))
                .and(path("/api/bags/"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(serde_json::json!([bag_json(1, "Bread Box", true)])),
                )
                .expect(1)
                .mount_as_scoped(&server)
                .await;

            table.load(&config, &session).await.unwrap();
        }

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = table.load(&config, &session).await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
        assert_eq!(
            *table.status(),
            TableStatus::LoadFailed("API returned status: 500".to_owned())
        );
        assert_eq!(table.rows().len(), 1, "stale rows stay visible");
    }

    #[tokio::test]
    async fn test_rejected_credential_can_be_discarded() {
        let (server, config) = test_config().await;

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Given token not valid for any token type"
            })))
            .mount(&server)
            .await;

        let mut session = authed();
        let mut table = ResourceTable::<Bag>::new();
        let err = table.load(&config, &session).await.unwrap_err();

        assert!(session.discard_if_rejected(&err));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_ngos_load_from_the_public_listing() {
        let (server, config) = test_config().await;

        Mock::given(method("GET"))
            .and(path("/api/public_ngos/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "organization_name": "Food Forward",
                "region": "Beirut",
                "description": null,
                "phone_number": "+961 1 234567",
                "email": "contact@foodforward.org",
                "website": null,
                "logo": null
            }])))
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Ngo>::new();
        table.load(&config, &authed()).await.unwrap();
        assert_eq!(table.rows()[0].id(), "contact@foodforward.org");
    }
}

mod filter_tests {
    use super::*;

    #[tokio::test]
    async fn test_title_filter_narrows_and_empty_query_restores() {
        let (server, config) = test_config().await;

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                bag_json(1, "Bread Box", true),
                bag_json(2, "Milk", true),
            ])))
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Bag>::new();
        table.load(&config, &authed()).await.unwrap();

        let narrowed = table.visible("bread");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].title, "Bread Box");

        let restored = table.visible("");
        assert_eq!(restored.len(), 2, "clearing the query shows everything");
        assert_eq!(restored[0].title, "Bread Box");
        assert_eq!(restored[1].title, "Milk");
    }
}

mod action_tests {
    use super::*;

    #[tokio::test]
    async fn test_confirmed_delete_refetches_exactly_once() {
        let (server, config) = test_config().await;
        let session = authed();

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([bag_json(7, "Bread Box", true)])),
            )
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/admin/bag/7/delete/"))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "detail": "Bag deleted"
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Bag>::new();
        table.load(&config, &session).await.unwrap();

        let delete = Bag::action("delete").unwrap();
        let outcome = table
            .execute(&config, &session, &mut AlwaysConfirm, delete, "7")
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(*table.status(), TableStatus::Loaded);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_failed_toggle_reports_and_does_not_refetch() {
        let (server, config) = test_config().await;
        let session = authed();

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([bag_json(7, "Bread Box", true)])),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PATCH"))
            .and(path("/api/admin/bag/7/toggle-active/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Bag>::new();
        table.load(&config, &session).await.unwrap();

        let toggle = Bag::action("toggle-active").unwrap();
        let err = table
            .execute(&config, &session, &mut AlwaysConfirm, toggle, "7")
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Status(500));
        assert_eq!(toggle.failure, "Failed to toggle bag status.");
        assert_eq!(*table.status(), TableStatus::Loaded);
        assert_eq!(table.rows().len(), 1, "rows untouched after a failure");
        server.verify().await;
    }

    #[tokio::test]
    async fn test_toggle_sends_an_empty_json_object() {
        let (server, config) = test_config().await;
        let session = authed();

        Mock::given(method("GET"))
            .and(path("/api/bags/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([bag_json(7, "Bread Box", false)])),
            )
            .mount(&server)
            .await;

        Mock::given(method("PATCH"))
            .and(path("/api/admin/bag/7/toggle-active/"))
            .and(body_json(serde_json::json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "detail": "Bag active status set to True"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Bag>::new();
        table.load(&config, &session).await.unwrap();

        let toggle = Bag::action("toggle-active").unwrap();
        table
            .execute(&config, &session, &mut AlwaysConfirm, toggle, "7")
            .await
            .unwrap();
        server.verify().await;
    }

    #[tokio::test]
    async fn test_mark_collected_lives_outside_the_admin_prefix() {
        let (server, config) = test_config().await;
        let session = authed();

        Mock::given(method("GET"))
            .and(path("/api/admin/reservations/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": 21,
                "reserved_at": "2025-04-05T18:30:00Z",
                "price_paid": "4.50",
                "payment_method": "cash",
                "delivery_address": null,
                "phone_number": null,
                "notes": null,
                "is_collected": false,
                "bag_title": "Bread Box",
                "vendor_name": "Bakery 961",
                "bag_contents": null,
                "type": "user"
            }])))
            .mount(&server)
            .await;

        Mock::given(method("PATCH"))
            .and(path("/api/reservations/21/collected/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "detail": "Marked as collected"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut table = ResourceTable::<Reservation>::new();
        table.load(&config, &session).await.unwrap();

        let collect = Reservation::action("mark-collected").unwrap();
        let outcome = table
            .execute(&config, &session, &mut AlwaysConfirm, collect, "21")
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Completed);
        server.verify().await;
    }
}
