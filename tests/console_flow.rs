//! Admin console flows against the in-memory backend.

use fleetcheck_core::console::{AdminConsole, MemoryBackend, MessageLevel, Page};
use fleetcheck_core::error::RemoteSystem;
use fleetcheck_core::storage::{Role, Table};
use fleetcheck_core::validation::UserForm;
use fleetcheck_core::{Config, ConsoleError, FilterCriteria, FilterField, ValidationError};
use serde_json::json;

fn console() -> AdminConsole<MemoryBackend> {
    let backend = MemoryBackend::new()
        .with_account("manager@fleet.test", "depot-1", Role::Manager, "Faith Manager")
        .with_rows(
            Table::Inspections,
            vec![
                json!({"id": "i-1", "truck_number": "KAA 100A", "driver_name": "Juma",
                       "status": "completed", "depot": "Nairobi", "created_at": "2024-02-01T07:00:00Z"}),
                json!({"id": "i-2", "truck_number": "KBB 200B", "driver_name": "Akinyi",
                       "status": "in_progress", "depot": "Kisumu", "created_at": "2024-02-02T07:00:00Z"}),
                json!({"id": "i-3", "truck_number": "KCC 300C", "driver_name": "Juma Jr",
                       "status": "completed", "depot": "Kisumu", "created_at": "2024-02-03T07:00:00Z"}),
            ],
        )
        .with_rows(
            Table::QualityReports,
            vec![
                json!({"id": "q-1", "product": "Diesel", "depot": "Nairobi", "created_at": "2024-02-01T08:00:00Z"}),
                json!({"id": "q-2", "product": "Petrol", "depot": "Kisumu", "created_at": "2024-02-02T08:00:00Z"}),
            ],
        );
    AdminConsole::new(backend, Config::default())
}

#[test]
fn test_manager_session_walkthrough() {
    let mut console = console();
    assert!(!console.restore_session().unwrap());

    console.sign_in("manager@fleet.test", "depot-1").unwrap();
    assert_eq!(console.state().page, Page::Dashboard);

    console.navigate(Page::Inspections).unwrap();
    let ids: Vec<&str> = console.state().inspections.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["i-3", "i-2", "i-1"]);

    console.set_inspection_criteria(FilterCriteria::new().search("juma").status("completed"));
    let visible: Vec<&str> = console.visible_inspections().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(visible, vec!["i-3", "i-1"]);
    assert_eq!(console.inspection_options(FilterField::Depot), vec!["Kisumu", "Nairobi"]);

    let doc = console.inspection_report("i-3").unwrap();
    assert!(doc.html.contains("KCC 300C"));

    console.sign_out().unwrap();
    assert_eq!(console.state().page, Page::Login);
    assert!(console.state().inspections.is_empty());
}

#[test]
fn test_restore_session_after_reload() {
    let mut console = console();
    console.sign_in("manager@fleet.test", "depot-1").unwrap();
    let backend = std::mem::take(console.backend_mut());

    let mut reloaded = AdminConsole::new(backend, Config::default());
    assert!(reloaded.restore_session().unwrap());
    assert_eq!(reloaded.state().page, Page::Dashboard);
}

#[test]
fn test_quality_product_filter() {
    let mut console = console();
    console.sign_in("manager@fleet.test", "depot-1").unwrap();
    console.navigate(Page::QualityReports).unwrap();

    console.set_quality_criteria(FilterCriteria::new().product("Petrol"));
    let visible: Vec<&str> = console.visible_quality_reports().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(visible, vec!["q-2"]);
    assert_eq!(console.quality_options(FilterField::Product), vec!["Diesel", "Petrol"]);
}

#[test]
fn test_create_and_delete_user() {
    let mut console = console();
    console.sign_in("manager@fleet.test", "depot-1").unwrap();
    console.navigate(Page::Users).unwrap();
    assert_eq!(console.state().users.len(), 1);

    let form = UserForm {
        name: "Peter Inspector".to_string(),
        email: "peter@fleet.test".to_string(),
        password: "checks1".to_string(),
        confirm_password: "checks1".to_string(),
        role: "inspector".to_string(),
    };
    let user_id = console.create_user(&form).unwrap();
    assert_eq!(console.state().users.len(), 2);
    assert_eq!(
        console.state().message.as_ref().map(|m| m.text.as_str()),
        Some("User peter@fleet.test created")
    );

    // Same email again: the function's error is shown verbatim.
    let err = console.create_user(&form).unwrap_err();
    assert!(matches!(err, ConsoleError::Remote(_)));
    assert_eq!(
        console.state().message.as_ref().map(|m| m.text.as_str()),
        Some("A user with this email address has already been registered")
    );

    console.delete_user(&user_id, |_| true).unwrap();
    assert_eq!(console.state().users.len(), 1);
}

#[test]
fn test_created_user_survives_a_failed_refresh() {
    let mut console = console();
    console.sign_in("manager@fleet.test", "depot-1").unwrap();
    console.navigate(Page::Users).unwrap();

    console
        .backend_mut()
        .set_outage(RemoteSystem::RecordStore, "upstream timeout");
    let form = UserForm {
        name: "Mary Driver".to_string(),
        email: "mary@fleet.test".to_string(),
        password: "wheels1".to_string(),
        confirm_password: "wheels1".to_string(),
        role: "driver".to_string(),
    };
    let user_id = console.create_user(&form).unwrap();

    assert!(console
        .backend()
        .rows(Table::Profiles)
        .iter()
        .any(|row| row["id"] == user_id.as_str()));
    let message = console.state().message.clone().unwrap();
    assert_eq!(message.level, MessageLevel::Warning);
    assert_eq!(
        message.text,
        "User mary@fleet.test created, but the list could not be refreshed: upstream timeout"
    );
    // the stale list is kept until a refresh succeeds
    assert_eq!(console.state().users.len(), 1);

    console.backend_mut().clear_outage();
    console.load_users().unwrap();
    assert_eq!(console.state().users.len(), 2);
}

#[test]
fn test_invalid_user_form_makes_no_remote_call() {
    let mut console = console();
    console.sign_in("manager@fleet.test", "depot-1").unwrap();

    let form = UserForm {
        name: "Short".to_string(),
        email: "short@fleet.test".to_string(),
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
        role: "driver".to_string(),
    };
    let err = console.create_user(&form).unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Validation(ValidationError::PasswordTooShort { min: 6 })
    ));
    assert!(console.backend().calls.is_empty());
}

#[test]
fn test_failed_delete_leaves_state_untouched() {
    let mut console = console();
    console.sign_in("manager@fleet.test", "depot-1").unwrap();
    console.navigate(Page::QualityReports).unwrap();

    console
        .backend_mut()
        .set_outage(RemoteSystem::RecordStore, "permission denied for table quality_reports");
    let err = console.delete_quality_report("q-1", |_| true).unwrap_err();
    assert!(matches!(err, ConsoleError::Remote(_)));
    assert_eq!(console.state().quality_reports.len(), 2);
    assert!(console.state().message.as_ref().unwrap().is_error());

    console.backend_mut().clear_outage();
    console.delete_quality_report("q-1", |_| true).unwrap();
    assert_eq!(console.state().quality_reports.len(), 1);
    assert_eq!(console.backend().rows(Table::QualityReports).len(), 1);
}

#[test]
fn test_password_reset_is_sent() {
    let mut console = console();
    console.request_password_reset(" manager@fleet.test ").unwrap();
    assert_eq!(console.backend().reset_requests, vec!["manager@fleet.test".to_string()]);

    assert!(console.request_password_reset("not-an-email").is_err());
    assert_eq!(console.backend().reset_requests.len(), 1);
}
