//! End-to-end desk scenarios against an in-memory catalog.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use labeldesk::request::FormField;
use labeldesk::state::{DeleteOutcome, Phase};
use labeldesk::{ConfigError, Desk, Host, LabelConfig, PrintJob};
use labeldesk_catalog::{
    ApiError, CatalogApi, CreateOutcome, Endpoints, MemoryCatalog, NewProduct, ProductRecord,
};

// =========================================================================
// Fixtures
// =========================================================================

#[derive(Default)]
struct RecordingHost {
    decline: AtomicBool,
    fail_print: AtomicBool,
    questions: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
    jobs: Mutex<Vec<PrintJob>>,
}

impl Host for RecordingHost {
    fn confirm(&self, message: &str) -> bool {
        self.questions.lock().unwrap().push(message.to_string());
        !self.decline.load(Ordering::SeqCst)
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn print(&self, job: &PrintJob) -> io::Result<()> {
        if self.fail_print.load(Ordering::SeqCst) {
            return Err(io::Error::other("printer offline"));
        }
        self.jobs.lock().unwrap().push(job.clone());
        Ok(())
    }
}

struct Fixture {
    desk: Desk,
    catalog: Arc<MemoryCatalog>,
    host: Arc<RecordingHost>,
}

impl Fixture {
    fn keys(&self) -> Vec<String> {
        self.desk.view().keys().into_iter().map(String::from).collect()
    }

    fn visible(&self) -> Vec<String> {
        self.desk.view().visible_keys().into_iter().map(String::from).collect()
    }

    fn server_keys(&self) -> Vec<String> {
        self.catalog.snapshot().into_iter().map(|p| p.inventory_number).collect()
    }

    fn notices(&self) -> Vec<String> {
        self.host.notices.lock().unwrap().clone()
    }
}

fn seeded_catalog() -> MemoryCatalog {
    let endpoints = Endpoints::parse("http://192.168.1.144:5000").unwrap();
    MemoryCatalog::with_products(
        endpoints,
        vec![
            ProductRecord::new("B2", "Monitor").with_brand("Dell"),
            ProductRecord::new("A1", "Laptop").with_brand("Lenovo"),
        ],
    )
}

async fn setup() -> Fixture {
    let catalog = Arc::new(seeded_catalog());
    let host = Arc::new(RecordingHost::default());
    let desk = Desk::new(catalog.clone(), host.clone(), LabelConfig::default()).unwrap();
    desk.initialize().await;
    Fixture { desk, catalog, host }
}

/// A memory catalog whose list calls can be made slow or failing.
///
/// A delayed list answers with the records present when it was called.
struct ScriptedCatalog {
    inner: MemoryCatalog,
    fail_lists: AtomicBool,
    list_delays: Mutex<VecDeque<Duration>>,
}

#[async_trait::async_trait]
impl CatalogApi for ScriptedCatalog {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        let delay = self.list_delays.lock().unwrap().pop_front();
        let result = if self.fail_lists.load(Ordering::SeqCst) {
            Err(ApiError::Network("timeout".into()))
        } else {
            self.inner.list_products().await
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        result
    }

    async fn create_product(&self, product: &NewProduct) -> Result<CreateOutcome, ApiError> {
        self.inner.create_product(product).await
    }

    async fn delete_product(&self, inventory_number: &str) -> Result<(), ApiError> {
        self.inner.delete_product(inventory_number).await
    }

    fn endpoints(&self) -> &Endpoints {
        self.inner.endpoints()
    }
}

async fn scripted_setup() -> (Desk, Arc<ScriptedCatalog>, Arc<RecordingHost>) {
    let catalog = Arc::new(ScriptedCatalog {
        inner: seeded_catalog(),
        fail_lists: AtomicBool::new(false),
        list_delays: Mutex::new(VecDeque::new()),
    });
    let host = Arc::new(RecordingHost::default());
    let desk = Desk::new(catalog.clone(), host.clone(), LabelConfig::default()).unwrap();
    desk.initialize().await;
    (desk, catalog, host)
}

fn keys_of(desk: &Desk) -> Vec<String> {
    desk.view().keys().into_iter().map(String::from).collect()
}

#[test]
fn desk_rejects_label_config_without_sizes() {
    let config = LabelConfig { sizes: Vec::new(), ..LabelConfig::default() };
    let host = Arc::new(RecordingHost::default());
    let result = Desk::new(Arc::new(seeded_catalog()), host, config);
    assert!(matches!(result, Err(ConfigError::NoSizes)));
}

// =========================================================================
// List and search
// =========================================================================

#[tokio::test]
async fn initial_load_renders_server_order() {
    let f = setup().await;
    let view = f.desk.view();
    assert!(view.loaded);
    assert!(!view.loading);
    assert_eq!(f.keys(), vec!["A1", "B2"]);
    assert_eq!(f.visible(), vec!["A1", "B2"]);
    assert_eq!(view.rows[0].text, "Laptop A1 Lenovo");
}

#[tokio::test]
async fn search_scenario() {
    let f = setup().await;

    f.desk.search("lap").await;
    assert_eq!(f.visible(), vec!["A1"]);

    f.desk.search("2").await;
    assert_eq!(f.visible(), vec!["B2"]);

    f.desk.search("").await;
    assert_eq!(f.visible(), vec!["A1", "B2"]);
    assert_eq!(f.catalog.list_calls(), 1);
}

#[tokio::test]
async fn search_is_idempotent_and_keeps_rows() {
    let f = setup().await;
    f.desk.search("DELL").await;
    let first = f.desk.view();
    f.desk.search("DELL").await;
    assert_eq!(f.desk.view(), first);
    assert_eq!(f.visible(), vec!["B2"]);
    assert_eq!(f.keys(), vec!["A1", "B2"]);

    f.desk.search("printer").await;
    assert!(f.visible().is_empty());
}

#[tokio::test]
async fn query_is_reapplied_after_refresh() {
    let f = setup().await;
    f.desk.search("lap").await;

    f.desk.set_field(FormField::InventoryNumber, "C3").await;
    f.desk.set_field(FormField::ProductName, "Laptop stand").await;
    f.desk.submit().await;

    assert_eq!(f.keys(), vec!["A1", "C3", "B2"]);
    assert_eq!(f.visible(), vec!["A1", "C3"]);
    assert_eq!(f.desk.query(), "lap");
}

#[tokio::test]
async fn failed_fetch_keeps_previous_rows() {
    let f = setup().await;
    f.catalog.set_offline(true);
    f.desk.refresh().await;

    let view = f.desk.view();
    assert_eq!(f.keys(), vec!["A1", "B2"]);
    assert!(!view.loading);
    assert!(view.error.as_deref().unwrap_or("").contains("unreachable"));

    f.catalog.set_offline(false);
    f.desk.refresh().await;
    assert_eq!(f.desk.view().error, None);
}

#[tokio::test]
async fn overlapping_refreshes_last_completed_response_wins() {
    let (desk, catalog, _) = scripted_setup().await;
    catalog
        .list_delays
        .lock()
        .unwrap()
        .extend([Duration::from_millis(50), Duration::ZERO]);

    let slow = desk.refresh();
    let fast = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        catalog.inner.create_product(&NewProduct::new("C3", "Printer")).await.unwrap();
        desk.refresh().await;
        assert_eq!(keys_of(&desk), vec!["A1", "B2", "C3"]);
    };
    tokio::join!(slow, fast);

    // The slow fetch was answered before C3 existed and finished last.
    assert_eq!(keys_of(&desk), vec!["A1", "B2"]);
    assert!(!desk.view().loading);

    desk.refresh().await;
    assert_eq!(keys_of(&desk), vec!["A1", "B2", "C3"]);
}

// =========================================================================
// Label and print
// =========================================================================

#[tokio::test]
async fn print_disabled_until_first_selection() {
    let f = setup().await;
    assert!(!f.desk.print_state().enabled);

    f.desk.print().await;
    assert!(f.host.jobs.lock().unwrap().is_empty());

    assert!(f.desk.select("A1").await);
    assert!(f.desk.print_state().enabled);

    f.desk.search("monitor").await;
    f.desk.refresh().await;
    assert!(f.desk.print_state().enabled);
}

#[tokio::test]
async fn second_selection_replaces_label() {
    let f = setup().await;
    f.desk.select("A1").await;
    f.desk.select("B2").await;

    let label = f.desk.preview().unwrap();
    assert_eq!(label.record.inventory_number, "B2");
    assert_eq!(label.text, vec!["Monitor", "Dell", "ID: B2"]);
    assert_eq!(label.qr_url, "http://192.168.1.144:5000/api/qr/B2");
    assert!(label.text.iter().all(|line| !line.contains("Laptop")));
}

#[tokio::test]
async fn hidden_rows_cannot_be_selected() {
    let f = setup().await;
    f.desk.search("monitor").await;
    assert!(!f.desk.select("A1").await);
    assert!(!f.desk.select("missing").await);
    assert!(f.desk.preview().is_none());
}

#[tokio::test]
async fn print_applies_exactly_the_selected_class() {
    let f = setup().await;
    f.desk.select("A1").await;

    f.desk.print().await;
    f.desk.change_size("large").await;
    f.desk.print().await;

    let jobs = f.host.jobs.lock().unwrap().clone();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].label.size_class, "label-small");
    assert_eq!(jobs[1].label.size_class, "label-large");
    assert!(jobs[1].html.contains(r#"class="label-large""#));
    assert!(!jobs[1].html.contains("label-small"));

    let state = f.desk.print_state();
    assert_eq!(state.applied_class.as_deref(), Some("label-large"));
    assert_eq!(state.printed, 2);
}

#[tokio::test]
async fn unknown_size_keeps_previous_selection() {
    let f = setup().await;
    f.desk.change_size("medium").await;
    f.desk.change_size("poster").await;
    assert_eq!(f.desk.print_state().size, "medium");
}

#[tokio::test]
async fn print_failure_is_reported() {
    let f = setup().await;
    f.desk.select("A1").await;
    f.host.fail_print.store(true, Ordering::SeqCst);
    f.desk.print().await;

    assert_eq!(f.notices(), vec!["Print failed: printer offline"]);
    assert_eq!(f.desk.print_state().printed, 0);
}

// =========================================================================
// Add
// =========================================================================

#[tokio::test]
async fn successful_add_clears_form_and_refreshes() {
    let f = setup().await;
    f.desk.set_field(FormField::InventoryNumber, "C3").await;
    f.desk.set_field(FormField::ProductName, "Printer").await;
    f.desk.set_field(FormField::Brand, "HP").await;
    f.desk.submit().await;

    assert_eq!(f.desk.view().keys().iter().filter(|k| **k == "C3").count(), 1);
    assert_eq!(f.catalog.list_calls(), 2);
    assert_eq!(f.desk.form(), labeldesk::state::AddForm::empty());
    assert!(f.notices().is_empty());

    let stored = f.catalog.snapshot().into_iter().find(|p| p.inventory_number == "C3").unwrap();
    assert_eq!(stored.brand.as_deref(), Some("HP"));
    assert_eq!(stored.model, None);
}

#[tokio::test]
async fn rejected_add_keeps_form_and_list() {
    let f = setup().await;
    f.desk.set_field(FormField::InventoryNumber, "A1").await;
    f.desk.set_field(FormField::ProductName, "Another laptop").await;
    let before = f.desk.view();
    f.desk.submit().await;

    let form = f.desk.form();
    assert_eq!(form.draft.inventory_number, "A1");
    assert_eq!(form.draft.product_name, "Another laptop");
    assert_eq!(form.phase, Phase::Idle);
    assert_eq!(f.desk.view(), before);
    assert_eq!(f.catalog.list_calls(), 1);
    assert_eq!(f.notices(), vec!["Error: inventory number already exists"]);
}

#[tokio::test]
async fn missing_required_field_is_not_submitted() {
    let f = setup().await;
    f.desk.set_field(FormField::ProductName, "Scanner").await;
    f.desk.submit().await;

    assert_eq!(f.server_keys().len(), 2);
    assert_eq!(f.desk.form().draft.product_name, "Scanner");
    assert_eq!(f.notices(), vec!["Error: inventory_number is required"]);
}

#[tokio::test]
async fn whitespace_is_left_for_the_server_to_judge() {
    let f = setup().await;
    f.desk.set_field(FormField::InventoryNumber, "C3").await;
    f.desk.set_field(FormField::ProductName, " ").await;
    f.desk.submit().await;

    assert!(f.notices().is_empty());
    assert!(f.server_keys().contains(&"C3".to_string()));
}

#[tokio::test]
async fn add_while_offline_keeps_form_and_list() {
    let f = setup().await;
    f.desk.set_field(FormField::InventoryNumber, "C3").await;
    f.desk.set_field(FormField::ProductName, "Printer").await;
    f.catalog.set_offline(true);
    f.desk.submit().await;

    assert_eq!(f.desk.form().draft.inventory_number, "C3");
    assert_eq!(f.keys(), vec!["A1", "B2"]);
    assert_eq!(f.notices().len(), 1);
    assert!(f.notices()[0].starts_with("Error: network"));
}

// =========================================================================
// Delete
// =========================================================================

#[tokio::test]
async fn confirmed_delete_removes_row_without_selecting() {
    let f = setup().await;
    assert_eq!(f.desk.delete("B2").await, Some(DeleteOutcome::Deleted));

    assert_eq!(f.keys(), vec!["A1"]);
    assert_eq!(f.server_keys(), vec!["A1"]);
    assert!(f.desk.preview().is_none());
    assert!(!f.desk.print_state().enabled);

    let questions = f.host.questions.lock().unwrap().clone();
    assert_eq!(questions, vec![r#"Are you sure you want to delete "Monitor" (B2)?"#]);
}

#[tokio::test]
async fn declined_delete_changes_nothing() {
    let f = setup().await;
    f.host.decline.store(true, Ordering::SeqCst);
    assert_eq!(f.desk.delete("A1").await, Some(DeleteOutcome::Declined));

    assert_eq!(f.keys(), vec!["A1", "B2"]);
    assert_eq!(f.server_keys().len(), 2);
    assert_eq!(f.catalog.list_calls(), 1);
    assert!(f.desk.preview().is_none());
}

#[tokio::test]
async fn deleting_a_record_already_gone_refreshes() {
    let f = setup().await;
    // Removed by someone else after our last fetch.
    f.catalog.delete_product("B2").await.unwrap();
    f.desk.delete("B2").await;

    assert_eq!(f.keys(), vec!["A1"]);
    assert!(f.notices().is_empty());
}

#[tokio::test]
async fn label_survives_deleting_its_record() {
    let f = setup().await;
    f.desk.select("A1").await;
    f.desk.delete("A1").await;

    assert_eq!(f.keys(), vec!["B2"]);
    let label = f.desk.preview().unwrap();
    assert_eq!(label.record.inventory_number, "A1");
}

#[tokio::test]
async fn failed_delete_keeps_list() {
    let f = setup().await;
    f.catalog.set_offline(true);
    assert_eq!(f.desk.delete("A1").await, Some(DeleteOutcome::Failed));

    assert_eq!(f.keys(), vec!["A1", "B2"]);
    assert!(f.desk.delete_state().error.is_some());
    assert_eq!(f.notices().len(), 1);
    assert!(f.notices()[0].starts_with(r#"Could not delete "Laptop""#));
}

#[tokio::test]
async fn delete_is_reported_when_the_refresh_after_it_fails() {
    let (desk, catalog, host) = scripted_setup().await;
    catalog.fail_lists.store(true, Ordering::SeqCst);

    assert_eq!(desk.delete("B2").await, Some(DeleteOutcome::Deleted));

    let on_server: Vec<String> =
        catalog.inner.snapshot().into_iter().map(|p| p.inventory_number).collect();
    assert_eq!(on_server, vec!["A1"]);
    // The stale list stays until a refresh succeeds.
    assert_eq!(keys_of(&desk), vec!["A1", "B2"]);
    assert_eq!(desk.view().error.as_deref(), Some("network: timeout"));
    assert_eq!(desk.delete_state().error, None);
    assert!(host.notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_row_that_is_not_visible_does_nothing() {
    let f = setup().await;
    f.desk.search("monitor").await;
    assert_eq!(f.desk.delete("A1").await, None);
    assert!(f.host.questions.lock().unwrap().is_empty());
    assert_eq!(f.server_keys().len(), 2);
}
