//! NAGO demo
//!
//! Wires a window, an in-memory customer repository and the two core page
//! surfaces - a data view and an auto-form - then drives a short
//! interaction script over the persisted state slots: select across pages,
//! select-all under a filter, clear the selection, edit a form field.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use nago_core::{DataSource, Identifiable, SizeClass, State, VecSource, Window};
use nago_ui::dataview::{Data, DataView, Field, select_option_delete};
use nago_ui::form::{AutoOptions, FieldSpec, FieldValue, FormValue, auto};
use nago_ui::pager::{Model, ModelOptions};
use nago_view::to_json_pretty;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

// ============================================================================
// Demo entities
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: String,
    name: String,
    city: String,
    signed_up: NaiveDate,
}

impl Identifiable for Customer {
    type Key = String;

    fn identity(&self) -> String {
        self.id.clone()
    }
}

fn seed_customers() -> VecSource<Customer> {
    let rows = [
        ("Ada Lovelace", "London"),
        ("Grace Hopper", "Arlington"),
        ("Edsger Dijkstra", "Rotterdam"),
        ("Donald Knuth", "Milwaukee"),
        ("Barbara Liskov", "Philadelphia"),
        ("Alan Turing", "Wilmslow"),
        ("Hedy Lamarr", "Vienna"),
        ("Niklaus Wirth", "Winterthur"),
        ("Frances Allen", "Peru"),
        ("Tony Hoare", "Colombo"),
        ("Katherine Johnson", "White Sulphur Springs"),
        ("John Backus", "Philadelphia"),
    ];
    VecSource::new(
        rows.iter()
            .enumerate()
            .map(|(i, (name, city))| Customer {
                id: Uuid::new_v4().simple().to_string(),
                name: name.to_string(),
                city: city.to_string(),
                signed_up: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .expect("valid seed date")
                    + Duration::days(i as i64 * 11),
            })
            .collect(),
    )
}

fn customers_view(
    window: &Window,
    source: VecSource<Customer>,
) -> DataView<Customer, VecSource<Customer>> {
    let date_format = window.settings().date_format.clone();
    let data = Data::new(source)
        .field(
            Field::text_of("Name", |c: &Customer| c.name.clone())
                .comparator(|a: &Customer, b: &Customer| a.name.cmp(&b.name)),
        )
        .field(Field::text_of("City", |c: &Customer| c.city.clone()))
        .field(
            Field::text_of("Signed up", move |c: &Customer| {
                c.signed_up.format(&date_format).to_string()
            })
            .comparator(|a: &Customer, b: &Customer| a.signed_up.cmp(&b.signed_up)),
        );

    DataView::from_data(window, data)
        .state_prefix("customers")
        .page_size(5)
        .search(true)
        .action(|c: &Customer| info!(customer = %c.name, "row opened"))
        .new_action("New customer", || info!("new customer requested"))
        .select_option(select_option_delete(window.bundle(), |keys: Vec<String>| {
            info!(count = keys.len(), "delete requested");
        }))
}

// ============================================================================
// Demo form
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct WorkspaceProfile {
    title: String,
    support_email: String,
    accent: String,
    session_ttl: Duration,
    maintenance: bool,
    founded: Option<NaiveDate>,
}

impl Default for WorkspaceProfile {
    fn default() -> Self {
        Self {
            title: String::new(),
            support_email: String::new(),
            accent: "#1a73e8".to_string(),
            session_ttl: Duration::zero(),
            maintenance: false,
            founded: None,
        }
    }
}

impl FormValue for WorkspaceProfile {
    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::heading("branding", "Branding"),
            FieldSpec::text("title").section("branding"),
            FieldSpec::color("accent").section("branding"),
            FieldSpec::text("support_email")
                .section("contact")
                .supporting_text("profile.support_email.hint"),
            FieldSpec::date("founded").section("contact"),
            FieldSpec::hline(),
            FieldSpec::duration("session_ttl")
                .value("3600")
                .days(false)
                .seconds(false),
            FieldSpec::boolean("maintenance"),
        ]
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "accent" => Some(FieldValue::Color(self.accent.clone())),
            "support_email" => Some(FieldValue::Text(self.support_email.clone())),
            "founded" => Some(FieldValue::Date(self.founded)),
            "session_ttl" => Some(FieldValue::Duration(self.session_ttl)),
            "maintenance" => Some(FieldValue::Bool(self.maintenance)),
            _ => None,
        }
    }

    fn set(&self, field: &str, value: FieldValue) -> Self {
        let mut next = self.clone();
        match (field, value) {
            ("title", FieldValue::Text(v)) => next.title = v,
            ("accent", FieldValue::Color(v)) => next.accent = v,
            ("support_email", FieldValue::Text(v)) => next.support_email = v,
            ("founded", FieldValue::Date(v)) => next.founded = v,
            ("session_ttl", FieldValue::Duration(v)) => next.session_ttl = v,
            ("maintenance", FieldValue::Bool(v)) => next.maintenance = v,
            _ => {}
        }
        next
    }
}

// ============================================================================
// Script
// ============================================================================

fn city_predicate() -> Arc<dyn Fn(&Customer, &str) -> bool + Send + Sync> {
    Arc::new(|c: &Customer, q: &str| c.city.to_lowercase().contains(&q.to_lowercase()))
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    println!();
    println!("NAGO - server-driven application platform core");
    println!("==============================================");
    println!();

    let window = Window::new(SizeClass::Medium);
    let source = seed_customers();
    let ids: Vec<String> = source.items().iter().map(|c| c.id.clone()).collect();

    // Data view page: first render, serialized as the client receives it.
    let view = customers_view(&window, source.clone());
    println!("{}", to_json_pretty(&view.render())?);

    // Select one customer on the first page and one on the last, the way
    // the client runtime would: by writing their persisted checkbox slots.
    let first: State<bool> = window
        .scope()
        .state(format!("customers-checkbox-{}", ids[0]));
    first.set(true);
    let last: State<bool> = window
        .scope()
        .state(format!("customers-checkbox-{}", ids[11]));
    last.set(true);

    // Manual model construction over the same slots shows the bookkeeping
    // the data view renders from.
    let model = Model::new(
        &window,
        &source,
        source.find_all(),
        ModelOptions::new("customers").page_size(5),
    )?;
    info!(
        selected = model.selection_count(),
        pages = model.page().page_count,
        "selection spans pages"
    );

    // Filter down and select everything the filter accepts.
    let query: State<String> = window.scope().state("customers-query");
    query.set_silent("philadelphia".to_string());
    let options = || {
        ModelOptions::new("customers")
            .page_size(5)
            .predicate(city_predicate())
    };
    let model = Model::new(&window, &source, source.find_all(), options())?;
    model.select_subset().set(true);

    let model = Model::new(&window, &source, source.find_all(), options())?;
    info!(
        subset = model.subset().len(),
        selected = model.selection_count(),
        "select-all under filter"
    );

    // Clear everything with a single notification.
    let before = window.scope().notification_count();
    model.unselect_all();
    info!(
        notifications = window.scope().notification_count() - before,
        "selection cleared"
    );
    query.set_silent(String::new());

    // Auto-form page over the workspace profile.
    let profile: State<WorkspaceProfile> = window.scope().state("profile-value");
    let form_options = AutoOptions::new("profile");
    println!("{}", to_json_pretty(&auto(&window, &form_options, &profile)?)?);

    // Edit the title through its widget slot; the write-through observer
    // replaces the profile with an updated clone.
    let title: State<String> = window.scope().state("profile-field-title");
    title.set("Atlas Workspace".to_string());
    info!(
        title = %profile.get().title,
        ttl_secs = profile.get().session_ttl.num_seconds(),
        "profile updated"
    );

    Ok(())
}
