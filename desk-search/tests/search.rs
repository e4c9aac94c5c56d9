mod common;

use desk_core::{ErrorKind, FindParams, Record};
use desk_search::{Ticket, TicketsService};
use serde_json::{json, Value};

use common::{ETHIOPIA, GUYANA, LATVIA, TURKS};

fn ids(rows: &[Value]) -> Vec<&str> {
    rows.iter()
        .map(|r| r["_id"].as_str().unwrap_or_default())
        .collect()
}

#[test]
fn ticket_searches() {
    let desk = common::desk();

    let found: &[(&str, &str, &[&str])] = &[
        ("submitter_id", "67", &[GUYANA]),
        ("submitter_id", "1", &[]),
        ("assignee_id", "55", &[ETHIOPIA]),
        ("assignee_id", "9999", &[]),
        ("organization_id", "124", &[GUYANA, TURKS, ETHIOPIA]),
        ("organization_id", "7", &[]),
        ("tags", "Maine", &[TURKS]),
        ("tags", "maine", &[]),
        ("has_incidents", "false", &[GUYANA, TURKS]),
        ("has_incidents", "TRUE", &[ETHIOPIA, LATVIA]),
        ("priority", "low", &[TURKS, ETHIOPIA]),
        ("priority", "urgent", &[]),
        ("type", "incident", &[GUYANA, ETHIOPIA]),
        ("_id", GUYANA, &[GUYANA]),
        ("_id", "not-a-ticket", &[]),
        ("subject", "A Nuisance in Latvia", &[LATVIA]),
    ];

    for (field, value, want) in found {
        let rows = desk
            .app
            .find("tickets", &FindParams::new(*field, *value))
            .unwrap_or_else(|err| panic!("{field}={value}: {err}"));
        assert_eq!(ids(&rows), *want, "{field}={value}");
    }
}

#[test]
fn ticket_searches_with_bad_input() {
    let desk = common::desk();

    let failing = [
        ("submitter_id", "abc", ErrorKind::InvalidValue),
        ("assignee_id", "12.5", ErrorKind::InvalidValue),
        ("organization_id", "", ErrorKind::InvalidValue),
        ("has_incidents", "input", ErrorKind::InvalidValue),
        ("has_incidents", "yes", ErrorKind::InvalidValue),
        ("key", "value", ErrorKind::InvalidField),
        ("key", "", ErrorKind::InvalidField),
    ];

    for (field, value, kind) in failing {
        let err = desk
            .app
            .find("tickets", &FindParams::new(field, value))
            .unwrap_err();
        assert_eq!(err.kind(), kind, "{field}={value}");
    }
}

#[test]
fn ticket_rows_carry_joined_names() {
    let desk = common::desk();
    let rows = desk
        .app
        .find("tickets", &FindParams::new("organization_id", "124"))
        .unwrap();

    let names: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|r| {
            (
                r["organization_name"].as_str().unwrap_or_default(),
                r["assignee_name"].as_str().unwrap_or_default(),
                r["submitter_name"].as_str().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        names,
        vec![
            ("Bitrex", "Melissa Bishop", "Lee Davidson"),
            ("Bitrex", "", "Russo Vincent"),
            ("Bitrex", "Frankie Whitfield", "Frankie Whitfield"),
        ]
    );
    assert_eq!(
        rows[0]["tags"],
        json!(["Mississippi", "Marshall Islands", "South Dakota", "Montana"])
    );
}

#[test]
fn unknown_organization_keeps_ticket_rows() {
    let source = common::source().with(desk_core::CollectionKind::Organizations, "[]");
    let desk = desk_search::build_from(desk_core::DeskConfig::new(), &source).unwrap();

    let views = TicketsService::new(desk.state.clone())
        .list("organization_id", "124")
        .unwrap();
    assert_eq!(views.len(), 3);
    assert!(views.iter().all(|v| v.organization_name.is_empty()));
    assert_eq!(views[0].assignee_name, "Melissa Bishop");
}

#[test]
fn user_rows_collect_ticket_subjects() {
    let desk = common::desk();
    let rows = desk.app.find("users", &FindParams::new("_id", "74")).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Melissa Bishop");
    assert_eq!(rows[0]["organization_name"], "Enthaze");
    assert_eq!(rows[0]["assignee_ticket_subjects"], json!(["A Problem in Guyana"]));
    assert_eq!(rows[0]["submitted_ticket_subjects"], json!(["A Nuisance in Latvia"]));

    let suspended = desk
        .app
        .find("users", &FindParams::new("suspended", "true"))
        .unwrap();
    assert_eq!(suspended.len(), 1);
    assert_eq!(suspended[0]["_id"], 55);
}

#[test]
fn organization_rows_list_members_and_tickets() {
    let desk = common::desk();
    let rows = desk
        .app
        .find("organizations", &FindParams::new("domain_names", "boink.com"))
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["_id"], 124);
    assert_eq!(rows[0]["user_names"], json!(["Frankie Whitfield", "Lee Davidson"]));
    assert_eq!(
        rows[0]["ticket_subjects"],
        json!([
            "A Problem in Guyana",
            "A Problem in Turks and Caicos Islands",
            "A Problem in Ethiopia"
        ])
    );
}

#[test]
fn every_loaded_ticket_is_found_by_its_key() {
    let desk = common::desk();
    let all = desk.state.tickets.all();
    assert_eq!(all.len(), 4);

    for ticket in &all {
        let hits = desk.state.tickets.list("_id", &ticket.id).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key(), ticket.key());
        assert_eq!(
            desk.state.tickets.retrieve(&ticket.id).as_deref(),
            Some(&**ticket)
        );
    }
}

#[test]
fn repeated_searches_agree() {
    let desk = common::desk();
    let params = FindParams::new("via", "web");
    let first = desk.app.find("tickets", &params).unwrap();
    let second = desk.app.find("tickets", &params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn unknown_collection_is_rejected() {
    let desk = common::desk();
    let err = desk
        .app
        .find("groups", &FindParams::new("_id", "1"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownService);
    assert_eq!(desk.app.service_names(), vec!["organizations", "tickets", "users"]);
}

#[test]
fn registered_fields_match_the_record_tables() {
    let desk = common::desk();
    let tickets = desk.app.service("tickets").unwrap();
    assert_eq!(tickets.fields(), Ticket::fields().names());
    assert_eq!(tickets.fields()[0], "_id");
}
