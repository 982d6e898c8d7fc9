mod common;

use common::*;
use thaiaddr_core::engine::{RejectReason, SubsetKind};
use thaiaddr_core::prelude::*;
use thaiaddr_core::PostalCodeError;

fn engine() -> Engine {
    Engine::with_defaults(table())
}

fn postal(code: &str) -> PostalCode {
    PostalCode::parse(code).unwrap()
}

/// Events after the leading `Suggestions` entry of a postal edit.
fn after_suggestions(events: Vec<EngineEvent>) -> Vec<EngineEvent> {
    assert!(matches!(events.first(), Some(EngineEvent::Suggestions { .. })));
    events.into_iter().skip(1).collect()
}

#[test]
fn starts_inert_with_every_province_listed() {
    let mut e = engine();
    assert_eq!(e.mode(), Mode::ZipDriven);
    assert_eq!(e.options().provinces.len(), 4);
    assert!(!e.options().provinces.enabled);
    assert!(!e.options().districts.enabled);
    assert!(e.options().subdistricts.is_empty());

    let events = e.select_province(Some(BANGKOK), true);
    assert_eq!(
        events,
        vec![EngineEvent::Rejected {
            level: Level::Province,
            code: Some(BANGKOK),
            reason: RejectReason::Disabled,
        }]
    );
    assert_eq!(e.mode(), Mode::ZipDriven);
    assert_eq!(e.selection().province, None);
}

#[test]
fn partial_postal_text_only_suggests() {
    let mut e = engine();
    for text in ["1", "10", "105", "1050"] {
        let events = e.edit_postal_text(text);
        assert_eq!(events.len(), 1, "{text}: {events:?}");
        match &events[0] {
            EngineEvent::Suggestions { prefix, items } => {
                assert_eq!(prefix, text);
                assert!(items.iter().all(|s| s.postal_code.as_str().starts_with(text)));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(e.selection().postal_text, "1050");
    assert!(e.state().zip_records.is_empty());
}

#[test]
fn postal_spanning_two_districts_selects_province_only() {
    let mut e = engine();
    let events = after_suggestions(e.edit_postal_text("10500"));

    assert_eq!(
        events,
        vec![
            EngineEvent::PostalConfirmed {
                postal_code: postal("10500"),
                records: 4,
            },
            EngineEvent::OptionsPopulated {
                level: Level::Province,
                count: 1,
            },
            EngineEvent::AutoSelected {
                level: Level::Province,
                code: BANGKOK,
            },
            EngineEvent::OptionsPopulated {
                level: Level::District,
                count: 2,
            },
            EngineEvent::LevelCleared {
                level: Level::Subdistrict,
            },
        ]
    );
    assert_eq!(e.mode(), Mode::ZipDriven);
    assert_eq!(e.selection().province, Some(BANGKOK));
    assert_eq!(e.selection().district, None);
    assert_eq!(e.selection().subdistrict, None);
    assert!(e.options().provinces.enabled);
    assert_eq!(e.options().districts.len(), 2);
    assert!(!e.options().subdistricts.enabled);
    assert_eq!(e.active_subset().len(), 4);
}

#[test]
fn unambiguous_postal_cascades_to_subdistrict() {
    let mut e = engine();
    let events = after_suggestions(e.edit_postal_text("50180"));

    let auto: Vec<_> = events
        .iter()
        .filter_map(|ev| match ev {
            EngineEvent::AutoSelected { level, code } => Some((*level, *code)),
            _ => None,
        })
        .collect();
    assert_eq!(
        auto,
        vec![
            (Level::Province, CHIANG_MAI),
            (Level::District, MAE_RIM),
            (Level::Subdistrict, RIM_TAI),
        ]
    );
    // The subdistrict's postal code already matches the field.
    assert!(!events
        .iter()
        .any(|ev| matches!(ev, EngineEvent::PostalSynced { .. })));
    assert_eq!(e.selection().postal_text, "50180");
}

#[test]
fn postal_spanning_two_provinces_leaves_everything_open() {
    let mut e = engine();
    e.edit_postal_text("11000");

    assert_eq!(e.options().provinces.len(), 2);
    assert_eq!(e.selection().province, None);
    assert!(!e.options().districts.enabled);
    assert!(!e.options().subdistricts.enabled);
    assert_eq!(e.selection().district, None);
}

#[test]
fn confirming_after_a_deeper_selection_clears_the_lower_levels() {
    let mut e = engine();
    e.edit_postal_text("50180");
    assert_eq!(e.selection().subdistrict, Some(RIM_TAI));

    e.edit_postal_text("11000");
    assert_eq!(e.selection().province, None);
    assert_eq!(e.selection().district, None);
    assert_eq!(e.selection().subdistrict, None);
}

#[test]
fn user_district_change_switches_to_manual_and_reads_the_full_table() {
    let mut e = engine();
    e.edit_postal_text("10500");

    let events = e.select_district(Some(SATHON), true);
    assert_eq!(
        &events[..2],
        &[
            EngineEvent::Selected {
                level: Level::District,
                code: Some(SATHON),
                user_initiated: true,
            },
            EngineEvent::ModeChanged {
                from: Mode::ZipDriven,
                to: Mode::Manual,
            },
        ]
    );
    assert_eq!(e.mode(), Mode::Manual);

    // Thung Maha Mek (10120) is not reachable from 10500.
    let subs: Vec<_> = e
        .options()
        .subdistricts
        .items
        .iter()
        .map(|s| s.code)
        .collect();
    assert_eq!(subs.len(), 2);
    assert!(subs.contains(&THUNG_MAHA_MEK));
    assert_eq!(
        e.options().subdistricts.origin.map(|o| o.subset),
        Some(SubsetKind::Full)
    );

    let events = e.select_subdistrict(Some(THUNG_MAHA_MEK), true);
    assert_eq!(
        events.last(),
        Some(&EngineEvent::PostalSynced {
            postal_code: postal("10120"),
        })
    );
    assert_eq!(e.selection().postal_text, "10120");
    assert_eq!(e.mode(), Mode::Manual);
}

#[test]
fn user_province_pick_always_means_manual() {
    let mut e = engine();
    e.edit_postal_text("10500");
    assert_eq!(e.options().districts.len(), 2);

    e.select_province(Some(BANGKOK), true);
    assert_eq!(e.mode(), Mode::Manual);
    // Districts now come from the whole table.
    assert_eq!(e.options().districts.len(), 3);

    // Picking again while already manual keeps it manual and emits no change.
    let events = e.select_province(Some(BANGKOK), true);
    assert!(!events
        .iter()
        .any(|ev| matches!(ev, EngineEvent::ModeChanged { .. })));
    assert_eq!(e.mode(), Mode::Manual);
}

#[test]
fn clearing_a_province_clears_the_levels_below() {
    let mut e = engine();
    e.edit_postal_text("50180");

    let events = e.select_province(None, true);
    assert!(events.contains(&EngineEvent::LevelCleared {
        level: Level::District
    }));
    assert!(events.contains(&EngineEvent::LevelCleared {
        level: Level::Subdistrict
    }));
    assert_eq!(e.mode(), Mode::ZipDriven);
    assert_eq!(e.selection().province, None);
    assert_eq!(e.selection().district, None);
    assert!(!e.options().districts.enabled);
}

#[test]
fn non_user_selection_keeps_zip_mode_and_is_repeatable() {
    let mut e = engine();
    e.edit_postal_text("11000");

    e.select_province(Some(NONTHABURI), false);
    let first = e.options().districts.clone();
    e.select_province(Some(NONTHABURI), false);
    assert_eq!(e.options().districts, first);

    assert_eq!(e.mode(), Mode::ZipDriven);
    // Only Mueang Nonthaburi carries 11000, so the cascade runs to the bottom.
    assert_eq!(e.selection().district, Some(1201));
    assert_eq!(e.selection().subdistrict, Some(120102));
}

#[test]
fn unknown_postal_code_reports_no_match_and_changes_nothing() {
    let mut e = engine();
    e.edit_postal_text("10500");
    let before = e.state().clone();

    let events = after_suggestions(e.edit_postal_text("99999"));
    assert_eq!(
        events,
        vec![EngineEvent::NoMatch {
            postal_code: postal("99999"),
        }]
    );

    let mut after = e.state().clone();
    assert_eq!(after.selection.postal_text, "99999");
    after.selection.postal_text = before.selection.postal_text.clone();
    assert_eq!(after, before);
}

#[test]
fn malformed_postal_text_is_reported_not_cascaded() {
    let mut e = engine();

    let events = after_suggestions(e.edit_postal_text("01234"));
    assert_eq!(
        events,
        vec![EngineEvent::InvalidFormat {
            text: "01234".into(),
            reason: PostalCodeError::LeadingZero,
        }]
    );

    let events = after_suggestions(e.edit_postal_text("105001"));
    assert!(matches!(
        events.as_slice(),
        [EngineEvent::InvalidFormat {
            reason: PostalCodeError::WrongLength(6),
            ..
        }]
    ));
    assert!(e.state().zip_records.is_empty());
    assert!(!e.options().provinces.enabled);
}

#[test]
fn non_digits_are_dropped_before_anything_else() {
    let mut e = engine();
    let events = e.edit_postal_text("10-5a00");
    assert_eq!(e.selection().postal_text, "10500");
    assert!(events
        .iter()
        .any(|ev| matches!(ev, EngineEvent::PostalConfirmed { .. })));
}

#[test]
fn emptying_the_postal_field_resets_everything() {
    let mut e = engine();
    e.edit_postal_text("10500");
    e.select_district(Some(SATHON), true);
    e.set_address_line(AddressField::HouseNo, "12");

    let events = e.edit_postal_text("");
    assert_eq!(events, vec![EngineEvent::Reset]);
    assert_eq!(e.mode(), Mode::ZipDriven);
    assert!(e.state().zip_records.is_empty());
    assert_eq!(e.selection().province, None);
    assert_eq!(e.selection().postal_text, "");
    assert!(!e.options().provinces.enabled);
    assert_eq!(e.options().provinces.len(), 4);
    assert_eq!(e.address_lines().house_no, "12");

    // Non-digit garbage counts as empty too.
    assert_eq!(e.edit_postal_text("abc"), vec![EngineEvent::Reset]);
}

#[test]
fn shortening_a_confirmed_code_keeps_the_hierarchy() {
    let mut e = engine();
    e.edit_postal_text("50180");
    let selection = e.selection().clone();

    e.edit_postal_text("5018");
    assert_eq!(e.selection().subdistrict, selection.subdistrict);
    assert_eq!(e.selection().postal_text, "5018");
}

#[test]
fn codes_outside_the_current_list_are_rejected() {
    let mut e = engine();
    e.edit_postal_text("10500");

    let events = e.select_district(Some(MAE_RIM), true);
    assert_eq!(
        events,
        vec![EngineEvent::Rejected {
            level: Level::District,
            code: Some(MAE_RIM),
            reason: RejectReason::UnknownCode,
        }]
    );
    assert_eq!(e.mode(), Mode::ZipDriven);
}

#[test]
fn locale_switch_relabels_without_touching_selection() {
    let mut e = engine();
    e.edit_postal_text("50180");
    e.select_province(Some(CHIANG_MAI), true);
    e.select_district(Some(MAE_RIM), true);
    let selection = e.selection().clone();

    let th: Vec<_> = e.options().districts.items.iter().map(|d| d.code).collect();
    assert_eq!(th, vec![MUEANG_CHIANG_MAI, MAE_RIM]);

    assert_eq!(
        e.set_locale(Locale::En),
        vec![EngineEvent::LocaleChanged { locale: Locale::En }]
    );
    let en: Vec<_> = e.options().districts.items.iter().map(|d| d.code).collect();
    assert_eq!(en, vec![MAE_RIM, MUEANG_CHIANG_MAI]);
    assert_eq!(e.selection(), &selection);
    assert_eq!(e.mode(), Mode::Manual);

    let view = e.view();
    assert_eq!(view.districts.options[0].display_name, "Mae Rim");
    assert_eq!(view.provinces.options[0].display_name, "Chiang Mai");
}

#[test]
fn locale_switch_rederives_from_the_same_subset() {
    let mut e = engine();
    e.edit_postal_text("10500");
    e.select_district(Some(SATHON), true);
    assert_eq!(e.mode(), Mode::Manual);

    // The district list was built from the 10500 records; relabeling must
    // not widen it to all of Bangkok.
    e.set_locale(Locale::En);
    assert_eq!(e.options().districts.len(), 2);
    assert_eq!(e.options().subdistricts.len(), 2);
}

#[test]
fn locale_switch_keeps_the_initial_list_inert() {
    let mut e = engine();
    e.set_locale(Locale::En);
    assert!(!e.options().provinces.enabled);
    assert_eq!(e.options().provinces.items[0].name.en, "Bangkok");
}

#[test]
fn manual_subdistrict_round_trips_through_its_postal_code() {
    let mut e = engine();
    e.edit_postal_text("10330");
    e.select_province(Some(BANGKOK), true);
    e.select_district(Some(BANG_RAK), true);
    e.select_subdistrict(Some(SI_LOM), true);
    assert_eq!(e.selection().postal_text, "10500");

    e.edit_postal_text("10500");
    assert_eq!(e.mode(), Mode::ZipDriven);
    assert!(e
        .active_subset()
        .iter()
        .any(|r| r.subdistrict_code == SI_LOM));
}

#[test]
fn choosing_a_suggestion_confirms_it() {
    let mut e = engine();
    e.edit_postal_text("103");
    let events = e.choose_suggestion("10330");
    assert!(matches!(
        events.first(),
        Some(EngineEvent::PostalConfirmed { records: 2, .. })
    ));
    assert_eq!(e.selection().postal_text, "10330");
    assert_eq!(e.selection().district, Some(PATHUM_WAN));
    assert_eq!(e.options().subdistricts.len(), 2);

    let events = e.choose_suggestion("1033");
    assert!(matches!(
        events.as_slice(),
        [EngineEvent::InvalidFormat { .. }]
    ));
}

#[test]
fn snapshot_and_validation_follow_the_selection() {
    let mut e = engine();
    let issues = e.validate();
    assert_eq!(issues.len(), 5);

    e.edit_postal_text("50180");
    e.set_address_line(AddressField::HouseNo, " 99/1 ");
    e.set_address_line(AddressField::Moo, "4");
    assert!(e.validate().is_empty());

    let snap = e.snapshot();
    assert_eq!(snap.house_no, "99/1");
    assert_eq!(snap.province_name, "เชียงใหม่");
    assert_eq!(snap.subdistrict_name, "ริมใต้");
    assert_eq!(snap.format_display(), "99/1 ริมใต้ แม่ริม เชียงใหม่ 50180");

    e.set_locale(Locale::En);
    assert_eq!(
        e.snapshot().format_display(),
        "99/1 Rim Tai Mae Rim Chiang Mai 50180"
    );

    e.edit_postal_text("5018");
    assert!(e
        .validate()
        .iter()
        .any(|i| matches!(i, FieldIssue::InvalidPostalCode { .. })));
}

#[test]
fn events_serialize_with_a_kind_tag() {
    let event = EngineEvent::AutoSelected {
        level: Level::District,
        code: MAE_RIM,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "autoSelected", "level": "district", "code": MAE_RIM})
    );
}

#[test]
fn dispatch_replays_queued_inputs() {
    let inputs: Vec<EngineInput> = serde_json::from_str(
        r#"[
            {"kind":"editPostalText","text":"10500"},
            {"kind":"select","level":"district","code":1028},
            {"kind":"select","level":"subdistrict","code":102803},
            {"kind":"setAddressLine","field":"houseNo","value":"12"},
            {"kind":"setLocale","locale":"en"}
        ]"#,
    )
    .unwrap();

    let mut e = engine();
    let mut direct = engine();
    for input in inputs {
        e.dispatch(input);
    }
    direct.edit_postal_text("10500");
    direct.select_district(Some(SATHON), true);
    direct.select_subdistrict(Some(THUNG_MAHA_MEK), true);
    direct.set_address_line(AddressField::HouseNo, "12");
    direct.set_locale(Locale::En);

    assert_eq!(e.state(), direct.state());
    assert_eq!(e.snapshot(), direct.snapshot());
    assert_eq!(e.mode(), Mode::Manual);
    assert_eq!(
        e.snapshot().format_display(),
        "12 Thung Maha Mek Sathon Bangkok 10120"
    );
}

#[test]
fn view_counts_records_of_the_confirmed_code_after_a_sync() {
    let mut e = engine();
    e.edit_postal_text("10500");
    e.select_district(Some(SATHON), true);
    e.select_subdistrict(Some(THUNG_MAHA_MEK), true);

    let view = e.view();
    assert_eq!(view.postal_text, "10120");
    assert_eq!(view.zip_record_count, 4);
    assert_eq!(e.table().records().records_matching_postal("10120").len(), 1);
}
