use super::*;

// =============================================================
// DashboardState
// =============================================================

#[test]
fn default_state_has_nothing_open() {
    let state = DashboardState::default();
    assert!(!state.modal_open());
    assert!(!state.report_menu_open);
    assert_eq!(state.active_report, None);
}

#[test]
fn stock_modals_are_mutually_exclusive() {
    let mut state = DashboardState::default();
    state.open_stock_in();
    assert!(state.stock_in_open);
    state.open_stock_out();
    assert!(state.stock_out_open);
    assert!(!state.stock_in_open);
    state.close_stock_out();
    assert!(!state.modal_open());
}

#[test]
fn report_menu_toggles() {
    let mut state = DashboardState::default();
    state.toggle_report_menu();
    assert!(state.report_menu_open);
    state.toggle_report_menu();
    assert!(!state.report_menu_open);
}

#[test]
fn selecting_a_report_replaces_the_previous_one() {
    let mut state = DashboardState::default();
    state.select_report(ReportKind::Monthly);
    state.select_report(ReportKind::Supplier);
    assert_eq!(state.active_report, Some(ReportKind::Supplier));
    state.close_report();
    assert_eq!(state.active_report, None);
}

#[test]
fn closing_a_modal_keeps_report_selection() {
    let mut state = DashboardState::default();
    state.select_report(ReportKind::Products);
    state.open_stock_in();
    state.close_stock_in();
    assert_eq!(state.active_report, Some(ReportKind::Products));
}

// =============================================================
// ReportKind
// =============================================================

#[test]
fn report_ids_are_stable_and_round_trip() {
    let ids: Vec<u8> = ReportKind::ALL.iter().map(|k| k.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    for kind in ReportKind::ALL {
        assert_eq!(ReportKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(ReportKind::from_id(0), None);
    assert_eq!(ReportKind::from_id(6), None);
}

#[test]
fn report_labels_are_distinct() {
    for (i, a) in ReportKind::ALL.iter().enumerate() {
        for (j, b) in ReportKind::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

#[test]
fn sidebar_starts_collapsed() {
    assert_eq!(SidebarSection::default(), SidebarSection::None);
}

#[test]
fn sidebar_profile_toggles_open_and_closed() {
    let mut section = SidebarSection::default();
    section.toggle(SidebarSection::Profile);
    assert_eq!(section, SidebarSection::Profile);
    section.toggle(SidebarSection::Profile);
    assert_eq!(section, SidebarSection::None);
}
