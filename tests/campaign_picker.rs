use mailcaster::ui::components::CampaignPickerComponent;

fn picker_with(names: &[&str]) -> CampaignPickerComponent {
    let mut picker = CampaignPickerComponent::new();
    picker.set_campaigns(names.iter().map(|s| s.to_string()).collect());
    picker
}

#[test]
fn test_empty_until_campaigns_loaded() {
    let picker = CampaignPickerComponent::new();
    assert!(picker.is_empty());
    assert!(picker.visible_names().is_empty());
    assert!(picker.checked_names().is_empty());
}

#[test]
fn test_filter_matches_case_insensitively() {
    let mut picker = picker_with(&["Spring Launch", "summer sale", "Autumn"]);

    picker.set_filter("S");
    assert_eq!(picker.visible_names(), vec!["Spring Launch", "summer sale"]);

    picker.set_filter("sale");
    assert_eq!(picker.visible_names(), vec!["summer sale"]);

    picker.set_filter("");
    assert_eq!(picker.visible_names().len(), 3);
}

#[test]
fn test_filter_always_runs_against_full_set() {
    let mut picker = picker_with(&["Alpha", "Beta", "Gamma"]);

    // Narrow, then widen: items excluded by the first filter come back
    picker.set_filter("alp");
    assert_eq!(picker.visible_names(), vec!["Alpha"]);

    picker.set_filter("a");
    assert_eq!(picker.visible_names(), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_checks_survive_filtering() {
    let mut picker = picker_with(&["Alpha", "Beta"]);

    picker.toggle_highlighted(); // checks Alpha
    assert_eq!(picker.checked_names(), vec!["Alpha"]);

    // Filter Alpha out and back in; the check remains
    picker.set_filter("beta");
    assert_eq!(picker.checked_names(), vec!["Alpha"]);
    picker.set_filter("");
    assert_eq!(picker.checked_names(), vec!["Alpha"]);
}

#[test]
fn test_select_all_acts_on_visible_subset_only() {
    let mut picker = picker_with(&["Alpha", "Beta", "Gamma"]);

    picker.set_filter("a");
    picker.set_filter("alpha");
    picker.select_all_visible();
    assert_eq!(picker.checked_names(), vec!["Alpha"]);

    picker.set_filter("");
    picker.select_all_visible();
    assert_eq!(picker.checked_names(), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_clear_all_spares_filtered_out_items() {
    let mut picker = picker_with(&["Alpha", "Beta"]);
    picker.select_all_visible();
    assert_eq!(picker.checked_names().len(), 2);

    picker.set_filter("beta");
    picker.clear_all_visible();

    // Alpha was not rendered, so it stays checked
    assert_eq!(picker.checked_names(), vec!["Alpha"]);
}

#[test]
fn test_checked_names_keep_fetched_order() {
    let mut picker = picker_with(&["Zeta", "Alpha", "Mid"]);
    picker.select_all_visible();
    assert_eq!(picker.checked_names(), vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_refetch_replaces_list_and_drops_checks() {
    let mut picker = picker_with(&["Old A", "Old B"]);
    picker.select_all_visible();
    assert_eq!(picker.checked_names().len(), 2);

    picker.set_campaigns(vec!["New".to_string()]);
    assert!(picker.checked_names().is_empty());
    assert_eq!(picker.visible_names(), vec!["New"]);
}

#[test]
fn test_toggle_highlighted_flips_state() {
    let mut picker = picker_with(&["Only"]);
    picker.toggle_highlighted();
    assert_eq!(picker.checked_names(), vec!["Only"]);
    picker.toggle_highlighted();
    assert!(picker.checked_names().is_empty());
}
