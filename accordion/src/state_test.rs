#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// PanelState
// =============================================================

#[test]
fn panel_state_default_is_closed() {
    assert_eq!(PanelState::default(), PanelState::Closed);
    assert!(!PanelState::default().is_open());
}

#[test]
fn panel_state_toggle_flips() {
    assert_eq!(PanelState::Closed.toggled(), PanelState::Open);
    assert_eq!(PanelState::Open.toggled(), PanelState::Closed);
}

#[test]
fn panel_state_double_toggle_is_identity() {
    for s in [PanelState::Closed, PanelState::Open] {
        assert_eq!(s.toggled().toggled(), s);
    }
}

#[test]
fn panel_state_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&PanelState::Open).unwrap(), "\"open\"");
    assert_eq!(serde_json::to_string(&PanelState::Closed).unwrap(), "\"closed\"");
}

// =============================================================
// MaxHeight
// =============================================================

#[test]
fn max_height_css_text() {
    assert_eq!(MaxHeight::Unset.css(), None);
    assert_eq!(MaxHeight::Px(120.0).css().as_deref(), Some("120px"));
    assert_eq!(MaxHeight::Px(12.5).css().as_deref(), Some("12.5px"));
}

#[test]
fn max_height_json_shape() {
    let json = serde_json::to_value(MaxHeight::Px(40.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "px", "px": 40.0 }));
    let json = serde_json::to_value(MaxHeight::Unset).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "unset" }));
}

// =============================================================
// WidgetState
// =============================================================

#[test]
fn open_widget_view_uses_content_height() {
    let w = WidgetState::new(true, Some(88.0));
    let view = w.view().unwrap();
    assert!(view.active);
    assert_eq!(view.max_height, MaxHeight::Px(88.0));
}

#[test]
fn closed_widget_view_is_unset() {
    let w = WidgetState::new(false, Some(88.0));
    let view = w.view().unwrap();
    assert!(!view.active);
    assert_eq!(view.max_height, MaxHeight::Unset);
}

#[test]
fn widget_without_panel_has_no_view() {
    assert!(WidgetState::new(true, None).view().is_none());
    assert!(!WidgetState::new(false, None).has_panel());
}
