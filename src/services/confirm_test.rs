use uuid::Uuid;

use super::*;

#[test]
fn assembly_dialog_text() {
    let id = Uuid::new_v4();
    let d = ConfirmDialog::delete_assembly(id, "Kitchen Blind");
    assert_eq!(d.title, "Delete: Kitchen Blind");
    assert_eq!(d.message, "Delete local assembly \"Kitchen Blind\"?");
    assert_eq!(d.action, PendingAction::DeleteAssembly { id, name: "Kitchen Blind".into() });
}

#[test]
fn component_dialog_text() {
    let id = Uuid::new_v4();
    let d = ConfirmDialog::delete_component(id, "Headrail");
    assert_eq!(d.title, "Delete: Headrail");
    assert_eq!(d.message, "Delete component \"Headrail\" from local library?");
    assert_eq!(d.action, PendingAction::DeleteComponent { id, name: "Headrail".into() });
}

#[test]
fn confirm_takes_pending_action() {
    let id = Uuid::new_v4();
    let mut slot = ConfirmSlot::new();
    assert!(slot.confirm().is_none());

    slot.open(ConfirmDialog::delete_component(id, "Chain"));
    assert!(slot.is_open());
    assert_eq!(slot.confirm(), Some(PendingAction::DeleteComponent { id, name: "Chain".into() }));
    assert!(!slot.is_open());
    assert!(slot.confirm().is_none());
}

#[test]
fn cancel_drops_request() {
    let mut slot = ConfirmSlot::new();
    slot.open(ConfirmDialog::delete_assembly(Uuid::new_v4(), "Den"));
    assert!(slot.cancel().is_some());
    assert!(slot.current().is_none());
    assert!(slot.confirm().is_none());
}

#[test]
fn opening_replaces_previous_dialog() {
    let mut slot = ConfirmSlot::new();
    let first = ConfirmDialog::delete_assembly(Uuid::new_v4(), "Den");
    let second = ConfirmDialog::delete_component(Uuid::new_v4(), "Chain");

    assert!(slot.open(first.clone()).is_none());
    assert_eq!(slot.open(second.clone()), Some(first));
    assert_eq!(slot.current(), Some(&second));
}
