//! End-to-end tests for the slot engine: the documented protocol
//! properties that deployed profile files and firmware dumps rely on.

use flip_at_protocol::{CommandRegistry, DeviceLine};
use flip_slots::{
    display_slot, store_slot, BindingTable, DumpCollector, FieldValue, Slot, SlotManager,
};

fn engine() -> (BindingTable, CommandRegistry) {
    (BindingTable::standard(), CommandRegistry::standard())
}

#[test]
fn test_baseline_roundtrip_is_stable() {
    let (mut table, registry) = engine();
    display_slot(&Slot::baseline("mouse"), &mut table, &registry).unwrap();

    let stored = store_slot("mouse", &table, &registry).unwrap();

    let mut restored = BindingTable::standard();
    display_slot(&stored, &mut restored, &registry).unwrap();
    assert_eq!(restored, table);

    let stored_again = store_slot("mouse", &restored, &registry).unwrap();
    assert_eq!(stored_again.lines, stored.lines);
}

#[test]
fn test_stored_slot_has_22_button_lines() {
    let (mut table, registry) = engine();
    // Bind a mix of parameterless, text and numeric actions.
    table.set_button_action(1, "Wheel Up");
    table.set_button_action(2, "Write Text");
    table.set_button_text(2, "abc");
    table.set_button_action(3, "Move Mouse X");
    table.set_button_number(3, 12);

    let slot = store_slot("s", &table, &registry).unwrap();
    let first_selector = slot.lines.iter().position(|l| l.starts_with("AT BM")).unwrap();
    assert_eq!(slot.lines.len() - first_selector, 22);
}

#[test]
fn test_every_selectable_action_roundtrips_on_a_button() {
    let (_, registry) = engine();
    let actions: Vec<&str> = registry.selectable_descriptions().collect();

    for action in actions {
        let mut table = BindingTable::standard();
        table.set_button_action(5, action);
        table.set_button_number(5, 7);
        table.set_button_text(5, "KEY_HOME ");

        let slot = store_slot("probe", &table, &registry).unwrap();
        let mut restored = BindingTable::standard();
        display_slot(&slot, &mut restored, &registry).unwrap();

        let FieldValue::Choice { action: restored_action, .. } =
            &restored.get("AT BM 05").unwrap().value
        else {
            panic!("expected a choice field");
        };
        assert_eq!(restored_action, action, "action '{action}' did not roundtrip");
    }
}

#[test]
fn test_device_dump_feeds_the_engine() {
    // A captured load-all exchange: ack, one slot, end marker.
    let capture = [
        "OK",
        "SLOT:office",
        "AT AX 55",
        "AT AY 55",
        "AT DX 100",
        "AT DY 100",
        "AT TS 400",
        "AT TP 700",
        "AT SM 720",
        "AT HM 280",
        "AT GU 60",
        "AT GD 60",
        "AT GL 60",
        "AT GR 60",
        "AT MM 0",
        "AT BM 01",
        "AT KW hello",
        "AT BM 02",
        "AT CL",
        "END",
    ];

    let mut collector = DumpCollector::new();
    for line in capture {
        collector.feed(line);
    }
    assert!(collector.is_complete());
    let slots = collector.into_slots();
    assert_eq!(slots.len(), 1);

    let (mut table, registry) = engine();
    let readout = display_slot(&slots[0], &mut table, &registry).unwrap();
    assert_eq!(readout.speed, 55);
    assert_eq!(readout.deadzone, 100);
    assert!(!readout.split_axes);
    assert_eq!(table.get("AT MM").unwrap().value.primary(), Some(false));

    let FieldValue::Choice { action, text, .. } = &table.get("AT BM 01").unwrap().value else {
        panic!("expected a choice field");
    };
    assert_eq!(action, "Write Text");
    assert_eq!(text, "hello");
}

#[test]
fn test_raw_values_classification() {
    let line = DeviceLine::classify("VALUES:512,512,512,512,512").unwrap();
    let DeviceLine::RawValues(values) = line else {
        panic!("expected raw values");
    };
    assert_eq!(
        [values.pressure, values.up, values.down, values.left, values.right],
        [512; 5]
    );
}

#[test]
fn test_manager_deletion_leaves_other_slots_untouched() {
    let (mut table, registry) = engine();
    let mut manager = SlotManager::new();

    manager.add_slot().unwrap();
    table.set_slider("AT AX", 99);
    table.set_slider("AT AY", 99);
    table.set_slider("AT DX", 5);
    table.set_slider("AT DY", 5);
    let custom = store_slot("Slot1", &table, &registry).unwrap();
    manager.replace_active(custom.clone());

    manager.add_slot().unwrap();
    assert_eq!(manager.len(), 3);

    // Delete the just-added clone; the custom slot must be unchanged.
    manager.delete_active().unwrap();
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.active().lines, custom.lines);
}
