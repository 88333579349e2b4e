use tui_textarea::Input;
use tui_textarea::Key;

use super::IntakeForm;
use super::IntakeMode;

fn type_text(form: &mut IntakeForm<'static>, text: &str) {
    for char in text.chars() {
        form.input(Input {
            key: Key::Char(char),
            ctrl: false,
            alt: false,
        });
    }
}

#[test]
fn it_cycles_the_focus_through_all_fields() {
    let mut form = IntakeForm::default();
    assert_eq!(form.focus, 0);

    for expected in [1, 2, 3, 4, 0] {
        form.next_field();
        assert_eq!(form.focus, expected);
    }

    form.prev_field();
    assert_eq!(form.focus, 4);
}

#[test]
fn it_maps_fields_to_form_data_in_order() {
    let mut form = IntakeForm::default();

    for text in ["Titel", "Blaupause", "Offline", "Budget", "Herbst"] {
        type_text(&mut form, text);
        form.next_field();
    }

    let data = form.to_form_data();
    assert_eq!(data.title, "Titel");
    assert_eq!(data.description, "Blaupause");
    assert_eq!(data.requirements, "Offline");
    assert_eq!(data.constraints, "Budget");
    assert_eq!(data.additional_info, "Herbst");
}

#[test]
fn it_replaces_the_focused_field_on_import() {
    let mut form = IntakeForm::default();
    form.next_field();
    type_text(&mut form, "alter Inhalt");

    form.set_focused_text("erste Zeile\nzweite Zeile");

    let data = form.to_form_data();
    assert_eq!(data.description, "erste Zeile\nzweite Zeile");
    assert_eq!(data.title, "");
}

#[test]
fn it_switches_between_editing_and_path_entry() {
    let mut form = IntakeForm::default();
    assert_eq!(form.mode, IntakeMode::Editing);

    form.begin_path_entry();
    assert_eq!(form.mode, IntakeMode::PathEntry);
    type_text(&mut form, "/tmp/notizen.txt");
    assert_eq!(form.path(), "/tmp/notizen.txt");

    // Path input must not leak into the form fields.
    assert_eq!(form.to_form_data().title, "");

    form.cancel_path_entry();
    assert_eq!(form.mode, IntakeMode::Editing);

    // A fresh path entry starts empty.
    form.begin_path_entry();
    assert_eq!(form.path(), "");
}
