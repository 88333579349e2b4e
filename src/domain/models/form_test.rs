use super::FormData;

fn fixture() -> FormData {
    return FormData {
        title: "Lagerverwaltung".to_string(),
        description: "Ein System zur Verwaltung von Lagerbeständen.".to_string(),
        requirements: "Muss offline funktionieren.".to_string(),
        constraints: "Budget von 10.000 Euro.".to_string(),
        additional_info: "Go-Live im Herbst.".to_string(),
    };
}

#[test]
fn it_formats_the_context_block() {
    let ctx = fixture().format_context();
    insta::assert_snapshot!(ctx, @r###"
    Projektinformationen:

    Titel: Lagerverwaltung

    Beschreibung:
    Ein System zur Verwaltung von Lagerbeständen.

    Anforderungen:
    Muss offline funktionieren.

    Einschränkungen:
    Budget von 10.000 Euro.

    Weitere Informationen:
    Go-Live im Herbst.
    "###);
}

#[test]
fn it_is_deterministic() {
    let form = fixture();
    assert_eq!(form.format_context(), form.format_context());
}

#[test]
fn it_keeps_the_section_order() {
    let ctx = fixture().format_context();
    let positions = vec![
        ctx.find("Titel:").unwrap(),
        ctx.find("Beschreibung:").unwrap(),
        ctx.find("Anforderungen:").unwrap(),
        ctx.find("Einschränkungen:").unwrap(),
        ctx.find("Weitere Informationen:").unwrap(),
    ];

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn it_renders_all_sections_for_empty_fields() {
    let ctx = FormData::default().format_context();
    assert_eq!(
        ctx,
        "Projektinformationen:\n\nTitel: \n\nBeschreibung:\n\n\nAnforderungen:\n\n\nEinschränkungen:\n\n\nWeitere Informationen:\n"
    );
}
