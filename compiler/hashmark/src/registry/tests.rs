use super::*;
use pretty_assertions::assert_eq;

#[test]
fn defaults_cover_every_mode() {
    let registry = CommandRegistry::with_defaults();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get(ADD_COMMENTS).unwrap().mode, Mode::Add);
    assert_eq!(registry.get(REMOVE_COMMENTS).unwrap().mode, Mode::Remove);
    assert_eq!(registry.get(FORMAT_COMMENTS).unwrap().mode, Mode::Format);
}

#[test]
fn default_messages() {
    let registry = CommandRegistry::with_defaults();
    assert_eq!(
        registry.get(ADD_COMMENTS).unwrap().message,
        "Add comments command executed"
    );
    assert_eq!(
        registry.get(FORMAT_COMMENTS).unwrap().message,
        "Format comments command executed"
    );
}

#[test]
fn id_for_mode() {
    let registry = CommandRegistry::with_defaults();
    assert_eq!(registry.id_for(Mode::Remove), Some(REMOVE_COMMENTS));
    assert_eq!(CommandRegistry::new().id_for(Mode::Add), None);
}

#[test]
fn every_mode_resolves_to_a_default_id() {
    let registry = CommandRegistry::with_defaults();
    for mode in Mode::ALL {
        let id = registry.id_for(mode).unwrap();
        assert_eq!(registry.get(id).unwrap().mode, mode);
    }
    assert_eq!(registry.id_for(Mode::Add), Some(ADD_COMMENTS));
    assert_eq!(registry.id_for(Mode::Format), Some(FORMAT_COMMENTS));
}

#[test]
fn iter_is_sorted_by_id() {
    let registry = CommandRegistry::with_defaults();
    let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![ADD_COMMENTS, FORMAT_COMMENTS, REMOVE_COMMENTS]);
}

#[test]
fn register_replaces_existing() {
    let mut registry = CommandRegistry::with_defaults();
    let previous = registry.register(ADD_COMMENTS, Command::new(Mode::Remove, "swapped"));
    assert_eq!(previous.unwrap().mode, Mode::Add);
    assert_eq!(registry.get(ADD_COMMENTS).unwrap().mode, Mode::Remove);
    assert_eq!(registry.len(), 3);
}

#[test]
fn custom_command() {
    let mut registry = CommandRegistry::new();
    assert!(registry.is_empty());
    registry.register("my.comment", Command::new(Mode::Add, "done"));
    let out = registry
        .execute("my.comment", "x", &[Selection::all("x")], &FormatConfig::default())
        .unwrap();
    assert_eq!(out, "# x");
}

#[test]
fn execute_runs_mode_over_selections() {
    let registry = CommandRegistry::with_defaults();
    let text = "a\n# b\nc";
    let sel = Selection::from_line_range(text, 2, 2).unwrap();
    let out = registry
        .execute(REMOVE_COMMENTS, text, &[sel], &FormatConfig::default())
        .unwrap();
    assert_eq!(out, "a\nb\nc");
}

#[test]
fn execute_passes_width_through() {
    let registry = CommandRegistry::with_defaults();
    let text = "# one two three";
    let out = registry
        .execute(
            FORMAT_COMMENTS,
            text,
            &[Selection::all(text)],
            &FormatConfig::with_max_width(9),
        )
        .unwrap();
    assert_eq!(out, "# one two\n# three");
}

#[test]
fn execute_unknown_id() {
    let registry = CommandRegistry::with_defaults();
    let err = registry
        .execute("nope", "x", &[], &FormatConfig::default())
        .unwrap_err();
    assert!(matches!(err, CliError::UnknownCommand(ref id) if id == "nope"));
}

#[test]
fn execute_reports_selection_errors() {
    let registry = CommandRegistry::with_defaults();
    let err = registry
        .execute(ADD_COMMENTS, "x", &[Selection::new(0, 5)], &FormatConfig::default())
        .unwrap_err();
    assert!(matches!(err, CliError::Selection(_)));
}
