use std::sync::Once;

use coletor_core::{
    update, CustomFieldInput, JobForm, Msg, SessionState, Seniority, Severity, Stage, Trigger,
    WorkMode,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(coletor_logging::initialize_for_tests);
}

fn started() -> SessionState {
    update(SessionState::new(), Msg::StartEmptyClicked).0
}

fn engineer_form() -> JobForm {
    JobForm {
        titulo: "Engineer".into(),
        requisitos: "Python; Go".into(),
        ..Default::default()
    }
}

fn in_review() -> SessionState {
    update(started(), Msg::FormSubmitted(engineer_form())).0
}

#[test]
fn start_empty_enters_form_stage() {
    init_logging();
    let mut state = started();
    assert_eq!(state.stage(), Stage::Form);
    assert_eq!(state.collection().unwrap().len(), 0);
    assert!(state.consume_dirty());
    assert!(!state.view().can_export);
}

#[test]
fn start_empty_ignored_once_started() {
    init_logging();
    let (state, _) = update(started(), Msg::FormSubmitted(engineer_form()));
    let (state, _) = update(state, Msg::CommitClicked);
    let (mut state, _) = update(state, Msg::StartEmptyClicked);
    state.consume_dirty();

    let (mut next, effects) = update(state, Msg::StartEmptyClicked);
    assert_eq!(next.collection().unwrap().len(), 1);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn form_without_title_or_company_is_rejected() {
    init_logging();
    let state = started();
    let (state, effects) = update(
        state,
        Msg::FormSubmitted(JobForm {
            cidade_trabalho: "Recife".into(),
            ..Default::default()
        }),
    );

    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::Form);
    assert!(state.pending().is_none());
    assert_eq!(state.collection().unwrap().len(), 0);
    let notice = state.notice().unwrap();
    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(
        notice.text,
        "Preencha ao menos o título ou a empresa para adicionar a vaga."
    );
}

#[test]
fn form_with_title_builds_pending_record() {
    init_logging();
    let state = in_review();

    assert_eq!(state.stage(), Stage::Review);
    let pending = state.pending().unwrap();
    assert_eq!(pending["titulo"], json!("Engineer"));
    assert_eq!(pending["empresa"], json!(""));
    assert_eq!(pending["requisitos"], json!(["Python", "Go"]));
    assert_eq!(pending["responsabilidades"], json!([]));
    assert_eq!(pending["senioridade"], json!("Estágio"));
    assert_eq!(pending["forma_trabalho"], json!("Presencial"));
}

#[test]
fn company_alone_is_enough() {
    init_logging();
    let form = JobForm {
        empresa: "ACME".into(),
        senioridade: Seniority::Other,
        senioridade_outro: "Tech Lead".into(),
        forma_trabalho: WorkMode::Remoto,
        ..Default::default()
    };
    let (state, _) = update(started(), Msg::FormSubmitted(form));
    let pending = state.pending().unwrap();
    assert_eq!(pending["senioridade"], json!("Tech Lead"));
    assert_eq!(pending["forma_trabalho"], json!("Remoto"));
}

#[test]
fn commit_appends_and_resets_to_form() {
    init_logging();
    let (state, _) = update(in_review(), Msg::AddCustomFieldClicked);
    let expected = Value::Object(state.pending().unwrap().clone());

    let (state, effects) = update(state, Msg::CommitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::Form);
    assert_eq!(state.collection().unwrap(), &[expected]);
    assert!(state.pending().is_none());
    assert_eq!(state.extra_field_count(), 0);
    let notice = state.notice().unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.text, "Vaga adicionada com sucesso ao arquivo!");
}

#[test]
fn duplicate_commits_are_kept_in_order() {
    init_logging();
    let (state, _) = update(in_review(), Msg::CommitClicked);
    let (state, _) = update(state, Msg::FormSubmitted(engineer_form()));
    let (state, _) = update(state, Msg::CommitClicked);
    let second = JobForm {
        empresa: "Beta".into(),
        ..Default::default()
    };
    let (state, _) = update(state, Msg::FormSubmitted(second));
    let (state, _) = update(state, Msg::CommitClicked);

    let collection = state.collection().unwrap();
    assert_eq!(collection.len(), 3);
    assert_eq!(collection[0], collection[1]);
    assert_eq!(collection[2]["empresa"], json!("Beta"));
}

#[test]
fn custom_fields_skip_empty_names() {
    init_logging();
    let (state, _) = update(in_review(), Msg::AddCustomFieldClicked);
    let (state, _) = update(state, Msg::AddCustomFieldClicked);
    assert_eq!(state.extra_field_count(), 2);

    let (state, _) = update(
        state,
        Msg::CustomFieldsConfirmed(vec![
            CustomFieldInput::new("level", "senior"),
            CustomFieldInput::new("", "x"),
        ]),
    );

    let pending = state.pending().unwrap();
    assert_eq!(pending["level"], json!("senior"));
    assert!(!pending.values().any(|v| v == &json!("x")));
    assert_eq!(pending.len(), 11);
    assert_eq!(state.notice().unwrap().severity, Severity::Info);
}

#[test]
fn later_confirms_add_and_overwrite_but_never_remove() {
    init_logging();
    let (state, _) = update(in_review(), Msg::AddCustomFieldClicked);
    let (state, _) = update(
        state,
        Msg::CustomFieldsConfirmed(vec![CustomFieldInput::new("level", "pleno")]),
    );
    let (state, _) = update(state, Msg::AddCustomFieldClicked);
    let (state, _) = update(
        state,
        Msg::CustomFieldsConfirmed(vec![
            CustomFieldInput::new("level", "senior"),
            CustomFieldInput::new("salario", ""),
        ]),
    );
    let (state, _) = update(
        state,
        Msg::CustomFieldsConfirmed(vec![CustomFieldInput::default(), CustomFieldInput::default()]),
    );

    let pending = state.pending().unwrap();
    assert_eq!(pending["level"], json!("senior"));
    assert_eq!(pending["salario"], json!(""));
}

#[test]
fn custom_field_may_overwrite_fixed_field() {
    init_logging();
    let (state, _) = update(in_review(), Msg::AddCustomFieldClicked);
    let (state, _) = update(
        state,
        Msg::CustomFieldsConfirmed(vec![CustomFieldInput::new("titulo", "Staff Engineer")]),
    );
    let (state, _) = update(state, Msg::CommitClicked);
    assert_eq!(state.collection().unwrap()[0]["titulo"], json!("Staff Engineer"));
}

#[test]
fn commit_refused_when_custom_fields_erase_identity() {
    init_logging();
    let (state, _) = update(in_review(), Msg::AddCustomFieldClicked);
    let (state, _) = update(
        state,
        Msg::CustomFieldsConfirmed(vec![CustomFieldInput::new("titulo", "")]),
    );
    let (state, _) = update(state, Msg::CommitClicked);

    assert_eq!(state.stage(), Stage::Review);
    assert_eq!(state.collection().unwrap().len(), 0);
    assert_eq!(state.notice().unwrap().severity, Severity::Warning);
}

#[test]
fn back_to_form_discards_pending_only() {
    init_logging();
    let (state, _) = update(in_review(), Msg::CommitClicked);
    let (state, _) = update(state, Msg::FormSubmitted(engineer_form()));
    let (state, _) = update(state, Msg::AddCustomFieldClicked);

    let (state, _) = update(state, Msg::BackToFormClicked);
    assert_eq!(state.stage(), Stage::Form);
    assert!(state.pending().is_none());
    assert_eq!(state.extra_field_count(), 0);
    assert_eq!(state.collection().unwrap().len(), 1);
}

#[test]
fn review_actions_ignored_in_form_stage() {
    init_logging();
    let state = started();
    for msg in [
        Msg::AddCustomFieldClicked,
        Msg::CommitClicked,
        Msg::BackToFormClicked,
        Msg::CustomFieldsConfirmed(vec![CustomFieldInput::new("a", "b")]),
    ] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }
}

#[test]
fn form_submission_ignored_before_start_and_during_review() {
    init_logging();
    let fresh = SessionState::new();
    let (next, _) = update(fresh.clone(), Msg::FormSubmitted(engineer_form()));
    assert_eq!(next, fresh);

    let review = in_review();
    let other = JobForm {
        titulo: "Other".into(),
        ..Default::default()
    };
    let (next, _) = update(review.clone(), Msg::FormSubmitted(other));
    assert_eq!(next.pending(), review.pending());
}

#[test]
fn clear_data_returns_to_uninitialized() {
    init_logging();
    let state = update(
        SessionState::new(),
        Msg::FileUploaded {
            filename: "v.json".into(),
            bytes: br#"[{"titulo": "A"}]"#.to_vec(),
        },
    )
    .0;
    let (state, _) = update(state, Msg::FormSubmitted(engineer_form()));
    let (state, _) = update(state, Msg::AddCustomFieldClicked);

    let (state, _) = update(state, Msg::ClearDataClicked);
    assert_eq!(state.stage(), Stage::Uninitialized);
    assert!(state.collection().is_none());
    assert!(state.pending().is_none());
    assert_eq!(state.extra_field_count(), 0);
    assert_eq!(state.source_filename(), "");

    let (next, _) = update(state.clone(), Msg::ClearDataClicked);
    assert_eq!(next, state);
}

#[test]
fn view_exposes_stage_fields_and_triggers() {
    init_logging();
    let view = SessionState::new().view();
    assert_eq!(view.stage, Stage::Uninitialized);
    assert_eq!(view.record_count, None);
    assert_eq!(view.triggers, vec![Trigger::Upload, Trigger::StartEmpty]);

    let (state, _) = update(in_review(), Msg::AddCustomFieldClicked);
    let view = state.view();
    assert_eq!(view.stage, Stage::Review);
    assert_eq!(view.record_count, Some(0));
    assert_eq!(view.extra_field_count, 1);
    assert!(view.fields.iter().any(|f| f.name == "campo_valor_0"));
    assert!(view.triggers.contains(&Trigger::Commit));
    assert!(!view.triggers.contains(&Trigger::Download));
    let preview = view.pending_preview.unwrap();
    assert!(preview.contains("    \"titulo\": \"Engineer\""));

    let (state, _) = update(state, Msg::CommitClicked);
    let view = state.view();
    assert!(view.can_export);
    assert!(view.triggers.contains(&Trigger::Download));
    assert!(view.fields.iter().any(|f| f.name == "nome_download"));
}
