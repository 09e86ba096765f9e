use std::sync::Once;

use grocer_core::{update, Effect, FrequencyTable, Mode, Msg, Session};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn started_session() -> Session {
    let table = FrequencyTable::from_text("apple banana apple apple banana cherry");
    let (state, effects) = update(Session::new(table), Msg::Started);
    assert_eq!(effects, vec![Effect::ShowMenu]);
    state
}

fn choose(state: Session, raw: &str) -> (Session, Vec<Effect>) {
    update(state, Msg::ChoiceEntered(raw.to_string()))
}

#[test]
fn lookup_prompts_then_reports_count() {
    init_logging();
    let (state, effects) = choose(started_session(), "1");
    assert_eq!(state.mode(), Mode::AwaitingItem);
    assert_eq!(effects, vec![Effect::PromptItem]);

    let (state, effects) = update(state, Msg::ItemEntered("apple".to_string()));
    assert_eq!(state.mode(), Mode::AwaitingChoice);
    assert_eq!(
        effects,
        vec![
            Effect::ReportFrequency {
                item: "apple".to_string(),
                count: 3,
            },
            Effect::ShowMenu,
        ]
    );
    assert_eq!(state.view().completed_cycles, 1);
}

#[test]
fn lookup_of_unknown_item_reports_zero() {
    init_logging();
    let (state, _) = choose(started_session(), "1");
    let (_state, effects) = update(state, Msg::ItemEntered("durian".to_string()));

    assert_eq!(
        effects[0],
        Effect::ReportFrequency {
            item: "durian".to_string(),
            count: 0,
        }
    );
}

#[test]
fn list_and_histogram_return_to_menu() {
    init_logging();
    let (state, effects) = choose(started_session(), "2");
    assert_eq!(effects, vec![Effect::ListAll, Effect::ShowMenu]);
    assert_eq!(state.mode(), Mode::AwaitingChoice);

    let (state, effects) = choose(state, "3");
    assert_eq!(effects, vec![Effect::Histogram, Effect::ShowMenu]);
    assert_eq!(state.mode(), Mode::AwaitingChoice);
    assert_eq!(state.view().completed_cycles, 2);
}

#[test]
fn non_numeric_choice_discards_line_without_counting() {
    init_logging();
    let (state, effects) = choose(started_session(), "abc");

    assert_eq!(
        effects,
        vec![Effect::InvalidInput, Effect::DiscardLine, Effect::ShowMenu]
    );
    assert_eq!(state.mode(), Mode::AwaitingChoice);
    assert_eq!(state.view().completed_cycles, 0);
}

#[test]
fn out_of_range_choice_is_reported() {
    init_logging();
    let (state, effects) = choose(started_session(), "7");

    assert_eq!(effects, vec![Effect::InvalidChoice, Effect::ShowMenu]);
    assert_eq!(state.mode(), Mode::AwaitingChoice);
    assert_eq!(state.view().completed_cycles, 1);
}

#[test]
fn invalid_input_then_exit() {
    init_logging();
    let (state, first) = choose(started_session(), "abc");
    let (state, second) = choose(state, "4");

    let invalid_count = first
        .iter()
        .chain(second.iter())
        .filter(|effect| **effect == Effect::InvalidInput)
        .count();
    assert_eq!(invalid_count, 1);
    assert_eq!(second, vec![Effect::Farewell]);
    assert_eq!(state.mode(), Mode::Exited);
}

#[test]
fn input_closed_exits_silently_from_any_mode() {
    init_logging();
    let (state, effects) = update(started_session(), Msg::InputClosed);
    assert_eq!(state.mode(), Mode::Exited);
    assert!(effects.is_empty());

    let (state, _) = choose(started_session(), "1");
    let (state, effects) = update(state, Msg::InputClosed);
    assert_eq!(state.mode(), Mode::Exited);
    assert!(effects.is_empty());
}

#[test]
fn messages_for_another_mode_are_ignored() {
    init_logging();
    let state = started_session();
    let (next, effects) = update(state.clone(), Msg::ItemEntered("apple".to_string()));
    assert_eq!(next, state);
    assert!(effects.is_empty());

    let (awaiting_item, _) = choose(state, "1");
    let (next, effects) = choose(awaiting_item.clone(), "2");
    assert_eq!(next, awaiting_item);
    assert!(effects.is_empty());
}

#[test]
fn view_summarises_table() {
    init_logging();
    let view = started_session().view();

    assert_eq!(view.mode, Mode::AwaitingChoice);
    assert_eq!(view.distinct_items, 3);
    assert_eq!(view.total_items, 6);
    assert_eq!(view.completed_cycles, 0);
}

#[test]
fn trailing_characters_after_a_choice_are_unread() {
    init_logging();
    let (state, effects) = choose(started_session(), "2x");
    assert_eq!(
        effects,
        vec![
            Effect::Unread("x".to_string()),
            Effect::ListAll,
            Effect::ShowMenu,
        ]
    );
    assert_eq!(state.view().completed_cycles, 1);

    let (state, effects) = choose(state, "x");
    assert_eq!(
        effects,
        vec![Effect::InvalidInput, Effect::DiscardLine, Effect::ShowMenu]
    );
    assert_eq!(state.view().completed_cycles, 1);
}

#[test]
fn lookup_choice_can_carry_the_item() {
    init_logging();
    let (state, effects) = choose(started_session(), "1cherry");
    assert_eq!(
        effects,
        vec![Effect::Unread("cherry".to_string()), Effect::PromptItem]
    );
    assert_eq!(state.mode(), Mode::AwaitingItem);
}
