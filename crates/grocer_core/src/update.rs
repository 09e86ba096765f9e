use crate::{parse_choice, ChoiceError, Effect, MenuChoice, Mode, Msg, Session};

/// Pure update function: applies a message to the session and returns any effects.
pub fn update(mut state: Session, msg: Msg) -> (Session, Vec<Effect>) {
    let effects = match (state.mode(), msg) {
        (Mode::Exited, _) => Vec::new(),
        (_, Msg::InputClosed) => {
            state.set_mode(Mode::Exited);
            Vec::new()
        }
        (Mode::AwaitingChoice, Msg::Started) => vec![Effect::ShowMenu],
        (Mode::AwaitingChoice, Msg::ChoiceEntered(raw)) => {
            let (parsed, rest) = parse_choice(&raw);
            let mut effects: Vec<Effect> = if rest.is_empty() {
                Vec::new()
            } else {
                vec![Effect::Unread(rest.to_owned())]
            };
            match parsed {
                // A rejected token is not a menu cycle.
                Err(ChoiceError::NotANumber) => {
                    return (
                        state,
                        vec![Effect::InvalidInput, Effect::DiscardLine, Effect::ShowMenu],
                    );
                }
                Err(ChoiceError::OutOfRange(_)) => {
                    state.complete_cycle();
                    effects.extend([Effect::InvalidChoice, Effect::ShowMenu]);
                }
                Ok(MenuChoice::Lookup) => {
                    state.set_mode(Mode::AwaitingItem);
                    effects.push(Effect::PromptItem);
                }
                Ok(MenuChoice::ListAll) => {
                    state.complete_cycle();
                    effects.extend([Effect::ListAll, Effect::ShowMenu]);
                }
                Ok(MenuChoice::Histogram) => {
                    state.complete_cycle();
                    effects.extend([Effect::Histogram, Effect::ShowMenu]);
                }
                Ok(MenuChoice::Exit) => {
                    state.complete_cycle();
                    state.set_mode(Mode::Exited);
                    effects.push(Effect::Farewell);
                }
            }
            effects
        }
        (Mode::AwaitingItem, Msg::ItemEntered(item)) => {
            let count = state.table().frequency(&item);
            state.complete_cycle();
            state.set_mode(Mode::AwaitingChoice);
            vec![Effect::ReportFrequency { item, count }, Effect::ShowMenu]
        }
        (Mode::AwaitingChoice, Msg::ItemEntered(_))
        | (Mode::AwaitingItem, Msg::Started | Msg::ChoiceEntered(_)) => Vec::new(),
    };

    (state, effects)
}
