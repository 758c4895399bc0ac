use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::input::{handle_event, handle_key};
use super::{EditorError, Message, Model, Outcome, Phase, PromptTarget, normalize_cursor, update};

fn create_test_model() -> Model<i64> {
    Model::new(vec![26, 10, -13, 17, 3]).unwrap().without_help()
}

fn apply(model: Model<i64>, msgs: impl IntoIterator<Item = Message>) -> Model<i64> {
    msgs.into_iter().fold(model, update)
}

fn type_value(model: Model<i64>, text: &str) -> Model<i64> {
    let model = text
        .chars()
        .fold(model, |m, c| update(m, Message::PromptInput(c)));
    update(model, Message::PromptSubmit)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_new_rejects_empty_sequence() {
    assert_eq!(
        Model::<i64>::new(Vec::new()).unwrap_err(),
        EditorError::EmptySequence
    );
}

#[test]
fn test_new_starts_on_help_with_cursor_at_zero() {
    let model = Model::new(vec![1_i64, 2]).unwrap();
    assert_eq!(model.phase(), &Phase::Help);
    assert_eq!(model.cursor(), 0);
}

#[test]
fn test_highlight_defaults_to_green_and_is_configurable() {
    use crate::ui::style::HighlightColor;

    let model = Model::new(vec![1_i64]).unwrap();
    assert_eq!(model.highlight(), HighlightColor::Green);
    let model = model.with_highlight(HighlightColor::Cyan);
    assert_eq!(model.highlight(), HighlightColor::Cyan);
}

#[test]
fn test_prompt_submit_outside_prompt_keeps_phase() {
    let model = Model::new(vec![1_i64, 2]).unwrap();
    let model = update(model, Message::PromptSubmit);
    assert_eq!(model.phase(), &Phase::Help);
    assert_eq!(model.items(), &[1, 2]);
}

#[test]
fn test_dismiss_help_does_not_dispatch_key() {
    let model = Model::new(vec![1_i64, 2, 3]).unwrap();
    let msg = handle_key(key(KeyCode::Right), &model);
    assert_eq!(msg, Some(Message::DismissHelp));

    let model = update(model, msg.unwrap());
    assert_eq!(model.phase(), &Phase::Browsing);
    assert_eq!(model.cursor(), 0, "the dismissing key must not move the cursor");
}

#[test]
fn test_browse_messages_ignored_on_help_screen() {
    let model = Model::new(vec![1_i64, 2, 3]).unwrap();
    let model = update(model, Message::MoveRight);
    let model = update(model, Message::DeleteCurrent);
    assert_eq!(model.cursor(), 0);
    assert_eq!(model.items(), &[1, 2, 3]);
    assert_eq!(model.phase(), &Phase::Help);
}

#[test]
fn test_move_right_advances_cursor() {
    let model = apply(create_test_model(), [Message::MoveRight, Message::MoveRight]);
    assert_eq!(model.cursor(), 2);
}

#[test]
fn test_move_left_from_start_wraps_to_end() {
    let model = update(create_test_model(), Message::MoveLeft);
    assert_eq!(model.cursor(), 4);
}

#[test]
fn test_move_right_from_end_wraps_to_start() {
    let model = apply(create_test_model(), [Message::MoveLeft, Message::MoveRight]);
    assert_eq!(model.cursor(), 0);
}

#[test]
fn test_delete_removes_current_item() {
    let model = apply(create_test_model(), [Message::MoveRight, Message::DeleteCurrent]);
    assert_eq!(model.items(), &[26, -13, 17, 3]);
    assert_eq!(model.cursor(), 1);
}

#[test]
fn test_delete_last_item_wraps_cursor_to_start() {
    let model = apply(create_test_model(), [Message::MoveLeft, Message::DeleteCurrent]);
    assert_eq!(model.items(), &[26, 10, -13, 17]);
    assert_eq!(model.cursor(), 0);
}

#[test]
fn test_delete_refused_on_single_item() {
    let model = Model::new(vec![1_i64]).unwrap().without_help();
    let model = update(model, Message::DeleteCurrent);
    assert_eq!(model.items(), &[1]);
    assert_eq!(model.cursor(), 0);
}

#[test]
fn test_edit_current_opens_replace_prompt() {
    let model = update(create_test_model(), Message::EditCurrent);
    let prompt = model.prompt().unwrap();
    assert_eq!(prompt.target, PromptTarget::Replace);
    assert!(prompt.input.is_empty());
}

#[test]
fn test_edit_current_replaces_only_cursor_item() {
    let model = apply(create_test_model(), [Message::MoveRight, Message::EditCurrent]);
    let model = type_value(model, "99");
    assert_eq!(model.items(), &[26, 99, -13, 17, 3]);
    assert_eq!(model.cursor(), 1);
    assert_eq!(model.phase(), &Phase::Browsing);
}

#[test]
fn test_append_adds_value_at_end_and_keeps_cursor() {
    let model = apply(create_test_model(), [Message::MoveRight, Message::AppendNew]);
    let model = type_value(model, "5");
    assert_eq!(model.items().len(), 6);
    assert_eq!(model.items()[5], 5);
    assert_eq!(model.cursor(), 1);
}

#[test]
fn test_invalid_prompt_text_falls_back_to_zero() {
    let model = update(create_test_model(), Message::EditCurrent);
    let model = type_value(model, "abc");
    assert_eq!(model.items()[0], 0);
}

#[test]
fn test_empty_prompt_falls_back_to_zero() {
    let model = update(create_test_model(), Message::AppendNew);
    let model = update(model, Message::PromptSubmit);
    assert_eq!(model.items().last(), Some(&0));
}

#[test]
fn test_prompt_backspace_erases_last_char() {
    let model = update(create_test_model(), Message::EditCurrent);
    let model = apply(
        model,
        [
            Message::PromptInput('1'),
            Message::PromptInput('2'),
            Message::PromptBackspace,
        ],
    );
    assert_eq!(model.prompt().unwrap().input, "1");
    let model = update(model, Message::PromptSubmit);
    assert_eq!(model.items()[0], 1);
}

#[test]
fn test_browse_messages_ignored_while_prompting() {
    let model = update(create_test_model(), Message::EditCurrent);
    let model = apply(model, [Message::MoveRight, Message::DeleteCurrent, Message::Confirm]);
    assert!(model.prompt().is_some());
    assert_eq!(model.cursor(), 0);
    assert_eq!(model.items().len(), 5);
}

#[test]
fn test_confirm_finishes_session() {
    let model = update(create_test_model(), Message::Confirm);
    assert!(model.is_finished());
    assert_eq!(model.outcome(), Some(Outcome::Confirmed));
}

#[test]
fn test_interrupt_from_any_phase() {
    let model = update(create_test_model(), Message::EditCurrent);
    let model = update(model, Message::Interrupt);
    assert_eq!(model.outcome(), Some(Outcome::Interrupted));
}

#[test]
fn test_redraw_changes_nothing() {
    let model = update(create_test_model(), Message::MoveRight);
    let model = update(model, Message::Redraw);
    assert_eq!(model.cursor(), 1);
    assert_eq!(model.items(), &[26, 10, -13, 17, 3]);
}

#[test]
fn test_normalize_cursor_folds_negative_index() {
    assert_eq!(normalize_cursor(5, -1), 4);
    assert_eq!(normalize_cursor(5, 5), 0);
    assert_eq!(normalize_cursor(1, 0), 0);
}

#[test]
fn test_browsing_key_bindings() {
    let model = create_test_model();
    let cases = [
        (KeyCode::Right, Some(Message::MoveRight)),
        (KeyCode::Left, Some(Message::MoveLeft)),
        (KeyCode::Char(' '), Some(Message::EditCurrent)),
        (KeyCode::Tab, Some(Message::AppendNew)),
        (KeyCode::Delete, Some(Message::DeleteCurrent)),
        (KeyCode::Backspace, Some(Message::DeleteCurrent)),
        (KeyCode::Enter, Some(Message::Confirm)),
        (KeyCode::Char('x'), None),
        (KeyCode::Up, None),
        (KeyCode::Esc, None),
    ];
    for (code, expected) in cases {
        assert_eq!(handle_key(key(code), &model), expected, "key {code:?}");
    }
}

#[test]
fn test_prompt_key_bindings() {
    let model = update(create_test_model(), Message::EditCurrent);
    assert_eq!(
        handle_key(key(KeyCode::Char(' ')), &model),
        Some(Message::PromptInput(' '))
    );
    assert_eq!(
        handle_key(key(KeyCode::Backspace), &model),
        Some(Message::PromptBackspace)
    );
    assert_eq!(
        handle_key(key(KeyCode::Enter), &model),
        Some(Message::PromptSubmit)
    );
    assert_eq!(handle_key(key(KeyCode::Right), &model), None);
}

#[test]
fn test_ctrl_c_interrupts() {
    let model = create_test_model();
    let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(handle_key(event, &model), Some(Message::Interrupt));
}

#[test]
fn test_key_release_is_ignored() {
    let model = create_test_model();
    let mut event = key(KeyCode::Right);
    event.kind = KeyEventKind::Release;
    assert_eq!(handle_key(event, &model), None);
}

#[test]
fn test_resize_event_requests_redraw() {
    let model = create_test_model();
    assert_eq!(
        handle_event(&Event::Resize(80, 24), &model),
        Some(Message::Redraw)
    );
}

#[test]
fn test_scenario_edit_and_append() {
    let model = Model::new(vec![26_i64, 10, -13, 17, 3]).unwrap();
    let keys = [
        KeyCode::Char('?'), // dismisses help
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Char(' '),
        KeyCode::Char('9'),
        KeyCode::Char('9'),
        KeyCode::Enter,
        KeyCode::Tab,
        KeyCode::Char('5'),
        KeyCode::Enter,
        KeyCode::Enter,
    ];
    let mut model = model;
    for code in keys {
        if let Some(msg) = handle_key(key(code), &model) {
            model = update(model, msg);
        }
    }
    assert_eq!(model.outcome(), Some(Outcome::Confirmed));
    assert_eq!(model.into_items(), vec![26, 10, 99, 17, 3, 5]);
}

#[test]
fn test_text_items_keep_typed_line() {
    let model = Model::new(vec!["a".to_string()]).unwrap().without_help();
    let model = update(model, Message::EditCurrent);
    let model = " x y".chars().fold(model, |m, c| update(m, Message::PromptInput(c)));
    let model = update(model, Message::PromptSubmit);
    assert_eq!(model.items(), &[" x y".to_string()]);
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_message() -> impl Strategy<Value = Message> {
        prop_oneof![
            Just(Message::DismissHelp),
            Just(Message::MoveRight),
            Just(Message::MoveLeft),
            Just(Message::EditCurrent),
            Just(Message::AppendNew),
            Just(Message::DeleteCurrent),
            Just(Message::PromptBackspace),
            Just(Message::PromptSubmit),
            Just(Message::Redraw),
            any::<char>().prop_map(Message::PromptInput),
        ]
    }

    proptest! {
        #[test]
        fn sequence_never_empty_and_cursor_in_range(
            items in prop::collection::vec(any::<i64>(), 1..20),
            msgs in prop::collection::vec(any_message(), 0..200),
        ) {
            let mut model = Model::new(items).unwrap();
            for msg in msgs {
                model = update(model, msg);
                prop_assert!(!model.items().is_empty());
                prop_assert!(model.cursor() < model.items().len());
            }
        }

        #[test]
        fn append_grows_by_one_and_keeps_cursor(
            items in prop::collection::vec(any::<i64>(), 1..20),
            moves in 0..40usize,
            value in any::<i64>(),
        ) {
            let mut model = Model::new(items).unwrap().without_help();
            for _ in 0..moves {
                model = update(model, Message::MoveRight);
            }
            let before_len = model.items().len();
            let before_cursor = model.cursor();

            model = update(model, Message::AppendNew);
            for c in value.to_string().chars() {
                model = update(model, Message::PromptInput(c));
            }
            model = update(model, Message::PromptSubmit);

            prop_assert_eq!(model.items().len(), before_len + 1);
            prop_assert_eq!(model.items()[before_len], value);
            prop_assert_eq!(model.cursor(), before_cursor);
        }

        #[test]
        fn replace_changes_only_cursor_item(
            items in prop::collection::vec(any::<i64>(), 1..20),
            moves in 0..40usize,
            value in any::<i64>(),
        ) {
            let mut model = Model::new(items).unwrap().without_help();
            for _ in 0..moves {
                model = update(model, Message::MoveLeft);
            }
            let before = model.items().to_vec();
            let cursor = model.cursor();

            model = update(model, Message::EditCurrent);
            for c in value.to_string().chars() {
                model = update(model, Message::PromptInput(c));
            }
            model = update(model, Message::PromptSubmit);

            for (idx, item) in model.items().iter().enumerate() {
                if idx == cursor {
                    prop_assert_eq!(*item, value);
                } else {
                    prop_assert_eq!(*item, before[idx]);
                }
            }
        }
    }
}
