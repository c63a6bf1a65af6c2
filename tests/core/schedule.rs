use board_core::errors::ScheduleError;
use board_core::schedule::{
    DEFAULT_EVENT_COLOR, EventDraft, EventSchedule, ModalButton, ModalMode, Visibility,
    can_modify, modal_buttons,
};

use crate::helpers::{date, date_time, timed_draft};

#[test]
fn valid_draft_passes_validation() {
    let draft = timed_draft(
        date_time(2026, 8, 27, 10, 0),
        date_time(2026, 8, 27, 11, 30),
    );

    assert_eq!(draft.color, DEFAULT_EVENT_COLOR);
    assert_eq!(draft.visibility, Visibility::Private);
    draft.validate().expect("draft is well formed");
}

#[test]
fn blank_title_is_rejected() {
    let mut draft = timed_draft(
        date_time(2026, 8, 27, 10, 0),
        date_time(2026, 8, 27, 11, 0),
    );
    draft.title = "   ".to_string();

    assert!(matches!(draft.validate(), Err(ScheduleError::EmptyTitle)));
}

#[test]
fn event_cannot_end_before_it_starts() {
    let draft = timed_draft(
        date_time(2026, 8, 27, 11, 0),
        date_time(2026, 8, 27, 10, 0),
    );
    assert!(matches!(
        draft.validate(),
        Err(ScheduleError::EndBeforeStart)
    ));

    let all_day = EventSchedule::AllDay {
        start: date(2026, 8, 27),
        end: date(2026, 8, 26),
    };
    assert!(matches!(
        all_day.validate(),
        Err(ScheduleError::EndBeforeStart)
    ));
}

#[test]
fn zero_length_events_are_allowed() {
    EventSchedule::Timed {
        start: date_time(2026, 8, 27, 10, 0),
        end: date_time(2026, 8, 27, 10, 0),
    }
    .validate()
    .expect("instantaneous event is fine");

    EventSchedule::AllDay {
        start: date(2026, 8, 27),
        end: date(2026, 8, 27),
    }
    .validate()
    .expect("single-day event is fine");
}

#[test]
fn color_must_be_a_hex_triplet() {
    let mut draft = timed_draft(
        date_time(2026, 8, 27, 10, 0),
        date_time(2026, 8, 27, 11, 0),
    );

    for color in ["3788d8", "#37", "#3788dz", "blue", "#3788d8ff"] {
        draft.color = color.to_string();
        assert!(
            matches!(draft.validate(), Err(ScheduleError::InvalidColor(_))),
            "{color:?} should be rejected"
        );
    }

    draft.color = "#FFA500".to_string();
    draft.validate().expect("uppercase hex is fine");
}

#[test]
fn all_day_toggle_drops_and_restores_times() {
    let timed = EventSchedule::Timed {
        start: date_time(2026, 8, 27, 10, 30),
        end: date_time(2026, 8, 28, 16, 45),
    };

    let all_day = timed.into_all_day();
    assert_eq!(
        all_day,
        EventSchedule::AllDay {
            start: date(2026, 8, 27),
            end: date(2026, 8, 28),
        }
    );

    // toggling back applies the working-hours defaults, not the old times
    assert_eq!(
        all_day.into_timed(),
        EventSchedule::Timed {
            start: date_time(2026, 8, 27, 9, 0),
            end: date_time(2026, 8, 28, 18, 0),
        }
    );
}

#[test]
fn toggling_to_the_current_shape_is_a_no_op() {
    let timed = EventSchedule::Timed {
        start: date_time(2026, 8, 27, 10, 30),
        end: date_time(2026, 8, 27, 11, 0),
    };
    assert_eq!(timed.into_timed(), timed);

    let all_day = EventSchedule::AllDay {
        start: date(2026, 8, 27),
        end: date(2026, 8, 27),
    };
    assert_eq!(all_day.into_all_day(), all_day);
}

#[test]
fn calendar_all_day_end_is_exclusive() {
    // a two-day event arrives with the day after its real end
    assert_eq!(
        EventSchedule::from_calendar_all_day(date(2026, 8, 27), Some(date(2026, 8, 29))),
        EventSchedule::AllDay {
            start: date(2026, 8, 27),
            end: date(2026, 8, 28),
        }
    );

    // no end date means a single day
    assert_eq!(
        EventSchedule::from_calendar_all_day(date(2026, 8, 27), None),
        EventSchedule::AllDay {
            start: date(2026, 8, 27),
            end: date(2026, 8, 27),
        }
    );

    // an end at or before the start collapses to a single day
    assert_eq!(
        EventSchedule::from_calendar_all_day(date(2026, 8, 27), Some(date(2026, 8, 27))),
        EventSchedule::AllDay {
            start: date(2026, 8, 27),
            end: date(2026, 8, 27),
        }
    );
}

#[test]
fn server_format_has_no_zone_suffix() {
    let timed = EventSchedule::Timed {
        start: date_time(2026, 3, 1, 9, 30),
        end: date_time(2026, 3, 1, 10, 0),
    };
    assert_eq!(timed.server_start(), "2026-03-01T09:30:00");
    assert_eq!(timed.server_end(), "2026-03-01T10:00:00");

    let all_day = EventSchedule::AllDay {
        start: date(2026, 3, 1),
        end: date(2026, 3, 2),
    };
    assert_eq!(all_day.server_start(), "2026-03-01");
    assert_eq!(all_day.server_end(), "2026-03-02");
}

#[test]
fn set_all_day_follows_the_checkbox() {
    let mut draft = timed_draft(
        date_time(2026, 8, 27, 10, 0),
        date_time(2026, 8, 27, 11, 0),
    );

    draft.set_all_day(true);
    assert!(draft.schedule.is_all_day());

    draft.set_all_day(false);
    assert!(!draft.schedule.is_all_day());
}

#[test]
fn modal_edit_flow_moves_between_view_and_edit() {
    let mode = ModalMode::View;
    assert!(!mode.is_editable());

    let editing = mode.begin_edit().expect("view turns into edit");
    assert_eq!(editing, ModalMode::Edit);
    assert!(editing.is_editable());

    let back = editing.cancel_edit().expect("edit falls back to view");
    assert_eq!(back, ModalMode::View);
}

#[test]
fn invalid_modal_transitions_are_rejected() {
    assert!(matches!(
        ModalMode::Create.begin_edit(),
        Err(ScheduleError::InvalidTransition { mode: "create", .. })
    ));
    assert!(matches!(
        ModalMode::Edit.begin_edit(),
        Err(ScheduleError::InvalidTransition { mode: "edit", .. })
    ));
    assert!(matches!(
        ModalMode::View.cancel_edit(),
        Err(ScheduleError::InvalidTransition { mode: "view", .. })
    ));
}

#[test]
fn create_mode_is_editable_from_the_start() {
    assert!(ModalMode::Create.is_editable());
}

#[test]
fn admins_own_the_public_calendar() {
    assert!(can_modify(true, false, Visibility::Public));
    assert!(!can_modify(false, true, Visibility::Public));
    assert!(can_modify(false, true, Visibility::Private));
    assert!(!can_modify(false, false, Visibility::Private));
    // admins manage public events through the admin calendar only
    assert!(!can_modify(true, true, Visibility::Private));
}

#[test]
fn modal_buttons_follow_mode_and_ownership() {
    assert_eq!(
        modal_buttons(ModalMode::Create, false),
        vec![ModalButton::Cancel, ModalButton::Submit]
    );
    assert_eq!(
        modal_buttons(ModalMode::Edit, true),
        vec![ModalButton::Cancel, ModalButton::Submit]
    );
    assert_eq!(
        modal_buttons(ModalMode::View, true),
        vec![ModalButton::Close, ModalButton::Delete, ModalButton::Edit]
    );
    assert_eq!(
        modal_buttons(ModalMode::View, false),
        vec![ModalButton::Close]
    );
}
