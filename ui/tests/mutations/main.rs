mod update;

use booking_ui::EventDraft;
use jiff::Span;
use test_helpers::fixture_start;

/// A one hour talk in the north room.
fn talk_draft() -> EventDraft {
    EventDraft {
        name: "Rust meetup".into(),
        description: "Lightning talks".into(),
        begin_time: fixture_start(),
        end_time: fixture_start() + Span::new().hours(1),
        layout: 1,
        north: true,
        south: false,
        people: Some(40),
    }
}
