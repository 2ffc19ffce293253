use super::*;

fn filled() -> EventForm {
    EventForm {
        title: "Friday Test & Tune".to_owned(),
        track_id: "t-2".to_owned(),
        date: "2026-06-05".to_owned(),
        start_time: "18:30".to_owned(),
        description: String::new(),
        max_entrants: String::new(),
    }
}

#[test]
fn validate_builds_request() {
    let request = filled().validate().unwrap();
    assert_eq!(request.date, "2026-06-05");
    assert_eq!(request.start_time.as_deref(), Some("18:30"));
    assert_eq!(request.description, None);
    assert_eq!(request.max_entrants, None);
}

#[test]
fn validate_requires_title_track_and_date() {
    assert_eq!(EventForm::default().validate(), Err("Enter an event title."));
    let no_track = EventForm {
        track_id: " ".to_owned(),
        ..filled()
    };
    assert_eq!(no_track.validate(), Err("Select a track."));
    let no_date = EventForm {
        date: String::new(),
        ..filled()
    };
    assert_eq!(no_date.validate(), Err("Pick an event date."));
}

#[test]
fn validate_rejects_malformed_date() {
    for bad in ["06/05/2026", "2026-13-01", "2026-6-5", "2026-06-00"] {
        let form = EventForm {
            date: bad.to_owned(),
            ..filled()
        };
        assert_eq!(form.validate(), Err("Pick an event date."), "{bad}");
    }
}

#[test]
fn validate_parses_entrant_cap() {
    let form = EventForm {
        max_entrants: " 32 ".to_owned(),
        ..filled()
    };
    assert_eq!(form.validate().unwrap().max_entrants, Some(32));
    for bad in ["0", "-4", "lots"] {
        let form = EventForm {
            max_entrants: bad.to_owned(),
            ..filled()
        };
        assert_eq!(form.validate(), Err("Max entrants must be a positive number."), "{bad}");
    }
}
