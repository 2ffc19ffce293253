use super::*;

fn filled() -> CalloutForm {
    CalloutForm {
        title: " Drag Night ".to_owned(),
        track_id: "t-1".to_owned(),
        opponent: "@apex".to_owned(),
        vehicle: "'93 Fox Body".to_owned(),
        race_type: "drag".to_owned(),
        scheduled_date: String::new(),
        notes: "  ".to_owned(),
    }
}

#[test]
fn validate_builds_trimmed_request() {
    let request = filled().validate().unwrap();
    assert_eq!(request.title, "Drag Night");
    assert_eq!(request.opponent, "apex");
    assert_eq!(request.race_type, "drag");
    assert_eq!(request.scheduled_date, None);
    assert_eq!(request.notes, None);
}

#[test]
fn validate_requires_title_first() {
    let form = CalloutForm::default();
    assert_eq!(form.validate(), Err("Enter a callout title."));
}

#[test]
fn validate_requires_track_selection() {
    let form = CalloutForm {
        track_id: String::new(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Select a track."));
}

#[test]
fn validate_requires_opponent_and_vehicle() {
    let form = CalloutForm {
        opponent: "@".to_owned(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Choose an opponent."));
    let form = CalloutForm {
        vehicle: String::new(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Enter your vehicle."));
}

#[test]
fn validate_rejects_unknown_race_type() {
    let form = CalloutForm {
        race_type: "burnout".to_owned(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Select a race type."));
}

#[test]
fn partial_draft_decodes_with_defaults() {
    let form: CalloutForm = serde_json::from_str(r#"{"title":"Drag Night"}"#).unwrap();
    assert_eq!(form.title, "Drag Night");
    assert_eq!(form.race_type, "drag");
    assert!(form.track_id.is_empty());
}
