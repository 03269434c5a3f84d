//! Small scenarios shared by the unit tests.

use chronicle_core::{
    Difficulty, Edge, Event, Scenario, ScenarioId, SourceId, SourceKind, SourceNode, Topic,
    TopicId, TransmissionStep, TransmissionType,
};

pub fn node(id: &str, title: &str, year: i32, extant: bool) -> SourceNode {
    SourceNode {
        id: SourceId::from(id),
        kind: SourceKind::Text,
        title: title.into(),
        author_role: "chronicler".into(),
        year,
        place: None,
        extant,
        transmission: Vec::new(),
        description: None,
    }
}

fn topic(id: &str, label: &str, anchor: &str) -> Topic {
    Topic {
        id: TopicId::from(id),
        label: label.into(),
        anchor: SourceId::from(anchor),
    }
}

fn event(id: &str, title: &str, year: i32) -> Event {
    Event {
        id: SourceId::from(id),
        title: title.into(),
        year,
        place: "Constantinople".into(),
        image_url: None,
        description: None,
        composition_info: None,
    }
}

/// Eyewitness n1, n2 behind a lost account, modern study n3 reading both.
pub fn plague() -> Scenario {
    let mut witness = node("n1", "Procopius' History of the Wars", 545, true);
    witness.author_role = "eyewitness historian".into();
    let mut chronicle = node("n2", "Michael the Syrian's Chronicle", 1195, true);
    chronicle.transmission = vec![
        TransmissionStep {
            via: "lost: John of Ephesus' eyewitness account".into(),
            year: 580,
            kind: TransmissionType::Summary,
        },
        TransmissionStep {
            via: "lost: intermediate Syriac chronicle".into(),
            year: 800,
            kind: TransmissionType::Translation,
        },
    ];
    let mut study = node("n3", "Modern epidemiological study", 2020, true);
    study.author_role = "modern historian".into();

    Scenario {
        id: ScenarioId::from("scenario_plague"),
        difficulty: Difficulty::Medium,
        event: event("evt_plague", "Justinianic Plague", 541),
        nodes: vec![
            witness,
            node("lost_john", "John of Ephesus' Lost Account", 580, false),
            chronicle,
            study,
        ],
        edges: vec![
            Edge::new("evt_plague", "n1", "eyewitness"),
            Edge::new("evt_plague", "lost_john", "eyewitness"),
            Edge::new("lost_john", "n2", "transmission_via_lost"),
            Edge::new("n1", "n3", "modern_analysis"),
            Edge::new("n2", "n3", "modern_analysis"),
        ],
        topics: vec![
            topic("t_event", "The plague itself", "evt_plague"),
            topic("t_historiography", "Modern historiography", "n3"),
        ],
    }
}

/// Single-topic scenario: a coin minted at the time and a later history.
pub fn succession() -> Scenario {
    let mut history = node("n1", "Gregory of Tours' Histories", 580, true);
    history.transmission = vec![TransmissionStep {
        via: "lost: oral traditions and court records".into(),
        year: 540,
        kind: TransmissionType::Compilation,
    }];
    let mut coin = node("n2", "Coin of Theuderic", 515, true);
    coin.kind = SourceKind::Artifact;

    Scenario {
        id: ScenarioId::from("scenario_succession"),
        difficulty: Difficulty::Easy,
        event: event("evt_clovis", "Death of Clovis", 511),
        nodes: vec![
            node("lost_records", "Lost Court Records", 540, false),
            history,
            coin,
        ],
        edges: vec![
            Edge::new("evt_clovis", "lost_records", "official_record"),
            Edge::new("lost_records", "n1", "derivative"),
            Edge::new("evt_clovis", "n2", "contemporary_artifact"),
        ],
        topics: vec![topic("t_event", "Clovis' succession", "evt_clovis")],
    }
}
