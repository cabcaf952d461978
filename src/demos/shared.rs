//! Questionnaire fixtures shared by the demo reports.

use crate::reports::{OccupationalResult, PersonalInfo, PsychosocialResult, Response};

/// Occupational questions in form order.
pub const OCCUPATIONAL_QUESTIONS: [&str; 6] = [
    "Apresenta febre (temperatura acima de 37.8°C)?",
    "Tem dificuldade para respirar ou falta de ar?",
    "Sente dor no peito persistente?",
    "Apresenta tosse intensa ou persistente?",
    "Tem histórico de exposição a agentes químicos ou biológicos?",
    "Sofreu algum acidente ou lesão no trabalho recentemente?",
];

/// Psychosocial questions in form order.
pub const PSYCHOSOCIAL_QUESTIONS: [&str; 6] = [
    "Com que frequência você se sente esgotado ou sem energia ao final do dia?",
    "Com que frequência você tem dificuldade para dormir ou acorda cansado?",
    "Você sente que tem controle sobre a forma como realiza seu trabalho?",
    "Você acorda com dor na mandíbula ou nos músculos da face?",
    "Você tem notado que range ou aperta os dentes durante o dia?",
    "Você tem tido dores de cabeça frequentes que parecem vir da região da têmpora?",
];

pub fn sample_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: Some("Maria da Conceição".to_string()),
        function_role: Some("Técnica de laboratório".to_string()),
        sector: Some("Análises clínicas".to_string()),
        age: Some("34".to_string()),
        phone: Some("(11) 98765-4321".to_string()),
        email: None,
    }
}

pub fn sample_occupational() -> (OccupationalResult, Vec<Response>) {
    let answers = [Some("nao"), Some("sim"), Some("nao"), Some("sim"), Some("sim"), None];
    let responses = OCCUPATIONAL_QUESTIONS
        .iter()
        .zip(answers)
        .map(|(question, answer)| Response::new(*question, answer))
        .collect();

    let result = OccupationalResult {
        score: 7,
        level: "Risco Moderado".to_string(),
        priority: "Prioritário".to_string(),
        next_steps: vec![
            "Agendar avaliação presencial em até 48h".to_string(),
            "Monitorar sinais diariamente".to_string(),
            "Reforçar medidas preventivas no posto de trabalho".to_string(),
        ],
    };
    (result, responses)
}

pub fn sample_psychosocial() -> (PsychosocialResult, Vec<Response>) {
    let answers = [
        Some("Frequentemente"),
        Some("Raramente"),
        Some("Sempre"),
        Some("Não"),
        Some("Sim"),
        None,
    ];
    let responses = PSYCHOSOCIAL_QUESTIONS
        .iter()
        .zip(answers)
        .map(|(question, answer)| Response::new(*question, answer))
        .collect();

    let result = PsychosocialResult {
        score: 6,
        level: "Médio Risco".to_string(),
        suggestion: "Recomendada teleorientação com profissional de saúde.".to_string(),
    };
    (result, responses)
}
