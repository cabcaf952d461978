//! Report requests for the two triage questionnaires.
//!
//! Scores and risk levels arrive already computed; this module only turns
//! them, the collaborator's personal data and the recorded answers into the
//! sections of a downloadable document.

use serde::{Deserialize, Serialize};

use crate::builder::PdfBuilder;
use crate::model::{DocumentRequest, Section};

pub const OCCUPATIONAL_FILENAME: &str = "triagem-ocupacional-demo.pdf";
pub const PSYCHOSOCIAL_FILENAME: &str = "triagem-psicossocial-demo.pdf";

pub const OCCUPATIONAL_TITLE: &str = "Relatório demonstrativo: Triagem Ocupacional";
pub const PSYCHOSOCIAL_TITLE: &str = "Relatório demonstrativo: Triagem Psicossocial";

const COLLABORATOR_HEADING: &str = "Informações do colaborador";
const SUMMARY_HEADING: &str = "Resumo do resultado";
const NEXT_STEPS_HEADING: &str = "Próximos passos sugeridos";
const RESPONSES_HEADING: &str = "Respostas registradas";

const NOT_INFORMED: &str = "Não informado";
const NOT_INFORMED_FEMININE: &str = "Não informada";
const NO_PERSONAL_INFO: &str = "Dados pessoais não informados nesta sessão.";
const NO_ANSWER: &str = "Sem resposta";

/// Personal fields collected before a questionnaire. Blank values count as missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub function_role: Option<String>,
    pub sector: Option<String>,
    pub age: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Outcome of the occupational questionnaire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationalResult {
    pub score: u32,
    pub level: String,
    pub priority: String,
    pub next_steps: Vec<String>,
}

/// Outcome of the psychosocial questionnaire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychosocialResult {
    pub score: u32,
    pub level: String,
    pub suggestion: String,
}

/// A question and the answer recorded for it, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
}

impl Response {
    pub fn new(question: impl Into<String>, answer: Option<&str>) -> Self {
        Self {
            question: question.into(),
            answer: answer.map(str::to_string),
        }
    }
}

/// A document request together with the file name it should be saved under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRequest {
    pub filename: &'static str,
    pub request: DocumentRequest,
}

impl ReportRequest {
    /// Returns a builder with default layout for this report.
    pub fn builder(&self) -> PdfBuilder {
        PdfBuilder::from_request(self.request.clone())
    }
}

fn field_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
}

/// Itemised personal data with "not informed" fallbacks for every field.
pub fn collaborator_lines(info: Option<&PersonalInfo>) -> Vec<String> {
    let info = info.cloned().unwrap_or_default();

    vec![
        format!("Nome: {}", field_or(info.name.as_deref(), NOT_INFORMED)),
        format!(
            "Função: {}",
            field_or(info.function_role.as_deref(), NOT_INFORMED)
        ),
        format!("Setor: {}", field_or(info.sector.as_deref(), NOT_INFORMED)),
        format!(
            "Idade: {}",
            field_or(info.age.as_deref(), NOT_INFORMED_FEMININE)
        ),
        format!("Telefone: {}", field_or(info.phone.as_deref(), NOT_INFORMED)),
        format!("E-mail: {}", field_or(info.email.as_deref(), NOT_INFORMED)),
    ]
}

fn response_line(index: usize, question: &str, label: &str) -> String {
    format!("Q{}: {} — Resposta: {}", index + 1, question, label)
}

/// Maps the yes/no codes of the occupational form to display labels.
pub fn occupational_answer_label(answer: Option<&str>) -> &'static str {
    match answer {
        Some("sim") => "Sim",
        Some("nao") => "Não",
        _ => NO_ANSWER,
    }
}

/// Builds the occupational triage report.
///
/// Without personal data the collaborator section carries a single notice
/// instead of the itemised fallbacks.
pub fn occupational_report(
    info: Option<&PersonalInfo>,
    result: &OccupationalResult,
    responses: &[Response],
) -> ReportRequest {
    let collaborator = match info {
        Some(_) => collaborator_lines(info),
        None => vec![NO_PERSONAL_INFO.to_string()],
    };

    let summary = [
        format!("Pontuação total: {}", result.score),
        format!("Nível de risco: {}", result.level),
        format!("Prioridade: {}", result.priority),
    ];

    let answers = responses.iter().enumerate().map(|(index, response)| {
        let label = occupational_answer_label(response.answer.as_deref());
        response_line(index, &response.question, label)
    });

    let request = DocumentRequest::new(OCCUPATIONAL_TITLE)
        .with_section(Section::new(COLLABORATOR_HEADING).with_items(collaborator))
        .with_section(Section::new(SUMMARY_HEADING).with_items(summary))
        .with_section(
            Section::new(NEXT_STEPS_HEADING).with_items(result.next_steps.iter().cloned()),
        )
        .with_section(Section::new(RESPONSES_HEADING).with_items(answers));

    ReportRequest {
        filename: OCCUPATIONAL_FILENAME,
        request,
    }
}

/// Builds the psychosocial triage report.
pub fn psychosocial_report(
    info: Option<&PersonalInfo>,
    result: &PsychosocialResult,
    responses: &[Response],
) -> ReportRequest {
    let summary = [
        format!("Pontuação total: {}", result.score),
        format!("Nível de risco: {}", result.level),
        format!("Sugestão de acompanhamento: {}", result.suggestion),
    ];

    let answers = responses.iter().enumerate().map(|(index, response)| {
        let label = field_or(response.answer.as_deref(), NO_ANSWER);
        response_line(index, &response.question, label)
    });

    let request = DocumentRequest::new(PSYCHOSOCIAL_TITLE)
        .with_section(Section::new(COLLABORATOR_HEADING).with_items(collaborator_lines(info)))
        .with_section(Section::new(SUMMARY_HEADING).with_items(summary))
        .with_section(Section::new(RESPONSES_HEADING).with_items(answers));

    ReportRequest {
        filename: PSYCHOSOCIAL_FILENAME,
        request,
    }
}
