use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single subsidy disbursement tied to a program and a date.
///
/// Upstream documents use Spanish field names; fields this service does not
/// know about are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    #[serde(rename = "id_programa")]
    pub program_id: i64,
    #[serde(rename = "monto")]
    pub amount: f64,
    /// Display date, DD/MM/YYYY.
    #[serde(rename = "fecha_recepcion")]
    pub received_date: String,
    /// Authoritative date, YYYY-MM-DD. The year key is its first four characters.
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Valid amount range and linked card for one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub id: i64,
    #[serde(rename = "id_programa")]
    pub program_id: i64,
    pub min: f64,
    pub max: f64,
    #[serde(rename = "ficha_id")]
    pub card_id: i64,
}

/// Display metadata shown alongside a benefit ("ficha").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    #[serde(rename = "id_programa")]
    pub program_id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub url: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// A benefit plus its card, when the filter/card chain resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitWithCard {
    #[serde(flatten)]
    pub benefit: Benefit,
    #[serde(rename = "ficha", skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

/// A benefit as it appears inside the year report: annotated with its
/// computed year, a visibility marker and (when resolvable) its card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBenefit {
    #[serde(flatten)]
    pub benefit: Benefit,
    #[serde(rename = "ano")]
    pub year: String,
    pub view: bool,
    #[serde(rename = "ficha", skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

/// One year bucket of the final `/benefits` report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup {
    pub year: i32,
    pub num: usize,
    #[serde(rename = "beneficios")]
    pub benefits: Vec<ReportBenefit>,
}
